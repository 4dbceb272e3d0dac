//! Menu loop and per-choice handlers.
//!
//! Titles, authors and category names may contain spaces, so everything
//! is read as whole lines; ids are parsed from their own line with a
//! reprompt-free "try again" on bad input.

use colored::Colorize;
use shelf_graph::{Book, BookId, CatalogError, PathOutcome, ShelfGraph};
use std::fs;
use std::io::{self, BufRead, Write};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const MENU: &str = "
 1. Add book
 2. Connect books
 3. Check connection
 4. List connected books
 5. Find shortest path
 6. Modify book
 7. Remove book
 8. Borrow book
 9. Return book
10. List borrowed books
11. List popular books
12. Tag book with category
13. List books by category
14. Catalog summary
15. Export catalog to JSON
 0. Quit";

/// Runs the interactive menu until the user quits.
pub fn run() -> Result<()> {
    let mut shelf = ShelfGraph::new();

    println!("{}", "Welcome to the Shelf catalog".cyan().bold());

    loop {
        println!("{}", MENU);
        let choice = read_line("Choice: ")?;

        let outcome = match choice.trim() {
            "1" => add_book(&mut shelf),
            "2" => connect(&mut shelf),
            "3" => check_connection(&shelf),
            "4" => list_neighbors(&shelf),
            "5" => shortest_path(&shelf),
            "6" => modify_book(&mut shelf),
            "7" => remove_book(&mut shelf),
            "8" => borrow(&mut shelf),
            "9" => return_book(&mut shelf),
            "10" => list_borrowed(&shelf),
            "11" => list_popular(&shelf),
            "12" => tag_book(&mut shelf),
            "13" => list_category(&shelf),
            "14" => summary(&shelf),
            "15" => export(&shelf),
            "0" => {
                println!("Goodbye.");
                return Ok(());
            }
            other => {
                println!("{} unknown choice \"{}\"", "!".yellow(), other.trim());
                Ok(())
            }
        };
        outcome?;
    }
}

/// Prompts and reads one whole line from stdin.
fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Reads a book id; `None` means the input was not a number.
fn read_id(prompt: &str) -> io::Result<Option<BookId>> {
    let line = read_line(prompt)?;
    Ok(line.trim().parse().ok())
}

/// Prints an engine error without aborting the loop.
fn report(error: CatalogError) {
    println!("{} {}", "✗".red(), error);
}

fn print_book(book: &Book) {
    if book.is_tagged() {
        println!(
            "  {} {} by {} [{}]",
            format!("#{}", book.id).cyan(),
            book.title,
            book.author,
            book.category.yellow()
        );
    } else {
        println!(
            "  {} {} by {}",
            format!("#{}", book.id).cyan(),
            book.title,
            book.author
        );
    }
}

fn add_book(shelf: &mut ShelfGraph) -> Result<()> {
    let title = read_line("Title: ")?;
    let author = read_line("Author: ")?;
    let id = shelf.add_book(title, author);
    println!("{} Added book with id {}", "✓".green(), id.to_string().cyan());
    Ok(())
}

fn connect(shelf: &mut ShelfGraph) -> Result<()> {
    let (Some(id1), Some(id2)) = (read_id("First id: ")?, read_id("Second id: ")?) else {
        println!("{} ids must be numbers", "!".yellow());
        return Ok(());
    };
    match shelf.connect(id1, id2) {
        Ok(()) => println!("{} Connected {} and {}", "✓".green(), id1, id2),
        Err(e) => report(e),
    }
    Ok(())
}

fn check_connection(shelf: &ShelfGraph) -> Result<()> {
    let (Some(id1), Some(id2)) = (read_id("First id: ")?, read_id("Second id: ")?) else {
        println!("{} ids must be numbers", "!".yellow());
        return Ok(());
    };
    if shelf.are_connected(id1, id2) {
        println!("Books {} and {} are connected.", id1, id2);
    } else {
        println!("Books {} and {} are not connected.", id1, id2);
    }
    Ok(())
}

fn list_neighbors(shelf: &ShelfGraph) -> Result<()> {
    let Some(id) = read_id("Book id: ")? else {
        println!("{} ids must be numbers", "!".yellow());
        return Ok(());
    };
    match shelf.neighbors_of(id) {
        Ok(neighbors) if neighbors.is_empty() => {
            println!("Book {} has no connections.", id);
        }
        Ok(neighbors) => {
            println!("Books connected to {}:", id);
            for book in neighbors {
                print_book(book);
            }
        }
        Err(e) => report(e),
    }
    Ok(())
}

fn shortest_path(shelf: &ShelfGraph) -> Result<()> {
    let (Some(origin), Some(dest)) = (read_id("Origin id: ")?, read_id("Destination id: ")?)
    else {
        println!("{} ids must be numbers", "!".yellow());
        return Ok(());
    };
    match shelf.shortest_path(origin, dest) {
        Ok(PathOutcome::Found(route)) => {
            println!(
                "Shortest path from {} to {} ({} hops):",
                origin,
                dest,
                route.len() - 1
            );
            for book in &route {
                print_book(book);
            }
        }
        Ok(PathOutcome::NoPath) => {
            println!("There is no path between {} and {}.", origin, dest);
        }
        Err(e) => report(e),
    }
    Ok(())
}

fn modify_book(shelf: &mut ShelfGraph) -> Result<()> {
    let Some(id) = read_id("Book id: ")? else {
        println!("{} ids must be numbers", "!".yellow());
        return Ok(());
    };
    let title = read_line("New title: ")?;
    let author = read_line("New author: ")?;
    let category = read_line("New category: ")?;
    match shelf.modify_book(id, title, author, category) {
        Ok(()) => println!("{} Book {} updated", "✓".green(), id),
        Err(e) => report(e),
    }
    Ok(())
}

fn remove_book(shelf: &mut ShelfGraph) -> Result<()> {
    let Some(id) = read_id("Book id: ")? else {
        println!("{} ids must be numbers", "!".yellow());
        return Ok(());
    };
    match shelf.remove_book(id) {
        Ok(()) => println!(
            "{} Book removed; ids above {} shifted down",
            "✓".green(),
            id
        ),
        Err(e) => report(e),
    }
    Ok(())
}

fn borrow(shelf: &mut ShelfGraph) -> Result<()> {
    let Some(id) = read_id("Book id: ")? else {
        println!("{} ids must be numbers", "!".yellow());
        return Ok(());
    };
    match shelf.borrow(id) {
        Ok(()) => println!("{} Book {} borrowed", "✓".green(), id),
        Err(e) => report(e),
    }
    Ok(())
}

fn return_book(shelf: &mut ShelfGraph) -> Result<()> {
    let Some(id) = read_id("Book id: ")? else {
        println!("{} ids must be numbers", "!".yellow());
        return Ok(());
    };
    match shelf.return_book(id) {
        Ok(()) => println!("{} Book {} returned", "✓".green(), id),
        Err(e) => report(e),
    }
    Ok(())
}

fn list_borrowed(shelf: &ShelfGraph) -> Result<()> {
    let borrowed = shelf.list_borrowed();
    if borrowed.is_empty() {
        println!("No books are borrowed.");
        return Ok(());
    }
    println!("Borrowed books:");
    for book in borrowed {
        print_book(book);
    }
    Ok(())
}

fn list_popular(shelf: &ShelfGraph) -> Result<()> {
    println!("Books ranked by borrowed neighbors:");
    for entry in shelf.rank_by_popularity() {
        println!(
            "  {} {} by {} — {}",
            format!("#{}", entry.book.id).cyan(),
            entry.book.title,
            entry.book.author,
            format!("{} borrowed neighbors", entry.count).yellow()
        );
    }
    Ok(())
}

fn tag_book(shelf: &mut ShelfGraph) -> Result<()> {
    let Some(id) = read_id("Book id: ")? else {
        println!("{} ids must be numbers", "!".yellow());
        return Ok(());
    };
    let category = read_line("Category: ")?;
    match shelf.tag(id, category.clone()) {
        Ok(()) => println!("{} Tagged book {} as \"{}\"", "✓".green(), id, category),
        Err(e) => report(e),
    }
    Ok(())
}

fn list_category(shelf: &ShelfGraph) -> Result<()> {
    let category = read_line("Category: ")?;
    match shelf.list_by_category(&category) {
        Ok(books) if books.is_empty() => {
            println!("Category \"{}\" is empty.", category);
        }
        Ok(books) => {
            println!("Books in \"{}\":", category);
            for book in books {
                print_book(book);
            }
        }
        Err(e) => report(e),
    }
    Ok(())
}

fn summary(shelf: &ShelfGraph) -> Result<()> {
    let stats = shelf.stats();
    println!(
        "{} books, {} connections, {} categories, {} borrowed",
        stats.book_count.to_string().cyan(),
        stats.edge_count.to_string().cyan(),
        stats.categories.to_string().cyan(),
        stats.borrowed.to_string().cyan()
    );
    Ok(())
}

fn export(shelf: &ShelfGraph) -> Result<()> {
    let path = read_line("Output file: ")?;
    let path = if path.is_empty() {
        "shelf-catalog.json".to_string()
    } else {
        path
    };

    let export = serde_json::json!({
        "version": "1.0",
        "stats": shelf.stats(),
        "catalog": shelf,
    });

    fs::write(&path, serde_json::to_string_pretty(&export)?)?;
    println!("{} Exported to {}", "✓".green(), path);
    Ok(())
}
