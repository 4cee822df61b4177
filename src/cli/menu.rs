// This is the interactive menu - the same loop the store has always had:
// load the catalog on entry, add items or show them until the user picks
// "save & exit", then write everything back to the store file
// Core failures surface here as printed messages; the loop itself keeps going

use crate::config::GLOBAL_CONFIG;
use crate::core::{Catalog, Item, PriceOrderingView};
use log::warn;
use std::io::{self, Write};

pub fn run_menu() -> Result<(), Box<dyn std::error::Error>> {
    let store_file = GLOBAL_CONFIG.get_store_file();

    let mut catalog = Catalog::new();
    catalog.load_binary(&store_file)?;

    loop {
        println!("\nMenu:");
        println!("1. Add Grocery");
        println!("2. Add Electronics");
        println!("3. Add Clothing");
        println!("4. Add Book");
        println!("5. Add Toy");
        println!("6. Show All");
        println!("7. Save & Exit");

        let choice = match prompt_line("Choice: ")?.trim().parse::<u32>() {
            Ok(n) => n,
            Err(_) => {
                println!("Invalid choice!");
                continue;
            }
        };

        match choice {
            1 => {
                let name = prompt_text("Enter name: ")?;
                let price = prompt_f64("Enter price: ")?;
                let expiry = prompt_text("Enter expiry: ")?;
                catalog.add(Item::Grocery {
                    name,
                    price,
                    expiry,
                });
            }
            2 => {
                let name = prompt_text("Enter name: ")?;
                let price = prompt_f64("Enter price: ")?;
                let warranty_years = prompt_i32("Enter warranty years: ")?;
                catalog.add(Item::Electronics {
                    name,
                    price,
                    warranty_years,
                });
            }
            3 => {
                let name = prompt_text("Enter name: ")?;
                let price = prompt_f64("Enter price: ")?;
                let size = prompt_text("Enter size: ")?;
                catalog.add(Item::Clothing { name, price, size });
            }
            4 => {
                let name = prompt_text("Enter name: ")?;
                let price = prompt_f64("Enter price: ")?;
                let author = prompt_text("Enter author: ")?;
                catalog.add(Item::Book {
                    name,
                    price,
                    author,
                });
            }
            5 => {
                let name = prompt_text("Enter name: ")?;
                let price = prompt_f64("Enter price: ")?;
                let recommended_age = prompt_i32("Enter recommended age: ")?;
                catalog.add(Item::Toy {
                    name,
                    price,
                    recommended_age,
                });
            }
            6 => {
                println!("\n=== All Items ===");
                for line in catalog.show_all() {
                    println!("{line}");
                }

                println!("\n=== By Descending Price ===");
                for item in PriceOrderingView::build(&catalog) {
                    println!("{}", item.display_line());
                }
            }
            7 => break,
            _ => println!("Invalid choice!"),
        }
    }

    catalog.save_binary(&store_file)?;
    println!("\nItems saved successfully!");
    Ok(())
}

fn prompt_line(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn prompt_text(label: &str) -> io::Result<String> {
    Ok(prompt_line(label)?.trim().to_string())
}

// Numeric prompts re-ask until the input parses; a typo should not cost the
// user the whole item they were entering
fn prompt_f64(label: &str) -> io::Result<f64> {
    loop {
        let line = prompt_line(label)?;
        match line.trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!("Rejected price input {:?}: {e}", line.trim());
                println!("Please enter a number.");
            }
        }
    }
}

fn prompt_i32(label: &str) -> io::Result<i32> {
    loop {
        let line = prompt_line(label)?;
        match line.trim().parse::<i32>() {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!("Rejected integer input {:?}: {e}", line.trim());
                println!("Please enter a whole number.");
            }
        }
    }
}
