// This is my main entry point for the catalog CLI application
use clap::Parser;
use log::{error, LevelFilter};
use shelfstore::{Catalog, Command, Item, Opt, PriceOrderingView, GLOBAL_CONFIG};
use std::process;

fn main() {
    // I initialize logging so I can see what the store is doing
    env_logger::builder().filter_level(LevelFilter::Info).init();

    // I parse the command line arguments using clap
    let opt = Opt::parse();

    // I run the actual command and handle any errors that might occur
    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// Each command loads the catalog from the store file, does its work, and
// saves back when it changed something
fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        // The interactive menu owns its own load/save cycle
        Command::Menu => shelfstore::run_menu()?,
        Command::Addgrocery {
            name,
            price,
            expiry,
        } => add_item(Item::Grocery {
            name,
            price,
            expiry,
        })?,
        Command::Addelectronics {
            name,
            price,
            warranty,
        } => add_item(Item::Electronics {
            name,
            price,
            warranty_years: warranty,
        })?,
        Command::Addclothing { name, price, size } => {
            add_item(Item::Clothing { name, price, size })?
        }
        Command::Addbook {
            name,
            price,
            author,
        } => add_item(Item::Book {
            name,
            price,
            author,
        })?,
        Command::Addtoy { name, price, age } => add_item(Item::Toy {
            name,
            price,
            recommended_age: age,
        })?,
        // When I want to see everything in the order it was added
        Command::List { json } => {
            let catalog = load_catalog()?;
            if json {
                println!("{}", serde_json::to_string_pretty(catalog.items())?);
            } else {
                for line in catalog.show_all() {
                    println!("{line}");
                }
            }
        }
        // When I want to see everything by descending price
        Command::Ranked => {
            let catalog = load_catalog()?;
            for item in PriceOrderingView::build(&catalog) {
                println!("{}", item.display_line());
            }
        }
    }
    Ok(())
}

fn load_catalog() -> Result<Catalog, Box<dyn std::error::Error>> {
    let mut catalog = Catalog::new();
    catalog.load_binary(GLOBAL_CONFIG.get_store_file())?;
    Ok(catalog)
}

fn add_item(item: Item) -> Result<(), Box<dyn std::error::Error>> {
    let store_file = GLOBAL_CONFIG.get_store_file();
    let mut catalog = Catalog::new();
    catalog.load_binary(&store_file)?;
    println!("Added: {}", item.display_line());
    catalog.add(item);
    catalog.save_binary(&store_file)?;
    Ok(())
}
