use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "shelfstore")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "menu", about = "Run the interactive catalog menu")]
    Menu,
    #[command(name = "addgrocery", about = "Add a grocery item to the catalog")]
    Addgrocery {
        #[arg(help = "Item name")]
        name: String,
        #[arg(help = "Price in euros")]
        price: f64,
        #[arg(help = "Expiry date")]
        expiry: String,
    },
    #[command(name = "addelectronics", about = "Add an electronics item to the catalog")]
    Addelectronics {
        #[arg(help = "Item name")]
        name: String,
        #[arg(help = "Price in euros")]
        price: f64,
        #[arg(help = "Warranty in years")]
        warranty: i32,
    },
    #[command(name = "addclothing", about = "Add a clothing item to the catalog")]
    Addclothing {
        #[arg(help = "Item name")]
        name: String,
        #[arg(help = "Price in euros")]
        price: f64,
        #[arg(help = "Garment size")]
        size: String,
    },
    #[command(name = "addbook", about = "Add a book to the catalog")]
    Addbook {
        #[arg(help = "Title")]
        name: String,
        #[arg(help = "Price in euros")]
        price: f64,
        #[arg(help = "Author")]
        author: String,
    },
    #[command(name = "addtoy", about = "Add a toy to the catalog")]
    Addtoy {
        #[arg(help = "Item name")]
        name: String,
        #[arg(help = "Price in euros")]
        price: f64,
        #[arg(help = "Recommended minimum age")]
        age: i32,
    },
    #[command(name = "list", about = "Show all items in insertion order")]
    List {
        #[arg(long, help = "Print the catalog as JSON instead of display lines")]
        json: bool,
    },
    #[command(name = "ranked", about = "Show all items by descending price")]
    Ranked,
}
