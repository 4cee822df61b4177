//! # Shelfstore - My Item Catalog With Binary Persistence
//!
//! This is my small catalog of shop items that survives restarts by writing
//! itself to a flat binary file. When I come back to this code, here's what
//! I need to remember:
//!
//! ## What I Built
//! - **Five Item Kinds**: Grocery, Electronics, Clothing, Book and Toy,
//!   modeled as one closed enum so every match stays exhaustive
//! - **Binary Wire Format**: length-prefixed text and fixed-width
//!   little-endian numbers, the same layout on every platform
//! - **Record Factory**: each record starts with its type tag; the decoder
//!   reads the tag and reconstructs the right kind, and it can always tell
//!   a finished file from a corrupt one
//! - **Owning Catalog**: one container owns every item in insertion order
//!   and handles save/load against the store file
//! - **Price Ranking**: a borrowed max-heap view that shows items by
//!   descending price without touching catalog order
//!
//! ## How I Organized My Code
//! - `core/`: the item model, wire codec, catalog and price view
//! - `config/`: the store file path and global configuration
//! - `error/`: the error type every fallible operation returns
//! - `cli/`: clap commands plus the interactive menu
//!
//! ## Key Design Decisions I Made
//! - Pinned every number on the wire to little-endian fixed width, because
//!   native memory layout does not round-trip across platforms
//! - Kept clean end-of-file and corrupt-record as two different outcomes;
//!   a truncated store file fails loudly instead of loading short
//! - Made the catalog the only owner of its items; the ranking view just
//!   borrows them for one display pass

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

// Re-export commonly used types for convenience
pub use cli::{run_menu, Command, Opt};
pub use config::{Config, GLOBAL_CONFIG};
pub use core::{decode_item, encode_item, Catalog, Item, PriceOrderingView};
pub use error::{Result, StoreError};
