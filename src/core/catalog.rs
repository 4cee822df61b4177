// This file implements the catalog - the single owner of every item in the store
// Items live in one Vec in insertion order; saving walks that order and loading
// rebuilds it from the store file record by record

use crate::core::codec::{decode_item, encode_item};
use crate::core::item::Item;
use crate::error::Result;
use log::{debug, info};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Ordered, exclusively owned collection of items.
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog { items: Vec::new() }
    }

    /// Append one item. No field validation happens here.
    pub fn add(&mut self, item: Item) {
        debug!("Adding {} item: {}", item.type_tag(), item.name());
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        self.items.as_slice()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lazy iterator of display lines in insertion order. Restartable -
    /// calling it again starts a fresh pass.
    pub fn show_all(&self) -> impl Iterator<Item = String> + '_ {
        self.items.iter().map(Item::display_line)
    }

    /// Write every item to `path`, overwriting whatever was there.
    ///
    /// There is no transactional guarantee: a write failure propagates and
    /// may leave a truncated file behind.
    pub fn save_binary<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(path)?;
        let mut writer = BufWriter::new(file);
        for item in &self.items {
            encode_item(item, &mut writer)?;
        }
        writer.flush()?;
        info!("Saved {} items to {}", self.items.len(), path.display());
        Ok(())
    }

    /// Replace the catalog contents with the records in `path`.
    ///
    /// A missing file loads as an empty catalog. Decode failures propagate
    /// and leave the catalog holding the records read before the failure.
    pub fn load_binary<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.items.clear();
        if !path.exists() {
            info!("No store file at {}, starting empty", path.display());
            return Ok(());
        }

        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        while let Some(item) = decode_item(&mut reader)? {
            self.items.push(item);
        }
        info!("Loaded {} items from {}", self.items.len(), path.display());
        Ok(())
    }
}
