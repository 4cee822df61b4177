//! Core catalog functionality
//!
//! This module contains the item model, the binary wire codec and record
//! factory, the owning catalog container, and the descending-price view.

pub mod catalog;
pub mod codec;
pub mod item;
pub mod ranking;

pub use catalog::Catalog;
pub use codec::{decode_item, encode_item};
pub use item::{Item, TAG_BOOK, TAG_CLOTHING, TAG_ELECTRONICS, TAG_GROCERY, TAG_TOY};
pub use ranking::PriceOrderingView;
