//! Pixel store
//!
//! The single owner of pixel data and of the LED driver. Changes become
//! visible on the strip only through [`PixelStore::commit`].

mod pixel_store;

pub use pixel_store::{PixelStore, StoreError};
