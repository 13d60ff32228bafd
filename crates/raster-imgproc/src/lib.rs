#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// utilities to draw on images.
pub mod draw;
