//! Data loading and the immutable session snapshot
//!
//! I/O is confined to the one-time load; everything downstream reads the
//! in-memory `Dataset` only.

pub mod dataset;
pub mod loader;

pub use dataset::Dataset;
pub use loader::load_csv;
