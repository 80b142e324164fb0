// Adapters layer: concrete line sources for the engine.

pub mod file;

pub use file::{FileLineSource, ReaderLineSource};
