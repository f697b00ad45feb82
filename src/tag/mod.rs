//! Metadata tagging module.

pub mod jhead;

pub use jhead::{ImageTagger, JheadTagger};
