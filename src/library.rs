//! Track records and the importer that builds them from a folder on disk.
//!
//! `model` holds the `Track` entity, `scan` walks a directory tree and reads
//! tags, and `display` formats a track for listings.

mod display;
mod model;
mod scan;

pub use display::details_from_fields;
pub use model::Track;
pub use scan::{FolderImporter, TrackImporter};

#[cfg(test)]
mod tests;
