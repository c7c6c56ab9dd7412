//! The catalog: an ordered, in-memory collection of tracks.
//!
//! Insertion order is the index space. Removing a track shifts every later
//! index down by one.

mod model;

pub use model::*;
