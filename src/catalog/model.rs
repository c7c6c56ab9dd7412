use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::library::{Track, TrackImporter};

/// Ordered collection of tracks, owned exclusively by this value.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from an already imported sequence of tracks.
    pub fn from_import(tracks: impl IntoIterator<Item = Track>) -> Self {
        let mut catalog = Self::new();
        catalog.extend_from_import(tracks);
        catalog
    }

    /// Load the startup library through `importer`. Never fails: a missing
    /// folder just yields an empty catalog.
    pub fn load(importer: &impl TrackImporter, folder: &Path, extension: &str) -> Self {
        Self::from_import(importer.import(folder, extension))
    }

    /// Append each imported track in order.
    pub fn extend_from_import(&mut self, tracks: impl IntoIterator<Item = Track>) {
        self.tracks.extend(tracks);
    }

    pub fn add_track(&mut self, track: Track) {
        debug!("adding track {}", track.filename().display());
        self.tracks.push(track);
    }

    /// Add a bare file whose artist and title are not known yet.
    pub fn add_file(&mut self, filename: impl Into<PathBuf>) {
        self.add_track(Track::from_file(filename));
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Track> {
        self.tracks
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, self.len()))
    }

    /// Live handle into catalog storage; changes made through it stick.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Track> {
        let len = self.len();
        self.tracks
            .get_mut(index)
            .ok_or_else(|| Error::out_of_range(index, len))
    }

    /// Every track with its current index, in catalog order.
    ///
    /// The iterator is `Clone`, so a listing can be walked more than once.
    pub fn list(&self) -> impl Iterator<Item = (usize, &Track)> + Clone + '_ {
        self.tracks.iter().enumerate()
    }

    /// Tracks whose artist contains `needle` (case-sensitive; "" matches all).
    pub fn find_by_artist<'a>(
        &'a self,
        needle: &'a str,
    ) -> impl Iterator<Item = &'a Track> + 'a {
        self.tracks.iter().filter(move |t| t.artist().contains(needle))
    }

    /// Tracks whose title contains `needle` (case-sensitive; "" matches all).
    pub fn find_by_title<'a>(
        &'a self,
        needle: &'a str,
    ) -> impl Iterator<Item = &'a Track> + 'a {
        self.tracks.iter().filter(move |t| t.title().contains(needle))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Track> {
        if index >= self.len() {
            return Err(Error::out_of_range(index, self.len()));
        }
        let removed = self.tracks.remove(index);
        debug!("removed track {} at {index}", removed.filename().display());
        Ok(removed)
    }

    /// Drop every track whose artist contains `needle`, keeping the relative
    /// order of the rest. Returns how many were removed.
    pub fn remove_by_artist(&mut self, needle: &str) -> usize {
        let before = self.len();
        self.tracks.retain(|t| !t.artist().contains(needle));
        let removed = before - self.len();
        debug!("removed {removed} tracks by artist matching {needle:?}");
        removed
    }

    /// Set the album of the track at `index`.
    ///
    /// Unlike `get` and `remove_at`, an out-of-range index is silently
    /// ignored. Callers have always relied on that, so it stays.
    pub fn set_album(&mut self, index: usize, album: impl Into<String>) {
        match self.tracks.get_mut(index) {
            Some(track) => track.set_album(album),
            None => debug!("ignoring album change for missing index {index}"),
        }
    }
}
