use std::path::Path;

use log::{debug, info};
use lofty::prelude::{Accessor, TaggedFileExt};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{Track, UNKNOWN};

/// Source of tracks for the catalog's startup load.
///
/// Implementations must treat a missing or empty folder as "no tracks", never
/// as an error.
pub trait TrackImporter {
    fn import(&self, folder: &Path, extension: &str) -> Vec<Track>;
}

/// Imports tracks by walking a folder on disk and reading their tags.
#[derive(Debug, Clone, Default)]
pub struct FolderImporter {
    settings: LibrarySettings,
}

impl FolderImporter {
    pub fn new(settings: LibrarySettings) -> Self {
        Self { settings }
    }
}

impl TrackImporter for FolderImporter {
    fn import(&self, folder: &Path, extension: &str) -> Vec<Track> {
        if !folder.is_dir() {
            info!("library folder {} not found, starting empty", folder.display());
            return Vec::new();
        }
        scan(folder, extension, &self.settings)
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Split an `artist-title` file stem. Without a dash the whole stem is the title.
fn split_stem(stem: &str) -> (String, String) {
    match stem.split_once('-') {
        Some((artist, title)) if !artist.trim().is_empty() && !title.trim().is_empty() => {
            (artist.trim().to_string(), title.trim().to_string())
        }
        _ => (UNKNOWN.to_string(), stem.trim().to_string()),
    }
}

fn non_empty(v: Option<std::borrow::Cow<'_, str>>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn read_track(path: &Path) -> Track {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(UNKNOWN);
    let (stem_artist, stem_title) = split_stem(stem);

    let mut artist: Option<String> = None;
    let mut title: Option<String> = None;
    let mut album: Option<String> = None;

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                title = non_empty(tag.title());
                artist = non_empty(tag.artist());
                album = non_empty(tag.album());
            }
        }
        Err(e) => debug!("no tags for {}: {e}", path.display()),
    }

    Track::new(
        path,
        artist.unwrap_or(stem_artist),
        title.unwrap_or(stem_title),
    )
    .with_album(album.unwrap_or_default())
}

pub(super) fn scan(dir: &Path, extension: &str, settings: &LibrarySettings) -> Vec<Track> {
    let wanted = normalize_extension(extension);
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && (wanted.is_empty() || has_extension(path, &wanted))
        {
            tracks.push(read_track(path));
        }
    }

    tracks.sort_by_cached_key(|t| format!("{} - {}", t.artist(), t.title()).to_lowercase());
    info!("imported {} tracks from {}", tracks.len(), dir.display());
    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn has_extension_is_case_insensitive() {
        assert!(has_extension(Path::new("/tmp/a.mp3"), "mp3"));
        assert!(has_extension(Path::new("/tmp/a.MP3"), "mp3"));
        assert!(!has_extension(Path::new("/tmp/a.ogg"), "mp3"));
        assert!(!has_extension(Path::new("/tmp/a"), "mp3"));
    }

    #[test]
    fn normalize_extension_strips_dot_and_case() {
        assert_eq!(normalize_extension(".MP3"), "mp3");
        assert_eq!(normalize_extension(" flac "), "flac");
    }

    #[test]
    fn split_stem_uses_first_dash() {
        assert_eq!(
            split_stem("Big Bill Broonzy-How You Want It Done"),
            ("Big Bill Broonzy".to_string(), "How You Want It Done".to_string())
        );
        assert_eq!(
            split_stem("A-B-C"),
            ("A".to_string(), "B-C".to_string())
        );
        assert_eq!(split_stem("lonely"), (UNKNOWN.to_string(), "lonely".to_string()));
        assert_eq!(split_stem("-odd"), (UNKNOWN.to_string(), "-odd".to_string()));
    }

    #[test]
    fn scan_filters_by_extension_and_sorts_case_insensitive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b-two.MP3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("A-one.mp3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("c-three.ogg"), b"wrong extension").unwrap();
        fs::write(dir.path().join("notes.txt"), b"ignore me").unwrap();

        let tracks = scan(dir.path(), ".mp3", &LibrarySettings::default());
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].artist(), "A");
        assert_eq!(tracks[0].title(), "one");
        assert_eq!(tracks[1].artist(), "b");
        assert_eq!(tracks[1].title(), "two");
        assert!(tracks.iter().all(|t| t.play_count() == 0));
    }

    #[test]
    fn scan_respects_include_hidden_false() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden.mp3"), b"not real").unwrap();
        fs::write(dir.path().join("visible.mp3"), b"not real").unwrap();

        let settings = LibrarySettings {
            include_hidden: false,
            ..LibrarySettings::default()
        };
        let tracks = scan(dir.path(), "mp3", &settings);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title(), "visible");
    }

    #[test]
    fn scan_respects_recursive_false() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("child.mp3"), b"not real").unwrap();

        let settings = LibrarySettings {
            recursive: false,
            ..LibrarySettings::default()
        };
        let tracks = scan(dir.path(), "mp3", &settings);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title(), "root");
    }

    #[test]
    fn scan_respects_max_depth() {
        let dir = tempdir().unwrap();
        let d1 = dir.path().join("d1");
        let d2 = d1.join("d2");
        fs::create_dir_all(&d2).unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        fs::write(d1.join("one.mp3"), b"not real").unwrap();
        fs::write(d2.join("two.mp3"), b"not real").unwrap();

        // WalkDir depth counts root as 0, so max_depth=2 stops before d1/d2/*.
        let settings = LibrarySettings {
            max_depth: Some(2),
            ..LibrarySettings::default()
        };
        let titles: Vec<String> = scan(dir.path(), "mp3", &settings)
            .iter()
            .map(|t| t.title().to_string())
            .collect();
        assert!(titles.contains(&"root".to_string()));
        assert!(titles.contains(&"one".to_string()));
        assert!(!titles.contains(&"two".to_string()));
    }

    #[test]
    fn importer_returns_empty_for_missing_folder() {
        let dir = tempdir().unwrap();
        let importer = FolderImporter::default();
        let tracks = importer.import(&dir.path().join("does-not-exist"), "mp3");
        assert!(tracks.is_empty());
    }

    #[test]
    fn importer_returns_empty_for_empty_folder() {
        let dir = tempdir().unwrap();
        let importer = FolderImporter::default();
        assert!(importer.import(dir.path(), "mp3").is_empty());
    }
}
