use crate::config::TrackDisplayField;

use super::model::Track;

/// Build a one-line description of `track` from the configured `fields`.
///
/// Empty fields are skipped. When nothing is left the file path is used so a
/// listing line is never blank.
pub fn details_from_fields(track: &Track, fields: &[TrackDisplayField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        match f {
            TrackDisplayField::Artist => {
                let a = track.artist().trim();
                if !a.is_empty() {
                    parts.push(a.to_string());
                }
            }
            TrackDisplayField::Title => {
                let t = track.title().trim();
                if !t.is_empty() {
                    parts.push(t.to_string());
                }
            }
            TrackDisplayField::Album => {
                let a = track.album().trim();
                if !a.is_empty() {
                    parts.push(format!("[{a}]"));
                }
            }
            TrackDisplayField::Filename => {
                parts.push(format!("(file: {})", track.filename().display()));
            }
            TrackDisplayField::PlayCount => {
                parts.push(format!("plays: {}", track.play_count()));
            }
        }
    }

    if parts.is_empty() {
        track.filename().display().to_string()
    } else {
        parts.join(sep)
    }
}
