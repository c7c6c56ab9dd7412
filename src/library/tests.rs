use super::display::details_from_fields;
use super::model::Track;
use crate::config::TrackDisplayField;

fn track() -> Track {
    Track::new("/tmp/music/Artist-Song.mp3", "Artist", "Song")
}

#[test]
fn from_file_defaults_to_unknown() {
    let t = Track::from_file("/tmp/x.mp3");
    assert_eq!(t.artist(), "unknown");
    assert_eq!(t.title(), "unknown");
    assert_eq!(t.album(), "");
    assert_eq!(t.play_count(), 0);
}

#[test]
fn play_count_only_moves_up() {
    let mut t = track();
    t.increment_play_count();
    t.increment_play_count();
    assert_eq!(t.play_count(), 2);
}

#[test]
fn details_from_fields_joins_in_configured_order() {
    let t = track().with_album("Blues");
    assert_eq!(
        details_from_fields(
            &t,
            &[TrackDisplayField::Artist, TrackDisplayField::Title],
            " - ",
        ),
        "Artist - Song"
    );
    assert_eq!(
        details_from_fields(
            &t,
            &[
                TrackDisplayField::Title,
                TrackDisplayField::Album,
                TrackDisplayField::PlayCount,
            ],
            " ",
        ),
        "Song [Blues] plays: 0"
    );
}

#[test]
fn details_from_fields_skips_empty_album_and_falls_back_to_path() {
    let t = Track::new("/tmp/a.mp3", "  ", "");
    assert_eq!(
        details_from_fields(&t, &[TrackDisplayField::Album], " - "),
        "/tmp/a.mp3"
    );
    assert_eq!(
        details_from_fields(&t, &[TrackDisplayField::Filename], " - "),
        "(file: /tmp/a.mp3)"
    );
}
