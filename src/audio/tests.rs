use super::sink::open_source;
use super::types::SinkError;
use super::RodioDevice;
use crate::playback::PlaybackDevice;

#[test]
fn open_source_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    match open_source(&dir.path().join("gone.mp3")) {
        Err(err @ SinkError::Open { .. }) => assert!(err.to_string().contains("gone.mp3")),
        Err(other) => panic!("expected an open error, got {other}"),
        Ok(_) => panic!("missing file should not open"),
    }
}

#[test]
fn open_source_reports_undecodable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.mp3");
    std::fs::write(&path, b"definitely not audio").unwrap();
    assert!(matches!(
        open_source(&path),
        Err(SinkError::Decode { .. })
    ));
}

#[test]
fn device_survives_bad_files_and_shuts_down() {
    let dir = tempfile::tempdir().unwrap();
    let mut device = RodioDevice::new();
    device.start(&dir.path().join("gone.mp3"));
    device.stop();
    device.stop();
    device.shutdown();
    // Second shutdown (and the one in Drop) must be harmless.
    device.shutdown();
}
