//! Utilities for creating `rodio` sinks from track files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink};

use super::types::SinkError;

/// Open and decode `path` without touching any output device.
pub(super) fn open_source(path: &Path) -> Result<Decoder<BufReader<File>>, SinkError> {
    let file = File::open(path).map_err(|source| SinkError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|source| SinkError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Create a paused `Sink` for `path` on `handle`'s mixer.
pub(super) fn create_sink(handle: &OutputStream, path: &Path) -> Result<Sink, SinkError> {
    let source = open_source(path)?;

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
