//! Commands and errors shared between the device handle and its thread.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug)]
pub enum AudioCmd {
    /// Replace whatever is playing with the given file.
    Play(PathBuf),
    /// Stop playback immediately.
    Stop,
    /// Stop and leave the audio thread.
    Quit,
}

/// Why a file could not be turned into a playable sink.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },
}
