//! Error type shared by the catalog, playback controller and command layer.

use thiserror::Error;

/// Everything that can go wrong in trackshelf.
///
/// `IndexOutOfRange` and `AlreadyPlaying` are business-rule rejections: the
/// runtime reports them and keeps going. Only I/O on the terminal itself is
/// allowed to end the session.
#[derive(Error, Debug)]
pub enum Error {
    /// Index was negative or not below the current track count.
    #[error("index {index} is out of range (catalog has {len} tracks)")]
    IndexOutOfRange { index: i64, len: usize },

    /// A play command arrived while another track is still playing.
    #[error("a track is already playing; stop it before playing another")]
    AlreadyPlaying,

    /// A command line could not be parsed.
    #[error("{0}")]
    Command(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
