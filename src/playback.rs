//! Single-slot playback: the device seam and the controller that gates it.

mod controller;
mod device;

pub use controller::{NowPlaying, PlaybackController, PlaybackState};
pub use device::{PlaybackDevice, SilentDevice};
