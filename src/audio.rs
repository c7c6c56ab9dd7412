//! Real audio output: a `PlaybackDevice` backed by a rodio thread.
//!
//! The controller only ever sends fire-and-forget commands; the thread owns
//! the output stream and the current sink.

mod player;
mod sink;
mod thread;
mod types;

pub use player::RodioDevice;

#[cfg(test)]
mod tests;
