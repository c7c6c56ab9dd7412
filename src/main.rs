mod audio;
mod catalog;
mod command;
mod config;
mod error;
mod library;
mod playback;
mod runtime;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
