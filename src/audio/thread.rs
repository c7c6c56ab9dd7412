use std::sync::mpsc::Receiver;
use std::thread;
use std::thread::JoinHandle;

use log::{debug, error, warn};
use rodio::{OutputStreamBuilder, Sink};

use super::sink::create_sink;
use super::types::AudioCmd;

pub(super) fn spawn_audio_thread(rx: Receiver<AudioCmd>) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => stream,
            Err(e) => {
                error!("no audio output device, playback will be silent: {e}");
                drain_without_output(rx);
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped; that would end up
        // in the middle of the prompt.
        stream.log_on_drop(false);

        let mut sink: Option<Sink> = None;

        fn do_stop(sink: &mut Option<Sink>) {
            if let Some(s) = sink.take() {
                s.stop();
            }
        }

        while let Ok(cmd) = rx.recv() {
            match cmd {
                AudioCmd::Play(path) => {
                    do_stop(&mut sink);
                    match create_sink(&stream, &path) {
                        Ok(new_sink) => {
                            new_sink.play();
                            sink = Some(new_sink);
                            debug!("audio thread playing {}", path.display());
                        }
                        Err(e) => warn!("{e}"),
                    }
                }
                AudioCmd::Stop => do_stop(&mut sink),
                AudioCmd::Quit => {
                    do_stop(&mut sink);
                    break;
                }
            }
        }
    })
}

/// Keep the channel serviced when there is nowhere to send audio.
fn drain_without_output(rx: Receiver<AudioCmd>) {
    for cmd in rx {
        match cmd {
            AudioCmd::Play(path) => warn!("cannot play {}: no audio output", path.display()),
            AudioCmd::Stop => {}
            AudioCmd::Quit => break,
        }
    }
}
