use std::io::{BufRead, Write};

use log::debug;

use crate::command::{Command, Outcome, Session};
use crate::error::{Error, Result};
use crate::playback::PlaybackDevice;

/// Read commands line by line until `quit` or end of input.
///
/// Rejected commands, including lines that are not valid UTF-8, are printed
/// and the loop carries on; only read/write failures on `input`/`out` end it
/// early.
pub fn run<R, W, D>(mut input: R, mut out: W, session: &mut Session<D>, prompt: bool) -> Result<()>
where
    R: BufRead,
    W: Write,
    D: PlaybackDevice,
{
    let show_prompt = |out: &mut W| -> Result<()> {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    };

    show_prompt(&mut out)?;
    let mut buf: Vec<u8> = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(_) => {
                let e = Error::Command("input line is not valid UTF-8".to_string());
                writeln!(out, "ERROR: {e}")?;
                show_prompt(&mut out)?;
                continue;
            }
        };
        if line.trim().is_empty() {
            show_prompt(&mut out)?;
            continue;
        }

        match line.parse::<Command>().and_then(|cmd| session.execute(cmd)) {
            Ok(Outcome::Quit) => {
                debug!("quit requested");
                return Ok(());
            }
            Ok(Outcome::Lines(lines)) => {
                for l in lines {
                    writeln!(out, "{l}")?;
                }
            }
            Err(e) => writeln!(out, "ERROR: {e}")?,
        }
        show_prompt(&mut out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::{DisplaySettings, TrackDisplayField};
    use crate::library::Track;
    use crate::playback::{PlaybackController, SilentDevice};
    use std::io::Cursor;

    fn session() -> Session<SilentDevice> {
        let catalog = Catalog::from_import(vec![
            Track::new("/m/A-t1.mp3", "A", "t1"),
            Track::new("/m/B-t2.mp3", "B", "t2"),
        ]);
        let display = DisplaySettings {
            fields: vec![TrackDisplayField::Artist, TrackDisplayField::Title],
            separator: " - ".to_string(),
        };
        Session::new(catalog, PlaybackController::new(SilentDevice), display)
    }

    fn drive(script: &str, prompt: bool) -> (String, Session<SilentDevice>) {
        let mut s = session();
        let mut out: Vec<u8> = Vec::new();
        run(Cursor::new(script), &mut out, &mut s, prompt).unwrap();
        (String::from_utf8(out).unwrap(), s)
    }

    #[test]
    fn errors_are_reported_and_the_loop_continues() {
        let (out, s) = drive("play 5\nplay 1\nplay 0\nbogus\ncount\n", false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ERROR: index 5 is out of range (catalog has 2 tracks)");
        assert_eq!(lines[1], "Now playing: B - t2");
        assert!(lines[2].starts_with("ERROR: a track is already playing"));
        assert!(lines[3].starts_with("ERROR: unknown command"));
        assert_eq!(lines[4], "2 tracks");
        assert!(s.player.is_playing());
    }

    #[test]
    fn invalid_utf8_line_is_reported_and_reading_continues() {
        let mut s = session();
        let mut out: Vec<u8> = Vec::new();
        run(Cursor::new(&b"\xff\nadd caf\xe9.mp3\ncount\n"[..]), &mut out, &mut s, false).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ERROR: input line is not valid UTF-8",
                "ERROR: input line is not valid UTF-8",
                "2 tracks",
            ]
        );
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let (out, _) = drive("count\r\nshow 1\r\n", false);
        assert_eq!(out, "2 tracks\nTrack 1: B - t2\n");
    }

    #[test]
    fn quit_stops_reading() {
        let (out, s) = drive("rm 0\nquit\nrm 0\n", false);
        assert_eq!(out, "Removed A - t1\n");
        assert_eq!(s.catalog.len(), 1);
    }

    #[test]
    fn prompt_is_written_before_each_command() {
        let (out, _) = drive("count\n\n", true);
        assert_eq!(out, "> 2 tracks\n> > ");
    }
}
