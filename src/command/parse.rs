use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;

pub const HELP: &str = "\
commands:
  add <file>               add a file with unknown artist/title
  list | ls                list every track
  show <index>             show one track
  artist <text>            list tracks whose artist contains <text>
  title <text>             list tracks whose title contains <text>
  remove | rm <index>      remove one track
  remove-artist <text>     remove every track whose artist contains <text>
  album <index> <name>     set the album of a track
  play <index>             play a track
  play-first               play the first track
  stop                     stop playback
  status                   is anything playing?
  count                    number of tracks
  help                     this text
  quit | exit              leave";

/// One parsed command line.
///
/// Indices stay signed here so that `-1` is reported as out of range rather
/// than as a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(PathBuf),
    List,
    Show(i64),
    FindArtist(String),
    FindTitle(String),
    Remove(i64),
    RemoveArtist(String),
    SetAlbum(i64, String),
    Play(i64),
    PlayFirst,
    Stop,
    Status,
    Count,
    Help,
    Quit,
}

fn parse_index(word: &str, raw: &str) -> Result<i64, Error> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::Command(format!("{word}: missing index")));
    }
    raw.parse::<i64>()
        .map_err(|_| Error::Command(format!("{word}: {raw:?} is not an index")))
}

fn required_text<'a>(word: &str, rest: &'a str) -> Result<&'a str, Error> {
    if rest.is_empty() {
        Err(Error::Command(format!("{word}: missing argument")))
    } else {
        Ok(rest)
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        let cmd = match word.to_ascii_lowercase().as_str() {
            "add" => Command::Add(PathBuf::from(required_text(word, rest)?)),
            "list" | "ls" => Command::List,
            "show" => Command::Show(parse_index(word, rest)?),
            // Search text is taken verbatim; an empty needle matches every track.
            "artist" => Command::FindArtist(rest.to_string()),
            "title" => Command::FindTitle(rest.to_string()),
            "remove" | "rm" => Command::Remove(parse_index(word, rest)?),
            "remove-artist" => Command::RemoveArtist(rest.to_string()),
            "album" => {
                let (index, album) = match rest.split_once(char::is_whitespace) {
                    Some((i, a)) => (i, a.trim()),
                    None => (rest, ""),
                };
                Command::SetAlbum(parse_index(word, index)?, album.to_string())
            }
            "play" => Command::Play(parse_index(word, rest)?),
            "play-first" => Command::PlayFirst,
            "stop" => Command::Stop,
            "status" => Command::Status,
            "count" => Command::Count,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "" => return Err(Error::Command("empty command".to_string())),
            other => {
                return Err(Error::Command(format!(
                    "unknown command {other:?} (try \"help\")"
                )));
            }
        };
        Ok(cmd)
    }
}
