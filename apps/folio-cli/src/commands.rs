//! Interactive prompt commands.

use std::str::FromStr;

pub const HELP: &str = "\
commands:
  filter <tag>   all, a publication type, or inprep
  search <text>  search title, authors, venue and year (blank clears)
  sort <key>     year-desc, year-asc, citations-desc, title-asc, insertion
  more           show the next page
  stats          publication counts and citation metrics
  help           this message
  quit           leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filter(String),
    Search(String),
    Sort(String),
    More,
    Stats,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse_line(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim_start();
        let (word, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));

        match word.to_lowercase().as_str() {
            "filter" | "f" => match rest.trim() {
                "" => Err("filter needs a tag".to_string()),
                tag => Ok(Self::Filter(tag.to_string())),
            },
            // Search text keeps its inner spacing; the catalog trims it
            "search" | "s" | "/" => Ok(Self::Search(rest.to_string())),
            "sort" => match rest.trim() {
                "" => Err("sort needs a key".to_string()),
                key => Ok(Self::Sort(key.to_string())),
            },
            "more" | "m" => Ok(Self::More),
            "stats" => Ok(Self::Stats),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command {:?} (try `help`)", other)),
        }
    }
}
