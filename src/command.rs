use std::path::PathBuf;

use thiserror::Error;

use crate::autocomplete::Policy;
use crate::loader::MAX_WORD_LEN;
use crate::trie::valid_key;

/// One line of input, parsed. The keywords and their shapes follow the
/// line-oriented dictionary protocol; LOOKUP is the one addition on top of
/// the classic command set.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Load { path: PathBuf },
    Insert { word: String },
    Lookup { word: String },
    Remove { word: String },
    Autocorrect { word: String, max_distance: usize },
    /// `policy: None` runs all three policies for the query.
    Autocomplete { word: String, policy: Option<Policy> },
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("not a dictionary word {0:?} (want 1-49 lowercase letters)")]
    InvalidWord(String),

    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    #[error("autocomplete policy must be 0-3, got {0}")]
    InvalidPolicy(usize),
}

impl Command {
    /// Parses one input line. Blank lines are `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut tokens = line.split_whitespace();
        let keyword = match tokens.next() {
            Some(keyword) => keyword,
            None => return Ok(None),
        };

        let (command, usage) = match keyword {
            "LOAD" => {
                let usage = "LOAD <file>";
                let path = PathBuf::from(require(tokens.next(), usage)?);
                (Command::Load { path }, usage)
            }
            "INSERT" => {
                let usage = "INSERT <word>";
                (Command::Insert { word: word_arg(tokens.next(), usage)? }, usage)
            }
            "LOOKUP" => {
                let usage = "LOOKUP <word>";
                (Command::Lookup { word: word_arg(tokens.next(), usage)? }, usage)
            }
            "REMOVE" => {
                let usage = "REMOVE <word>";
                (Command::Remove { word: word_arg(tokens.next(), usage)? }, usage)
            }
            "AUTOCORRECT" => {
                let usage = "AUTOCORRECT <word> <max-mismatches>";
                let word = word_arg(tokens.next(), usage)?;
                let max_distance = number_arg(tokens.next(), usage)?;
                (Command::Autocorrect { word, max_distance }, usage)
            }
            "AUTOCOMPLETE" => {
                let usage = "AUTOCOMPLETE <word> <policy 0-3>";
                let word = word_arg(tokens.next(), usage)?;
                let policy = match number_arg(tokens.next(), usage)? {
                    0 => None,
                    1 => Some(Policy::SmallestLex),
                    2 => Some(Policy::ShortestLength),
                    3 => Some(Policy::HighestFrequency),
                    other => return Err(CommandError::InvalidPolicy(other)),
                };
                (Command::Autocomplete { word, policy }, usage)
            }
            "EXIT" => (Command::Exit, "EXIT"),
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        if tokens.next().is_some() {
            return Err(CommandError::Usage(usage));
        }
        Ok(Some(command))
    }
}

fn require<'a>(token: Option<&'a str>, usage: &'static str) -> Result<&'a str, CommandError> {
    token.ok_or(CommandError::Usage(usage))
}

fn word_arg(token: Option<&str>, usage: &'static str) -> Result<String, CommandError> {
    let word = require(token, usage)?;
    if word.len() > MAX_WORD_LEN || !valid_key(word) {
        return Err(CommandError::InvalidWord(word.to_string()));
    }
    Ok(word.to_string())
}

fn number_arg(token: Option<&str>, usage: &'static str) -> Result<usize, CommandError> {
    let raw = require(token, usage)?;
    raw.parse()
        .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_full_command_set() {
        assert_eq!(
            Command::parse("LOAD words.txt"),
            Ok(Some(Command::Load { path: "words.txt".into() }))
        );
        assert_eq!(
            Command::parse("INSERT cat"),
            Ok(Some(Command::Insert { word: "cat".into() }))
        );
        assert_eq!(
            Command::parse("LOOKUP cat"),
            Ok(Some(Command::Lookup { word: "cat".into() }))
        );
        assert_eq!(
            Command::parse("REMOVE cat"),
            Ok(Some(Command::Remove { word: "cat".into() }))
        );
        assert_eq!(
            Command::parse("AUTOCORRECT cat 1"),
            Ok(Some(Command::Autocorrect { word: "cat".into(), max_distance: 1 }))
        );
        assert_eq!(
            Command::parse("AUTOCOMPLETE do 2"),
            Ok(Some(Command::Autocomplete {
                word: "do".into(),
                policy: Some(Policy::ShortestLength),
            }))
        );
        assert_eq!(
            Command::parse("AUTOCOMPLETE do 0"),
            Ok(Some(Command::Autocomplete { word: "do".into(), policy: None }))
        );
        assert_eq!(Command::parse("EXIT"), Ok(Some(Command::Exit)));
    }

    #[test]
    fn blank_lines_parse_to_nothing() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   \t  "), Ok(None));
    }

    #[test]
    fn rejects_unknown_keywords() {
        assert_eq!(
            Command::parse("FROB cat"),
            Err(CommandError::UnknownCommand("FROB".into()))
        );
        // Keywords are uppercase, as in the original protocol.
        assert_eq!(
            Command::parse("insert cat"),
            Err(CommandError::UnknownCommand("insert".into()))
        );
    }

    #[test]
    fn rejects_missing_and_trailing_arguments() {
        assert_eq!(
            Command::parse("INSERT"),
            Err(CommandError::Usage("INSERT <word>"))
        );
        assert_eq!(
            Command::parse("INSERT cat dog"),
            Err(CommandError::Usage("INSERT <word>"))
        );
        assert_eq!(
            Command::parse("AUTOCORRECT cat"),
            Err(CommandError::Usage("AUTOCORRECT <word> <max-mismatches>"))
        );
    }

    #[test]
    fn rejects_malformed_words() {
        assert_eq!(
            Command::parse("INSERT Cat"),
            Err(CommandError::InvalidWord("Cat".into()))
        );
        assert_eq!(
            Command::parse("INSERT c4t"),
            Err(CommandError::InvalidWord("c4t".into()))
        );
        let long = "a".repeat(MAX_WORD_LEN + 1);
        assert_eq!(
            Command::parse(&format!("INSERT {long}")),
            Err(CommandError::InvalidWord(long))
        );
    }

    #[test]
    fn rejects_bad_numbers_and_policies() {
        assert_eq!(
            Command::parse("AUTOCORRECT cat x"),
            Err(CommandError::InvalidNumber("x".into()))
        );
        assert_eq!(
            Command::parse("AUTOCOMPLETE do 4"),
            Err(CommandError::InvalidPolicy(4))
        );
    }

    #[test]
    fn longest_legal_word_is_accepted() {
        let word = "a".repeat(MAX_WORD_LEN);
        assert_eq!(
            Command::parse(&format!("INSERT {word}")),
            Ok(Some(Command::Insert { word }))
        );
    }
}
