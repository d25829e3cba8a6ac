use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info};

use crate::command::Command;
use crate::trie::Trie;
use crate::{autocomplete, autocorrect, loader};

pub const NO_WORDS: &str = "No words found";
pub const NOT_FOUND: &str = "Not found";

/// What the REPL should do after one command.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    /// Keep going; print these lines first.
    Continue(Vec<String>),
    Quit,
}

/// Applies one parsed command to the dictionary and returns the lines to
/// print. Mutations and queries never fail; the only error path is an
/// unreadable LOAD file, which leaves the trie as it was.
pub async fn execute(trie: &mut Trie, command: Command) -> anyhow::Result<Step> {
    let output = match command {
        Command::Exit => return Ok(Step::Quit),
        Command::Load { path } => {
            let report = loader::load_words(trie, &path).await?;
            debug!("LOAD {}: {:?}", path.display(), report);
            Vec::new()
        }
        Command::Insert { word } => {
            trie.insert(&word);
            debug!("INSERT {}", word);
            Vec::new()
        }
        Command::Remove { word } => {
            let removed = trie.remove(&word);
            debug!("REMOVE {} (present: {})", word, removed);
            Vec::new()
        }
        Command::Lookup { word } => match trie.lookup(&word) {
            Some(frequency) => vec![frequency.to_string()],
            None => vec![NOT_FOUND.to_string()],
        },
        Command::Autocorrect { word, max_distance } => {
            let matches = autocorrect::suggestions(trie, &word, max_distance);
            if matches.is_empty() {
                vec![NO_WORDS.to_string()]
            } else {
                matches
            }
        }
        Command::Autocomplete { word, policy: Some(policy) } => {
            vec![answer(autocomplete::complete(trie, &word, policy))]
        }
        Command::Autocomplete { word, policy: None } => autocomplete::complete_all(trie, &word)
            .into_iter()
            .map(answer)
            .collect(),
    };
    Ok(Step::Continue(output))
}

fn answer(winner: Option<String>) -> String {
    winner.unwrap_or_else(|| NO_WORDS.to_string())
}

/// Reads commands from stdin until EXIT or end of input. Bad lines are
/// reported on stderr and the session keeps going.
pub async fn run(trie: &mut Trie) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => match execute(trie, command).await {
                Ok(Step::Quit) => break,
                Ok(Step::Continue(output)) => {
                    for entry in output {
                        println!("{}", entry);
                    }
                }
                Err(err) => {
                    error!("command failed: {err:#}");
                    eprintln!("error: {err:#}");
                }
            },
            Err(err) => {
                debug!("rejected input {:?}: {}", line, err);
                eprintln!("error: {err}");
            }
        }
    }
    info!("session over, {} live nodes", trie.node_count());
    Ok(())
}
