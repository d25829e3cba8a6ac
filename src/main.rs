mod autocomplete;
mod autocorrect;
mod command;
mod loader;
mod session;
mod trie;

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use trie::Trie;

/// An in-memory dictionary driven by line commands on stdin: INSERT, LOOKUP,
/// REMOVE, AUTOCORRECT, AUTOCOMPLETE, LOAD and EXIT.
#[derive(Parser, Debug)]
#[command(version, about = "A trie dictionary with autocorrect and autocomplete.")]
struct Cli {
    /// Word list to load before reading commands; may repeat.
    #[arg(short, long)]
    dict: Vec<PathBuf>,

    /// Where the session log is written.
    #[arg(long, default_value = "log.txt")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file = File::create(&cli.log_file)?;
    tracing_subscriber::fmt().with_writer(file).init();

    let mut trie = Trie::new();
    for path in &cli.dict {
        let report = loader::load_words(&mut trie, path).await?;
        info!(
            "preloaded {} ({} words, {} skipped)",
            path.display(),
            report.inserted,
            report.skipped
        );
    }

    session::run(&mut trie).await
}
