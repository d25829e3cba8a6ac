use std::path::Path;

use tracing::{debug, info};

use crate::trie::{valid_key, Trie};

/// Longest token the loader will store, matching the classic 50-byte word
/// buffer of the original tool.
pub const MAX_WORD_LEN: usize = 49;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Reads a whitespace-separated word list and inserts every well-formed
/// token, once per occurrence. Tokens that are not 1-49 lowercase ASCII
/// letters are counted and skipped, never an error.
pub async fn load_words(trie: &mut Trie, path: &Path) -> anyhow::Result<LoadReport> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(err) => anyhow::bail!("couldn't read word list {}: {err}", path.display()),
    };

    let mut report = LoadReport::default();
    for token in text.split_whitespace() {
        if token.len() > MAX_WORD_LEN || !valid_key(token) {
            debug!("skipping token {:?}", token);
            report.skipped += 1;
            continue;
        }
        trie.insert(token);
        report.inserted += 1;
    }

    info!(
        "loaded {} words from {} ({} tokens skipped)",
        report.inserted,
        path.display(),
        report.skipped
    );
    Ok(report)
}
