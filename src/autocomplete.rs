use crate::trie::{Trie, TrieNode};

/// How to rank the stored words that have the query as a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Lexicographically smallest candidate.
    SmallestLex,
    /// Shortest candidate; a length tie keeps the first one encountered in
    /// traversal order.
    ShortestLength,
    /// Most frequently inserted candidate; a frequency tie goes to the
    /// lexicographically smaller word.
    HighestFrequency,
}

/// Fixed reporting order for the run-all-policies entry point.
pub const ALL_POLICIES: [Policy; 3] = [
    Policy::SmallestLex,
    Policy::ShortestLength,
    Policy::HighestFrequency,
];

struct Candidate {
    word: String,
    frequency: u32,
}

/// The best stored word extending `query`, under `policy`, or `None` when
/// nothing extends it.
///
/// Descends to the node for `query` first and only enumerates that subtree,
/// so every candidate has the query as a true prefix and is at least as long
/// as the query.
pub fn complete(trie: &Trie, query: &str, policy: Policy) -> Option<String> {
    let start = trie.node_for(query)?;
    let mut best: Option<Candidate> = None;
    let mut buf = String::from(query);
    visit(start, policy, &mut buf, &mut best);
    best.map(|candidate| candidate.word)
}

/// Runs the three policies independently for one query.
pub fn complete_all(trie: &Trie, query: &str) -> [Option<String>; 3] {
    ALL_POLICIES.map(|policy| complete(trie, query, policy))
}

fn visit(node: &TrieNode, policy: Policy, buf: &mut String, best: &mut Option<Candidate>) {
    if node.is_word() {
        consider(policy, buf, node.frequency(), best);
    }
    for (letter, child) in node.children() {
        buf.push(letter as char);
        visit(child, policy, buf, best);
        buf.pop();
    }
}

fn consider(policy: Policy, word: &str, frequency: u32, best: &mut Option<Candidate>) {
    let wins = match best {
        None => true,
        Some(current) => match policy {
            Policy::SmallestLex => word < current.word.as_str(),
            Policy::ShortestLength => word.len() < current.word.len(),
            Policy::HighestFrequency => {
                frequency > current.frequency
                    || (frequency == current.frequency && word < current.word.as_str())
            }
        },
    };
    if wins {
        *best = Some(Candidate {
            word: word.to_string(),
            frequency,
        });
    }
}
