use crate::trie::{Trie, TrieNode};

/// Every stored word with the same length as `query` and at most
/// `max_distance` differing positions, in lexicographic order.
///
/// Walks the whole trie once regardless of `max_distance`; candidates are
/// only compared at word ends, so the output order is the alphabetical
/// traversal order.
pub fn suggestions(trie: &Trie, query: &str, max_distance: usize) -> Vec<String> {
    let mut matches = Vec::new();
    let mut buf = String::with_capacity(query.len());
    visit(trie.root(), query.as_bytes(), max_distance, &mut buf, &mut matches);
    matches
}

fn visit(
    node: &TrieNode,
    query: &[u8],
    max_distance: usize,
    buf: &mut String,
    matches: &mut Vec<String>,
) {
    if node.is_word()
        && buf.len() == query.len()
        && hamming(buf.as_bytes(), query) <= max_distance
    {
        matches.push(buf.clone());
    }
    for (letter, child) in node.children() {
        buf.push(letter as char);
        visit(child, query, max_distance, buf, matches);
        buf.pop();
    }
}

/// Differing positions between two equal-length byte strings.
fn hamming(a: &[u8], b: &[u8]) -> usize {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}
