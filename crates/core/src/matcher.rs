//! Target selection.
//!
//! Decides which falling word the player is typing toward. Selection is a
//! pure function of the field and the buffer text: among the words whose
//! text starts with the buffer, the one with the greatest y (deepest, so
//! closest to the danger line) wins, and ties on y go to the earliest
//! spawned. The render side reuses [`prefix_match_len`] for highlighting
//! so the view can never disagree with selection.

use crate::field::Word;

/// Index of the word the buffer is currently aimed at.
///
/// `None` when the query is empty or no word starts with it. Pure: same
/// field and query always give the same answer.
pub fn select_target(words: &[Word], query: &str) -> Option<usize> {
    if query.is_empty() {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    for (index, word) in words.iter().enumerate() {
        if !word.text.starts_with(query) {
            continue;
        }
        match best {
            // Strictly deeper replaces; equal y keeps the earlier index.
            Some((_, best_y)) if word.y <= best_y => {}
            _ => best = Some((index, word.y)),
        }
    }
    best.map(|(index, _)| index)
}

/// Matched-prefix length for highlighting: the query length when `text`
/// starts with `query`, otherwise 0.
pub fn prefix_match_len(text: &str, query: &str) -> usize {
    if !query.is_empty() && text.starts_with(query) {
        query.len()
    } else {
        0
    }
}
