//! Splitting build text into item phrases.
//!
//! Comma separated text is split on commas and every phrase is resolved as a whole. Without
//! commas the text is segmented greedily: at each word the longest window of up to
//! [`MAX_PHRASE_WORDS`] words that confidently names an item wins, falling back to single
//! words.

use crate::matcher::{score::TOKEN_OVERLAP_WEIGHT, ItemMatch, Matcher, Resolution};

/// Longest window of words tried as one item name.
pub const MAX_PHRASE_WORDS: usize = 4;

/// Minimum score for a multi-word window to be taken as one item.
///
/// Windows spanning several items tend to contain one of them, so containment alone is not
/// enough.
pub const MIN_WINDOW_SCORE: f64 = TOKEN_OVERLAP_WEIGHT;

/// Build text split into resolved items and unmatched phrases.
#[derive(Debug, Default)]
pub struct ResolvedBuild<'a> {
    /// Matched items in input order.
    pub matched: Vec<ItemMatch<'a>>,
    /// Phrases that did not resolve, in input order.
    pub unmatched: Vec<String>,
}

impl<'a> ResolvedBuild<'a> {
    /// Ids of the matched items in input order.
    pub fn item_ids(&self) -> Vec<&'a str> {
        self.matched.iter().map(ItemMatch::id).collect()
    }

    fn push(&mut self, phrase: &str, item_match: Option<ItemMatch<'a>>) {
        match item_match {
            Some(item_match) => self.matched.push(item_match),
            None => self.unmatched.push(phrase.to_string()),
        }
    }
}

/// Splits build text into phrases and resolves each of them.
pub fn resolve_build<'a>(matcher: &'a Matcher, build: &str) -> ResolvedBuild<'a> {
    let mut resolved = ResolvedBuild::default();

    if build.contains(',') {
        for phrase in build.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            resolved.push(phrase, matcher.resolve(phrase));
        }

        return resolved;
    }

    let words = build.split_whitespace().collect::<Vec<_>>();
    let mut start = 0;

    while start < words.len() {
        let longest = MAX_PHRASE_WORDS.min(words.len() - start);
        let window = (2..=longest).rev().find_map(|len| {
            let phrase = words[start..start + len].join(" ");
            match matcher.resolve_detailed(&phrase) {
                Resolution::Exact(item_match) => Some((len, item_match)),
                Resolution::Fuzzy(item_match) if item_match.score >= MIN_WINDOW_SCORE => {
                    Some((len, item_match))
                }
                _ => None,
            }
        });

        match window {
            Some((len, item_match)) => {
                resolved.matched.push(item_match);
                start += len;
            }
            None => {
                let word = words[start];
                resolved.push(word, matcher.resolve(word));
                start += 1;
            }
        }
    }

    resolved
}
