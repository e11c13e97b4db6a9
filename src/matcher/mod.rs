//! Fuzzy resolution of free-text item names against the catalog.
//!
//! Resolution runs in two passes. The exact pass compares the normalized input against the
//! normalized name and aliases of every item. Only when nothing matches exactly does the
//! fuzzy pass score every item (see [`score`]) and accept the single best one above the
//! configured threshold. A tie for the best score is reported as ambiguous and never
//! guessed.
//!
//! The matcher holds no mutable state after construction, so a single instance is shared
//! between every concurrent command.

pub mod normalize;
pub mod score;

use std::{collections::HashMap, sync::Arc};

use dioxus_logger::tracing;

use crate::{
    catalog::Catalog,
    matcher::{
        normalize::{
            NormalizedName, Normalizer, DEFAULT_REMOVED_PUNCTUATION,
            DEFAULT_SEPARATOR_PUNCTUATION,
        },
        score::MIN_ACCEPT_SCORE,
    },
    model::catalog::Item,
};

/// Tolerance used when comparing floating point scores for ties.
const SCORE_EPSILON: f64 = 1e-9;

/// Tunables of the matcher.
#[derive(Clone, Debug)]
pub struct MatcherConfig {
    /// Minimum fuzzy score a match needs to be accepted.
    pub min_score: f64,
    /// Punctuation deleted during normalization.
    pub removed_punctuation: Vec<char>,
    /// Punctuation treated as a word separator during normalization.
    pub separator_punctuation: Vec<char>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_score: MIN_ACCEPT_SCORE,
            removed_punctuation: DEFAULT_REMOVED_PUNCTUATION.to_vec(),
            separator_punctuation: DEFAULT_SEPARATOR_PUNCTUATION.to_vec(),
        }
    }
}

/// Item chosen for a phrase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemMatch<'a> {
    /// Matched catalog item.
    pub item: &'a Item,
    /// Score of the match, `1.0` for exact matches.
    pub score: f64,
}

impl<'a> ItemMatch<'a> {
    /// Id of the matched item.
    pub fn id(&self) -> &'a str {
        &self.item.id
    }
}

/// Detailed outcome of resolving one phrase.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution<'a> {
    /// Normalized input equals a name or alias of exactly one item.
    Exact(ItemMatch<'a>),
    /// Single best fuzzy candidate above the threshold.
    Fuzzy(ItemMatch<'a>),
    /// Several items tied for the best score, in catalog order.
    Ambiguous(Vec<&'a Item>),
    /// Nothing cleared the threshold.
    NoMatch,
}

impl<'a> Resolution<'a> {
    /// Collapses ambiguity and misses into `None`.
    pub fn into_match(self) -> Option<ItemMatch<'a>> {
        match self {
            Self::Exact(item_match) | Self::Fuzzy(item_match) => Some(item_match),
            Self::Ambiguous(_) | Self::NoMatch => None,
        }
    }
}

/// Resolves phrases to catalog items.
pub struct Matcher {
    catalog: Arc<Catalog>,
    normalizer: Normalizer,
    min_score: f64,
    /// Normalized names and aliases, indexed like `catalog.items()`.
    names: Vec<Vec<NormalizedName>>,
    /// Normalized name or alias to the indices of the items carrying it.
    exact: HashMap<String, Vec<usize>>,
}

impl Matcher {
    /// Creates a matcher with the default configuration.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, MatcherConfig::default())
    }

    /// Creates a matcher, normalizing every catalog name up front.
    ///
    /// Names shared by different items are logged, they will always resolve as ambiguous.
    pub fn with_config(catalog: Arc<Catalog>, config: MatcherConfig) -> Self {
        let normalizer = Normalizer::new(config.removed_punctuation, config.separator_punctuation);
        let mut names = Vec::with_capacity(catalog.len());
        let mut exact: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, item) in catalog.items().iter().enumerate() {
            let mut item_names: Vec<NormalizedName> = Vec::new();

            for raw in item.names() {
                let name = NormalizedName::new(normalizer.normalize(raw));
                if name.is_empty() || item_names.contains(&name) {
                    continue;
                }

                let owners = exact.entry(name.normalized.clone()).or_default();
                if !owners.contains(&index) {
                    owners.push(index);
                }
                item_names.push(name);
            }

            names.push(item_names);
        }

        for (name, owners) in &exact {
            if owners.len() > 1 {
                let ids = owners
                    .iter()
                    .map(|&i| catalog.items()[i].id.as_str())
                    .collect::<Vec<_>>();
                tracing::warn!(
                    "Item name {:?} is shared by items {:?} and will resolve as ambiguous",
                    name,
                    ids
                );
            }
        }

        Self {
            catalog,
            normalizer,
            min_score: config.min_score,
            names,
            exact,
        }
    }

    /// Catalog the matcher resolves against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolves a phrase to at most one item.
    ///
    /// Returns `None` when nothing matches confidently, including ambiguous input. This is a
    /// normal outcome, callers report the phrase as unmatched.
    pub fn resolve(&self, raw: &str) -> Option<ItemMatch<'_>> {
        let resolution = self.resolve_detailed(raw);

        match &resolution {
            Resolution::Exact(m) | Resolution::Fuzzy(m) => {
                tracing::debug!("Resolved {:?} to item {} ({:.2})", raw, m.id(), m.score)
            }
            Resolution::Ambiguous(items) => tracing::debug!(
                "{:?} is ambiguous between {} items",
                raw,
                items.len()
            ),
            Resolution::NoMatch => tracing::debug!("No item matches {:?}", raw),
        }

        resolution.into_match()
    }

    /// Resolves a phrase, keeping the reason a phrase did not resolve.
    pub fn resolve_detailed(&self, raw: &str) -> Resolution<'_> {
        let query = NormalizedName::new(self.normalizer.normalize(raw));
        if query.is_empty() {
            return Resolution::NoMatch;
        }

        let items = self.catalog.items();

        if let Some(owners) = self.exact.get(&query.normalized) {
            return match owners.as_slice() {
                [index] => Resolution::Exact(ItemMatch {
                    item: &items[*index],
                    score: score::EXACT_SCORE,
                }),
                owners => Resolution::Ambiguous(owners.iter().map(|&i| &items[i]).collect()),
            };
        }

        let mut best = 0.0_f64;
        let mut leaders: Vec<usize> = Vec::new();

        for (index, item_names) in self.names.iter().enumerate() {
            let item_score = item_names
                .iter()
                .map(|name| score::score(&query, name))
                .fold(0.0_f64, f64::max);

            if item_score > best + SCORE_EPSILON {
                best = item_score;
                leaders.clear();
                leaders.push(index);
            } else if item_score > 0.0 && (item_score - best).abs() <= SCORE_EPSILON {
                leaders.push(index);
            }
        }

        if leaders.is_empty() || best < self.min_score {
            return Resolution::NoMatch;
        }

        match leaders.as_slice() {
            [index] => Resolution::Fuzzy(ItemMatch {
                item: &items[*index],
                score: best,
            }),
            leaders => Resolution::Ambiguous(leaders.iter().map(|&i| &items[i]).collect()),
        }
    }
}
