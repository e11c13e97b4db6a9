//! Text normalization applied to both user input and catalog names.

/// Characters deleted outright. They carry no meaning in item names, so `"Rabadon's"` and
/// `"rabadons"` normalize identically.
pub const DEFAULT_REMOVED_PUNCTUATION: &[char] = &['\'', '\u{2019}', '.', '!', '?', '"'];

/// Characters treated as word separators.
pub const DEFAULT_SEPARATOR_PUNCTUATION: &[char] = &[',', ';', ':', '(', ')', '_', '/'];

/// Characters ignored when comparing compact forms.
const COMPACT_IGNORED: &[char] = &[' ', '-'];

/// Normalizes free text into a comparison-stable form.
#[derive(Clone, Debug)]
pub struct Normalizer {
    removed: Vec<char>,
    separators: Vec<char>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(
            DEFAULT_REMOVED_PUNCTUATION.to_vec(),
            DEFAULT_SEPARATOR_PUNCTUATION.to_vec(),
        )
    }
}

impl Normalizer {
    /// Creates a normalizer with the given punctuation sets.
    pub fn new(removed: Vec<char>, separators: Vec<char>) -> Self {
        Self {
            removed,
            separators,
        }
    }

    /// Case-folds, strips ignorable punctuation and collapses whitespace.
    ///
    /// Characters outside both punctuation sets (`-`, `+`, digits) are kept as they can
    /// distinguish otherwise identical names.
    pub fn normalize(&self, raw: &str) -> String {
        let mut spaced = String::with_capacity(raw.len());

        for c in raw.chars().flat_map(char::to_lowercase) {
            if self.removed.contains(&c) {
                continue;
            }
            if self.separators.contains(&c) || c.is_whitespace() {
                spaced.push(' ');
            } else {
                spaced.push(c);
            }
        }

        spaced.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Normalized string together with the derived forms the scorer compares.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedName {
    /// Normalized text, words separated by a single space.
    pub normalized: String,
    /// Normalized text without spaces or hyphens.
    pub compact: String,
    /// Words of the normalized text.
    pub tokens: Vec<String>,
}

impl NormalizedName {
    /// Derives compact form and tokens from already normalized text.
    pub fn new(normalized: String) -> Self {
        let compact = normalized
            .chars()
            .filter(|c| !COMPACT_IGNORED.contains(c))
            .collect();
        let tokens = normalized
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            normalized,
            compact,
            tokens,
        }
    }

    /// Returns true if nothing is left after normalization.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}
