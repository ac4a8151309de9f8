use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Number of entries in a complete lexicon: one word per 16-bit value.
pub const LEXICON_SIZE: usize = 0x10000;

static_assertions::const_assert_eq!(LEXICON_SIZE, u16::MAX as usize + 1);

/// Characters stripped from both ends of a token before reverse lookup.
pub const TOKEN_SEPARATORS: &[char] = &['.', ',', ';', '!', '?', ':', ' ', '\t', '\r', '\n'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// The source did not contain exactly [`LEXICON_SIZE`] words.
    WrongSize { found: usize },
    /// Two entries fold to the same lowercase key.
    DuplicateWord { word: String, first: u16, second: u16 },
    /// An entry that no decode token can resolve to: empty, containing
    /// whitespace, or carrying separators that lookup would trim away.
    UnreachableWord { word: String, index: u16 },
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconError::WrongSize { found } => write!(
                f,
                "invalid wordlist length: expected {} words, found {}",
                LEXICON_SIZE, found
            ),
            LexiconError::DuplicateWord { word, first, second } => write!(
                f,
                "duplicate word {:?} at indices {} and {}",
                word, first, second
            ),
            LexiconError::UnreachableWord { word, index } => write!(
                f,
                "word {:?} at index {} cannot be looked up again after folding",
                word, index
            ),
        }
    }
}

impl core::error::Error for LexiconError {}

/// An entry of the case-folded reverse view.
#[derive(Clone, Debug)]
struct SortedEntry {
    key: String,
    index: u16,
}

/// A fixed 65,536-entry word table.
///
/// ## Layout
/// - `words` keeps the canonical order: position `i` is the word for value `i`.
/// - `sorted` holds the folded words ordered by key, so reverse lookup is a
///   binary search that never allocates beyond the folded lookup key.
#[derive(Clone)]
pub struct Lexicon {
    words: Vec<String>,
    sorted: Vec<SortedEntry>,
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("words_len", &self.words.len())
            .field("first", &self.words.first())
            .field("last", &self.words.last())
            .finish()
    }
}

impl Lexicon {
    /// Builds a lexicon from words given in canonical order.
    ///
    /// Fails unless there are exactly [`LEXICON_SIZE`] words, each one a
    /// single whitespace-free token that survives [`fold_token`] unchanged
    /// apart from case, and whose folded forms are pairwise distinct.
    pub fn from_words<I, S>(words: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != LEXICON_SIZE {
            return Err(LexiconError::WrongSize { found: words.len() });
        }

        let mut sorted = Vec::with_capacity(LEXICON_SIZE);
        for (i, w) in words.iter().enumerate() {
            let key = fold_token(w);
            if key.is_empty() || w.chars().any(char::is_whitespace) || key != w.to_lowercase() {
                return Err(LexiconError::UnreachableWord {
                    word: w.clone(),
                    index: i as u16,
                });
            }
            sorted.push(SortedEntry {
                key,
                index: i as u16,
            });
        }
        sorted.sort_by(|a, b| a.key.cmp(&b.key).then(a.index.cmp(&b.index)));

        for pair in sorted.windows(2) {
            if pair[0].key == pair[1].key {
                return Err(LexiconError::DuplicateWord {
                    word: pair[1].key.clone(),
                    first: pair[0].index,
                    second: pair[1].index,
                });
            }
        }

        Ok(Self { words, sorted })
    }

    /// Always [`LEXICON_SIZE`]; a lexicon cannot be built with any other length.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Direct lookup of the word encoding `value`.
    #[inline(always)]
    pub fn word_at(&self, value: u16) -> &str {
        &self.words[value as usize]
    }

    /// Exact reverse lookup.
    ///
    /// The token is trimmed of [`TOKEN_SEPARATORS`] and lowercased first.
    /// Returns `None` when no entry matches.
    pub fn index_of(&self, token: &str) -> Option<u16> {
        let key = fold_token(token);
        self.sorted
            .binary_search_by(|e| e.key.as_str().cmp(key.as_str()))
            .ok()
            .map(|pos| self.sorted[pos].index)
    }

    /// Reverse lookup that never misses.
    ///
    /// A matching token resolves to its canonical index. An unknown token
    /// resolves to the position where it would be inserted into the sorted
    /// view, truncated to 16 bits, so a token past the last entry wraps to 0.
    pub fn search(&self, token: &str) -> u16 {
        let key = fold_token(token);
        match self
            .sorted
            .binary_search_by(|e| e.key.as_str().cmp(key.as_str()))
        {
            Ok(pos) => self.sorted[pos].index,
            Err(insert_at) => insert_at as u16,
        }
    }
}

/// Trims surrounding separators and lowercases a token for reverse lookup.
pub fn fold_token(token: &str) -> String {
    token.trim_matches(TOKEN_SEPARATORS).to_lowercase()
}
