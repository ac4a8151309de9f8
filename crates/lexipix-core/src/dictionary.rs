use lexipix_dsa::Lexicon;
use std::path::Path;
use std::sync::Arc;

use crate::config::LookupMode;
use crate::error::LexipixError;

/// The shared, read-only word table behind the codec.
///
/// ## Lifecycle
/// Built once at startup from a newline-delimited word list and never
/// mutated afterwards. Cloning shares the underlying [`Lexicon`], so every
/// request thread can hold its own handle without synchronization.
#[derive(Clone, Debug)]
pub struct Dictionary {
    lexicon: Arc<Lexicon>,
}

impl Dictionary {
    /// Reads a word list from disk.
    ///
    /// A missing file or a list that is not exactly 65,536 distinct words is
    /// a startup failure; callers are expected to abort on `Err`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexipixError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!("Dictionary: cannot read {}: {}", path.display(), e);
            e
        })?;
        let dictionary = Self::from_text(&contents)?;
        tracing::info!(
            "Dictionary: loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Parses newline-delimited text, one word per line.
    ///
    /// `\r\n` endings are accepted and a single trailing terminator does not
    /// start an extra (empty) word. Blank lines elsewhere count as words.
    pub fn from_text(contents: &str) -> Result<Self, LexipixError> {
        let body = contents
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(contents);
        Self::from_words(body.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)))
    }

    /// Builds from words already in canonical order.
    pub fn from_words<I, S>(words: I) -> Result<Self, LexipixError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lexicon = Lexicon::from_words(words).map_err(|e| {
            tracing::error!("Dictionary: {}", e);
            e
        })?;
        Ok(Self {
            lexicon: Arc::new(lexicon),
        })
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    #[inline(always)]
    pub fn word_at(&self, value: u16) -> &str {
        self.lexicon.word_at(value)
    }

    /// Exact reverse lookup; `None` if the folded token is not a dictionary word.
    pub fn index_of(&self, token: &str) -> Option<u16> {
        self.lexicon.index_of(token)
    }

    /// Resolves a decode token at `position` under the given lookup mode.
    pub fn resolve(&self, token: &str, position: usize, mode: LookupMode) -> Result<u16, LexipixError> {
        match mode {
            LookupMode::Legacy => Ok(self.lexicon.search(token)),
            LookupMode::Strict => self.lexicon.index_of(token).ok_or_else(|| {
                tracing::warn!("Dictionary: miss for {:?} at position {}", token, position);
                LexipixError::WordNotFound {
                    position,
                    word: token.to_string(),
                }
            }),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}
