use lexipix_core::{Dictionary, LexipixError, LookupMode};

use crate::words::{Parity, WordSequence};

/// Payload returned by [`WordCodec::decode`] when the input cannot be decoded.
pub const INVALID_WORDS: &[u8] = b"Invalid words.";

/// Bijective transform between byte buffers and dictionary words.
///
/// Each little-endian 16-bit chunk maps to the dictionary word at that index.
/// A leading parity marker records whether the last chunk was zero-padded.
///
/// ## Concurrency
/// Stateless apart from the shared read-only [`Dictionary`]; a single codec
/// can serve any number of threads.
#[derive(Clone, Debug)]
pub struct WordCodec {
    dictionary: Dictionary,
    lookup: LookupMode,
}

impl WordCodec {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            lookup: LookupMode::Strict,
        }
    }

    /// Selects how unknown words are treated during decode.
    pub fn with_lookup(mut self, lookup: LookupMode) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn lookup(&self) -> LookupMode {
        self.lookup
    }

    /// Encodes `data` as a parity marker plus `ceil(len / 2)` words.
    pub fn encode(&self, data: &[u8]) -> WordSequence {
        let mut words = WordSequence::with_capacity(1 + data.len().div_ceil(2));
        words.push(Parity::of_len(data.len()).token());

        for pair in data.chunks(2) {
            let low = pair[0];
            let high = pair.get(1).copied().unwrap_or(0);
            words.push(self.dictionary.word_at(u16::from_le_bytes([low, high])));
        }

        tracing::debug!("WordCodec: encoded {} bytes into {} words", data.len(), words.len());
        words
    }

    /// Decodes a word sequence, reporting malformed input as an error.
    ///
    /// Positions in `WordNotFound` count the parity marker as position 0.
    pub fn try_decode<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<u8>, LexipixError> {
        let Some((marker, rest)) = words.split_first() else {
            return Err(LexipixError::EmptyWordSequence);
        };
        let parity = Parity::from_token(marker.as_ref());

        let mut data = Vec::with_capacity(rest.len() * 2);
        for (i, token) in rest.iter().enumerate() {
            let value = self.dictionary.resolve(token.as_ref(), i + 1, self.lookup)?;
            data.extend_from_slice(&value.to_le_bytes());
        }

        // Undo the zero pad of an odd-length source.
        if parity == Parity::Odd {
            data.pop();
        }

        tracing::debug!("WordCodec: decoded {} words into {} bytes", words.len(), data.len());
        Ok(data)
    }

    /// Decodes a word sequence, degrading any failure to [`INVALID_WORDS`].
    pub fn decode<S: AsRef<str>>(&self, words: &[S]) -> Vec<u8> {
        match self.try_decode(words) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("WordCodec: {}; returning sentinel payload", e);
                INVALID_WORDS.to_vec()
            }
        }
    }

    /// [`try_decode`](Self::try_decode) over space-separated text.
    pub fn try_decode_text(&self, text: &str) -> Result<Vec<u8>, LexipixError> {
        self.try_decode(WordSequence::parse(text).tokens())
    }

    /// [`decode`](Self::decode) over space-separated text.
    pub fn decode_text(&self, text: &str) -> Vec<u8> {
        self.decode(WordSequence::parse(text).tokens())
    }
}
