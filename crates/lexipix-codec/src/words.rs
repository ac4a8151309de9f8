use core::fmt;

pub const EVEN_TOKEN: &str = "Even";
pub const ODD_TOKEN: &str = "Odd";

/// Length parity of the encoded buffer, carried as the first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of_len(len: usize) -> Self {
        if len % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Parity::Even => EVEN_TOKEN,
            Parity::Odd => ODD_TOKEN,
        }
    }

    /// Anything other than a case-insensitive "even" reads as odd.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case(EVEN_TOKEN) {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// A parity marker followed by one word per 16-bit chunk.
///
/// Serialized as the tokens joined by single spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSequence {
    tokens: Vec<String>,
}

impl WordSequence {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Splits serialized text on whitespace.
    ///
    /// Leading and trailing whitespace is ignored and runs of separators
    /// collapse, so blank input parses to an empty sequence.
    pub fn parse(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn parity(&self) -> Option<Parity> {
        self.tokens.first().map(|t| Parity::from_token(t))
    }

    /// The tokens after the parity marker.
    pub fn data_words(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }
}

impl fmt::Display for WordSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.tokens.iter();
        if let Some(first) = iter.next() {
            f.write_str(first)?;
            for token in iter {
                f.write_str(" ")?;
                f.write_str(token)?;
            }
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for WordSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}
