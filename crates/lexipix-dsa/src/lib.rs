#![no_std]
extern crate alloc;

pub mod lexicon;

pub use lexicon::{fold_token, Lexicon, LexiconError, LEXICON_SIZE, TOKEN_SEPARATORS};
