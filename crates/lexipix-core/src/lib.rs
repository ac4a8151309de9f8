pub mod config;
pub mod dictionary;
pub mod error;

pub use config::{LexipixConfig, LookupMode, RenderStrategy};
pub use dictionary::Dictionary;
pub use error::LexipixError;
pub use lexipix_dsa::{LEXICON_SIZE, TOKEN_SEPARATORS};

/// Loads the dictionary named by `config`.
///
/// Startup precondition for every other component: the codec is meaningless
/// without a complete 16-bit-to-word table.
pub fn load_dictionary(config: &LexipixConfig) -> Result<Dictionary, LexipixError> {
    Dictionary::load(&config.dictionary_path)
}
