use crate::shared::errors::AppResult;

/// Port for the morphological tokenizer
///
/// Implementations return surface tokens in order, with boundary and filler
/// pseudo-tokens already removed. An empty vector is a valid answer for
/// untokenizable input. Must be callable concurrently.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> AppResult<Vec<String>>;
}
