/// Core trait for tokenizer implementations.
use crate::error::TokenizerError;

/// Trait for tokenizing text into token IDs.
///
/// Implementations own whatever native state the underlying BPE needs; it is
/// released when the value is dropped, so a `Box<dyn Tokenizer>` going out of
/// scope on any path is all the cleanup callers have to do.
pub trait Tokenizer: Send + Sync {
    /// Encode text into token IDs.
    ///
    /// # Errors
    ///
    /// Returns `TokenizerError` if the text cannot be encoded.
    fn encode(&self, text: &str) -> Result<Vec<usize>, TokenizerError>;

    /// Count tokens in text.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use count_tokens::tokenizers::{BpeTokenizer, Encoding, Tokenizer};
    /// let tokenizer = BpeTokenizer::new(Encoding::Cl100kBase)?;
    /// let count = tokenizer.count_tokens("Hello, world!")?;
    /// assert!(count > 0);
    /// # Ok::<(), count_tokens::error::TokenizerError>(())
    /// ```
    fn count_tokens(&self, text: &str) -> Result<usize, TokenizerError> {
        self.encode(text).map(|tokens| tokens.len())
    }

    /// Get the tokenizer's name (the encoding identifier).
    fn name(&self) -> &str;
}
