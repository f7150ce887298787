/// Tokenizer backed by tiktoken's byte-pair encodings.
use crate::error::TokenizerError;
use crate::tokenizers::{Encoding, Tokenizer};
use tiktoken_rs::{get_bpe_from_tokenizer, CoreBPE};

/// A loaded BPE vocabulary for one [`Encoding`].
pub struct BpeTokenizer {
    encoding: Encoding,
    bpe: CoreBPE,
}

impl BpeTokenizer {
    /// Load the vocabulary for `encoding`.
    ///
    /// # Errors
    ///
    /// Returns `TokenizerError::InitializationFailed` if tiktoken cannot build
    /// the BPE tables.
    pub fn new(encoding: Encoding) -> Result<Self, TokenizerError> {
        let bpe = get_bpe_from_tokenizer(encoding.into())
            .map_err(|e| TokenizerError::InitializationFailed(e.to_string()))?;
        tracing::debug!(encoding = %encoding, "loaded BPE vocabulary");
        Ok(Self { encoding, bpe })
    }

    /// The earliest special token (e.g. `<|endoftext|>`) appearing in `text`.
    fn find_special_token<'a>(&'a self, text: &str) -> Option<&'a str> {
        self.bpe
            .special_tokens()
            .into_iter()
            .filter_map(|token| text.find(token).map(|pos| (pos, token)))
            .min()
            .map(|(_, token)| token)
    }
}

impl Tokenizer for BpeTokenizer {
    /// Special tokens are not allowed in input text.
    fn encode(&self, text: &str) -> Result<Vec<usize>, TokenizerError> {
        if let Some(token) = self.find_special_token(text) {
            return Err(TokenizerError::EncodingFailed(format!(
                "The text contains a special token that is not allowed: {}",
                token
            )));
        }

        Ok(self
            .bpe
            .encode_ordinary(text)
            .into_iter()
            .map(|token| token as usize)
            .collect())
    }

    fn name(&self) -> &str {
        self.encoding.as_str()
    }
}
