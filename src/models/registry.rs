/// Model registry for resolving tokenizers and prices.
use crate::error::{ModelError, TokenizerError};
use crate::models::pricing::{ModelPricing, PricingConfig};
use crate::tokenizers::{BpeTokenizer, Encoding, Tokenizer};
use std::path::Path;

/// Registry mapping model aliases to encodings and prices.
pub struct ModelRegistry {
    pricing: PricingConfig,
}

impl ModelRegistry {
    /// Create a registry with the built-in price table.
    pub fn new() -> Self {
        Self {
            pricing: PricingConfig::new(),
        }
    }

    /// Create a registry, overlaying prices from `pricing_file` when given.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if the pricing file cannot be loaded.
    pub fn new_with_pricing(pricing_file: Option<&Path>) -> Result<Self, ModelError> {
        let mut registry = Self::new();
        if let Some(path) = pricing_file {
            let overrides = PricingConfig::from_file(path)?;
            tracing::debug!(
                path = %path.display(),
                models = overrides.models.len(),
                "loaded pricing overrides"
            );
            registry.pricing.merge(overrides);
        }
        Ok(registry)
    }

    /// Pick the encoding for an invocation.
    ///
    /// An explicit encoding name always wins; otherwise the model alias is mapped.
    ///
    /// # Errors
    ///
    /// `TokenizerError::InvalidEncoding` for an unknown encoding name,
    /// `TokenizerError::InvalidModel` for an unknown model alias.
    pub fn resolve_encoding(
        &self,
        encoding: Option<&str>,
        model: &str,
    ) -> Result<Encoding, TokenizerError> {
        match encoding {
            Some(name) => name.parse(),
            None => Encoding::for_model(model).ok_or_else(|| TokenizerError::InvalidModel {
                model: model.to_string(),
            }),
        }
    }

    /// Create a tokenizer for the given encoding override or model alias.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Tokenizer` if resolution or vocabulary loading fails.
    pub fn get_tokenizer(
        &self,
        encoding: Option<&str>,
        model: &str,
    ) -> Result<Box<dyn Tokenizer>, ModelError> {
        let encoding = self.resolve_encoding(encoding, model)?;
        tracing::debug!(%encoding, model, "resolved encoding");
        let tokenizer = BpeTokenizer::new(encoding)?;
        Ok(Box::new(tokenizer))
    }

    /// Price per 1K tokens for a model alias, if known.
    pub fn pricing_for(&self, model: &str) -> Option<ModelPricing> {
        self.pricing.get_pricing(model).copied()
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
