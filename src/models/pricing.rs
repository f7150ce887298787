/// Pricing configuration management.
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Per-model pricing table, keyed by model alias.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(flatten)]
    pub models: HashMap<String, ModelPricing>,
}

/// Pricing for a specific model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPricing {
    /// Input price per 1K tokens in USD.
    pub input: f64,
    /// Output price per 1K tokens in USD.
    pub output: f64,
}

impl PricingConfig {
    /// Create a new pricing configuration with default values.
    pub fn new() -> Self {
        let defaults = [
            ("gpt-4", 0.03, 0.06),
            ("gpt-4-32k", 0.06, 0.12),
            ("gpt-3.5-turbo", 0.0005, 0.0015),
            ("gpt-4o", 0.005, 0.015),
            ("gpt-4o-mini", 0.00015, 0.0006),
        ];

        let models = defaults
            .into_iter()
            .map(|(model, input, output)| (model.to_string(), ModelPricing { input, output }))
            .collect();

        Self { models }
    }

    /// Get pricing for a model. Only exact alias matches are priced.
    pub fn get_pricing(&self, model: &str) -> Option<&ModelPricing> {
        self.models.get(model)
    }

    /// Load pricing from a TOML configuration file.
    ///
    /// Each table is a model alias with `input` and `output` prices per 1K tokens:
    ///
    /// ```toml
    /// [gpt-4]
    /// input = 0.03
    /// output = 0.06
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ConfigLoadFailed` if the file cannot be read or parsed,
    /// and `ModelError::InvalidPricing` for negative or non-finite prices.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let load_failed = |reason: String| ModelError::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason,
        };

        let content = std::fs::read_to_string(path).map_err(|e| load_failed(e.to_string()))?;
        let config: PricingConfig =
            toml::from_str(&content).map_err(|e| load_failed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay `other` on top of this table; entries in `other` win.
    pub fn merge(&mut self, other: PricingConfig) {
        self.models.extend(other.models);
    }

    fn validate(&self) -> Result<(), ModelError> {
        for (model, pricing) in &self.models {
            for (kind, price) in [("input", pricing.input), ("output", pricing.output)] {
                if !price.is_finite() || price < 0.0 {
                    return Err(ModelError::InvalidPricing {
                        model: model.clone(),
                        reason: format!("{} price must be a non-negative number", kind),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::new()
    }
}
