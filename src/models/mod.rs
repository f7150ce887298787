/// Model alias resolution and pricing.
pub mod pricing;
pub mod registry;

pub use pricing::{ModelPricing, PricingConfig};
pub use registry::ModelRegistry;
