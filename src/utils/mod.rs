/// Shared helpers.
pub mod numbers;
