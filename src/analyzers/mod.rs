/// Derived statistics over an encoded token sequence.
pub mod chunks;
pub mod types;

pub use chunks::partition;
pub use types::{ChunkRange, CostEstimate, ReportDetails, TokenReport};
