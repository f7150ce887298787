/// count-tokens library - exposes the pipeline for testing and reuse.
pub mod analyzers;
pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod sources;
pub mod tokenizers;
pub mod utils;
