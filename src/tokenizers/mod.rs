/// Tokenizer abstraction and the tiktoken-backed implementation.
pub mod bpe;
pub mod encoding;
pub mod trait_impl;

pub use bpe::BpeTokenizer;
pub use encoding::Encoding;
pub use trait_impl::Tokenizer;
