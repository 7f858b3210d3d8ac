pub mod extractor;
pub mod filter;
pub mod histogram;
pub mod sampler;
