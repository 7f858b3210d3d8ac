pub mod engine;
pub mod gradient;
pub mod mood;
pub mod style;
