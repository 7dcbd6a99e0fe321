//! Inference-service backends.

pub mod huggingface;

pub use huggingface::HuggingFace;
