pub mod extractor;
pub mod handlers;
pub mod normalizer;
pub mod orchestrator;
pub mod scoring;
pub mod similarity;
pub mod vocabulary;
