//! Context extraction from local documents.

mod extractor;

pub use extractor::FileContextExtractor;
