//! Core trait abstractions.

pub mod ai;
pub mod source;
pub mod store;

pub use ai::{
    Answer, Classifier, NullAnswerer, NullClassifier, NullGenerator, QuestionAnswerer,
    ScoredLabel, TextGenerator,
};
pub use source::ArticleSource;
pub use store::{ArticleStore, ReportSink};
