//! DebateCoach Core Library
//!
//! Heuristic practice feedback for debate speeches: format rubrics, text and
//! audio feedback, two-speech comparison, report rendering, and an optional
//! external coach service.

pub mod audio_feedback;
pub mod coach;
pub mod comparison;
pub mod config;
pub mod debate_format;
pub mod engine;
pub mod error;
pub mod report;
pub mod submission;
pub mod text_feedback;

pub use audio_feedback::{
    AudioAnalyzer, AudioArtifact, AudioFeedbackResult, FixedRandom, RandomSource, SeededRandom,
    SizeBandAnalyzer, ThreadRandom,
};
pub use coach::{CoachEndpoint, CoachService, OpenAICoach};
pub use comparison::{ComparisonResult, Verdict};
pub use config::{Config, default_config};
pub use debate_format::{FormatId, RubricProfile};
pub use engine::{FeedbackEngine, SingleAnalysis};
pub use error::CoachError;
pub use submission::SpeechSubmission;
pub use text_feedback::FeedbackResult;
