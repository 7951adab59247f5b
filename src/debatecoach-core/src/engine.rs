//! Feedback engine.
//!
//! Runs the text and audio analyzers over one or two submissions and
//! aggregates the results. The only state it owns is the audio analyzer.

use serde::Serialize;

use crate::audio_feedback::{
    AudioAnalyzer, AudioArtifact, AudioFeedbackResult, SizeBandAnalyzer, ThreadRandom,
};
use crate::comparison::{ComparisonResult, Verdict};
use crate::debate_format::{self, FormatId, RubricProfile};
use crate::error::CoachError;
use crate::submission::SpeechSubmission;
use crate::text_feedback::{self, FeedbackResult};

/// Outcome of the single-speech flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleAnalysis {
    pub profile: RubricProfile,
    pub text_result: Option<FeedbackResult>,
    pub audio_result: Option<AudioFeedbackResult>,
}

pub struct FeedbackEngine {
    audio: Box<dyn AudioAnalyzer>,
}

impl Default for FeedbackEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackEngine {
    /// Create an engine with the stock size-band audio analyzer.
    pub fn new() -> Self {
        Self::with_analyzer(Box::new(SizeBandAnalyzer::<ThreadRandom>::default()))
    }

    /// Create an engine with a custom audio analyzer.
    pub fn with_analyzer(audio: Box<dyn AudioAnalyzer>) -> Self {
        Self { audio }
    }

    /// Analyze one speech.
    ///
    /// Blank text counts as missing. Fails with
    /// [`CoachError::InsufficientInput`] when neither text nor audio is left.
    pub fn analyze_single(
        &mut self,
        format: FormatId,
        text: Option<&str>,
        audio: Option<&AudioArtifact>,
    ) -> Result<SingleAnalysis, CoachError> {
        let text = text.map(str::trim).filter(|t| !t.is_empty());
        if text.is_none() && audio.is_none() {
            return Err(CoachError::InsufficientInput);
        }

        Ok(SingleAnalysis {
            profile: debate_format::profile(format),
            text_result: text.map(|t| text_feedback::analyze(format, t)),
            audio_result: audio.map(|a| self.audio.analyze(a)),
        })
    }

    /// Compare two speeches.
    ///
    /// Either side may be empty; only both sides empty is an error.
    pub fn compare(
        &mut self,
        format: FormatId,
        first: &SpeechSubmission,
        second: &SpeechSubmission,
    ) -> Result<ComparisonResult, CoachError> {
        if !first.is_analyzable() && !second.is_analyzable() {
            return Err(CoachError::InsufficientInput);
        }

        let text1 = first.trimmed_text();
        let text2 = second.trimmed_text();

        let words1 = text1.map(text_feedback::word_count).unwrap_or(0);
        let words2 = text2.map(text_feedback::word_count).unwrap_or(0);
        let verdict = Verdict::from_word_counts(words1, words2);
        log::debug!("comparison: {} vs {} words, {:?}", words1, words2, verdict);

        Ok(ComparisonResult::new(
            text1.map(|t| text_feedback::analyze(format, t)),
            text2.map(|t| text_feedback::analyze(format, t)),
            first.audio.as_ref().map(|a| self.audio.analyze(a)),
            second.audio.as_ref().map(|a| self.audio.analyze(a)),
            verdict,
        ))
    }
}
