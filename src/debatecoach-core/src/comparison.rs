//! Head-to-head comparison of two speeches.

use serde::Serialize;
use std::fmt;

use crate::audio_feedback::AudioFeedbackResult;
use crate::text_feedback::FeedbackResult;

/// Fixed advice appended to every comparison.
pub const ADVISORIES: [&str; 2] = [
    "Check which speech has clearer explanations and stronger examples.",
    "Consider combining the best points from both speeches for practice.",
];

/// Which speech appears more developed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Speech1MoreDeveloped,
    Speech2MoreDeveloped,
}

impl Verdict {
    /// Decide from the transcript word counts.
    ///
    /// Speech 1 wins only with strictly more words. Equal counts, including
    /// two missing transcripts, go to speech 2.
    pub fn from_word_counts(words1: usize, words2: usize) -> Self {
        if words1 > words2 {
            Verdict::Speech1MoreDeveloped
        } else {
            Verdict::Speech2MoreDeveloped
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Speech1MoreDeveloped => "Speech 1 seems more developed.",
            Verdict::Speech2MoreDeveloped => "Speech 2 seems more developed.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Per-speech feedback for whichever modalities were present, plus the
/// verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub text1: Option<FeedbackResult>,
    pub text2: Option<FeedbackResult>,
    pub audio1: Option<AudioFeedbackResult>,
    pub audio2: Option<AudioFeedbackResult>,
    pub verdict: Verdict,
    pub advisories: Vec<String>,
}

impl ComparisonResult {
    pub fn new(
        text1: Option<FeedbackResult>,
        text2: Option<FeedbackResult>,
        audio1: Option<AudioFeedbackResult>,
        audio2: Option<AudioFeedbackResult>,
        verdict: Verdict,
    ) -> Self {
        Self {
            text1,
            text2,
            audio1,
            audio2,
            verdict,
            advisories: ADVISORIES.iter().map(|a| a.to_string()).collect(),
        }
    }
}
