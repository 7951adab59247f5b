//! Speech submissions.
//!
//! One side's speech: an optional transcript and an optional recording.

use serde::Serialize;

use crate::audio_feedback::AudioArtifact;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpeechSubmission {
    /// Transcript of the speech.
    pub text: Option<String>,
    /// Recording of the speech.
    pub audio: Option<AudioArtifact>,
}

impl SpeechSubmission {
    /// Create an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transcript.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the recording.
    pub fn with_audio(mut self, audio: AudioArtifact) -> Self {
        self.audio = Some(audio);
        self
    }

    /// The transcript with surrounding whitespace removed, if anything is
    /// left of it.
    pub fn trimmed_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// True if there is a non-blank transcript or a recording to analyze.
    pub fn is_analyzable(&self) -> bool {
        self.trimmed_text().is_some() || self.audio.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_submission() {
        let submission = SpeechSubmission::new();
        assert!(!submission.is_analyzable());
        assert_eq!(submission.trimmed_text(), None);
    }

    #[test]
    fn test_blank_text_is_not_analyzable() {
        let submission = SpeechSubmission::new().with_text("  \n\t ");
        assert!(!submission.is_analyzable());
    }

    #[test]
    fn test_text_is_trimmed() {
        let submission = SpeechSubmission::new().with_text("  we affirm.  ");
        assert_eq!(submission.trimmed_text(), Some("we affirm."));
        assert!(submission.is_analyzable());
    }

    #[test]
    fn test_audio_only_is_analyzable() {
        let submission = SpeechSubmission::new().with_audio(AudioArtifact::new(0));
        assert!(submission.is_analyzable());
    }
}
