//! Plain-text feedback reports.
//!
//! Lists are joined with `", "`. Empty lists are shown as a placeholder:
//! `None detected` for text improvements, `N/A` for audio feedback.

use crate::audio_feedback::AudioFeedbackResult;
use crate::comparison::ComparisonResult;
use crate::debate_format::RubricProfile;
use crate::text_feedback::FeedbackResult;

pub const LIST_SEPARATOR: &str = ", ";
pub const NONE_DETECTED: &str = "None detected";
pub const NOT_AVAILABLE: &str = "N/A";

const RULE: &str = "---------------------------";

fn join_or(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.to_string()
    } else {
        items.join(LIST_SEPARATOR)
    }
}

/// Render the text feedback block.
pub fn render_text(result: &FeedbackResult) -> String {
    format!(
        "\nText Feedback:\n- Strengths: {}\n- Areas to Improve: {}\n",
        result.strengths.join(LIST_SEPARATOR),
        join_or(&result.improvements, NONE_DETECTED)
    )
}

/// Render the audio feedback block.
pub fn render_audio(result: &AudioFeedbackResult) -> String {
    format!(
        "\nAudio Feedback:\n- Estimated persuasiveness score: {}/10\n- Strengths: {}\n- Areas to improve: {}\n",
        result.score,
        join_or(&result.strengths, NOT_AVAILABLE),
        join_or(&result.improvements, NOT_AVAILABLE)
    )
}

/// Render the single-speech report: rubric, then whichever feedback blocks
/// are present.
pub fn render_single(
    profile: &RubricProfile,
    text: Option<&FeedbackResult>,
    audio: Option<&AudioFeedbackResult>,
) -> String {
    let mut report = profile.description();
    report.push('\n');
    if let Some(text) = text {
        report.push_str(&render_text(text));
    }
    if let Some(audio) = audio {
        report.push_str(&render_audio(audio));
    }
    report
}

fn speech_section(
    number: u8,
    text: Option<&FeedbackResult>,
    audio: Option<&AudioFeedbackResult>,
) -> String {
    format!(
        "{RULE}\nSpeech {number} Feedback\n{RULE}\n{}\n{}\n",
        text.map(render_text).unwrap_or_default(),
        audio.map(render_audio).unwrap_or_default()
    )
}

/// Render the two-speech report with a trailing comparison summary.
pub fn render_comparison(result: &ComparisonResult) -> String {
    let mut report = String::from("\n");
    report.push_str(&speech_section(1, result.text1.as_ref(), result.audio1.as_ref()));
    report.push('\n');
    report.push_str(&speech_section(2, result.text2.as_ref(), result.audio2.as_ref()));
    report.push('\n');
    report.push_str(&format!("{RULE}\nComparison Summary\n{RULE}\n"));
    report.push_str(&format!("- {}\n", result.verdict));
    for advisory in &result.advisories {
        report.push_str(&format!("- {}\n", advisory));
    }
    report
}
