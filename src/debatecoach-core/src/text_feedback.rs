//! Heuristic feedback for speech transcripts.
//!
//! Rules are evaluated in a fixed order and each one appends at most one
//! message, so the ordering of a [`FeedbackResult`] is stable.

use serde::Serialize;

use crate::debate_format::FormatId;

pub const WELL_DEVELOPED: &str = "Your speech is well-developed and detailed.";
pub const SOLID_EXPLANATION: &str = "Your speech has a solid amount of explanation.";
pub const CONCISE: &str = "Your ideas are concise and easy to follow.";
pub const REASONING_CONNECTIVES: &str =
    "You use reasoning connectives that make your argument clearer.";
pub const GOOD_PACING: &str = "Your sentence structure shows good pacing.";

pub const ADD_ELABORATION: &str = "Add more elaboration and examples to strengthen arguments.";
pub const INCLUDE_EVIDENCE: &str = "Include explicit evidence or examples to support your claims.";
pub const VARY_TONE: &str = "Try varying tone with stronger concluding or impactful statements.";

/// Above this many words a speech counts as well-developed.
const DETAILED_WORDS: usize = 150;
/// Above this many words a speech has a solid amount of explanation; below it
/// the speaker is asked to elaborate.
const SOLID_WORDS: usize = 80;

const CONNECTIVES: [&str; 4] = ["because", "therefore", "thus", "so"];

/// Strengths and areas to improve, in rule-evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedbackResult {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Number of non-empty whitespace-separated tokens.
///
/// Splits on Unicode `White_Space`, so U+0085 separates words and U+FEFF
/// does not, unlike a JavaScript `\s` split.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Analyze a transcript.
///
/// The format is accepted for parity with the rubric lookup, but the word
/// thresholds are the same for every format.
pub fn analyze(_format: FormatId, text: &str) -> FeedbackResult {
    let words = word_count(text);
    let lower = text.to_lowercase();
    let mut result = FeedbackResult::default();

    let length_strength = if words > DETAILED_WORDS {
        WELL_DEVELOPED
    } else if words > SOLID_WORDS {
        SOLID_EXPLANATION
    } else {
        CONCISE
    };
    result.strengths.push(length_strength.to_string());

    // Substring match: "so" also fires inside "also" or "reason".
    if CONNECTIVES.iter().any(|c| lower.contains(*c)) {
        result.strengths.push(REASONING_CONNECTIVES.to_string());
    }

    if text.contains(['.', '!', '?']) {
        result.strengths.push(GOOD_PACING.to_string());
    }

    if words < SOLID_WORDS {
        result.improvements.push(ADD_ELABORATION.to_string());
    }

    if !lower.contains("evidence") && !lower.contains("example") {
        result.improvements.push(INCLUDE_EVIDENCE.to_string());
    }

    if !text.contains(['!', '?']) {
        result.improvements.push(VARY_TONE.to_string());
    }

    log::debug!(
        "text analysis: {} words, {} strengths, {} improvements",
        words,
        result.strengths.len(),
        result.improvements.len()
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        assert_eq!(word_count("  a \n\t b   c  "), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n"), 0);
    }

    #[test]
    fn test_word_count_unicode_separators() {
        assert_eq!(word_count("a\u{0085}b"), 2);
        assert_eq!(word_count("a\u{FEFF}b"), 1);
        assert_eq!(word_count("a\u{00A0}b\u{2003}c"), 3);
    }

    #[test]
    fn test_strengths_never_empty() {
        for text in ["", " ", "x", "!!!", words(200).as_str()] {
            assert!(!analyze(FormatId::LD, text).strengths.is_empty());
        }
    }

    #[test]
    fn test_length_banding_boundaries() {
        assert_eq!(analyze(FormatId::PF, &words(151)).strengths[0], WELL_DEVELOPED);
        assert_eq!(analyze(FormatId::PF, &words(150)).strengths[0], SOLID_EXPLANATION);
        assert_eq!(analyze(FormatId::PF, &words(81)).strengths[0], SOLID_EXPLANATION);
        assert_eq!(analyze(FormatId::PF, &words(80)).strengths[0], CONCISE);
    }

    #[test]
    fn test_elaboration_threshold() {
        let at_threshold = analyze(FormatId::Congress, &words(80));
        assert!(!at_threshold.improvements.contains(&ADD_ELABORATION.to_string()));

        let below = analyze(FormatId::Congress, &words(79));
        assert_eq!(below.improvements[0], ADD_ELABORATION);
    }

    #[test]
    fn test_connectives_and_pacing() {
        let result = analyze(FormatId::LD, "I win because therefore evidence! Great.");
        assert_eq!(
            result.strengths,
            vec![CONCISE, REASONING_CONNECTIVES, GOOD_PACING]
        );
        assert_eq!(result.improvements, vec![ADD_ELABORATION]);
    }

    #[test]
    fn test_connective_matches_substrings() {
        let result = analyze(FormatId::LD, "I also agree");
        assert!(result.strengths.contains(&REASONING_CONNECTIVES.to_string()));
    }

    #[test]
    fn test_connective_is_case_insensitive() {
        let result = analyze(FormatId::LD, "THEREFORE");
        assert_eq!(result.strengths, vec![CONCISE, REASONING_CONNECTIVES]);
    }

    #[test]
    fn test_plain_text_gets_every_improvement() {
        let result = analyze(FormatId::PF, "we should act now");
        assert_eq!(result.strengths, vec![CONCISE]);
        assert_eq!(
            result.improvements,
            vec![ADD_ELABORATION, INCLUDE_EVIDENCE, VARY_TONE]
        );
    }

    #[test]
    fn test_example_counts_as_evidence() {
        let result = analyze(FormatId::PF, "For EXAMPLE, look at this?");
        assert!(!result.improvements.contains(&INCLUDE_EVIDENCE.to_string()));
        assert!(!result.improvements.contains(&VARY_TONE.to_string()));
    }

    #[test]
    fn test_long_speech_with_evidence_has_no_improvements() {
        let text = format!("{} evidence shows this is true!", words(160));
        let result = analyze(FormatId::LD, &text);
        assert_eq!(result.strengths, vec![WELL_DEVELOPED, GOOD_PACING]);
        assert!(result.improvements.is_empty());
    }

    #[test]
    fn test_format_does_not_change_result() {
        let text = "Thus the resolution fails. Evidence matters?";
        let ld = analyze(FormatId::LD, text);
        assert_eq!(ld, analyze(FormatId::PF, text));
        assert_eq!(ld, analyze(FormatId::Congress, text));
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let text = "Because of this, we must act. Example: the 2008 crisis.";
        assert_eq!(analyze(FormatId::LD, text), analyze(FormatId::LD, text));
    }
}
