//! Debate format definitions and their judging rubrics.
//!
//! Every format maps to a fixed rubric profile naming five focus criteria.
//! Lookup is total: identifiers other than `LD` and `PF` resolve to the
//! Congressional Debate profile.

use serde::Serialize;
use std::fmt;

/// A debate style being judged.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
pub enum FormatId {
    /// Lincoln-Douglas.
    LD,
    /// Public Forum.
    PF,
    /// Congressional Debate, also the fallback for unrecognized identifiers.
    #[default]
    Congress,
}

impl FormatId {
    /// Resolve a format identifier. Matching is exact and never fails.
    pub fn parse(name: &str) -> Self {
        match name {
            "LD" => FormatId::LD,
            "PF" => FormatId::PF,
            _ => FormatId::Congress,
        }
    }

    /// Returns true if `name` names a format directly instead of falling back.
    pub fn is_known(name: &str) -> bool {
        available_formats().iter().any(|known| *known == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormatId::LD => "LD",
            FormatId::PF => "PF",
            FormatId::Congress => "Congress",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FormatId::LD => "Lincoln-Douglas (LD)",
            FormatId::PF => "Public Forum (PF)",
            FormatId::Congress => "Congressional Debate",
        }
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The judging criteria shown to the speaker for one format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RubricProfile {
    pub format: FormatId,
    /// Five focus criteria, in the order they are presented.
    pub criteria: [&'static str; 5],
}

impl RubricProfile {
    /// Multi-line rubric text: a `FORMAT:` header, `Focus on:`, then one
    /// bullet per criterion.
    pub fn description(&self) -> String {
        let mut text = format!("FORMAT: {}\nFocus on:", self.format.display_name());
        for criterion in &self.criteria {
            text.push_str("\n- ");
            text.push_str(criterion);
        }
        text
    }
}

impl fmt::Display for RubricProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

const LD_CRITERIA: [&str; 5] = [
    "Value and value criterion",
    "Logical consistency and use of philosophy",
    "Use of evidence",
    "Clash with the opponent",
    "Overall clarity and structure",
];

const PF_CRITERIA: [&str; 5] = [
    "Clear contention structure",
    "Use of evidence and sources",
    "Rebuttal and frontline responses",
    "Weighing of impacts",
    "Team strategy and clarity",
];

const CONGRESS_CRITERIA: [&str; 5] = [
    "Originality of arguments on the bill",
    "Use of evidence and sources",
    "Responsiveness to previous speakers",
    "Organization and clarity",
    "Professional decorum",
];

/// Get the rubric profile for a format.
pub fn profile(format: FormatId) -> RubricProfile {
    let criteria = match format {
        FormatId::LD => LD_CRITERIA,
        FormatId::PF => PF_CRITERIA,
        FormatId::Congress => CONGRESS_CRITERIA,
    };
    RubricProfile { format, criteria }
}

/// Get the rubric profile for a raw format identifier.
pub fn get_format(name: &str) -> RubricProfile {
    profile(FormatId::parse(name))
}

/// List all available debate format names.
pub fn available_formats() -> Vec<&'static str> {
    vec!["LD", "PF", "Congress"]
}
