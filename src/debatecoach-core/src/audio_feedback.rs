//! Coarse feedback for recorded speech audio.
//!
//! Real signal analysis is out of reach here, so the stock analyzer bands the
//! recording by file size and draws a persuasiveness score from an injected
//! random source. Anything smarter plugs in through [`AudioAnalyzer`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::CoachError;

pub const VERY_SHORT: &str = "Audio very short; speak slower and elaborate more.";
pub const PLENTY_OF_MATERIAL: &str = "Plenty of speech material.";
pub const AVOID_RAMBLING: &str = "Stay on topic; avoid rambling.";
pub const GOOD_LENGTH: &str = "Speech length is good for practice.";

const SHORT_KB: f64 = 100.0;
const LONG_KB: f64 = 1000.0;

/// Lowest score the analyzer hands out.
pub const MIN_SCORE: u8 = 6;
/// Number of distinct scores above and including [`MIN_SCORE`].
const SCORE_SPAN: f64 = 4.0;

/// Metadata about a recorded speech.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioArtifact {
    /// Size of the recording in bytes.
    pub size_bytes: u64,
    /// Playback length, when the container exposes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
}

impl AudioArtifact {
    pub fn new(size_bytes: u64) -> Self {
        Self {
            size_bytes,
            duration_secs: None,
        }
    }

    pub fn with_duration(mut self, duration_secs: f64) -> Self {
        self.duration_secs = Some(duration_secs);
        self
    }

    /// Build an artifact from a file on disk.
    ///
    /// WAV files also get their duration read from the header. A header that
    /// fails to parse leaves the duration unset.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CoachError> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|e| {
            CoachError::AudioError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        if !metadata.is_file() {
            return Err(CoachError::AudioError(format!(
                "{} is not a file",
                path.display()
            )));
        }

        let mut artifact = Self::new(metadata.len());
        let is_wav = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"));
        if is_wav {
            match hound::WavReader::open(path) {
                Ok(reader) => {
                    let spec = reader.spec();
                    if spec.sample_rate > 0 {
                        artifact = artifact
                            .with_duration(reader.duration() as f64 / spec.sample_rate as f64);
                    }
                }
                Err(e) => log::debug!("no WAV header in {}: {}", path.display(), e),
            }
        }

        Ok(artifact)
    }

    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

/// Length band of a recording, judged by size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeBand {
    /// Under 100 KB.
    Short,
    /// 100 KB to 1000 KB inclusive.
    Typical,
    /// Over 1000 KB.
    Long,
}

impl SizeBand {
    pub fn of(artifact: &AudioArtifact) -> Self {
        let size_kb = artifact.size_kb();
        if size_kb < SHORT_KB {
            SizeBand::Short
        } else if size_kb > LONG_KB {
            SizeBand::Long
        } else {
            SizeBand::Typical
        }
    }
}

/// Feedback on a recording plus an estimated persuasiveness score out of 10.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AudioFeedbackResult {
    pub score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;
}

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().r#gen::<f64>()
    }
}

/// Reproducible generator seeded once.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Replays a fixed sequence, wrapping around at the end.
#[derive(Debug, Clone, Default)]
pub struct FixedRandom {
    values: Vec<f64>,
    next: usize,
}

impl FixedRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next = self.next.wrapping_add(1);
        value
    }
}

/// Map a unit sample to a score in `6..=9`.
///
/// Samples outside `[0, 1)` are clamped into it.
pub fn persuasiveness_score(sample: f64) -> u8 {
    let sample = if sample.is_finite() {
        sample.clamp(0.0, 1.0 - f64::EPSILON)
    } else {
        0.0
    };
    MIN_SCORE + (sample * SCORE_SPAN).floor() as u8
}

/// Turns an audio artifact into feedback.
pub trait AudioAnalyzer: Send {
    fn analyze(&mut self, artifact: &AudioArtifact) -> AudioFeedbackResult;
}

/// Stock analyzer: size banding plus a random score.
#[derive(Debug, Clone, Default)]
pub struct SizeBandAnalyzer<R = ThreadRandom> {
    random: R,
}

impl<R: RandomSource> SizeBandAnalyzer<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }
}

impl<R: RandomSource> AudioAnalyzer for SizeBandAnalyzer<R> {
    fn analyze(&mut self, artifact: &AudioArtifact) -> AudioFeedbackResult {
        let mut result = AudioFeedbackResult::default();
        let band = SizeBand::of(artifact);

        match band {
            SizeBand::Short => result.improvements.push(VERY_SHORT.to_string()),
            SizeBand::Long => {
                result.strengths.push(PLENTY_OF_MATERIAL.to_string());
                result.improvements.push(AVOID_RAMBLING.to_string());
            }
            SizeBand::Typical => result.strengths.push(GOOD_LENGTH.to_string()),
        }

        // Independent of the recording.
        result.score = persuasiveness_score(self.random.next_unit());

        log::debug!(
            "audio analysis: {:.1} KB ({:?}), score {}",
            artifact.size_kb(),
            band,
            result.score
        );

        result
    }
}
