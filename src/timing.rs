/*!
 * Timing transforms over segment sequences.
 *
 * Every function here takes the caller's sequence by reference and returns a
 * fresh `Vec<Segment>`; the input is never mutated and segment order is kept.
 */

use anyhow::{anyhow, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::TimingError;
use crate::segment::Segment;

/// Smallest duration scale accepted from configuration
pub const MIN_DURATION_SCALE: f64 = 0.1;

/// Largest duration scale accepted from configuration
pub const MAX_DURATION_SCALE: f64 = 5.0;

/// Shift every segment by `offset_seconds`.
///
/// Start and end are clamped to zero separately, so a large negative offset
/// collapses a segment to `0.0 -> 0.0` instead of preserving its duration.
pub fn adjust_global_offset(segments: &[Segment], offset_seconds: f64) -> Vec<Segment> {
    segments
        .iter()
        .map(|segment| Segment {
            start: (segment.start + offset_seconds).max(0.0),
            end: (segment.end + offset_seconds).max(0.0),
            text: segment.text.clone(),
        })
        .collect()
}

/// Stretch or shrink each segment's duration by `scale_factor`, anchored at its start.
///
/// The factor is not validated: zero or negative factors produce degenerate segments.
pub fn adjust_duration_scale(segments: &[Segment], scale_factor: f64) -> Vec<Segment> {
    // start + (end - start) does not always round-trip to end in f64
    if scale_factor == 1.0 {
        return segments.to_vec();
    }
    segments
        .iter()
        .map(|segment| Segment {
            start: segment.start,
            end: segment.start + segment.duration() * scale_factor,
            text: segment.text.clone(),
        })
        .collect()
}

/// Override the start and/or end of the segment at `index`.
///
/// `new_start` is clamped to zero; `new_end` is clamped to the segment's
/// effective start (the new one when given, otherwise the current one).
pub fn adjust_segment_timing(
    segments: &[Segment],
    index: usize,
    new_start: Option<f64>,
    new_end: Option<f64>,
) -> Result<Vec<Segment>, TimingError> {
    let current = segments.get(index).ok_or(TimingError::InvalidIndex {
        index,
        len: segments.len(),
    })?;

    let start = new_start.map_or(current.start, |start| start.max(0.0));
    let end = new_end.map_or(current.end, |end| end.max(start));

    debug!(
        "Retiming segment {}: {:.3}-{:.3} -> {:.3}-{:.3}",
        index, current.start, current.end, start, end
    );

    let mut adjusted = segments.to_vec();
    adjusted[index] = Segment {
        start,
        end,
        text: current.text.clone(),
    };
    Ok(adjusted)
}

/// Global timing adjustment applied to every processed file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingAdjustment {
    /// Seconds added to every start and end
    #[serde(default)]
    pub offset_seconds: f64,

    /// Multiplier applied to every duration
    #[serde(default = "default_duration_scale")]
    pub duration_scale: f64,
}

impl Default for TimingAdjustment {
    fn default() -> Self {
        Self {
            offset_seconds: 0.0,
            duration_scale: default_duration_scale(),
        }
    }
}

impl TimingAdjustment {
    /// True when applying this adjustment changes nothing
    pub fn is_identity(&self) -> bool {
        self.offset_seconds == 0.0 && self.duration_scale == 1.0
    }

    /// Check the adjustment against the accepted ranges
    pub fn validate(&self) -> Result<()> {
        if !self.offset_seconds.is_finite() {
            return Err(anyhow!("Timing offset must be finite, got {}", self.offset_seconds));
        }
        if !(MIN_DURATION_SCALE..=MAX_DURATION_SCALE).contains(&self.duration_scale) {
            return Err(anyhow!(
                "Duration scale must be between {} and {}, got {}",
                MIN_DURATION_SCALE, MAX_DURATION_SCALE, self.duration_scale
            ));
        }
        Ok(())
    }

    /// Apply the offset, then the duration scale
    pub fn apply(&self, segments: &[Segment]) -> Vec<Segment> {
        if self.is_identity() {
            return segments.to_vec();
        }
        let shifted = adjust_global_offset(segments, self.offset_seconds);
        adjust_duration_scale(&shifted, self.duration_scale)
    }
}

fn default_duration_scale() -> f64 {
    1.0
}
