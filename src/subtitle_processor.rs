use std::fmt;
use std::str::FromStr;
use regex::Regex;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use log::{debug, warn};

use crate::errors::SubtitleError;
use crate::segment::Segment;

// @module: Subtitle rendering (SRT, WebVTT, ASS, MicroDVD) and SRT parsing

/// Frame rate used for MicroDVD output when the caller has no better value
pub const DEFAULT_FRAME_RATE: f64 = 23.976;

// @const: SRT timing line, tolerant of single-digit hours, '.' separators and short fractions
static TIMING_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):(\d{1,2}):(\d{1,2})(?:[,.](\d{1,6}))?\s*-->\s*(\d+):(\d{1,2}):(\d{1,2})(?:[,.](\d{1,6}))?")
        .expect("timing line regex is valid")
});

const ASS_HEADER: &str = "[Script Info]
ScriptType: v4.00+
PlayResX: 384
PlayResY: 288
WrapStyle: 0

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,2,2,10,10,10,1

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
";

const MICROS_PER_SECOND: u64 = 1_000_000;

// @enum: Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    // @format: SubRip
    Srt,
    // @format: WebVTT
    Vtt,
    // @format: Advanced SubStation Alpha
    Ass,
    // @format: MicroDVD, frame based
    Sub,
}

impl SubtitleFormat {
    /// Every supported format, in dispatch order
    pub const ALL: [SubtitleFormat; 4] = [Self::Srt, Self::Vtt, Self::Ass, Self::Sub];

    /// Lowercase identifier, also the conventional file extension
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::Ass => "ass",
            Self::Sub => "sub",
        }
    }

    /// Render segments in this format. `fps` is only read for MicroDVD.
    pub fn render(&self, segments: &[Segment], fps: f64) -> String {
        debug!("Rendering {} segments as {}", segments.len(), self);
        match self {
            Self::Srt => create_srt(segments),
            Self::Vtt => create_vtt(segments),
            Self::Ass => create_ass(segments),
            Self::Sub => create_sub(segments, fps),
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubtitleFormat {
    type Err = SubtitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "srt" => Ok(Self::Srt),
            "vtt" => Ok(Self::Vtt),
            "ass" => Ok(Self::Ass),
            "sub" => Ok(Self::Sub),
            _ => Err(SubtitleError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Render segments in the format named by `format` (one of srt, vtt, ass, sub)
pub fn render_subtitles(segments: &[Segment], format: &str, fps: f64) -> Result<String, SubtitleError> {
    let format: SubtitleFormat = format.parse()?;
    Ok(format.render(segments, fps))
}

/// Whole microseconds in a non-negative seconds value.
///
/// Rounding to the microsecond first keeps values such as 1.001 from
/// truncating to 1.000 later on.
fn to_micros(seconds: f64) -> u64 {
    (seconds.max(0.0) * MICROS_PER_SECOND as f64).round() as u64
}

/// Format seconds as `H:MM:SS<sep><fraction>` with the fraction truncated to `digits`
fn format_clock(seconds: f64, separator: char, digits: u32) -> String {
    let micros = to_micros(seconds);
    let total_seconds = micros / MICROS_PER_SECOND;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    let fraction = (micros % MICROS_PER_SECOND) / 10u64.pow(6 - digits);

    format!(
        "{}:{:02}:{:02}{}{:0width$}",
        hours, minutes, secs, separator, fraction,
        width = digits as usize
    )
}

/// SRT timestamp (`H:MM:SS,mmm`)
pub fn format_srt_timestamp(seconds: f64) -> String {
    format_clock(seconds, ',', 3)
}

/// WebVTT timestamp (`H:MM:SS.mmm`)
pub fn format_vtt_timestamp(seconds: f64) -> String {
    format_clock(seconds, '.', 3)
}

/// ASS timestamp (`H:MM:SS.cc`)
pub fn format_ass_timestamp(seconds: f64) -> String {
    format_clock(seconds, '.', 2)
}

/// Frame number for a time offset, `round(seconds * fps)`
pub fn seconds_to_frame(seconds: f64, fps: f64) -> u64 {
    (seconds * fps).round().max(0.0) as u64
}

/// Cue text with blank lines removed; a blank line would end the block early
fn cue_text(text: &str) -> String {
    if !text.lines().any(|line| line.trim().is_empty()) {
        return text.to_string();
    }
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create an SRT document: numbered blocks separated by blank lines
pub fn create_srt(segments: &[Segment]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            format!(
                "{}\n{} --> {}\n{}\n",
                i + 1,
                format_srt_timestamp(segment.start),
                format_srt_timestamp(segment.end),
                cue_text(&segment.text)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a WebVTT document
pub fn create_vtt(segments: &[Segment]) -> String {
    let mut content = String::from("WEBVTT\n");
    for segment in segments {
        content.push_str(&format!(
            "\n{} --> {}\n{}\n",
            format_vtt_timestamp(segment.start),
            format_vtt_timestamp(segment.end),
            cue_text(&segment.text)
        ));
    }
    content
}

/// Escape text for the final field of an ASS `Dialogue:` line
fn escape_ass_text(text: &str) -> String {
    text.replace("\r\n", "\\N")
        .replace(['\n', ','], "\\N")
}

/// Create an ASS document with a single `Default` style
pub fn create_ass(segments: &[Segment]) -> String {
    let mut content = String::from(ASS_HEADER);
    for segment in segments {
        content.push_str(&format!(
            "Dialogue: 0,{},{},Default,,0,0,0,,{}\n",
            format_ass_timestamp(segment.start),
            format_ass_timestamp(segment.end),
            escape_ass_text(&segment.text)
        ));
    }
    content
}

/// Create a MicroDVD document, one `{start}{end}text` line per segment
pub fn create_sub(segments: &[Segment], fps: f64) -> String {
    segments
        .iter()
        .map(|segment| {
            format!(
                "{{{}}}{{{}}}{}",
                seconds_to_frame(segment.start, fps),
                seconds_to_frame(segment.end, fps),
                segment.text.replace("\r\n", "|").replace('\n', "|")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse SRT content into segments.
///
/// Blocks are separated by blank lines, so a blank line never appears inside
/// parsed text (`create_srt` drops them when writing). Malformed blocks are
/// logged and skipped; the remaining segments keep their document order.
/// Never fails: unusable input yields an empty list.
pub fn parse_srt_string(content: &str) -> Vec<Segment> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut segments = Vec::new();
    let mut block: Vec<&str> = Vec::new();
    let mut block_count = 0;

    // A trailing empty line flushes the final block
    for line in content.lines().chain(std::iter::once("")) {
        if !line.trim().is_empty() {
            block.push(line);
            continue;
        }
        if block.is_empty() {
            continue;
        }

        block_count += 1;
        match parse_block(&block) {
            Ok(segment) => segments.push(segment),
            Err(e) => warn!("Skipping subtitle block {}: {}", block_count, e),
        }
        block.clear();
    }

    if segments.is_empty() && block_count > 0 {
        warn!("No valid subtitle entries found in {} blocks", block_count);
    }

    segments
}

/// Parse one non-empty block: index line, timing line, then text lines
fn parse_block(lines: &[&str]) -> Result<Segment, SubtitleError> {
    if lines.len() < 3 {
        return Err(SubtitleError::MalformedInput(format!(
            "expected index, timing and text lines, found {} line(s)",
            lines.len()
        )));
    }

    let timing_line = lines[1].trim();
    if !timing_line.contains("-->") {
        return Err(SubtitleError::MalformedInput(format!(
            "missing '-->' in timing line: {}",
            timing_line
        )));
    }

    let caps = TIMING_LINE_REGEX.captures(timing_line).ok_or_else(|| {
        SubtitleError::MalformedInput(format!("unreadable timing line: {}", timing_line))
    })?;

    let start = parse_timestamp_caps(&caps, 1)?;
    let end = parse_timestamp_caps(&caps, 5)?;

    let segment = Segment::new(start, end, lines[2..].join("\n"));
    if !segment.has_valid_timing() {
        return Err(SubtitleError::MalformedInput(format!(
            "invalid time range {} --> {}",
            format_srt_timestamp(start),
            format_srt_timestamp(end)
        )));
    }

    Ok(segment)
}

/// Read the four timestamp groups starting at `start_idx` into seconds
fn parse_timestamp_caps(caps: &regex::Captures, start_idx: usize) -> Result<f64, SubtitleError> {
    let number = |idx: usize| -> Result<u64, SubtitleError> {
        caps.get(idx)
            .map_or(Ok(0), |m| m.as_str().parse::<u64>())
            .map_err(|e| SubtitleError::MalformedInput(format!("bad timestamp field: {}", e)))
    };

    let hours = number(start_idx)?;
    let minutes = number(start_idx + 1)?;
    let seconds = number(start_idx + 2)?;
    if minutes >= 60 || seconds >= 60 {
        return Err(SubtitleError::MalformedInput(format!(
            "minutes or seconds out of range: {}:{}:{}",
            hours, minutes, seconds
        )));
    }

    // Fractions are right-padded to microseconds: ",5" is half a second
    let fraction_micros = match caps.get(start_idx + 3) {
        Some(m) => {
            let digits = m.as_str();
            let value: u64 = digits
                .parse()
                .map_err(|e| SubtitleError::MalformedInput(format!("bad fraction: {}", e)))?;
            value * 10u64.pow(6 - digits.len() as u32)
        }
        None => 0,
    };

    let micros = hours
        .checked_mul(3600)
        .and_then(|s| s.checked_add(minutes * 60 + seconds))
        .and_then(|s| s.checked_mul(MICROS_PER_SECOND))
        .and_then(|us| us.checked_add(fraction_micros))
        .ok_or_else(|| SubtitleError::MalformedInput(format!("timestamp out of range: {} hours", hours)))?;
    Ok(micros as f64 / MICROS_PER_SECOND as f64)
}
