//! Splitting text into segments for staggered reveal animations.
//!
//! A renderer wraps each animated segment in its own element and delays it by
//! `index * stagger`. Segmentation itself never touches the renderer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Granularity of the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// One segment per character.
    Chars,
    /// One segment per space-separated word.
    #[default]
    Words,
    /// The whole text as one segment.
    Lines,
}

/// What a segment holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// A single non-space character.
    Char,
    /// A run of literal spaces; never animated.
    Space,
    /// A word.
    Word,
    /// A full line of text.
    Line,
}

/// One piece of the split text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment kind.
    pub kind: SegmentKind,
    /// Text covered by the segment.
    pub text: String,
    /// Position among animated segments; `None` for spaces.
    pub stagger_index: Option<usize>,
}

impl Segment {
    /// Start offset of this segment's animation.
    #[must_use]
    pub fn delay(&self, timing: &RevealTiming) -> Option<Duration> {
        let index = u32::try_from(self.stagger_index?).ok()?;
        timing.stagger.checked_mul(index)?.checked_add(timing.delay)
    }
}

/// Per-segment timing of a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealTiming {
    /// Gap between consecutive animated segments.
    pub stagger: Duration,
    /// Duration of each segment's animation.
    pub duration: Duration,
    /// Offset applied before the first segment.
    pub delay: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            stagger: Duration::from_millis(50),
            duration: Duration::from_secs(1),
            delay: Duration::ZERO,
        }
    }
}

struct Builder {
    out: Vec<Segment>,
    next: usize,
}

impl Builder {
    fn animated(&mut self, kind: SegmentKind, text: impl Into<String>) {
        self.out.push(Segment {
            kind,
            text: text.into(),
            stagger_index: Some(self.next),
        });
        self.next += 1;
    }

    fn space(&mut self) {
        if let Some(last) = self.out.last_mut().filter(|s| s.kind == SegmentKind::Space) {
            last.text.push(' ');
            return;
        }
        self.out.push(Segment {
            kind: SegmentKind::Space,
            text: " ".to_string(),
            stagger_index: None,
        });
    }
}

/// Split `text` for a reveal animation.
///
/// Concatenating the segments' text always reproduces the input. In `Words`
/// mode the text is split on single spaces; empty words between repeated
/// spaces are dropped and the spaces merge into one `Space` segment.
#[must_use]
pub fn segment(text: &str, mode: SplitMode) -> Vec<Segment> {
    let mut b = Builder {
        out: Vec::new(),
        next: 0,
    };
    match mode {
        SplitMode::Chars => {
            for ch in text.chars() {
                if ch == ' ' {
                    b.space();
                } else {
                    b.animated(SegmentKind::Char, ch);
                }
            }
        }
        SplitMode::Words => {
            for (i, word) in text.split(' ').enumerate() {
                if i > 0 {
                    b.space();
                }
                if !word.is_empty() {
                    b.animated(SegmentKind::Word, word);
                }
            }
        }
        SplitMode::Lines => {
            if !text.is_empty() {
                b.animated(SegmentKind::Line, text);
            }
        }
    }
    b.out
}
