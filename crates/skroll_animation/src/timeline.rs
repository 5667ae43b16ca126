//! Timelines
//!
//! A [`Timeline`] is an ordered set of tweens (and nested child timelines),
//! each placed at an offset in timeline-local seconds. Its one mutable piece
//! of state is the playhead position; `advance_to` moves the playhead and
//! writes every affected property through the stage. Positioning supports the
//! usual sequencing idioms: absolute offsets, "after the current end plus a
//! gap", and "overlapping the current end".
//!
//! `advance_to` is path-idempotent: a monotonic sequence of positions leaves
//! elements in the same state as one jump to the final position, and scrubbing
//! back to a previous position restores the values that were there — endpoint
//! latching happens once, the first time a step is reached, never again.

use smallvec::SmallVec;

use skroll_core::Stage;

use crate::tween::{ResolvedSpan, Tween};

/// Where a tween or child timeline is placed
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// At timeline time zero
    Start,
    /// Immediately after the current end
    End,
    /// At an absolute offset in seconds
    At(f32),
    /// After the current end plus a gap ("+=gap")
    After(f32),
    /// Overlapping the current end by some amount ("-=overlap")
    Overlap(f32),
}

#[derive(Clone, Debug)]
struct TweenEntry {
    offset: f32,
    tween: Tween,
    /// Endpoints latched on first application; `None` until the playhead
    /// first reaches the step (or permanently, if the element is missing)
    span: Option<ResolvedSpan>,
}

#[derive(Clone, Debug)]
struct ChildEntry {
    offset: f32,
    timeline: Timeline,
    /// Children only start receiving positions once the playhead has reached
    /// them, mirroring tween latching
    entered: bool,
}

/// Playback direction for ticker-driven playback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayDirection {
    Forward,
    Backward,
}

/// An ordered, composable sequence of animation steps
#[derive(Clone, Debug)]
pub struct Timeline {
    entries: SmallVec<[TweenEntry; 8]>,
    children: Vec<ChildEntry>,
    position: f32,
    direction: PlayDirection,
    playing: bool,
    /// Extra iterations after the first play-through (-1 = infinite)
    repeat: i32,
    /// Reverse direction on each iteration instead of wrapping
    yoyo: bool,
    iteration: i32,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            children: Vec::new(),
            position: 0.0,
            direction: PlayDirection::Forward,
            playing: false,
            repeat: 0,
            yoyo: false,
            iteration: 0,
        }
    }

    fn resolve_position(&self, position: Position) -> f32 {
        match position {
            Position::Start => 0.0,
            Position::End => self.total_duration(),
            Position::At(offset) => offset.max(0.0),
            Position::After(gap) => self.total_duration() + gap.max(0.0),
            Position::Overlap(overlap) => (self.total_duration() - overlap.max(0.0)).max(0.0),
        }
    }

    /// Add a tween at the given position (builder)
    pub fn add(mut self, tween: Tween, position: Position) -> Self {
        let offset = self.resolve_position(position);
        self.entries.push(TweenEntry {
            offset,
            tween,
            span: None,
        });
        self
    }

    /// Nest a child timeline at the given position (builder)
    ///
    /// The child's playhead is derived from the parent's: parent position
    /// minus the child's offset, clamped to the child's own range.
    pub fn child(mut self, timeline: Timeline, position: Position) -> Self {
        let offset = self.resolve_position(position);
        self.children.push(ChildEntry {
            offset,
            timeline,
            entered: false,
        });
        self
    }

    /// Extra iterations after the first play-through; -1 loops forever
    pub fn repeat(mut self, count: i32) -> Self {
        self.repeat = count;
        self
    }

    /// Reverse direction each iteration instead of wrapping to the start
    pub fn yoyo(mut self, enabled: bool) -> Self {
        self.yoyo = enabled;
        self
    }

    /// Maximum of (offset + duration) over all steps and children
    pub fn total_duration(&self) -> f32 {
        let entries = self
            .entries
            .iter()
            .map(|e| e.offset + e.tween.duration)
            .fold(0.0, f32::max);
        let children = self
            .children
            .iter()
            .map(|c| c.offset + c.timeline.total_duration())
            .fold(0.0, f32::max);
        entries.max(children)
    }

    /// Current playhead position in [0, total_duration]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Playhead position as a ratio of total duration
    pub fn progress(&self) -> f32 {
        let total = self.total_duration();
        if total <= 0.0 {
            1.0
        } else {
            (self.position / total).clamp(0.0, 1.0)
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Move the playhead and write every affected property
    pub fn advance_to(&mut self, position: f32, stage: &mut dyn Stage) {
        let pos = position.clamp(0.0, self.total_duration());
        self.position = pos;

        for entry in self.entries.iter_mut() {
            if entry.span.is_none() {
                if pos < entry.offset {
                    // Not reached yet; nothing to latch or write
                    continue;
                }
                match stage.read(entry.tween.element, entry.tween.property) {
                    Some(current) => entry.span = Some(entry.tween.resolve(current)),
                    // Element missing at first application: skip this step
                    // permanently, leave everything else untouched
                    None => continue,
                }
            }
            let span = match entry.span {
                Some(span) => span,
                None => continue,
            };
            let local = if entry.tween.duration > 0.0 {
                ((pos - entry.offset) / entry.tween.duration).clamp(0.0, 1.0)
            } else if pos >= entry.offset {
                1.0
            } else {
                0.0
            };
            let value = entry.tween.value_at(span, local);
            stage.write(entry.tween.element, entry.tween.property, value);
        }

        for child in self.children.iter_mut() {
            if !child.entered {
                if pos < child.offset {
                    continue;
                }
                child.entered = true;
            }
            child.timeline.advance_to(pos - child.offset, stage);
        }
    }

    /// Start playing forward from the current position
    pub fn play(&mut self) {
        self.direction = PlayDirection::Forward;
        self.playing = true;
    }

    /// Start playing backward from the current position
    pub fn reverse(&mut self) {
        self.direction = PlayDirection::Backward;
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Rewind to the start and play forward
    pub fn restart(&mut self) {
        self.position = 0.0;
        self.iteration = 0;
        self.play();
    }

    /// Jump straight to the end state and stop
    pub fn complete(&mut self, stage: &mut dyn Stage) {
        self.playing = false;
        self.advance_to(self.total_duration(), stage);
    }

    /// Advance wall-clock playback by `dt` seconds
    ///
    /// Returns true while still playing. Handles repeat wrapping and yoyo
    /// direction flips at the ends.
    pub fn tick(&mut self, dt: f32, stage: &mut dyn Stage) -> bool {
        if !self.playing {
            return false;
        }
        let total = self.total_duration();
        if total <= 0.0 {
            self.playing = false;
            self.advance_to(0.0, stage);
            return false;
        }

        let mut next = match self.direction {
            PlayDirection::Forward => self.position + dt,
            PlayDirection::Backward => self.position - dt,
        };

        if self.direction == PlayDirection::Forward && next >= total {
            if self.repeat < 0 || self.iteration < self.repeat {
                self.iteration += 1;
                if self.yoyo {
                    self.direction = PlayDirection::Backward;
                    next = (2.0 * total - next).max(0.0);
                } else {
                    next -= total;
                }
            } else {
                next = total;
                self.playing = false;
            }
        } else if self.direction == PlayDirection::Backward && next <= 0.0 {
            if self.yoyo && (self.repeat < 0 || self.iteration < self.repeat) {
                self.iteration += 1;
                self.direction = PlayDirection::Forward;
                next = (-next).min(total);
            } else {
                next = 0.0;
                self.playing = false;
            }
        }

        self.advance_to(next, stage);
        self.playing
    }
}
