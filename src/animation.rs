//! Recording and playback of per-shape translation animations.
//!
//! Time is whatever clock the host passes in, in seconds. Nothing here
//! runs on its own: the app calls [`Animator::tick`] once per frame.

use egui::Vec2;
use log::{debug, info};

use crate::shape::ShapeId;

/// Length of one recorded translation
pub const TRANSLATE_DURATION: f64 = 1.0;
/// Time for the fade pulse to go from full to dimmed opacity
pub const FADE_HALF_PERIOD: f64 = 0.5;
pub const FADE_MIN_OPACITY: f32 = 0.5;

/// Indefinite, auto-reversing opacity pulse marking the armed shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadePulse {
    started_at: f64,
}

impl FadePulse {
    pub fn start(now: f64) -> Self {
        Self { started_at: now }
    }

    /// Opacity at `now`: 1.0 at the start of every cycle, 0.5 half way.
    pub fn opacity(&self, now: f64) -> f32 {
        let elapsed = (now - self.started_at).max(0.0);
        let phase = (elapsed / FADE_HALF_PERIOD) % 2.0;
        let t = (if phase <= 1.0 { phase } else { 2.0 - phase }) as f32;
        1.0 - (1.0 - FADE_MIN_OPACITY) * t
    }
}

/// A recorded translation for one shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslateRecord {
    pub shape: ShapeId,
    pub from: Vec2,
    pub to: Vec2,
    /// Translation currently applied to the shape
    pub current: Vec2,
}

impl TranslateRecord {
    pub fn new(shape: ShapeId, to: Vec2) -> Self {
        Self {
            shape,
            from: Vec2::ZERO,
            to,
            current: Vec2::ZERO,
        }
    }

    fn sample(&mut self, t: f32) {
        self.current = self.from + (self.to - self.from) * ease_both(t);
    }
}

/// Smooth acceleration out of the start and into the end
fn ease_both(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Playback {
    #[default]
    Stopped,
    Playing {
        started_at: f64,
    },
}

/// Every recorded translation, played as one parallel group
#[derive(Debug, Default)]
pub struct AnimationGroup {
    records: Vec<TranslateRecord>,
    playback: Playback,
}

impl AnimationGroup {
    /// Add a record. A shape has at most one record; a newer one replaces it.
    pub fn add(&mut self, record: TranslateRecord) {
        match self.records.iter_mut().find(|r| r.shape == record.shape) {
            Some(existing) => {
                existing.from = record.from;
                existing.to = record.to;
            }
            None => self.records.push(record),
        }
    }

    pub fn remove_shape(&mut self, shape: ShapeId) {
        self.records.retain(|r| r.shape != shape);
    }

    pub fn record_for(&self, shape: ShapeId) -> Option<&TranslateRecord> {
        self.records.iter().find(|r| r.shape == shape)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.playback, Playback::Playing { .. })
    }

    /// Halt playback. Shapes keep their current translation.
    pub fn stop(&mut self) {
        self.playback = Playback::Stopped;
    }

    /// Start every record from the given offset
    pub fn play_from(&mut self, offset: Vec2) {
        for record in &mut self.records {
            record.from = offset;
        }
    }

    pub fn play_from_start(&mut self, now: f64) {
        for record in &mut self.records {
            record.sample(0.0);
        }
        self.playback = Playback::Playing { started_at: now };
    }

    pub fn tick(&mut self, now: f64) {
        let Playback::Playing { started_at } = self.playback else {
            return;
        };

        let t = ((now - started_at) / TRANSLATE_DURATION).clamp(0.0, 1.0) as f32;
        for record in &mut self.records {
            record.sample(t);
        }
        if t >= 1.0 {
            debug!("animation group finished ({} records)", self.records.len());
            self.playback = Playback::Stopped;
        }
    }

    pub fn translation_of(&self, shape: ShapeId) -> Vec2 {
        self.record_for(shape).map_or(Vec2::ZERO, |r| r.current)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Armed {
    shape: ShapeId,
    fader: FadePulse,
}

/// The animate tool's recorder and player
#[derive(Debug, Default)]
pub struct Animator {
    armed: Option<Armed>,
    group: AnimationGroup,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start pulsing `shape` and prepare a translation for it
    pub fn arm(&mut self, shape: ShapeId, now: f64) {
        debug!("armed shape {} for animation", shape);
        self.armed = Some(Armed {
            shape,
            fader: FadePulse::start(now),
        });
    }

    /// Stop the pulse and drop the pending translation
    pub fn disarm(&mut self) -> Option<ShapeId> {
        self.armed.take().map(|armed| armed.shape)
    }

    pub fn armed(&self) -> Option<ShapeId> {
        self.armed.map(|armed| armed.shape)
    }

    /// Commit the pending translation of the armed shape
    pub fn capture(&mut self, to: Vec2) -> Option<ShapeId> {
        let armed = self.armed.take()?;
        self.group.add(TranslateRecord::new(armed.shape, to));
        info!("added animation for shape {} to {:?}", armed.shape, to);
        Some(armed.shape)
    }

    /// Replay every recording from each shape's own position
    pub fn replay(&mut self, now: f64) {
        self.group.stop();
        self.group.play_from(Vec2::ZERO);
        self.group.play_from_start(now);
        debug!("replaying {} animations", self.group.len());
    }

    pub fn tick(&mut self, now: f64) {
        self.group.tick(now);
    }

    /// Forget everything about a shape that left the scene
    pub fn forget(&mut self, shape: ShapeId) {
        if self.armed() == Some(shape) {
            self.armed = None;
        }
        self.group.remove_shape(shape);
    }

    pub fn group(&self) -> &AnimationGroup {
        &self.group
    }

    pub fn translation_of(&self, shape: ShapeId) -> Vec2 {
        self.group.translation_of(shape)
    }

    pub fn opacity_of(&self, shape: ShapeId, now: f64) -> f32 {
        match self.armed {
            Some(armed) if armed.shape == shape => armed.fader.opacity(now),
            _ => 1.0,
        }
    }

    /// Whether anything is moving and the host should keep repainting
    pub fn is_active(&self) -> bool {
        self.armed.is_some() || self.group.is_playing()
    }
}
