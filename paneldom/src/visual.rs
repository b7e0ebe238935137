use std::collections::HashMap;
use std::time::Instant;

use crate::document::Document;
use crate::transitions::TransitionConfig;

/// What the caller wants a target to become.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualIntent {
    Show,
    Hide,
}

/// Whether the change lands immediately or over the configured duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    Instant,
    Animated,
}

/// One-way rendering commands.
///
/// Callers never wait for completion: an animated request is recorded
/// synchronously and plays out on the renderer's own timeline.
pub trait Renderer {
    fn apply(&mut self, doc: &mut Document, target: &str, intent: VisualIntent, timing: Timing);
}

/// A single in-flight slide.
#[derive(Debug, Clone)]
struct ActiveSlide {
    from: u16,
    to: u16,
    start: Instant,
    config: TransitionConfig,
    intent: VisualIntent,
}

impl ActiveSlide {
    fn height_at(&self, now: Instant) -> u16 {
        let elapsed = now.saturating_duration_since(self.start);
        let progress = if self.config.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.config.duration.as_secs_f32()).min(1.0)
        };
        lerp_u16(self.from, self.to, self.config.easing.apply(progress))
    }

    fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.config.duration
    }
}

/// Slides a target's height between zero and its natural height.
///
/// A shown element is un-hidden as soon as the slide starts; a hidden one
/// stays visible until its slide completes on `advance`.
#[derive(Debug)]
pub struct SlideRenderer {
    config: TransitionConfig,
    active: HashMap<String, ActiveSlide>,
    /// When set, animated requests complete instantly.
    reduced_motion: bool,
}

impl SlideRenderer {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            active: HashMap::new(),
            reduced_motion: false,
        }
    }

    /// Enable or disable reduced motion (accessibility).
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    /// Returns true if any slide is currently in flight.
    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    /// Height the target currently occupies: the interpolated value while a
    /// slide is in flight, else its natural height or zero when hidden.
    pub fn visible_height(&self, doc: &Document, target: &str, now: Instant) -> u16 {
        if let Some(slide) = self.active.get(target) {
            return slide.height_at(now);
        }
        match doc.get(target) {
            Some(el) if !el.hidden => el.height,
            _ => 0,
        }
    }

    /// Retire finished slides and drop slides whose target left the
    /// document. A finished hide marks its target hidden.
    pub fn advance(&mut self, doc: &mut Document, now: Instant) {
        let mut finished = Vec::new();
        self.active.retain(|id, slide| {
            if !doc.contains(id) {
                return false;
            }
            if slide.finished(now) {
                finished.push((id.clone(), slide.intent));
                return false;
            }
            true
        });
        for (id, intent) in finished {
            if intent == VisualIntent::Hide {
                if let Some(el) = doc.get_mut(&id) {
                    el.hidden = true;
                }
            }
        }
    }
}

impl Renderer for SlideRenderer {
    fn apply(&mut self, doc: &mut Document, target: &str, intent: VisualIntent, timing: Timing) {
        let now = Instant::now();
        let from = self.visible_height(doc, target, now);

        let Some(el) = doc.get_mut(target) else {
            log::debug!("[visual] unknown target {target:?}, dropping {intent:?}");
            return;
        };

        let timing = if self.reduced_motion {
            Timing::Instant
        } else {
            timing
        };
        log::debug!("[visual] {target}: {intent:?} ({timing:?})");

        match (intent, timing) {
            (VisualIntent::Show, Timing::Instant) => {
                self.active.remove(target);
                el.hidden = false;
            }
            (VisualIntent::Hide, Timing::Instant) => {
                self.active.remove(target);
                el.hidden = true;
            }
            (VisualIntent::Show, Timing::Animated) => {
                let to = el.height;
                el.hidden = false;
                self.active.insert(
                    target.to_string(),
                    ActiveSlide {
                        from,
                        to,
                        start: now,
                        config: self.config,
                        intent,
                    },
                );
            }
            (VisualIntent::Hide, Timing::Animated) => {
                if el.hidden {
                    // Nothing visible to slide away.
                    self.active.remove(target);
                    return;
                }
                self.active.insert(
                    target.to_string(),
                    ActiveSlide {
                        from,
                        to: 0,
                        start: now,
                        config: self.config,
                        intent,
                    },
                );
            }
        }
    }
}

/// Linear interpolation for u16 values.
fn lerp_u16(from: u16, to: u16, t: f32) -> u16 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as u16
}
