//! L3 Molecular Layer: frame-driven tween scheduler
//!
//! Holds the current property values of every layer and advances running
//! timelines by the frame delta the host passes in.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::EasingType;
use crate::scroll::timing::{lerp, progress};

use super::{LayerId, Property, Timeline, TimelineId, Tween, TweenScheduler};

/// Tween that has started: start and end values are fixed
#[derive(Debug, Clone)]
struct Resolved {
    property: Property,
    from: f64,
    to: f64,
}

#[derive(Debug, Clone)]
struct ActiveTween {
    tween: Tween,
    resolved: Option<Vec<Resolved>>,
}

#[derive(Debug, Clone)]
struct ActiveTimeline {
    id: TimelineId,
    elapsed: Duration,
    duration: Duration,
    easing: EasingType,
    tweens: Vec<ActiveTween>,
}

/// Tween scheduler advanced explicitly once per frame
#[derive(Debug, Clone, Default)]
pub struct Tweener {
    values: BTreeMap<(LayerId, Property), f64>,
    active: Vec<ActiveTimeline>,
    next_id: u64,
}

impl Tweener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any timeline is still running
    #[inline]
    pub fn is_animating(&self) -> bool {
        !self.active.is_empty()
    }

    /// Advance every running timeline by `dt`.
    ///
    /// Returns the ids of timelines that finished during this advance, in the
    /// order they were played. A finished timeline is dropped, so each id is
    /// returned once.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimelineId> {
        let mut finished = Vec::new();
        let mut active = std::mem::take(&mut self.active);

        for timeline in &mut active {
            timeline.elapsed += dt;
            for tween in &mut timeline.tweens {
                self.step(tween, timeline.elapsed, timeline.easing);
            }
            if timeline.elapsed >= timeline.duration {
                finished.push(timeline.id);
            }
        }

        active.retain(|t| !finished.contains(&t.id));
        self.active = active;

        finished
    }

    /// Drop all running timelines and recorded values
    pub fn reset(&mut self) {
        self.values.clear();
        self.active.clear();
    }

    fn step(&mut self, tween: &mut ActiveTween, elapsed: Duration, easing: EasingType) {
        if elapsed < tween.tween.offset {
            return;
        }

        let layer = tween.tween.layer;
        if tween.resolved.is_none() {
            let resolved = tween
                .tween
                .props
                .iter()
                .map(|&(property, value)| {
                    let from = self.value(layer, property);
                    Resolved {
                        property,
                        from,
                        to: value.resolve(from),
                    }
                })
                .collect();
            tween.resolved = Some(resolved);
        }

        let t = easing.apply(progress(elapsed - tween.tween.offset, tween.tween.duration));
        if let Some(resolved) = &tween.resolved {
            for r in resolved {
                let value = if t >= 1.0 { r.to } else { lerp(r.from, r.to, t) };
                self.values.insert((layer, r.property), value);
            }
        }
    }
}

impl TweenScheduler for Tweener {
    fn set(&mut self, layer: LayerId, props: &[(Property, f64)]) {
        for &(property, value) in props {
            self.values.insert((layer, property), value);
        }
    }

    fn play(&mut self, timeline: Timeline) -> TimelineId {
        self.next_id += 1;
        let id = TimelineId(self.next_id);
        tracing::trace!("Playing timeline {:?} with {} tweens", id, timeline.tweens.len());

        self.active.push(ActiveTimeline {
            id,
            elapsed: Duration::ZERO,
            duration: timeline.duration(),
            easing: timeline.easing,
            tweens: timeline
                .tweens
                .into_iter()
                .map(|tween| ActiveTween {
                    tween,
                    resolved: None,
                })
                .collect(),
        });
        id
    }

    fn value(&self, layer: LayerId, property: Property) -> f64 {
        self.values
            .get(&(layer, property))
            .copied()
            .unwrap_or_else(|| property.initial())
    }
}
