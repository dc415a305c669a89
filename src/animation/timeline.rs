use crate::{
    animation::layer::{Layer, Property, Value},
    foundation::error::{TourlineError, TourlineResult},
    foundation::math::{Fnv1a64, finite_at_least},
};

/// Upper bound on frames produced by one [`Timeline::sample_every`] call.
pub(crate) const MAX_SAMPLES: usize = 1_000_000;

/// Validated timeline descriptor: a fixed-length cycle shared by many layers.
///
/// A `Timeline` can only be obtained through [`Timeline::new`], the builder, or deserialization,
/// all of which run the same validation, so evaluation never fails.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "TimelineDef", into = "TimelineDef")]
pub struct Timeline {
    cycle_duration: f64,
    repeat_delay: f64,
    layers: Vec<Layer>,
}

/// Unvalidated serde boundary form of a [`Timeline`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TimelineDef {
    /// Seconds in one cycle; must be > 0.
    pub cycle_duration: f64,
    /// Rest in seconds between cycles of looping layers.
    #[serde(default)]
    pub repeat_delay: f64,
    /// Layer tracks.
    pub layers: Vec<Layer>,
}

impl TryFrom<TimelineDef> for Timeline {
    type Error = TourlineError;

    fn try_from(def: TimelineDef) -> Result<Self, Self::Error> {
        Self::new(def.cycle_duration, def.repeat_delay, def.layers)
    }
}

impl From<Timeline> for TimelineDef {
    fn from(t: Timeline) -> Self {
        Self {
            cycle_duration: t.cycle_duration,
            repeat_delay: t.repeat_delay,
            layers: t.layers,
        }
    }
}

/// Where a layer is within its own schedule at a sampled instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerPhase {
    /// Before the layer's delay has elapsed; holds the first value.
    Pending,
    /// Inside a cycle.
    Running,
    /// Between two cycles of a looping layer; holds the last value.
    Resting,
    /// Past the single cycle of a non-looping layer; holds the last value.
    Finished,
}

/// Evaluated state of one layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayerSample {
    /// Animated element.
    pub target: String,
    /// Animated attribute.
    pub property: Property,
    /// Current value.
    pub value: Value,
    /// Schedule position.
    pub phase: LayerPhase,
    /// Normalized cycle phase in `[0, 1]` (0 while pending, 1 while resting/finished).
    pub progress: f64,
    /// False when a gating property (opacity, scale, reveal, visible) hides the target.
    pub visible: bool,
}

/// All layer values of a timeline at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSample {
    /// Seconds since the timeline started.
    pub elapsed: f64,
    /// One entry per layer, in declaration order.
    pub layers: Vec<LayerSample>,
}

impl FrameSample {
    /// Sample for `target.property`, if such a layer exists.
    pub fn get(&self, target: &str, property: Property) -> Option<&LayerSample> {
        self.layers
            .iter()
            .find(|l| l.target == target && l.property == property)
    }

    /// Current value of `target.property`.
    pub fn value(&self, target: &str, property: Property) -> Option<Value> {
        self.get(target, property).map(|l| l.value)
    }

    /// A target is visible when none of its gating layers hides it.
    pub fn is_visible(&self, target: &str) -> bool {
        self.layers
            .iter()
            .filter(|l| l.target == target)
            .all(|l| l.visible)
    }

    /// Stable digest of the exact bit patterns in this sample.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_f64(self.elapsed);
        for l in &self.layers {
            h.write_str(&l.target);
            h.write_u8(l.property as u8);
            match l.value {
                Value::Scalar(v) => {
                    h.write_u8(0);
                    h.write_f64(v);
                }
                Value::Flag(v) => {
                    h.write_u8(1);
                    h.write_u8(u8::from(v));
                }
                Value::Point(p) => {
                    h.write_u8(2);
                    h.write_f64(p.x);
                    h.write_f64(p.y);
                }
                Value::Color(c) => {
                    h.write_u8(3);
                    h.write_bytes(&[c.r, c.g, c.b, c.a]);
                }
            }
            h.write_u8(l.phase as u8);
            h.write_f64(l.progress);
            h.write_u8(u8::from(l.visible));
        }
        h.finish()
    }
}

impl Timeline {
    /// Build a timeline, rejecting malformed descriptors.
    pub fn new(cycle_duration: f64, repeat_delay: f64, layers: Vec<Layer>) -> TourlineResult<Self> {
        if !cycle_duration.is_finite() || cycle_duration <= 0.0 {
            return Err(TourlineError::timeline(format!(
                "cycle duration must be finite and > 0 (got {cycle_duration})"
            )));
        }
        if !finite_at_least(repeat_delay, 0.0) {
            return Err(TourlineError::timeline(format!(
                "repeat delay must be finite and >= 0 (got {repeat_delay})"
            )));
        }
        for layer in &layers {
            layer.validate()?;
        }
        Ok(Self {
            cycle_duration,
            repeat_delay,
            layers,
        })
    }

    /// Parse and validate a JSON descriptor.
    pub fn from_json(s: &str) -> TourlineResult<Self> {
        serde_json::from_str(s).map_err(|e| TourlineError::serde(e.to_string()))
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> TourlineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TourlineError::serde(e.to_string()))
    }

    /// Seconds in one cycle.
    pub fn cycle_duration(&self) -> f64 {
        self.cycle_duration
    }

    /// Rest between cycles of looping layers.
    pub fn repeat_delay(&self) -> f64 {
        self.repeat_delay
    }

    /// Length of one loop iteration including the rest.
    pub fn period(&self) -> f64 {
        self.cycle_duration + self.repeat_delay
    }

    /// Layer tracks in declaration order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Elapsed time after which every layer holds its final value, or `None` if any layer loops.
    pub fn settles_at(&self) -> Option<f64> {
        if self.layers.iter().any(|l| l.looping) {
            return None;
        }
        let max_delay = self.layers.iter().map(|l| l.delay).fold(0.0, f64::max);
        Some(max_delay + self.cycle_duration)
    }

    /// Evaluate every layer at `elapsed` seconds since start.
    ///
    /// Pure: identical inputs produce bit-identical output. NaN is treated as time zero.
    pub fn sample(&self, elapsed: f64) -> FrameSample {
        let elapsed = if elapsed.is_nan() {
            0.0
        } else if elapsed == f64::INFINITY {
            f64::MAX
        } else {
            elapsed
        };
        FrameSample {
            elapsed,
            layers: self
                .layers
                .iter()
                .map(|layer| self.sample_layer(layer, elapsed))
                .collect(),
        }
    }

    /// Evaluate at `0, step, 2*step, ...` up to and including `until`.
    ///
    /// Fails when that would take more than `MAX_SAMPLES` (one million) frames.
    pub fn sample_every(&self, step: f64, until: f64) -> TourlineResult<Vec<FrameSample>> {
        if !step.is_finite() || step <= 0.0 {
            return Err(TourlineError::validation("sample step must be finite and > 0"));
        }
        if !finite_at_least(until, 0.0) {
            return Err(TourlineError::validation(
                "sample range end must be finite and >= 0",
            ));
        }
        let intervals = (until / step).floor();
        if intervals >= MAX_SAMPLES as f64 {
            return Err(TourlineError::validation(format!(
                "sampling 0..={until}s every {step}s needs more than {MAX_SAMPLES} frames"
            )));
        }
        let count = (intervals as usize)
            .checked_add(1)
            .ok_or_else(|| TourlineError::validation("sample count overflows"))?;
        Ok((0..count)
            .map(|i| self.sample(i as f64 * step))
            .collect())
    }

    fn sample_layer(&self, layer: &Layer, elapsed: f64) -> LayerSample {
        let u = elapsed - layer.delay;

        let (value, phase, progress) = if u < 0.0 {
            (layer.first_value(), LayerPhase::Pending, 0.0)
        } else if layer.looping {
            let local = u % self.period();
            if local > self.cycle_duration {
                (layer.last_value(), LayerPhase::Resting, 1.0)
            } else {
                let p = local / self.cycle_duration;
                (layer.value_at(p), LayerPhase::Running, p)
            }
        } else if u > self.cycle_duration {
            (layer.last_value(), LayerPhase::Finished, 1.0)
        } else {
            let p = u / self.cycle_duration;
            (layer.value_at(p), LayerPhase::Running, p)
        };

        LayerSample {
            target: layer.target.clone(),
            property: layer.property,
            value,
            phase,
            progress,
            visible: layer.property.shows(&value),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
