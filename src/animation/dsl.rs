use crate::{
    animation::{
        ease::Ease,
        layer::{ControlPoint, Interp, Layer, Property, Value},
        timeline::Timeline,
    },
    foundation::error::{TourlineError, TourlineResult},
};

/// Builder for a [`Timeline`].
pub struct TimelineBuilder {
    cycle_duration: f64,
    repeat_delay: f64,
    layers: Vec<Layer>,
}

impl TimelineBuilder {
    /// Start a timeline with a cycle of `cycle_duration` seconds.
    pub fn new(cycle_duration: f64) -> Self {
        Self {
            cycle_duration,
            repeat_delay: 0.0,
            layers: Vec::new(),
        }
    }

    /// Rest between cycles of looping layers.
    pub fn repeat_delay(mut self, secs: f64) -> Self {
        self.repeat_delay = secs;
        self
    }

    /// Append one layer.
    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Append several layers in order.
    pub fn layers(mut self, layers: impl IntoIterator<Item = Layer>) -> Self {
        self.layers.extend(layers);
        self
    }

    /// Validate and build.
    pub fn build(self) -> TourlineResult<Timeline> {
        Timeline::new(self.cycle_duration, self.repeat_delay, self.layers)
    }
}

/// Builder for one [`Layer`].
pub struct LayerBuilder {
    target: String,
    property: Property,
    points: Vec<ControlPoint>,
    delay: f64,
    looping: bool,
    interp: Interp,
    ease: Ease,
}

impl LayerBuilder {
    /// Start a layer driving `property` on `target`.
    pub fn new(target: impl Into<String>, property: Property) -> Self {
        Self {
            target: target.into(),
            property,
            points: Vec::new(),
            delay: 0.0,
            looping: false,
            interp: Interp::Linear,
            ease: Ease::Linear,
        }
    }

    /// Append a control point at cycle fraction `t`.
    pub fn point(mut self, t: f64, value: impl Into<Value>) -> Self {
        self.points.push(ControlPoint::new(t, value));
        self
    }

    /// Zip parallel `times`/`values` arrays into control points.
    pub fn times_values<V: Into<Value>>(
        mut self,
        times: &[f64],
        values: impl IntoIterator<Item = V>,
    ) -> TourlineResult<Self> {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.len() != times.len() {
            return Err(TourlineError::timeline(format!(
                "layer '{}' has {} times but {} values",
                self.target,
                times.len(),
                values.len()
            )));
        }
        self.points.extend(
            times
                .iter()
                .zip(values)
                .map(|(&t, value)| ControlPoint { t, value }),
        );
        Ok(self)
    }

    /// Seconds before the first cycle.
    pub fn delay(mut self, secs: f64) -> Self {
        self.delay = secs;
        self
    }

    /// Replay forever.
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Snap between points instead of interpolating.
    pub fn step(mut self) -> Self {
        self.interp = Interp::Step;
        self
    }

    /// Easing for linear segments.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Validate and build.
    pub fn build(self) -> TourlineResult<Layer> {
        let layer = Layer {
            target: self.target,
            property: self.property,
            points: self.points,
            delay: self.delay,
            looping: self.looping,
            interp: self.interp,
            ease: self.ease,
        };
        layer.validate()?;
        Ok(layer)
    }
}

/// `count` copies of `layer`, the i-th targeting `"{target}#{i}"` and starting
/// `start_delay + i * step` seconds in.
pub fn stagger(layer: &Layer, count: usize, start_delay: f64, step: f64) -> Vec<Layer> {
    (0..count)
        .map(|i| Layer {
            target: format!("{}#{i}", layer.target),
            delay: start_delay + i as f64 * step,
            ..layer.clone()
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/dsl.rs"]
mod tests;
