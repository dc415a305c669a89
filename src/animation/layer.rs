use crate::{
    animation::ease::Ease,
    foundation::core::{Rgba8, Vec2},
    foundation::error::{TourlineError, TourlineResult},
    foundation::math::finite_at_least,
};

/// Interpolation contract for layer value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// A layer value at one control point or one evaluated instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Continuous scalar (opacity, scale, offsets, sizes, angles in degrees).
    Scalar(f64),
    /// Discrete on/off state.
    Flag(bool),
    /// 2D position.
    Point(Vec2),
    /// Color.
    Color(Rgba8),
}

/// Discriminant of [`Value`], used to keep a layer homogeneous.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// [`Value::Scalar`].
    Scalar,
    /// [`Value::Flag`].
    Flag,
    /// [`Value::Point`].
    Point,
    /// [`Value::Color`].
    Color,
}

impl Value {
    /// Kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Flag(_) => ValueKind::Flag,
            Self::Point(_) => ValueKind::Point,
            Self::Color(_) => ValueKind::Color,
        }
    }

    /// Scalar payload, if any.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    /// Flag payload, if any.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(v) => Some(*v),
            _ => None,
        }
    }

    /// Point payload, if any.
    pub fn as_point(&self) -> Option<Vec2> {
        match self {
            Self::Point(v) => Some(*v),
            _ => None,
        }
    }

    /// Color payload, if any.
    pub fn as_color(&self) -> Option<Rgba8> {
        match self {
            Self::Color(v) => Some(*v),
            _ => None,
        }
    }

    fn is_finite(&self) -> bool {
        match self {
            Self::Scalar(v) => v.is_finite(),
            Self::Point(p) => p.x.is_finite() && p.y.is_finite(),
            Self::Flag(_) | Self::Color(_) => true,
        }
    }
}

impl Lerp for Value {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(<f64 as Lerp>::lerp(a, b, t)),
            // kurbo's inherent `Vec2::lerp` shadows the trait method.
            (Self::Point(a), Self::Point(b)) => Self::Point(<Vec2 as Lerp>::lerp(a, b, t)),
            (Self::Color(a), Self::Color(b)) => Self::Color(<Rgba8 as Lerp>::lerp(a, b, t)),
            // Flags and mismatched kinds never reach here after validation; hold left.
            _ => *a,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<Vec2> for Value {
    fn from(v: Vec2) -> Self {
        Self::Point(v)
    }
}

impl From<Rgba8> for Value {
    fn from(v: Rgba8) -> Self {
        Self::Color(v)
    }
}

/// Visual attribute a layer drives on its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Opacity in `[0, 1]`; zero hides the target.
    Opacity,
    /// Uniform scale; zero hides the target.
    Scale,
    /// Position offset in pixels.
    Translate,
    /// Horizontal offset in pixels.
    X,
    /// Vertical offset in pixels.
    Y,
    /// Rotation in degrees.
    Rotate,
    /// Width in pixels.
    Width,
    /// Height in pixels.
    Height,
    /// Corner radius in pixels.
    Radius,
    /// Fill color.
    Background,
    /// Text/stroke color.
    Foreground,
    /// Border color.
    Border,
    /// Explicit on/off visibility.
    Visible,
    /// Fraction of content revealed (typewriter, expanding panels); zero hides the target.
    Reveal,
}

impl Property {
    /// Whether `value` leaves the target visible for this property.
    ///
    /// Only gating properties can hide a target; everything else is visible by definition.
    pub fn shows(self, value: &Value) -> bool {
        match (self, value) {
            (Self::Opacity | Self::Scale | Self::Reveal, Value::Scalar(v)) => *v > 0.0,
            (Self::Visible, Value::Flag(v)) => *v,
            _ => true,
        }
    }
}

/// How values are produced between two control points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interp {
    /// Continuous interpolation shaped by the layer's [`Ease`].
    #[default]
    Linear,
    /// Snap to the left control point's value.
    Step,
}

/// One `(time fraction, value)` pair of a layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlPoint {
    /// Fraction of the timeline cycle in `[0, 1]`.
    pub t: f64,
    /// Value reached at `t`.
    pub value: Value,
}

impl ControlPoint {
    /// Build a control point.
    pub fn new(t: f64, value: impl Into<Value>) -> Self {
        Self {
            t,
            value: value.into(),
        }
    }
}

/// One independently timed attribute track of a timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layer {
    /// Name of the visual element this layer animates (e.g. `"cursor"`).
    pub target: String,
    /// Attribute driven on `target`.
    pub property: Property,
    /// Control points sorted by non-decreasing `t`.
    pub points: Vec<ControlPoint>,
    /// Seconds before the layer's first cycle starts.
    #[serde(default)]
    pub delay: f64,
    /// Replay forever, resting `repeat_delay` seconds between cycles.
    #[serde(default, rename = "loop")]
    pub looping: bool,
    /// Interpolation between adjacent points.
    #[serde(default)]
    pub interp: Interp,
    /// Easing applied inside linear segments.
    #[serde(default)]
    pub ease: Ease,
}

impl Layer {
    /// Validate static invariants; called by timeline construction.
    pub fn validate(&self) -> TourlineResult<()> {
        let name = self.label();
        let Some(first) = self.points.first() else {
            return Err(TourlineError::timeline(format!(
                "layer '{name}' must have at least one control point"
            )));
        };
        if !finite_at_least(self.delay, 0.0) {
            return Err(TourlineError::timeline(format!(
                "layer '{name}' delay must be finite and >= 0"
            )));
        }
        if !self.ease.is_valid() {
            return Err(TourlineError::timeline(format!(
                "layer '{name}' has an invalid bezier ease"
            )));
        }
        for p in &self.points {
            if !p.t.is_finite() || !(0.0..=1.0).contains(&p.t) {
                return Err(TourlineError::timeline(format!(
                    "layer '{name}' control point time {} is outside [0, 1]",
                    p.t
                )));
            }
            if !p.value.is_finite() {
                return Err(TourlineError::timeline(format!(
                    "layer '{name}' has a non-finite control point value"
                )));
            }
        }
        if !self.points.windows(2).all(|w| w[0].t <= w[1].t) {
            return Err(TourlineError::timeline(format!(
                "layer '{name}' control points must be sorted by time"
            )));
        }
        let kind = first.value.kind();
        if self.points.iter().any(|p| p.value.kind() != kind) {
            return Err(TourlineError::timeline(format!(
                "layer '{name}' mixes value kinds"
            )));
        }
        if kind == ValueKind::Flag && self.interp == Interp::Linear {
            return Err(TourlineError::timeline(format!(
                "layer '{name}' holds discrete flags and must use step interpolation"
            )));
        }
        Ok(())
    }

    /// `target.property`, for diagnostics.
    pub fn label(&self) -> String {
        format!("{}.{:?}", self.target, self.property)
    }

    /// Value kind shared by every control point.
    pub fn value_kind(&self) -> Option<ValueKind> {
        self.points.first().map(|p| p.value.kind())
    }

    pub(crate) fn first_value(&self) -> Value {
        self.points[0].value
    }

    pub(crate) fn last_value(&self) -> Value {
        self.points[self.points.len() - 1].value
    }

    /// Value at normalized cycle phase `p`.
    pub(crate) fn value_at(&self, p: f64) -> Value {
        let idx = self.points.partition_point(|k| k.t <= p);

        if idx == 0 {
            return self.first_value();
        }
        if idx >= self.points.len() {
            return self.last_value();
        }

        let a = &self.points[idx - 1];
        let b = &self.points[idx];
        let span = b.t - a.t;
        if span <= 0.0 {
            return a.value;
        }

        match self.interp {
            Interp::Step => a.value,
            Interp::Linear => {
                let local = (p - a.t) / span;
                Value::lerp(&a.value, &b.value, self.ease.apply(local))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/layer.rs"]
mod tests;
