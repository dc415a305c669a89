/// Easing curve applied inside one linear segment of a layer.
///
/// The named curves match the CSS/Framer presets (`ease-in`, `ease-out`, `ease-in-out`) so that
/// demonstrations authored against those presets keep their feel.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// Quarter circle, fast start and soft landing.
    CircOut,
    /// Arbitrary CSS-style cubic bezier; `x1` and `x2` must lie in `[0, 1]`.
    Bezier {
        /// First control point x.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl Ease {
    /// Map normalized segment progress `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0).solve(t),
            Self::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0).solve(t),
            Self::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0).solve(t),
            Self::CircOut => (1.0 - (t - 1.0) * (t - 1.0)).max(0.0).sqrt(),
            Self::Bezier { x1, y1, x2, y2 } => CubicBezier::new(x1, y1, x2, y2).solve(t),
        }
    }

    /// Whether the curve parameters describe a function of time.
    pub fn is_valid(self) -> bool {
        match self {
            Self::Bezier { x1, y1, x2, y2 } => {
                [x1, y1, x2, y2].iter().all(|v| v.is_finite())
                    && (0.0..=1.0).contains(&x1)
                    && (0.0..=1.0).contains(&x2)
            }
            _ => true,
        }
    }
}

/// Unit cubic bezier from `(0,0)` to `(1,1)`, solved for `y` given `x`.
#[derive(Clone, Copy, Debug)]
struct CubicBezier {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl CubicBezier {
    const EPSILON: f64 = 1e-7;

    fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;
        Self {
            ax,
            bx,
            cx,
            ay,
            by,
            cy,
        }
    }

    fn sample_x(&self, s: f64) -> f64 {
        ((self.ax * s + self.bx) * s + self.cx) * s
    }

    fn sample_y(&self, s: f64) -> f64 {
        ((self.ay * s + self.by) * s + self.cy) * s
    }

    fn sample_dx(&self, s: f64) -> f64 {
        (3.0 * self.ax * s + 2.0 * self.bx) * s + self.cx
    }

    fn solve(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.sample_y(self.solve_param(x))
    }

    /// Newton iterations first, bisection when the slope flattens out.
    fn solve_param(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..8 {
            let err = self.sample_x(s) - x;
            if err.abs() < Self::EPSILON {
                return s;
            }
            let d = self.sample_dx(s);
            if d.abs() < 1e-6 {
                break;
            }
            s -= err / d;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        s = x;
        for _ in 0..64 {
            let v = self.sample_x(s);
            if (v - x).abs() < Self::EPSILON {
                break;
            }
            if x > v {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        s
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
