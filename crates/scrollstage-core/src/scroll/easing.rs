//! L4 Atomic Layer: ease-out curves for slide transitions
//!
//! Every curve is a power ease-out, `1 - (1 - t)^n`, the family slide
//! transitions are authored in. `QuadOut` (n = 2) is the default.

pub use crate::config::EasingType;

impl EasingType {
    /// Exponent of the power curve
    fn power(self) -> i32 {
        match self {
            EasingType::Linear => 1,
            EasingType::QuadOut => 2,
            EasingType::CubicOut => 3,
            EasingType::QuartOut => 4,
        }
    }

    /// Eased progress for linear progress `t`; `t` is clamped to [0, 1]
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        power_out(t.clamp(0.0, 1.0), self.power())
    }
}

#[inline]
fn power_out(t: f64, power: i32) -> f64 {
    1.0 - (1.0 - t).powi(power)
}
