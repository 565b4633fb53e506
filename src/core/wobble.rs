use super::constants::{FULL_TURN, HARMONIC_TIME_RATES, HARMONIC_WEIGHTS, SAMPLES_PER_REVOLUTION};
use super::harmonics::CurveHarmonics;
use glam::DVec2;

/// Unwobbled radius of curve `c`.
///
/// Flat mode insets linearly by `radius_step` pixels; sphere mode treats
/// `radius_step` as degrees of latitude. Either may go negative.
#[inline]
pub fn curve_base_radius(base_radius: f64, c: u32, radius_step: f64, sphere_mode: bool) -> f64 {
    if sphere_mode {
        base_radius * (c as f64 * radius_step.to_radians()).cos()
    } else {
        base_radius - c as f64 * radius_step
    }
}

/// One curve, ready to be evaluated at any angle and time.
#[derive(Clone, Copy, Debug)]
pub struct CurveShape {
    pub base_radius: f64,
    pub amount: f64,
    pub harmonics: CurveHarmonics,
}

impl CurveShape {
    pub fn new(base_radius: f64, amount: f64, harmonics: CurveHarmonics) -> Self {
        Self {
            base_radius,
            amount,
            harmonics,
        }
    }

    /// The fixed sample angles of one revolution, starting at zero.
    pub fn sample_angles() -> impl Iterator<Item = f64> {
        (0..SAMPLES_PER_REVOLUTION).map(|i| i as f64 / SAMPLES_PER_REVOLUTION as f64 * FULL_TURN)
    }

    /// Summed harmonic displacement at angle `theta` and simulation time `t`.
    pub fn wobble(&self, theta: f64, t: f64) -> f64 {
        let h = &self.harmonics;
        let [w1, w2, w3] = HARMONIC_WEIGHTS;
        let [k1, k2, k3] = HARMONIC_TIME_RATES;
        let a = self.amount;
        a * w1 * (h.h1 as f64 * theta + k1 * t + h.group_phase + h.phase1).sin()
            + a * w2 * (h.h2 as f64 * theta + k2 * t + h.group_phase + h.phase2).sin()
            + a * w3 * (h.h3 as f64 * theta + k3 * t + h.phase3_term).sin()
    }

    #[inline]
    pub fn radius_at(&self, theta: f64, t: f64) -> f64 {
        self.base_radius + self.wobble(theta, t)
    }

    /// Cartesian vertex for angle `theta` around `origin`.
    #[inline]
    pub fn point_at(&self, origin: DVec2, theta: f64, t: f64) -> DVec2 {
        let r = self.radius_at(theta, t);
        origin + DVec2::new(r * theta.cos(), r * theta.sin())
    }

    /// Polyline vertices for one revolution around `center + offset`. The caller closes the path.
    pub fn points(
        &self,
        center: DVec2,
        offset: DVec2,
        t: f64,
    ) -> impl Iterator<Item = DVec2> + '_ {
        let origin = center + offset;
        Self::sample_angles().map(move |theta| self.point_at(origin, theta, t))
    }
}
