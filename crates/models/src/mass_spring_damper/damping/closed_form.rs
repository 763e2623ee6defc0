//! Closed-form displacement for each damping regime.
//!
//! The constants follow Greenwood, *Principles of Dynamics* (1965), §3-7,
//! with the sign of x reversed and `x_ss − x0` substituted for the initial
//! displacement.

use super::Characteristics;

/// A displacement formula `x(t)` with its constants already computed.
pub trait ClosedForm {
    /// Returns the displacement at time `t`.
    fn displacement(&self, t: f64) -> f64;
}

/// `x(t) = x_ss − c1·cos(ωn·t) + c2·sin(ωn·t)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Undamped {
    pub steady_state: f64,
    pub natural_frequency: f64,
    pub c1: f64,
    pub c2: f64,
}

impl Undamped {
    /// c1 = x_ss − x0, c2 = v0/ωn.
    #[must_use]
    pub fn new(ch: &Characteristics) -> Self {
        Self {
            steady_state: ch.steady_state,
            natural_frequency: ch.natural_frequency,
            c1: ch.steady_state - ch.initial_displacement,
            c2: ch.initial_velocity / ch.natural_frequency,
        }
    }
}

impl ClosedForm for Undamped {
    fn displacement(&self, t: f64) -> f64 {
        let wnt = self.natural_frequency * t;
        self.steady_state - self.c1 * wnt.cos() + self.c2 * wnt.sin()
    }
}

/// `x(t) = x_ss − e^(−ζ·ωn·t)·(c1·cos(ωd·t) − c2·sin(ωd·t))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Underdamped {
    pub steady_state: f64,
    pub natural_frequency: f64,
    pub damping_ratio: f64,
    /// Damped natural frequency ωd = ωn·sqrt(1 − ζ²).
    pub damped_frequency: f64,
    pub c1: f64,
    pub c2: f64,
}

impl Underdamped {
    /// ωd = ωn·sqrt(1 − ζ²), c1 = x_ss − x0, c2 = (v0 + ζ·ωn·(x_ss − x0))/ωd.
    #[must_use]
    pub fn new(ch: &Characteristics) -> Self {
        let z = ch.damping_ratio;
        let wn = ch.natural_frequency;
        let offset = ch.steady_state - ch.initial_displacement;
        let damped_frequency = (1.0 - z * z).sqrt() * wn;

        Self {
            steady_state: ch.steady_state,
            natural_frequency: wn,
            damping_ratio: z,
            damped_frequency,
            c1: offset,
            c2: (ch.initial_velocity + z * wn * offset) / damped_frequency,
        }
    }
}

impl ClosedForm for Underdamped {
    fn displacement(&self, t: f64) -> f64 {
        let decay = (-self.damping_ratio * self.natural_frequency * t).exp();
        let wdt = self.damped_frequency * t;
        self.steady_state - decay * (self.c1 * wdt.cos() - self.c2 * wdt.sin())
    }
}

/// `x(t) = x_ss − e^(−ωn·t)·(c1 − c2·t)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticallyDamped {
    pub steady_state: f64,
    pub natural_frequency: f64,
    pub c1: f64,
    pub c2: f64,
}

impl CriticallyDamped {
    /// c1 = x_ss − x0, c2 = v0 + ωn·(x_ss − x0).
    #[must_use]
    pub fn new(ch: &Characteristics) -> Self {
        let offset = ch.steady_state - ch.initial_displacement;

        Self {
            steady_state: ch.steady_state,
            natural_frequency: ch.natural_frequency,
            c1: offset,
            c2: ch.initial_velocity + ch.natural_frequency * offset,
        }
    }
}

impl ClosedForm for CriticallyDamped {
    fn displacement(&self, t: f64) -> f64 {
        let decay = (-self.natural_frequency * t).exp();
        self.steady_state - decay * (self.c1 - self.c2 * t)
    }
}

/// `x(t) = x_ss − [e^(−ζ·ωn·t)/(2·cz)]·(c1·e^(ωd·t) + c2·e^(−ωd·t))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overdamped {
    pub steady_state: f64,
    pub natural_frequency: f64,
    pub damping_ratio: f64,
    /// cz = sqrt(ζ² − 1).
    pub cz: f64,
    /// ωd = cz·ωn.
    pub damped_frequency: f64,
    pub c1: f64,
    pub c2: f64,
}

impl Overdamped {
    /// cz = sqrt(ζ² − 1), ωd = cz·ωn,
    /// c1 = (cz − ζ)·(x_ss − x0) − v0/ωn, c2 = (cz + ζ)·(x_ss − x0) + v0/ωn.
    #[must_use]
    pub fn new(ch: &Characteristics) -> Self {
        let z = ch.damping_ratio;
        let wn = ch.natural_frequency;
        let offset = ch.steady_state - ch.initial_displacement;
        let cz = (z * z - 1.0).sqrt();

        Self {
            steady_state: ch.steady_state,
            natural_frequency: wn,
            damping_ratio: z,
            cz,
            damped_frequency: cz * wn,
            c1: (cz - z) * offset - ch.initial_velocity / wn,
            c2: (cz + z) * offset + ch.initial_velocity / wn,
        }
    }
}

impl ClosedForm for Overdamped {
    /// Evaluated as `x_ss − (c1·e^(s1·t) + c2·e^(s2·t))/(2·cz)` with the decay
    /// folded into each exponent, `s1,2 = (±cz − ζ)·ωn`. Both roots are
    /// negative, so neither term overflows for large `ζ·ωn·t`.
    fn displacement(&self, t: f64) -> f64 {
        let zwn = self.damping_ratio * self.natural_frequency;
        let slow = (self.damped_frequency - zwn) * t;
        let fast = -(self.damped_frequency + zwn) * t;
        self.steady_state - (self.c1 * slow.exp() + self.c2 * fast.exp()) / (2.0 * self.cz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn free_motion(zeta: f64, v0: f64) -> Characteristics {
        Characteristics {
            damping_coefficient: 2.0 * zeta,
            natural_frequency: 1.0,
            damping_ratio: zeta,
            steady_state: 0.5,
            initial_displacement: 0.5,
            initial_velocity: v0,
        }
    }

    #[test]
    fn undamped_starts_at_initial_displacement() {
        let ch = Characteristics {
            initial_displacement: 2.0,
            ..free_motion(0.0, 1.0)
        };
        let form = Undamped::new(&ch);

        assert_relative_eq!(form.c1, -1.5);
        assert_relative_eq!(form.c2, 1.0);
        assert_relative_eq!(form.displacement(0.0), 2.0);
    }

    #[test]
    fn underdamped_matches_textbook_response() {
        // With x0 = x_ss the response is (v0/ωd)·e^(−ζωn·t)·sin(ωd·t).
        let zeta = 0.2;
        let form = Underdamped::new(&free_motion(zeta, 1.0));
        let wd = (1.0 - zeta * zeta).sqrt();

        assert_relative_eq!(form.damped_frequency, wd);
        for t in [0.0, 0.5, 1.0, 3.0] {
            let expected = 0.5 + (-zeta * t).exp() * (wd * t).sin() / wd;
            assert_relative_eq!(form.displacement(t), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn critically_damped_matches_textbook_response() {
        // With x0 = x_ss the response is v0·t·e^(−ωn·t).
        let form = CriticallyDamped::new(&free_motion(1.0, 2.0));

        for t in [0.0_f64, 0.5, 1.0, 3.0] {
            let expected = 0.5 + 2.0 * t * (-t).exp();
            assert_relative_eq!(form.displacement(t), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn overdamped_matches_textbook_response() {
        // With x0 = x_ss the response is (v0/ωd)·e^(−ζωn·t)·sinh(ωd·t).
        let zeta = 2.0;
        let form = Overdamped::new(&free_motion(zeta, 1.0));
        let wd = (zeta * zeta - 1.0).sqrt();

        assert_relative_eq!(form.cz, wd);
        for t in [0.0, 0.5, 1.0, 3.0] {
            let expected = 0.5 + (-zeta * t).exp() * (wd * t).sinh() / wd;
            assert_relative_eq!(form.displacement(t), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn heavily_overdamped_response_is_finite() {
        // ζ = 100: e^(−ζωn·t) underflows and e^(ωd·t) overflows well before t = 10.
        let form = Overdamped::new(&free_motion(100.0, 1.0));

        for t in [10.0, 100.0, 1000.0] {
            let x = form.displacement(t);
            assert!(x.is_finite(), "t = {t}: {x}");
        }

        // The slow root s1 = (cz − ζ)·ωn ≈ −1/(2ζ) dominates the late response.
        let s1 = form.damped_frequency - 100.0;
        let expected = 0.5 + (s1 * 10.0).exp() / (2.0 * form.cz);
        assert_relative_eq!(form.displacement(10.0), expected, max_relative = 1e-9);
    }
}
