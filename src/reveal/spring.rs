use serde::Serialize;
use std::time::Duration;

/// Spring parameters for a unit mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpringParams {
    pub stiffness: f32,
    /// 1.0 is critically damped: fastest approach without overshoot.
    pub damping_ratio: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 200.0,
            damping_ratio: 1.0,
        }
    }
}

const REST_THRESHOLD: f64 = 1e-3;

/// A value chasing a target along a damped spring, stepped in closed form so
/// large frame gaps stay stable.
#[derive(Debug, Clone, Copy)]
pub struct AlphaSpring {
    value: f64,
    velocity: f64,
    target: f64,
    params: SpringParams,
}

impl AlphaSpring {
    pub fn at_rest(value: f32, params: SpringParams) -> Self {
        Self {
            value: value as f64,
            velocity: 0.0,
            target: value as f64,
            params,
        }
    }

    pub fn value(&self) -> f32 {
        self.value as f32
    }

    pub fn target(&self) -> f32 {
        self.target as f32
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target as f64;
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` and return the new value.
    pub fn step(&mut self, dt: Duration) -> f32 {
        let stiffness = self.params.stiffness as f64;
        let zeta = self.params.damping_ratio as f64;
        if !(stiffness.is_finite() && stiffness > 0.0 && zeta.is_finite() && zeta > 0.0) {
            self.snap();
            return self.value();
        }

        let t = dt.as_secs_f64();
        let omega = stiffness.sqrt();
        let d0 = self.value - self.target;
        let v0 = self.velocity;

        let (d, v) = if (zeta - 1.0).abs() < 1e-6 {
            let decay = (-omega * t).exp();
            let b = v0 + omega * d0;
            ((d0 + b * t) * decay, (v0 - omega * b * t) * decay)
        } else if zeta < 1.0 {
            let a = zeta * omega;
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-a * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            (
                decay * (d0 * cos + (v0 + a * d0) / omega_d * sin),
                decay * (v0 * cos - (a * v0 + omega * omega * d0) / omega_d * sin),
            )
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * d0) / (r2 - r1);
            let c1 = d0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        };

        self.value = self.target + d;
        self.velocity = v;
        if d.abs() < REST_THRESHOLD && v.abs() < REST_THRESHOLD {
            self.snap();
        }
        self.value()
    }

    fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }
}
