// Angle and polar-point helpers shared by the pose model and the
// geometry builder. Points are nalgebra_glm::Vec2 in screen space
// (y grows downward), matching the painter.

use nalgebra_glm as glm;
use std::f32::consts::{PI, TAU};
use std::ops::{Add, Mul, Neg, Sub};

/// An angle stored in radians. Construct with [`Angle::degrees`] or
/// [`Angle::radians`]; arithmetic keeps the raw value (no wrapping), so
/// interpolation results stay continuous across the 0°/360° seam.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };

    pub fn degrees(degrees: f32) -> Self {
        Self::radians(degrees.to_radians())
    }

    pub fn radians(radians: f32) -> Self {
        Self { radians }
    }

    pub fn to_degrees(self) -> f32 {
        self.radians.to_degrees()
    }

    pub fn to_radians(self) -> f32 {
        self.radians
    }

    pub fn sine(self) -> f32 {
        self.radians.sin()
    }

    pub fn cosine(self) -> f32 {
        self.radians.cos()
    }

    /// Same direction, normalized into [0°, 360°).
    #[allow(dead_code)]
    pub fn normalized(self) -> Angle {
        Angle {
            radians: self.radians.rem_euclid(TAU),
        }
    }

    /// Interpolate toward `other` along the shorter arc. The delta is
    /// normalized into (-180°, 180°] before scaling, so 350°..10° sweeps
    /// through 0° rather than backward through 180°. Ratios outside
    /// [0, 1] extrapolate along the same arc.
    pub fn lerp(self, other: Angle, ratio: f32) -> Angle {
        let mut delta = (other.radians - self.radians).rem_euclid(TAU);
        if delta > PI {
            delta -= TAU;
        }
        Angle {
            radians: self.radians + delta * ratio,
        }
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle {
            radians: self.radians + rhs.radians,
        }
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle {
            radians: self.radians - rhs.radians,
        }
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle {
            radians: -self.radians,
        }
    }
}

impl Mul<f32> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f32) -> Angle {
        Angle {
            radians: self.radians * rhs,
        }
    }
}

/// Point at `distance` along `angle` from the origin.
pub fn from_polar(angle: Angle, distance: f32) -> glm::Vec2 {
    glm::vec2(angle.cosine() * distance, angle.sine() * distance)
}

/// Linear interpolation for scalars.
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
