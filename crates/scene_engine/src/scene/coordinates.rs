//! Coordinate system conversion
//!
//! The scene authoring tool and the engine disagree on which axis is up:
//! documents are authored Z-up, the engine runs Y-up. Converting a vector
//! between the two is a fixed component permutation, not a rotation, and is
//! applied identically to translation, rotation, and scaling.

use crate::foundation::math::Vec3;

/// Coordinate system conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// Z-up convention used by the scene authoring tool
    ZUp,
    /// Y-up convention used by the engine
    YUp,
}

/// Converts vectors between coordinate system conventions
#[derive(Debug, Clone, Copy)]
pub struct CoordinateConverter {
    from: CoordinateSystem,
    to: CoordinateSystem,
}

impl CoordinateConverter {
    /// Create a new coordinate converter
    pub fn new(from: CoordinateSystem, to: CoordinateSystem) -> Self {
        Self { from, to }
    }

    /// Convert a vector between the configured conventions
    ///
    /// Differing conventions swap the second and third components; identical
    /// conventions are a no-op. The swap is its own inverse, so the same
    /// converter works in either direction.
    pub fn convert_vector(&self, v: Vec3) -> Vec3 {
        if self.from == self.to {
            return v;
        }
        Vec3::new(v.x, v.z, v.y)
    }
}

impl Default for CoordinateConverter {
    /// Default converter: authoring (Z-up) to engine (Y-up)
    fn default() -> Self {
        Self::new(CoordinateSystem::ZUp, CoordinateSystem::YUp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swaps_y_and_z() {
        let converter = CoordinateConverter::default();
        let converted = converter.convert_vector(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(converted, Vec3::new(1.0, 3.0, 2.0));
    }

    #[test]
    fn test_swap_is_involution() {
        let converter = CoordinateConverter::default();
        let v = Vec3::new(-4.5, 0.25, 17.0);
        assert_eq!(converter.convert_vector(converter.convert_vector(v)), v);
    }

    #[test]
    fn test_same_convention_is_identity() {
        let converter = CoordinateConverter::new(CoordinateSystem::YUp, CoordinateSystem::YUp);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(converter.convert_vector(v), v);
    }
}
