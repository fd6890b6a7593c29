//! Vector and transform helpers shared by the primitive constructors.
//!
//! Everything here is a pure function over `glam` double precision types.
//! Angles in YASim files are degrees; the helpers take degrees and convert
//! internally so callers never juggle radians.

use glam::{DAffine3, DQuat, DVec3, EulerRot};

pub const ORIGIN: DVec3 = DVec3::ZERO;
pub const X: DVec3 = DVec3::X;
pub const Y: DVec3 = DVec3::Y;
pub const Z: DVec3 = DVec3::Z;

pub const DEG2RAD: f64 = std::f64::consts::PI / 180.0;
pub const RAD2DEG: f64 = 180.0 / std::f64::consts::PI;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * DEG2RAD
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * RAD2DEG
}

/// Rotation about the X axis by `deg` degrees (right-handed).
pub fn rot_x(deg: f64) -> DQuat {
    DQuat::from_rotation_x(deg_to_rad(deg))
}

/// Rotation about the Y axis by `deg` degrees (right-handed).
pub fn rot_y(deg: f64) -> DQuat {
    DQuat::from_rotation_y(deg_to_rad(deg))
}

/// Heading/pitch/roll rotation in degrees.
///
/// Roll is applied first (about X), then pitch (about Y), then heading
/// (about Z).
pub fn hpr(heading: f64, pitch: f64, roll: f64) -> DQuat {
    DQuat::from_euler(
        EulerRot::ZYX,
        deg_to_rad(heading),
        deg_to_rad(pitch),
        deg_to_rad(roll),
    )
}

/// YASim axes (x forward, y left, z up) to scene axes.
///
/// The scene looks at the aircraft from the front: x and y are flipped,
/// z stays up.
pub fn yasim_to_scene() -> DAffine3 {
    DAffine3::from_scale(DVec3::new(-1.0, -1.0, 1.0))
}

/// Rigid transform that rotates by `rotation` and then translates by
/// `translation`.
pub fn rigid(rotation: DQuat, translation: DVec3) -> DAffine3 {
    DAffine3::from_rotation_translation(rotation, translation)
}

/// Normalize `v`, falling back to `fallback` for zero or non-finite input.
pub fn normalize_or(v: DVec3, fallback: DVec3) -> DVec3 {
    v.try_normalize().unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn degree_conversions_roundtrip() {
        assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < EPS);
        assert!((rad_to_deg(deg_to_rad(37.5)) - 37.5).abs() < EPS);
    }

    #[test]
    fn dihedral_rotation_lifts_span_axis() {
        // 90 degrees about X turns the span axis (Y) straight up
        assert!(close(rot_x(90.0) * Y, Z));
    }

    #[test]
    fn pitch_rotation_about_y() {
        assert!(close(rot_y(90.0) * Z, X));
        assert!(close(rot_y(-90.0) * X, Z));
    }

    #[test]
    fn base_transform_flips_horizontal_axes() {
        let base = yasim_to_scene();
        let p = base.transform_point3(DVec3::new(1.0, 2.0, 3.0));
        assert!(close(p, DVec3::new(-1.0, -2.0, 3.0)));
    }

    #[test]
    fn hpr_heading_only() {
        assert!(close(hpr(90.0, 0.0, 0.0) * X, Y));
        assert!(close(hpr(0.0, 0.0, 0.0) * X, X));
    }

    #[test]
    fn normalize_falls_back_for_zero() {
        assert_eq!(normalize_or(ORIGIN, Z), Z);
        assert!(close(normalize_or(DVec3::new(0.0, 3.0, 0.0), Z), Y));
    }
}
