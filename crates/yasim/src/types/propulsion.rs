use glam::{DQuat, DVec3};

use crate::math::{self, X, Z};
use crate::types::WorldTransform;

/// Thrust state shared by every thrust producing element.
///
/// `actionpt` and `dir` child elements modify this in place while the
/// owning element is still open. Both values are in scene space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Thrust {
    pub action_point: DVec3,
    pub direction: DVec3,
}

impl Thrust {
    fn new(center: DVec3, direction: DVec3) -> Self {
        Self {
            action_point: center,
            direction,
        }
    }

    pub fn set_action_point(&mut self, p: DVec3) {
        self.action_point = p;
    }

    pub fn set_thrust_direction(&mut self, d: DVec3) {
        self.direction = d;
    }

    /// Unit thrust vector, zero if the direction is degenerate
    pub fn unit_direction(&self) -> DVec3 {
        self.direction.normalize_or_zero()
    }
}

/// Generic thruster with an explicit thrust vector
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Thruster {
    pub id: String,
    pub center: DVec3,
    pub thrust: Thrust,
}

impl Thruster {
    pub fn new(id: String, center: DVec3, vector: DVec3, xf: &WorldTransform) -> Self {
        let center = xf.point(center);
        Self {
            id,
            center,
            thrust: Thrust::new(center, xf.vector(vector)),
        }
    }
}

/// Propeller disc, thrusting forward (YASim -X) unless a `dir` says otherwise
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Propeller {
    pub id: String,
    pub center: DVec3,
    pub radius: f64,
    pub thrust: Thrust,
}

impl Propeller {
    pub fn new(id: String, center: DVec3, radius: f64, xf: &WorldTransform) -> Self {
        let center = xf.point(center);
        Self {
            id,
            center,
            radius,
            thrust: Thrust::new(center, xf.vector(-X)),
        }
    }
}

/// Jet engine; `rotate` tilts the thrust vector about the Y axis (degrees)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Jet {
    pub id: String,
    pub center: DVec3,
    pub rotate: f64,
    pub thrust: Thrust,
}

impl Jet {
    pub fn new(id: String, center: DVec3, rotate: f64, xf: &WorldTransform) -> Self {
        let center = xf.point(center);
        Self {
            id,
            center,
            rotate,
            thrust: Thrust::new(center, xf.vector(math::rot_y(rotate) * -X)),
        }
    }
}

/// Rotor parameters exactly as written in the configuration (YASim frame)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RotorParams {
    pub center: DVec3,
    pub normal: DVec3,
    pub forward: DVec3,
    pub numblades: u32,
    pub diameter: f64,
    pub chord: f64,
    pub twist: f64,
    pub taper: f64,
    pub rel_len_blade_start: f64,
    pub phi0: f64,
    pub ccw: bool,
}

/// Helicopter rotor disc with one reference blade at `phi0`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rotor {
    pub id: String,
    pub params: RotorParams,
    pub center: DVec3,
    /// Unit rotor axis
    pub normal: DVec3,
    /// Unit forward direction
    pub forward: DVec3,
    /// Unit direction of the reference blade
    pub blade_axis: DVec3,
    pub radius: f64,
}

impl Rotor {
    pub fn new(id: String, params: RotorParams, xf: &WorldTransform) -> Self {
        let normal = math::normalize_or(params.normal, Z);
        let forward = math::normalize_or(params.forward, X);

        // Reference blade lies in the rotor plane, phi0 from forward
        let in_plane = math::normalize_or(
            forward - normal * forward.dot(normal),
            normal.any_orthonormal_vector(),
        );
        let blade = DQuat::from_axis_angle(normal, math::deg_to_rad(params.phi0)) * in_plane;

        Self {
            id,
            params,
            center: xf.point(params.center),
            normal: xf.vector(normal),
            forward: xf.vector(forward),
            blade_axis: xf.vector(blade),
            radius: 0.5 * params.diameter,
        }
    }

    /// +1 for counter-clockwise rotation seen from above, -1 otherwise
    pub fn spin_sign(&self) -> f64 {
        if self.params.ccw { 1.0 } else { -1.0 }
    }

    pub fn blade_root(&self) -> DVec3 {
        self.center + self.params.rel_len_blade_start * self.radius * self.blade_axis
    }

    pub fn blade_tip(&self) -> DVec3 {
        self.center + self.radius * self.blade_axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn propeller_defaults_to_forward_thrust() {
        let xf = WorldTransform::default();
        let prop = Propeller::new("p".into(), DVec3::new(1.0, 0.0, 0.0), 0.9, &xf);
        assert_eq!(prop.thrust.action_point, prop.center);
        // YASim -X is scene +X
        assert!((prop.thrust.direction - X).length() < EPS);
    }

    #[test]
    fn jet_rotation_tilts_thrust() {
        let xf = WorldTransform::default();
        let jet = Jet::new("j".into(), DVec3::ZERO, 90.0, &xf);
        assert!((jet.thrust.direction - Z).length() < EPS);
    }

    #[test]
    fn thrust_modifiers_replace_values() {
        let xf = WorldTransform::default();
        let mut t = Thruster::new("t".into(), DVec3::ZERO, DVec3::new(0.0, 0.0, 2.0), &xf);
        t.thrust.set_action_point(DVec3::new(1.0, 2.0, 3.0));
        t.thrust.set_thrust_direction(DVec3::new(0.0, 3.0, 0.0));
        assert_eq!(t.thrust.action_point, DVec3::new(1.0, 2.0, 3.0));
        assert!((t.thrust.unit_direction() - DVec3::Y).length() < EPS);
    }

    #[test]
    fn rotor_blade_geometry() {
        let params = RotorParams {
            center: DVec3::ZERO,
            normal: Z,
            forward: X,
            numblades: 4,
            diameter: 10.0,
            chord: 0.3,
            twist: 0.0,
            taper: 1.0,
            rel_len_blade_start: 0.2,
            phi0: 90.0,
            ccw: false,
        };
        let rotor = Rotor::new("r".into(), params, &WorldTransform::default());

        assert_eq!(rotor.radius, 5.0);
        assert_eq!(rotor.spin_sign(), -1.0);
        // phi0 = 90 turns the blade from YASim +X to +Y, scene -Y
        assert!((rotor.blade_tip() - DVec3::new(0.0, -5.0, 0.0)).length() < EPS);
        assert!((rotor.blade_root() - DVec3::new(0.0, -1.0, 0.0)).length() < EPS);
    }
}
