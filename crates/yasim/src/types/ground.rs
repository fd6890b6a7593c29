use glam::DVec3;

use crate::math::{self, X, Z};
use crate::types::WorldTransform;

/// Landing gear contact point with its compression travel
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gear {
    pub id: String,
    pub position: DVec3,
    /// Travel vector: unit `up` scaled by the compression distance
    pub compression: DVec3,
}

impl Gear {
    /// A zero `up` falls back to +Z.
    pub fn new(
        id: String,
        position: DVec3,
        up: DVec3,
        compression: f64,
        xf: &WorldTransform,
    ) -> Self {
        let up = math::normalize_or(up, Z);
        Self {
            id,
            position: xf.point(position),
            compression: xf.vector(up * compression),
        }
    }

    pub fn compression_length(&self) -> f64 {
        self.compression.length()
    }
}

/// Direction of an arm that is `angle` degrees below the aft horizontal
fn aft_arm(length: f64, angle: f64) -> DVec3 {
    let angle = math::deg_to_rad(angle);
    -length * (angle.cos() * X + angle.sin() * Z)
}

/// Direction of an arm that is `angle` degrees below the forward horizontal
fn fore_arm(length: f64, angle: f64) -> DVec3 {
    let angle = math::deg_to_rad(angle);
    length * (angle.cos() * X - angle.sin() * Z)
}

/// Tail hook with its retracted (up) and extended (down) positions
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hook {
    pub id: String,
    pub position: DVec3,
    pub length: f64,
    pub up_angle: f64,
    pub down_angle: f64,
    pub up_tip: DVec3,
    pub down_tip: DVec3,
}

impl Hook {
    pub fn new(
        id: String,
        position: DVec3,
        length: f64,
        up_angle: f64,
        down_angle: f64,
        xf: &WorldTransform,
    ) -> Self {
        Self {
            id,
            position: xf.point(position),
            length,
            up_angle,
            down_angle,
            up_tip: xf.point(position + aft_arm(length, up_angle)),
            down_tip: xf.point(position + aft_arm(length, down_angle)),
        }
    }
}

/// Launch bar parameters exactly as written in the configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LaunchbarParams {
    pub position: DVec3,
    pub length: f64,
    pub up_angle: f64,
    pub down_angle: f64,
    pub holdback: DVec3,
    pub holdback_length: f64,
}

/// Catapult launch bar and holdback
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Launchbar {
    pub id: String,
    pub params: LaunchbarParams,
    pub position: DVec3,
    pub holdback: DVec3,
    pub launchbar_tip: DVec3,
    pub launchbar_up_tip: DVec3,
    pub holdback_tip: DVec3,
    pub holdback_up_tip: DVec3,
}

impl Launchbar {
    pub fn new(id: String, params: LaunchbarParams, xf: &WorldTransform) -> Self {
        let LaunchbarParams {
            position,
            length,
            up_angle,
            down_angle,
            holdback,
            holdback_length,
        } = params;

        Self {
            id,
            params,
            position: xf.point(position),
            holdback: xf.point(holdback),
            launchbar_tip: xf.point(position + fore_arm(length, down_angle)),
            launchbar_up_tip: xf.point(position + fore_arm(length, up_angle)),
            holdback_tip: xf.point(holdback + aft_arm(holdback_length, down_angle)),
            holdback_up_tip: xf.point(holdback + aft_arm(holdback_length, up_angle)),
        }
    }
}

/// Tow hitch point
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hitch {
    pub id: String,
    pub position: DVec3,
}

impl Hitch {
    pub fn new(id: String, position: DVec3, xf: &WorldTransform) -> Self {
        Self {
            id,
            position: xf.point(position),
        }
    }
}
