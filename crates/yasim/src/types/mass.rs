use glam::DVec3;

use crate::types::WorldTransform;

/// Fuel tank location
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tank {
    pub id: String,
    pub position: DVec3,
}

impl Tank {
    pub fn new(id: String, position: DVec3, xf: &WorldTransform) -> Self {
        Self {
            id,
            position: xf.point(position),
        }
    }
}

/// Fixed ballast mass
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ballast {
    pub id: String,
    pub position: DVec3,
    /// Kilograms
    pub mass: f64,
}

impl Ballast {
    pub fn new(id: String, position: DVec3, mass: f64, xf: &WorldTransform) -> Self {
        Self {
            id,
            position: xf.point(position),
            mass,
        }
    }
}

/// Property driven point mass
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Weight {
    pub id: String,
    pub position: DVec3,
}

impl Weight {
    pub fn new(id: String, position: DVec3, xf: &WorldTransform) -> Self {
        Self {
            id,
            position: xf.point(position),
        }
    }
}
