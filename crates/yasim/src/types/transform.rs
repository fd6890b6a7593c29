use std::collections::BTreeMap;

use glam::{DAffine3, DVec3};

use crate::math;

/// Operator supplied correction between the FDM and the 3D model frame.
///
/// Comes from an `<!-- offsets: ... -->` comment. Lengths are meters,
/// angles are degrees.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OffsetCorrection {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
    /// Keys other than `x y z h p r`; kept but not applied.
    pub extra: BTreeMap<String, f64>,
}

impl OffsetCorrection {
    /// Assign one `key=value` pair. Unknown keys go to `extra`.
    pub fn set(&mut self, key: &str, value: f64) -> bool {
        match key {
            "x" => self.x = value,
            "y" => self.y = value,
            "z" => self.z = value,
            "h" => self.heading = value,
            "p" => self.pitch = value,
            "r" => self.roll = value,
            _ => {
                self.extra.insert(key.to_string(), value);
                return false;
            }
        }
        true
    }

    pub fn translation(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// The correction as a rigid transform: rotate by heading/pitch/roll,
    /// then translate.
    pub fn to_affine(&self) -> DAffine3 {
        math::rigid(
            math::hpr(self.heading, self.pitch, self.roll),
            self.translation(),
        )
    }
}

/// Effective YASim to scene transform applied to every emitted primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    affine: DAffine3,
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::new(None)
    }
}

impl WorldTransform {
    /// Base axis convention, followed by the offset correction if any.
    pub fn new(offsets: Option<&OffsetCorrection>) -> Self {
        let base = math::yasim_to_scene();
        let affine = match offsets {
            Some(offsets) => offsets.to_affine() * base,
            None => base,
        };
        Self { affine }
    }

    /// Map an absolute YASim position into the scene.
    pub fn point(&self, p: DVec3) -> DVec3 {
        self.affine.transform_point3(p)
    }

    /// Map a YASim direction into the scene (translation is ignored).
    pub fn vector(&self, v: DVec3) -> DVec3 {
        self.affine.transform_vector3(v)
    }

    pub fn affine(&self) -> DAffine3 {
        self.affine
    }
}
