pub mod airframe;
pub mod ground;
pub mod mass;
pub mod propulsion;
pub mod transform;

pub use airframe::*;
pub use ground::*;
pub use mass::*;
pub use propulsion::*;
pub use transform::*;

use std::fmt;

use glam::DVec3;

/// One renderable element of the aircraft, in scene space
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Primitive {
    Cockpit(Cockpit),
    Fuselage(Fuselage),
    Wing(Wing),
    Thruster(Thruster),
    Propeller(Propeller),
    Jet(Jet),
    Rotor(Rotor),
    Gear(Gear),
    Tank(Tank),
    Ballast(Ballast),
    Weight(Weight),
    Hook(Hook),
    Launchbar(Launchbar),
    Hitch(Hitch),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrimitiveKind {
    Cockpit,
    Fuselage,
    Wing,
    Thruster,
    Propeller,
    Jet,
    Rotor,
    Gear,
    Tank,
    Ballast,
    Weight,
    Hook,
    Launchbar,
    Hitch,
}

impl PrimitiveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cockpit => "cockpit",
            Self::Fuselage => "fuselage",
            Self::Wing => "wing",
            Self::Thruster => "thruster",
            Self::Propeller => "propeller",
            Self::Jet => "jet",
            Self::Rotor => "rotor",
            Self::Gear => "gear",
            Self::Tank => "tank",
            Self::Ballast => "ballast",
            Self::Weight => "weight",
            Self::Hook => "hook",
            Self::Launchbar => "launchbar",
            Self::Hitch => "hitch",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Primitive {
    pub fn id(&self) -> &str {
        match self {
            Self::Cockpit(p) => &p.id,
            Self::Fuselage(p) => &p.id,
            Self::Wing(p) => &p.id,
            Self::Thruster(p) => &p.id,
            Self::Propeller(p) => &p.id,
            Self::Jet(p) => &p.id,
            Self::Rotor(p) => &p.id,
            Self::Gear(p) => &p.id,
            Self::Tank(p) => &p.id,
            Self::Ballast(p) => &p.id,
            Self::Weight(p) => &p.id,
            Self::Hook(p) => &p.id,
            Self::Launchbar(p) => &p.id,
            Self::Hitch(p) => &p.id,
        }
    }

    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Cockpit(_) => PrimitiveKind::Cockpit,
            Self::Fuselage(_) => PrimitiveKind::Fuselage,
            Self::Wing(_) => PrimitiveKind::Wing,
            Self::Thruster(_) => PrimitiveKind::Thruster,
            Self::Propeller(_) => PrimitiveKind::Propeller,
            Self::Jet(_) => PrimitiveKind::Jet,
            Self::Rotor(_) => PrimitiveKind::Rotor,
            Self::Gear(_) => PrimitiveKind::Gear,
            Self::Tank(_) => PrimitiveKind::Tank,
            Self::Ballast(_) => PrimitiveKind::Ballast,
            Self::Weight(_) => PrimitiveKind::Weight,
            Self::Hook(_) => PrimitiveKind::Hook,
            Self::Launchbar(_) => PrimitiveKind::Launchbar,
            Self::Hitch(_) => PrimitiveKind::Hitch,
        }
    }

    /// Reference point of the primitive in scene space
    pub fn position(&self) -> DVec3 {
        match self {
            Self::Cockpit(p) => p.position,
            Self::Fuselage(p) => p.front,
            Self::Wing(p) => p.root,
            Self::Thruster(p) => p.center,
            Self::Propeller(p) => p.center,
            Self::Jet(p) => p.center,
            Self::Rotor(p) => p.center,
            Self::Gear(p) => p.position,
            Self::Tank(p) => p.position,
            Self::Ballast(p) => p.position,
            Self::Weight(p) => p.position,
            Self::Hook(p) => p.position,
            Self::Launchbar(p) => p.position,
            Self::Hitch(p) => p.position,
        }
    }

    /// Thrust state, for elements that accept `actionpt` and `dir`
    pub fn thrust_mut(&mut self) -> Option<&mut Thrust> {
        match self {
            Self::Thruster(p) => Some(&mut p.thrust),
            Self::Propeller(p) => Some(&mut p.thrust),
            Self::Jet(p) => Some(&mut p.thrust),
            _ => None,
        }
    }

    pub fn thrust(&self) -> Option<&Thrust> {
        match self {
            Self::Thruster(p) => Some(&p.thrust),
            Self::Propeller(p) => Some(&p.thrust),
            Self::Jet(p) => Some(&p.thrust),
            _ => None,
        }
    }

    /// Lifting surface, for elements that accept flaps, slats and spoilers
    pub fn wing_mut(&mut self) -> Option<&mut Wing> {
        match self {
            Self::Wing(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_wing(&self) -> Option<&Wing> {
        match self {
            Self::Wing(w) => Some(w),
            _ => None,
        }
    }
}
