use glam::DVec3;

use crate::math::{self, X, Y, Z};
use crate::types::WorldTransform;

/// Depth of every drawn control surface, meters.
pub const CONTROL_SURFACE_DEPTH: f64 = 0.2;

/// Pilot eye point
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cockpit {
    pub id: String,
    pub position: DVec3,
}

impl Cockpit {
    pub fn new(id: String, position: DVec3, xf: &WorldTransform) -> Self {
        Self {
            id,
            position: xf.point(position),
        }
    }
}

/// Fuselage tube from `front` (YASim `a`) to `back` (YASim `b`).
///
/// The tube is `width` wide at `midpoint` (fraction of the length) and
/// `width * taper` wide at both ends.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fuselage {
    pub id: String,
    pub front: DVec3,
    pub back: DVec3,
    pub width: f64,
    pub taper: f64,
    pub midpoint: f64,
}

impl Fuselage {
    pub fn new(
        id: String,
        front: DVec3,
        back: DVec3,
        width: f64,
        taper: f64,
        midpoint: f64,
        xf: &WorldTransform,
    ) -> Self {
        Self {
            id,
            front: xf.point(front),
            back: xf.point(back),
            width,
            taper,
            midpoint,
        }
    }

    pub fn axis(&self) -> DVec3 {
        self.back - self.front
    }

    pub fn length(&self) -> f64 {
        self.axis().length()
    }

    /// Radius at both tube ends
    pub fn end_radius(&self) -> f64 {
        0.5 * self.width * self.taper
    }

    pub fn mid_radius(&self) -> f64 {
        0.5 * self.width
    }
}

/// Which lifting-surface element a [`Wing`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WingKind {
    Wing,
    Hstab,
    Vstab,
    Mstab,
}

impl WingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wing => "wing",
            Self::Hstab => "hstab",
            Self::Vstab => "vstab",
            Self::Mstab => "mstab",
        }
    }

    /// Every surface except the vertical stabilizer is mirrored by YASim.
    pub fn is_symmetric(&self) -> bool {
        !matches!(self, Self::Vstab)
    }
}

/// Wing parameters exactly as written in the configuration (YASim frame)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WingParams {
    pub root: DVec3,
    pub length: f64,
    pub chord: f64,
    pub incidence: f64,
    pub twist: f64,
    pub taper: f64,
    pub sweep: f64,
    pub dihedral: f64,
}

/// A lifting surface (wing, hstab, vstab or mstab)
///
/// Outline points are in scene space. Only the left half is described;
/// YASim mirrors symmetric surfaces itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Wing {
    pub id: String,
    pub kind: WingKind,
    pub params: WingParams,
    pub root: DVec3,
    pub tip: DVec3,
    pub root_leading: DVec3,
    pub root_trailing: DVec3,
    pub tip_leading: DVec3,
    pub tip_trailing: DVec3,
    pub control_surfaces: Vec<ControlSurface>,
}

impl Wing {
    pub fn new(id: String, kind: WingKind, params: WingParams, xf: &WorldTransform) -> Self {
        let WingParams {
            root,
            length,
            chord,
            incidence,
            twist,
            taper,
            sweep,
            dihedral,
        } = params;

        // Dihedral about the chord axis first, then incidence about the span
        let orientation = math::rot_y(-incidence) * math::rot_x(dihedral);
        let sweep = math::deg_to_rad(sweep);
        let twist = math::deg_to_rad(twist);

        let tip = root + orientation * (length * (sweep.cos() * Y - sweep.sin() * X));
        let half_chord = orientation * (0.5 * chord * X);
        let half_tip_chord =
            orientation * (0.5 * taper * chord * (twist.cos() * X + twist.sin() * Z));

        Self {
            id,
            kind,
            params,
            root: xf.point(root),
            tip: xf.point(tip),
            root_leading: xf.point(root + half_chord),
            root_trailing: xf.point(root - half_chord),
            tip_leading: xf.point(tip + half_tip_chord),
            tip_trailing: xf.point(tip - half_tip_chord),
            control_surfaces: Vec::new(),
        }
    }

    pub fn is_symmetric(&self) -> bool {
        self.kind.is_symmetric()
    }

    /// Attach a control surface spanning `start..end` of the trailing edge.
    pub fn add_control_surface(
        &mut self,
        id: String,
        kind: SurfaceKind,
        start: f64,
        end: f64,
    ) -> &ControlSurface {
        let a = self.root_trailing;
        let b = self.tip_trailing;
        let depth = CONTROL_SURFACE_DEPTH * (self.root - a).normalize_or_zero();
        let inner = a + start * (b - a);
        let outer = a + end * (b - a);

        self.control_surfaces.push(ControlSurface {
            id,
            kind,
            start,
            end,
            corners: [inner, outer, outer + depth, inner + depth],
        });
        &self.control_surfaces[self.control_surfaces.len() - 1]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SurfaceKind {
    Flap0,
    Flap1,
    Slat,
    Spoiler,
}

impl SurfaceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flap0 => "flap0",
            Self::Flap1 => "flap1",
            Self::Slat => "slat",
            Self::Spoiler => "spoiler",
        }
    }
}

/// Control surface attached to a [`Wing`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ControlSurface {
    pub id: String,
    pub kind: SurfaceKind,
    /// Span fraction where the surface begins (0 = root)
    pub start: f64,
    /// Span fraction where the surface ends (1 = tip)
    pub end: f64,
    /// Quad outline: inner hinge, outer hinge, outer forward, inner forward
    pub corners: [DVec3; 4],
}
