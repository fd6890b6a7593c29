//! Element dispatch table.
//!
//! Every tag the parser understands has exactly one row here: what role it
//! plays, which attributes it must carry and what the optional ones default
//! to. The parser never branches on tag names itself.

use std::collections::HashMap;

use glam::DVec3;
use log::debug;
use once_cell::sync::Lazy;

use crate::types::*;
use crate::{Result, YasimError};

/// Builds a primitive from its attributes, identity and the world transform
pub type Builder = fn(&Attrs<'_>, String, &WorldTransform) -> Result<Primitive>;

/// Child elements that alter the thrust of the enclosing engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrustModifier {
    ActionPoint,
    Direction,
}

#[derive(Debug, Clone, Copy)]
pub enum Role {
    Primitive(Builder),
    Thrust(ThrustModifier),
    Surface(SurfaceKind),
    Ignored,
}

#[derive(Debug)]
pub struct ElementSpec {
    pub tag: &'static str,
    pub role: Role,
    pub required: &'static [&'static str],
    pub defaults: &'static [(&'static str, f64)],
}

impl ElementSpec {
    pub fn default_for(&self, attr: &str) -> Option<f64> {
        self.defaults
            .iter()
            .find(|(name, _)| *name == attr)
            .map(|(_, value)| *value)
    }
}

const XYZ: &[&str] = &["x", "y", "z"];
const WING_REQUIRED: &[&str] = &["x", "y", "z", "length", "chord"];
const WING_DEFAULTS: &[(&str, f64)] = &[
    ("incidence", 0.0),
    ("twist", 0.0),
    ("taper", 1.0),
    ("sweep", 0.0),
    ("dihedral", 0.0),
];
const VSTAB_DEFAULTS: &[(&str, f64)] = &[
    ("incidence", 0.0),
    ("twist", 0.0),
    ("taper", 1.0),
    ("sweep", 0.0),
    ("dihedral", 90.0),
];
const SURFACE_REQUIRED: &[&str] = &["start", "end"];

const fn primitive(
    tag: &'static str,
    builder: Builder,
    required: &'static [&'static str],
    defaults: &'static [(&'static str, f64)],
) -> ElementSpec {
    ElementSpec {
        tag,
        role: Role::Primitive(builder),
        required,
        defaults,
    }
}

const fn modifier(tag: &'static str, role: Role, required: &'static [&'static str]) -> ElementSpec {
    ElementSpec {
        tag,
        role,
        required,
        defaults: &[],
    }
}

const fn ignored(tag: &'static str) -> ElementSpec {
    ElementSpec {
        tag,
        role: Role::Ignored,
        required: &[],
        defaults: &[],
    }
}

pub static ELEMENTS: &[ElementSpec] = &[
    primitive("cockpit", build_cockpit, XYZ, &[]),
    primitive(
        "fuselage",
        build_fuselage,
        &["ax", "ay", "az", "bx", "by", "bz", "width"],
        &[("taper", 1.0), ("midpoint", 0.5)],
    ),
    primitive("wing", build_wing, WING_REQUIRED, WING_DEFAULTS),
    primitive("hstab", build_wing, WING_REQUIRED, WING_DEFAULTS),
    primitive("mstab", build_wing, WING_REQUIRED, WING_DEFAULTS),
    primitive("vstab", build_wing, WING_REQUIRED, VSTAB_DEFAULTS),
    modifier("flap0", Role::Surface(SurfaceKind::Flap0), SURFACE_REQUIRED),
    modifier("flap1", Role::Surface(SurfaceKind::Flap1), SURFACE_REQUIRED),
    modifier("slat", Role::Surface(SurfaceKind::Slat), SURFACE_REQUIRED),
    modifier("spoiler", Role::Surface(SurfaceKind::Spoiler), SURFACE_REQUIRED),
    primitive(
        "gear",
        build_gear,
        XYZ,
        &[("compression", 1.0), ("upx", 0.0), ("upy", 0.0), ("upz", 1.0)],
    ),
    primitive("jet", build_jet, XYZ, &[("rotate", 0.0)]),
    primitive("propeller", build_propeller, &["x", "y", "z", "radius"], &[]),
    primitive(
        "thruster",
        build_thruster,
        &["x", "y", "z", "vx", "vy", "vz"],
        &[],
    ),
    modifier("actionpt", Role::Thrust(ThrustModifier::ActionPoint), XYZ),
    modifier("dir", Role::Thrust(ThrustModifier::Direction), XYZ),
    primitive(
        "rotor",
        build_rotor,
        &[],
        &[
            ("x", 0.0),
            ("y", 0.0),
            ("z", 0.0),
            ("nx", 0.0),
            ("ny", 0.0),
            ("nz", 1.0),
            ("fx", 1.0),
            ("fy", 0.0),
            ("fz", 0.0),
            ("diameter", 10.2),
            ("numblades", 4.0),
            ("chord", 0.3),
            ("twist", 0.0),
            ("taper", 1.0),
            ("rel-len-blade-start", 0.0),
            ("phi0", 0.0),
            ("ccw", 0.0),
        ],
    ),
    primitive("tank", build_tank, XYZ, &[]),
    primitive("ballast", build_ballast, XYZ, &[("mass-kg", 1.0)]),
    primitive("weight", build_weight, XYZ, &[]),
    primitive(
        "hook",
        build_hook,
        XYZ,
        &[("length", 1.0), ("up-angle", 0.0), ("down-angle", 70.0)],
    ),
    primitive("hitch", build_hitch, XYZ, &[]),
    primitive(
        "launchbar",
        build_launchbar,
        XYZ,
        &[
            ("length", 1.0),
            ("up-angle", -45.0),
            ("down-angle", 45.0),
            ("holdback-length", 2.0),
        ],
    ),
    ignored("cruise"),
    ignored("approach"),
    ignored("control-input"),
    ignored("control-output"),
    ignored("control-speed"),
    ignored("control-setting"),
    ignored("stall"),
    ignored("airplane"),
    ignored("piston-engine"),
    ignored("turbine-engine"),
    ignored("rotorgear"),
    ignored("tow"),
    ignored("winch"),
    ignored("solve-weight"),
];

static INDEX: Lazy<HashMap<&'static str, &'static ElementSpec>> =
    Lazy::new(|| ELEMENTS.iter().map(|spec| (spec.tag, spec)).collect());

/// Find the dispatch row for `tag`, `None` for unknown elements
pub fn lookup(tag: &str) -> Option<&'static ElementSpec> {
    INDEX.get(tag).copied()
}

/// Attributes of one element, resolved against its dispatch row
pub struct Attrs<'a> {
    spec: &'static ElementSpec,
    values: &'a [(String, String)],
    line: usize,
}

impl<'a> Attrs<'a> {
    pub fn new(spec: &'static ElementSpec, values: &'a [(String, String)], line: usize) -> Self {
        Self { spec, values, line }
    }

    pub fn tag(&self) -> &'static str {
        self.spec.tag
    }

    pub fn line(&self) -> usize {
        self.line
    }

    fn raw(&self, name: &str) -> Option<&'a str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn invalid(&self, attr: &'static str, value: &str) -> YasimError {
        YasimError::InvalidAttribute {
            element: self.spec.tag,
            attr,
            value: value.to_string(),
            line: self.line,
        }
    }

    fn missing(&self, attr: &'static str) -> YasimError {
        YasimError::MissingAttribute {
            element: self.spec.tag,
            attr,
            line: self.line,
        }
    }

    /// Parse an optional numeric attribute
    pub fn opt(&self, name: &'static str) -> Result<Option<f64>> {
        self.raw(name)
            .map(|value| value.trim().parse().map_err(|_| self.invalid(name, value)))
            .transpose()
    }

    /// Numeric attribute, falling back to the row default
    pub fn num(&self, name: &'static str) -> Result<f64> {
        match self.opt(name)? {
            Some(value) => Ok(value),
            None => self.spec.default_for(name).ok_or_else(|| self.missing(name)),
        }
    }

    pub fn vec3(&self, names: [&'static str; 3]) -> Result<DVec3> {
        Ok(DVec3::new(
            self.num(names[0])?,
            self.num(names[1])?,
            self.num(names[2])?,
        ))
    }

    /// Vector whose absent components come from `fallback`
    pub fn vec3_or(&self, names: [&'static str; 3], fallback: DVec3) -> Result<DVec3> {
        Ok(DVec3::new(
            self.opt(names[0])?.unwrap_or(fallback.x),
            self.opt(names[1])?.unwrap_or(fallback.y),
            self.opt(names[2])?.unwrap_or(fallback.z),
        ))
    }

    pub fn position(&self) -> Result<DVec3> {
        self.vec3(["x", "y", "z"])
    }

    /// Non-negative integer attribute
    pub fn count(&self, name: &'static str) -> Result<u32> {
        match self.raw(name) {
            Some(value) => value.trim().parse().map_err(|_| self.invalid(name, value)),
            None => self
                .spec
                .default_for(name)
                .map(|value| value as u32)
                .ok_or_else(|| self.missing(name)),
        }
    }

    /// Boolean attribute written as a number or `true`/`false`
    pub fn flag(&self, name: &'static str) -> Result<bool> {
        match self.raw(name).map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("true") => Ok(true),
            Some(value) if value.eq_ignore_ascii_case("false") => Ok(false),
            Some(value) => value
                .parse::<f64>()
                .map(|v| v != 0.0)
                .map_err(|_| self.invalid(name, value)),
            None => Ok(self.spec.default_for(name).is_some_and(|v| v != 0.0)),
        }
    }

    /// Check every attribute the row marks as required is present
    pub fn check_required(&self) -> Result<()> {
        match self.spec.required.iter().find(|name| self.raw(name).is_none()) {
            Some(name) => Err(self.missing(*name)),
            None => Ok(()),
        }
    }
}

fn build_cockpit(attrs: &Attrs<'_>, id: String, xf: &WorldTransform) -> Result<Primitive> {
    let cockpit = Cockpit::new(id, attrs.position()?, xf);
    debug!("{}: position {}", cockpit.id, cockpit.position);
    Ok(Primitive::Cockpit(cockpit))
}

fn build_fuselage(attrs: &Attrs<'_>, id: String, xf: &WorldTransform) -> Result<Primitive> {
    let fuselage = Fuselage::new(
        id,
        attrs.vec3(["ax", "ay", "az"])?,
        attrs.vec3(["bx", "by", "bz"])?,
        attrs.num("width")?,
        attrs.num("taper")?,
        attrs.num("midpoint")?,
        xf,
    );
    debug!(
        "{}: {} -> {} width {} taper {} midpoint {}",
        fuselage.id, fuselage.front, fuselage.back, fuselage.width, fuselage.taper, fuselage.midpoint
    );
    Ok(Primitive::Fuselage(fuselage))
}

fn wing_kind(tag: &str) -> WingKind {
    match tag {
        "hstab" => WingKind::Hstab,
        "vstab" => WingKind::Vstab,
        "mstab" => WingKind::Mstab,
        _ => WingKind::Wing,
    }
}

fn build_wing(attrs: &Attrs<'_>, id: String, xf: &WorldTransform) -> Result<Primitive> {
    let params = WingParams {
        root: attrs.position()?,
        length: attrs.num("length")?,
        chord: attrs.num("chord")?,
        incidence: attrs.num("incidence")?,
        twist: attrs.num("twist")?,
        taper: attrs.num("taper")?,
        sweep: attrs.num("sweep")?,
        dihedral: attrs.num("dihedral")?,
    };
    let wing = Wing::new(id, wing_kind(attrs.tag()), params, xf);
    debug!("{}: {:?}", wing.id, wing.params);
    Ok(Primitive::Wing(wing))
}

fn build_gear(attrs: &Attrs<'_>, id: String, xf: &WorldTransform) -> Result<Primitive> {
    let gear = Gear::new(
        id,
        attrs.position()?,
        attrs.vec3(["upx", "upy", "upz"])?,
        attrs.num("compression")?,
        xf,
    );
    debug!(
        "{}: position {} compression {}",
        gear.id, gear.position, gear.compression
    );
    Ok(Primitive::Gear(gear))
}

fn build_jet(attrs: &Attrs<'_>, id: String, xf: &WorldTransform) -> Result<Primitive> {
    let jet = Jet::new(id, attrs.position()?, attrs.num("rotate")?, xf);
    debug!("{}: center {} rotate {}", jet.id, jet.center, jet.rotate);
    Ok(Primitive::Jet(jet))
}

fn build_propeller(attrs: &Attrs<'_>, id: String, xf: &WorldTransform) -> Result<Primitive> {
    let propeller = Propeller::new(id, attrs.position()?, attrs.num("radius")?, xf);
    debug!(
        "{}: center {} radius {}",
        propeller.id, propeller.center, propeller.radius
    );
    Ok(Primitive::Propeller(propeller))
}

fn build_thruster(attrs: &Attrs<'_>, id: String, xf: &WorldTransform) -> Result<Primitive> {
    let thruster = Thruster::new(
        id,
        attrs.position()?,
        attrs.vec3(["vx", "vy", "vz"])?,
        xf,
    );
    debug!(
        "{}: center {} thrust {}",
        thruster.id, thruster.center, thruster.thrust.direction
    );
    Ok(Primitive::Thruster(thruster))
}

fn build_rotor(attrs: &Attrs<'_>, id: String, xf: &WorldTransform) -> Result<Primitive> {
    let params = RotorParams {
        center: attrs.position()?,
        normal: attrs.vec3(["nx", "ny", "nz"])?,
        forward: attrs.vec3(["fx", "fy", "fz"])?,
        numblades: attrs.count("numblades")?,
        diameter: attrs.num("diameter")?,
        chord: attrs.num("chord")?,
        twist: attrs.num("twist")?,
        taper: attrs.num("taper")?,
        rel_len_blade_start: attrs.num("rel-len-blade-start")?,
        phi0: attrs.num("phi0")?,
        ccw: attrs.flag("ccw")?,
    };
    let rotor = Rotor::new(id, params, xf);
    debug!("{}: {:?}", rotor.id, rotor.params);
    Ok(Primitive::Rotor(rotor))
}

fn build_tank(attrs: &Attrs<'_>, id: String, xf: &WorldTransform) -> Result<Primitive> {
    let tank = Tank::new(id, attrs.position()?, xf);
    debug!("{}: position {}", tank.id, tank.position);
    Ok(Primitive::Tank(tank))
}

fn build_ballast(attrs: &Attrs<'_>, id: String, xf: &WorldTransform) -> Result<Primitive> {
    let ballast = Ballast::new(id, attrs.position()?, attrs.num("mass-kg")?, xf);
    debug!(
        "{}: position {} mass {} kg",
        ballast.id, ballast.position, ballast.mass
    );
    Ok(Primitive::Ballast(ballast))
}

fn build_weight(attrs: &Attrs<'_>, id: String, xf: &WorldTransform) -> Result<Primitive> {
    let weight = Weight::new(id, attrs.position()?, xf);
    debug!("{}: position {}", weight.id, weight.position);
    Ok(Primitive::Weight(weight))
}

fn build_hook(attrs: &Attrs<'_>, id: String, xf: &WorldTransform) -> Result<Primitive> {
    let hook = Hook::new(
        id,
        attrs.position()?,
        attrs.num("length")?,
        attrs.num("up-angle")?,
        attrs.num("down-angle")?,
        xf,
    );
    debug!(
        "{}: position {} length {} angles {}/{}",
        hook.id, hook.position, hook.length, hook.up_angle, hook.down_angle
    );
    Ok(Primitive::Hook(hook))
}

fn build_hitch(attrs: &Attrs<'_>, id: String, xf: &WorldTransform) -> Result<Primitive> {
    let hitch = Hitch::new(id, attrs.position()?, xf);
    debug!("{}: position {}", hitch.id, hitch.position);
    Ok(Primitive::Hitch(hitch))
}

fn build_launchbar(attrs: &Attrs<'_>, id: String, xf: &WorldTransform) -> Result<Primitive> {
    let position = attrs.position()?;
    let params = LaunchbarParams {
        position,
        length: attrs.num("length")?,
        up_angle: attrs.num("up-angle")?,
        down_angle: attrs.num("down-angle")?,
        holdback: attrs.vec3_or(["holdback-x", "holdback-y", "holdback-z"], position)?,
        holdback_length: attrs.num("holdback-length")?,
    };
    let launchbar = Launchbar::new(id, params, xf);
    debug!("{}: {:?}", launchbar.id, launchbar.params);
    Ok(Primitive::Launchbar(launchbar))
}

/// Apply an `actionpt` or `dir` child to the thrust of its parent
pub fn apply_thrust(
    modifier: ThrustModifier,
    attrs: &Attrs<'_>,
    thrust: &mut Thrust,
    xf: &WorldTransform,
) -> Result<()> {
    let value = attrs.position()?;
    match modifier {
        ThrustModifier::ActionPoint => thrust.set_action_point(xf.point(value)),
        ThrustModifier::Direction => thrust.set_thrust_direction(xf.vector(value)),
    }
    debug!("{} at line {}: {:?}", attrs.tag(), attrs.line(), thrust);
    Ok(())
}

/// Apply a flap, slat or spoiler child to its parent wing
pub fn apply_surface(
    kind: SurfaceKind,
    attrs: &Attrs<'_>,
    id: String,
    wing: &mut Wing,
) -> Result<()> {
    let start = attrs.num("start")?;
    let end = attrs.num("end")?;
    let surface = wing.add_control_surface(id, kind, start, end);
    debug!("{}: {}..{} of the span", surface.id, start, end);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn build(tag: &str, pairs: &[(&str, &str)]) -> Result<Primitive> {
        let spec = lookup(tag).expect("known tag");
        let Role::Primitive(builder) = spec.role else {
            panic!("{tag} is not a primitive");
        };
        let values = attrs(pairs);
        let attrs = Attrs::new(spec, &values, 1);
        attrs.check_required()?;
        builder(&attrs, format!("YASim_{tag}#0"), &WorldTransform::default())
    }

    const ORIGIN: &[(&str, &str)] = &[("x", "0"), ("y", "0"), ("z", "0")];

    #[test]
    fn every_tag_has_one_row() {
        assert_eq!(INDEX.len(), ELEMENTS.len());
    }

    #[test]
    fn unknown_tag() {
        assert!(lookup("mass").is_none());
        assert!(lookup("Wing").is_none());
    }

    #[test]
    fn modifier_roles() {
        assert!(matches!(
            lookup("actionpt").unwrap().role,
            Role::Thrust(ThrustModifier::ActionPoint)
        ));
        assert!(matches!(
            lookup("dir").unwrap().role,
            Role::Thrust(ThrustModifier::Direction)
        ));
        assert!(matches!(
            lookup("slat").unwrap().role,
            Role::Surface(SurfaceKind::Slat)
        ));
        assert!(matches!(lookup("cruise").unwrap().role, Role::Ignored));
    }

    #[test]
    fn fuselage_defaults() {
        let p = build(
            "fuselage",
            &[
                ("ax", "0"),
                ("ay", "0"),
                ("az", "0"),
                ("bx", "-5"),
                ("by", "0"),
                ("bz", "0"),
                ("width", "1.2"),
            ],
        )
        .unwrap();
        let Primitive::Fuselage(f) = p else { panic!() };
        assert_eq!(f.taper, 1.0);
        assert_eq!(f.midpoint, 0.5);
        assert_eq!(f.width, 1.2);
    }

    #[test]
    fn stabilizer_dihedral_defaults() {
        let pairs = [("x", "0"), ("y", "0"), ("z", "0"), ("length", "2"), ("chord", "1")];
        for (tag, dihedral) in [("wing", 0.0), ("hstab", 0.0), ("mstab", 0.0), ("vstab", 90.0)] {
            let Primitive::Wing(w) = build(tag, &pairs).unwrap() else {
                panic!()
            };
            assert_eq!(w.params.dihedral, dihedral, "{tag}");
            assert_eq!(w.params.taper, 1.0);
            assert_eq!(w.kind.as_str(), tag);
        }
    }

    #[test]
    fn wing_requires_chord() {
        let err = build("wing", &[("x", "0"), ("y", "0"), ("z", "0"), ("length", "2")]).unwrap_err();
        assert!(matches!(
            err,
            YasimError::MissingAttribute {
                element: "wing",
                attr: "chord",
                line: 1
            }
        ));
    }

    #[test]
    fn gear_defaults() {
        let Primitive::Gear(g) = build("gear", ORIGIN).unwrap() else {
            panic!()
        };
        assert!((g.compression_length() - 1.0).abs() < 1e-12);
        assert!((g.compression - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn gear_partial_up_vector() {
        let Primitive::Gear(g) = build(
            "gear",
            &[("x", "0"), ("y", "0"), ("z", "0"), ("upx", "1"), ("compression", "0.5")],
        )
        .unwrap() else {
            panic!()
        };
        // upz keeps its default of 1, YASim +X is scene -X
        let expected = DVec3::new(-1.0, 0.0, 1.0).normalize() * 0.5;
        assert!((g.compression - expected).length() < 1e-12);
    }

    #[test]
    fn gear_horizontal_up_needs_explicit_upz() {
        let Primitive::Gear(g) = build(
            "gear",
            &[("x", "0"), ("y", "0"), ("z", "0"), ("upy", "1"), ("upz", "0")],
        )
        .unwrap() else {
            panic!()
        };
        assert!((g.compression - DVec3::new(0.0, -1.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn hook_defaults() {
        let Primitive::Hook(h) = build("hook", ORIGIN).unwrap() else {
            panic!()
        };
        assert_eq!(h.length, 1.0);
        assert_eq!(h.up_angle, 0.0);
        assert_eq!(h.down_angle, 70.0);
    }

    #[test]
    fn rotor_defaults() {
        let Primitive::Rotor(r) = build("rotor", &[]).unwrap() else {
            panic!()
        };
        assert_eq!(r.params.diameter, 10.2);
        assert_eq!(r.params.numblades, 4);
        assert_eq!(r.params.chord, 0.3);
        assert_eq!(r.params.rel_len_blade_start, 0.0);
        assert!(!r.params.ccw);
        assert!((r.radius - 5.1).abs() < 1e-12);
    }

    #[test]
    fn rotor_flags() {
        let Primitive::Rotor(r) = build("rotor", &[("ccw", "1"), ("numblades", "2")]).unwrap()
        else {
            panic!()
        };
        assert!(r.params.ccw);
        assert_eq!(r.params.numblades, 2);

        let err = build("rotor", &[("numblades", "two")]).unwrap_err();
        assert!(matches!(
            err,
            YasimError::InvalidAttribute {
                attr: "numblades",
                ..
            }
        ));
    }

    #[test]
    fn launchbar_defaults() {
        let Primitive::Launchbar(l) = build("launchbar", &[("x", "1"), ("y", "2"), ("z", "3")]).unwrap()
        else {
            panic!()
        };
        assert_eq!(l.params.length, 1.0);
        assert_eq!(l.params.up_angle, -45.0);
        assert_eq!(l.params.down_angle, 45.0);
        assert_eq!(l.params.holdback_length, 2.0);
        assert_eq!(l.params.holdback, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn launchbar_partial_holdback() {
        let Primitive::Launchbar(l) = build(
            "launchbar",
            &[("x", "1"), ("y", "2"), ("z", "3"), ("holdback-x", "5")],
        )
        .unwrap() else {
            panic!()
        };
        // missing holdback components follow the launchbar position
        assert_eq!(l.params.holdback, DVec3::new(5.0, 2.0, 3.0));

        let Primitive::Launchbar(l) = build(
            "launchbar",
            &[("x", "1"), ("y", "2"), ("z", "3"), ("holdback-y", "0"), ("holdback-z", "-1")],
        )
        .unwrap() else {
            panic!()
        };
        assert_eq!(l.params.holdback, DVec3::new(1.0, 0.0, -1.0));
    }

    #[test]
    fn ballast_and_jet_defaults() {
        let Primitive::Ballast(b) = build("ballast", ORIGIN).unwrap() else {
            panic!()
        };
        assert_eq!(b.mass, 1.0);

        let Primitive::Jet(j) = build("jet", ORIGIN).unwrap() else {
            panic!()
        };
        assert_eq!(j.rotate, 0.0);
    }

    #[test]
    fn non_numeric_value() {
        let err = build("tank", &[("x", "1"), ("y", "abc"), ("z", "0")]).unwrap_err();
        match err {
            YasimError::InvalidAttribute {
                element,
                attr,
                value,
                line,
            } => {
                assert_eq!(element, "tank");
                assert_eq!(attr, "y");
                assert_eq!(value, "abc");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
