//! OpenSCAD rendering of a parsed [`Scene`].
//!
//! Every primitive becomes one block preceded by a `// <identity>` comment.
//! Lines and arrows are thin hulls so the output stays a valid solid model;
//! masses and discs use OpenSCAD's background modifier (`%`) so they show in
//! the preview without taking part in the final render.

use std::fmt::Write;

use glam::{DQuat, DVec3};

use crate::math::{self, Z};
use crate::scene::{Renderer, Scene};
use crate::types::*;
use crate::units::{self, Units};
use crate::Result;

type Rgba = [f64; 4];

const FUSELAGE: Rgba = [0.0, 0.0, 0.5, 0.4];
const SYMMETRIC_SURFACE: Rgba = [0.0, 0.5, 0.0, 0.5];
const SINGLE_SURFACE: Rgba = [0.5, 0.0, 0.0, 0.5];
const CONTROL_SURFACE: Rgba = [0.8, 0.8, 0.0, 0.9];
const COCKPIT: Rgba = [0.9, 0.7, 0.5, 0.8];
const THRUST: Rgba = [0.9, 0.3, 0.1, 1.0];
const PROPELLER: Rgba = [0.5, 0.4, 0.9, 0.5];
const ROTOR: Rgba = [0.6, 0.4, 0.9, 0.5];
const GEAR: Rgba = [0.2, 0.2, 0.2, 1.0];
const TANK: Rgba = [0.3, 0.3, 0.9, 0.5];
const BALLAST: Rgba = [0.3, 0.5, 0.9, 0.5];
const WEIGHT: Rgba = [0.3, 0.4, 0.9, 0.5];
const HOOK: Rgba = [0.4, 0.4, 0.4, 1.0];

/// Sizes of the marker shapes, in meters
const LINE_RADIUS: f64 = 0.005;
const ARROW_LENGTH: f64 = 1.0;
const COCKPIT_RADIUS: f64 = 0.13;
const DISC_THICKNESS: f64 = 0.002;
const TANK_SIDE: f64 = 0.02;
const TANK_SPHERE: f64 = 0.015;
const MASS_RADIUS: f64 = 0.02;
/// Ballast cylinder height per kilogram
const BALLAST_HEIGHT_PER_KG: f64 = 0.05;
const WEIGHT_HEIGHT: f64 = 0.05;
const HITCH_RADIUS: f64 = 0.05;
const PLATE_THICKNESS: f64 = 0.004;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScadOptions {
    pub units: Units,
    /// Also draw the right half of symmetric surfaces
    pub mirror: bool,
    /// Value of `$fn` for curved shapes
    pub segments: u32,
}

impl Default for ScadOptions {
    fn default() -> Self {
        Self {
            units: Units::Millimeter,
            mirror: false,
            segments: 24,
        }
    }
}

/// Renders a scene as OpenSCAD source text
#[derive(Debug, Default)]
pub struct ScadRenderer {
    options: ScadOptions,
    out: String,
}

impl ScadRenderer {
    pub fn new(options: ScadOptions) -> Self {
        Self {
            options,
            out: String::new(),
        }
    }

    fn scale(&self, meters: f64) -> String {
        fmt_num(units::from_meters(meters, self.options.units))
    }

    fn point(&self, p: DVec3) -> String {
        let p = p * self.options.units.per_meter();
        format!("[{}, {}, {}]", fmt_num(p.x), fmt_num(p.y), fmt_num(p.z))
    }

    fn prelude(&mut self, scene: &Scene) -> Result<()> {
        let r = self.scale(LINE_RADIUS);
        let t = self.scale(PLATE_THICKNESS);
        let out = &mut self.out;

        writeln!(out, "// YASim geometry, {} primitives", scene.len())?;
        if let Some(o) = scene.offsets() {
            writeln!(
                out,
                "// offsets: x={} y={} z={} h={} p={} r={}",
                o.x, o.y, o.z, o.heading, o.pitch, o.roll
            )?;
        }
        writeln!(out, "$fn = {};", self.options.segments)?;
        writeln!(out)?;
        writeln!(out, "module yasim_line(a, b, r = {r}) {{")?;
        writeln!(out, "    hull() {{ translate(a) sphere(r); translate(b) sphere(r); }}")?;
        writeln!(out, "}}")?;
        writeln!(out, "module yasim_arrow(a, b, r = {r}) {{")?;
        writeln!(out, "    yasim_line(a, b, r);")?;
        writeln!(out, "    translate(b) sphere(3 * r);")?;
        writeln!(out, "}}")?;
        writeln!(out, "module yasim_plate(points, t = {t}) {{")?;
        writeln!(out, "    hull() for (p = points) translate(p) cube(t, center = true);")?;
        writeln!(out, "}}")?;
        writeln!(out, "module yasim_mirrored() {{")?;
        writeln!(out, "    children();")?;
        writeln!(out, "    mirror([0, 1, 0]) children();")?;
        writeln!(out, "}}")?;
        Ok(())
    }

    fn primitive(&mut self, primitive: &Primitive) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "// {}", primitive.id())?;
        match primitive {
            Primitive::Cockpit(p) => self.cockpit(p),
            Primitive::Fuselage(p) => self.fuselage(p),
            Primitive::Wing(p) => self.wing(p),
            Primitive::Thruster(p) => self.thrust(p.center, &p.thrust),
            Primitive::Propeller(p) => self.propeller(p),
            Primitive::Jet(p) => self.thrust(p.center, &p.thrust),
            Primitive::Rotor(p) => self.rotor(p),
            Primitive::Gear(p) => self.gear(p),
            Primitive::Tank(p) => self.tank(p),
            Primitive::Ballast(p) => self.ballast(p),
            Primitive::Weight(p) => self.weight(p),
            Primitive::Hook(p) => self.hook(p),
            Primitive::Launchbar(p) => self.launchbar(p),
            Primitive::Hitch(p) => self.hitch(p),
        }
    }

    fn line(&mut self, a: DVec3, b: DVec3) -> Result<()> {
        let line = format!("yasim_line({}, {});", self.point(a), self.point(b));
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn arrow(&mut self, a: DVec3, b: DVec3) -> Result<()> {
        let arrow = format!("yasim_arrow({}, {});", self.point(a), self.point(b));
        writeln!(self.out, "{arrow}")?;
        Ok(())
    }

    fn cockpit(&mut self, p: &Cockpit) -> Result<()> {
        let block = format!(
            "color({}) translate({}) sphere({});",
            fmt_rgba(COCKPIT),
            self.point(p.position),
            self.scale(COCKPIT_RADIUS)
        );
        writeln!(self.out, "{block}")?;
        Ok(())
    }

    fn fuselage(&mut self, p: &Fuselage) -> Result<()> {
        let mid = p.front + p.midpoint * p.axis();
        let (front, mid, back) = (self.point(p.front), self.point(mid), self.point(p.back));
        let (end_r, mid_r) = (self.scale(p.end_radius()), self.scale(p.mid_radius()));

        writeln!(self.out, "color({}) {{", fmt_rgba(FUSELAGE))?;
        writeln!(
            self.out,
            "    hull() {{ translate({front}) sphere({end_r}); translate({mid}) sphere({mid_r}); }}"
        )?;
        writeln!(
            self.out,
            "    hull() {{ translate({mid}) sphere({mid_r}); translate({back}) sphere({end_r}); }}"
        )?;
        writeln!(self.out, "}}")?;
        Ok(())
    }

    fn plate(&self, corners: &[DVec3]) -> String {
        let points: Vec<String> = corners.iter().map(|c| self.point(*c)).collect();
        format!("yasim_plate([{}]);", points.join(", "))
    }

    fn wing(&mut self, wing: &Wing) -> Result<()> {
        let mirrored = self.options.mirror && wing.is_symmetric();
        let color = if wing.is_symmetric() {
            SYMMETRIC_SURFACE
        } else {
            SINGLE_SURFACE
        };
        let outline = self.plate(&[
            wing.root_leading,
            wing.tip_leading,
            wing.tip_trailing,
            wing.root_trailing,
        ]);

        let open = if mirrored { "yasim_mirrored() " } else { "" };
        writeln!(self.out, "{open}color({}) {outline}", fmt_rgba(color))?;

        for surface in &wing.control_surfaces {
            let plate = self.plate(&surface.corners);
            writeln!(self.out, "// {}", surface.id)?;
            writeln!(
                self.out,
                "{open}color({}) {plate}",
                fmt_rgba(CONTROL_SURFACE)
            )?;
        }
        Ok(())
    }

    /// Line from the engine to its action point, then a unit thrust arrow
    fn thrust(&mut self, center: DVec3, thrust: &Thrust) -> Result<()> {
        writeln!(self.out, "color({}) {{", fmt_rgba(THRUST))?;
        if center != thrust.action_point {
            self.line(center, thrust.action_point)?;
        }
        let tip = thrust.action_point + ARROW_LENGTH * thrust.unit_direction();
        self.arrow(thrust.action_point, tip)?;
        writeln!(self.out, "}}")?;
        Ok(())
    }

    fn disc(&mut self, center: DVec3, axis: DVec3, radius: f64, color: Rgba) -> Result<()> {
        let (angle, around) = align_z(axis);
        let block = format!(
            "%translate({}) rotate(a = {}, v = [{}, {}, {}]) color({}) cylinder(h = {}, r = {}, center = true);",
            self.point(center),
            fmt_num(angle),
            fmt_num(around.x),
            fmt_num(around.y),
            fmt_num(around.z),
            fmt_rgba(color),
            self.scale(DISC_THICKNESS),
            self.scale(radius)
        );
        writeln!(self.out, "{block}")?;
        Ok(())
    }

    fn propeller(&mut self, p: &Propeller) -> Result<()> {
        self.disc(p.center, p.thrust.unit_direction(), p.radius, PROPELLER)?;
        self.thrust(p.center, &p.thrust)
    }

    fn rotor(&mut self, p: &Rotor) -> Result<()> {
        self.disc(p.center, p.normal, p.radius, ROTOR)?;
        writeln!(self.out, "color({}) {{", fmt_rgba(ROTOR))?;
        self.line(p.blade_root(), p.blade_tip())?;
        self.arrow(p.center, p.center + ARROW_LENGTH * p.normal)?;
        self.arrow(p.center, p.center + ARROW_LENGTH * p.forward)?;
        writeln!(self.out, "}}")?;
        Ok(())
    }

    fn gear(&mut self, p: &Gear) -> Result<()> {
        writeln!(self.out, "color({}) {{", fmt_rgba(GEAR))?;
        self.line(p.position, p.position + p.compression)?;
        let contact = format!(
            "translate({}) sphere({});",
            self.point(p.position),
            self.scale(3.0 * LINE_RADIUS)
        );
        writeln!(self.out, "    {contact}")?;
        writeln!(self.out, "}}")?;
        Ok(())
    }

    fn tank(&mut self, p: &Tank) -> Result<()> {
        let block = format!(
            "%translate({}) {{ color({}) cube({}, center = true); sphere({}); }}",
            self.point(p.position),
            fmt_rgba(TANK),
            self.scale(TANK_SIDE),
            self.scale(TANK_SPHERE)
        );
        writeln!(self.out, "{block}")?;
        Ok(())
    }

    fn mass(&mut self, position: DVec3, height: f64, color: Rgba) -> Result<()> {
        let block = format!(
            "%translate({}) color({}) cylinder(h = {}, r = {}, center = true);",
            self.point(position),
            fmt_rgba(color),
            self.scale(height),
            self.scale(MASS_RADIUS)
        );
        writeln!(self.out, "{block}")?;
        Ok(())
    }

    fn ballast(&mut self, p: &Ballast) -> Result<()> {
        self.mass(p.position, p.mass * BALLAST_HEIGHT_PER_KG, BALLAST)
    }

    fn weight(&mut self, p: &Weight) -> Result<()> {
        self.mass(p.position, WEIGHT_HEIGHT, WEIGHT)
    }

    fn hook(&mut self, p: &Hook) -> Result<()> {
        writeln!(self.out, "color({}) {{", fmt_rgba(HOOK))?;
        self.line(p.position, p.up_tip)?;
        self.arrow(p.position, p.down_tip)?;
        writeln!(self.out, "}}")?;
        Ok(())
    }

    fn launchbar(&mut self, p: &Launchbar) -> Result<()> {
        writeln!(self.out, "color({}) {{", fmt_rgba(HOOK))?;
        self.line(p.position, p.launchbar_up_tip)?;
        self.arrow(p.position, p.launchbar_tip)?;
        if p.holdback != p.position {
            self.line(p.position, p.holdback)?;
        }
        self.line(p.holdback, p.holdback_up_tip)?;
        self.arrow(p.holdback, p.holdback_tip)?;
        writeln!(self.out, "}}")?;
        Ok(())
    }

    fn hitch(&mut self, p: &Hitch) -> Result<()> {
        let block = format!(
            "translate({}) rotate([90, 0, 0]) color({}) cylinder(h = {}, r = {}, center = true, $fn = 6);",
            self.point(p.position),
            fmt_rgba(HOOK),
            self.scale(PLATE_THICKNESS),
            self.scale(HITCH_RADIUS)
        );
        writeln!(self.out, "{block}")?;
        Ok(())
    }
}

impl Renderer for ScadRenderer {
    type Output = String;

    fn render(&mut self, scene: &Scene) -> Result<String> {
        self.out.clear();
        self.prelude(scene)?;
        for primitive in scene {
            self.primitive(primitive)?;
        }
        Ok(std::mem::take(&mut self.out))
    }
}

/// Angle (degrees) and axis of the rotation taking +Z onto `dir`
fn align_z(dir: DVec3) -> (f64, DVec3) {
    let dir = math::normalize_or(dir, Z);
    let (axis, angle) = DQuat::from_rotation_arc(Z, dir).to_axis_angle();
    (math::rad_to_deg(angle), axis)
}

/// Shortest decimal form with at most four fractional digits
fn fmt_num(value: f64) -> String {
    let s = format!("{value:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}

fn fmt_rgba(c: Rgba) -> String {
    format!(
        "[{}, {}, {}, {}]",
        fmt_num(c[0]),
        fmt_num(c[1]),
        fmt_num(c[2]),
        fmt_num(c[3])
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(xml: &str, options: ScadOptions) -> String {
        let scene = Scene::parse(xml).unwrap();
        ScadRenderer::new(options).render(&scene).unwrap()
    }

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_num(1000.0), "1000");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(-0.00001), "0");
        assert_eq!(fmt_num(1.23456), "1.2346");
        assert_eq!(fmt_num(-2.5), "-2.5");
    }

    #[test]
    fn align_z_cases() {
        let (angle, _) = align_z(Z);
        assert!(angle.abs() < 1e-9);

        let (angle, axis) = align_z(DVec3::X);
        assert!((angle - 90.0).abs() < 1e-9);
        assert!((axis - DVec3::Y).length() < 1e-9);

        let (angle, _) = align_z(-Z);
        assert!((angle - 180.0).abs() < 1e-9);
    }

    #[test]
    fn one_comment_per_primitive() {
        let xml = r#"<airplane>
  <tank x="1" y="0" z="0"/>
  <ballast x="0" y="0" z="0" mass-kg="20"/>
  <hitch x="0" y="0" z="0"/>
</airplane>"#;
        let scad = render(xml, ScadOptions::default());
        assert!(scad.contains("// YASim_tank#0\n"));
        assert!(scad.contains("// YASim_ballast#0\n"));
        assert!(scad.contains("// YASim_hitch#0\n"));
        // YASim +X maps to scene -X, scaled to millimeters
        assert!(scad.contains("%translate([-1000, 0, 0])"));
        // 20 kg of ballast is a one meter cylinder
        assert!(scad.contains("cylinder(h = 1000, r = 20, center = true)"));
    }

    #[test]
    fn units_in_meters() {
        let xml = r#"<airplane><tank x="1" y="0" z="0"/></airplane>"#;
        let options = ScadOptions {
            units: Units::Meter,
            ..Default::default()
        };
        let scad = render(xml, options);
        assert!(scad.contains("%translate([-1, 0, 0])"));
    }

    #[test]
    fn mirror_only_symmetric_surfaces() {
        let xml = r#"<airplane>
  <wing x="0" y="0" z="0" length="5" chord="1"><flap0 start="0" end="0.5"/></wing>
  <vstab x="-5" y="0" z="0" length="1" chord="1"/>
</airplane>"#;
        let options = ScadOptions {
            mirror: true,
            ..Default::default()
        };
        let scad = render(xml, options);
        assert_eq!(scad.matches("yasim_mirrored() color").count(), 2);
        assert!(scad.contains("// YASim_flap0#0\n"));

        let scad = render(xml, ScadOptions::default());
        assert_eq!(scad.matches("yasim_mirrored() color").count(), 0);
    }

    #[test]
    fn segments_setting() {
        let options = ScadOptions {
            segments: 64,
            ..Default::default()
        };
        let scad = render("<airplane/>", options);
        assert!(scad.contains("$fn = 64;"));
        assert!(scad.starts_with("// YASim geometry, 0 primitives"));
    }

    #[test]
    fn renderer_is_reusable() {
        let scene = Scene::parse(r#"<airplane><weight x="0" y="0" z="0"/></airplane>"#).unwrap();
        let mut renderer = ScadRenderer::default();
        let first = renderer.render(&scene).unwrap();
        let second = renderer.render(&scene).unwrap();
        assert_eq!(first, second);
    }
}
