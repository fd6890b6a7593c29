use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color, Table};
use serde_json::json;
use yasim::{Primitive, Scene};

use crate::OutputFormat;
use crate::utils::{color, file as file_utils};

pub fn execute(file: &Path, format: OutputFormat) -> Result<()> {
    let scene = file_utils::load_scene(file)?;

    match format {
        OutputFormat::Text => output_text(file, &scene),
        OutputFormat::Json => output_json(file, &scene),
    }
}

fn format_point(p: [f64; 3]) -> String {
    format!("{:.3}, {:.3}, {:.3}", p[0], p[1], p[2])
}

/// Short per-kind detail for the primitive listing
fn describe(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Fuselage(f) => format!("length {:.2} m, width {:.2} m", f.length(), f.width),
        Primitive::Wing(w) => {
            let mut detail = format!(
                "{} span {:.2} m, chord {:.2} m",
                w.kind.as_str(),
                w.params.length,
                w.params.chord
            );
            if !w.control_surfaces.is_empty() {
                let surfaces: Vec<&str> = w.control_surfaces.iter().map(|s| s.kind.as_str()).collect();
                detail.push_str(&format!(", {}", surfaces.join("/")));
            }
            detail
        }
        Primitive::Propeller(p) => format!("radius {:.2} m", p.radius),
        Primitive::Jet(j) if j.rotate != 0.0 => format!("rotated {}°", j.rotate),
        Primitive::Rotor(r) => format!(
            "{} blades, diameter {:.2} m, {}",
            r.params.numblades,
            r.params.diameter,
            if r.params.ccw { "ccw" } else { "cw" }
        ),
        Primitive::Gear(g) => format!("compression {:.2} m", g.compression_length()),
        Primitive::Ballast(b) => format!("{} kg", b.mass),
        Primitive::Hook(h) => format!("length {:.2} m", h.length),
        Primitive::Launchbar(l) => format!("length {:.2} m", l.params.length),
        _ => String::new(),
    }
}

fn output_text(file: &Path, scene: &Scene) -> Result<()> {
    println!("{}", "Aircraft Summary".bold());

    let mut summary_table = Table::new();
    summary_table.load_preset(UTF8_FULL_CONDENSED);
    summary_table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);

    summary_table.add_row(vec![
        Cell::new("File").fg(Color::Cyan),
        Cell::new(file.display().to_string()),
    ]);
    summary_table.add_row(vec![
        Cell::new("Primitives").fg(Color::Cyan),
        Cell::new(scene.len().to_string()),
    ]);
    for (kind, count) in scene.counts() {
        summary_table.add_row(vec![
            Cell::new(format!("  {kind}")).fg(color::kind_color(kind)),
            Cell::new(count.to_string()),
        ]);
    }
    let surfaces = scene.control_surface_count();
    if surfaces > 0 {
        summary_table.add_row(vec![
            Cell::new("Control Surfaces").fg(Color::Cyan),
            Cell::new(surfaces.to_string()),
        ]);
    }
    if let Some(offsets) = scene.offsets() {
        summary_table.add_row(vec![
            Cell::new("Offsets").fg(Color::Cyan),
            Cell::new(format!(
                "x={} y={} z={} h={} p={} r={}",
                offsets.x, offsets.y, offsets.z, offsets.heading, offsets.pitch, offsets.roll
            )),
        ]);
    }

    println!("{summary_table}");

    if scene.is_empty() {
        return Ok(());
    }

    println!();
    println!("{}", "Primitives".bold());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
    table.set_header(vec!["Identity", "Kind", "Position (m)", "Details"]);

    for primitive in scene {
        let kind = primitive.kind();
        table.add_row(vec![
            Cell::new(primitive.id()),
            Cell::new(kind.as_str()).fg(color::kind_color(kind)),
            Cell::new(format_point(primitive.position().to_array())),
            Cell::new(describe(primitive)),
        ]);
    }

    println!("{table}");
    println!(
        "{}",
        "Positions are in scene axes (x aft, y right, z up)".dimmed()
    );

    Ok(())
}

fn output_json(file: &Path, scene: &Scene) -> Result<()> {
    let info = json!({
        "file": file.display().to_string(),
        "primitives": scene.len(),
        "counts": scene.counts(),
        "control_surfaces": scene.control_surface_count(),
        "offsets": scene.offsets(),
        "scene": scene.primitives(),
    });

    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
