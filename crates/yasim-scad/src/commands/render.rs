use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use yasim::{Renderer, ScadOptions, ScadRenderer};

use crate::UnitFormat;
use crate::utils::file as file_utils;

pub struct RenderArgs<'a> {
    pub file: &'a Path,
    pub output: Option<&'a Path>,
    pub units: UnitFormat,
    pub mirror: bool,
    pub segments: u32,
}

pub fn execute(args: RenderArgs<'_>) -> Result<()> {
    let scene = file_utils::load_scene(args.file)?;

    let options = ScadOptions {
        units: args.units.into(),
        mirror: args.mirror,
        segments: args.segments,
    };
    let scad = ScadRenderer::new(options)
        .render(&scene)
        .context("Failed to render OpenSCAD model")?;

    match args.output {
        Some(path) => {
            std::fs::write(path, &scad)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", scad.len(), path.display());
            eprintln!(
                "{} {} primitives to {}",
                "Wrote".green().bold(),
                scene.len(),
                path.display()
            );
        }
        None => print!("{scad}"),
    }

    Ok(())
}
