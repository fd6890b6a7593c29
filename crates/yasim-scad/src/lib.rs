use clap::ValueEnum;

pub mod commands;
pub mod utils;

// Re-export yasim for external use
pub use yasim;

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum UnitFormat {
    Mm,
    Cm,
    M,
}

impl From<UnitFormat> for yasim::units::Units {
    fn from(format: UnitFormat) -> Self {
        match format {
            UnitFormat::Mm => Self::Millimeter,
            UnitFormat::Cm => Self::Centimeter,
            UnitFormat::M => Self::Meter,
        }
    }
}
