/// Length units for rendered output
///
/// YASim configurations are always in meters; renderers scale from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    /// OpenSCAD's customary unit
    #[default]
    Millimeter,
    Centimeter,
    Meter,
}

impl Units {
    /// Multiplier from meters to this unit
    pub fn per_meter(self) -> f64 {
        match self {
            Units::Millimeter => 1000.0,
            Units::Centimeter => 100.0,
            Units::Meter => 1.0,
        }
    }
}

/// Convert a length in meters (canonical internal unit) to `to_units`
pub fn from_meters(value: f64, to_units: Units) -> f64 {
    value * to_units.per_meter()
}
