use comfy_table::Color;
use yasim::PrimitiveKind;

/// Check if color output should be disabled
/// Respects NO_COLOR environment variable
pub fn should_disable_color() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Initialize colored crate based on NO_COLOR environment variable
pub fn init_color() {
    if should_disable_color() {
        colored::control::set_override(false);
    }
}

/// Table color per primitive family, loosely matching the rendered model
pub fn kind_color(kind: PrimitiveKind) -> Color {
    if should_disable_color() {
        return Color::Reset;
    }
    match kind {
        PrimitiveKind::Cockpit | PrimitiveKind::Fuselage => Color::Blue,
        PrimitiveKind::Wing => Color::Green,
        PrimitiveKind::Thruster | PrimitiveKind::Propeller | PrimitiveKind::Jet => Color::Red,
        PrimitiveKind::Rotor => Color::Magenta,
        PrimitiveKind::Tank | PrimitiveKind::Ballast | PrimitiveKind::Weight => Color::Cyan,
        PrimitiveKind::Gear
        | PrimitiveKind::Hook
        | PrimitiveKind::Launchbar
        | PrimitiveKind::Hitch => Color::Grey,
    }
}
