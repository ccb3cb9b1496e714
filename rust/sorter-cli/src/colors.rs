//! ANSI color helpers for CLI output.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Gray,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Red => "31",
            Color::Green => "32",
            Color::Yellow => "33",
            Color::Gray => "90",
        }
    }
}

/// Wrap `s` in the escape sequence for `color`.
pub fn paint(color: Color, s: &str) -> String {
    format!("\x1b[{}m{}\x1b[0m", color.code(), s)
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Right-aligned, bold green status label (`     Created`).
pub fn status_label(label: &str) -> String {
    format!("\x1b[1;32m{:>12}\x1b[0m", label)
}

/// The red `error:` prefix used for fatal diagnostics.
pub fn error_prefix() -> String {
    paint(Color::Red, "error:")
}

/// Color a stability name: green for stable, yellow for selectable.
pub fn stability(label: &str) -> String {
    match label {
        "stable" => paint(Color::Green, label),
        "selectable" => paint(Color::Yellow, label),
        _ => paint(Color::Gray, label),
    }
}
