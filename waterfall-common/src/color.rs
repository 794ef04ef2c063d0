use serde::{Deserialize, Serialize};

/// An RGB triple as produced by the host dashboard's color pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string at full opacity.
    pub fn css(&self) -> String {
        self.css_with_opacity(1.0)
    }

    /// CSS color string with an explicit alpha channel. Opacity is
    /// clamped to [0, 1].
    pub fn css_with_opacity(&self, opacity: f32) -> String {
        let opacity = opacity.clamp(0.0, 1.0);
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, opacity)
    }
}

/// CSS color string for a fully transparent fill.
pub const TRANSPARENT: &str = "transparent";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_strings() {
        let color = RgbColor::new(90, 193, 137);
        assert_eq!(color.css(), "rgba(90, 193, 137, 1)");
        assert_eq!(color.css_with_opacity(0.0), "rgba(90, 193, 137, 0)");
        assert_eq!(color.css_with_opacity(2.0), "rgba(90, 193, 137, 1)");
    }

    #[test]
    fn test_from_json() {
        let color: RgbColor = serde_json::from_str(r#"{"r": 1, "g": 2, "b": 3}"#).unwrap();
        assert_eq!(color, RgbColor::new(1, 2, 3));
    }
}
