//! Font descriptor for glyph rendering.

/// Font configuration for glyph rendering.
///
/// Describes which font Pango should start from when laying out sticker and
/// cursor glyphs. Emoji not covered by the family are picked up through
/// Pango's font fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Noto Color Emoji")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light")
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::with_family("Sans")
    }
}

impl FontDescriptor {
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Normal-weight, upright descriptor for `family`.
    pub fn with_family(family: &str) -> Self {
        Self {
            family: family.to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }

    /// Converts this descriptor to a Pango font description string with an
    /// absolute pixel size.
    ///
    /// Format: "Family Style Weight Sizepx"
    /// Example: "Sans 32px" or "Sans Italic Bold 24px"
    pub fn to_pango_string(&self, size_px: f64) -> String {
        let mut parts = vec![self.family.clone()];

        if !self.style.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.style));
        }

        if !self.weight.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.weight));
        }

        // Pango rejects a zero size; glyphs below one pixel are invisible anyway.
        parts.push(format!("{}px", size_px.max(1.0).round() as i32));

        parts.join(" ")
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pango_string_default() {
        let font = FontDescriptor::default();
        assert_eq!(font.to_pango_string(32.0), "Sans 32px");
    }

    #[test]
    fn test_pango_string_styled() {
        let font = FontDescriptor::new(
            "Monospace".to_string(),
            "bold".to_string(),
            "italic".to_string(),
        );
        assert_eq!(font.to_pango_string(24.4), "Monospace Italic Bold 24px");
    }

    #[test]
    fn test_pango_string_minimum_size() {
        let font = FontDescriptor::with_family("Noto Color Emoji");
        assert_eq!(font.to_pango_string(0.0), "Noto Color Emoji 1px");
    }
}
