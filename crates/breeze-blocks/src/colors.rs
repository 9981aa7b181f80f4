//! Palette color class names.
//!
//! Color attributes store a palette slug; the presentation class encodes
//! the slug and the CSS property the palette entry applies to.

/// Class for a background-color palette slug; empty slug, empty class.
pub fn background_color_class(slug: &str) -> String {
    if slug.is_empty() {
        String::new()
    } else {
        format!("has-{slug}-background-color")
    }
}

/// Class for a text-color palette slug; empty slug, empty class.
pub fn text_color_class(slug: &str) -> String {
    if slug.is_empty() {
        String::new()
    } else {
        format!("has-{slug}-color")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_map_to_property_specific_classes() {
        assert_eq!(background_color_class("vivid-red"), "has-vivid-red-background-color");
        assert_eq!(text_color_class("pale-cyan"), "has-pale-cyan-color");
    }

    #[test]
    fn empty_slug_yields_no_class() {
        assert_eq!(background_color_class(""), "");
        assert_eq!(text_color_class(""), "");
    }
}
