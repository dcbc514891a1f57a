// File: crates/plot-core/src/theme.rs
// Summary: Background/axis/text color presets applied to a plotter session.

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Clear color of every surface.
    pub background: Color,
    pub axis: Color,
    /// Tick labels, axis labels, title and legend names.
    pub text: Color,
}

impl Theme {
    /// Matches the session defaults: white background, dark gray axes and text.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            axis: Color::DARK_GRAY,
            text: Color::DARK_GRAY,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            axis: Color::rgb(180, 180, 190),
            text: Color::rgb(235, 235, 245),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Color::rgb(0x00, 0x2b, 0x36), // base03
            axis: Color::rgb(0x93, 0xa1, 0xa1),       // base1
            text: Color::rgb(0xee, 0xe8, 0xd5),       // base2
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::rgb(0xfd, 0xf6, 0xe3), // base3
            axis: Color::rgb(0x65, 0x7b, 0x83),       // base00
            text: Color::rgb(0x00, 0x2b, 0x36),       // base03
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: Color::BLACK,
            axis: Color::WHITE,
            text: Color::WHITE,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Built-in presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_light(),
        Theme::solarized_dark(),
        Theme::high_contrast(),
    ]
}

/// Find a theme by `name` (case-insensitive), falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
