// File: crates/plot-core/src/palette.rs
// Summary: Fixed named-color palette (CSS/X11 names) used as allocator candidates.

use crate::color::Color;

impl Color {
    pub const TRANSPARENT: Color = Color::argb(0, 255, 255, 255);
    pub const ALICE_BLUE: Color = Color::rgb(240, 248, 255);
    pub const ANTIQUE_WHITE: Color = Color::rgb(250, 235, 215);
    pub const AQUA: Color = Color::rgb(0, 255, 255);
    pub const AQUAMARINE: Color = Color::rgb(127, 255, 212);
    pub const AZURE: Color = Color::rgb(240, 255, 255);
    pub const BEIGE: Color = Color::rgb(245, 245, 220);
    pub const BISQUE: Color = Color::rgb(255, 228, 196);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const BLANCHED_ALMOND: Color = Color::rgb(255, 235, 205);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const BLUE_VIOLET: Color = Color::rgb(138, 43, 226);
    pub const BROWN: Color = Color::rgb(165, 42, 42);
    pub const BURLY_WOOD: Color = Color::rgb(222, 184, 135);
    pub const CADET_BLUE: Color = Color::rgb(95, 158, 160);
    pub const CHARTREUSE: Color = Color::rgb(127, 255, 0);
    pub const CHOCOLATE: Color = Color::rgb(210, 105, 30);
    pub const CORAL: Color = Color::rgb(255, 127, 80);
    pub const CORNFLOWER_BLUE: Color = Color::rgb(100, 149, 237);
    pub const CORNSILK: Color = Color::rgb(255, 248, 220);
    pub const CRIMSON: Color = Color::rgb(220, 20, 60);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const DARK_BLUE: Color = Color::rgb(0, 0, 139);
    pub const DARK_CYAN: Color = Color::rgb(0, 139, 139);
    pub const DARK_GOLDENROD: Color = Color::rgb(184, 134, 11);
    pub const DARK_GRAY: Color = Color::rgb(169, 169, 169);
    pub const DARK_GREEN: Color = Color::rgb(0, 100, 0);
    pub const DARK_KHAKI: Color = Color::rgb(189, 183, 107);
    pub const DARK_MAGENTA: Color = Color::rgb(139, 0, 139);
    pub const DARK_OLIVE_GREEN: Color = Color::rgb(85, 107, 47);
    pub const DARK_ORANGE: Color = Color::rgb(255, 140, 0);
    pub const DARK_ORCHID: Color = Color::rgb(153, 50, 204);
    pub const DARK_RED: Color = Color::rgb(139, 0, 0);
    pub const DARK_SALMON: Color = Color::rgb(233, 150, 122);
    pub const DARK_SEA_GREEN: Color = Color::rgb(143, 188, 143);
    pub const DARK_SLATE_BLUE: Color = Color::rgb(72, 61, 139);
    pub const DARK_SLATE_GRAY: Color = Color::rgb(47, 79, 79);
    pub const DARK_TURQUOISE: Color = Color::rgb(0, 206, 209);
    pub const DARK_VIOLET: Color = Color::rgb(148, 0, 211);
    pub const DEEP_PINK: Color = Color::rgb(255, 20, 147);
    pub const DEEP_SKY_BLUE: Color = Color::rgb(0, 191, 255);
    pub const DIM_GRAY: Color = Color::rgb(105, 105, 105);
    pub const DODGER_BLUE: Color = Color::rgb(30, 144, 255);
    pub const FIREBRICK: Color = Color::rgb(178, 34, 34);
    pub const FLORAL_WHITE: Color = Color::rgb(255, 250, 240);
    pub const FOREST_GREEN: Color = Color::rgb(34, 139, 34);
    pub const FUCHSIA: Color = Color::rgb(255, 0, 255);
    pub const GAINSBORO: Color = Color::rgb(220, 220, 220);
    pub const GHOST_WHITE: Color = Color::rgb(248, 248, 255);
    pub const GOLD: Color = Color::rgb(255, 215, 0);
    pub const GOLDENROD: Color = Color::rgb(218, 165, 32);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const GREEN_YELLOW: Color = Color::rgb(173, 255, 47);
    pub const HONEYDEW: Color = Color::rgb(240, 255, 240);
    pub const HOT_PINK: Color = Color::rgb(255, 105, 180);
    pub const INDIAN_RED: Color = Color::rgb(205, 92, 92);
    pub const INDIGO: Color = Color::rgb(75, 0, 130);
    pub const IVORY: Color = Color::rgb(255, 255, 240);
    pub const KHAKI: Color = Color::rgb(240, 230, 140);
    pub const LAVENDER: Color = Color::rgb(230, 230, 250);
    pub const LAVENDER_BLUSH: Color = Color::rgb(255, 240, 245);
    pub const LAWN_GREEN: Color = Color::rgb(124, 252, 0);
    pub const LEMON_CHIFFON: Color = Color::rgb(255, 250, 205);
    pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
    pub const LIGHT_CORAL: Color = Color::rgb(240, 128, 128);
    pub const LIGHT_CYAN: Color = Color::rgb(224, 255, 255);
    pub const LIGHT_GOLDENROD_YELLOW: Color = Color::rgb(250, 250, 210);
    pub const LIGHT_GREEN: Color = Color::rgb(144, 238, 144);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    pub const LIGHT_PINK: Color = Color::rgb(255, 182, 193);
    pub const LIGHT_SALMON: Color = Color::rgb(255, 160, 122);
    pub const LIGHT_SEA_GREEN: Color = Color::rgb(32, 178, 170);
    pub const LIGHT_SKY_BLUE: Color = Color::rgb(135, 206, 250);
    pub const LIGHT_SLATE_GRAY: Color = Color::rgb(119, 136, 153);
    pub const LIGHT_STEEL_BLUE: Color = Color::rgb(176, 196, 222);
    pub const LIGHT_YELLOW: Color = Color::rgb(255, 255, 224);
    pub const LIME: Color = Color::rgb(0, 255, 0);
    pub const LIME_GREEN: Color = Color::rgb(50, 205, 50);
    pub const LINEN: Color = Color::rgb(250, 240, 230);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const MAROON: Color = Color::rgb(128, 0, 0);
    pub const MEDIUM_AQUAMARINE: Color = Color::rgb(102, 205, 170);
    pub const MEDIUM_BLUE: Color = Color::rgb(0, 0, 205);
    pub const MEDIUM_ORCHID: Color = Color::rgb(186, 85, 211);
    pub const MEDIUM_PURPLE: Color = Color::rgb(147, 112, 219);
    pub const MEDIUM_SEA_GREEN: Color = Color::rgb(60, 179, 113);
    pub const MEDIUM_SLATE_BLUE: Color = Color::rgb(123, 104, 238);
    pub const MEDIUM_SPRING_GREEN: Color = Color::rgb(0, 250, 154);
    pub const MEDIUM_TURQUOISE: Color = Color::rgb(72, 209, 204);
    pub const MEDIUM_VIOLET_RED: Color = Color::rgb(199, 21, 133);
    pub const MIDNIGHT_BLUE: Color = Color::rgb(25, 25, 112);
    pub const MINT_CREAM: Color = Color::rgb(245, 255, 250);
    pub const MISTY_ROSE: Color = Color::rgb(255, 228, 225);
    pub const MOCCASIN: Color = Color::rgb(255, 228, 181);
    pub const NAVAJO_WHITE: Color = Color::rgb(255, 222, 173);
    pub const NAVY: Color = Color::rgb(0, 0, 128);
    pub const OLD_LACE: Color = Color::rgb(253, 245, 230);
    pub const OLIVE: Color = Color::rgb(128, 128, 0);
    pub const OLIVE_DRAB: Color = Color::rgb(107, 142, 35);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const ORANGE_RED: Color = Color::rgb(255, 69, 0);
    pub const ORCHID: Color = Color::rgb(218, 112, 214);
    pub const PALE_GOLDENROD: Color = Color::rgb(238, 232, 170);
    pub const PALE_GREEN: Color = Color::rgb(152, 251, 152);
    pub const PALE_TURQUOISE: Color = Color::rgb(175, 238, 238);
    pub const PALE_VIOLET_RED: Color = Color::rgb(219, 112, 147);
    pub const PAPAYA_WHIP: Color = Color::rgb(255, 239, 213);
    pub const PEACH_PUFF: Color = Color::rgb(255, 218, 185);
    pub const PERU: Color = Color::rgb(205, 133, 63);
    pub const PINK: Color = Color::rgb(255, 192, 203);
    pub const PLUM: Color = Color::rgb(221, 160, 221);
    pub const POWDER_BLUE: Color = Color::rgb(176, 224, 230);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ROSY_BROWN: Color = Color::rgb(188, 143, 143);
    pub const ROYAL_BLUE: Color = Color::rgb(65, 105, 225);
    pub const SADDLE_BROWN: Color = Color::rgb(139, 69, 19);
    pub const SALMON: Color = Color::rgb(250, 128, 114);
    pub const SANDY_BROWN: Color = Color::rgb(244, 164, 96);
    pub const SEA_GREEN: Color = Color::rgb(46, 139, 87);
    pub const SEA_SHELL: Color = Color::rgb(255, 245, 238);
    pub const SIENNA: Color = Color::rgb(160, 82, 45);
    pub const SILVER: Color = Color::rgb(192, 192, 192);
    pub const SKY_BLUE: Color = Color::rgb(135, 206, 235);
    pub const SLATE_BLUE: Color = Color::rgb(106, 90, 205);
    pub const SLATE_GRAY: Color = Color::rgb(112, 128, 144);
    pub const SNOW: Color = Color::rgb(255, 250, 250);
    pub const SPRING_GREEN: Color = Color::rgb(0, 255, 127);
    pub const STEEL_BLUE: Color = Color::rgb(70, 130, 180);
    pub const TAN: Color = Color::rgb(210, 180, 140);
    pub const TEAL: Color = Color::rgb(0, 128, 128);
    pub const THISTLE: Color = Color::rgb(216, 191, 216);
    pub const TOMATO: Color = Color::rgb(255, 99, 71);
    pub const TURQUOISE: Color = Color::rgb(64, 224, 208);
    pub const VIOLET: Color = Color::rgb(238, 130, 238);
    pub const WHEAT: Color = Color::rgb(245, 222, 179);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const WHITE_SMOKE: Color = Color::rgb(245, 245, 245);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const YELLOW_GREEN: Color = Color::rgb(154, 205, 50);
}

/// Candidate colors in a fixed, deterministic order (alphabetical by name).
pub const NAMED_COLORS: &[(&str, Color)] = &[
    ("AliceBlue", Color::ALICE_BLUE),
    ("AntiqueWhite", Color::ANTIQUE_WHITE),
    ("Aqua", Color::AQUA),
    ("Aquamarine", Color::AQUAMARINE),
    ("Azure", Color::AZURE),
    ("Beige", Color::BEIGE),
    ("Bisque", Color::BISQUE),
    ("Black", Color::BLACK),
    ("BlanchedAlmond", Color::BLANCHED_ALMOND),
    ("Blue", Color::BLUE),
    ("BlueViolet", Color::BLUE_VIOLET),
    ("Brown", Color::BROWN),
    ("BurlyWood", Color::BURLY_WOOD),
    ("CadetBlue", Color::CADET_BLUE),
    ("Chartreuse", Color::CHARTREUSE),
    ("Chocolate", Color::CHOCOLATE),
    ("Coral", Color::CORAL),
    ("CornflowerBlue", Color::CORNFLOWER_BLUE),
    ("Cornsilk", Color::CORNSILK),
    ("Crimson", Color::CRIMSON),
    ("Cyan", Color::CYAN),
    ("DarkBlue", Color::DARK_BLUE),
    ("DarkCyan", Color::DARK_CYAN),
    ("DarkGoldenrod", Color::DARK_GOLDENROD),
    ("DarkGray", Color::DARK_GRAY),
    ("DarkGreen", Color::DARK_GREEN),
    ("DarkKhaki", Color::DARK_KHAKI),
    ("DarkMagenta", Color::DARK_MAGENTA),
    ("DarkOliveGreen", Color::DARK_OLIVE_GREEN),
    ("DarkOrange", Color::DARK_ORANGE),
    ("DarkOrchid", Color::DARK_ORCHID),
    ("DarkRed", Color::DARK_RED),
    ("DarkSalmon", Color::DARK_SALMON),
    ("DarkSeaGreen", Color::DARK_SEA_GREEN),
    ("DarkSlateBlue", Color::DARK_SLATE_BLUE),
    ("DarkSlateGray", Color::DARK_SLATE_GRAY),
    ("DarkTurquoise", Color::DARK_TURQUOISE),
    ("DarkViolet", Color::DARK_VIOLET),
    ("DeepPink", Color::DEEP_PINK),
    ("DeepSkyBlue", Color::DEEP_SKY_BLUE),
    ("DimGray", Color::DIM_GRAY),
    ("DodgerBlue", Color::DODGER_BLUE),
    ("Firebrick", Color::FIREBRICK),
    ("FloralWhite", Color::FLORAL_WHITE),
    ("ForestGreen", Color::FOREST_GREEN),
    ("Fuchsia", Color::FUCHSIA),
    ("Gainsboro", Color::GAINSBORO),
    ("GhostWhite", Color::GHOST_WHITE),
    ("Gold", Color::GOLD),
    ("Goldenrod", Color::GOLDENROD),
    ("Gray", Color::GRAY),
    ("Green", Color::GREEN),
    ("GreenYellow", Color::GREEN_YELLOW),
    ("Honeydew", Color::HONEYDEW),
    ("HotPink", Color::HOT_PINK),
    ("IndianRed", Color::INDIAN_RED),
    ("Indigo", Color::INDIGO),
    ("Ivory", Color::IVORY),
    ("Khaki", Color::KHAKI),
    ("Lavender", Color::LAVENDER),
    ("LavenderBlush", Color::LAVENDER_BLUSH),
    ("LawnGreen", Color::LAWN_GREEN),
    ("LemonChiffon", Color::LEMON_CHIFFON),
    ("LightBlue", Color::LIGHT_BLUE),
    ("LightCoral", Color::LIGHT_CORAL),
    ("LightCyan", Color::LIGHT_CYAN),
    ("LightGoldenrodYellow", Color::LIGHT_GOLDENROD_YELLOW),
    ("LightGray", Color::LIGHT_GRAY),
    ("LightGreen", Color::LIGHT_GREEN),
    ("LightPink", Color::LIGHT_PINK),
    ("LightSalmon", Color::LIGHT_SALMON),
    ("LightSeaGreen", Color::LIGHT_SEA_GREEN),
    ("LightSkyBlue", Color::LIGHT_SKY_BLUE),
    ("LightSlateGray", Color::LIGHT_SLATE_GRAY),
    ("LightSteelBlue", Color::LIGHT_STEEL_BLUE),
    ("LightYellow", Color::LIGHT_YELLOW),
    ("Lime", Color::LIME),
    ("LimeGreen", Color::LIME_GREEN),
    ("Linen", Color::LINEN),
    ("Magenta", Color::MAGENTA),
    ("Maroon", Color::MAROON),
    ("MediumAquamarine", Color::MEDIUM_AQUAMARINE),
    ("MediumBlue", Color::MEDIUM_BLUE),
    ("MediumOrchid", Color::MEDIUM_ORCHID),
    ("MediumPurple", Color::MEDIUM_PURPLE),
    ("MediumSeaGreen", Color::MEDIUM_SEA_GREEN),
    ("MediumSlateBlue", Color::MEDIUM_SLATE_BLUE),
    ("MediumSpringGreen", Color::MEDIUM_SPRING_GREEN),
    ("MediumTurquoise", Color::MEDIUM_TURQUOISE),
    ("MediumVioletRed", Color::MEDIUM_VIOLET_RED),
    ("MidnightBlue", Color::MIDNIGHT_BLUE),
    ("MintCream", Color::MINT_CREAM),
    ("MistyRose", Color::MISTY_ROSE),
    ("Moccasin", Color::MOCCASIN),
    ("NavajoWhite", Color::NAVAJO_WHITE),
    ("Navy", Color::NAVY),
    ("OldLace", Color::OLD_LACE),
    ("Olive", Color::OLIVE),
    ("OliveDrab", Color::OLIVE_DRAB),
    ("Orange", Color::ORANGE),
    ("OrangeRed", Color::ORANGE_RED),
    ("Orchid", Color::ORCHID),
    ("PaleGoldenrod", Color::PALE_GOLDENROD),
    ("PaleGreen", Color::PALE_GREEN),
    ("PaleTurquoise", Color::PALE_TURQUOISE),
    ("PaleVioletRed", Color::PALE_VIOLET_RED),
    ("PapayaWhip", Color::PAPAYA_WHIP),
    ("PeachPuff", Color::PEACH_PUFF),
    ("Peru", Color::PERU),
    ("Pink", Color::PINK),
    ("Plum", Color::PLUM),
    ("PowderBlue", Color::POWDER_BLUE),
    ("Purple", Color::PURPLE),
    ("Red", Color::RED),
    ("RosyBrown", Color::ROSY_BROWN),
    ("RoyalBlue", Color::ROYAL_BLUE),
    ("SaddleBrown", Color::SADDLE_BROWN),
    ("Salmon", Color::SALMON),
    ("SandyBrown", Color::SANDY_BROWN),
    ("SeaGreen", Color::SEA_GREEN),
    ("SeaShell", Color::SEA_SHELL),
    ("Sienna", Color::SIENNA),
    ("Silver", Color::SILVER),
    ("SkyBlue", Color::SKY_BLUE),
    ("SlateBlue", Color::SLATE_BLUE),
    ("SlateGray", Color::SLATE_GRAY),
    ("Snow", Color::SNOW),
    ("SpringGreen", Color::SPRING_GREEN),
    ("SteelBlue", Color::STEEL_BLUE),
    ("Tan", Color::TAN),
    ("Teal", Color::TEAL),
    ("Thistle", Color::THISTLE),
    ("Tomato", Color::TOMATO),
    ("Turquoise", Color::TURQUOISE),
    ("Violet", Color::VIOLET),
    ("Wheat", Color::WHEAT),
    ("White", Color::WHITE),
    ("WhiteSmoke", Color::WHITE_SMOKE),
    ("Yellow", Color::YELLOW),
    ("YellowGreen", Color::YELLOW_GREEN),
];

/// Look up a palette entry by name, ignoring ASCII case.
pub fn named(name: &str) -> Option<Color> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, c)| c)
}

/// Palette colors only, in palette order.
pub fn default_palette() -> Vec<Color> {
    NAMED_COLORS.iter().map(|&(_, c)| c).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(named("darkgray"), Some(Color::DARK_GRAY));
        assert_eq!(named("CornflowerBlue"), Some(Color::rgb(100, 149, 237)));
        assert_eq!(named("no-such-color"), None);
    }

    #[test]
    fn palette_is_opaque_and_sorted() {
        assert!(NAMED_COLORS.iter().all(|(_, c)| c.a == 255));
        let names: Vec<&str> = NAMED_COLORS.iter().map(|(n, _)| *n).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
