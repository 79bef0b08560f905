use poster_core::color::Color;
use poster_core::models::theme::{Theme, ThemeColors, ThemeFonts};

const fn hex(v: u32) -> Color {
    Color::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

const fn fonts(heading: &'static str, body: &'static str) -> ThemeFonts {
    ThemeFonts { heading, body }
}

/// Colors in catalog order: primary, secondary, accent, text, background,
/// sidebar background, sidebar text.
const fn colors(c: [u32; 7]) -> ThemeColors {
    ThemeColors {
        primary: hex(c[0]),
        secondary: hex(c[1]),
        accent: hex(c[2]),
        text: hex(c[3]),
        background: hex(c[4]),
        sidebar_background: hex(c[5]),
        sidebar_text: hex(c[6]),
    }
}

const ARIAL: &str = "Arial, sans-serif";
const VERDANA: &str = "Verdana, sans-serif";

pub static THEMES: [Theme; 8] = [
    Theme {
        id: "eco",
        name: "Scientific Eco",
        colors: colors([
            0x4a5d23, 0xe5e7eb, 0xfef08a, 0x1f2937, 0xffffff, 0x4a5d23, 0xffffff,
        ]),
        fonts: fonts(ARIAL, ARIAL),
    },
    Theme {
        id: "nature",
        name: "Forest Growth",
        colors: colors([
            0x669966, 0xd1e0d1, 0xc48660, 0x1a2e1a, 0xf0f5f0, 0x4d7a4d, 0xffffff,
        ]),
        fonts: fonts(VERDANA, VERDANA),
    },
    Theme {
        id: "ocean",
        name: "Deep Ocean",
        colors: colors([
            0x0f4c81, 0xdbeafe, 0x38bdf8, 0x0f172a, 0xf0f9ff, 0x0c3b63, 0xffffff,
        ]),
        fonts: fonts(VERDANA, VERDANA),
    },
    Theme {
        id: "ice",
        name: "Arctic Blue",
        colors: colors([
            0x2c3e50, 0xecf0f1, 0x3498db, 0x2c3e50, 0xffffff, 0x34495e, 0xffffff,
        ]),
        fonts: fonts("Georgia, serif", ARIAL),
    },
    Theme {
        id: "brick",
        name: "University Red",
        colors: colors([
            0xa55e5e, 0xf2dede, 0xd9534f, 0x3e1b1b, 0xfff5f5, 0x804040, 0xffffff,
        ]),
        fonts: fonts("Trebuchet MS, sans-serif", "Trebuchet MS, sans-serif"),
    },
    Theme {
        id: "crimson",
        name: "Ivy League",
        colors: colors([
            0x8a1c1c, 0xf3e8e8, 0xd4a373, 0x2d1b1b, 0xfaf5f5, 0x6b1616, 0xffffff,
        ]),
        fonts: fonts("Times New Roman, serif", "Times New Roman, serif"),
    },
    Theme {
        id: "slate",
        name: "Modern Tech",
        colors: colors([
            0x334155, 0xe2e8f0, 0x0ea5e9, 0x0f172a, 0xf8fafc, 0x1e293b, 0xffffff,
        ]),
        fonts: fonts("system-ui, sans-serif", "system-ui, sans-serif"),
    },
    Theme {
        id: "minimal",
        name: "Clean Minimal",
        colors: colors([
            0x000000, 0xf5f5f5, 0x737373, 0x171717, 0xffffff, 0x262626, 0xffffff,
        ]),
        fonts: fonts("Helvetica, sans-serif", "Helvetica, sans-serif"),
    },
];
