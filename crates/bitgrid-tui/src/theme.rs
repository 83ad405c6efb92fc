use bitgrid_core::Paint;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub foreground: Color,
    pub border_active: Color,
    pub border_inactive: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,

    // Input form
    pub title_fg: Color,
    pub label_fg: Color,
    pub authoritative_fg: Color,

    // Grid rows
    pub row_label_fg: Color,
    pub nibble_mark_bg: Color,
    pub nibble_mark_fg: Color,
    pub bit_mark_fg: Color,
    pub index_mark_fg: Color,

    pub error_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

// Solarized Palette
struct Solarized;
impl Solarized {
    const BASE03: Color = Color::Rgb(0, 43, 54);
    const BASE02: Color = Color::Rgb(7, 54, 66);
    const BASE01: Color = Color::Rgb(88, 110, 117);
    const BASE00: Color = Color::Rgb(101, 123, 131);
    const BASE0: Color = Color::Rgb(131, 148, 150);
    const BASE1: Color = Color::Rgb(147, 161, 161);
    const BASE2: Color = Color::Rgb(238, 232, 213);
    const BASE3: Color = Color::Rgb(253, 246, 227);
    const YELLOW: Color = Color::Rgb(181, 137, 0);
    const RED: Color = Color::Rgb(220, 50, 47);
    const BLUE: Color = Color::Rgb(38, 139, 210);
    const CYAN: Color = Color::Rgb(42, 161, 152);
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Solarized Light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "Solarized Dark",
            background: Solarized::BASE03,
            foreground: Solarized::BASE0,
            border_active: Solarized::BLUE,
            border_inactive: Solarized::BASE01,
            selection_bg: Solarized::BASE02,
            selection_fg: Solarized::BASE1,
            status_bar_bg: Solarized::BASE02,
            status_bar_fg: Solarized::BASE1,

            title_fg: Solarized::BASE1,
            label_fg: Solarized::BASE01,
            authoritative_fg: Solarized::CYAN,

            row_label_fg: Solarized::BASE01,
            nibble_mark_bg: Solarized::YELLOW,
            nibble_mark_fg: Solarized::BASE03,
            bit_mark_fg: Solarized::RED,
            index_mark_fg: Solarized::BLUE,

            error_fg: Solarized::RED,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Solarized Light",
            background: Solarized::BASE3,
            foreground: Solarized::BASE00,
            border_active: Solarized::BLUE,
            border_inactive: Solarized::BASE1,
            selection_bg: Solarized::BASE2,
            selection_fg: Solarized::BASE01,
            status_bar_bg: Solarized::BASE2,
            status_bar_fg: Solarized::BASE01,

            title_fg: Solarized::BASE01,
            label_fg: Solarized::BASE1,
            authoritative_fg: Solarized::CYAN,

            row_label_fg: Solarized::BASE1,
            nibble_mark_bg: Solarized::YELLOW,
            nibble_mark_fg: Solarized::BASE3,
            bit_mark_fg: Solarized::RED,
            index_mark_fg: Solarized::BLUE,

            error_fg: Solarized::RED,
        }
    }

    pub fn all_names() -> Vec<&'static str> {
        vec!["Solarized Dark", "Solarized Light"]
    }

    /// The theme after this one in [`Theme::all_names`], wrapping around.
    pub fn next(&self) -> Self {
        let names = Self::all_names();
        let pos = names.iter().position(|n| *n == self.name).unwrap_or(0);
        Self::from_name(names[(pos + 1) % names.len()])
    }

    pub fn paint_fg(&self, paint: Paint) -> Color {
        match paint {
            Paint::Default => self.foreground,
            Paint::NibbleMark => self.nibble_mark_fg,
            Paint::BitMark => self.bit_mark_fg,
            Paint::IndexMark => self.index_mark_fg,
        }
    }

    pub fn paint_bg(&self, paint: Paint) -> Color {
        match paint {
            Paint::NibbleMark => self.nibble_mark_bg,
            _ => self.background,
        }
    }
}
