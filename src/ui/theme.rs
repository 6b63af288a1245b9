use crate::analysis::WordClassification;
use ratatui::style::Color;

/// Midnight theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dimmed: Color,
    pub known: Color,
    pub ngl: Color,
    pub unknown: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
            known: Color::Rgb(158, 206, 106),   // #9ECE6A Green
            ngl: Color::Rgb(224, 175, 104),     // #E0AF68 Amber
            unknown: Color::Rgb(247, 118, 142), // #F7768E Coral Red
            warning: Color::Rgb(255, 158, 100), // #FF9E64 Orange
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }

    pub fn for_class(&self, class: WordClassification) -> Color {
        match class {
            WordClassification::Known => self.known,
            WordClassification::Ngl => self.ngl,
            WordClassification::Unknown => self.unknown,
        }
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use crate::analysis::WordClassification;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn warning() -> Color {
        Theme::current().warning
    }
    pub fn classification(class: WordClassification) -> Color {
        Theme::current().for_class(class)
    }
}
