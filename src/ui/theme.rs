use ratatui::style::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

/// Shared theme flag plus the palette derived from it. Held in `AppState`;
/// every widget reads colors through it so a toggle shows up on the next
/// draw. Not persisted across runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
}

impl Theme {
    pub fn toggle(&mut self) {
        self.mode = match self.mode {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn background(&self) -> Color {
        if self.is_dark() {
            Color::from_u32(0x000f0f0f)
        } else {
            Color::from_u32(0x00f9f9f9)
        }
    }

    pub fn surface(&self) -> Color {
        if self.is_dark() {
            Color::from_u32(0x00212121)
        } else {
            Color::from_u32(0x00ebebeb)
        }
    }

    pub fn text(&self) -> Color {
        if self.is_dark() {
            Color::from_u32(0x00f1f5f9)
        } else {
            Color::from_u32(0x00181818)
        }
    }

    pub fn muted(&self) -> Color {
        if self.is_dark() {
            Color::from_u32(0x0064748b)
        } else {
            Color::from_u32(0x00475569)
        }
    }

    pub fn primary(&self) -> Color {
        if self.is_dark() {
            Color::from_u32(0x003b82f6)
        } else {
            Color::from_u32(0x002563eb)
        }
    }

    pub fn danger(&self) -> Color {
        Color::from_u32(0x00ff0b37)
    }

    pub fn border(&self) -> Color {
        if self.is_dark() {
            Color::from_u32(0x00404040)
        } else {
            Color::from_u32(0x00cbd5e1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_exactly_once_per_call() {
        let mut theme = Theme::default();
        assert!(theme.is_dark());

        theme.toggle();
        assert!(!theme.is_dark());

        theme.toggle();
        assert!(theme.is_dark());
    }

    #[test]
    fn palettes_differ_between_modes() {
        let dark = Theme::default();
        let mut light = Theme::default();
        light.toggle();

        assert_ne!(dark.background(), light.background());
        assert_ne!(dark.text(), light.text());
    }
}
