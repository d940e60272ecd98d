//! Shared light/dark theme

use std::fmt;

/// Presentation mode shared by every panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Holds the current theme mode for the whole page.
///
/// Built once by the app and handed by reference to every panel that
/// draws with it. Nothing outside [`ThemeStore::toggle`] writes the mode,
/// and a fresh store always starts out [`ThemeMode::Light`].
#[derive(Debug, Clone, Default)]
pub struct ThemeStore {
    mode: ThemeMode,
}

impl ThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip between light and dark, returning the new mode
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggle();
        tracing::debug!("theme toggled to {}", self.mode);
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_starts_light() {
        let store = ThemeStore::new();
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_flips_and_returns_new_mode() {
        let mut store = ThemeStore::new();
        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_parity() {
        for n in 0..12 {
            let mut store = ThemeStore::new();
            for _ in 0..n {
                store.toggle();
            }
            let expected = if n % 2 == 0 {
                ThemeMode::Light
            } else {
                ThemeMode::Dark
            };
            assert_eq!(store.mode(), expected, "after {n} toggles");
        }
    }

    #[test]
    fn test_mode_toggle_is_involution() {
        assert_eq!(ThemeMode::Light.toggle().toggle(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggle().toggle(), ThemeMode::Dark);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(ThemeMode::Light.to_string(), "light");
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }
}
