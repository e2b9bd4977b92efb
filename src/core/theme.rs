// Light/dark theme capability injected into components that style
// themselves (currently the cursor).

use super::constants::{CURSOR_HOVER_SIZE_PX, CURSOR_SIZE_PX};
use std::cell::Cell;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Stored preference wins; otherwise follow the OS colour scheme.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        stored.and_then(Theme::parse).unwrap_or(if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }

    pub fn cursor_style(self, hovering: bool) -> CursorStyle {
        let size_px = if hovering {
            CURSOR_HOVER_SIZE_PX
        } else {
            CURSOR_SIZE_PX
        };
        match self {
            Theme::Light => CursorStyle {
                size_px,
                background: "rgba(13, 110, 253, 0.2)",
                border: "#0D6EFD",
            },
            Theme::Dark => CursorStyle {
                size_px,
                background: "rgba(13, 110, 253, 0.4)",
                border: "#FFFFFF",
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorStyle {
    pub size_px: f32,
    pub background: &'static str,
    pub border: &'static str,
}

impl CursorStyle {
    /// Inline declarations for everything except the transform, which the
    /// frame loop owns.
    pub fn to_css(&self) -> String {
        format!(
            "width:{s}px;height:{s}px;margin:-{h}px 0 0 -{h}px;background-color:{};border:2px solid {}",
            self.background,
            self.border,
            s = self.size_px,
            h = self.size_px / 2.0,
        )
    }
}

/// What a consumer needs from the theme provider.
pub trait ThemeAccess {
    fn theme(&self) -> Theme;
    fn toggle_theme(&self) -> Theme;
}

/// Plain in-memory provider. The web shell wraps it to also persist and
/// apply the `dark` class.
#[derive(Debug, Default)]
pub struct ThemeCell {
    current: Cell<Theme>,
}

impl ThemeCell {
    pub fn new(theme: Theme) -> Self {
        Self {
            current: Cell::new(theme),
        }
    }
}

impl ThemeAccess for ThemeCell {
    fn theme(&self) -> Theme {
        self.current.get()
    }

    fn toggle_theme(&self) -> Theme {
        let next = self.current.get().toggled();
        self.current.set(next);
        next
    }
}
