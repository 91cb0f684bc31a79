use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,

    // Table colors
    pub table_header_bg: Color,
    pub table_header_fg: Color,
    pub table_row_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default) - Cyan/Magenta color scheme
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c800,

            text_primary: tailwind::CYAN.c50,
            text_secondary: tailwind::CYAN.c200,
            text_muted: tailwind::CYAN.c700,

            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::FUCHSIA.c500,

            status_success: tailwind::CYAN.c400,
            status_error: tailwind::FUCHSIA.c400,
            status_warning: tailwind::PURPLE.c400,

            table_header_bg: tailwind::CYAN.c700,
            table_header_fg: tailwind::SLATE.c50,
            table_row_fg: tailwind::CYAN.c100,
        }
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }
}
