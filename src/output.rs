//! Output mode and console writer.
//!
//! Progress lines go to stdout for the CI console; diagnostics go through
//! `tracing` to stderr. Styling honors `NO_COLOR`.

use console::Style;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show progress plus per-export detail.
    Verbose,
    /// Show progress and status.
    #[default]
    Normal,
    /// Show only the final status and errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows section banners and detail lines.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows per-export detail.
    pub fn shows_exports(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Console styles for progress output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for section banners (bold).
    pub banner: Style,
    /// Style for detail lines.
    pub detail: Style,
    /// Style for the final status line (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for secondary text (dim).
    pub dim: Style,
}

impl Theme {
    /// Create the styled theme.
    pub fn new() -> Self {
        Self {
            banner: Style::new().bold(),
            detail: Style::new(),
            success: Style::new().green(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            banner: Style::new(),
            detail: Style::new(),
            success: Style::new(),
            error: Style::new(),
            dim: Style::new(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

/// Check whether styled output should be used.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::colors_enabled()
}

/// Console writer that respects the output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    theme: Theme,
}

impl Output {
    /// Create an output writer for the given mode.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self { mode, theme }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Print a section banner.
    pub fn banner(&self, msg: &str) {
        if self.mode.shows_progress() {
            println!("{}", self.theme.banner.apply_to(msg));
        }
    }

    /// Print an indented detail line.
    pub fn detail(&self, msg: &str) {
        if self.mode.shows_progress() {
            println!(" - {}", self.theme.detail.apply_to(msg));
        }
    }

    /// Print a secondary line shown only in verbose mode.
    pub fn verbose(&self, msg: &str) {
        if self.mode.shows_exports() {
            println!("   {}", self.theme.dim.apply_to(msg));
        }
    }

    /// Print the final status line.
    pub fn success(&self, msg: &str) {
        println!("{}", self.theme.success.apply_to(msg));
    }

    /// Print an error to stderr.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.error.apply_to(msg));
    }
}
