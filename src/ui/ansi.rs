// Shared ANSI/VT100 control sequences used across the UI.

/// Clear from cursor to end of line.
pub const CLEAR_LINE_REST: &str = crate::csi!("0K");

/// Hide the cursor.
pub const HIDE_CURSOR: &str = crate::csi!("?25l");
/// Show the cursor.
pub const SHOW_CURSOR: &str = crate::csi!("?25h");

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
/// Bold text.
pub const STYLE_BOLD: &str = crate::csi!("1m");
/// Italic text.
pub const STYLE_ITALIC: &str = crate::csi!("3m");
/// Light gray foreground.
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");
/// Green foreground, used for enabled sites.
pub const FG_GREEN: &str = crate::csi!("32m");
/// Red foreground, used for disabled sites and errors.
pub const FG_RED: &str = crate::csi!("31m");
/// Dark gray background with white text for input prompts.
pub const PROMPT_STYLE: &str = crate::csi2!("38;5;15m", "48;5;236m");
