use crate::core::models::Site;
use crate::ui::ansi::{
    CLEAR_LINE_REST, FG_GREEN, FG_LIGHT_GRAY, FG_RED, PROMPT_STYLE, STYLE_BOLD, STYLE_ITALIC,
    STYLE_RESET,
};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

pub const ENABLED_MARK: &str = "\u{2714}";
pub const DISABLED_MARK: &str = "\u{2718}";

/// Screen-level helpers (banner, site listing, prompts).
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self {
            util: WidthUtil,
        }
    }

    pub fn print_banner(&self) {
        const INNER_WIDTH: usize = 44;
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}S I T E C T L{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}nginx site administration{STYLE_RESET}");
        let left = " ".repeat(self.util.center_pad(INNER_WIDTH + 2));
        println!("{left}╭{}╮", "─".repeat(INNER_WIDTH));
        println!("{left}│{}│", self.center_in_box(&title, INNER_WIDTH));
        println!("{left}│{}│", self.center_in_box(&subtitle, INNER_WIDTH));
        println!("{left}╰{}╯", "─".repeat(INNER_WIDTH));
    }

    pub fn format_legend(&self) -> [String; 2] {
        [
            format!("{FG_GREEN}{ENABLED_MARK}{STYLE_RESET} is enabled"),
            format!("{FG_RED}{DISABLED_MARK}{STYLE_RESET} is disabled"),
        ]
    }

    /// `name ✔` or `name ✘`, names padded to `width`.
    pub fn format_site_line(&self, site: &Site, width: usize) -> String {
        let name = self.util.pad_visible(&site.name, width);
        if site.enabled {
            format!("{name} {FG_GREEN}{ENABLED_MARK}{STYLE_RESET}")
        } else {
            format!("{name} {FG_RED}{DISABLED_MARK}{STYLE_RESET}")
        }
    }

    pub fn print_site_listing(&self, sites: &[Site]) {
        for line in self.format_legend() {
            println!("{line}");
        }
        println!();
        let width = sites
            .iter()
            .map(|s| self.util.visible_width(&s.name))
            .max()
            .unwrap_or(0);
        for site in sites {
            println!("{}", self.format_site_line(site, width));
        }
        if sites.is_empty() {
            println!("{FG_LIGHT_GRAY}(no sites available){STYLE_RESET}");
        }
        println!();
    }

    /// `  3) label`, or `  [x] 3) label` when `checked` is given.
    pub fn format_choice_line(&self, number: usize, label: &str, checked: Option<bool>) -> String {
        match checked {
            Some(true) => format!("  [x] {number}) {label}"),
            Some(false) => format!("  [ ] {number}) {label}"),
            None => format!("  {number}) {label}"),
        }
    }

    pub fn format_question(&self, message: &str, hint: Option<&str>) -> String {
        match hint {
            Some(hint) => format!("{STYLE_BOLD}?{STYLE_RESET} {message} {FG_LIGHT_GRAY}({hint}){STYLE_RESET}"),
            None => format!("{STYLE_BOLD}?{STYLE_RESET} {message}"),
        }
    }

    pub fn print_notice(&self, message: &str) {
        println!("{FG_RED}>> {message}{STYLE_RESET}");
    }

    pub fn print_prompt(&self, prompt: &str) {
        print!("{PROMPT_STYLE}{prompt}{CLEAR_LINE_REST}{STYLE_RESET}");
        let _ = io::stdout().flush();
    }

    fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }

    #[cfg(test)]
    pub(crate) fn center_in_box_for_test(&self, content: &str, width: usize) -> String {
        self.center_in_box(content, width)
    }
}
