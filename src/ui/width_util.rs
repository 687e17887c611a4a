use terminal_size::{Width, terminal_size};

use crate::ui::ascii::ESC_BYTE;
type ByteIter<'a> = std::iter::Peekable<std::str::Bytes<'a>>;

#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    fn strip_ansi(s: &str) -> String {
        let mut out = Vec::with_capacity(s.len());
        let mut bytes = s.bytes().peekable();

        while let Some(byte) = bytes.next() {
            if byte == ESC_BYTE && matches!(bytes.peek(), Some(b'[')) {
                Self::consume_csi(&mut bytes);
                continue;
            }
            out.push(byte);
        }
        // only whole escape sequences were removed, so the rest is still UTF-8
        String::from_utf8_lossy(&out).into_owned()
    }

    fn consume_csi(bytes: &mut ByteIter<'_>) {
        let _ = bytes.next(); // skip '['
        for b in bytes.by_ref() {
            if b.is_ascii_alphabetic() {
                break;
            }
        }
    }

    /// Printable width in chars, ignoring CSI sequences.
    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().count()
    }

    #[cfg(test)]
    pub(crate) fn strip_ansi_for_test(s: &str) -> String {
        Self::strip_ansi(s)
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            return s.to_string();
        }
        format!("{s}{}", " ".repeat(width - w))
    }

    /// Best-effort terminal width (defaults to 80).
    pub fn terminal_width(&self) -> usize {
        match terminal_size() {
            Some((Width(w), _)) => w as usize,
            None => 80,
        }
    }

    /// Left padding to center a box of `content_width` inside the terminal.
    pub fn center_pad(&self, content_width: usize) -> usize {
        self.terminal_width().saturating_sub(content_width) / 2
    }
}
