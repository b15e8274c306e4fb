//! Presentation attributes for console lines.
//!
//! A [`Style`] can be rendered two ways: as a CSS declaration list for
//! browser-style consoles (`%c` directives), or as ANSI SGR escapes for
//! terminals. Neither form is parsed back.

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct StyleFlags: u8 {
        const BOLD = 1 << 0;
        /// Reduced font size. Terminals render this as faint text.
        const SMALL = 1 << 1;
        const PADDED = 1 << 2;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub flags: StyleFlags,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            color: None,
            background: None,
            flags: StyleFlags::empty(),
        }
    }

    pub fn color(mut self, c: Color) -> Self {
        self.color = Some(c);
        self
    }

    pub fn background(mut self, c: Color) -> Self {
        self.background = Some(c);
        self
    }

    pub fn bold(mut self) -> Self {
        self.flags |= StyleFlags::BOLD;
        self
    }

    pub fn small(mut self) -> Self {
        self.flags |= StyleFlags::SMALL;
        self
    }

    pub fn padded(mut self) -> Self {
        self.flags |= StyleFlags::PADDED;
        self
    }

    pub fn is_plain(&self) -> bool {
        self.color.is_none() && self.background.is_none() && self.flags.is_empty()
    }

    /// e.g. `color: #2196F3; font-weight: bold`
    pub fn to_css(&self) -> String {
        let mut decls: Vec<String> = Vec::new();
        if let Some(bg) = self.background {
            decls.push(format!("background: {}", bg.to_hex()));
        }
        if let Some(fg) = self.color {
            decls.push(format!("color: {}", fg.to_hex()));
        }
        if self.flags.contains(StyleFlags::BOLD) {
            decls.push("font-weight: bold".to_string());
        }
        if self.flags.contains(StyleFlags::SMALL) {
            decls.push("font-size: 0.8rem".to_string());
        }
        if self.flags.contains(StyleFlags::PADDED) {
            decls.push("padding: 2px".to_string());
        }
        decls.join("; ")
    }

    /// Wraps `text` in SGR escapes; plain styles return the text unchanged.
    pub fn paint_ansi(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        let mut params: Vec<String> = Vec::new();
        if self.flags.contains(StyleFlags::BOLD) {
            params.push("1".to_string());
        }
        if self.flags.contains(StyleFlags::SMALL) {
            params.push("2".to_string());
        }
        if let Some(fg) = self.color {
            params.push(fg.ansi_fg());
        }
        if let Some(bg) = self.background {
            params.push(bg.ansi_bg());
        }
        if self.flags.contains(StyleFlags::PADDED) {
            format!("\x1b[{}m {text} \x1b[0m", params.join(";"))
        } else {
            format!("\x1b[{}m{text}\x1b[0m", params.join(";"))
        }
    }
}
