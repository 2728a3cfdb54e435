use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::capitalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Dark,
    Light,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Dark => "dark",
            Mode::Light => "light",
        }
    }

    fn background(self) -> String {
        format!("var(--{}Background)", self.as_str())
    }

    fn contrast(self) -> String {
        format!("var(--{}Contrast)", self.as_str())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Light/dark flag. Starts dark and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    dark: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self { dark: true }
    }
}

impl From<Mode> for Theme {
    fn from(mode: Mode) -> Self {
        Self {
            dark: mode == Mode::Dark,
        }
    }
}

impl Theme {
    /// The active mode.
    pub fn mode(&self) -> Mode {
        if self.dark {
            Mode::Dark
        } else {
            Mode::Light
        }
    }

    /// The mode the toggle control switches to.
    pub fn other(&self) -> Mode {
        if self.dark {
            Mode::Light
        } else {
            Mode::Dark
        }
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    /// Style variables for the document root.
    pub fn root_style(&self) -> [(&'static str, String); 2] {
        let mode = self.mode();
        [
            ("--backgroundColor", mode.background()),
            ("--contrastColor", mode.contrast()),
        ]
    }

    /// Inline style of the toggle control, drawn in the colours it offers.
    pub fn control_style(&self) -> [(&'static str, String); 2] {
        let other = self.other();
        [
            ("background-color", other.background()),
            ("color", other.contrast()),
        ]
    }

    pub fn control_label(&self) -> String {
        format!("{} Mode", capitalize(self.other().as_str()))
    }
}

/// Joins style properties into an inline `style` attribute value.
pub fn inline_style(properties: &[(&'static str, String)]) -> String {
    properties
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}
