//! Parser for the Aurora `colors.yml` color definitions
//!
//! The file is read line by line with a small state machine rather than a
//! general YAML parser: only family headers, `- name:` entries and `hex:`
//! fields carry meaning, everything else is skipped.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

lazy_static! {
    static ref FAMILY_LINE: Regex = Regex::new(r"^  (\w+):").expect("Invalid regex pattern");
    static ref NAME_LINE: Regex = Regex::new(r#"- name:\s*"([^"]+)""#).expect("Invalid regex pattern");
    static ref HEX_LINE: Regex = Regex::new(r#"hex:\s*"?(#[A-Fa-f0-9]{6})"?"#).expect("Invalid regex pattern");
    static ref LEVEL: Regex = Regex::new(r"\d+").expect("Invalid regex pattern");
}

/// A single shade, e.g. `Red 3` / `#E5484D`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    pub name: String,
    /// `#RRGGBB` exactly as written in the source
    pub hex: String,
}

impl ColorEntry {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }

    /// Shade level: the first run of digits in the name, `"0"` if there is none
    pub fn level(&self) -> &str {
        LEVEL.find(&self.name).map(|m| m.as_str()).unwrap_or("0")
    }
}

/// A named family of shades in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorFamily {
    pub name: String,
    pub entries: Vec<ColorEntry>,
}

impl ColorFamily {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Family name with the first character uppercased, for comment headers
    pub fn title(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// All families, in the order they first appear in the source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    pub families: Vec<ColorFamily>,
}

impl Palette {
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.families.iter().map(|f| f.entries.len()).sum()
    }

    /// Start a family, clearing it in place if it was already defined
    fn open_family(&mut self, name: &str) -> usize {
        if let Some(idx) = self.families.iter().position(|f| f.name == name) {
            debug!(family = name, "family redefined, discarding earlier shades");
            self.families[idx].entries.clear();
            idx
        } else {
            self.families.push(ColorFamily::new(name));
            self.families.len() - 1
        }
    }
}

#[derive(Debug)]
enum ParseState {
    NoFamily,
    InFamily { family: usize },
    AwaitingHex { family: usize, name: String },
}

/// Parse color definitions into an ordered palette
pub fn parse_color_definitions(text: &str) -> Palette {
    let mut palette = Palette::default();
    let mut state = ParseState::NoFamily;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        if let Some(caps) = FAMILY_LINE.captures(line) {
            if let ParseState::AwaitingHex { name, .. } = &state {
                warn!(line = line_no, shade = %name, "shade has no hex value, skipping");
            }
            let family = palette.open_family(&caps[1]);
            state = ParseState::InFamily { family };
            continue;
        }

        if let Some(caps) = NAME_LINE.captures(line) {
            state = match state {
                ParseState::NoFamily => {
                    debug!(line = line_no, "shade outside of a family, ignoring");
                    ParseState::NoFamily
                }
                ParseState::InFamily { family } => ParseState::AwaitingHex {
                    family,
                    name: caps[1].to_string(),
                },
                ParseState::AwaitingHex { family, name } => {
                    warn!(line = line_no, shade = %name, "shade has no hex value, skipping");
                    ParseState::AwaitingHex {
                        family,
                        name: caps[1].to_string(),
                    }
                }
            };
            continue;
        }

        if let Some(caps) = HEX_LINE.captures(line) {
            let hex = caps[1].to_string();
            state = match state {
                ParseState::AwaitingHex { family, name } => {
                    palette.families[family]
                        .entries
                        .push(ColorEntry::new(name, hex));
                    ParseState::InFamily { family }
                }
                ParseState::InFamily { family } => {
                    // A repeated hex field overrides the latest shade
                    match palette.families[family].entries.last_mut() {
                        Some(entry) => entry.hex = hex,
                        None => debug!(line = line_no, "hex before any shade, ignoring"),
                    }
                    ParseState::InFamily { family }
                }
                ParseState::NoFamily => {
                    debug!(line = line_no, "hex outside of a family, ignoring");
                    ParseState::NoFamily
                }
            };
        }
    }

    if let ParseState::AwaitingHex { name, .. } = state {
        warn!(shade = %name, "shade has no hex value, skipping");
    }

    palette
}
