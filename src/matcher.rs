use crate::menu::{MenuNode, MenuOption};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decides which option of a node, if any, an input selects.
///
/// Primary keys are always tried before keyword aliases, each in declaration order.
pub trait InputMatcher: Send + Sync {
    fn find<'n>(&self, node: &'n MenuNode, input: &str) -> Option<&'n MenuOption>;
}

/// The input must equal an option key (or alias) verbatim.
pub struct ExactMatcher;

impl InputMatcher for ExactMatcher {
    fn find<'n>(&self, node: &'n MenuNode, input: &str) -> Option<&'n MenuOption> {
        node.options
            .iter()
            .find(|o| o.key == input)
            .or_else(|| {
                node.options
                    .iter()
                    .find(|o| o.keywords.iter().any(|k| k == input))
            })
    }
}

/// The first option key occurring anywhere in the input wins.
pub struct SubstringMatcher;

impl InputMatcher for SubstringMatcher {
    fn find<'n>(&self, node: &'n MenuNode, input: &str) -> Option<&'n MenuOption> {
        node.options
            .iter()
            .find(|o| input.contains(o.key.as_str()))
            .or_else(|| {
                node.options
                    .iter()
                    .find(|o| o.keywords.iter().any(|k| input.contains(k.as_str())))
            })
    }
}

/// The available matching policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchingMode {
    /// Keypad-style lookup. The default.
    #[default]
    Exact,
    /// Transcript-style containment check.
    Substring,
}

impl MatchingMode {
    pub fn matcher(self) -> Box<dyn InputMatcher> {
        match self {
            MatchingMode::Exact => Box::new(ExactMatcher),
            MatchingMode::Substring => Box::new(SubstringMatcher),
        }
    }
}

impl FromStr for MatchingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(MatchingMode::Exact),
            "substring" => Ok(MatchingMode::Substring),
            other => Err(format!("unknown matching mode '{}'", other)),
        }
    }
}

impl fmt::Display for MatchingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchingMode::Exact => write!(f, "exact"),
            MatchingMode::Substring => write!(f, "substring"),
        }
    }
}

/// Trims and lower-cases a recognized transcript before it is submitted.
pub fn normalize_input(raw: &str) -> String {
    raw.trim().to_lowercase()
}
