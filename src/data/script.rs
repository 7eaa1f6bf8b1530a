use crate::symbol::DtmfSymbol;
use serde::{Deserialize, Serialize};
use std::fs;

/// A single caller action in a scripted call.
///
/// JSON forms: `{"key": "1"}`, `{"say": "billing please"}` and `"back"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScriptedInput {
    Key(DtmfSymbol),
    Say(String),
    Back,
}

/// A recorded or generated sequence of caller actions, replayed against a menu.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CallScript {
    pub inputs: Vec<ScriptedInput>,
}

impl CallScript {
    /// Load a call script from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let script = serde_json::from_str(&content)?;
        Ok(script)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl Default for CallScript {
    /// Presses `1` twice, which routes the bundled demo menu to technical support.
    fn default() -> Self {
        Self {
            inputs: vec![
                ScriptedInput::Key(DtmfSymbol::One),
                ScriptedInput::Key(DtmfSymbol::One),
            ],
        }
    }
}
