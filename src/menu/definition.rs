use serde::{Deserialize, Serialize};

/// The complete, canonical definition of a menu, ready for compilation.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuDefinition {
    /// Id of the node a call starts at. `None` defers to the compiler default.
    #[serde(default)]
    pub root: Option<String>,
    pub nodes: Vec<MenuNodeDefinition>,
}

/// Defines a single prompt in the menu and the inputs it accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuNodeDefinition {
    pub id: String,
    pub prompt: String,
    /// Declaration order is the matching order.
    #[serde(default)]
    pub options: Vec<OptionDefinition>,
}

/// Defines one accepted input and the node it leads to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionDefinition {
    pub key: String,
    pub target: String,
    /// Additional spoken words that select the same option.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl MenuDefinition {
    /// Parses the JSON menu format.
    pub fn from_json(json: &str) -> Result<Self, crate::error::ConversionError> {
        serde_json::from_str(json)
            .map_err(|e| crate::error::ConversionError::JsonParseError(e.to_string()))
    }
}
