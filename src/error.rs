use thiserror::Error;

/// Errors that can occur while compiling a menu definition into a `MenuTree`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Menu definition contains no nodes")]
    EmptyMenu,

    #[error("Node id '{0}' is defined more than once")]
    DuplicateNode(String),

    #[error("Root node '{0}' not found in the menu definition")]
    RootNotFound(String),

    #[error(
        "Node '{missing_node_id}' not found, which is required by an option on node '{source_node_id}'"
    )]
    NodeNotFound {
        missing_node_id: String,
        source_node_id: String,
    },

    #[error("Node '{node_id}' has an invalid option '{key}': {message}")]
    InvalidOption {
        node_id: String,
        key: String,
        message: String,
    },
}

/// Errors that can occur when converting a custom user format into a `MenuDefinition`.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),

    #[error("Failed to parse menu JSON: {0}")]
    JsonParseError(String),
}

/// Errors raised while saving or loading a compiled menu artifact.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Artifact I/O error: {0}")]
    Io(String),

    #[error("Artifact encoding error: {0}")]
    Encoding(String),

    #[error("Artifact contains an invalid menu: {0}")]
    InvalidMenu(#[from] CompileError),
}

/// A character or string that is not a DTMF keypad symbol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("'{0}' is not a DTMF keypad symbol")]
    InvalidSymbol(String),
}

/// Errors raised while loading an engine configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config JSON: {0}")]
    Parse(String),
}
