//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the dialflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use dialflow::prelude::*;
//! use std::sync::Arc;
//!
//! # fn run_example() -> Result<()> {
//! let menu_json = std::fs::read_to_string("path/to/menu.json")?;
//! let definition = MenuDefinition::from_json(&menu_json)?;
//! let tree = Arc::new(MenuCompiler::builder(definition).build().compile()?);
//!
//! let mut engine = DialogFlowEngine::new(tree, MatchingMode::Substring);
//! engine.start();
//! let result = engine.submit("i need help with billing");
//! println!("Transition: {:?}", result);
//! # Ok(())
//! # }
//! ```

// Compilation and walking
pub use crate::compiler::MenuCompiler;
pub use crate::engine::{DialogFlowEngine, RejectReason, TransitionResult};
pub use crate::matcher::{InputMatcher, MatchingMode, normalize_input};

// Menu model
pub use crate::menu::{
    CompiledMenu, IntoMenu, MenuDefinition, MenuNode, MenuNodeDefinition, MenuOption, MenuTree,
    OptionDefinition,
};

// Session surface
pub use crate::config::EngineConfig;
pub use crate::data::{CallScript, ScriptedInput};
pub use crate::session::{CallSession, Presenter, VoiceIo};
pub use crate::symbol::DtmfSymbol;
pub use crate::tone::{DtmfTone, ToneGenerator, TonePlayer};
pub use crate::transcript::{Transcript, TranscriptFormatter, Turn, TurnInput};

// Error types
pub use crate::error::{ArtifactError, CompileError, ConfigError, ConversionError, SymbolError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
