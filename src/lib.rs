//! # dialflow - Menu-Driven Dialog Flow Engine
//!
//! **dialflow** walks a static IVR menu one input at a time. A caller presses a
//! key or says a word, and the engine either moves to the next prompt or reports
//! that the input was not valid for the current one. The menu is validated once
//! when it is loaded, so a running call can never point at a missing prompt.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Menu**: Parse the built-in JSON format with `MenuDefinition::from_json`, or
//!     implement `IntoMenu` for your own structs.
//! 2.  **Compile**: `MenuCompiler::builder` checks that every option points at an existing
//!     node and produces an immutable `MenuTree`.
//! 3.  **Walk**: Create one `DialogFlowEngine` per call and feed it normalized inputs with
//!     `submit`. Wrap it in a `CallSession` to drive speech, tones and rendering through the
//!     `Presenter`, `VoiceIo` and `TonePlayer` traits.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dialflow::prelude::*;
//! use std::sync::Arc;
//!
//! fn main() -> Result<()> {
//!     let definition = MenuDefinition::from_json(
//!         r#"{
//!             "root": "start",
//!             "nodes": [
//!                 { "id": "start", "prompt": "Press 1 for support.",
//!                   "options": [{ "key": "1", "target": "support" }] },
//!                 { "id": "support", "prompt": "Connecting you to support." }
//!             ]
//!         }"#,
//!     )?;
//!
//!     let tree = Arc::new(MenuCompiler::builder(definition).build().compile()?);
//!     let mut engine = DialogFlowEngine::new(tree, MatchingMode::Exact);
//!
//!     println!("{}", engine.start().prompt);
//!     let result = engine.submit("1");
//!     if result.matched {
//!         println!("-> {} (terminal: {})", result.node.prompt, result.terminal);
//!     }
//!     Ok(())
//! }
//! ```

pub mod compiler;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod menu;
pub mod prelude;
pub mod session;
pub mod symbol;
pub mod tone;
pub mod transcript;
