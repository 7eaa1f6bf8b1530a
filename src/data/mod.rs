mod script;

pub use script::{CallScript, ScriptedInput};
