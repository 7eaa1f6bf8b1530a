use super::definition::MenuDefinition;
use crate::error::ConversionError;

/// A trait for custom data models that can be converted into a `MenuDefinition`.
///
/// This is the extension point for loading menus from formats other than the
/// built-in JSON. Implement it on your own configuration structs to provide a
/// translation layer into the canonical model.
///
/// # Example
///
/// ```rust,no_run
/// use dialflow::prelude::*;
///
/// struct Screen { name: String, text: String, buttons: Vec<(String, String)> }
/// struct Mockup { screens: Vec<Screen> }
///
/// impl IntoMenu for Mockup {
///     fn into_menu(self) -> std::result::Result<MenuDefinition, ConversionError> {
///         let nodes = self
///             .screens
///             .into_iter()
///             .map(|s| MenuNodeDefinition {
///                 id: s.name,
///                 prompt: s.text,
///                 options: s
///                     .buttons
///                     .into_iter()
///                     .map(|(key, target)| OptionDefinition { key, target, keywords: vec![] })
///                     .collect(),
///             })
///             .collect();
///         Ok(MenuDefinition { root: None, nodes })
///     }
/// }
/// ```
pub trait IntoMenu {
    /// Consumes the object and converts it into a menu definition.
    fn into_menu(self) -> Result<MenuDefinition, ConversionError>;
}

impl IntoMenu for MenuDefinition {
    fn into_menu(self) -> Result<MenuDefinition, ConversionError> {
        Ok(self)
    }
}
