use crate::error::CompileError;
use crate::matcher::normalize_input;
use crate::menu::{MenuDefinition, MenuTree};
use ahash::AHashMap;

mod builder;

use builder::TreeBuilder;

/// Root id used when neither the builder nor the definition names one.
pub const DEFAULT_ROOT_ID: &str = "start";

/// Validates a `MenuDefinition` and turns it into an immutable `MenuTree`.
pub struct MenuCompiler {
    definition: MenuDefinition,
    root: String,
    global_keywords: AHashMap<String, Vec<String>>,
}

pub struct MenuCompilerBuilder {
    definition: MenuDefinition,
    root: Option<String>,
    global_keywords: AHashMap<String, Vec<String>>,
}

impl MenuCompilerBuilder {
    pub fn new(definition: MenuDefinition) -> Self {
        Self {
            definition,
            root: None,
            global_keywords: AHashMap::new(),
        }
    }

    /// Overrides the root named in the definition.
    pub fn with_root(mut self, root_id: &str) -> Self {
        self.root = Some(root_id.to_string());
        self
    }

    /// Makes `keyword` select whichever option uses `key`, on every node.
    ///
    /// Useful for conventions such as `"0"` meaning "operator" across a whole menu.
    pub fn with_keyword(mut self, key: &str, keyword: &str) -> Self {
        self.global_keywords
            .entry(key.to_string())
            .or_default()
            .push(normalize_input(keyword));
        self
    }

    pub fn build(self) -> MenuCompiler {
        let root = self
            .root
            .or_else(|| self.definition.root.clone())
            .unwrap_or_else(|| DEFAULT_ROOT_ID.to_string());
        MenuCompiler {
            definition: self.definition,
            root,
            global_keywords: self.global_keywords,
        }
    }
}

impl MenuCompiler {
    pub fn builder(definition: MenuDefinition) -> MenuCompilerBuilder {
        MenuCompilerBuilder::new(definition)
    }

    pub fn root_id(&self) -> &str {
        &self.root
    }

    pub fn compile(self) -> Result<MenuTree, CompileError> {
        if self.definition.nodes.is_empty() {
            return Err(CompileError::EmptyMenu);
        }

        let mut tree_builder = TreeBuilder::new(&self.definition, &self.global_keywords);
        tree_builder.intern_ids()?;
        let root = tree_builder.resolve_root(&self.root)?;
        let nodes = tree_builder.build_nodes()?;
        let index = tree_builder.into_index();

        let tree = MenuTree::from_parts(nodes, index, root)?;
        builder::warn_unreachable(&tree);

        tracing::debug!(
            nodes = tree.len(),
            root = %tree.root_node().id,
            "menu compiled"
        );
        Ok(tree)
    }
}
