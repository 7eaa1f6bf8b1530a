use crate::error::CompileError;
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Position of a node inside a `MenuTree`.
pub type NodeIndex = u32;

/// A compiled option: the accepted key, its spoken aliases and the interned target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOption {
    pub key: String,
    pub keywords: Vec<String>,
    pub target: NodeIndex,
}

/// A node in the compiled dialog tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: String,
    pub prompt: String,
    pub options: Vec<MenuOption>,
}

impl MenuNode {
    /// A terminal node is a completed routing decision and accepts no input.
    pub fn is_terminal(&self) -> bool {
        self.options.is_empty()
    }

    pub fn option_keys(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.key.as_str())
    }

    /// Keys must be non-blank and unique within the node, keywords non-blank.
    ///
    /// A blank key or keyword would match every input in substring mode.
    fn check_options(&self) -> Result<(), CompileError> {
        let invalid = |key: &str, message: &str| CompileError::InvalidOption {
            node_id: self.id.clone(),
            key: key.to_string(),
            message: message.to_string(),
        };

        if let Some(key) = self.option_keys().duplicates().next() {
            return Err(invalid(key, "key is used by more than one option"));
        }
        for option in &self.options {
            if option.key.trim().is_empty() {
                return Err(invalid(&option.key, "option key must not be blank"));
            }
            if option.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(invalid(&option.key, "keyword must not be blank"));
            }
        }
        Ok(())
    }
}

/// An immutable, validated menu. Every option target is a valid index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
    index: AHashMap<String, NodeIndex>,
    root: NodeIndex,
}

impl MenuTree {
    /// Assembles a tree from already-interned parts and checks its invariants.
    pub(crate) fn from_parts(
        nodes: Vec<MenuNode>,
        index: AHashMap<String, NodeIndex>,
        root: NodeIndex,
    ) -> Result<Self, CompileError> {
        let tree = Self { nodes, index, root };
        tree.verify()?;
        Ok(tree)
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn root_node(&self) -> &MenuNode {
        self.node(self.root)
    }

    /// Returns the node at `index`.
    ///
    /// Indices handed out by the tree (root and option targets) are always in range.
    pub fn node(&self, index: NodeIndex) -> &MenuNode {
        &self.nodes[index as usize]
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&MenuNode> {
        self.index_of(id).map(|i| self.node(i))
    }

    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks that the root and every option target resolve, that the id index
    /// agrees with node positions, and that every option is well formed.
    /// Run on construction and on artifact load.
    pub fn verify(&self) -> Result<(), CompileError> {
        if self.nodes.is_empty() {
            return Err(CompileError::EmptyMenu);
        }
        if self.root as usize >= self.nodes.len() {
            return Err(CompileError::RootNotFound(format!("#{}", self.root)));
        }
        if self.index.len() != self.nodes.len() {
            return Err(CompileError::DuplicateNode(
                "node index does not match node list".to_string(),
            ));
        }
        for (position, node) in self.nodes.iter().enumerate() {
            if self.index.get(&node.id) != Some(&(position as NodeIndex)) {
                return Err(CompileError::NodeNotFound {
                    missing_node_id: node.id.clone(),
                    source_node_id: "index".to_string(),
                });
            }
            node.check_options()?;
            for option in &node.options {
                if option.target as usize >= self.nodes.len() {
                    return Err(CompileError::NodeNotFound {
                        missing_node_id: format!("#{}", option.target),
                        source_node_id: node.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
