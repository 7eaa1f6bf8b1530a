use crate::error::CompileError;
use crate::matcher::normalize_input;
use crate::menu::{MenuDefinition, MenuNode, MenuNodeDefinition, MenuOption, MenuTree, NodeIndex};
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use std::collections::VecDeque;

/// Interns node ids and resolves every option target against them.
pub(super) struct TreeBuilder<'a> {
    definition: &'a MenuDefinition,
    global_keywords: &'a AHashMap<String, Vec<String>>,
    index: AHashMap<String, NodeIndex>,
}

impl<'a> TreeBuilder<'a> {
    pub(super) fn new(
        definition: &'a MenuDefinition,
        global_keywords: &'a AHashMap<String, Vec<String>>,
    ) -> Self {
        Self {
            definition,
            global_keywords,
            index: AHashMap::with_capacity(definition.nodes.len()),
        }
    }

    /// Assigns each node id its position. Ids must be unique.
    pub(super) fn intern_ids(&mut self) -> Result<(), CompileError> {
        for (position, node) in self.definition.nodes.iter().enumerate() {
            if self
                .index
                .insert(node.id.clone(), position as NodeIndex)
                .is_some()
            {
                return Err(CompileError::DuplicateNode(node.id.clone()));
            }
        }
        Ok(())
    }

    pub(super) fn resolve_root(&self, root_id: &str) -> Result<NodeIndex, CompileError> {
        self.index
            .get(root_id)
            .copied()
            .ok_or_else(|| CompileError::RootNotFound(root_id.to_string()))
    }

    pub(super) fn build_nodes(&self) -> Result<Vec<MenuNode>, CompileError> {
        self.definition
            .nodes
            .iter()
            .map(|node| self.build_node(node))
            .collect()
    }

    pub(super) fn into_index(self) -> AHashMap<String, NodeIndex> {
        self.index
    }

    /// Resolves targets and merges keywords. Key and keyword shape is checked
    /// by `MenuTree::verify` once the tree is assembled.
    fn build_node(&self, node: &MenuNodeDefinition) -> Result<MenuNode, CompileError> {
        let options = node
            .options
            .iter()
            .map(|option| {
                let target = self.index.get(&option.target).copied().ok_or_else(|| {
                    CompileError::NodeNotFound {
                        missing_node_id: option.target.clone(),
                        source_node_id: node.id.clone(),
                    }
                })?;

                let global = self.global_keywords.get(&option.key).into_iter().flatten();
                let keywords = option
                    .keywords
                    .iter()
                    .map(|raw| normalize_input(raw))
                    .chain(global.cloned())
                    .unique()
                    .collect();

                Ok(MenuOption {
                    key: option.key.clone(),
                    keywords,
                    target,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MenuNode {
            id: node.id.clone(),
            prompt: node.prompt.clone(),
            options,
        })
    }
}

/// Ids of nodes that no path from the root can reach, in definition order.
pub(crate) fn unreachable_nodes(tree: &MenuTree) -> Vec<&str> {
    let mut seen: AHashSet<NodeIndex> = AHashSet::new();
    let mut queue = VecDeque::from([tree.root()]);
    seen.insert(tree.root());

    while let Some(current) = queue.pop_front() {
        for option in &tree.node(current).options {
            if seen.insert(option.target) {
                queue.push_back(option.target);
            }
        }
    }

    tree.nodes()
        .iter()
        .enumerate()
        .filter(|(i, _)| !seen.contains(&(*i as NodeIndex)))
        .map(|(_, n)| n.id.as_str())
        .collect()
}

pub(super) fn warn_unreachable(tree: &MenuTree) {
    let orphans = unreachable_nodes(tree);
    if !orphans.is_empty() {
        tracing::warn!(
            count = orphans.len(),
            "nodes unreachable from root '{}': {}",
            tree.root_node().id,
            orphans.iter().join(", ")
        );
    }
}
