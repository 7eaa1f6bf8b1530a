use crate::matcher::{InputMatcher, MatchingMode};
use crate::menu::{MenuNode, MenuTree, NodeIndex};
use crate::transcript::{Transcript, Turn, TurnInput};
use std::fmt;
use std::sync::Arc;

/// Why a submitted input did not cause a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No option of the current node accepts the input.
    InvalidInput,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::InvalidInput => write!(f, "invalid_input"),
        }
    }
}

/// The outcome of a single `submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// Whether an option accepted the input.
    pub matched: bool,
    /// The current node after the call. Unchanged when `matched` is false.
    pub node: MenuNode,
    /// `true` when `node` is terminal, so no further input is expected.
    pub terminal: bool,
    /// Set only when `matched` is false.
    pub reason: Option<RejectReason>,
}

impl TransitionResult {
    fn matched(node: &MenuNode) -> Self {
        Self {
            matched: true,
            terminal: node.is_terminal(),
            node: node.clone(),
            reason: None,
        }
    }

    fn rejected(node: &MenuNode) -> Self {
        Self {
            matched: false,
            terminal: node.is_terminal(),
            node: node.clone(),
            reason: Some(RejectReason::InvalidInput),
        }
    }
}

/// Walks a compiled `MenuTree` one input at a time.
///
/// One engine belongs to one call. The tree is shared, so many engines can walk
/// the same menu at once; each engine itself expects its inputs one after another.
pub struct DialogFlowEngine {
    tree: Arc<MenuTree>,
    matcher: Box<dyn InputMatcher>,
    current: NodeIndex,
    history: Vec<NodeIndex>,
    transcript: Transcript,
}

impl DialogFlowEngine {
    /// Creates an engine positioned at the tree's root.
    pub fn new(tree: Arc<MenuTree>, mode: MatchingMode) -> Self {
        Self::with_matcher(tree, mode.matcher())
    }

    /// Creates an engine that uses a custom matching policy.
    pub fn with_matcher(tree: Arc<MenuTree>, matcher: Box<dyn InputMatcher>) -> Self {
        let current = tree.root();
        Self {
            tree,
            matcher,
            current,
            history: Vec::new(),
            transcript: Transcript::new(),
        }
    }

    /// Begins a call: resets to the root, clearing history and transcript.
    pub fn start(&mut self) -> &MenuNode {
        self.current = self.tree.root();
        self.history.clear();
        self.transcript.clear();
        tracing::debug!(node = %self.current_node().id, "call started");
        self.current_node()
    }

    pub fn current_node(&self) -> &MenuNode {
        self.tree.node(self.current)
    }

    pub fn tree(&self) -> &Arc<MenuTree> {
        &self.tree
    }

    pub fn is_finished(&self) -> bool {
        self.current_node().is_terminal()
    }

    /// Feeds one already-normalized input to the current node.
    ///
    /// A rejected input leaves the engine untouched apart from the transcript,
    /// and may be followed by any number of retries. Terminal nodes reject everything.
    pub fn submit(&mut self, input: &str) -> TransitionResult {
        let from = self.current;
        let node = self.tree.node(from);

        let Some(option) = self.matcher.find(node, input) else {
            tracing::debug!(node = %node.id, input, "input rejected");
            self.transcript.record(Turn {
                input: TurnInput::Submitted(input.to_string()),
                from: node.id.clone(),
                to: node.id.clone(),
                matched: false,
            });
            return TransitionResult::rejected(node);
        };

        let target = option.target;
        let next = self.tree.node(target);
        tracing::debug!(from = %node.id, to = %next.id, input, "transition");

        self.transcript.record(Turn {
            input: TurnInput::Submitted(input.to_string()),
            from: node.id.clone(),
            to: next.id.clone(),
            matched: true,
        });
        let result = TransitionResult::matched(next);
        self.history.push(from);
        self.current = target;
        result
    }

    /// Returns to the previously visited node, or `None` if nothing was visited yet.
    pub fn back(&mut self) -> Option<&MenuNode> {
        let previous = self.history.pop()?;
        let from = self.current_node().id.clone();
        self.current = previous;
        let to = self.current_node().id.clone();
        tracing::debug!(from = %from, to = %to, "stepped back");
        self.transcript.record(Turn {
            input: TurnInput::Back,
            from,
            to,
            matched: true,
        });
        Some(self.current_node())
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Consumes the engine at the end of a call, keeping only its transcript.
    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }
}
