mod formatter;

pub use formatter::TranscriptFormatter;

/// What the caller did on a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnInput {
    /// A key press or a normalized transcript passed to `submit`.
    Submitted(String),
    /// A step back to the previously visited node.
    Back,
}

/// One recorded step of a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub input: TurnInput,
    pub from: String,
    pub to: String,
    pub matched: bool,
}

/// The ordered turns of a single call, cleared whenever the call restarts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub(crate) fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn rejected_count(&self) -> usize {
        self.turns.iter().filter(|t| !t.matched).count()
    }

    /// The node ids visited, starting at the first turn's origin.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.turns.len() + 1);
        if let Some(first) = self.turns.first() {
            path.push(first.from.as_str());
        }
        for turn in self.turns.iter().filter(|t| t.matched) {
            path.push(turn.to.as_str());
        }
        path
    }
}
