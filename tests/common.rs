//! Common test utilities for building menu definitions and recording collaborators.
use dialflow::prelude::*;
use std::sync::Arc;

/// Builds a node definition with plain key options.
#[allow(dead_code)]
pub fn node(id: &str, prompt: &str, options: &[(&str, &str)]) -> MenuNodeDefinition {
    MenuNodeDefinition {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options: options
            .iter()
            .map(|(key, target)| OptionDefinition {
                key: key.to_string(),
                target: target.to_string(),
                keywords: vec![],
            })
            .collect(),
    }
}

/// The support-desk menu used throughout the tests.
///
/// start -> {1: support, 2: sales, 3: billing}
/// support -> {1: techSupport, 2: accountIssues}
#[allow(dead_code)]
pub fn create_support_menu() -> MenuDefinition {
    MenuDefinition {
        root: Some("start".to_string()),
        nodes: vec![
            node(
                "start",
                "Press 1 for support, 2 for sales, 3 for billing.",
                &[("1", "support"), ("2", "sales"), ("3", "billing")],
            ),
            node(
                "support",
                "Press 1 for technical support, 2 for account issues.",
                &[("1", "techSupport"), ("2", "accountIssues")],
            ),
            node("techSupport", "Connecting you to technical support.", &[]),
            node("accountIssues", "Connecting you to an account specialist.", &[]),
            node("sales", "Connecting you to sales.", &[]),
            node("billing", "Connecting you to billing.", &[]),
        ],
    }
}

/// The support menu with spoken keywords on the root options.
#[allow(dead_code)]
pub fn create_keyword_menu() -> MenuDefinition {
    let mut menu = create_support_menu();
    let words: [&[&str]; 3] = [&["support", "help"], &["sales", "buy"], &["billing"]];
    for (option, words) in menu.nodes[0].options.iter_mut().zip(words) {
        option.keywords = words.iter().map(|w| w.to_string()).collect();
    }
    menu
}

#[allow(dead_code)]
pub fn compile(definition: MenuDefinition) -> Arc<MenuTree> {
    Arc::new(
        MenuCompiler::builder(definition)
            .build()
            .compile()
            .expect("Failed to compile menu"),
    )
}

/// Records every transition it is shown.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingPresenter {
    pub shown: Vec<(String, Option<bool>)>,
}

impl Presenter for RecordingPresenter {
    fn on_transition(&mut self, node: &MenuNode, outcome: Option<&TransitionResult>) {
        self.shown.push((node.id.clone(), outcome.map(|r| r.matched)));
    }
}

/// Records spoken text and how often listening was armed.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingVoice {
    pub spoken: Vec<String>,
    pub listen_calls: usize,
}

impl VoiceIo for RecordingVoice {
    fn speak(&mut self, text: &str) {
        self.spoken.push(text.to_string());
    }

    fn start_listening(&mut self) {
        self.listen_calls += 1;
    }
}

/// Records played tones.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingTones {
    pub played: Vec<DtmfTone>,
}

impl TonePlayer for RecordingTones {
    fn play_tone(&mut self, tone: &DtmfTone) {
        self.played.push(*tone);
    }
}

#[allow(dead_code)]
pub type TestSession = CallSession<RecordingPresenter, RecordingVoice, RecordingTones>;

#[allow(dead_code)]
pub fn create_session(definition: MenuDefinition, config: &EngineConfig) -> TestSession {
    CallSession::new(
        compile(definition),
        config,
        RecordingPresenter::default(),
        RecordingVoice::default(),
        RecordingTones::default(),
    )
}
