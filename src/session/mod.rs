use crate::config::EngineConfig;
use crate::data::{CallScript, ScriptedInput};
use crate::engine::{DialogFlowEngine, TransitionResult};
use crate::matcher::normalize_input;
use crate::menu::MenuTree;
use crate::symbol::DtmfSymbol;
use crate::tone::{ToneGenerator, TonePlayer};
use crate::transcript::Transcript;
use std::sync::Arc;

mod io;

pub use io::{Presenter, VoiceIo};

/// One call: an engine plus the collaborators that present it.
///
/// All asynchrony stays outside. The embedding event loop calls the `on_*`
/// handlers as key presses, transcripts and playback completions arrive.
pub struct CallSession<P, V, T> {
    engine: DialogFlowEngine,
    presenter: P,
    voice: V,
    player: T,
    tones: ToneGenerator,
    reprompt: String,
    speaking: bool,
}

impl<P, V, T> CallSession<P, V, T>
where
    P: Presenter,
    V: VoiceIo,
    T: TonePlayer,
{
    pub fn new(
        tree: Arc<MenuTree>,
        config: &EngineConfig,
        presenter: P,
        voice: V,
        player: T,
    ) -> Self {
        Self {
            engine: DialogFlowEngine::new(tree, config.matching_mode),
            presenter,
            voice,
            player,
            tones: ToneGenerator::new(config.tone_duration_ms),
            reprompt: config.reprompt.clone(),
            speaking: false,
        }
    }

    /// Starts (or restarts) the call and announces the root prompt.
    pub fn begin(&mut self) {
        let root = self.engine.start().clone();
        self.presenter.on_transition(&root, None);
        self.say(&root.prompt);
    }

    /// A keypad press. Key presses barge in on any prompt still playing.
    pub fn on_key(&mut self, symbol: DtmfSymbol) -> TransitionResult {
        let tone = self.tones.tone_for(symbol);
        self.player.play_tone(&tone);
        let result = self.engine.submit(&symbol.to_string());
        self.react(&result);
        result
    }

    /// A transcript from speech recognition.
    ///
    /// Ignored while a prompt is still playing, since the recognizer would
    /// otherwise hear the prompt itself.
    pub fn on_recognized(&mut self, transcript: &str) -> Option<TransitionResult> {
        if self.speaking {
            tracing::debug!(transcript, "recognition ignored during playback");
            return None;
        }
        let input = normalize_input(transcript);
        let result = self.engine.submit(&input);
        self.react(&result);
        Some(result)
    }

    /// Steps back to the previous menu and repeats its prompt.
    pub fn on_back(&mut self) -> bool {
        let Some(node) = self.engine.back().cloned() else {
            return false;
        };
        self.presenter.on_transition(&node, None);
        self.say(&node.prompt);
        true
    }

    /// Playback finished. Re-arms listening unless the call has been routed.
    pub fn on_speech_finished(&mut self) {
        self.speaking = false;
        if !self.engine.is_finished() {
            self.voice.start_listening();
        }
    }

    /// Replays a script, treating every prompt as fully played before the next action.
    pub fn replay(&mut self, script: &CallScript) -> Vec<TransitionResult> {
        let mut results = Vec::with_capacity(script.len());
        for input in &script.inputs {
            if self.engine.is_finished() {
                tracing::debug!("call routed, remaining script ignored");
                break;
            }
            self.on_speech_finished();
            match input {
                ScriptedInput::Key(symbol) => results.push(self.on_key(*symbol)),
                ScriptedInput::Say(text) => results.extend(self.on_recognized(text)),
                ScriptedInput::Back => {
                    self.on_back();
                }
            }
        }
        results
    }

    pub fn is_finished(&self) -> bool {
        self.engine.is_finished()
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking
    }

    pub fn engine(&self) -> &DialogFlowEngine {
        &self.engine
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn voice(&self) -> &V {
        &self.voice
    }

    pub fn player(&self) -> &T {
        &self.player
    }

    /// Ends the call and hands back its transcript.
    pub fn end(self) -> Transcript {
        self.engine.into_transcript()
    }

    fn react(&mut self, result: &TransitionResult) {
        self.presenter.on_transition(&result.node, Some(result));
        if result.matched {
            self.say(&result.node.prompt);
        } else if !result.terminal {
            let text = format!("{} {}", self.reprompt, result.node.prompt);
            self.say(&text);
        }
    }

    fn say(&mut self, text: &str) {
        self.speaking = true;
        self.voice.speak(text);
    }
}
