use crate::engine::TransitionResult;
use crate::menu::MenuNode;

/// Renders the dialog. Called after every start, submit and step back.
pub trait Presenter {
    /// `outcome` is `None` when the node was reached by starting the call or stepping back.
    fn on_transition(&mut self, node: &MenuNode, outcome: Option<&TransitionResult>);
}

/// Speech in and out. Recognized transcripts travel back through
/// `CallSession::on_recognized`, and the end of playback through
/// `CallSession::on_speech_finished`.
pub trait VoiceIo {
    /// Fire-and-forget. Cancels any utterance still playing.
    fn speak(&mut self, text: &str);
    fn start_listening(&mut self);
}
