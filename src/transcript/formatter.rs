use super::{Transcript, Turn, TurnInput};
use itertools::Itertools;

/// Formats call transcripts into human-readable strings
pub struct TranscriptFormatter;

impl TranscriptFormatter {
    /// One line per turn, e.g. `[start] "1" -> support`.
    pub fn format(transcript: &Transcript) -> String {
        transcript.turns().iter().map(Self::format_turn).join("\n")
    }

    /// A compact route summary, e.g. `start > support > techSupport`.
    pub fn format_path(transcript: &Transcript) -> String {
        transcript.path().iter().join(" > ")
    }

    fn format_turn(turn: &Turn) -> String {
        let input = match &turn.input {
            TurnInput::Submitted(text) => format!("{:?}", text),
            TurnInput::Back => "<back>".to_string(),
        };
        if turn.matched {
            format!("[{}] {} -> {}", turn.from, input, turn.to)
        } else {
            format!("[{}] {} -> invalid input", turn.from, input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(input: TurnInput, from: &str, to: &str, matched: bool) -> Turn {
        Turn {
            input,
            from: from.to_string(),
            to: to.to_string(),
            matched,
        }
    }

    #[test]
    fn test_format_lists_each_turn() {
        let mut transcript = Transcript::new();
        transcript.record(turn(TurnInput::Submitted("1".into()), "start", "support", true));
        transcript.record(turn(TurnInput::Submitted("7".into()), "support", "support", false));
        transcript.record(turn(TurnInput::Back, "support", "start", true));

        assert_eq!(
            TranscriptFormatter::format(&transcript),
            "[start] \"1\" -> support\n[support] \"7\" -> invalid input\n[support] <back> -> start"
        );
        assert_eq!(
            TranscriptFormatter::format_path(&transcript),
            "start > support > start"
        );
    }

    #[test]
    fn test_empty_transcript_formats_to_empty_string() {
        let transcript = Transcript::new();
        assert_eq!(TranscriptFormatter::format(&transcript), "");
        assert_eq!(TranscriptFormatter::format_path(&transcript), "");
    }
}
