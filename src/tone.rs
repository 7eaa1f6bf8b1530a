//! DTMF tone table and synthesis.

use crate::symbol::DtmfSymbol;
use std::f32::consts::TAU;

/// Default length of a key-press tone.
pub const DEFAULT_TONE_DURATION_MS: u32 = 200;

/// The two frequencies and the length of a single key-press tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DtmfTone {
    pub symbol: DtmfSymbol,
    pub freq_low: f32,
    pub freq_high: f32,
    pub duration_ms: u32,
}

/// Row (low-group) frequency for a symbol.
fn row_frequency(symbol: DtmfSymbol) -> f32 {
    use DtmfSymbol::*;
    match symbol {
        One | Two | Three | A => 697.0,
        Four | Five | Six | B => 770.0,
        Seven | Eight | Nine | C => 852.0,
        Star | Zero | Pound | D => 941.0,
    }
}

/// Column (high-group) frequency for a symbol.
fn column_frequency(symbol: DtmfSymbol) -> f32 {
    use DtmfSymbol::*;
    match symbol {
        One | Four | Seven | Star => 1209.0,
        Two | Five | Eight | Zero => 1336.0,
        Three | Six | Nine | Pound => 1477.0,
        A | B | C | D => 1633.0,
    }
}

/// Maps keypad symbols to tones. Holds no state beyond the configured duration.
#[derive(Debug, Clone, Copy)]
pub struct ToneGenerator {
    duration_ms: u32,
}

impl Default for ToneGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TONE_DURATION_MS)
    }
}

impl ToneGenerator {
    pub fn new(duration_ms: u32) -> Self {
        Self { duration_ms }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn tone_for(&self, symbol: DtmfSymbol) -> DtmfTone {
        DtmfTone {
            symbol,
            freq_low: row_frequency(symbol),
            freq_high: column_frequency(symbol),
            duration_ms: self.duration_ms,
        }
    }

    /// Renders a tone to mono PCM at `sample_rate`.
    ///
    /// Each of the two sines contributes half the amplitude, so samples stay
    /// within `[-1.0, 1.0]`.
    pub fn synthesize(&self, tone: &DtmfTone, sample_rate: u32) -> Vec<f32> {
        let sample_count = (sample_rate as u64 * tone.duration_ms as u64 / 1000) as usize;
        let rate = sample_rate as f32;
        (0..sample_count)
            .map(|n| {
                let t = n as f32 / rate;
                0.5 * (TAU * tone.freq_low * t).sin() + 0.5 * (TAU * tone.freq_high * t).sin()
            })
            .collect()
    }
}

/// Receives tones for playback. Implementations own the audio device.
pub trait TonePlayer {
    fn play_tone(&mut self, tone: &DtmfTone);
}
