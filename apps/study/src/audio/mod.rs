//! Spoken playback of word pairs.

pub mod engine;
pub mod queue;

pub use engine::{SpeechEngine, SpeechError, TerminalSpeech, Utterance};
pub use queue::{AudioQueue, PlaybackOutcome, PlaybackState};
