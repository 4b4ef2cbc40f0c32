//! Speech engine abstraction.

use async_trait::async_trait;
use std::io::Write;
use std::time::Duration;

/// One phrase in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
}

impl Utterance {
    pub fn new(text: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: lang.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech engine unavailable")]
    Unavailable,

    #[error("utterance failed: {0}")]
    Failed(String),
}

/// Something that can say an utterance out loud.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Speak and resolve when the utterance has finished.
    async fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError>;

    /// Silence whatever is being spoken right now.
    fn stop(&self);
}

/// Prints utterances to stdout and waits roughly as long as saying them takes.
pub struct TerminalSpeech {
    per_char: Duration,
    minimum: Duration,
}

impl Default for TerminalSpeech {
    fn default() -> Self {
        Self {
            per_char: Duration::from_millis(60),
            minimum: Duration::from_millis(300),
        }
    }
}

#[async_trait]
impl SpeechEngine for TerminalSpeech {
    async fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        {
            let mut out = std::io::stdout().lock();
            writeln!(out, "  ♪ [{}] {}", utterance.lang, utterance.text)
                .map_err(|e| SpeechError::Failed(e.to_string()))?;
        }
        let chars = utterance.text.chars().count() as u32;
        tokio::time::sleep((self.per_char * chars).max(self.minimum)).await;
        Ok(())
    }

    fn stop(&self) {}
}
