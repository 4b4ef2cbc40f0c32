//! Sequential, cancellable playback.
//!
//! Every playback request runs as a session with its own cancellation
//! token. Starting a request or calling [`AudioQueue::stop`] cancels the
//! current session; a session checks its token before and after every
//! utterance and pause, so a newer request always wins and at most one
//! utterance is audible at a time.

use super::engine::{SpeechEngine, Utterance};
use crate::config::{AudioTiming, Voices};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use vocab_core::matching::variants;
use vocab_core::types::WordPair;

/// Word spoken between the source and the target.
pub const LINK_WORD: &str = "means";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    /// Stopped while playing; returns to `Idle` once the session winds down.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Completed,
    Cancelled,
}

#[derive(Debug, Clone)]
struct Session {
    id: u64,
    token: CancellationToken,
}

#[derive(Debug)]
struct Slot {
    current: Option<Session>,
    state: PlaybackState,
    /// Bumped by every stop; a request that sees a newer generation after
    /// its grace period has been superseded.
    generation: u64,
    next_session: u64,
}

struct Inner {
    engine: Arc<dyn SpeechEngine>,
    voices: Voices,
    timing: AudioTiming,
    slot: Mutex<Slot>,
}

/// Shared handle to the playback queue.
#[derive(Clone)]
pub struct AudioQueue {
    inner: Arc<Inner>,
}

impl AudioQueue {
    pub fn new(engine: Arc<dyn SpeechEngine>, voices: Voices, timing: AudioTiming) -> Self {
        Self {
            inner: Arc::new(Inner {
                engine,
                voices,
                timing,
                slot: Mutex::new(Slot {
                    current: None,
                    state: PlaybackState::Idle,
                    generation: 0,
                    next_session: 0,
                }),
            }),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.lock().state
    }

    /// Cancel the current session and silence the engine. Safe when idle.
    pub fn stop(&self) {
        self.stop_inner();
    }

    /// Speak every pair in order, preempting any running playback.
    ///
    /// An empty list is a no-op and leaves running playback alone.
    pub async fn play_list(&self, pairs: Vec<WordPair>) -> PlaybackOutcome {
        if pairs.is_empty() {
            return PlaybackOutcome::Completed;
        }
        self.play(pairs, self.inner.timing.list_grace).await
    }

    /// Speak one pair, preempting any running playback.
    pub async fn play_pair(&self, pair: WordPair) -> PlaybackOutcome {
        self.play(vec![pair], self.inner.timing.single_grace).await
    }

    async fn play(&self, pairs: Vec<WordPair>, grace: Duration) -> PlaybackOutcome {
        let generation = self.stop_inner();
        tokio::time::sleep(grace).await;

        let Some(session) = self.begin(generation) else {
            tracing::debug!("playback request superseded before it started");
            return PlaybackOutcome::Cancelled;
        };
        tracing::debug!(session = session.id, pairs = pairs.len(), "playback started");

        let outcome = self.run(&session, &pairs).await;
        self.finish(&session);

        tracing::debug!(session = session.id, ?outcome, "playback finished");
        outcome
    }

    async fn run(&self, session: &Session, pairs: &[WordPair]) -> PlaybackOutcome {
        for (index, pair) in pairs.iter().enumerate() {
            if index > 0 && !self.pause(session, self.inner.timing.between_pairs).await {
                return PlaybackOutcome::Cancelled;
            }
            if !self.speak_pair(session, pair).await {
                return PlaybackOutcome::Cancelled;
            }
        }
        PlaybackOutcome::Completed
    }

    async fn speak_pair(&self, session: &Session, pair: &WordPair) -> bool {
        let voices = &self.inner.voices;
        let utterances = [
            Utterance::new(spoken(&pair.source, " or "), &voices.source_lang),
            Utterance::new(LINK_WORD, &voices.source_lang),
            Utterance::new(spoken(&pair.target, ", "), &voices.target_lang),
        ];

        for (index, utterance) in utterances.iter().enumerate() {
            if index > 0 && !self.pause(session, self.inner.timing.between_utterances).await {
                return false;
            }
            if !self.utter(session, utterance).await {
                return false;
            }
        }
        true
    }

    /// Speak one utterance; engine failures count as having spoken it.
    async fn utter(&self, session: &Session, utterance: &Utterance) -> bool {
        if !self.is_current(session) {
            return false;
        }
        tokio::select! {
            biased;
            _ = session.token.cancelled() => return false,
            result = self.inner.engine.speak(utterance) => {
                if let Err(e) = result {
                    tracing::warn!(text = %utterance.text, error = %e, "speech failed, skipping");
                }
            }
        }
        self.is_current(session)
    }

    async fn pause(&self, session: &Session, duration: Duration) -> bool {
        tokio::select! {
            biased;
            _ = session.token.cancelled() => false,
            _ = tokio::time::sleep(duration) => self.is_current(session),
        }
    }

    fn stop_inner(&self) -> u64 {
        let generation = {
            let mut slot = self.lock();
            if let Some(session) = slot.current.take() {
                session.token.cancel();
                slot.state = PlaybackState::Cancelled;
            }
            slot.generation += 1;
            slot.generation
        };
        self.inner.engine.stop();
        generation
    }

    fn begin(&self, generation: u64) -> Option<Session> {
        let mut slot = self.lock();
        if slot.generation != generation {
            return None;
        }
        slot.next_session += 1;
        let session = Session {
            id: slot.next_session,
            token: CancellationToken::new(),
        };
        slot.current = Some(session.clone());
        slot.state = PlaybackState::Playing;
        Some(session)
    }

    fn finish(&self, session: &Session) {
        let mut slot = self.lock();
        match &slot.current {
            Some(current) if current.id == session.id => {
                slot.current = None;
                slot.state = PlaybackState::Idle;
            }
            None if slot.state == PlaybackState::Cancelled => slot.state = PlaybackState::Idle,
            _ => {}
        }
    }

    fn is_current(&self, session: &Session) -> bool {
        !session.token.is_cancelled()
            && self
                .lock()
                .current
                .as_ref()
                .is_some_and(|current| current.id == session.id)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Slot> {
        self.inner.slot.lock().expect("audio queue lock")
    }
}

/// Join the variants of a field for speaking.
fn spoken(field: &str, joiner: &str) -> String {
    variants(field).collect::<Vec<_>>().join(joiner)
}
