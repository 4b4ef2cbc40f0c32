//! Timer-driven matching game session.
//!
//! Wraps the core state machine with the one-second clock and the delayed
//! follow-ups (pair removal, mismatch release, next round). Each start bumps
//! an epoch so callbacks scheduled by an earlier game are dropped.

use crate::config::GameTiming;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use vocab_core::game::{GameTile, MatchingGame, RoundMode, Selection};
use vocab_core::types::WordPair;

/// What a front-end needs to draw the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub score: i64,
    pub elapsed_seconds: u64,
    pub level: usize,
    pub mode: RoundMode,
    pub locked: bool,
    pub tiles: Vec<GameTile>,
}

struct GameInner {
    game: MatchingGame,
    pairs: Vec<WordPair>,
    timer: Option<JoinHandle<()>>,
    epoch: u64,
    rng: StdRng,
}

/// Shared handle to the running game.
#[derive(Clone)]
pub struct GameSession {
    inner: Arc<Mutex<GameInner>>,
    timing: GameTiming,
}

impl GameSession {
    pub fn new(timing: GameTiming) -> Self {
        Self::with_rng(timing, StdRng::from_os_rng())
    }

    /// Session with a fixed shuffle seed (for testing).
    pub fn with_seed(timing: GameTiming, seed: u64) -> Self {
        Self::with_rng(timing, StdRng::seed_from_u64(seed))
    }

    fn with_rng(timing: GameTiming, rng: StdRng) -> Self {
        Self {
            inner: Arc::new(Mutex::new(GameInner {
                game: MatchingGame::default(),
                pairs: Vec::new(),
                timer: None,
                epoch: 0,
                rng,
            })),
            timing,
        }
    }

    /// Reset score, timer and board, then deal the first round.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&self, level: usize, pairs: Vec<WordPair>) -> GameSnapshot {
        let mut inner = self.lock();
        if let Some(timer) = inner.timer.take() {
            timer.abort();
        }
        inner.epoch += 1;
        inner.game.reset(level);
        inner.pairs = pairs;

        let GameInner {
            game, pairs, rng, ..
        } = &mut *inner;
        let dealt = game.start_round(pairs, rng);
        tracing::info!(level, tiles = dealt, mode = ?game.mode(), "game started");

        inner.timer = Some(self.spawn_timer(inner.epoch));
        snapshot(&inner.game)
    }

    /// Switch between sequential and random rounds.
    pub fn set_mode(&self, mode: RoundMode) {
        self.lock().game.set_mode(mode);
    }

    /// Click a tile and schedule whatever follows.
    pub fn select(&self, tile_id: usize) -> Selection {
        let mut inner = self.lock();
        let selection = inner.game.select(tile_id);
        let epoch = inner.epoch;
        drop(inner);

        match selection {
            Selection::Matched(first, second) => self.schedule_removal(epoch, first, second),
            Selection::Mismatched(first, second) => self.schedule_release(epoch, first, second),
            Selection::Held(_) | Selection::Ignored => {}
        }
        selection
    }

    /// Stop the clock. Pending removals and releases are applied now, so the
    /// board is left unlocked.
    pub fn stop(&self) {
        let mut inner = self.lock();
        inner.epoch += 1;
        if let Some(timer) = inner.timer.take() {
            timer.abort();
        }
        inner.game.settle();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        snapshot(&self.lock().game)
    }

    pub fn is_running(&self) -> bool {
        self.lock().timer.is_some()
    }

    fn spawn_timer(&self, epoch: u64) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        let period = self.timing.tick;
        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                let mut inner = inner.lock().expect("game lock");
                if inner.epoch != epoch {
                    break;
                }
                inner.game.tick();
            }
        })
    }

    fn schedule_removal(&self, epoch: u64, first: usize, second: usize) {
        let session = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(session.timing.match_feedback).await;
            let emptied = {
                let mut inner = session.lock();
                inner.epoch == epoch && inner.game.remove_pair(first, second)
            };
            if emptied {
                session.schedule_next_round(epoch);
            }
        });
    }

    fn schedule_release(&self, epoch: u64, first: usize, second: usize) {
        let session = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(session.timing.mismatch_lockout).await;
            let mut inner = session.lock();
            if inner.epoch == epoch {
                inner.game.release(first, second);
            }
        });
    }

    fn schedule_next_round(&self, epoch: u64) {
        let session = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(session.timing.next_round).await;
            let mut inner = session.lock();
            if inner.epoch != epoch || !inner.game.board_is_empty() {
                return;
            }
            let GameInner {
                game, pairs, rng, ..
            } = &mut *inner;
            let dealt = game.start_round(pairs, rng);
            tracing::debug!(tiles = dealt, "next round dealt");
        });
    }

    fn lock(&self) -> MutexGuard<'_, GameInner> {
        self.inner.lock().expect("game lock")
    }
}

fn snapshot(game: &MatchingGame) -> GameSnapshot {
    GameSnapshot {
        score: game.score(),
        elapsed_seconds: game.elapsed_seconds(),
        level: game.level(),
        mode: game.mode(),
        locked: game.is_locked(),
        tiles: game.tiles().to_vec(),
    }
}
