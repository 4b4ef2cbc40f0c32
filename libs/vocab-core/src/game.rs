//! Matching-tiles minigame.
//!
//! Pure state machine: delays between a selection and its follow-up
//! (removing a solved pair, releasing a mismatch, starting the next round)
//! are driven by the caller through [`MatchingGame::remove_pair`],
//! [`MatchingGame::release`] and [`MatchingGame::start_round`].

use crate::types::WordPair;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Points for a correct match.
pub const MATCH_REWARD: i64 = 10;
/// Points lost on a mismatch.
pub const MISMATCH_PENALTY: i64 = 5;
/// Pairs per round unless configured otherwise.
pub const DEFAULT_LEVEL: usize = 3;

/// How a round picks its pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundMode {
    /// Consecutive slices of the pairs, wrapping to the start.
    Sequential,
    /// A random sample without replacement.
    Random,
}

impl Default for RoundMode {
    fn default() -> Self {
        Self::Sequential
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileState {
    Hidden,
    Revealed,
    Solved,
    /// Part of a mismatch, waiting for release.
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameTile {
    pub id: usize,
    pub text: String,
    /// Shared by the source and target tile of one pair.
    pub match_id: String,
    pub state: TileState,
}

/// Result of clicking a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Board locked, tile solved or unknown, or the held tile clicked again.
    Ignored,
    /// First tile of an attempt.
    Held(usize),
    /// Both tiles solved; remove them after the feedback delay.
    Matched(usize, usize),
    /// Board locked; release both tiles after the lockout delay.
    Mismatched(usize, usize),
}

#[derive(Debug, Clone)]
pub struct MatchingGame {
    level: usize,
    mode: RoundMode,
    cursor: usize,
    score: i64,
    elapsed_seconds: u64,
    tiles: Vec<GameTile>,
    first_selection: Option<usize>,
    locked: bool,
    next_tile_id: usize,
}

impl Default for MatchingGame {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL, RoundMode::default())
    }
}

impl MatchingGame {
    pub fn new(level: usize, mode: RoundMode) -> Self {
        Self {
            level: level.max(1),
            mode,
            cursor: 0,
            score: 0,
            elapsed_seconds: 0,
            tiles: Vec::new(),
            first_selection: None,
            locked: false,
            next_tile_id: 0,
        }
    }

    /// Clear score, timer and board; the sequential cursor is kept.
    pub fn reset(&mut self, level: usize) {
        self.level = level.max(1);
        self.score = 0;
        self.elapsed_seconds = 0;
        self.tiles.clear();
        self.first_selection = None;
        self.locked = false;
    }

    /// Switch round mode; the sequential cursor restarts.
    pub fn set_mode(&mut self, mode: RoundMode) {
        self.mode = mode;
        self.cursor = 0;
    }

    /// Deal a new board of `level` pairs. Returns the number of tiles dealt.
    pub fn start_round<R: Rng + ?Sized>(&mut self, pairs: &[WordPair], rng: &mut R) -> usize {
        let chosen: Vec<WordPair> = match self.mode {
            RoundMode::Sequential => {
                if self.cursor >= pairs.len() {
                    self.cursor = 0;
                }
                let start = self.cursor.min(pairs.len());
                let end = (start + self.level).min(pairs.len());
                self.cursor += self.level;
                if self.cursor >= pairs.len() {
                    self.cursor = 0;
                }
                pairs[start..end].to_vec()
            }
            RoundMode::Random => {
                let mut sample = pairs.to_vec();
                sample.shuffle(rng);
                sample.truncate(self.level);
                sample
            }
        };

        let mut tiles = Vec::with_capacity(chosen.len() * 2);
        for (index, pair) in chosen.iter().enumerate() {
            let match_id = format!("pair-{index}");
            for text in [&pair.target, &pair.source] {
                tiles.push(GameTile {
                    id: self.next_tile_id,
                    text: text.clone(),
                    match_id: match_id.clone(),
                    state: TileState::Hidden,
                });
                self.next_tile_id += 1;
            }
        }
        tiles.shuffle(rng);

        self.tiles = tiles;
        self.first_selection = None;
        self.locked = false;
        self.tiles.len()
    }

    /// Click a tile.
    pub fn select(&mut self, tile_id: usize) -> Selection {
        if self.locked || self.first_selection == Some(tile_id) {
            return Selection::Ignored;
        }
        match self.tile(tile_id) {
            Some(tile) if tile.state != TileState::Solved => {}
            _ => return Selection::Ignored,
        }

        let Some(first_id) = self.first_selection.take() else {
            self.set_state(tile_id, TileState::Revealed);
            self.first_selection = Some(tile_id);
            return Selection::Held(tile_id);
        };

        let same_pair = self.tile(first_id).map(|t| &t.match_id)
            == self.tile(tile_id).map(|t| &t.match_id);

        if same_pair {
            self.score += MATCH_REWARD;
            self.set_state(first_id, TileState::Solved);
            self.set_state(tile_id, TileState::Solved);
            Selection::Matched(first_id, tile_id)
        } else {
            self.score -= MISMATCH_PENALTY;
            self.locked = true;
            self.set_state(first_id, TileState::Wrong);
            self.set_state(tile_id, TileState::Wrong);
            Selection::Mismatched(first_id, tile_id)
        }
    }

    /// Take a solved pair off the board. Returns true when the board is empty.
    pub fn remove_pair(&mut self, first: usize, second: usize) -> bool {
        self.tiles
            .retain(|t| !((t.id == first || t.id == second) && t.state == TileState::Solved));
        self.tiles.is_empty()
    }

    /// Hide a mismatched pair again and unlock the board.
    pub fn release(&mut self, first: usize, second: usize) {
        for id in [first, second] {
            if self.tile(id).is_some_and(|t| t.state == TileState::Wrong) {
                self.set_state(id, TileState::Hidden);
            }
        }
        self.locked = false;
    }

    /// Apply every pending follow-up at once: solved tiles leave the board,
    /// wrong tiles are hidden and the board unlocks.
    pub fn settle(&mut self) {
        self.tiles.retain(|t| t.state != TileState::Solved);
        for tile in &mut self.tiles {
            if tile.state == TileState::Wrong {
                tile.state = TileState::Hidden;
            }
        }
        self.locked = false;
    }

    /// One second of play.
    pub fn tick(&mut self) {
        self.elapsed_seconds += 1;
    }

    fn tile(&self, id: usize) -> Option<&GameTile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    fn set_state(&mut self, id: usize, state: TileState) {
        if let Some(tile) = self.tiles.iter_mut().find(|t| t.id == id) {
            tile.state = state;
        }
    }

    pub fn tiles(&self) -> &[GameTile] {
        &self.tiles
    }

    pub fn board_is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn first_selection(&self) -> Option<usize> {
        self.first_selection
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn mode(&self) -> RoundMode {
        self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
