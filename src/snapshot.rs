//! Read-only snapshots for presentation layers.
//!
//! A host renders from a [`GameSnapshot`] instead of borrowing engine
//! internals: plain copyable data, with the grid flattened to palette
//! indices (0 = empty, 1..=7 = color).

use crate::engine::{Engine, Piece};
use crate::pieces::Shape;
use crate::rng::RandomSource;
use crate::types::{Color, Phase, COLS, ROWS};

/// The active piece as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

/// A complete copyable view of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[u8; COLS as usize]; ROWS as usize],
    pub active: Option<ActiveSnapshot>,
    pub phase: Phase,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    /// Whether gameplay can advance (not paused, not over).
    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; COLS as usize]; ROWS as usize],
            active: None,
            phase: Phase::Ready,
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: crate::types::BASE_DROP_MS,
        }
    }
}

impl<R: RandomSource> Engine<R> {
    /// Fill an existing snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid().write_index_grid(&mut out.grid);
        out.active = self.active().map(ActiveSnapshot::from);
        out.phase = self.phase();
        out.score = self.score();
        out.lines = self.lines();
        out.level = self.level();
        out.drop_interval_ms = self.drop_interval_ms();
    }

    /// A fresh snapshot of the whole game.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}
