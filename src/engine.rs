//! Engine module - the complete game state machine.
//!
//! Ties together the grid, pieces, RNG, and scoring: spawning, movement,
//! rotation with wall-kick fallback, soft/hard drops, locking, line clears,
//! and level progression. The engine is passive and single-threaded: the
//! host calls one operation per external event (input command or timer tick)
//! and every operation runs to completion synchronously.

use crate::grid::Grid;
use crate::pieces::{PieceKind, Shape};
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::{drop_interval_ms, hard_drop_score, level_for_lines, line_clear_score};
use crate::types::{Color, Command, Outcome, Phase, BASE_DROP_MS, COLS, ROWS, SPAWN_X};

/// The active falling piece.
///
/// Holds the current rotation's shape, the top-left grid position of its
/// bounding box, and the color it will lock with. Replaced wholesale on each
/// spawn; never part of the grid until locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A new piece at the spawn position, horizontally centered at the top.
    pub fn spawn(kind: PieceKind, color: Color) -> Self {
        Self {
            shape: kind.shape(),
            color,
            x: SPAWN_X,
            y: 0,
        }
    }

    /// The piece shifted by (dx, dy), without collision checking.
    pub fn shifted(&self, dx: i8, dy: i8) -> Piece {
        Piece {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Pure collision predicate against grid bounds and locked cells.
    ///
    /// A filled cell collides when it maps outside `[0, COLS)` horizontally
    /// or at/below the floor (`>= ROWS`). Occupancy is only tested for rows
    /// `>= 0`: a piece may legally extend above the grid while rotating at
    /// the top.
    pub fn collides(&self, grid: &Grid) -> bool {
        for r in 0..self.shape.rows() as usize {
            for c in 0..self.shape.cols() as usize {
                if !self.shape.filled(r, c) {
                    continue;
                }

                let x = self.x + c as i8;
                let y = self.y + r as i8;

                if x < 0 || x >= COLS as i8 || y >= ROWS as i8 {
                    return true;
                }
                if y >= 0 && grid.is_occupied(x, y) {
                    return true;
                }
            }
        }
        false
    }
}

/// The game engine.
///
/// Created by a host, driven by commands and `tick`, queried for rendering.
/// Generic over the random source so tests can inject a scripted sequence;
/// defaults to the seedable [`SimpleRng`].
#[derive(Debug, Clone)]
pub struct Engine<R: RandomSource = SimpleRng> {
    grid: Grid,
    active: Option<Piece>,
    rng: R,
    phase: Phase,
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
}

impl Engine<SimpleRng> {
    /// Create a new engine in `Ready` with an empty grid and one spawned
    /// piece, using the default seedable RNG.
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl Default for Engine<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: RandomSource> Engine<R> {
    /// Create a new engine with an injected random source.
    pub fn with_rng(rng: R) -> Self {
        let mut engine = Self {
            grid: Grid::new(),
            active: None,
            rng,
            phase: Phase::Ready,
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: BASE_DROP_MS,
            drop_timer_ms: 0,
        };
        engine.reset();
        engine
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity interval in milliseconds.
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Begin play. Only legal from `Ready`.
    pub fn start(&mut self) -> Outcome {
        match self.phase {
            Phase::Ready => {
                self.phase = Phase::Running;
                Outcome::Ok
            }
            _ => Outcome::Rejected,
        }
    }

    /// Pause a running game.
    pub fn pause(&mut self) -> Outcome {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                Outcome::Ok
            }
            _ => Outcome::Rejected,
        }
    }

    /// Resume a paused game.
    pub fn resume(&mut self) -> Outcome {
        match self.phase {
            Phase::Paused => {
                self.phase = Phase::Running;
                Outcome::Ok
            }
            _ => Outcome::Rejected,
        }
    }

    /// Discard all in-progress state and return to `Ready` with an empty
    /// grid and a fresh spawned piece. Always succeeds, from any phase.
    ///
    /// The RNG keeps its current state, so a reset game continues the
    /// seeded sequence rather than replaying it.
    pub fn reset(&mut self) -> Outcome {
        self.grid.clear();
        self.active = None;
        self.phase = Phase::Ready;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_timer_ms = 0;
        self.spawn_piece();
        Outcome::Ok
    }

    /// Spawn the next piece: shape and color drawn uniformly and
    /// independently from the 7 non-empty variants, centered at the top.
    ///
    /// Returns false on a spawn-position collision, which transitions to
    /// `GameOver` and discards the piece.
    fn spawn_piece(&mut self) -> bool {
        let kind = PieceKind::ALL[self.rng.next_range(7) as usize];
        let color = Color::ALL[self.rng.next_range(7) as usize];

        let piece = Piece::spawn(kind, color);
        if piece.collides(&self.grid) {
            self.phase = Phase::GameOver;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Active piece, only while `Running`. Gate for every mutating op.
    fn running_piece(&self) -> Option<Piece> {
        match self.phase {
            Phase::Running => self.active,
            _ => None,
        }
    }

    /// Move the active piece one cell left.
    pub fn move_left(&mut self) -> Outcome {
        self.try_shift(-1)
    }

    /// Move the active piece one cell right.
    pub fn move_right(&mut self) -> Outcome {
        self.try_shift(1)
    }

    fn try_shift(&mut self, direction: i8) -> Outcome {
        let Some(piece) = self.running_piece() else {
            return Outcome::Rejected;
        };

        let moved = piece.shifted(direction, 0);
        if moved.collides(&self.grid) {
            return Outcome::Rejected;
        }

        self.active = Some(moved);
        Outcome::Ok
    }

    /// Rotate the active piece 90° clockwise with wall-kick fallback.
    ///
    /// Tries the rotated shape in place, then one cell left, then one cell
    /// right of the original position. If all three collide, the piece is
    /// left exactly as it was.
    pub fn rotate(&mut self) -> Outcome {
        let Some(piece) = self.running_piece() else {
            return Outcome::Rejected;
        };

        let rotated = piece.shape.rotated_cw();
        for kick in [0i8, -1, 1] {
            let candidate = Piece {
                shape: rotated,
                x: piece.x + kick,
                ..piece
            };
            if !candidate.collides(&self.grid) {
                self.active = Some(candidate);
                return Outcome::Ok;
            }
        }

        Outcome::Rejected
    }

    /// Advance the active piece one row.
    ///
    /// If the next row collides the piece stays where it is and locks:
    /// its color is merged into the grid, full rows are cleared and scored,
    /// and the next piece spawns (which may end the game).
    pub fn soft_drop(&mut self) -> Outcome {
        let Some(piece) = self.running_piece() else {
            return Outcome::Rejected;
        };

        let dropped = piece.shifted(0, 1);
        if dropped.collides(&self.grid) {
            return self.lock_and_continue(piece);
        }

        self.active = Some(dropped);
        Outcome::Ok
    }

    /// Drop the active piece to the lowest non-colliding row, awarding
    /// 2 points per row descended, then lock it as `soft_drop` does.
    ///
    /// Drop points are applied before any line-clear score.
    pub fn hard_drop(&mut self) -> Outcome {
        let Some(piece) = self.running_piece() else {
            return Outcome::Rejected;
        };

        let mut distance: i8 = 0;
        while !piece.shifted(0, distance + 1).collides(&self.grid) {
            distance += 1;
        }

        self.score += hard_drop_score(distance as u32);
        self.lock_and_continue(piece.shifted(0, distance))
    }

    /// Advance game time. When the accumulated elapsed time exceeds the
    /// gravity interval (strictly), the baseline resets and one `soft_drop`
    /// runs.
    ///
    /// This is the only time-driven mutation; the engine never
    /// self-schedules.
    pub fn tick(&mut self, delta_ms: u32) -> Outcome {
        if self.phase != Phase::Running {
            return Outcome::Rejected;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(delta_ms);
        if self.drop_timer_ms <= self.drop_interval_ms {
            return Outcome::Ok;
        }

        self.drop_timer_ms = 0;
        self.soft_drop()
    }

    /// Apply a host command.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => self.hard_drop(),
            Command::Rotate => self.rotate(),
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::Reset => self.reset(),
            Command::Tick(delta_ms) => self.tick(delta_ms),
        }
    }

    /// Merge the piece, clear lines, and spawn the next piece.
    fn lock_and_continue(&mut self, piece: Piece) -> Outcome {
        self.merge(&piece);
        self.active = None;
        self.drop_timer_ms = 0;

        let cleared = self.clear_lines();

        if !self.spawn_piece() {
            // Spawn blocked: reported distinctly from a normal lock even
            // when lines were also cleared.
            return Outcome::GameOver;
        }

        if cleared > 0 {
            Outcome::LinesCleared(cleared)
        } else {
            Outcome::Locked
        }
    }

    /// Write the piece's color into every grid cell it occupies.
    fn merge(&mut self, piece: &Piece) {
        for r in 0..piece.shape.rows() as usize {
            for c in 0..piece.shape.cols() as usize {
                if piece.shape.filled(r, c) {
                    self.grid
                        .set(piece.x + c as i8, piece.y + r as i8, Some(piece.color));
                }
            }
        }
    }

    /// Clear full rows and apply scoring and level/speed progression.
    /// Returns the number of rows cleared.
    fn clear_lines(&mut self) -> u32 {
        let cleared = self.grid.clear_full_rows().len() as u32;
        if cleared == 0 {
            return 0;
        }

        self.score += line_clear_score(cleared as usize, self.level);
        self.lines += cleared;

        let new_level = level_for_lines(self.lines);
        if new_level != self.level {
            self.level = new_level;
            self.drop_interval_ms = drop_interval_ms(new_level);
        }

        cleared
    }
}
