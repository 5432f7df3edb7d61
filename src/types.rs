//! Shared types and constants.
//!
//! Pure data structures with no dependencies, usable from the engine, tests,
//! and any presentation layer.
//!
//! # Grid dimensions
//!
//! Classic playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (4, 0), horizontally centered
//!
//! # Scoring and speed
//!
//! Line clears award `LINE_SCORES[n] * level` points (level starts at 1).
//! The level is `lines / 10 + 1`, and the gravity interval is
//! `max(100, 1000 - (level - 1) * 100)` milliseconds.

/// Grid width in cells (10 columns)
pub const COLS: u8 = 10;

/// Grid height in cells (20 rows)
pub const ROWS: u8 = 20;

/// Spawn column for new pieces: horizontally centered (`COLS / 2 - 1`)
pub const SPAWN_X: i8 = (COLS / 2) as i8 - 1;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speedup per level (100ms faster per level above 1)
pub const DROP_STEP_MS: u32 = 100;

/// Minimum gravity interval (100ms floor)
pub const DROP_FLOOR_MS: u32 = 100;

/// Lines required to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table (classic scoring)
///
/// Base points for clearing N lines, multiplied by the current level:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Points per row descended during a hard drop
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Cell color of a locked block.
///
/// Discriminants 1..=7 are the palette indices; index 0 is black and stands
/// for an empty cell. Colors are drawn independently of the piece shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Red = 1,
    Green = 2,
    Blue = 3,
    Yellow = 4,
    Cyan = 5,
    Magenta = 6,
    Orange = 7,
}

impl Color {
    /// All colors in palette order (indices 1..=7).
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Cyan,
        Color::Magenta,
        Color::Orange,
    ];

    /// Look up a color by palette index (1..=7).
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_engine::types::Color;
    ///
    /// assert_eq!(Color::from_index(1), Some(Color::Red));
    /// assert_eq!(Color::from_index(7), Some(Color::Orange));
    /// assert_eq!(Color::from_index(0), None);
    /// assert_eq!(Color::from_index(8), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::Blue),
            4 => Some(Color::Yellow),
            5 => Some(Color::Cyan),
            6 => Some(Color::Magenta),
            7 => Some(Color::Orange),
            _ => None,
        }
    }

    /// Palette index of this color (1..=7).
    pub fn index(&self) -> u8 {
        *self as u8
    }
}

/// A cell on the grid
///
/// - `None`: empty cell
/// - `Some(Color)`: cell filled by a locked piece
pub type Cell = Option<Color>;

/// Engine lifecycle phase.
///
/// Legal transitions:
/// - `Ready -> Running` on start
/// - `Running -> Paused` on pause, `Paused -> Running` on resume
/// - `Running -> GameOver` when a freshly spawned piece collides
/// - any phase `-> Ready` on reset
///
/// Piece-mutating operations only take effect in `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Ready,
    Running,
    Paused,
    GameOver,
}

/// Commands a host can apply to the engine.
///
/// Each command maps to one engine operation; hosts translate raw input
/// events (keyboard, touch, timers) into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down
    SoftDrop,
    /// Instantly drop piece to the lowest valid position
    HardDrop,
    /// Rotate piece 90° clockwise (with wall-kick fallback)
    Rotate,
    /// Begin play from `Ready`
    Start,
    /// Pause a running game
    Pause,
    /// Resume a paused game
    Resume,
    /// Discard all state and return to `Ready`
    Reset,
    /// Advance game time by the given number of milliseconds
    Tick(u32),
}

/// Result of applying a command.
///
/// Every operation returns a definite outcome; the engine never panics or
/// surfaces errors. Hosts use the outcome kind to decide what to render or
/// which sound to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation took effect (moved, rotated, state transition, or an
    /// uneventful tick).
    Ok,
    /// The operation was invalid in the current phase or blocked by
    /// collision; nothing changed.
    Rejected,
    /// The active piece locked into the grid without clearing lines; a new
    /// piece was spawned.
    Locked,
    /// The active piece locked and cleared this many rows (1..=4).
    LinesCleared(u32),
    /// The lock's follow-up spawn was blocked; the game is over.
    GameOver,
}

impl Outcome {
    /// Whether this outcome locked a piece into the grid.
    pub fn locked(&self) -> bool {
        matches!(
            self,
            Outcome::Locked | Outcome::LinesCleared(_) | Outcome::GameOver
        )
    }
}
