//! Falling-block puzzle game engine - pure, deterministic, and testable.
//!
//! This crate contains the complete game logic: grid model, piece spawning,
//! collision detection, rotation with wall-kick fallback, line clearing with
//! scoring, and level/speed progression. It has **zero dependencies** on UI,
//! networking, or I/O, making it:
//!
//! - **Deterministic**: the only randomness is piece selection, behind an
//!   injectable [`RandomSource`] (same seed, same game)
//! - **Passive**: the host drives time through [`Engine::tick`]; the engine
//!   never self-schedules
//! - **Infallible**: every operation returns a definite [`Outcome`]; there
//!   are no panics and no error types in the public API
//!
//! Rendering, input devices, audio, and high-score persistence are host
//! concerns; they talk to the engine only through commands and snapshots.
//!
//! # Module structure
//!
//! - [`grid`]: 10x20 playfield with occupancy queries and line clearing
//! - [`pieces`]: the seven shapes and matrix rotation
//! - [`rng`]: seedable random source for piece selection
//! - [`scoring`]: score, level, and gravity-speed tables
//! - [`engine`]: the state machine tying it all together
//! - [`snapshot`]: copyable read-only views for presentation layers
//!
//! # Example
//!
//! ```
//! use tetris_engine::{Command, Engine, Outcome};
//!
//! // Create and start a game
//! let mut engine = Engine::new(12345);
//! engine.start();
//!
//! // Apply commands; every operation reports what happened
//! engine.apply(Command::MoveRight);
//! engine.apply(Command::Rotate);
//! let outcome = engine.apply(Command::HardDrop);
//! assert!(outcome.locked());
//!
//! // Hard drops award 2 points per row descended
//! assert!(engine.score() > 0);
//! ```
//!
//! # Timing
//!
//! The engine is paced by the host: call [`Engine::tick`] with elapsed
//! milliseconds on whatever cadence the host runs. When the accumulated time
//! exceeds the current drop interval (1000ms at level 1, 100ms faster per
//! level, floored at 100ms), the active piece falls one row.

pub mod engine;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod types;

// Re-export commonly used types for convenience
pub use engine::{Engine, Piece};
pub use grid::Grid;
pub use pieces::{PieceKind, Shape, SHAPES};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use types::{Cell, Color, Command, Outcome, Phase, COLS, ROWS};
