//! # bingo-engine: Bingo Card Engine Core
//!
//! A deterministic single-player bingo card engine. Provides card
//! generation with column-band constraints, mark-state tracking, and
//! winning-line detection, with reproducible RNG and JSONL session logging
//! for replay and debugging.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Column, Cell, Card) and layout validation
//! - [`generator`] - Deterministic card generation with ChaCha20 RNG
//! - [`game`] - Mark state machine (CardState) and mark outcomes
//! - [`rules`] - Winning lines and completion evaluation
//! - [`logger`] - Session records and JSONL serialization
//! - [`errors`] - Error types for card-layout validation
//!
//! ## Quick Start
//!
//! ```rust
//! use bingo_engine::game::{CardState, MarkStatus};
//! use bingo_engine::generator::CardGenerator;
//!
//! let mut generator = CardGenerator::new_with_seed(42);
//! let mut state = CardState::new(generator.generate());
//!
//! // Mark whatever number sits at the top-left corner.
//! let number = state.card().cell(0, 0).number().unwrap();
//! let outcome = state.mark(number);
//! assert_eq!(outcome.status, MarkStatus::Marked);
//!
//! // Marking the same number again is an idempotent no-op.
//! assert_eq!(state.mark(number).status, MarkStatus::AlreadyMarked);
//! ```
//!
//! ## Deterministic Generation
//!
//! All card layouts are reproducible using seeded RNG:
//!
//! ```rust
//! use bingo_engine::generator::CardGenerator;
//!
//! // Same seed produces the same card
//! let card1 = CardGenerator::new_with_seed(42).generate();
//! let card2 = CardGenerator::new_with_seed(42).generate();
//! assert_eq!(card1, card2);
//! ```
//!
//! ## Win Detection
//!
//! Completing any of the 12 lines (5 rows, 5 columns, 2 diagonals) wins.
//! The free cell at the card's center is pre-marked:
//!
//! ```rust
//! use bingo_engine::game::CardState;
//! use bingo_engine::generator::CardGenerator;
//! use bingo_engine::rules::Line;
//!
//! let mut state = CardState::new(CardGenerator::new_with_seed(7).generate());
//!
//! // Mark all five numbers of row 3.
//! let row: Vec<u8> = (0..5)
//!     .filter_map(|col| state.card().cell(3, col).number())
//!     .collect();
//! for n in row {
//!     state.mark(n);
//! }
//! assert!(state.evaluate_win().contains(&Line::Row(3)));
//! ```

pub mod cards;
pub mod errors;
pub mod game;
pub mod generator;
pub mod logger;
pub mod rules;
