//! # calc_core - Four-Function Calculator Engine
//!
//! `calc_core` is the computational heart of Quotient: a single-operator
//! calculator with one twist, *safe division*. With safe division on,
//! dividing by zero reports a quotient of 0 and the whole dividend as the
//! remainder instead of an error.
//!
//! ## Design Philosophy
//!
//! - **No I/O**: the engine returns what to show; front ends draw it
//! - **JSON-First**: state and emissions implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::engine::{Engine, Operator};
//!
//! let mut engine = Engine::new();
//! engine.append_digit('7')?;
//! engine.choose_operator(Operator::Add);
//! engine.append_digit('3')?;
//!
//! let render = engine.evaluate().unwrap();
//! assert_eq!(render.display, "10");
//! assert_eq!(render.note, "");
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - Calculator state machine, operators, division helper, number text
//! - [`render`] - Emission types and the `Presenter` trait
//! - [`keys`] - Keypad character and command translation
//! - [`settings`] - User preferences and settings file I/O
//! - [`errors`] - Structured error types

pub mod engine;
pub mod errors;
pub mod keys;
pub mod render;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use engine::{divide_with_remainder, Engine, Operator, Phase, QuotientRemainder};
pub use errors::{CalcError, CalcResult};
pub use keys::Key;
pub use render::{Emission, ModeChange, Presenter, RecordingPresenter, Render, StatusStyle, StatusUpdate};
pub use settings::{load_settings, save_settings, Settings};
