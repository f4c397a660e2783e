//! Champdle
//!
//! A guess-the-champion game: every guess is compared with a secret champion
//! attribute by attribute, each attribute scoring an exact match, a partial
//! overlap or no overlap.
//!
//! # Quick Start
//!
//! ```rust
//! use champdle::catalog::Catalog;
//! use champdle::game::Session;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let catalog = Catalog::champions().unwrap();
//! let mut session = Session::new(&catalog, StdRng::seed_from_u64(7));
//! session.start_with_target("zed").unwrap();
//!
//! let result = session.submit_guess("ahri").unwrap();
//! println!("{}", result.to_emoji());
//!
//! session.submit_guess("zed").unwrap();
//! assert!(session.is_solved());
//! ```

// Core domain types
pub mod core;

// Champion catalog and record loading
pub mod catalog;

// Game session state machine
pub mod game;

// Candidate filtering and guess strategies
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
