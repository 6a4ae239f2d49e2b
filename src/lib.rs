//! # Connect Four
//!
//! Rules engine and turn-based state machine for Connect Four, plus a
//! terminal front-end built with Ratatui that drives it.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, state machine
//! - [`ui`] — Terminal UI: board view, key handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
