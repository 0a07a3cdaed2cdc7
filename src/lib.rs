//! # Connect-K
//!
//! An M×N, K-in-a-row board engine covering Tic-Tac-Toe, Connect Four and
//! everything in between, with optional gravity.
//!
//! ## Modules
//!
//! - [`game`] — Board config and state, win/draw detection, game session
//! - [`ai`] — Agent trait, baseline agents, two-agent match loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
