//! Fertility score calculator.
//!
//! The scoring engine is a pure function: [`scoring::compute_score`] takes an
//! [`input::InputRecord`] and produces a [`scoring::ScoreResult`] with 13
//! per-factor sub-scores (0..=3 each), their total (0..=39), and a
//! [`scoring::Band`] classification. Everything else is plumbing around it:
//! the interactive form in [`tui`], the one-shot formatter in [`output`], and
//! the startup defaults in [`config`].

pub mod config;
pub mod input;
pub mod output;
pub mod scoring;
pub mod tui;
