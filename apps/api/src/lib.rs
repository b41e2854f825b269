//! Scorecard API: deterministic resume scoring for the student career dashboard.
//!
//! The scoring core (`scoring`) is pure and usable on its own through
//! [`scoring::score_resume`]; the rest is the HTTP service around it.

pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod scoring;
pub mod state;
pub mod suggestions;
