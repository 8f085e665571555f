//! # geoplot-cli — Subcommand Handlers
//!
//! One module per subcommand, each exposing a clap `Args` struct and an
//! async `run` handler. The binary in `main.rs` only assembles and
//! dispatches.

pub mod input;
pub mod plot;
pub mod schema;
pub mod validate;
