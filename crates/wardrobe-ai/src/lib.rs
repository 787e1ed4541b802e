//! Weather- and occasion-aware outfit recommendations.
//!
//! The scoring-and-selection core lives in [`recommendations::scoring`] and
//! [`recommendations::assembler`]; both are pure functions of their inputs. Everything
//! else in the crate (catalog import, recording, HTTP routing) wraps that core.

pub mod config;
pub mod error;
pub mod recommendations;
pub mod telemetry;
