//! Deterministic fighter matchup scoring engine.
//!
//! Takes two scraped fighter profiles and produces a win-probability pair, a
//! per-pillar breakdown, a data-completeness confidence score and a
//! qualitative analysis. Pure and synchronous: no I/O, no shared state, safe
//! to call from any number of threads.

pub mod engine;
pub mod numeric;
pub mod parse;
pub mod pillars;
pub mod profile;
pub mod tuning;
pub mod weights;
