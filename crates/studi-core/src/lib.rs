//! Core logic for studi: the static topic catalog, the deterministic plan
//! generator, plan rendering, and strategy tips.

pub mod catalog;
pub mod plan;
pub mod tips;
