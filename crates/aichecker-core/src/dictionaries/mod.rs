//! Curated word sets used by the style heuristics.

pub mod irregular_verbs;
