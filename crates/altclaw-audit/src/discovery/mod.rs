//! Candidate installation discovery.

pub mod roots;

pub use roots::{expand_location, find_candidate_roots};
