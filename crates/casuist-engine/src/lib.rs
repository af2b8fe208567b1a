//! Casuist Engine - the adaptation-and-reconciliation pipeline
//!
//! Control flow: new situation + retrieved precedent -> [`adaptation`]
//! produces adapted reasoning paths (one per framework in the precedent) ->
//! [`conflict`] finds pairs whose conclusions or priorities disagree ->
//! [`resolve`] synthesizes a resolution record per conflict.
//!
//! Everything here is a pure transformation over copied data: no I/O, no
//! shared mutable state, fail-soft on missing or invalid input.

pub mod adaptation;
pub mod conflict;
pub mod resolve;
pub mod similarity;

pub use adaptation::AdaptationEngine;
pub use conflict::ConflictDetector;
pub use resolve::{ConflictResolver, ResolutionOptions, ResolutionOutcome};
pub use similarity::{find_relevant_precedents, RankedPrecedent, SimilarityWeights};
