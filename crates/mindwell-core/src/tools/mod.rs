//! The local, synchronous self-exploration tools.

pub mod cards;
pub mod personality;
pub mod pillars;
