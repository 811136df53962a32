//! Politeness delays between network fetches

mod random;

pub use random::RandomPacer;
