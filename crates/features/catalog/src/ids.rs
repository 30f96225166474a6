//! Entry id synthesis.
//!
//! Ids have the shape `<prefix>-<index>-<token>`. The token comes from an injected
//! generator, so ids authored in the same batch never collide and tests can pin them.

use mfg_domain::config::{IdConfig, IdStrategy};
use mfg_kernel::safe_nanoid;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

pub trait IdGenerator: Debug + Send + Sync {
    /// A fresh token, unique for the lifetime of the generator.
    fn token(&self) -> String;

    fn entry_id(&self, prefix: &str, index: usize) -> String {
        format!("{prefix}-{index}-{}", self.token())
    }
}

/// Random tokens from the kernel's unambiguous alphabet.
#[derive(Debug, Clone)]
pub struct NanoIdGenerator {
    length: usize,
}

impl NanoIdGenerator {
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for NanoIdGenerator {
    fn default() -> Self {
        Self::new(12)
    }
}

impl IdGenerator for NanoIdGenerator {
    fn token(&self) -> String {
        safe_nanoid!(self.length)
    }
}

/// Monotonic per-session counter.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self { next: AtomicU64::new(first) }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn token(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

/// Builds the generator selected by configuration.
#[must_use]
pub fn from_config(config: &IdConfig) -> Box<dyn IdGenerator> {
    match config.strategy {
        IdStrategy::Nanoid => Box::new(NanoIdGenerator::new(config.length)),
        IdStrategy::Sequential => Box::new(SequentialIdGenerator::default()),
    }
}
