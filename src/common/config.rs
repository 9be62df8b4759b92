//! Simulator configuration.
//!
//! A driver picks a replacement policy by name and a frame count, then calls
//! [`MmuConfig::build`] to get a boxed [`Mmu`].

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::{Error, Result};
use crate::mmu::policy::{ClockMmu, LruMmu, RandomMmu};
use crate::mmu::Mmu;

/// Smallest usable number of physical frames.
///
/// Every policy assumes at least one resident slot exists.
pub const MIN_FRAMES: usize = 1;

/// Which page replacement policy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// Evict the page with the oldest access time.
    Lru,
    /// Second-chance sweep over a circular frame array.
    Clock,
    /// Evict a uniformly random resident page.
    Random,
}

impl PolicyKind {
    /// All policies, in the order drivers usually report them.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Lru, PolicyKind::Clock, PolicyKind::Random];

    /// Mode string used on the driver's command line.
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Lru => "lru",
            PolicyKind::Clock => "clock",
            PolicyKind::Random => "rand",
        }
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(PolicyKind::Lru),
            "clock" => Ok(PolicyKind::Clock),
            "rand" | "random" => Ok(PolicyKind::Random),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for one simulation run.
///
/// # Example
/// ```
/// use vmsim::{MmuConfig, PolicyKind};
///
/// let mmu = MmuConfig::new(4, PolicyKind::Random)
///     .with_seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(mmu.capacity(), 4);
/// assert_eq!(mmu.policy(), PolicyKind::Random);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MmuConfig {
    /// Number of physical frames.
    pub frames: usize,
    /// Replacement policy to construct.
    pub policy: PolicyKind,
    /// Start with the diagnostic trace enabled.
    pub debug: bool,
    /// Seed for the Random policy. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl MmuConfig {
    /// A config for `frames` frames under `policy`, debug off, unseeded.
    pub fn new(frames: usize, policy: PolicyKind) -> Self {
        Self {
            frames,
            policy,
            debug: false,
            seed: None,
        }
    }

    /// Set whether the built MMU starts with the debug trace on.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Seed the Random policy's generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Construct the configured policy.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `frames` is below [`MIN_FRAMES`]
    pub fn build(&self) -> Result<Box<dyn Mmu>> {
        let mut mmu: Box<dyn Mmu> = match self.policy {
            PolicyKind::Lru => Box::new(LruMmu::new(self.frames)?),
            PolicyKind::Clock => Box::new(ClockMmu::new(self.frames)?),
            PolicyKind::Random => {
                let rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                Box::new(RandomMmu::with_rng(self.frames, rng)?)
            }
        };
        mmu.set_debug(self.debug);
        Ok(mmu)
    }
}
