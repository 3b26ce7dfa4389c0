//! Randomness Abstraction
//!
//! The generator and alert-id minting never call a global RNG. They draw from
//! an [`EntropySource`] handed in by the caller, so a test can replay an exact
//! sequence of draws and a live run can plug in any `rand` generator.
//!
//! ```rust
//! use coldchain_core::entropy::{EntropySource, RngEntropy, ScriptedEntropy};
//! use rand::rngs::mock::StepRng;
//!
//! let mut live = RngEntropy::new(StepRng::new(0, 1));
//! assert!(live.next_unit() < 1.0);
//!
//! // Replay: temperature step, humidity step, shock draw
//! let mut scripted = ScriptedEntropy::new(&[0.5, 0.5, 0.99]);
//! assert_eq!(scripted.next_unit(), 0.5);
//! ```

use alloc::vec::Vec;

use rand::RngCore;

/// Source of uniform random draws
pub trait EntropySource {
    /// Uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f32;

    /// Fill `dest` with random bytes
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (**self).fill_bytes(dest)
    }
}

/// Adapter from any `rand` generator
#[derive(Debug, Clone)]
pub struct RngEntropy<R> {
    rng: R,
}

impl<R: RngCore> RngEntropy<R> {
    /// Wrap a generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> EntropySource for RngEntropy<R> {
    fn next_unit(&mut self) -> f32 {
        // 24 high bits fill the f32 mantissa exactly, result stays below 1.0
        (self.rng.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }
}

/// Replays a fixed list of unit draws, cycling when exhausted
///
/// Byte requests are served from a counter so minted ids stay distinct.
#[derive(Debug, Clone)]
pub struct ScriptedEntropy {
    units: Vec<f32>,
    position: usize,
    byte_counter: u64,
}

impl ScriptedEntropy {
    /// Values outside `[0, 1)` are clamped into it
    pub fn new(units: &[f32]) -> Self {
        let units = units
            .iter()
            .map(|u| if u.is_finite() { u.clamp(0.0, 0.999_999) } else { 0.5 })
            .collect::<Vec<_>>();

        Self {
            units,
            position: 0,
            byte_counter: 0,
        }
    }

    /// Every draw returns the midpoint: zero step, never a shock
    pub fn neutral() -> Self {
        Self::new(&[0.5])
    }

    /// Number of unit draws served so far
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl EntropySource for ScriptedEntropy {
    fn next_unit(&mut self) -> f32 {
        if self.units.is_empty() {
            return 0.5;
        }

        let value = self.units[self.position % self.units.len()];
        self.position += 1;
        value
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            self.byte_counter = self.byte_counter.wrapping_add(1);
            let bytes = self.byte_counter.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
