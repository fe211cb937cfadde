//! MT19937 Mersenne Twister
//!
//! Direct implementation of the 32-bit Mersenne Twister (Matsumoto &
//! Nishimura, 1998). Seeding follows the reference `init_genrand`; there is no
//! attempt to match the array-based seeding of any language's built-in RNG.
//!
//! The emitted value is the tempered 32-bit word divided by 2^32.

use serde::{Deserialize, Serialize};

use super::{GeneratorError, PseudoRandom, WORD_SCALE};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;
const INIT_MULTIPLIER: u32 = 1_812_433_253;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredTwisterState")]
struct TwisterState {
    words: Vec<u32>,
    /// Next word to temper; `N` forces a twist on the next draw
    index: usize,
}

/// Unchecked shape of a checkpointed [`TwisterState`]
#[derive(Deserialize)]
struct StoredTwisterState {
    words: Vec<u32>,
    index: usize,
}

impl TryFrom<StoredTwisterState> for TwisterState {
    type Error = String;

    fn try_from(stored: StoredTwisterState) -> Result<Self, Self::Error> {
        if stored.words.len() != N {
            return Err(format!(
                "twister state needs {N} words, got {}",
                stored.words.len()
            ));
        }
        if stored.index > N {
            return Err(format!(
                "twister index {} is past the end of the state ({N})",
                stored.index
            ));
        }
        Ok(Self {
            words: stored.words,
            index: stored.index,
        })
    }
}

impl TwisterState {
    fn new(seed: u32) -> Self {
        let mut words = Vec::with_capacity(N);
        words.push(seed);
        for i in 1..N {
            let prev = words[i - 1];
            words.push(
                INIT_MULTIPLIER
                    .wrapping_mul(prev ^ (prev >> 30))
                    .wrapping_add(i as u32),
            );
        }
        Self { words, index: N }
    }

    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.words[i] & UPPER_MASK) | (self.words[(i + 1) % N] & LOWER_MASK);
            let mut next = self.words[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.words[i] = next;
        }
        self.index = 0;
    }

    fn next_word(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.words[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^= y >> 18;
        y
    }
}

/// MT19937 generator
///
/// # Example
/// ```
/// use prng_suite_core::rng::{MersenneTwister, PseudoRandom};
///
/// let mut rng = MersenneTwister::new();
/// rng.seed(5489);
/// assert_eq!(rng.next_u32().unwrap(), 3499211612);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MersenneTwister {
    state: Option<TwisterState>,
}

impl MersenneTwister {
    /// Create an unseeded generator
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Create a generator already seeded with `seed`
    pub fn with_seed(seed: u32) -> Self {
        Self {
            state: Some(TwisterState::new(seed)),
        }
    }

    /// Next tempered 32-bit output word
    pub fn next_u32(&mut self) -> Result<u32, GeneratorError> {
        self.state
            .as_mut()
            .map(TwisterState::next_word)
            .ok_or(GeneratorError::Uninitialized)
    }
}

impl PseudoRandom for MersenneTwister {
    fn seed(&mut self, value: u32) {
        self.state = Some(TwisterState::new(value));
    }

    fn is_seeded(&self) -> bool {
        self.state.is_some()
    }

    fn next_raw(&mut self) -> Result<f64, GeneratorError> {
        Ok(self.next_u32()? as f64 / WORD_SCALE)
    }
}
