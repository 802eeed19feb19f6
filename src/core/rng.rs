//! Deterministic, seedable random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: the same seed produces an identical sequence across
//!   process runs (and across the other implementations of this generator)
//! - **String seeds**: hashed to a 32-bit seed via FNV-1a
//! - **Entropy fallback**: an unseeded generator draws from the platform
//!   entropy source on every call and makes no determinism promise
//!
//! The core generator is mulberry32: a 32-bit state, multiplicative-mix
//! algorithm. It is statistically adequate for game AI and puzzle
//! generation and is not cryptographic. Every operation is defined in terms
//! of `next()` so that seeded sequences stay reproducible bit-for-bit.
//!
//! ## Usage
//!
//! ```
//! use parlor::core::GameRng;
//!
//! let mut a = GameRng::seeded(42u32);
//! let mut b = GameRng::seeded(42u32);
//! assert_eq!(a.next_int(1000), b.next_int(1000));
//! ```

use serde::{Deserialize, Serialize};

/// FNV-1a offset basis (32-bit).
const FNV_OFFSET: u32 = 0x811c_9dc5;
/// FNV-1a prime (32-bit).
const FNV_PRIME: u32 = 0x0100_0193;

/// Hash a string to a 32-bit seed via FNV-1a.
///
/// Hashes UTF-16 code units so that text seeds map to the same 32-bit
/// value in every implementation of this generator.
#[must_use]
pub fn seed_from_str(input: &str) -> u32 {
    let mut hash = FNV_OFFSET;
    for unit in input.encode_utf16() {
        hash ^= u32::from(unit);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// A seed accepted by [`GameRng`]: numeric, or text hashed via FNV-1a.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seed {
    Number(u32),
    Text(String),
}

impl Seed {
    /// Resolve the seed to the 32-bit value fed to the core generator.
    #[must_use]
    pub fn to_u32(&self) -> u32 {
        match self {
            Seed::Number(n) => *n,
            Seed::Text(s) => seed_from_str(s),
        }
    }

    /// Extract an optional `seed` parameter from a URL query string.
    ///
    /// Accepts the query with or without its leading `?`. Numeric values
    /// (finite, non-blank) become [`Seed::Number`], truncated and wrapped
    /// to 32 bits the way a `>>> 0` coercion would; anything else becomes
    /// [`Seed::Text`]. Returns `None` when no `seed` parameter is present.
    #[must_use]
    pub fn from_query(query: &str) -> Option<Seed> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let raw = query
            .split('&')
            .filter_map(|pair| {
                let (key, value) = match pair.split_once('=') {
                    Some((k, v)) => (k, v),
                    None => (pair, ""),
                };
                (key == "seed").then(|| decode_component(value))
            })
            .next()?;
        Some(Seed::parse(&raw))
    }

    /// Classify a raw seed string as numeric or text.
    #[must_use]
    pub fn parse(raw: &str) -> Seed {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            if let Ok(n) = trimmed.parse::<f64>() {
                if n.is_finite() {
                    return Seed::Number(truncate_to_u32(n));
                }
            }
        }
        Seed::Text(raw.to_string())
    }
}

impl From<u32> for Seed {
    fn from(n: u32) -> Self {
        Seed::Number(n)
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed::Text(s.to_string())
    }
}

impl From<String> for Seed {
    fn from(s: String) -> Self {
        Seed::Text(s)
    }
}

/// Truncate toward zero and wrap modulo 2^32.
fn truncate_to_u32(n: f64) -> u32 {
    n.trunc().rem_euclid(4_294_967_296.0) as u32
}

/// Minimal percent-decoding for query parameter values.
fn decode_component(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let decoded = bytes.get(i + 1..i + 3).and_then(|h| {
                    std::str::from_utf8(h)
                        .ok()
                        .and_then(|h| u8::from_str_radix(h, 16).ok())
                });
                match decoded {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// mulberry32 core generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
enum Source {
    Seeded(Mulberry32),
    Entropy,
}

/// Seedable RNG consumed by every Easy-tier bot and the puzzle generator.
///
/// Constructed seeded (deterministic) or from entropy. The seeded form is
/// the load-bearing one: two generators built from the same seed produce
/// identical output sequences forever. Callers thread the generator
/// explicitly; there is no hidden global instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameRng {
    source: Source,
}

impl GameRng {
    /// Create a generator, seeded when a seed is given.
    #[must_use]
    pub fn new(seed: Option<Seed>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Create a deterministic generator from a seed.
    #[must_use]
    pub fn seeded(seed: impl Into<Seed>) -> Self {
        Self {
            source: Source::Seeded(Mulberry32::new(seed.into().to_u32())),
        }
    }

    /// Create a non-deterministic generator backed by platform entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            source: Source::Entropy,
        }
    }

    /// Create a generator from a URL query string's optional `seed`
    /// parameter, falling back to entropy when absent.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        Self::new(Seed::from_query(query))
    }

    /// Next float in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        let raw = match &mut self.source {
            Source::Seeded(core) => core.next_u32(),
            Source::Entropy => rand::random::<u32>(),
        };
        f64::from(raw) / 4_294_967_296.0
    }

    /// Next integer in `[0, max_exclusive)`.
    pub fn next_int(&mut self, max_exclusive: u32) -> u32 {
        assert!(max_exclusive > 0, "next_int: max_exclusive must be positive");
        (self.next() * f64::from(max_exclusive)) as u32
    }

    /// Next integer in `[lo, hi]` inclusive.
    pub fn int(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(hi >= lo, "int: require hi >= lo");
        let range = hi - lo + 1;
        lo + (self.next() * range as f64) as i64
    }

    /// Next float in `[lo, hi)`.
    pub fn float(&mut self, lo: f64, hi: f64) -> f64 {
        assert!(hi > lo, "float: require hi > lo");
        lo + (hi - lo) * self.next()
    }

    /// Return a shuffled copy (Fisher-Yates); the input is untouched.
    #[must_use]
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut arr = items.to_vec();
        for i in (1..arr.len()).rev() {
            let j = (self.next() * (i as f64 + 1.0)) as usize;
            arr.swap(i, j);
        }
        arr
    }

    /// Pick a single element, or `None` when the slice is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = (self.next() * items.len() as f64) as usize;
        items.get(index)
    }
}
