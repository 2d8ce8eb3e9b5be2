// WHY: the creative paraphrase style and the synthetic scores need randomness, and tests must
// be able to pin it, so randomness is always passed in rather than read from a global

/// Source of pseudo-random numbers for the paraphrase engine
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform value in `[0, 1)`
    fn next_f64(&mut self) -> f64 {
        // 53 high bits fill the f64 mantissa exactly
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform index in `0..len`; `len` must be non-zero
    fn pick(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// Uniform integer in `[min, max)`, or `min` for an empty range
    fn in_range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        min + (self.next_f64() * f64::from(max - min)) as u32
    }
}

/// Deterministic xorshift64 generator
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Seed from the wall clock, for callers that did not ask for reproducible output
    pub fn from_time() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(nanos)
    }
}

impl RandomSource for SeededRng {
    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}
