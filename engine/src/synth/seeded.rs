// Seeded PRNG and per-card jitter.
//
// Everything here uses unsigned 32-bit wraparound arithmetic so the same key
// yields the same stream on every platform.

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// FNV-1a style hash of a string key, over its UTF-16 code units.
pub fn hash_string_to_seed(key: &str) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for unit in key.encode_utf16() {
        hash ^= u32::from(unit);
        // hash * 16777619, spelled as the FNV shift mix
        hash = hash
            .wrapping_add(hash << 1)
            .wrapping_add(hash << 4)
            .wrapping_add(hash << 7)
            .wrapping_add(hash << 8)
            .wrapping_add(hash << 24);
    }
    hash
}

/// Linear congruential generator returning floats in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn from_key(key: &str) -> Self {
        Self::new(hash_string_to_seed(key))
    }

    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        f64::from(self.state) / TWO_POW_32
    }
}

impl Iterator for SeededRandom {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// Perturbs `values` with a bounded drift plus instantaneous noise, seeded
/// from `seed_key`. Output has the same length as the input and is never
/// negative. `None` yields an empty vector.
pub fn jitter_series(values: Option<&[f64]>, amplitude_fraction: f64, seed_key: &str) -> Vec<f64> {
    let values = match values {
        Some(v) if !v.is_empty() => v,
        _ => return Vec::new(),
    };

    let mut rng = SeededRandom::from_key(seed_key);
    let mut drift = 0.0_f64;

    values
        .iter()
        .map(|&value| {
            drift = (drift + (rng.next_f64() - 0.5) * 0.25).clamp(-1.0, 1.0);
            let noise = (rng.next_f64() - 0.5) * 2.0;
            let factor = 1.0 + amplitude_fraction * (0.6 * drift + 0.4 * noise);
            (value * factor).max(0.0)
        })
        .collect()
}
