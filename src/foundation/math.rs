use crate::foundation::core::Point;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Hash a textual seed into the 64-bit state used by [`Rng64`].
pub(crate) fn seed_hash(seed: &str) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(seed.as_bytes());
    h.finish()
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn from_seed_str(seed: &str) -> Self {
        Self::new(seed_hash(seed))
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub(crate) fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform sample in `[-1, 1)`.
    pub(crate) fn next_signed(&mut self) -> f64 {
        self.next_f64_01() * 2.0 - 1.0
    }
}

/// Unclamped linear interpolation; callers pass eased progress in `[0, 1]`.
#[inline]
pub fn interpolate_number(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * progress
}

#[inline]
pub(crate) fn lerp_point(from: Point, to: Point, progress: f64) -> Point {
    Point::new(
        interpolate_number(from.x, to.x, progress),
        interpolate_number(from.y, to.y, progress),
    )
}

#[inline]
pub(crate) fn centroid(points: &[Point; 3]) -> Point {
    Point::new(
        (points[0].x + points[1].x + points[2].x) / 3.0,
        (points[0].y + points[1].y + points[2].y) / 3.0,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
