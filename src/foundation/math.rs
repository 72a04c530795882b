/// Values closer than this to a gradient endpoint are treated as the endpoint itself.
pub(crate) const EPSILON: f64 = 0.000_01;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn new_default() -> Self {
        Self::new(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
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

#[inline]
pub(crate) fn approx_zero(v: f64) -> bool {
    v.abs() <= EPSILON
}

#[inline]
pub(crate) fn approx_one(v: f64) -> bool {
    (v - 1.0).abs() <= EPSILON
}

/// Scale factor for one axis of a remap; a collapsed axis keeps unit scale so the matrix stays
/// invertible.
#[inline]
pub(crate) fn non_degenerate_scale(v: f64) -> f64 {
    if approx_zero(v) { 1.0 } else { v }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
