//! Identity allocation and the per-identity color palette.

/// Monotonic identity allocator.
///
/// Every call to [`allocate`](IdentityAllocator::allocate) returns a value
/// strictly greater than any value returned before. Identities are never
/// reused, even after the corresponding track has been deleted.
#[derive(Debug, Default)]
pub struct IdentityAllocator {
    next_id: u64,
}

impl IdentityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next identity, starting from 0.
    pub fn allocate(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The identity the next `allocate` call would return.
    pub fn peek(&self) -> u64 {
        self.next_id
    }
}

/// Deterministic pseudo-color for an identity.
///
/// The identity is mapped into a hue cycle (one tenth of a turn per
/// identity) at fixed saturation 0.8 and value 1.0, then converted to an
/// RGB triple. The derivation is a pure function of the identity, so the
/// same identity yields the same color on every call and across process
/// restarts.
pub fn color_for(identity: u64) -> [u8; 3] {
    let hue = (identity as f64 * 0.1) % 1.0;
    let (r, g, b) = hsv_to_rgb(hue, 0.8, 1.0);
    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
}

/// HSV to RGB, all channels in [0, 1].
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
