//! Seeded simplex noise in 2, 3 and 4 dimensions.
//!
//! A textual seed is hashed (FNV-1a) into a SplitMix64 stream that shuffles the permutation
//! table, so the same seed always yields the same field. Every sample lies in `[-1, 1]`.

use crate::foundation::error::{TweenlabError, TweenlabResult};
use crate::foundation::math::{Rng64, hash_seed};

const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

const GRAD4: [[f64; 4]; 32] = [
    [0.0, 1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0, -1.0],
    [0.0, 1.0, -1.0, 1.0],
    [0.0, 1.0, -1.0, -1.0],
    [0.0, -1.0, 1.0, 1.0],
    [0.0, -1.0, 1.0, -1.0],
    [0.0, -1.0, -1.0, 1.0],
    [0.0, -1.0, -1.0, -1.0],
    [1.0, 0.0, 1.0, 1.0],
    [1.0, 0.0, 1.0, -1.0],
    [1.0, 0.0, -1.0, 1.0],
    [1.0, 0.0, -1.0, -1.0],
    [-1.0, 0.0, 1.0, 1.0],
    [-1.0, 0.0, 1.0, -1.0],
    [-1.0, 0.0, -1.0, 1.0],
    [-1.0, 0.0, -1.0, -1.0],
    [1.0, 1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0, -1.0],
    [1.0, -1.0, 0.0, 1.0],
    [1.0, -1.0, 0.0, -1.0],
    [-1.0, 1.0, 0.0, 1.0],
    [-1.0, 1.0, 0.0, -1.0],
    [-1.0, -1.0, 0.0, 1.0],
    [-1.0, -1.0, 0.0, -1.0],
    [1.0, 1.0, 1.0, 0.0],
    [1.0, 1.0, -1.0, 0.0],
    [1.0, -1.0, 1.0, 0.0],
    [1.0, -1.0, -1.0, 0.0],
    [-1.0, 1.0, 1.0, 0.0],
    [-1.0, 1.0, -1.0, 0.0],
    [-1.0, -1.0, 1.0, 0.0],
    [-1.0, -1.0, -1.0, 0.0],
];

/// Fractal (multi-octave) summation settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Octaves {
    pub count: u32,
    pub lacunarity: f64,
    pub gain: f64,
}

impl Default for Octaves {
    fn default() -> Self {
        Self {
            count: 1,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }
}

impl Octaves {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> TweenlabResult<()> {
        if self.count == 0 || self.count > 12 {
            return Err(TweenlabError::validation("octave count must be in 1..=12"));
        }
        if !(self.lacunarity.is_finite() && self.lacunarity > 0.0) {
            return Err(TweenlabError::validation("lacunarity must be > 0"));
        }
        if !(self.gain.is_finite() && self.gain > 0.0) {
            return Err(TweenlabError::validation("gain must be > 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct NoiseField {
    seed: String,
    perm: [u8; 512],
}

impl NoiseField {
    pub fn new(seed: &str) -> Self {
        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);
        let mut rng = Rng64::new(hash_seed(seed));
        for i in (1..table.len()).rev() {
            let j = rng.next_below(i as u64 + 1) as usize;
            table.swap(i, j);
        }
        let perm = std::array::from_fn(|i| table[i & 255]);
        Self {
            seed: seed.to_owned(),
            perm,
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    #[inline]
    fn p(&self, i: usize) -> usize {
        usize::from(self.perm[i])
    }

    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        let f2 = 0.5 * (3f64.sqrt() - 1.0);
        let g2 = (3.0 - 3f64.sqrt()) / 6.0;

        let s = (x + y) * f2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * g2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + g2;
        let y1 = y0 - j1 as f64 + g2;
        let x2 = x0 - 1.0 + 2.0 * g2;
        let y2 = y0 - 1.0 + 2.0 * g2;

        let ii = wrap_index(i);
        let jj = wrap_index(j);
        let gi0 = self.p(ii + self.p(jj)) % 12;
        let gi1 = self.p(ii + i1 + self.p(jj + j1)) % 12;
        let gi2 = self.p(ii + 1 + self.p(jj + 1)) % 12;

        let corner = |gi: usize, x: f64, y: f64| {
            let t = 0.5 - x * x - y * y;
            if t < 0.0 {
                0.0
            } else {
                let g = GRAD3[gi];
                t.powi(4) * (g[0] * x + g[1] * y)
            }
        };

        let n = corner(gi0, x0, y0) + corner(gi1, x1, y1) + corner(gi2, x2, y2);
        (70.0 * n).clamp(-1.0, 1.0)
    }

    pub fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        const F3: f64 = 1.0 / 3.0;
        const G3: f64 = 1.0 / 6.0;

        let s = (x + y + z) * F3;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let k = (z + s).floor();
        let t = (i + j + k) * G3;
        let x0 = x - (i - t);
        let y0 = y - (j - t);
        let z0 = z - (k - t);

        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - i1 as f64 + G3;
        let y1 = y0 - j1 as f64 + G3;
        let z1 = z0 - k1 as f64 + G3;
        let x2 = x0 - i2 as f64 + 2.0 * G3;
        let y2 = y0 - j2 as f64 + 2.0 * G3;
        let z2 = z0 - k2 as f64 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = wrap_index(i);
        let jj = wrap_index(j);
        let kk = wrap_index(k);
        let gi0 = self.p(ii + self.p(jj + self.p(kk))) % 12;
        let gi1 = self.p(ii + i1 + self.p(jj + j1 + self.p(kk + k1))) % 12;
        let gi2 = self.p(ii + i2 + self.p(jj + j2 + self.p(kk + k2))) % 12;
        let gi3 = self.p(ii + 1 + self.p(jj + 1 + self.p(kk + 1))) % 12;

        let corner = |gi: usize, x: f64, y: f64, z: f64| {
            let t = 0.6 - x * x - y * y - z * z;
            if t < 0.0 {
                0.0
            } else {
                let g = GRAD3[gi];
                t.powi(4) * (g[0] * x + g[1] * y + g[2] * z)
            }
        };

        let n = corner(gi0, x0, y0, z0)
            + corner(gi1, x1, y1, z1)
            + corner(gi2, x2, y2, z2)
            + corner(gi3, x3, y3, z3);
        (32.0 * n).clamp(-1.0, 1.0)
    }

    pub fn noise4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let f4 = (5f64.sqrt() - 1.0) / 4.0;
        let g4 = (5.0 - 5f64.sqrt()) / 20.0;

        let s = (x + y + z + w) * f4;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let k = (z + s).floor();
        let l = (w + s).floor();
        let t = (i + j + k + l) * g4;
        let c0 = [x - (i - t), y - (j - t), z - (k - t), w - (l - t)];

        // Rank each axis to pick the simplex traversal order.
        let mut rank = [0usize; 4];
        for a in 0..4 {
            for b in (a + 1)..4 {
                if c0[a] > c0[b] {
                    rank[a] += 1;
                } else {
                    rank[b] += 1;
                }
            }
        }
        let step = |threshold: usize| rank.map(|r| usize::from(r >= threshold));
        let o1 = step(3);
        let o2 = step(2);
        let o3 = step(1);

        let offset = |o: [usize; 4], n: f64| {
            std::array::from_fn::<f64, 4, _>(|a| c0[a] - o[a] as f64 + n * g4)
        };
        let c1 = offset(o1, 1.0);
        let c2 = offset(o2, 2.0);
        let c3 = offset(o3, 3.0);
        let c4 = offset([1; 4], 4.0);

        let ii = wrap_index(i);
        let jj = wrap_index(j);
        let kk = wrap_index(k);
        let ll = wrap_index(l);
        let hash = |o: [usize; 4]| {
            let l = self.p(ll + o[3]);
            let k = self.p(kk + o[2] + l);
            let j = self.p(jj + o[1] + k);
            self.p(ii + o[0] + j) % 32
        };

        let corner = |gi: usize, c: [f64; 4]| {
            let t = 0.6 - c.iter().map(|v| v * v).sum::<f64>();
            if t < 0.0 {
                0.0
            } else {
                let g = GRAD4[gi];
                t.powi(4) * (g[0] * c[0] + g[1] * c[1] + g[2] * c[2] + g[3] * c[3])
            }
        };

        let n = corner(hash([0; 4]), c0)
            + corner(hash(o1), c1)
            + corner(hash(o2), c2)
            + corner(hash(o3), c3)
            + corner(hash([1; 4]), c4);
        (27.0 * n).clamp(-1.0, 1.0)
    }

    pub fn fbm2(&self, x: f64, y: f64, octaves: Octaves) -> f64 {
        fractal(octaves, |f| self.noise2(x * f, y * f))
    }

    pub fn fbm3(&self, x: f64, y: f64, z: f64, octaves: Octaves) -> f64 {
        fractal(octaves, |f| self.noise3(x * f, y * f, z * f))
    }

    pub fn fbm4(&self, x: f64, y: f64, z: f64, w: f64, octaves: Octaves) -> f64 {
        fractal(octaves, |f| self.noise4(x * f, y * f, z * f, w * f))
    }
}

/// Weighted octave sum, renormalised by the total amplitude so it stays in `[-1, 1]`.
fn fractal(octaves: Octaves, sample: impl Fn(f64) -> f64) -> f64 {
    let mut sum = 0.0;
    let mut norm = 0.0;
    let mut amp = 1.0;
    let mut freq = 1.0;
    for _ in 0..octaves.count.max(1) {
        sum += amp * sample(freq);
        norm += amp;
        amp *= octaves.gain;
        freq *= octaves.lacunarity;
    }
    crate::foundation::math::safe_ratio(sum, norm).clamp(-1.0, 1.0)
}

#[inline]
fn wrap_index(v: f64) -> usize {
    ((v as i64) & 255) as usize
}

pub fn noise2d(seed: &str, x: f64, y: f64) -> f64 {
    NoiseField::new(seed).noise2(x, y)
}

pub fn noise3d(seed: &str, x: f64, y: f64, z: f64) -> f64 {
    NoiseField::new(seed).noise3(x, y, z)
}

pub fn noise4d(seed: &str, x: f64, y: f64, z: f64, w: f64) -> f64 {
    NoiseField::new(seed).noise4(x, y, z, w)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/noise.rs"]
mod tests;
