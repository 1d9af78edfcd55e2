//! Constrained palette generation.
//!
//! Candidates are taken from a regular grid over Lab space, filtered by gamut
//! and a user predicate, then clustered with k-means whose means are kept on
//! valid candidates (k-medoids in effect).

use log::debug;
use rand::Rng;

use crate::color::{Color, LabPoint};
use crate::error::{Error, Result};

/// Acceptance predicate over unit-scale Lab coordinates.
pub type CheckColor = fn(l: f64, a: f64, b: f64) -> bool;

#[derive(Clone, Copy)]
pub struct SoftPaletteSettings {
    pub check_color: Option<CheckColor>,
    /// Number of k-means passes.
    pub iterations: usize,
    /// Sample a finer grid (L every 0.01, a/b every 0.05 instead of 0.05 and 0.1).
    pub many_samples: bool,
}

impl Default for SoftPaletteSettings {
    fn default() -> Self {
        Self {
            check_color: None,
            iterations: 50,
            many_samples: false,
        }
    }
}

impl SoftPaletteSettings {
    fn check(&self, lab: &LabPoint) -> bool {
        Color::from_lab(*lab).is_valid()
            && self.check_color.map_or(true, |check| check(lab.l, lab.a, lab.b))
    }

    fn steps(&self) -> (f64, f64) {
        if self.many_samples {
            (0.01, 0.05)
        } else {
            (0.05, 0.1)
        }
    }
}

/// All grid points accepted by `settings`.
pub fn samples(settings: &SoftPaletteSettings) -> Vec<LabPoint> {
    let (dl, dab) = settings.steps();
    let l_steps = (1.0 / dl).round() as usize;
    let ab_steps = (2.0 / dab).round() as usize;

    let mut samples = Vec::new();
    for il in 0..=l_steps {
        for ia in 0..=ab_steps {
            for ib in 0..=ab_steps {
                let lab = LabPoint::new(
                    il as f64 * dl,
                    -1.0 + ia as f64 * dab,
                    -1.0 + ib as f64 * dab,
                );
                if settings.check(&lab) {
                    samples.push(lab);
                }
            }
        }
    }
    samples
}

fn closest(samples: &[LabPoint], target: &LabPoint) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, sample) in samples.iter().enumerate() {
        let distance = sample.distance(target);
        if distance < best_distance {
            best_distance = distance;
            best = i;
        }
    }
    best
}

/// Generates `count` colors, all satisfying `settings.check_color` and inside the sRGB gamut.
pub fn soft_palette<R: Rng + ?Sized>(
    count: usize,
    settings: &SoftPaletteSettings,
    rng: &mut R,
) -> Result<Vec<Color>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let samples = samples(settings);
    debug!("{} samples satisfy the palette constraint", samples.len());

    if samples.len() < count {
        return Err(Error::SamplingFailure {
            requested: count,
            available: samples.len(),
        });
    }
    if samples.len() == count {
        return Ok(samples.into_iter().map(Color::from_lab).collect());
    }

    // Initial means are distinct samples.
    let mut means: Vec<LabPoint> = Vec::with_capacity(count);
    while means.len() < count {
        let candidate = samples[rng.gen_range(0..samples.len())];
        if !means.contains(&candidate) {
            means.push(candidate);
        }
    }

    let mut clusters = vec![0usize; samples.len()];
    let mut used = vec![false; samples.len()];
    for _ in 0..settings.iterations {
        for (i, sample) in samples.iter().enumerate() {
            clusters[i] = closest(&means, sample);
            used[i] = means.contains(sample);
        }

        for (m, mean) in means.iter_mut().enumerate() {
            let mut sum = LabPoint::new(0.0, 0.0, 0.0);
            let mut members = 0usize;
            for (sample, _) in samples.iter().zip(&clusters).filter(|(_, &c)| c == m) {
                sum.l += sample.l;
                sum.a += sample.a;
                sum.b += sample.b;
                members += 1;
            }

            if members > 0 {
                let n = members as f64;
                *mean = LabPoint::new(sum.l / n, sum.a / n, sum.b / n);
            } else {
                // Empty cluster, restart it on a sample no mean sits on.
                let free: Vec<usize> = (0..samples.len()).filter(|&i| !used[i]).collect();
                if !free.is_empty() {
                    let i = free[rng.gen_range(0..free.len())];
                    *mean = samples[i];
                    used[i] = true;
                }
            }

            if !settings.check(mean) {
                *mean = samples[closest(&samples, mean)];
            }
        }
    }

    for mean in &means {
        debug!("palette mean L={:.4} a={:.4} b={:.4}", mean.l, mean.a, mean.b);
    }
    Ok(means.into_iter().map(Color::from_lab).collect())
}
