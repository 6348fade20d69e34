//! Accuracy measurement using perceptual color difference metrics
//!
//! Uses CIEDE2000 (deltaE2000) as the primary metric for color difference.
//! Lab values are relative to D50, as everywhere in perceptual-core.

use perceptual_core::{Lab, delta_e_2000};

/// Statistics from a deltaE comparison
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    /// Mean deltaE across all samples
    pub mean: f64,
    /// Maximum deltaE
    pub max: f64,
    /// 95th percentile deltaE
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Summarize a set of deltaE values
    pub fn from_samples(mut delta_es: Vec<f64>) -> Self {
        delta_es.sort_by(f64::total_cmp);

        let count = delta_es.len();
        let mean = if count == 0 {
            0.0
        } else {
            delta_es.iter().sum::<f64>() / count as f64
        };
        let max = delta_es.last().copied().unwrap_or(0.0);
        let p95_idx = (count as f64 * 0.95) as usize;
        let p95 = delta_es.get(p95_idx).copied().unwrap_or(max);

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// Check if all differences are imperceptible (deltaE < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.max < 1.0
    }

    /// Check if differences are barely perceptible (deltaE < 2.0)
    pub fn is_good(&self) -> bool {
        self.max < 2.0
    }
}

impl std::fmt::Display for DeltaEStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={} mean={:.4} p95={:.4} max={:.4}",
            self.count, self.mean, self.p95, self.max
        )
    }
}

/// Pairwise deltaE2000 statistics of two equally long Lab sequences
pub fn compare_lab_samples(reference: &[Lab], result: &[Lab]) -> DeltaEStats {
    assert_eq!(reference.len(), result.len());

    let delta_es = reference
        .iter()
        .zip(result)
        .map(|(a, b)| delta_e_2000(*a, *b))
        .collect();
    DeltaEStats::from_samples(delta_es)
}
