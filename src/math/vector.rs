use rand::Rng;
use std::f64::consts::PI;

/// Dot product of two equal-length vectors.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "vectors must have equal length");
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Samples a single value from N(0, 1) using the Box-Muller transform.
/// Both u1 and u2 must be uniform on (0, 1].
fn sample_standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // Draw two independent uniform samples in (0, 1] to avoid log(0).
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = 1.0 - rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// A vector of `len` independent N(0, 1) samples.
///
/// Takes the generator by reference so callers can inject a seeded `StdRng`
/// for reproducible runs.
pub fn random_normal_vector<R: Rng>(len: usize, rng: &mut R) -> Vec<f64> {
    (0..len).map(|_| sample_standard_normal(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn dot_product() {
        assert_eq!(dot(&[1.0, 1.0], &[1.0, 1.0]), 2.0);
        assert_eq!(dot(&[1.0, 2.0], &[3.0, -1.0]), 1.0);
        assert_eq!(dot(&[], &[]), 0.0);
    }

    #[test]
    #[should_panic(expected = "vectors must have equal length")]
    fn dot_length_mismatch() {
        dot(&[1.0], &[1.0, 2.0]);
    }

    #[test]
    fn normal_vector_is_seeded() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(random_normal_vector(8, &mut a), random_normal_vector(8, &mut b));
    }

    #[test]
    fn normal_samples_are_finite() {
        let mut rng = StdRng::seed_from_u64(7);
        for x in random_normal_vector(1000, &mut rng) {
            assert!(x.is_finite());
        }
    }
}
