//! Utility functions for the Topoviz crate.
//!
//! Random helpers shared by edge generation, random layer sizing and the
//! progress animation.

use rand::Rng;

/// Generate a random layer size in range [min, max] (inclusive).
///
/// # Examples
///
/// ```
/// use topoviz::utils::rand_size;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let val = rand_size(2, 6, &mut rng);
/// assert!(val >= 2 && val <= 6);
/// ```
#[inline]
pub fn rand_size<R: Rng>(min: usize, max: usize, rng: &mut R) -> usize {
    rng.gen_range(min..=max)
}

/// Draw an edge weight uniformly over [-1, 1].
///
/// Computed as `uniform(0, 1) * 2 - 1`, one independent draw per call.
///
/// # Examples
///
/// ```
/// use topoviz::utils::random_weight;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let w = random_weight(&mut rng);
/// assert!((-1.0..=1.0).contains(&w));
/// ```
#[inline]
pub fn random_weight<R: Rng>(rng: &mut R) -> f64 {
    rng.gen::<f64>() * 2.0 - 1.0
}
