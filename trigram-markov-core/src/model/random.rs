use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Returns a random source drawing integers in `[0, n)` from a `StdRng`
/// seeded with `seed`.
///
/// Two sources built from the same seed yield the same sequence, so a
/// generation can be replayed.
pub fn seeded(seed: u64) -> impl FnMut(usize) -> usize + 'static {
	let mut rng = StdRng::seed_from_u64(seed);
	move |n| rng.random_range(0..n)
}

/// Derives a seed from the wall clock (nanoseconds since the Unix epoch).
pub fn wall_clock_seed() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|d| d.as_nanos() as u64)
		.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn same_seed_same_sequence() {
		let mut first = seeded(42);
		let mut second = seeded(42);
		for n in 1..50 {
			let a = first(n);
			assert_eq!(a, second(n));
			assert!(a < n);
		}
	}
}
