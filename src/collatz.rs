//! Collatz sequence generator.
//!
//! `n → n/2` for even n, `n → 3n + 1` for odd n, until 1 is reached.
//! Termination is only conjectured, so every call carries an explicit
//! step cap and reports [`OctaveError::NonTermination`] when it is hit.

use crate::error::{OctaveError, Result};

/// Default iteration cap. Seeds 1..=20 need at most 20 steps.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Single Collatz step. `None` on u64 overflow.
#[inline]
pub fn step(n: u64) -> Option<u64> {
    if n % 2 == 0 {
        Some(n / 2)
    } else {
        n.checked_mul(3)?.checked_add(1)
    }
}

/// Generate the sequence for `seed`, including the seed and the final 1.
pub fn generate(seed: u64) -> Result<Vec<u64>> {
    generate_capped(seed, DEFAULT_MAX_STEPS)
}

/// Generate with an explicit step cap.
///
/// `max_steps` bounds the number of transitions, so the returned sequence
/// holds at most `max_steps + 1` values.
pub fn generate_capped(seed: u64, max_steps: usize) -> Result<Vec<u64>> {
    if seed == 0 {
        return Err(OctaveError::InvalidSeed(seed));
    }

    let mut sequence = vec![seed];
    let mut n = seed;
    while n != 1 {
        if sequence.len() > max_steps {
            return Err(OctaveError::NonTermination {
                seed,
                steps: max_steps,
            });
        }
        n = step(n).ok_or(OctaveError::Overflow { seed, value: n })?;
        sequence.push(n);
    }
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_1_to_20_reach_one() {
        for n in 1..=20 {
            let seq = generate(n).unwrap();
            assert_eq!(seq[0], n);
            assert_eq!(*seq.last().unwrap(), 1, "seed {n}");
            assert!(seq.iter().all(|&v| v >= 1));
        }
    }

    #[test]
    fn known_sequences() {
        assert_eq!(generate(1).unwrap(), vec![1]);
        assert_eq!(generate(2).unwrap(), vec![2, 1]);
        assert_eq!(
            generate(7).unwrap(),
            vec![7, 22, 11, 34, 17, 52, 26, 13, 40, 20, 10, 5, 16, 8, 4, 2, 1]
        );
    }

    #[test]
    fn length_of_18_and_19() {
        assert_eq!(generate(18).unwrap().len(), 21);
        assert_eq!(generate(19).unwrap().len(), 21);
    }

    #[test]
    fn zero_is_rejected() {
        assert!(matches!(generate(0), Err(OctaveError::InvalidSeed(0))));
    }

    #[test]
    fn cap_reports_non_termination() {
        // 7 needs 16 steps
        match generate_capped(7, 5) {
            Err(OctaveError::NonTermination { seed, steps }) => {
                assert_eq!(seed, 7);
                assert_eq!(steps, 5);
            }
            other => panic!("expected NonTermination, got {:?}", other),
        }
        assert_eq!(generate_capped(7, 16).unwrap().len(), 17);
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(step(u64::MAX), None);
        assert!(matches!(
            generate(u64::MAX),
            Err(OctaveError::Overflow { seed: u64::MAX, .. })
        ));
    }
}
