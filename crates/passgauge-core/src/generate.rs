//! Password suggestion generation.
//!
//! Generated suggestions always contain at least one character from each of
//! the four classes the analyzer recognizes. Randomness comes in through
//! the caller's [`Rng`] so everything else in the crate stays deterministic
//! under test; [`generate`] is the thread-RNG convenience wrapper.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::GenerateError;

/// Lowercase class alphabet.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
/// Uppercase class alphabet.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Digit class alphabet.
pub const DIGITS: &[u8] = b"0123456789";
/// Special class alphabet used for suggestions.
pub const SPECIALS: &[u8] = b"!@#$%&*?_-+=";

/// Shortest generatable password: one character per required class.
pub const MIN_LENGTH: usize = 4;
/// Suggestion length used when the caller does not pick one.
pub const DEFAULT_LENGTH: usize = 14;

/// Generate a suggestion of `length` characters from `rng`.
///
/// One character is drawn from each class first, the remaining positions
/// are filled uniformly from the union of all classes, and the whole
/// sequence is shuffled so the guaranteed characters do not cluster at the
/// front.
///
/// # Errors
///
/// [`GenerateError::LengthTooShort`] when `length < MIN_LENGTH`.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<String, GenerateError> {
    if length < MIN_LENGTH {
        return Err(GenerateError::LengthTooShort {
            length,
            min: MIN_LENGTH,
        });
    }

    let mut bytes = Vec::with_capacity(length);
    for class in [LOWERCASE, UPPERCASE, DIGITS, SPECIALS] {
        bytes.push(class[rng.gen_range(0..class.len())]);
    }

    let union: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SPECIALS].concat();
    while bytes.len() < length {
        bytes.push(union[rng.gen_range(0..union.len())]);
    }

    bytes.shuffle(rng);

    // Class alphabets are ASCII, so bytes map 1:1 to chars.
    Ok(bytes.into_iter().map(char::from).collect())
}

/// Generate a suggestion of `length` characters from the thread RNG.
///
/// # Errors
///
/// [`GenerateError::LengthTooShort`] when `length < MIN_LENGTH`.
pub fn generate(length: usize) -> Result<String, GenerateError> {
    generate_with(&mut rand::thread_rng(), length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn has_class(s: &str, class: &[u8]) -> bool {
        s.bytes().any(|b| class.contains(&b))
    }

    #[test]
    fn covers_all_classes_at_default_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let pass = generate_with(&mut rng, DEFAULT_LENGTH).unwrap();
            assert_eq!(pass.chars().count(), 14);
            assert!(has_class(&pass, LOWERCASE));
            assert!(has_class(&pass, UPPERCASE));
            assert!(has_class(&pass, DIGITS));
            assert!(has_class(&pass, SPECIALS));
        }
    }

    #[test]
    fn minimum_length_is_one_of_each() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let pass = generate_with(&mut rng, MIN_LENGTH).unwrap();
            assert_eq!(pass.len(), 4);
            assert!(has_class(&pass, LOWERCASE));
            assert!(has_class(&pass, UPPERCASE));
            assert!(has_class(&pass, DIGITS));
            assert!(has_class(&pass, SPECIALS));
        }
    }

    #[test]
    fn only_draws_from_the_union() {
        let union: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SPECIALS].concat();
        let mut rng = StdRng::seed_from_u64(1);
        let pass = generate_with(&mut rng, 64).unwrap();
        assert!(pass.bytes().all(|b| union.contains(&b)));
    }

    #[test]
    fn too_short_errors() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = generate_with(&mut rng, 3);
        assert_eq!(
            result.unwrap_err(),
            GenerateError::LengthTooShort { length: 3, min: 4 }
        );
    }

    #[test]
    fn thread_rng_wrapper_generates() {
        let pass = generate(DEFAULT_LENGTH).unwrap();
        assert_eq!(pass.chars().count(), DEFAULT_LENGTH);
    }
}
