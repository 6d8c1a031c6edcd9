//! Password generation.

use rand::Rng;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use super::charset::{self, CharClasses};

/// Generate a password from the OS random source.
pub fn generate(length: usize, classes: CharClasses) -> String {
    generate_with(length, classes, &mut OsRng)
}

/// Generate a password of `length` characters from `rng`.
///
/// The result holds at least one character from every enabled class. When
/// more classes are enabled than `length` allows, the result is longer than
/// requested instead of being truncated. An empty class set falls back to
/// lowercase.
pub fn generate_with<R: Rng + ?Sized>(length: usize, classes: CharClasses, rng: &mut R) -> String {
    let mut chars = charset::build(&classes);
    let mut buf: Vec<u8> = Vec::with_capacity(length.max(classes.count()));

    for class in classes.enabled() {
        buf.push(random_byte(class.chars(), rng));
    }

    while buf.len() < length {
        buf.push(random_byte(&chars, rng));
    }

    shuffle(&mut buf, rng);

    let pass = buf.iter().map(|&b| b as char).collect();
    buf.zeroize();
    chars.zeroize();
    pass
}

/// Generate `count` independent passwords.
pub fn generate_batch<R: Rng + ?Sized>(
    count: usize,
    length: usize,
    classes: CharClasses,
    rng: &mut R,
) -> Vec<String> {
    (0..count)
        .map(|_| generate_with(length, classes, rng))
        .collect()
}

#[inline]
fn random_byte<R: Rng + ?Sized>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.gen_range(0..chars.len())]
}

/// Fisher-Yates, last index down to 1.
#[inline]
fn shuffle<R: Rng + ?Sized>(chars: &mut [u8], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.gen_range(0..=i);
        chars.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CharClass;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn seeded() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(0x5eed)
    }

    #[test]
    fn exact_length_when_classes_fit() {
        let mut rng = seeded();
        for length in 4..=64 {
            let pass = generate_with(length, CharClasses::all(), &mut rng);
            assert_eq!(pass.chars().count(), length);
        }
    }

    #[test]
    fn every_enabled_class_is_present() {
        let mut rng = seeded();
        for _ in 0..200 {
            let pass = generate_with(4, CharClasses::all(), &mut rng);
            for class in CharClass::ALL {
                assert!(pass.chars().any(|c| class.contains(c)), "{pass} lacks {}", class.name());
            }
        }
    }

    #[test]
    fn disabled_classes_are_absent() {
        let mut rng = seeded();
        let classes = CharClasses {
            uppercase: false,
            symbols: false,
            ..CharClasses::all()
        };
        let pass = generate_with(64, classes, &mut rng);
        assert!(pass.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn short_length_is_not_truncated() {
        let mut rng = seeded();
        assert_eq!(generate_with(2, CharClasses::all(), &mut rng).len(), 4);
        assert_eq!(generate_with(0, CharClasses::all(), &mut rng).len(), 4);
    }

    #[test]
    fn empty_selection_uses_lowercase() {
        let mut rng = seeded();
        let pass = generate_with(20, CharClasses::none(), &mut rng);
        assert_eq!(pass.len(), 20);
        assert!(pass.chars().all(|c| c.is_ascii_lowercase()));
        assert!(generate_with(0, CharClasses::none(), &mut rng).is_empty());
    }

    #[test]
    fn same_seed_same_password() {
        let a = generate_with(16, CharClasses::all(), &mut seeded());
        let b = generate_with(16, CharClasses::all(), &mut seeded());
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_spreads_leading_class() {
        // Lowercase is always drawn first; after shuffling it must not stick to index 0.
        let mut rng = seeded();
        let classes = CharClasses {
            lowercase: true,
            uppercase: true,
            ..CharClasses::none()
        };
        let mut first_upper = 0;
        for _ in 0..500 {
            let pass = generate_with(2, classes, &mut rng);
            if pass.starts_with(|c: char| c.is_ascii_uppercase()) {
                first_upper += 1;
            }
        }
        assert!((150..350).contains(&first_upper), "{first_upper}");
    }

    #[test]
    fn shuffle_keeps_multiset() {
        let mut rng = seeded();
        let mut chars = *b"aabbccdd";
        shuffle(&mut chars, &mut rng);
        chars.sort_unstable();
        assert_eq!(&chars, b"aabbccdd");
    }

    #[test]
    fn batch_yields_count_passwords() {
        let mut rng = seeded();
        let batch = generate_batch(5, 12, CharClasses::all(), &mut rng);
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|p| p.len() == 12));
    }

    #[test]
    fn os_source_is_not_repeating() {
        let passwords: Vec<String> = (0..5).map(|_| generate(16, CharClasses::all())).collect();
        assert!(passwords.windows(2).any(|w| w[0] != w[1]));
    }
}
