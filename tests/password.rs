use std::collections::HashSet;

use passforge::pass::{self, CharClass, CharClasses, Level, Requirements};
use passforge::rng::Source;

fn subsets() -> impl Iterator<Item = CharClasses> {
    (0u8..16).map(|bits| CharClasses {
        lowercase: bits & 1 != 0,
        uppercase: bits & 2 != 0,
        numbers: bits & 4 != 0,
        symbols: bits & 8 != 0,
    })
}

#[test]
fn length_is_exact_once_classes_fit() {
    let mut rng = Source::new(Some(1));
    for classes in subsets() {
        for length in classes.count()..=40 {
            let password = pass::generate_with(length, classes, &mut rng);
            assert_eq!(password.chars().count(), length, "{classes:?}");
        }
    }
}

#[test]
fn every_subset_includes_its_classes() {
    let mut rng = Source::new(Some(2));
    for classes in subsets() {
        for _ in 0..50 {
            let password = pass::generate_with(classes.count().max(1), classes, &mut rng);
            for class in classes.enabled() {
                assert!(password.chars().any(|c| class.contains(c)));
            }
            for class in CharClass::ALL.into_iter().filter(|c| !classes.is_enabled(*c)) {
                if classes.is_empty() && class == CharClass::Lowercase {
                    continue;
                }
                assert!(!password.chars().any(|c| class.contains(c)));
            }
        }
    }
}

#[test]
fn more_classes_than_length_grows_result() {
    let mut rng = Source::new(Some(3));
    let password = pass::generate_with(1, CharClasses::all(), &mut rng);
    assert_eq!(password.len(), 4);
}

#[test]
fn consecutive_calls_differ() {
    let passwords: Vec<String> = (0..10)
        .map(|_| pass::generate(16, CharClasses::all()))
        .collect();
    let distinct: HashSet<&String> = passwords.iter().collect();
    assert!(distinct.len() > 1);
}

#[test]
fn generated_passwords_score_strong() {
    let password = pass::generate(16, CharClasses::all());
    let result = pass::score(&password);
    assert_eq!(result.score, 100);
    assert_eq!(result.level, Level::Strong);
}

#[test]
fn scoring_examples() {
    let empty = pass::score("");
    assert_eq!((empty.score, empty.label()), (0, "None"));

    assert_eq!(pass::score("abc").label(), "Weak");

    let strong = pass::score("Abcd1234!@#$efgh");
    assert_eq!(strong.label(), "Strong");
    assert!(strong.score > 85);

    assert!(pass::score("Abc123!").score < pass::score("Abc123!@#$defgh").score);
}

#[test]
fn adding_length_never_lowers_score() {
    let base = "aB3$";
    let mut password = String::from(base);
    let mut last = pass::score(&password).score;
    for c in "xyzxyzxyzxyzxyz".chars() {
        password.push(c);
        let next = pass::score(&password).score;
        assert!(next >= last);
        last = next;
    }
}

#[test]
fn validation_examples() {
    let min8 = Requirements {
        min_length: 8,
        ..Default::default()
    };
    assert!(!pass::validate("short", &min8));
    assert!(pass::validate("longenough", &min8));

    let all = Requirements::strict(12);
    assert!(pass::validate("Abcd1234!@#$", &all));
    assert!(!pass::validate("short", &all));
}

#[test]
fn charset_sizes() {
    assert_eq!(CharClass::Uppercase.chars().len(), 26);
    assert_eq!(CharClass::Lowercase.chars().len(), 26);
    assert_eq!(CharClass::Numbers.chars().len(), 10);
}
