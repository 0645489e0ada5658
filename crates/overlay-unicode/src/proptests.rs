use super::*;
use proptest::prelude::*;

// Latin letters, spaces, and Arabic letters without lam (so no ligatures)
const MIXED: &str = "[a-z ابتثجحخدذرزسشصضطظعغفقكمنهوي]{0,40}";

// Property: shaping never invents or drops characters when no ligature forms
proptest! {
    #[test]
    fn prop_shape_preserves_char_count(s in MIXED) {
        let shaped = shape(&s);
        prop_assert_eq!(shaped.as_str().chars().count(), s.chars().count());
    }
}

// Property: Latin letters and spaces survive untouched, only moved
proptest! {
    #[test]
    fn prop_shape_keeps_latin_and_spaces(s in MIXED) {
        let shaped = shape(&s);
        let mut before: Vec<char> = s.chars().filter(|c| c.is_ascii()).collect();
        let mut after: Vec<char> = shaped.as_str().chars().filter(|c| c.is_ascii()).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }
}

// Property: ligatures only ever shrink a line
proptest! {
    #[test]
    fn prop_reshape_never_grows(s in "[ لاب]{0,30}") {
        prop_assert!(reshape(&s).chars().count() <= s.chars().count());
    }
}

// Property: pure ASCII is returned unchanged
proptest! {
    #[test]
    fn prop_ascii_identity(s in "[ -~]{0,60}") {
        let shaped = shape(&s);
        prop_assert_eq!(shaped.as_str(), s.as_str());
    }
}
