// this_file: crates/overlay-unicode/src/reshape.rs

//! Contextual Arabic letter forms via Unicode presentation forms.

use icu_properties::{props::JoiningType, CodePointMapData, CodePointMapDataBorrowed};

/// Letters with presentation forms: (letter, isolated form, form count).
///
/// Forms are consecutive code points in isolated, final, initial, medial
/// order. A count of 4 means the letter joins on both sides, 2 means it
/// only joins to the preceding letter, 1 means it never joins.
const LETTER_FORMS: &[(u32, u32, u8)] = &[
    (0x0621, 0xFE80, 1), // hamza
    (0x0622, 0xFE81, 2), // alef with madda above
    (0x0623, 0xFE83, 2), // alef with hamza above
    (0x0624, 0xFE85, 2), // waw with hamza above
    (0x0625, 0xFE87, 2), // alef with hamza below
    (0x0626, 0xFE89, 4), // yeh with hamza above
    (0x0627, 0xFE8D, 2), // alef
    (0x0628, 0xFE8F, 4), // beh
    (0x0629, 0xFE93, 2), // teh marbuta
    (0x062A, 0xFE95, 4), // teh
    (0x062B, 0xFE99, 4), // theh
    (0x062C, 0xFE9D, 4), // jeem
    (0x062D, 0xFEA1, 4), // hah
    (0x062E, 0xFEA5, 4), // khah
    (0x062F, 0xFEA9, 2), // dal
    (0x0630, 0xFEAB, 2), // thal
    (0x0631, 0xFEAD, 2), // reh
    (0x0632, 0xFEAF, 2), // zain
    (0x0633, 0xFEB1, 4), // seen
    (0x0634, 0xFEB5, 4), // sheen
    (0x0635, 0xFEB9, 4), // sad
    (0x0636, 0xFEBD, 4), // dad
    (0x0637, 0xFEC1, 4), // tah
    (0x0638, 0xFEC5, 4), // zah
    (0x0639, 0xFEC9, 4), // ain
    (0x063A, 0xFECD, 4), // ghain
    (0x0641, 0xFED1, 4), // feh
    (0x0642, 0xFED5, 4), // qaf
    (0x0643, 0xFED9, 4), // kaf
    (0x0644, 0xFEDD, 4), // lam
    (0x0645, 0xFEE1, 4), // meem
    (0x0646, 0xFEE5, 4), // noon
    (0x0647, 0xFEE9, 4), // heh
    (0x0648, 0xFEED, 2), // waw
    (0x0649, 0xFEEF, 2), // alef maksura
    (0x064A, 0xFEF1, 4), // yeh
    (0x067E, 0xFB56, 4), // peh
    (0x0686, 0xFB7A, 4), // tcheh
    (0x0698, 0xFB8A, 2), // jeh
    (0x06A9, 0xFB8E, 4), // keheh
    (0x06AF, 0xFB92, 4), // gaf
    (0x06CC, 0xFBFC, 4), // farsi yeh
];

const LAM: char = '\u{0644}';

/// Lam followed by one of these alefs fuses into a ligature: (alef, isolated, final)
const LAM_ALEF: &[(char, char, char)] = &[
    ('\u{0622}', '\u{FEF5}', '\u{FEF6}'),
    ('\u{0623}', '\u{FEF7}', '\u{FEF8}'),
    ('\u{0625}', '\u{FEF9}', '\u{FEFA}'),
    ('\u{0627}', '\u{FEFB}', '\u{FEFC}'),
];

/// How a character takes part in cursive joining
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Joining {
    /// Joins on both sides
    Dual,
    /// Joins only to the preceding letter
    Right,
    /// Tatweel, ZWJ: neighbours join through it
    Causing,
    /// Marks: skipped when looking for neighbours
    Transparent,
    None,
}

impl Joining {
    fn links_forward(self) -> bool {
        matches!(self, Joining::Dual | Joining::Causing)
    }

    fn links_backward(self) -> bool {
        matches!(self, Joining::Dual | Joining::Right | Joining::Causing)
    }
}

#[derive(Debug, Clone, Copy)]
struct Forms {
    first: u32,
    count: u8,
}

impl Forms {
    fn lookup(ch: char) -> Option<Self> {
        let cp = ch as u32;
        LETTER_FORMS
            .binary_search_by_key(&cp, |&(letter, _, _)| letter)
            .ok()
            .map(|idx| {
                let (_, first, count) = LETTER_FORMS[idx];
                Forms { first, count }
            })
    }

    fn nth(&self, n: u32) -> char {
        char::from_u32(self.first + n).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Pick the form for the given connections, degrading when a letter lacks it
    fn select(&self, joined_before: bool, joined_after: bool) -> char {
        let joined_after = joined_after && self.count == 4;
        let joined_before = joined_before && self.count >= 2;
        match (joined_before, joined_after) {
            (false, false) => self.nth(0),
            (true, false) => self.nth(1),
            (false, true) => self.nth(2),
            (true, true) => self.nth(3),
        }
    }
}

/// Substitutes Arabic letters with the presentation form their neighbours call for
pub struct ArabicReshaper {
    joining_map: CodePointMapDataBorrowed<'static, JoiningType>,
}

impl ArabicReshaper {
    /// Create a reshaper with ICU joining data baked in.
    pub fn new() -> Self {
        Self {
            joining_map: CodePointMapData::<JoiningType>::new(),
        }
    }

    fn joining(&self, ch: char) -> Joining {
        if let Some(forms) = Forms::lookup(ch) {
            return match forms.count {
                4 => Joining::Dual,
                2 => Joining::Right,
                _ => Joining::None,
            };
        }
        match self.joining_map.get(ch) {
            JoiningType::Transparent => Joining::Transparent,
            JoiningType::JoinCausing => Joining::Causing,
            JoiningType::DualJoining => Joining::Dual,
            JoiningType::RightJoining => Joining::Right,
            _ => Joining::None,
        }
    }

    fn neighbour<I>(&self, chars: I) -> Option<Joining>
    where
        I: Iterator<Item = char>,
    {
        chars
            .map(|ch| self.joining(ch))
            .find(|joining| *joining != Joining::Transparent)
    }

    /// Replace letters with contextual forms, logical order preserved
    pub fn reshape(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut output = String::with_capacity(text.len());
        let mut consumed: Option<usize> = None;

        for (idx, &ch) in chars.iter().enumerate() {
            if consumed == Some(idx) {
                continue;
            }

            let Some(forms) = Forms::lookup(ch) else {
                output.push(ch);
                continue;
            };

            let joining = self.joining(ch);
            let before = self.neighbour(chars[..idx].iter().rev().copied());
            let joined_before =
                joining.links_backward() && before.is_some_and(Joining::links_forward);

            if ch == LAM {
                if let Some((alef_idx, isolated, fin)) = self.lam_alef_at(&chars, idx) {
                    output.push(if joined_before { fin } else { isolated });
                    consumed = Some(alef_idx);
                    continue;
                }
            }

            let after = self.neighbour(chars[idx + 1..].iter().copied());
            let joined_after = joining.links_forward() && after.is_some_and(Joining::links_backward);

            output.push(forms.select(joined_before, joined_after));
        }

        output
    }

    /// Index of the alef fusing with the lam at `idx`, and the ligature forms
    fn lam_alef_at(&self, chars: &[char], idx: usize) -> Option<(usize, char, char)> {
        let (offset, next) = chars[idx + 1..]
            .iter()
            .enumerate()
            .find(|(_, &ch)| self.joining(ch) != Joining::Transparent)?;
        LAM_ALEF
            .iter()
            .find(|(alef, _, _)| alef == next)
            .map(|&(_, isolated, fin)| (idx + 1 + offset, isolated, fin))
    }
}

impl Default for ArabicReshaper {
    fn default() -> Self {
        Self::new()
    }
}

/// Reshape with a fresh [`ArabicReshaper`]
pub fn reshape(text: &str) -> String {
    ArabicReshaper::new().reshape(text)
}
