// this_file: crates/overlay-unicode/src/bidi.rs

use icu_properties::{props::BidiMirroringGlyph, CodePointMapData, CodePointMapDataBorrowed};
use unicode_bidi::BidiInfo;

/// Reorder logical text into visual (left-to-right display) order
///
/// The paragraph direction is taken from the first strong character.
/// Each paragraph is treated as a single line; callers split on hard
/// line breaks before getting here. Characters that land in right-to-left
/// runs are swapped for their mirrored counterpart, so brackets keep
/// facing the right way once the line is drawn left to right.
pub fn reorder(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let bidi = BidiInfo::new(text, None);
    if !bidi.has_rtl() {
        return text.to_string();
    }

    let mirrors = CodePointMapData::<BidiMirroringGlyph>::new();
    let mut visual = String::with_capacity(text.len());
    for paragraph in &bidi.paragraphs {
        let (levels, runs) = bidi.visual_runs(paragraph, paragraph.range.clone());
        for run in runs {
            let chars = text[run.clone()].chars();
            if levels[run.start].is_rtl() {
                visual.extend(chars.rev().map(|ch| mirrored(mirrors, ch)));
            } else {
                visual.extend(chars);
            }
        }
    }
    visual
}

fn mirrored(mirrors: CodePointMapDataBorrowed<'static, BidiMirroringGlyph>, ch: char) -> char {
    let glyph = mirrors.get(ch);
    match glyph.mirroring_glyph {
        Some(mirror) if glyph.mirrored => mirror,
        _ => ch,
    }
}
