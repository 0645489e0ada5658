//! One module per subcommand, plus the font handling they share

pub mod batch;
pub mod info;
pub mod render;

use std::sync::Arc;

use overlay::{
    error::{OverlayError, Result},
    fontdb::{Font, FontLibrary},
    prelude::FontVariant,
};

use crate::cli::FontArgs;

/// Library with every font given on the command line
///
/// Without `--font`, the regular variant comes from the system.
pub fn font_library(args: &FontArgs) -> Result<FontLibrary> {
    let mut library = match &args.font {
        Some(path) => FontLibrary::new().with_font(FontVariant::Regular, path),
        None => FontLibrary::from_system().ok_or_else(|| {
            OverlayError::ConfigError(format!(
                "no font given: pass --font or set {}",
                overlay::fontdb::FONT_ENV_VAR
            ))
        })?,
    };

    let variants = [
        (FontVariant::Bold, &args.font_bold),
        (FontVariant::Italic, &args.font_italic),
        (FontVariant::BoldItalic, &args.font_bold_italic),
        (FontVariant::Special, &args.font_special),
    ];
    for (variant, path) in variants {
        if let Some(path) = path {
            library.set_font(variant, path);
        }
    }
    Ok(library)
}

/// Load `variant`, falling back to the regular font with a warning
pub fn resolve_font(library: &FontLibrary, variant: FontVariant) -> Result<(FontVariant, Arc<Font>)> {
    match library.load(variant) {
        Ok(font) => Ok((variant, font)),
        Err(e) if variant != FontVariant::Regular => {
            log::warn!("{} font unavailable ({}), using regular", variant, e);
            library
                .load(FontVariant::Regular)
                .map(|font| (FontVariant::Regular, font))
        },
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_fonts_are_configured_per_variant() {
        let args = FontArgs {
            font: Some("regular.ttf".into()),
            font_bold: Some("bold.ttf".into()),
            font_italic: None,
            font_bold_italic: None,
            font_special: Some("quran.ttf".into()),
        };
        let library = font_library(&args).unwrap();
        assert!(library.has_variant(FontVariant::Regular));
        assert!(library.has_variant(FontVariant::Bold));
        assert!(!library.has_variant(FontVariant::Italic));
        assert_eq!(
            library.path(FontVariant::Special),
            Some(std::path::Path::new("quran.ttf"))
        );
    }

    #[test]
    fn test_fallback_still_fails_without_regular() {
        let library = FontLibrary::new().with_font(FontVariant::Regular, "/no/such/regular.ttf");
        let result = resolve_font(&library, FontVariant::Bold);
        assert!(matches!(result, Err(OverlayError::FontUnavailable(_))));
    }
}
