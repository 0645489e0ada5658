//! Render command implementation
//!
//! Reads the text, picks the font, runs the generator and writes a PNG.

use std::fs;
use std::io::{self, Read};

use overlay::prelude::*;

use super::{font_library, resolve_font};
use crate::cli::RenderArgs;

pub fn run(args: &RenderArgs, quiet: bool) -> Result<()> {
    let text = get_input_text(args)?;

    let library = font_library(&args.fonts)?;
    let generator = Generator::new(library);
    let (variant, font) = resolve_font(generator.library(), args.variant)?;
    log::debug!("Drawing with the {} font", variant);

    let canvas = CanvasSpec::new(args.size.width, args.size.height, args.margin)
        .with_background(args.background.clone());
    let style = StyleSpec {
        color: args.color,
        variant,
        mode: args.mode(),
    };
    let request = RenderRequest::new(text, canvas).with_style(style);

    let rendered = generator.generate_with_font(&request, font.as_ref())?;
    rendered.save_png(&args.output)?;

    if !quiet {
        eprintln!("Rendered to {}", args.output.display());
        eprintln!("  {}", rendered.summary);
    }
    Ok(())
}

fn get_input_text(args: &RenderArgs) -> Result<String> {
    // Priority: positional > --text-file > stdin
    if let Some(ref text) = args.text {
        return Ok(decode_escapes(text));
    }

    if let Some(ref path) = args.text_file {
        return Ok(fs::read_to_string(path)?);
    }

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

/// Expand `\n` and `\u{XXXX}` / `\uXXXX` so multi-line and Arabic text can
/// be typed in any shell
fn decode_escapes(text: &str) -> String {
    let mut result = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                chars.next();
                result.push('\n');
            },
            Some('u') => {
                chars.next(); // consume 'u'
                let braced = chars.peek() == Some(&'{');
                let (hex, closed) = if braced {
                    chars.next();
                    let mut hex = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        hex.push(c);
                    }
                    (hex, closed)
                } else {
                    (chars.by_ref().take(4).collect(), false)
                };
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if closed || !braced => result.push(decoded),
                    _ => {
                        // Not a valid escape: keep it as typed
                        result.push_str("\\u");
                        if braced {
                            result.push('{');
                        }
                        result.push_str(&hex);
                        if closed {
                            result.push('}');
                        }
                    },
                }
            },
            _ => result.push(ch),
        }
    }

    result
}
