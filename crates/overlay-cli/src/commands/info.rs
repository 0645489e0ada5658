//! Info command implementation
//!
//! Lists what the other commands accept.

use overlay::{
    error::Result,
    layout::{FIXED_SIZE_DIVISOR, FONT_SIZE_STEP, MIN_FONT_SIZE, START_FONT_SIZE},
    render::STROKE_OUTSET,
    Anchor, Color, FontVariant, BACKGROUND_COLORS, TEXT_COLORS,
};

use crate::cli::InfoArgs;

pub fn run(args: &InfoArgs) -> Result<()> {
    // If no specific flags, show all info
    let show_all = !args.colors && !args.positions && !args.variants;

    println!("Overlay v{}", env!("CARGO_PKG_VERSION"));
    println!();

    if show_all || args.colors {
        print_colors();
        println!();
    }

    if show_all || args.positions {
        print_positions();
        println!();
    }

    if show_all || args.variants {
        print_variants();
        if show_all {
            println!();
        }
    }

    if show_all {
        print_fit();
    }

    Ok(())
}

fn hex(color: Color) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}

fn print_colors() {
    println!("Text colors (outline in parentheses):");
    for (name, color) in TEXT_COLORS {
        println!(
            "  {:<13} {} ({})",
            name,
            hex(color),
            hex(color.stroke_contrast())
        );
    }
    println!();
    println!("Background colors (or `transparent`, or `image:<path>`):");
    for (name, color) in BACKGROUND_COLORS {
        println!("  {:<13} {}", name, hex(color));
    }
}

fn print_positions() {
    println!("Positions (--position; omit for fit to width):");
    for (keyword, _) in Anchor::ALL {
        println!("  {}", keyword);
    }
}

fn print_variants() {
    println!("Font variants (--variant):");
    for variant in FontVariant::ALL {
        println!("  {}", variant);
    }
}

fn print_fit() {
    println!("Fit to width:");
    println!(
        "  sizes {}px down to {}px in steps of {}px",
        START_FONT_SIZE, MIN_FONT_SIZE, FONT_SIZE_STEP
    );
    println!(
        "  fixed positions use canvas height / {} (at least {}px)",
        FIXED_SIZE_DIVISOR, MIN_FONT_SIZE
    );
    println!("  outline {}px", STROKE_OUTSET);
}
