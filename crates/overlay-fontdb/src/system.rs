//! Likely locations of a usable regular system font
//!
//! Distributions differ a lot, so this only lists paths with a good
//! chance of existing. Nothing here is required: callers pass explicit
//! font paths when they have them.

use std::env;
use std::path::PathBuf;

/// Environment variable that overrides every built-in candidate
pub const FONT_ENV_VAR: &str = "OVERLAY_FONT";

/// Candidate regular fonts, best first; the env override leads when set
pub fn system_font_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(path) = env::var(FONT_ENV_VAR) {
        if !path.is_empty() {
            candidates.push(PathBuf::from(path));
        }
    }
    candidates.extend(platform_candidates());
    candidates
}

#[cfg(target_os = "linux")]
fn platform_candidates() -> Vec<PathBuf> {
    vec![
        // DejaVu carries Arabic presentation forms
        PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
        PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf"),
        PathBuf::from("/usr/share/fonts/dejavu/DejaVuSans.ttf"),
        // Noto
        PathBuf::from("/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf"),
        PathBuf::from("/usr/share/fonts/noto/NotoSans-Regular.ttf"),
        // FreeFont
        PathBuf::from("/usr/share/fonts/truetype/freefont/FreeSans.ttf"),
    ]
}

#[cfg(target_os = "macos")]
fn platform_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/System/Library/Fonts/Supplemental/Arial.ttf"),
        PathBuf::from("/Library/Fonts/Arial.ttf"),
        PathBuf::from("/System/Library/Fonts/Geneva.ttf"),
    ]
}

#[cfg(target_os = "windows")]
fn platform_candidates() -> Vec<PathBuf> {
    let root = env::var("WINDIR").unwrap_or_else(|_| "C:\\Windows".to_string());
    ["arial.ttf", "tahoma.ttf", "segoeui.ttf"]
        .iter()
        .map(|name| PathBuf::from(&root).join("Fonts").join(name))
        .collect()
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn platform_candidates() -> Vec<PathBuf> {
    Vec::new()
}
