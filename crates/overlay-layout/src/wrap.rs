use overlay_core::{traits::FontRef, types::ShapedLine};

/// Greedy word wrap of one shaped line
///
/// Tokens are joined by single spaces. A token goes on the current line
/// when the joined text still measures at most `max_width`; otherwise the
/// line is closed and the token starts the next one. A token wider than
/// `max_width` by itself becomes its own overflowing line. Blank input
/// yields no lines.
pub fn wrap(line: &ShapedLine, font: &dyn FontRef, size: f32, max_width: f32) -> Vec<ShapedLine> {
    let mut lines = Vec::new();
    let mut buffer = String::new();

    for token in line.tokens() {
        if buffer.is_empty() {
            buffer.push_str(token);
            continue;
        }

        let candidate = format!("{} {}", buffer, token);
        if font.text_width(&candidate, size) > max_width {
            lines.push(ShapedLine::new(std::mem::take(&mut buffer)));
            buffer.push_str(token);
        } else {
            buffer = candidate;
        }
    }

    if !buffer.is_empty() {
        lines.push(ShapedLine::new(buffer));
    }
    lines
}
