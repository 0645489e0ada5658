use overlay_core::{
    types::{FittedLayout, PlacedLine, Position, PositionedLayout},
    Anchor, CanvasSpec, HAlign, VAlign,
};

/// Top-left corner of a block at one of the nine anchors
///
/// Each axis is resolved on its own: the near edge sits at `margin`, the
/// far edge at `margin` from the opposite side, and the middle rule
/// centers without looking at the margin. Coordinates are truncated and
/// may be negative when the block is larger than the canvas.
pub fn position(
    canvas_size: (u32, u32),
    block_size: (f32, f32),
    anchor: Anchor,
    margin: u32,
) -> Position {
    let (canvas_width, canvas_height) = (canvas_size.0 as f32, canvas_size.1 as f32);
    let (block_width, block_height) = block_size;
    let margin = margin as f32;

    let x = match anchor.horizontal {
        HAlign::Left => margin,
        HAlign::Right => canvas_width - block_width - margin,
        HAlign::Center => (canvas_width - block_width) / 2.0,
    };
    let y = match anchor.vertical {
        VAlign::Top => margin,
        VAlign::Bottom => canvas_height - block_height - margin,
        VAlign::Middle => (canvas_height - block_height) / 2.0,
    };

    Position::new(x as i32, y as i32)
}

/// Anchor a fitted block and give every line its own origin
///
/// Lines are aligned inside the block width by the anchor's horizontal
/// rule and stacked downward, each advancing the cursor by its own height.
pub fn place(layout: &FittedLayout, canvas: &CanvasSpec, anchor: Anchor) -> PositionedLayout {
    let origin = position(
        (canvas.width, canvas.height),
        (layout.width, layout.height),
        anchor,
        canvas.margin,
    );

    let mut cursor = origin.y as f32;
    let lines = layout
        .lines
        .iter()
        .map(|measured| {
            let offset = match anchor.horizontal {
                HAlign::Left => 0.0,
                HAlign::Right => layout.width - measured.width,
                HAlign::Center => (layout.width - measured.width) / 2.0,
            };
            let placed = PlacedLine {
                line: measured.line.clone(),
                position: Position::new(origin.x + offset as i32, cursor as i32),
                width: measured.width,
                height: measured.height,
            };
            cursor += measured.height;
            placed
        })
        .collect();

    PositionedLayout {
        font_size: layout.font_size,
        origin,
        width: layout.width,
        height: layout.height,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlay_core::types::{MeasuredLine, ShapedLine};

    fn anchor(keyword: &str) -> Anchor {
        keyword.parse().unwrap()
    }

    #[test]
    fn corners_and_center_of_the_grid() {
        let at = |k| position((1000, 800), (200.0, 100.0), anchor(k), 20);
        assert_eq!(at("Top Left"), Position::new(20, 20));
        assert_eq!(at("Bottom Right"), Position::new(780, 680));
        assert_eq!(at("Center"), Position::new(400, 350));
    }

    #[test]
    fn every_anchor_resolves_axes_independently() {
        let expected = [
            ("Top Left", 20, 20),
            ("Top Center", 400, 20),
            ("Top Right", 780, 20),
            ("Middle Left", 20, 350),
            ("Center", 400, 350),
            ("Middle Right", 780, 350),
            ("Bottom Left", 20, 680),
            ("Bottom Center", 400, 680),
            ("Bottom Right", 780, 680),
        ];
        for (keyword, x, y) in expected {
            assert_eq!(
                position((1000, 800), (200.0, 100.0), anchor(keyword), 20),
                Position::new(x, y),
                "{}",
                keyword
            );
        }
    }

    #[test]
    fn oversized_block_goes_negative() {
        let pos = position((100, 100), (300.0, 50.0), Anchor::CENTER, 10);
        assert_eq!(pos, Position::new(-100, 25));
        let pos = position((100, 100), (300.0, 50.0), anchor("Bottom Right"), 10);
        assert_eq!(pos, Position::new(-210, 40));
    }

    #[test]
    fn fractions_are_truncated() {
        let pos = position((101, 101), (50.0, 50.0), Anchor::CENTER, 0);
        assert_eq!(pos, Position::new(25, 25));
    }

    fn measured(text: &str, width: f32, height: f32) -> MeasuredLine {
        MeasuredLine {
            line: ShapedLine::new(text),
            width,
            height,
        }
    }

    #[test]
    fn lines_align_inside_the_block() {
        let fitted = FittedLayout::new(
            40.0,
            vec![measured("wide line", 200.0, 40.0), measured("short", 100.0, 30.0)],
        );
        let canvas = CanvasSpec::new(1000, 800, 20);

        let right = place(&fitted, &canvas, anchor("Top Right"));
        assert_eq!(right.origin, Position::new(780, 20));
        assert_eq!(right.lines[0].position, Position::new(780, 20));
        assert_eq!(right.lines[1].position, Position::new(880, 60));

        let center = place(&fitted, &canvas, anchor("Bottom Center"));
        assert_eq!(center.origin, Position::new(400, 710));
        assert_eq!(center.lines[1].position, Position::new(450, 750));

        let left = place(&fitted, &canvas, anchor("Middle Left"));
        assert!(left.lines.iter().all(|l| l.position.x == 20));
    }

    #[test]
    fn y_cursor_increases_line_by_line() {
        let fitted = FittedLayout::new(
            20.0,
            vec![
                measured("a", 10.0, 20.0),
                measured("b", 10.0, 25.0),
                measured("c", 10.0, 20.0),
            ],
        );
        let placed = place(&fitted, &CanvasSpec::new(200, 200, 0), anchor("Top Left"));
        let ys: Vec<i32> = placed.lines.iter().map(|l| l.position.y).collect();
        assert_eq!(ys, vec![0, 20, 45]);
        assert_eq!(placed.height, 65.0);
    }
}
