//! Draws the guide path onto a copy of the chart

use crate::constants::{ARROW_SIZE, GUIDE_COLOR, STROKE_WIDTH};
use crate::loader::SourceImage;
use crate::params::PathParameters;
use image::RgbImage;
use imageproc::drawing::{draw_filled_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: (i32, i32),
    pub to: (i32, i32),
}

impl Segment {
    fn new(from: (u32, u32), to: (u32, u32)) -> Self {
        Self {
            from: (from.0 as i32, from.1 as i32),
            to: (to.0 as i32, to.1 as i32),
        }
    }

    /// Pixels covered by a stroke of `width` along this segment.
    ///
    /// Segments are always axis-aligned; a zero-length one counts as vertical.
    fn stroke_rect(&self, width: u32) -> Rect {
        let half = (width / 2) as i32;
        let (x0, x1) = (self.from.0.min(self.to.0), self.from.0.max(self.to.0));
        let (y0, y1) = (self.from.1.min(self.to.1), self.from.1.max(self.to.1));
        if x0 == x1 {
            Rect::at(x0 - half, y0).of_size(width, (y1 - y0) as u32 + 1)
        } else {
            Rect::at(x0, y0 - half).of_size((x1 - x0) as u32 + 1, width)
        }
    }
}

/// The up-right-down-right path, in drawing order.
pub fn guide_segments(p: &PathParameters) -> [Segment; 4] {
    [
        Segment::new((p.start_x, p.base_y), (p.start_x, p.top_y)),
        Segment::new((p.start_x, p.top_y), (p.mid_x, p.top_y)),
        Segment::new((p.mid_x, p.top_y), (p.mid_x, p.turn_y)),
        Segment::new((p.mid_x, p.turn_y), (p.end_x, p.turn_y)),
    ]
}

/// Triangle with its tip on the terminal point, always pointing in +x.
pub fn arrowhead(p: &PathParameters) -> [Point<i32>; 3] {
    let (tip_x, tip_y) = (p.end_x as i32, p.turn_y as i32);
    let half = ARROW_SIZE / 2;
    [
        Point::new(tip_x, tip_y),
        Point::new(tip_x - ARROW_SIZE, tip_y - half),
        Point::new(tip_x - ARROW_SIZE, tip_y + half),
    ]
}

/// Renders the annotated chart. `source` is left untouched.
pub fn render(source: &SourceImage, params: &PathParameters) -> RgbImage {
    let mut img = source.pixels().clone();
    for segment in guide_segments(params) {
        draw_filled_rect_mut(&mut img, segment.stroke_rect(STROKE_WIDTH), GUIDE_COLOR);
    }
    draw_polygon_mut(&mut img, &arrowhead(params), GUIDE_COLOR);
    img
}
