//! [`Canvas`] implementation on top of an egui painter.

use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};
use osc_core::{BoundingBox, Real, Vec2d};
use osc_sim::{Anchor, Canvas, Icon, Rgb};

use crate::symbols::draw_icon;

const FONT_SIZE: f32 = 15.0;

/// Paints canvas-local coordinates at `offset` in screen space.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    offset: Vec2,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2) -> Self {
        Self {
            painter,
            offset: origin.to_vec2(),
        }
    }

    fn pos(&self, p: Vec2d) -> Option<Pos2> {
        to_pos(p).map(|p| p + self.offset)
    }

    fn rect(&self, rect: BoundingBox) -> Option<Rect> {
        to_rect(rect).map(|r| r.translate(self.offset))
    }
}

pub fn to_color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// `None` for points that cannot be painted.
pub fn to_pos(p: Vec2d) -> Option<Pos2> {
    p.is_finite().then(|| Pos2::new(p.x as f32, p.y as f32))
}

pub fn to_rect(rect: BoundingBox) -> Option<Rect> {
    let min = to_pos(rect.origin())?;
    let size = Vec2::new(rect.width as f32, rect.height as f32);
    size.is_finite().then(|| Rect::from_min_size(min, size))
}

pub fn to_align(anchor: Anchor) -> Align2 {
    match anchor {
        Anchor::TopLeft => Align2::LEFT_TOP,
        Anchor::TopRight => Align2::RIGHT_TOP,
        Anchor::Center => Align2::CENTER_CENTER,
    }
}

impl Canvas for EguiCanvas<'_> {
    fn line(&mut self, from: Vec2d, to: Vec2d, color: Rgb, thickness: Real) {
        if let (Some(a), Some(b)) = (self.pos(from), self.pos(to)) {
            self.painter
                .line_segment([a, b], Stroke::new(thickness as f32, to_color(color)));
        }
    }

    fn circle(&mut self, center: Vec2d, radius: Real, color: Rgb) {
        if let Some(c) = self.pos(center).filter(|_| radius.is_finite()) {
            self.painter.circle_filled(c, radius as f32, to_color(color));
        }
    }

    fn rect_filled(&mut self, rect: BoundingBox, color: Rgb) {
        if let Some(r) = self.rect(rect) {
            self.painter.rect_filled(r, 0.0, to_color(color));
        }
    }

    fn rect_outline(&mut self, rect: BoundingBox, color: Rgb, thickness: Real) {
        if let Some(r) = self.rect(rect) {
            self.painter
                .rect_stroke(r, 0.0, Stroke::new(thickness as f32, to_color(color)));
        }
    }

    fn text(&mut self, pos: Vec2d, text: &str, color: Rgb, anchor: Anchor) {
        if let Some(p) = self.pos(pos) {
            self.painter.text(
                p,
                to_align(anchor),
                text,
                FontId::monospace(FONT_SIZE),
                to_color(color),
            );
        }
    }

    fn icon(&mut self, icon: Icon, rect: BoundingBox) {
        if let Some(r) = self.rect(rect) {
            draw_icon(self.painter, icon, r);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use osc_sim::palette;

    #[test]
    fn colours_map_channel_for_channel() {
        assert_eq!(to_color(palette::GREY), Color32::from_rgb(124, 124, 124));
        assert_eq!(to_color(palette::YELLOW), Color32::YELLOW);
    }

    #[test]
    fn non_finite_points_are_rejected() {
        assert_eq!(to_pos(Vec2d::new(1.0, 2.0)), Some(Pos2::new(1.0, 2.0)));
        assert_eq!(to_pos(Vec2d::new(f64::NAN, 2.0)), None);
        assert_eq!(to_pos(Vec2d::new(0.0, f64::INFINITY)), None);
    }

    #[test]
    fn rects_keep_origin_and_size() {
        let rect = to_rect(BoundingBox::new(20.0, 20.0, 30.0, 30.0)).unwrap();
        assert_eq!(rect.min, Pos2::new(20.0, 20.0));
        assert_eq!(rect.max, Pos2::new(50.0, 50.0));
        assert!(to_rect(BoundingBox::new(0.0, 0.0, f64::NAN, 1.0)).is_none());
    }

    #[test]
    fn anchors_map_to_alignment() {
        assert_eq!(to_align(Anchor::TopRight), Align2::RIGHT_TOP);
        assert_eq!(to_align(Anchor::Center), Align2::CENTER_CENTER);
    }
}
