use egui::{Color32, Rect, Stroke, Vec2};
use osc_sim::Icon;

const INK: Color32 = Color32::WHITE;
const BUTTON_FILL: Color32 = Color32::from_rgb(60, 60, 60);

/// Draw `icon` scaled to fit `rect`.
pub fn draw_icon(painter: &egui::Painter, icon: Icon, rect: Rect) {
    let center = rect.center();
    let r = rect.width().min(rect.height()) * 0.5;
    let stroke = Stroke::new((r * 0.12).max(1.5), INK);

    match icon {
        Icon::Move => {
            painter.rect_filled(rect, 2.0, BUTTON_FILL);
            let arm = r * 0.7;
            for dir in [Vec2::X, -Vec2::X, Vec2::Y, -Vec2::Y] {
                let tip = center + dir * arm;
                let side = Vec2::new(-dir.y, dir.x) * r * 0.2;
                painter.line_segment([center, tip], stroke);
                painter.line_segment([tip, tip - dir * r * 0.25 + side], stroke);
                painter.line_segment([tip, tip - dir * r * 0.25 - side], stroke);
            }
        }
        Icon::Trash => {
            painter.rect_filled(rect, 2.0, BUTTON_FILL);
            let body = Rect::from_center_size(
                center + Vec2::new(0.0, r * 0.15),
                Vec2::new(r * 0.9, r * 1.1),
            );
            painter.rect_stroke(body, 1.0, stroke);
            let lid_y = body.top() - r * 0.15;
            painter.line_segment(
                [
                    egui::pos2(center.x - r * 0.6, lid_y),
                    egui::pos2(center.x + r * 0.6, lid_y),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(center.x - r * 0.15, lid_y - r * 0.15),
                    egui::pos2(center.x + r * 0.15, lid_y - r * 0.15),
                ],
                stroke,
            );
            for dx in [-0.2, 0.0, 0.2] {
                let x = center.x + r * dx;
                painter.line_segment(
                    [
                        egui::pos2(x, body.top() + r * 0.2),
                        egui::pos2(x, body.bottom() - r * 0.2),
                    ],
                    stroke,
                );
            }
        }
        Icon::SpawnSpring => {
            painter.rect_filled(rect, 2.0, BUTTON_FILL);
            let top = center.y - r * 0.75;
            let bottom = center.y + r * 0.35;
            let turns = 6;
            let step = (bottom - top) / turns as f32;
            let mut prev = egui::pos2(center.x, top);
            for i in 1..=turns {
                let x = if i == turns {
                    center.x
                } else if i % 2 == 0 {
                    center.x - r * 0.35
                } else {
                    center.x + r * 0.35
                };
                let next = egui::pos2(x, top + step * i as f32);
                painter.line_segment([prev, next], stroke);
                prev = next;
            }
            painter.circle_filled(egui::pos2(center.x, bottom + r * 0.2), r * 0.22, INK);
        }
        Icon::SpawnSwing => {
            painter.rect_filled(rect, 2.0, BUTTON_FILL);
            let pivot = egui::pos2(center.x - r * 0.3, center.y - r * 0.7);
            let bob = egui::pos2(center.x + r * 0.3, center.y + r * 0.4);
            painter.line_segment(
                [pivot - Vec2::X * r * 0.3, pivot + Vec2::X * r * 0.3],
                stroke,
            );
            painter.line_segment([pivot, bob], stroke);
            painter.circle_filled(bob, r * 0.25, INK);
        }
        Icon::PushButton => {
            painter.rect_filled(rect, r * 0.3, Color32::from_rgb(180, 40, 40));
            painter.circle_stroke(center, r * 0.55, stroke);
            painter.line_segment(
                [
                    center + Vec2::new(-r * 0.3, 0.0),
                    center + Vec2::new(r * 0.3, 0.0),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    center + Vec2::new(r * 0.1, -r * 0.2),
                    center + Vec2::new(r * 0.3, 0.0),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    center + Vec2::new(r * 0.1, r * 0.2),
                    center + Vec2::new(r * 0.3, 0.0),
                ],
                stroke,
            );
        }
        Icon::Plus => {
            painter.rect_filled(rect, 2.0, Color32::from_rgb(40, 120, 40));
            painter.line_segment(
                [center - Vec2::X * r * 0.6, center + Vec2::X * r * 0.6],
                stroke,
            );
            painter.line_segment(
                [center - Vec2::Y * r * 0.6, center + Vec2::Y * r * 0.6],
                stroke,
            );
        }
        Icon::Minus => {
            painter.rect_filled(rect, 2.0, Color32::from_rgb(140, 40, 40));
            painter.line_segment(
                [center - Vec2::X * r * 0.6, center + Vec2::X * r * 0.6],
                stroke,
            );
        }
    }
}
