//! Right-hand parameter editor for the selected entity.

use osc_core::{BoundingBox, EntityId, Real, Vec2d};
use osc_sim::{Anchor, Canvas, Icon, Nudge, palette};
use tracing::debug;

use crate::scene::Scene;

const ROW_HEIGHT: Real = 20.0;
const FIRST_ROW_TOP: Real = 20.0;
/// Distance from the right canvas edge to the right end of each label.
const LABEL_RIGHT_MARGIN: Real = 50.0;
const BUTTON_GAP: Real = 10.0;
const BUTTON_SIZE: Real = 16.0;

/// Laid-out row for one tunable parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorRow {
    pub name: &'static str,
    pub value: Real,
    /// Top-right corner of the label.
    pub label_pos: Vec2d,
    pub plus: BoundingBox,
    pub minus: BoundingBox,
}

impl EditorRow {
    pub fn text(&self) -> String {
        format!("{}:{:.5}", self.name, self.value)
    }
}

/// Lists the target's parameters with a ×1.1 and a ÷1.1 affordance each.
///
/// Values are not clamped; driving a parameter to zero or beyond is allowed.
#[derive(Debug, Clone)]
pub struct ParameterEditor {
    target: EntityId,
    canvas_width: Real,
}

impl ParameterEditor {
    pub fn new(target: EntityId, canvas_width: Real) -> Self {
        Self {
            target,
            canvas_width,
        }
    }

    pub fn target(&self) -> EntityId {
        self.target
    }

    pub fn set_canvas_width(&mut self, canvas_width: Real) {
        self.canvas_width = canvas_width;
    }

    /// Current layout; empty if the target no longer exists.
    pub fn rows(&self, scene: &Scene) -> Vec<EditorRow> {
        let Some(entity) = scene.get(self.target) else {
            return Vec::new();
        };

        let label_right = self.canvas_width - LABEL_RIGHT_MARGIN;
        entity
            .param_names()
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let top = i as Real * ROW_HEIGHT + FIRST_ROW_TOP;
                let plus = BoundingBox::new(label_right + BUTTON_GAP, top, BUTTON_SIZE, BUTTON_SIZE);
                let minus = BoundingBox::new(plus.right(), top, BUTTON_SIZE, BUTTON_SIZE);
                EditorRow {
                    name,
                    value: entity.param(name).unwrap_or(Real::NAN),
                    label_pos: Vec2d::new(label_right, top),
                    plus,
                    minus,
                }
            })
            .collect()
    }

    /// Apply the nudge under `pos`, if any. Returns the parameter and its new value.
    pub fn handle_click(&self, scene: &mut Scene, pos: Vec2d) -> Option<(&'static str, Real)> {
        let (name, nudge) = self.rows(scene).into_iter().find_map(|row| {
            if row.plus.contains(pos) {
                Some((row.name, Nudge::Up))
            } else if row.minus.contains(pos) {
                Some((row.name, Nudge::Down))
            } else {
                None
            }
        })?;

        let value = scene.get_mut(self.target)?.nudge_param(name, nudge)?;
        debug!(entity = %self.target, param = name, ?nudge, value, "parameter nudged");
        Some((name, value))
    }

    pub fn draw(&self, scene: &Scene, canvas: &mut dyn Canvas) {
        for row in self.rows(scene) {
            canvas.text(row.label_pos, &row.text(), palette::WHITE, Anchor::TopRight);
            canvas.icon(Icon::Plus, row.plus);
            canvas.icon(Icon::Minus, row.minus);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use osc_sim::{DrawList, SpringOscillator};

    fn setup() -> (Scene, EntityId, ParameterEditor) {
        let mut scene = Scene::new();
        let id = scene.push(SpringOscillator::new("Spring #1", Vec2d::ZERO, 70.0));
        (scene, id, ParameterEditor::new(id, 1200.0))
    }

    #[test]
    fn rows_follow_declared_order() {
        let (scene, _, editor) = setup();
        let rows = editor.rows(&scene);
        let names: Vec<_> = rows.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["rigidity", "time_step", "weight", "damping"]);
        assert_eq!(rows[2].label_pos, Vec2d::new(1150.0, 60.0));
        assert_eq!(rows[2].plus, BoundingBox::new(1160.0, 60.0, 16.0, 16.0));
        assert_eq!(rows[2].minus, BoundingBox::new(1176.0, 60.0, 16.0, 16.0));
        assert_eq!(rows[1].text(), "time_step:0.10000");
    }

    #[test]
    fn plus_and_minus_scale_by_one_point_one() {
        let (mut scene, id, editor) = setup();

        let (name, value) = editor.handle_click(&mut scene, Vec2d::new(1168.0, 68.0)).unwrap();
        assert_eq!(name, "weight");
        assert!((value - 1.1).abs() < 1e-12);

        editor.handle_click(&mut scene, Vec2d::new(1184.0, 68.0));
        editor.handle_click(&mut scene, Vec2d::new(1184.0, 68.0));
        let weight = scene.get(id).and_then(|e| e.param("weight")).unwrap();
        assert!((weight - 1.0 / 1.1).abs() < 1e-12);
    }

    #[test]
    fn clicks_between_affordances_do_nothing() {
        let (mut scene, _, editor) = setup();
        assert_eq!(editor.handle_click(&mut scene, Vec2d::new(600.0, 68.0)), None);
        assert_eq!(editor.handle_click(&mut scene, Vec2d::new(1168.0, 40.0)), None);
    }

    #[test]
    fn no_bounds_on_repeated_nudges() {
        let (mut scene, id, editor) = setup();
        for _ in 0..500 {
            editor.handle_click(&mut scene, Vec2d::new(1184.0, 28.0));
        }
        let rigidity = scene.get(id).and_then(|e| e.param("rigidity")).unwrap();
        assert!(rigidity > 0.0 && rigidity < 1e-20);
    }

    #[test]
    fn missing_target_renders_nothing() {
        let (mut scene, id, editor) = setup();
        scene.remove(id).unwrap();
        let mut list = DrawList::new();
        editor.draw(&scene, &mut list);
        assert!(list.is_empty());
        assert!(editor.rows(&scene).is_empty());
    }

    #[test]
    fn draw_lists_labels_and_icons() {
        let (scene, id, editor) = setup();
        let mut list = DrawList::new();
        editor.draw(&scene, &mut list);
        assert_eq!(list.icons().count(), 8);
        assert!(list.texts().any(|t| t == "weight:1.00000"));
        assert!(matches!(scene.get(id), Some(Entity::Spring(_))));
    }
}
