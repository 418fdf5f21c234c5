//! Per-frame application context.

use osc_core::{BoundingBox, Vec2d};
use osc_sim::{Canvas, palette};

use crate::controller::{ControlFlow, InputEvent, InteractionController};
use crate::error::SceneResult;
use crate::scene::Scene;

/// Everything one frame needs, passed explicitly instead of living in
/// process-wide globals: the scene, its controller, the canvas size and
/// the frame counter.
#[derive(Debug)]
pub struct AppContext {
    pub scene: Scene,
    pub controller: InteractionController,
    canvas_size: Vec2d,
    frame: u64,
}

impl AppContext {
    pub fn new(canvas_size: Vec2d) -> Self {
        Self {
            scene: Scene::new(),
            controller: InteractionController::new(canvas_size.x),
            canvas_size,
            frame: 0,
        }
    }

    pub fn canvas_size(&self) -> Vec2d {
        self.canvas_size
    }

    /// Frames completed so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn resize(&mut self, canvas_size: Vec2d) {
        if canvas_size != self.canvas_size {
            self.canvas_size = canvas_size;
            self.controller.set_canvas_width(canvas_size.x);
        }
    }

    /// Run one frame: clear, step and draw every entity, consume `events`,
    /// then draw the interaction overlay.
    ///
    /// Events after an exit request are dropped.
    pub fn frame(
        &mut self,
        canvas: &mut dyn Canvas,
        events: impl IntoIterator<Item = InputEvent>,
    ) -> SceneResult<ControlFlow> {
        canvas.rect_filled(self.bounds(), palette::BLACK);

        self.scene.step_all(canvas);

        let mut flow = ControlFlow::Continue;
        for event in events {
            flow = self.controller.handle(&mut self.scene, event)?;
            if flow == ControlFlow::Exit {
                break;
            }
        }

        self.controller.draw_overlay(&self.scene, canvas);
        self.frame += 1;
        Ok(flow)
    }

    /// Repaint the current state without stepping or consuming input.
    ///
    /// Used when the surface must be redrawn between paced frames.
    pub fn redraw(&self, canvas: &mut dyn Canvas) {
        canvas.rect_filled(self.bounds(), palette::BLACK);
        self.scene.draw_all(canvas);
        self.controller.draw_overlay(&self.scene, canvas);
    }

    fn bounds(&self) -> BoundingBox {
        BoundingBox::new(0.0, 0.0, self.canvas_size.x, self.canvas_size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Key;
    use osc_sim::DrawList;

    #[test]
    fn frame_counter_advances() {
        let mut ctx = AppContext::new(Vec2d::new(1200.0, 800.0));
        let mut canvas = DrawList::new();
        for _ in 0..3 {
            ctx.frame(&mut canvas, std::iter::empty()).unwrap();
        }
        assert_eq!(ctx.frame_count(), 3);
    }

    #[test]
    fn redraw_leaves_frame_counter_alone() {
        let mut ctx = AppContext::new(Vec2d::new(1200.0, 800.0));
        let mut canvas = DrawList::new();
        ctx.redraw(&mut canvas);
        assert_eq!(ctx.frame_count(), 0);
        // Background plus the four toolbar icons.
        assert_eq!(canvas.len(), 5);
        ctx.resize(Vec2d::new(800.0, 600.0));
        assert_eq!(ctx.canvas_size(), Vec2d::new(800.0, 600.0));
    }

    #[test]
    fn exit_stops_event_processing() {
        let mut ctx = AppContext::new(Vec2d::new(1200.0, 800.0));
        let mut canvas = DrawList::new();
        let flow = ctx
            .frame(
                &mut canvas,
                [
                    InputEvent::Key(Key::Escape),
                    InputEvent::PointerDown {
                        pos: Vec2d::new(60.0, 20.0),
                    },
                ],
            )
            .unwrap();
        assert_eq!(flow, ControlFlow::Exit);
        assert!(ctx.scene.is_empty());
    }
}
