//! Pointer and keyboard interaction with the scene.

use osc_core::{EntityId, Real, Vec2d};
use osc_sim::{Canvas, palette};
use tracing::debug;

use crate::editor::ParameterEditor;
use crate::error::SceneResult;
use crate::scene::Scene;
use crate::spawn::{SpawnKind, Spawner};
use crate::toolbar::{Tool, Toolbar};

const MODE_OUTLINE_THICKNESS: Real = 3.0;

/// Top-level interpretation of clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    None,
    /// Dragging with the button held moves the entity under the pointer.
    Move,
    /// Clicking an entity deletes it.
    Remove,
}

impl Mode {
    /// Selecting the active mode again returns to [`Mode::None`].
    pub fn toggled(self, target: Mode) -> Mode {
        if self == target { Mode::None } else { target }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
}

/// Normalised input, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed.
    PointerDown { pos: Vec2d },
    /// Primary button released.
    PointerUp,
    PointerMoved { pos: Vec2d },
    Key(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Exit,
}

/// Maps pointer input onto the scene.
///
/// A click is resolved in three passes: toolbar affordances first (a hit
/// there consumes the click), then entities under the pointer according to
/// the current [`Mode`], then the open parameter editor's affordances. An
/// editor opened by this very click only appears afterwards, so it does not
/// see the click.
#[derive(Debug, Clone)]
pub struct InteractionController {
    mode: Mode,
    toolbar: Toolbar,
    spawner: Spawner,
    selected: Option<EntityId>,
    editor: Option<ParameterEditor>,
    button_down: bool,
    last_pointer: Option<Vec2d>,
    canvas_width: Real,
}

impl InteractionController {
    pub fn new(canvas_width: Real) -> Self {
        Self {
            mode: Mode::None,
            toolbar: Toolbar::new(),
            spawner: Spawner::new(),
            selected: None,
            editor: None,
            button_down: false,
            last_pointer: None,
            canvas_width,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected(&self) -> Option<EntityId> {
        self.selected
    }

    pub fn editor(&self) -> Option<&ParameterEditor> {
        self.editor.as_ref()
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn set_canvas_width(&mut self, canvas_width: Real) {
        self.canvas_width = canvas_width;
        if let Some(editor) = &mut self.editor {
            editor.set_canvas_width(canvas_width);
        }
    }

    pub fn handle(&mut self, scene: &mut Scene, event: InputEvent) -> SceneResult<ControlFlow> {
        match event {
            InputEvent::PointerDown { pos } => {
                self.button_down = true;
                self.last_pointer = Some(pos);
                self.click(scene, pos)?;
            }
            InputEvent::PointerUp => self.button_down = false,
            InputEvent::PointerMoved { pos } => self.pointer_moved(scene, pos)?,
            InputEvent::Key(Key::Escape) => return Ok(ControlFlow::Exit),
        }
        Ok(ControlFlow::Continue)
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!(from = ?self.mode, to = ?mode, "mode changed");
            self.mode = mode;
        }
    }

    fn click(&mut self, scene: &mut Scene, pos: Vec2d) -> SceneResult<()> {
        if let Some(tool) = self.toolbar.hit(pos) {
            return self.use_tool(scene, tool);
        }

        let mut editor_opened = false;
        match self.mode {
            Mode::Remove => {
                if let Some(id) = scene.hit_test(pos) {
                    let removed = scene.remove(id)?;
                    if self.selected.is_some_and(|s| removed.contains(&s)) {
                        self.deselect();
                    }
                }
            }
            Mode::None => {
                for id in scene.hit_all(pos) {
                    editor_opened |= self.select(id);
                    if let Some(entity) = scene.get_mut(id) {
                        let local = entity.bounds().to_local(pos);
                        entity.handle_click(local);
                    }
                }
            }
            Mode::Move => {}
        }

        if let Some(editor) = self.editor.as_ref().filter(|_| !editor_opened) {
            editor.handle_click(scene, pos);
        }
        Ok(())
    }

    fn use_tool(&mut self, scene: &mut Scene, tool: Tool) -> SceneResult<()> {
        match tool {
            Tool::Move => self.set_mode(self.mode.toggled(Mode::Move)),
            Tool::Trash => self.set_mode(self.mode.toggled(Mode::Remove)),
            Tool::SpawnSpring | Tool::SpawnSwing if self.mode == Mode::None => {
                let kind = match tool {
                    Tool::SpawnSwing => SpawnKind::Swing,
                    _ => SpawnKind::Spring,
                };
                self.spawner.spawn(scene, kind)?;
            }
            Tool::SpawnSpring | Tool::SpawnSwing => {
                debug!(mode = ?self.mode, "spawn ignored outside of normal mode");
            }
        }
        Ok(())
    }

    fn pointer_moved(&mut self, scene: &mut Scene, pos: Vec2d) -> SceneResult<()> {
        let delta = self.last_pointer.map_or(Vec2d::ZERO, |last| pos - last);
        self.last_pointer = Some(pos);

        if self.mode == Mode::Move && self.button_down {
            if let Some(id) = scene.hit_test(pos) {
                scene.translate(id, delta)?;
            }
        }
        Ok(())
    }

    /// Returns whether a new editor was opened for `id`.
    fn select(&mut self, id: EntityId) -> bool {
        let reopen = self.editor.as_ref().is_none_or(|e| e.target() != id);
        if reopen {
            debug!(entity = %id, "selected");
            self.editor = Some(ParameterEditor::new(id, self.canvas_width));
        }
        self.selected = Some(id);
        reopen
    }

    fn deselect(&mut self) {
        self.selected = None;
        self.editor = None;
    }

    /// Toolbar, mode outlines and the parameter editor, drawn over the scene.
    pub fn draw_overlay(&self, scene: &Scene, canvas: &mut dyn Canvas) {
        let outline = match self.mode {
            Mode::Move => Some(palette::BLUE),
            Mode::Remove => Some(palette::RED),
            Mode::None => None,
        };
        if let Some(color) = outline {
            for (_, entity) in scene.iter() {
                canvas.rect_outline(entity.bounds(), color, MODE_OUTLINE_THICKNESS);
            }
        }

        let active = match self.mode {
            Mode::Move => Some(Tool::Move),
            Mode::Remove => Some(Tool::Trash),
            Mode::None => None,
        };
        self.toolbar.draw(canvas, active);

        if let Some(editor) = &self.editor {
            editor.draw(scene, canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_active_mode_returns_to_none() {
        assert_eq!(Mode::None.toggled(Mode::Move), Mode::Move);
        assert_eq!(Mode::Move.toggled(Mode::Move), Mode::None);
        assert_eq!(Mode::Move.toggled(Mode::Remove), Mode::Remove);
        assert_eq!(Mode::Remove.toggled(Mode::Remove), Mode::None);
    }

    #[test]
    fn escape_requests_exit() {
        let mut scene = Scene::new();
        let mut ctl = InteractionController::new(1200.0);
        assert_eq!(
            ctl.handle(&mut scene, InputEvent::Key(Key::Escape)),
            Ok(ControlFlow::Exit)
        );
    }

    #[test]
    fn first_move_has_no_delta() {
        let mut scene = Scene::new();
        let mut ctl = InteractionController::new(1200.0);
        ctl.handle(&mut scene, InputEvent::PointerMoved { pos: Vec2d::new(5.0, 5.0) })
            .unwrap();
        assert_eq!(ctl.last_pointer, Some(Vec2d::new(5.0, 5.0)));
    }
}
