//! Mode and spawn affordances along the top-left edge of the canvas.

use osc_core::{BoundingBox, Real, Vec2d};
use osc_sim::{Canvas, Icon, palette};

const BUTTON_SIZE: Real = 40.0;
const BUTTON_GAP: Real = 5.0;
const HIGHLIGHT_THICKNESS: Real = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Move,
    SpawnSpring,
    SpawnSwing,
    Trash,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Move, Tool::SpawnSpring, Tool::SpawnSwing, Tool::Trash];

    pub fn icon(self) -> Icon {
        match self {
            Tool::Move => Icon::Move,
            Tool::SpawnSpring => Icon::SpawnSpring,
            Tool::SpawnSwing => Icon::SpawnSwing,
            Tool::Trash => Icon::Trash,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toolbar {
    buttons: Vec<(Tool, BoundingBox)>,
}

impl Default for Toolbar {
    fn default() -> Self {
        let buttons = Tool::ALL
            .iter()
            .enumerate()
            .map(|(i, tool)| {
                let x = i as Real * (BUTTON_SIZE + BUTTON_GAP);
                (*tool, BoundingBox::new(x, 0.0, BUTTON_SIZE, BUTTON_SIZE))
            })
            .collect();
        Self { buttons }
    }
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(&self, tool: Tool) -> Option<BoundingBox> {
        self.buttons
            .iter()
            .find(|(t, _)| *t == tool)
            .map(|(_, rect)| *rect)
    }

    pub fn hit(&self, pos: Vec2d) -> Option<Tool> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(tool, _)| *tool)
    }

    /// Draw every affordance, outlining `active` if given.
    pub fn draw(&self, canvas: &mut dyn Canvas, active: Option<Tool>) {
        for (tool, rect) in &self.buttons {
            canvas.icon(tool.icon(), *rect);
            if Some(*tool) == active {
                let color = match tool {
                    Tool::Trash => palette::RED,
                    _ => palette::GREEN,
                };
                canvas.rect_outline(*rect, color, HIGHLIGHT_THICKNESS);
            }
        }
    }
}
