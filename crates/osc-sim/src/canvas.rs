//! Drawing primitives consumed by the models.
//!
//! The models only ever talk to a [`Canvas`]; the desktop front end maps
//! these calls onto its painter, and tests record them in a [`DrawList`].

use osc_core::{BoundingBox, Real, Vec2d};

/// 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Fixed colour palette.
pub mod palette {
    use super::Rgb;

    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const GREY: Rgb = Rgb(124, 124, 124);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
}

/// Which point of the text's bounding box `pos` refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    Center,
}

/// Iconography used by the toolbar, the editor and the swing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Move,
    Trash,
    SpawnSpring,
    SpawnSwing,
    PushButton,
    Plus,
    Minus,
}

/// A fixed-size 2-D surface, in canvas pixels.
pub trait Canvas {
    fn line(&mut self, from: Vec2d, to: Vec2d, color: Rgb, thickness: Real);
    fn circle(&mut self, center: Vec2d, radius: Real, color: Rgb);
    fn rect_filled(&mut self, rect: BoundingBox, color: Rgb);
    fn rect_outline(&mut self, rect: BoundingBox, color: Rgb, thickness: Real);
    fn text(&mut self, pos: Vec2d, text: &str, color: Rgb, anchor: Anchor);
    fn icon(&mut self, icon: Icon, rect: BoundingBox);
}

/// One recorded [`Canvas`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Vec2d,
        to: Vec2d,
        color: Rgb,
        thickness: Real,
    },
    Circle {
        center: Vec2d,
        radius: Real,
        color: Rgb,
    },
    RectFilled {
        rect: BoundingBox,
        color: Rgb,
    },
    RectOutline {
        rect: BoundingBox,
        color: Rgb,
        thickness: Real,
    },
    Text {
        pos: Vec2d,
        text: String,
        color: Rgb,
        anchor: Anchor,
    },
    Icon {
        icon: Icon,
        rect: BoundingBox,
    },
}

/// Canvas that records every call in order.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2d, Vec2d)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn icons(&self) -> impl Iterator<Item = (Icon, BoundingBox)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Icon { icon, rect } => Some((*icon, *rect)),
            _ => None,
        })
    }

    pub fn outlines(&self) -> impl Iterator<Item = (BoundingBox, Rgb)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::RectOutline { rect, color, .. } => Some((*rect, *color)),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn line(&mut self, from: Vec2d, to: Vec2d, color: Rgb, thickness: Real) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            thickness,
        });
    }

    fn circle(&mut self, center: Vec2d, radius: Real, color: Rgb) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn rect_filled(&mut self, rect: BoundingBox, color: Rgb) {
        self.commands.push(DrawCommand::RectFilled { rect, color });
    }

    fn rect_outline(&mut self, rect: BoundingBox, color: Rgb, thickness: Real) {
        self.commands.push(DrawCommand::RectOutline {
            rect,
            color,
            thickness,
        });
    }

    fn text(&mut self, pos: Vec2d, text: &str, color: Rgb, anchor: Anchor) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_owned(),
            color,
            anchor,
        });
    }

    fn icon(&mut self, icon: Icon, rect: BoundingBox) {
        self.commands.push(DrawCommand::Icon { icon, rect });
    }
}
