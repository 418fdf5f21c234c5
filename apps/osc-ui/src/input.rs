//! Translation from raw egui events to canvas-local input events.

use egui::{Event, PointerButton, Pos2, Rect};
use osc_app::{InputEvent, Key};
use osc_core::Vec2d;

fn to_local(pos: Pos2, canvas: Rect) -> Vec2d {
    let local = pos - canvas.min;
    Vec2d::new(local.x as f64, local.y as f64)
}

/// Keep primary-button presses that land on the canvas, every release,
/// every pointer move, and Escape presses.
pub fn translate_events(events: &[Event], canvas: Rect) -> Vec<InputEvent> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                ..
            } => {
                if !*pressed {
                    Some(InputEvent::PointerUp)
                } else if canvas.contains(*pos) {
                    Some(InputEvent::PointerDown {
                        pos: to_local(*pos, canvas),
                    })
                } else {
                    None
                }
            }
            Event::PointerMoved(pos) => Some(InputEvent::PointerMoved {
                pos: to_local(*pos, canvas),
            }),
            Event::Key {
                key: egui::Key::Escape,
                pressed: true,
                ..
            } => Some(InputEvent::Key(Key::Escape)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Modifiers, pos2};

    fn canvas() -> Rect {
        Rect::from_min_max(pos2(10.0, 30.0), pos2(910.0, 630.0))
    }

    fn button(pos: Pos2, pressed: bool, button: PointerButton) -> Event {
        Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn press_on_canvas_is_local() {
        let events = [button(pos2(110.0, 80.0), true, PointerButton::Primary)];
        assert_eq!(
            translate_events(&events, canvas()),
            vec![InputEvent::PointerDown {
                pos: Vec2d::new(100.0, 50.0)
            }]
        );
    }

    #[test]
    fn press_outside_canvas_is_dropped_but_release_is_kept() {
        let events = [
            button(pos2(950.0, 80.0), true, PointerButton::Primary),
            button(pos2(950.0, 80.0), false, PointerButton::Primary),
        ];
        assert_eq!(
            translate_events(&events, canvas()),
            vec![InputEvent::PointerUp]
        );
    }

    #[test]
    fn secondary_button_and_other_events_are_ignored() {
        let events = [
            button(pos2(110.0, 80.0), true, PointerButton::Secondary),
            Event::Text("x".to_owned()),
            Event::PointerMoved(pos2(20.0, 40.0)),
        ];
        assert_eq!(
            translate_events(&events, canvas()),
            vec![InputEvent::PointerMoved {
                pos: Vec2d::new(10.0, 10.0)
            }]
        );
    }
}
