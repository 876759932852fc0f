//! Translation of window mouse and touch input into canvas pointer events.

use kurbo::Point;
use minipaint_core::PointerEvent;
use winit::event::{ElementState, TouchPhase};

/// Turns mouse and touch input into a single pointer stream.
///
/// Only one contact draws at a time: the first finger down owns the stroke
/// and other fingers are ignored until it lifts. The left mouse button acts
/// as a finger.
#[derive(Debug, Clone, Default)]
pub struct PointerMapper {
    cursor: Point,
    mouse_pressed: bool,
    active_touch: Option<u64>,
}

impl PointerMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor movement. Produces a move only while the button is held.
    pub fn cursor_moved(&mut self, position: Point) -> Option<PointerEvent> {
        self.cursor = position;
        self.mouse_pressed.then_some(PointerEvent::Move { position })
    }

    /// Left button press or release at the last cursor position.
    pub fn left_button(&mut self, state: ElementState) -> Option<PointerEvent> {
        if self.active_touch.is_some() {
            return None;
        }
        let position = self.cursor;
        match (state, self.mouse_pressed) {
            (ElementState::Pressed, false) => {
                self.mouse_pressed = true;
                Some(PointerEvent::Down { position })
            }
            (ElementState::Released, true) => {
                self.mouse_pressed = false;
                Some(PointerEvent::Up { position })
            }
            _ => None,
        }
    }

    /// Touch contact update.
    ///
    /// A cancelled contact is released without an up event, so its stroke is
    /// never committed and the next down discards it.
    pub fn touch(&mut self, id: u64, phase: TouchPhase, position: Point) -> Option<PointerEvent> {
        if self.mouse_pressed {
            return None;
        }
        match phase {
            TouchPhase::Started if self.active_touch.is_none() => {
                self.active_touch = Some(id);
                Some(PointerEvent::Down { position })
            }
            TouchPhase::Moved if self.active_touch == Some(id) => {
                Some(PointerEvent::Move { position })
            }
            TouchPhase::Ended if self.active_touch == Some(id) => {
                self.active_touch = None;
                Some(PointerEvent::Up { position })
            }
            TouchPhase::Cancelled if self.active_touch == Some(id) => {
                log::debug!("Touch {} cancelled", id);
                self.active_touch = None;
                None
            }
            _ => None,
        }
    }
}
