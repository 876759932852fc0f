//! Pointer events delivered by the host toolkit.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event for unified mouse/touch handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self::Down {
            position: Point::new(x, y),
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::Move {
            position: Point::new(x, y),
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self::Up {
            position: Point::new(x, y),
        }
    }

    /// Position carried by the event.
    pub fn position(&self) -> Point {
        match *self {
            Self::Down { position } | Self::Move { position } | Self::Up { position } => position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        assert_eq!(PointerEvent::down(1.0, 2.0).position(), Point::new(1.0, 2.0));
        assert_eq!(PointerEvent::moved(3.0, 4.0).position(), Point::new(3.0, 4.0));
        assert_eq!(PointerEvent::up(5.0, 6.0).position(), Point::new(5.0, 6.0));
    }
}
