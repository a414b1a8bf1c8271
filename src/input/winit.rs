use std::time::Instant;
use winit::event::{ElementState, MouseButton};

use super::{PointerButton, PointerEvent};

/// Turns winit mouse events into pointer samples.
///
/// winit reports `MouseInput` without a position and `CursorMoved` without
/// button state, so the source keeps the last cursor position and stamps it
/// onto press/release events. Timestamps count milliseconds from creation.
pub struct WinitPointerSource {
    started: Instant,
    cursor_pos: (f32, f32),
}

impl WinitPointerSource {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            cursor_pos: (0.0, 0.0),
        }
    }

    fn timestamp_ms(&self) -> u32 {
        self.started.elapsed().as_millis() as u32
    }

    /// Feed the position from a `WindowEvent::CursorMoved`.
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> PointerEvent {
        self.cursor_pos = (x as f32, y as f32);
        PointerEvent::Move {
            x: self.cursor_pos.0,
            y: self.cursor_pos.1,
            t: self.timestamp_ms(),
        }
    }

    /// Feed the state/button pair from a `WindowEvent::MouseInput`.
    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) -> PointerEvent {
        let (x, y) = self.cursor_pos;
        let button = map_button(button);
        let t = self.timestamp_ms();
        match state {
            ElementState::Pressed => PointerEvent::Press { x, y, button, t },
            ElementState::Released => PointerEvent::Release { x, y, button, t },
        }
    }
}

impl Default for WinitPointerSource {
    fn default() -> Self {
        Self::new()
    }
}

fn map_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Back => PointerButton::Other(3),
        MouseButton::Forward => PointerButton::Other(4),
        MouseButton::Other(n) => PointerButton::Other(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_button_is_primary() {
        assert_eq!(map_button(MouseButton::Left), PointerButton::Primary);
        assert_eq!(map_button(MouseButton::Right), PointerButton::Secondary);
        assert_eq!(map_button(MouseButton::Other(7)), PointerButton::Other(7));
    }

    #[test]
    fn press_uses_tracked_cursor_position() {
        let mut source = WinitPointerSource::new();
        source.cursor_moved(120.0, 44.0);
        let event = source.mouse_input(ElementState::Pressed, MouseButton::Left);
        match event {
            PointerEvent::Press { x, y, button, .. } => {
                assert!((x - 120.0).abs() < 1e-6);
                assert!((y - 44.0).abs() < 1e-6);
                assert_eq!(button, PointerButton::Primary);
            }
            other => panic!("expected press, got {:?}", other),
        }
    }

    #[test]
    fn release_without_motion_reads_origin() {
        let mut source = WinitPointerSource::new();
        let event = source.mouse_input(ElementState::Released, MouseButton::Left);
        match event {
            PointerEvent::Release { x, y, .. } => {
                assert!(x.abs() < 1e-6);
                assert!(y.abs() < 1e-6);
            }
            other => panic!("expected release, got {:?}", other),
        }
    }

    #[test]
    fn timestamps_never_decrease() {
        let mut source = WinitPointerSource::new();
        let a = source.cursor_moved(0.0, 0.0).timestamp();
        let b = source.cursor_moved(1.0, 1.0).timestamp();
        let c = source.mouse_input(ElementState::Pressed, MouseButton::Left).timestamp();
        assert!(a <= b && b <= c);
    }
}
