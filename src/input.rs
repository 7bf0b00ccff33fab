//! Keyboard input, delivered as an explicit event stream.
//!
//! Rather than letting the simulation poll the keyboard (or share a global
//! key map with the window layer), the driver loop turns macroquad's
//! press/release edges into [`InputEvent`]s once per frame and drains them
//! into an [`InputState`] before the tick runs. The simulation only ever
//! sees the drained state, so within one tick the held flags cannot change
//! under it, and tests can script input without a window.

use macroquad::prelude::{is_key_pressed, is_key_released, KeyCode};

/// The five logical buttons the game recognizes. UP and DOWN are tracked
/// for completeness but nothing reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Up,
    Down,
    Fire,
}

impl Button {
    pub const ALL: [Button; 5] = [
        Button::Left,
        Button::Right,
        Button::Up,
        Button::Down,
        Button::Fire,
    ];

    fn key(self) -> KeyCode {
        match self {
            Button::Left => KeyCode::Left,
            Button::Right => KeyCode::Right,
            Button::Up => KeyCode::Up,
            Button::Down => KeyCode::Down,
            Button::Fire => KeyCode::S,
        }
    }
}

/// One press or release edge.
#[derive(Debug, Clone, Copy)]
pub struct InputEvent {
    pub button: Button,
    pub pressed: bool,
}

/// Per-button held flags, updated only by draining an event queue.
#[derive(Debug, Default)]
pub struct InputState {
    held: [bool; Button::ALL.len()],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply every queued event in arrival order, emptying the queue.
    pub fn drain(&mut self, queue: &mut Vec<InputEvent>) {
        for event in queue.drain(..) {
            self.apply(event);
        }
    }

    pub fn apply(&mut self, event: InputEvent) {
        self.held[event.button as usize] = event.pressed;
    }

    pub fn is_down(&self, button: Button) -> bool {
        self.held[button as usize]
    }
}

/// Poll macroquad for key edges and append them to the queue.
///
/// Call once per frame, before the queue is drained. No debouncing: the
/// held state lasts from the press edge to the release edge.
pub fn poll(queue: &mut Vec<InputEvent>) {
    for button in Button::ALL {
        if is_key_pressed(button.key()) {
            queue.push(InputEvent {
                button,
                pressed: true,
            });
        }
        if is_key_released(button.key()) {
            queue.push(InputEvent {
                button,
                pressed: false,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: Button) -> InputEvent {
        InputEvent {
            button,
            pressed: true,
        }
    }

    fn release(button: Button) -> InputEvent {
        InputEvent {
            button,
            pressed: false,
        }
    }

    #[test]
    fn drain_applies_events_in_order() {
        let mut state = InputState::new();
        let mut queue = vec![press(Button::Left), release(Button::Left)];

        state.drain(&mut queue);
        // Press then release within one frame nets to released.
        assert!(!state.is_down(Button::Left));
        assert!(queue.is_empty());
    }

    #[test]
    fn held_until_released() {
        let mut state = InputState::new();
        state.apply(press(Button::Fire));
        assert!(state.is_down(Button::Fire));

        // Stays held across frames with no further events.
        assert!(state.is_down(Button::Fire));

        state.apply(release(Button::Fire));
        assert!(!state.is_down(Button::Fire));
    }

    #[test]
    fn buttons_are_independent() {
        let mut state = InputState::new();
        state.apply(press(Button::Left));
        state.apply(press(Button::Right));

        assert!(state.is_down(Button::Left));
        assert!(state.is_down(Button::Right));
        assert!(!state.is_down(Button::Fire));
    }
}
