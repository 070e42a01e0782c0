//! Input handling for the control.
//!
//! The host translates its native events into an [`InputState`] once per
//! frame; widgets read edges (pressed/released this frame) and levels
//! (currently held). Only the buttons and keys the control reacts to are
//! modeled.

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

impl MouseButton {
    /// Number of tracked buttons.
    const COUNT: usize = 3;

    /// Slot of this button in the per-button state table.
    const fn slot(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Middle => 2,
        }
    }
}

/// Keys the control reacts to while focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Arrow left: previous segment.
    Left,
    /// Arrow right: next segment.
    Right,
    /// Home: first segment.
    Home,
    /// End: last segment.
    End,
}

/// Edge and level state of one mouse button.
#[derive(Debug, Clone, Copy, Default)]
struct ButtonState {
    /// Went down this frame.
    pressed: bool,
    /// Went up this frame.
    released: bool,
    /// Currently held.
    held: bool,
}

/// Input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current mouse X position.
    pub mouse_x: f32,
    /// Current mouse Y position.
    pub mouse_y: f32,
    /// Per-button edge and level state.
    buttons: [ButtonState; MouseButton::COUNT],
    /// Keys pressed this frame.
    keys_pressed: Vec<Key>,
    /// Keys currently held.
    keys_down: Vec<Key>,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing per-frame edge state.
    pub fn begin_frame(&mut self) {
        for button in &mut self.buttons {
            button.pressed = false;
            button.released = false;
        }
        self.keys_pressed.clear();
    }

    /// Updates the mouse position.
    pub fn set_mouse_pos(&mut self, x: f32, y: f32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    /// Records a mouse button press.
    pub fn mouse_button_down(&mut self, button: MouseButton) {
        let state = &mut self.buttons[button.slot()];
        state.pressed = true;
        state.held = true;
    }

    /// Records a mouse button release.
    pub fn mouse_button_up(&mut self, button: MouseButton) {
        let state = &mut self.buttons[button.slot()];
        state.released = true;
        state.held = false;
    }

    /// Records a key press.
    pub fn key_down(&mut self, key: Key) {
        if !self.keys_down.contains(&key) {
            self.keys_pressed.push(key);
            self.keys_down.push(key);
        }
    }

    /// Records a key release.
    pub fn key_up(&mut self, key: Key) {
        self.keys_down.retain(|&k| k != key);
    }

    /// Returns true if the mouse button was clicked this frame.
    #[must_use]
    pub fn mouse_clicked(&self, button: MouseButton) -> bool {
        self.buttons[button.slot()].pressed
    }

    /// Returns true if the mouse button was released this frame.
    #[must_use]
    pub fn mouse_released(&self, button: MouseButton) -> bool {
        self.buttons[button.slot()].released
    }

    /// Returns true if the mouse button is currently held.
    #[must_use]
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        self.buttons[button.slot()].held
    }

    /// Returns true if the key was pressed this frame.
    #[must_use]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns true if the key is currently held.
    #[must_use]
    pub fn key_held(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_click_edges() {
        let mut input = InputState::new();

        input.mouse_button_down(MouseButton::Left);
        assert!(input.mouse_clicked(MouseButton::Left));
        assert!(input.mouse_down(MouseButton::Left));

        input.begin_frame();
        assert!(!input.mouse_clicked(MouseButton::Left));
        assert!(input.mouse_down(MouseButton::Left));

        input.mouse_button_up(MouseButton::Left);
        assert!(input.mouse_released(MouseButton::Left));
        assert!(!input.mouse_down(MouseButton::Left));
    }

    #[test]
    fn test_buttons_tracked_independently() {
        let mut input = InputState::new();

        input.mouse_button_down(MouseButton::Left);
        input.mouse_button_down(MouseButton::Right);
        input.begin_frame();
        input.mouse_button_up(MouseButton::Right);

        assert!(input.mouse_down(MouseButton::Left));
        assert!(!input.mouse_down(MouseButton::Right));
        assert!(input.mouse_released(MouseButton::Right));
    }

    #[test]
    fn test_key_repeat_suppressed_while_held() {
        let mut input = InputState::new();

        input.key_down(Key::Right);
        assert!(input.key_pressed(Key::Right));

        input.begin_frame();
        input.key_down(Key::Right); // still held, not a new press
        assert!(!input.key_pressed(Key::Right));
        assert!(input.key_held(Key::Right));

        input.key_up(Key::Right);
        assert!(!input.key_held(Key::Right));
    }
}
