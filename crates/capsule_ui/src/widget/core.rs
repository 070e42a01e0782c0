//! Core widget types and traits.

use crate::input::InputState;
use crate::layout::Rect;
use crate::render::RenderCommand;

/// Unique identifier for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Creates a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Widget state flags, packed into one word.
///
/// The constants are typed, so a flag can only be combined with other
/// [`WidgetFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Widget is visible.
    pub const VISIBLE: Self = Self(1 << 0);
    /// Widget is enabled (can receive input).
    pub const ENABLED: Self = Self(1 << 1);
    /// Widget is focused (receives key input).
    pub const FOCUSED: Self = Self(1 << 2);
    /// Widget is hovered.
    pub const HOVERED: Self = Self(1 << 3);
    /// Widget needs redraw.
    pub const DIRTY_RENDER: Self = Self(1 << 4);

    /// Flags a freshly created widget starts with.
    pub const DEFAULT: Self = Self(Self::VISIBLE.0 | Self::ENABLED.0 | Self::DIRTY_RENDER.0);

    /// Creates new flags with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: Self) {
        self.0 |= flag.0;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: Self) {
        self.0 &= !flag.0;
    }
}

impl Default for WidgetFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Common widget state.
#[derive(Debug, Clone)]
pub struct WidgetState {
    /// Widget identifier.
    pub id: WidgetId,
    /// Bounding rectangle (assigned by the host's layout).
    pub rect: Rect,
    /// State flags.
    pub flags: WidgetFlags,
}

impl WidgetState {
    /// Creates a new widget state.
    #[must_use]
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            rect: Rect::ZERO,
            flags: WidgetFlags::DEFAULT,
        }
    }

    /// Returns true if the widget is visible.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.has(WidgetFlags::VISIBLE)
    }

    /// Returns true if the widget accepts input.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.flags.has(WidgetFlags::ENABLED)
    }

    /// Returns true if the widget is focused.
    #[inline]
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.flags.has(WidgetFlags::FOCUSED)
    }

    /// Returns true if the widget is hovered.
    #[inline]
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.flags.has(WidgetFlags::HOVERED)
    }

    /// Returns true if the widget needs a redraw.
    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.flags.has(WidgetFlags::DIRTY_RENDER)
    }

    /// Marks the widget as needing redraw.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.flags.set(WidgetFlags::DIRTY_RENDER);
    }

    /// Clears the redraw flag after the host has rendered.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.flags.clear(WidgetFlags::DIRTY_RENDER);
    }
}

/// Response from widget update.
#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetResponse {
    /// Widget was clicked.
    pub clicked: bool,
    /// Widget gained focus.
    pub focused: bool,
    /// Widget lost focus.
    pub unfocused: bool,
    /// Widget was hovered (just entered).
    pub hovered: bool,
    /// Widget was unhovered (just left).
    pub unhovered: bool,
    /// Widget value changed.
    pub changed: bool,
}

/// Base trait for all widgets.
pub trait Widget {
    /// Returns the widget's state.
    fn state(&self) -> &WidgetState;

    /// Returns mutable access to the widget's state.
    fn state_mut(&mut self) -> &mut WidgetState;

    /// Handles input and advances animations.
    ///
    /// Called every frame, even without input events, so in-flight
    /// transitions keep moving.
    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse;

    /// Generates render commands for this widget.
    fn render(&self, commands: &mut Vec<RenderCommand>);

    /// Returns the minimum size of this widget.
    fn min_size(&self) -> (f32, f32) {
        (0.0, 0.0)
    }

    /// Returns the preferred size of this widget.
    fn preferred_size(&self) -> (f32, f32) {
        self.min_size()
    }
}
