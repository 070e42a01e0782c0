//! The segmented control.
//!
//! A row of equally-wide labels over a capsule background with a selector
//! pill sliding under the active one. Labels come in as one comma-separated
//! string and are rebuilt wholesale on every assignment; there is no
//! incremental diffing to get wrong.
//!
//! Selection changes from any source (tap, key press, programmatic
//! [`SegmentedControl::select`]) share one path: retarget the selector
//! slide, retarget every label's color blend, queue one
//! [`ControlEvent::SelectionChanged`].

use super::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
use crate::animation::{Animation, Easing};
use crate::event::ControlEvent;
use crate::input::{InputState, Key, MouseButton};
use crate::layout::{split_row, Rect};
use crate::render::RenderCommand;
use crate::style::{Color, SegmentedStyle};

/// Splits a comma-separated label string into segment titles.
///
/// Tokens are trimmed; empty tokens (including the ones a trailing or
/// doubled comma produces) are dropped. An empty or all-comma string yields
/// no titles, which the control renders as an empty capsule.
#[must_use]
pub fn parse_labels(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_owned)
        .collect()
}

/// A single selectable segment.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Display label (trimmed, never empty).
    pub label: String,
    /// Bounds assigned by the last layout pass.
    pub rect: Rect,
    /// Label color blend: 0 = base text color, 1 = selected text color.
    blend: Animation,
}

impl Segment {
    /// Returns the current label color blend factor (0-1).
    #[must_use]
    pub fn blend(&self) -> f32 {
        self.blend.value()
    }
}

/// The pill segmented control.
///
/// Owns the segment list (insertion order = display order), the selected
/// index, and the selector geometry derived from both.
pub struct SegmentedControl {
    /// Common widget state.
    state: WidgetState,
    /// Segments in display order.
    segments: Vec<Segment>,
    /// Index of the selected segment; 0 when there are no segments.
    selected: usize,
    /// Animated x position of the selector pill.
    selector_x: Animation,
    /// Visual configuration.
    style: SegmentedStyle,
    /// Events queued for the host, drained by [`Self::take_events`].
    events: Vec<ControlEvent>,
}

impl SegmentedControl {
    /// Duration of the selector slide and label color blend, in seconds.
    pub const SLIDE_DURATION: f32 = 0.4;
    /// Smallest acceptable tap target per segment.
    pub const MIN_SEGMENT_WIDTH: f32 = 44.0;
    /// Minimum control height.
    pub const MIN_HEIGHT: f32 = 24.0;
    /// Height the control asks for when the host has room.
    pub const DEFAULT_HEIGHT: f32 = 32.0;
    /// Estimated glyph advance as a fraction of the font size.
    const CHAR_WIDTH_RATIO: f32 = 0.6;
    /// Horizontal label padding inside a segment.
    const LABEL_PADDING: f32 = 12.0;

    /// Creates an empty control with the given bounds.
    #[must_use]
    pub fn new(id: WidgetId, bounds: Rect) -> Self {
        let mut state = WidgetState::new(id);
        state.rect = bounds;

        Self {
            state,
            segments: Vec::new(),
            selected: 0,
            selector_x: slide_animation(bounds.x),
            style: SegmentedStyle::default(),
            events: Vec::new(),
        }
    }

    /// Creates a control and parses its labels in one step.
    #[must_use]
    pub fn with_labels(id: WidgetId, bounds: Rect, labels: &str) -> Self {
        let mut control = Self::new(id, bounds);
        control.set_labels(labels);
        control
    }

    /// Replaces the segment list from a comma-separated label string.
    ///
    /// The list is rebuilt wholesale on every call. The selected index is
    /// clamped into the new range (0 when the string yields no segments) and
    /// the selector snaps to it without animation.
    pub fn set_labels(&mut self, labels: &str) {
        let titles = parse_labels(labels);
        tracing::debug!("rebuilding segments: count={}", titles.len());

        self.segments = titles
            .into_iter()
            .map(|label| Segment {
                label,
                rect: Rect::ZERO,
                blend: blend_animation(0.0),
            })
            .collect();

        if self.segments.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.segments.len() {
            self.selected = self.segments.len() - 1;
        }

        if let Some(segment) = self.segments.get_mut(self.selected) {
            segment.blend.set_immediate(1.0);
        }

        self.layout_segments();
        self.state.mark_dirty();
    }

    /// Assigns new bounds and re-lays-out segments and selector.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.state.rect = bounds;
        self.layout_segments();
        self.state.mark_dirty();
    }

    /// Selects the segment at `index`, animating the selector to it.
    ///
    /// Out-of-range requests are ignored; re-selecting the current segment
    /// is a no-op. An effective change queues one
    /// [`ControlEvent::SelectionChanged`].
    pub fn select(&mut self, index: usize) {
        if index >= self.segments.len() || index == self.selected {
            return;
        }

        let previous = self.selected;
        self.selected = index;

        for (i, segment) in self.segments.iter_mut().enumerate() {
            segment.blend.set_target(if i == index { 1.0 } else { 0.0 });
        }
        self.selector_x.set_target(self.segments[index].rect.x);

        self.events.push(ControlEvent::SelectionChanged { index, previous });
        tracing::trace!("selection changed: {} -> {}", previous, index);
        self.state.mark_dirty();
    }

    /// Sets the selection without animation and without emitting an event.
    ///
    /// For restoring state (config load, host-side persistence) where the
    /// change is initial state, not a transition. Out-of-range requests are
    /// ignored like [`Self::select`].
    pub fn select_immediate(&mut self, index: usize) {
        if index >= self.segments.len() {
            return;
        }

        self.selected = index;
        for (i, segment) in self.segments.iter_mut().enumerate() {
            segment.blend.set_immediate(if i == index { 1.0 } else { 0.0 });
        }
        self.selector_x.set_immediate(self.segments[index].rect.x);
        self.state.mark_dirty();
    }

    /// Returns the selected segment index; 0 when there are no segments.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the segments in display order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the current visual configuration.
    #[must_use]
    pub fn style(&self) -> &SegmentedStyle {
        &self.style
    }

    /// Replaces the whole visual configuration.
    pub fn set_style(&mut self, style: SegmentedStyle) {
        self.style = style;
        self.state.mark_dirty();
    }

    /// Sets the outer border width; 0 disables the border.
    pub fn set_border_width(&mut self, width: f32) {
        self.style.border_width = width;
        self.state.mark_dirty();
    }

    /// Sets the outer border color.
    pub fn set_border_color(&mut self, color: Color) {
        self.style.border = color;
        self.state.mark_dirty();
    }

    /// Sets the label color for unselected segments.
    pub fn set_text_color(&mut self, color: Color) {
        self.style.text = color;
        self.state.mark_dirty();
    }

    /// Sets the label color for the selected segment.
    pub fn set_selected_text_color(&mut self, color: Color) {
        self.style.selected_text = color;
        self.state.mark_dirty();
    }

    /// Sets the fill color of the sliding selector pill.
    pub fn set_selector_color(&mut self, color: Color) {
        self.style.selector = color;
        self.state.mark_dirty();
    }

    /// Sets the fill color of the capsule background.
    pub fn set_background_color(&mut self, color: Color) {
        self.style.background = color;
        self.state.mark_dirty();
    }

    /// Drains the events queued since the last call.
    pub fn take_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current selector bounds: animated x, sized to the selected segment.
    ///
    /// Meaningless while there are no segments; `render` guards that case.
    #[must_use]
    pub fn selector_rect(&self) -> Rect {
        let target = self
            .segments
            .get(self.selected)
            .map_or(self.state.rect, |segment| segment.rect);

        Rect::new(self.selector_x.value(), target.y, target.width, target.height)
    }

    /// Returns the index of the segment under the point, if any.
    fn segment_at(&self, x: f32, y: f32) -> Option<usize> {
        self.segments.iter().position(|segment| segment.rect.contains(x, y))
    }

    /// Reassigns segment rects and snaps the selector to the selection.
    fn layout_segments(&mut self) {
        let columns = split_row(self.state.rect, self.segments.len());
        for (segment, column) in self.segments.iter_mut().zip(columns) {
            segment.rect = column;
        }

        let selector_x = self
            .segments
            .get(self.selected)
            .map_or(self.state.rect.x, |segment| segment.rect.x);
        self.selector_x.set_immediate(selector_x);
    }

    /// Estimated label width for centering and sizing.
    fn label_width(&self, label: &str) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let chars = label.chars().count() as f32;
        chars * self.style.font_size * Self::CHAR_WIDTH_RATIO
    }

    /// Handles pointer input. Returns the response edges for this frame.
    fn handle_pointer(&mut self, input: &InputState) -> WidgetResponse {
        let mut response = WidgetResponse::default();

        let was_hovered = self.state.is_hovered();
        let is_hovered = self.state.rect.contains(input.mouse_x, input.mouse_y);
        if is_hovered != was_hovered {
            if is_hovered {
                self.state.flags.set(WidgetFlags::HOVERED);
                response.hovered = true;
            } else {
                self.state.flags.clear(WidgetFlags::HOVERED);
                response.unhovered = true;
            }
            self.state.mark_dirty();
        }

        if input.mouse_clicked(MouseButton::Left) {
            if is_hovered {
                response.clicked = true;
                if !self.state.is_focused() {
                    self.state.flags.set(WidgetFlags::FOCUSED);
                    response.focused = true;
                }
                if let Some(index) = self.segment_at(input.mouse_x, input.mouse_y) {
                    let before = self.selected;
                    self.select(index);
                    response.changed = self.selected != before;
                }
            } else if self.state.is_focused() {
                // Click elsewhere drops focus
                self.state.flags.clear(WidgetFlags::FOCUSED);
                response.unfocused = true;
            }
        }

        response
    }

    /// Handles key input while focused. Returns true if the selection moved.
    fn handle_keys(&mut self, input: &InputState) -> bool {
        if self.segments.is_empty() {
            return false;
        }

        let before = self.selected;
        let last = self.segments.len() - 1;

        if input.key_pressed(Key::Left) {
            self.select(self.selected.saturating_sub(1));
        }
        if input.key_pressed(Key::Right) {
            self.select((self.selected + 1).min(last));
        }
        if input.key_pressed(Key::Home) {
            self.select(0);
        }
        if input.key_pressed(Key::End) {
            self.select(last);
        }

        self.selected != before
    }
}

impl Widget for SegmentedControl {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse {
        let mut response = WidgetResponse::default();

        if self.state.is_enabled() {
            response = self.handle_pointer(input);
            if self.state.is_focused() && self.handle_keys(input) {
                response.changed = true;
            }
        }

        self.selector_x.update(dt);
        for segment in &mut self.segments {
            segment.blend.update(dt);
        }
        if !self.selector_x.is_complete() {
            self.state.mark_dirty();
        }

        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        if !self.state.is_visible() {
            return;
        }

        let rect = self.state.rect;
        let radius = rect.height * 0.5;

        // Capsule track
        commands.push(RenderCommand::Rect {
            bounds: rect,
            color: self.style.background,
            corner_radius: radius,
        });

        // Selector and labels clip to the capsule
        commands.push(RenderCommand::PushClip { bounds: rect });

        if !self.segments.is_empty() {
            let selector = self.selector_rect();
            commands.push(RenderCommand::Rect {
                bounds: selector,
                color: self.style.selector,
                corner_radius: selector.height * 0.5,
            });

            for segment in &self.segments {
                let color = self.style.text.lerp(self.style.selected_text, segment.blend());
                let (cx, cy) = segment.rect.center();
                commands.push(RenderCommand::Text {
                    text: segment.label.clone(),
                    x: cx - self.label_width(&segment.label) * 0.5,
                    y: cy - self.style.font_size * 0.5,
                    color,
                    font_size: self.style.font_size,
                    monospace: self.style.monospace,
                });
            }
        }

        commands.push(RenderCommand::PopClip);

        if self.style.border_width > 0.0 {
            commands.push(RenderCommand::RectOutline {
                bounds: rect,
                color: self.style.border,
                width: self.style.border_width,
                corner_radius: radius,
            });
        }
    }

    fn min_size(&self) -> (f32, f32) {
        #[allow(clippy::cast_precision_loss)]
        let count = self.segments.len() as f32;
        (count * Self::MIN_SEGMENT_WIDTH, Self::MIN_HEIGHT)
    }

    fn preferred_size(&self) -> (f32, f32) {
        let widest = self
            .segments
            .iter()
            .map(|segment| self.label_width(&segment.label))
            .fold(0.0_f32, f32::max);
        let segment_width = (widest + Self::LABEL_PADDING * 2.0).max(Self::MIN_SEGMENT_WIDTH);

        #[allow(clippy::cast_precision_loss)]
        let count = self.segments.len() as f32;
        (segment_width * count, Self::DEFAULT_HEIGHT)
    }
}

/// Selector slide animation at rest at `value`.
fn slide_animation(value: f32) -> Animation {
    Animation::new(value, Easing::ExponentialInOut).with_duration(SegmentedControl::SLIDE_DURATION)
}

/// Label color blend animation at rest at `value`.
fn blend_animation(value: f32) -> Animation {
    Animation::new(value, Easing::ExponentialInOut).with_duration(SegmentedControl::SLIDE_DURATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ControlEvent;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 300.0, 32.0);

    fn three_segments() -> SegmentedControl {
        SegmentedControl::with_labels(WidgetId::new(1), BOUNDS, "Hourly, Daily, Monthly")
    }

    #[test]
    fn test_parse_drops_empty_tokens() {
        assert_eq!(parse_labels("A, B ,C"), vec!["A", "B", "C"]);
        assert_eq!(parse_labels("A,,C,"), vec!["A", "C"]);
        assert_eq!(parse_labels(""), Vec::<String>::new());
        assert_eq!(parse_labels(" , ,"), Vec::<String>::new());
    }

    #[test]
    fn test_rebuild_on_every_assignment() {
        let mut control = three_segments();
        assert_eq!(control.segment_count(), 3);

        control.set_labels("On, Off");
        assert_eq!(control.segment_count(), 2);

        control.set_labels("");
        assert_eq!(control.segment_count(), 0);
        assert_eq!(control.selected_index(), 0);
    }

    #[test]
    fn test_rebuild_clamps_selection() {
        let mut control = three_segments();
        control.select(2);

        control.set_labels("On, Off");
        assert_eq!(control.selected_index(), 1);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut control = three_segments();

        control.select(3);
        control.select(usize::MAX);
        assert_eq!(control.selected_index(), 0);
        assert!(control.take_events().is_empty());
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut control = three_segments();

        control.select(1);
        control.select(1);

        assert_eq!(control.selected_index(), 1);
        assert_eq!(
            control.take_events(),
            vec![ControlEvent::SelectionChanged { index: 1, previous: 0 }]
        );
    }

    #[test]
    fn test_selection_retargets_blends() {
        let mut control = three_segments();
        control.select(2);

        assert!((control.segments()[2].blend.target() - 1.0).abs() < f32::EPSILON);
        assert!((control.segments()[0].blend.target() - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_selector_covers_selected_segment() {
        let control = three_segments();
        let selector = control.selector_rect();

        assert!((selector.x - BOUNDS.x).abs() < f32::EPSILON);
        assert!((selector.width - BOUNDS.width / 3.0).abs() < f32::EPSILON);
        assert!((selector.height - BOUNDS.height).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tap_selects_segment() {
        let mut control = three_segments();
        let mut input = InputState::new();

        // Center of segment 2 of 3
        input.set_mouse_pos(250.0, 16.0);
        input.mouse_button_down(MouseButton::Left);

        let response = control.update(&input, 0.016);
        assert!(response.clicked);
        assert!(response.changed);
        assert_eq!(control.selected_index(), 2);
        assert_eq!(
            control.take_events(),
            vec![ControlEvent::SelectionChanged { index: 2, previous: 0 }]
        );
    }

    #[test]
    fn test_tap_outside_changes_nothing() {
        let mut control = three_segments();
        let mut input = InputState::new();

        input.set_mouse_pos(400.0, 16.0);
        input.mouse_button_down(MouseButton::Left);

        let response = control.update(&input, 0.016);
        assert!(!response.clicked);
        assert!(!response.changed);
        assert_eq!(control.selected_index(), 0);
    }

    #[test]
    fn test_arrow_keys_saturate_at_the_ends() {
        let mut control = three_segments();
        let mut input = InputState::new();

        // Focus with a tap on the first segment
        input.set_mouse_pos(10.0, 16.0);
        input.mouse_button_down(MouseButton::Left);
        let response = control.update(&input, 0.016);
        assert!(response.focused);

        input.begin_frame();
        input.key_down(Key::Left);
        let response = control.update(&input, 0.016);
        assert!(!response.changed);
        assert_eq!(control.selected_index(), 0);

        input.begin_frame();
        input.key_up(Key::Left);
        input.key_down(Key::End);
        let response = control.update(&input, 0.016);
        assert!(response.changed);
        assert_eq!(control.selected_index(), 2);

        input.begin_frame();
        input.key_up(Key::End);
        input.key_down(Key::Right);
        let response = control.update(&input, 0.016);
        assert!(!response.changed);
        assert_eq!(control.selected_index(), 2);
    }

    #[test]
    fn test_empty_control_renders_no_labels_or_selector() {
        let control = SegmentedControl::new(WidgetId::new(1), BOUNDS);
        let mut commands = Vec::new();
        control.render(&mut commands);

        let rect_count = commands
            .iter()
            .filter(|command| matches!(command, RenderCommand::Rect { .. }))
            .count();
        assert_eq!(rect_count, 1, "only the capsule track is filled");
        assert!(!commands
            .iter()
            .any(|command| matches!(command, RenderCommand::Text { .. })));
    }

    #[test]
    fn test_render_uses_pill_radii() {
        let control = three_segments();
        let mut commands = Vec::new();
        control.render(&mut commands);

        let radii: Vec<f32> = commands
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Rect { corner_radius, .. } => Some(*corner_radius),
                _ => None,
            })
            .collect();

        assert_eq!(radii.len(), 2, "track and selector");
        for radius in radii {
            assert!((radius - BOUNDS.height * 0.5).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_select_immediate_snaps_without_event() {
        let mut control = three_segments();
        control.select_immediate(2);

        assert_eq!(control.selected_index(), 2);
        assert!(control.take_events().is_empty());

        let selector = control.selector_rect();
        assert!((selector.x - control.segments()[2].rect.x).abs() < f32::EPSILON);
        assert!((control.segments()[2].blend() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_disabled_control_ignores_taps() {
        let mut control = three_segments();
        control.state_mut().flags.clear(WidgetFlags::ENABLED);

        let mut input = InputState::new();
        input.set_mouse_pos(250.0, 16.0);
        input.mouse_button_down(MouseButton::Left);

        let response = control.update(&input, 0.016);
        assert!(!response.clicked);
        assert_eq!(control.selected_index(), 0);
    }
}
