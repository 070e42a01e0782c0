//! Backend-neutral rendering.
//!
//! Widgets emit [`RenderCommand`]s; the host tessellates and submits them
//! with whatever backend it owns. The command set is exactly what the
//! capsule control needs: filled rounded rects, outlines, text, and a clip
//! pair so content stays inside the pill.

use crate::layout::Rect;
use crate::style::Color;

/// A render command for the UI.
#[derive(Debug, Clone)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Rectangle outline.
    RectOutline {
        /// Bounds.
        bounds: Rect,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Text run.
    Text {
        /// Text content.
        text: String,
        /// X position.
        x: f32,
        /// Y position.
        y: f32,
        /// Text color.
        color: Color,
        /// Font size.
        font_size: f32,
        /// Use monospace font.
        monospace: bool,
    },
    /// Scissor rect (clip following commands).
    PushClip {
        /// Clip bounds.
        bounds: Rect,
    },
    /// Pop scissor rect.
    PopClip,
}

/// A run of draw commands sharing one scissor state.
///
/// Produced by [`UIRenderer::end_frame`]: the clip pairs widgets emitted are
/// resolved away, and what remains is draw commands grouped under the clip
/// rect that was in effect for them (`None` = unclipped).
#[derive(Debug, Clone)]
pub struct UIBatch {
    /// Draw commands in this batch; never contains clip commands.
    pub commands: Vec<RenderCommand>,
    /// Scissor rect the host must apply for this batch, if any.
    pub clip: Option<Rect>,
}

/// Collects widget commands for the frame and hands them to the host.
pub struct UIRenderer {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
    /// Clip stack.
    clip_stack: Vec<Rect>,
    /// Final batches for rendering.
    batches: Vec<UIBatch>,
}

impl UIRenderer {
    /// Creates a new UI renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(512),
            clip_stack: Vec::with_capacity(8),
            batches: Vec::with_capacity(16),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
        self.batches.clear();
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Adds multiple render commands.
    pub fn extend(&mut self, commands: impl IntoIterator<Item = RenderCommand>) {
        self.commands.extend(commands);
    }

    /// Pushes a clip rect, intersected with the current clip if any.
    pub fn push_clip(&mut self, bounds: Rect) {
        let effective = Self::intersect_clip(self.clip_stack.last(), bounds);
        self.clip_stack.push(effective);
        self.commands.push(RenderCommand::PushClip { bounds: effective });
    }

    /// Pops the current clip rect.
    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
        self.commands.push(RenderCommand::PopClip);
    }

    /// Returns the current clip rect.
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Ends the frame and returns batches for rendering.
    ///
    /// Walks the frame's commands once, resolving nested clip pairs into the
    /// effective scissor rect, and cuts a new batch whenever that rect
    /// changes. Hosts replay batches in order; further batching by texture
    /// or pipeline state is theirs to do.
    pub fn end_frame(&mut self) -> &[UIBatch] {
        self.batches.clear();
        self.clip_stack.clear();

        let mut run: Vec<RenderCommand> = Vec::new();
        for command in std::mem::take(&mut self.commands) {
            match command {
                RenderCommand::PushClip { bounds } => {
                    self.flush_run(&mut run);
                    let effective = Self::intersect_clip(self.clip_stack.last(), bounds);
                    self.clip_stack.push(effective);
                }
                RenderCommand::PopClip => {
                    self.flush_run(&mut run);
                    self.clip_stack.pop();
                }
                draw => run.push(draw),
            }
        }
        self.flush_run(&mut run);

        &self.batches
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Cuts a batch from the pending run under the current clip.
    fn flush_run(&mut self, run: &mut Vec<RenderCommand>) {
        if run.is_empty() {
            return;
        }
        self.batches.push(UIBatch {
            commands: std::mem::take(run),
            clip: self.clip_stack.last().copied(),
        });
    }

    /// Intersects a requested clip with the one currently in effect.
    fn intersect_clip(current: Option<&Rect>, bounds: Rect) -> Rect {
        match current {
            Some(current) => current.intersection(&bounds).unwrap_or(Rect::ZERO),
            None => bounds,
        }
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Vertex for UI rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UIVertex {
    /// Position (x, y).
    pub position: [f32; 2],
    /// UV coordinates.
    pub uv: [f32; 2],
    /// Color (RGBA).
    pub color: [f32; 4],
}

impl UIVertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }

    /// Expands a filled rect into a quad, in triangle-strip order.
    #[must_use]
    pub fn quad(bounds: Rect, color: Color) -> [Self; 4] {
        let rgba = color.to_array();
        [
            Self::new(bounds.x, bounds.y, 0.0, 0.0, rgba),
            Self::new(bounds.right(), bounds.y, 1.0, 0.0, rgba),
            Self::new(bounds.x, bounds.bottom(), 0.0, 1.0, rgba),
            Self::new(bounds.right(), bounds.bottom(), 1.0, 1.0, rgba),
        ]
    }
}
