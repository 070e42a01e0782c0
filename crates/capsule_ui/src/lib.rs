//! # CAPSULE UI
//!
//! A pill-shaped segmented control: a row of equally-wide selectable labels
//! over a capsule background, with a sliding selector marking the active
//! segment.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                   WIDGET PIPELINE                      │
//! ├────────────────────────────────────────────────────────┤
//! │  Input Events → Hit Testing → Selection → Render Cmds  │
//! │       ↓              ↓            ↓           ↓        │
//! │  Edge Tracking    Segments    Animation   Host Submit  │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Philosophy
//!
//! The control is a **retained widget**. It owns its segments, its selection
//! and its selector geometry; the host owns the window, the GPU and the
//! clock. Once per frame the host feeds it an [`InputState`] and a delta
//! time, then collects backend-neutral [`RenderCommand`]s.
//!
//! - Malformed label input degrades to zero segments, it never fails
//! - Out-of-range selection requests are ignored, they never panic
//! - A selection arriving mid-slide retargets the animation in flight

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod widget;

pub use animation::{Animation, Easing};
pub use config::SegmentedConfig;
pub use error::{UiError, UiResult};
pub use event::ControlEvent;
pub use input::{InputState, Key, MouseButton};
pub use layout::Rect;
pub use render::{RenderCommand, UIBatch, UIRenderer, UIVertex};
pub use style::{Color, SegmentedStyle};
pub use widget::{parse_labels, Segment, SegmentedControl, Widget, WidgetId, WidgetResponse};
