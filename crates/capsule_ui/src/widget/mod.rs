//! Widget system: the common substrate and the segmented control itself.

mod core;
mod segmented;

pub use self::core::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
pub use self::segmented::{parse_labels, Segment, SegmentedControl};
