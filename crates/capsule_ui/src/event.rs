//! Control events surfaced to the host.
//!
//! The control queues events as they happen; the host drains them once per
//! frame with [`crate::SegmentedControl::take_events`]. Serde-derived so a
//! host can forward them across a process boundary unchanged.

use serde::{Deserialize, Serialize};

/// Events emitted by the segmented control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlEvent {
    /// The selected segment changed.
    ///
    /// Emitted once per selection that actually changes the index, whether
    /// it came from a tap, a key press or a programmatic `select`.
    /// Re-selecting the current segment emits nothing.
    SelectionChanged {
        /// Index of the newly selected segment.
        index: usize,
        /// Index that was selected before.
        previous: usize,
    },
}
