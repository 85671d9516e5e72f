//! Custom TUI widgets.

pub mod mode_tabs;
pub mod result;

pub use mode_tabs::{ModeTabs, tab_label};
pub use result::{ResultLine, ResultSpan, ResultWidget, SpanKind, calculate_visual_line_count};
