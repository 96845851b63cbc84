//! Span warning display and the timers that hide it.

mod scheduler;
mod span_warning;

pub use scheduler::{ManualScheduler, Scheduler, TaskHandle, TokioScheduler};
pub use span_warning::{ManualSpanWarning, SpanWarning, WarningTask};
