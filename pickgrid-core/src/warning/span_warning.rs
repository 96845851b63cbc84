//! Transient "span too long" warning with a self-clearing timer.

use std::time::Duration;

use super::scheduler::{ManualScheduler, Scheduler, TaskHandle};
use crate::validator::WarningSignal;

/// Task delivered by the scheduler when a warning's display window ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningTask {
    Clear { generation: u64 },
}

/// Visibility of the span warning.
///
/// Each trigger supersedes the previous one: the older clear timer is
/// cancelled, and should it fire anyway its generation no longer matches,
/// so only the newest warning's timer can hide it.
pub struct SpanWarning<S> {
    scheduler: S,
    visible: bool,
    generation: u64,
    pending: Option<TaskHandle>,
}

impl<S: Scheduler<WarningTask>> SpanWarning<S> {
    pub fn new(scheduler: S) -> Self {
        SpanWarning {
            scheduler,
            visible: false,
            generation: 0,
            pending: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the warning and schedule it to hide after the signal's delay.
    pub fn trigger(&mut self, signal: &WarningSignal) -> TaskHandle {
        if let Some(previous) = self.pending.take() {
            self.scheduler.cancel(previous);
        }

        self.generation += 1;
        self.visible = true;

        let handle = self.scheduler.schedule_after(
            signal.auto_hide_after,
            WarningTask::Clear {
                generation: self.generation,
            },
        );
        self.pending = Some(handle);
        log::trace!("span warning shown (generation {})", self.generation);
        handle
    }

    /// Apply a fired task. Returns true if it hid the warning.
    pub fn apply(&mut self, task: WarningTask) -> bool {
        match task {
            WarningTask::Clear { generation } if generation == self.generation && self.visible => {
                self.visible = false;
                self.pending = None;
                log::trace!("span warning cleared (generation {generation})");
                true
            }
            WarningTask::Clear { .. } => false,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

/// Span warning driven by a virtual clock.
pub type ManualSpanWarning = SpanWarning<ManualScheduler<WarningTask>>;

impl ManualSpanWarning {
    /// Advance the virtual clock and apply whatever came due.
    pub fn advance(&mut self, by: Duration) {
        for task in self.scheduler.advance(by) {
            self.apply(task);
        }
    }
}

impl Default for ManualSpanWarning {
    fn default() -> Self {
        Self::new(ManualScheduler::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WARNING_DURATION;
    use crate::warning::TokioScheduler;

    const EPSILON: Duration = Duration::from_millis(1);

    fn signal() -> WarningSignal {
        WarningSignal {
            auto_hide_after: WARNING_DURATION,
        }
    }

    #[test]
    fn test_warning_clears_after_window() {
        let mut warning = ManualSpanWarning::default();
        assert!(!warning.is_visible());

        warning.trigger(&signal());
        assert!(warning.is_visible());

        warning.advance(WARNING_DURATION - EPSILON);
        assert!(warning.is_visible());

        warning.advance(EPSILON * 2);
        assert!(!warning.is_visible());
        assert_eq!(warning.scheduler().pending_count(), 0);
    }

    #[test]
    fn test_retrigger_supersedes_earlier_timer() {
        let mut warning = ManualSpanWarning::default();
        warning.trigger(&signal());

        warning.advance(Duration::from_millis(1500));
        warning.trigger(&signal());
        assert_eq!(warning.scheduler().pending_count(), 1);

        // The first timer would have fired at 2000ms
        warning.advance(Duration::from_millis(1000));
        assert!(warning.is_visible());

        warning.advance(Duration::from_millis(1000) + EPSILON);
        assert!(!warning.is_visible());
    }

    #[test]
    fn test_stale_clear_is_ignored() {
        let mut warning = ManualSpanWarning::default();
        warning.trigger(&signal());
        warning.trigger(&signal());

        assert!(!warning.apply(WarningTask::Clear { generation: 1 }));
        assert!(warning.is_visible());
        assert!(warning.apply(WarningTask::Clear { generation: 2 }));
        assert!(!warning.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_warning_with_tokio_timer() {
        let (scheduler, mut fired) = TokioScheduler::new();
        let mut warning = SpanWarning::new(scheduler);
        let start = tokio::time::Instant::now();

        warning.trigger(&signal());
        tokio::time::sleep(Duration::from_millis(1000)).await;
        warning.trigger(&signal());

        let task = fired.recv().await.unwrap();
        assert!(warning.apply(task));
        assert!(!warning.is_visible());
        assert!(start.elapsed() >= Duration::from_millis(3000));
    }
}
