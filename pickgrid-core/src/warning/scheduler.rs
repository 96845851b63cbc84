//! Deferred, cancellable tasks.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Identifies a scheduled task so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

/// Something that runs a task after a delay.
///
/// Tasks are plain values. Whoever owns the scheduler receives them when
/// they come due and decides what they mean.
pub trait Scheduler<T> {
    fn schedule_after(&mut self, delay: Duration, task: T) -> TaskHandle;

    /// Returns true if the task was still pending.
    fn cancel(&mut self, handle: TaskHandle) -> bool;
}

struct PendingTask<T> {
    handle: TaskHandle,
    due: Duration,
    task: T,
}

/// Virtual clock scheduler. Time only moves when [`advance`](Self::advance)
/// is called.
pub struct ManualScheduler<T> {
    elapsed: Duration,
    next_id: u64,
    pending: Vec<PendingTask<T>>,
}

impl<T> Default for ManualScheduler<T> {
    fn default() -> Self {
        ManualScheduler {
            elapsed: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> ManualScheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward and return every task that came due, earliest
    /// first. Tasks due at the same instant fire in scheduling order.
    pub fn advance(&mut self, by: Duration) -> Vec<T> {
        self.elapsed += by;
        let now = self.elapsed;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = waiting;

        due.sort_by_key(|p| (p.due, p.handle.0));
        log::trace!("advanced to {:?}, {} task(s) due", now, due.len());
        due.into_iter().map(|p| p.task).collect()
    }
}

impl<T> Scheduler<T> for ManualScheduler<T> {
    fn schedule_after(&mut self, delay: Duration, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTask {
            handle,
            due: self.elapsed + delay,
            task,
        });
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        before != self.pending.len()
    }
}

/// Wall-clock scheduler backed by tokio timers.
///
/// Fired tasks arrive on the receiver returned by [`TokioScheduler::new`].
/// Scheduling must happen inside a tokio runtime.
pub struct TokioScheduler<T> {
    next_id: u64,
    sender: mpsc::UnboundedSender<T>,
    timers: HashMap<TaskHandle, JoinHandle<()>>,
}

impl<T: Send + 'static> TokioScheduler<T> {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<T>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = TokioScheduler {
            next_id: 0,
            sender,
            timers: HashMap::new(),
        };
        (scheduler, receiver)
    }
}

impl<T: Send + 'static> Scheduler<T> for TokioScheduler<T> {
    fn schedule_after(&mut self, delay: Duration, task: T) -> TaskHandle {
        self.timers.retain(|_, timer| !timer.is_finished());

        let handle = TaskHandle(self.next_id);
        self.next_id += 1;

        let sender = self.sender.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means nobody cares anymore
            let _ = sender.send(task);
        });
        self.timers.insert(handle, timer);
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.timers.remove(&handle) {
            Some(timer) => {
                let was_pending = !timer.is_finished();
                timer.abort();
                was_pending
            }
            None => false,
        }
    }
}

impl<T> Drop for TokioScheduler<T> {
    fn drop(&mut self) {
        for timer in self.timers.values() {
            timer.abort();
        }
    }
}
