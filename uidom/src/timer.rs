//! Virtual-clock timers.
//!
//! Time only moves when the host calls [`Page::advance`]. Callbacks run
//! one at a time in due-time order, ties broken by scheduling order.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use crate::page::Page;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a scheduled timeout or interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

enum Task {
    Once(Box<dyn FnOnce(&mut Page)>),
    Repeat {
        period: Duration,
        callback: Box<dyn FnMut(&mut Page)>,
    },
}

type Key = (Duration, u64);

#[derive(Default)]
pub(crate) struct TimerQueue {
    now: Duration,
    next_seq: u64,
    next_id: u64,
    pending: BTreeMap<Key, (TimerId, Task)>,
    index: HashMap<TimerId, Key>,
    /// Timer whose callback is running, and whether it cleared itself.
    running: Option<(TimerId, bool)>,
}

impl TimerQueue {
    pub(crate) fn now(&self) -> Duration {
        self.now
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    fn allocate(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }

    fn schedule(&mut self, id: TimerId, due: Duration, task: Task) {
        let key = (due, self.next_seq);
        self.next_seq += 1;
        self.pending.insert(key, (id, task));
        self.index.insert(id, key);
    }

    fn pop_due(&mut self, until: Duration) -> Option<(Duration, TimerId, Task)> {
        let (&key, _) = self.pending.first_key_value()?;
        if key.0 > until {
            return None;
        }
        let (id, task) = self.pending.remove(&key)?;
        self.index.remove(&id);
        Some((key.0, id, task))
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        if let Some(key) = self.index.remove(&id) {
            self.pending.remove(&key);
            return true;
        }
        match &mut self.running {
            Some((running, cleared)) if *running == id && !*cleared => {
                *cleared = true;
                true
            }
            _ => false,
        }
    }
}

impl Page {
    /// Current virtual time since the page was created.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Number of scheduled timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Run `callback` once, `delay` from now.
    pub fn set_timeout<F>(&mut self, delay: Duration, callback: F) -> TimerId
    where
        F: FnOnce(&mut Page) + 'static,
    {
        let id = self.timers.allocate();
        let due = self.timers.now() + delay;
        self.timers.schedule(id, due, Task::Once(Box::new(callback)));
        id
    }

    /// Run `callback` every `period` until cleared. Periods shorter than a
    /// millisecond are raised to one.
    pub fn set_interval<F>(&mut self, period: Duration, callback: F) -> TimerId
    where
        F: FnMut(&mut Page) + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let id = self.timers.allocate();
        let due = self.timers.now() + period;
        self.timers.schedule(
            id,
            due,
            Task::Repeat {
                period,
                callback: Box::new(callback),
            },
        );
        id
    }

    /// Cancel a timer. Safe to call from the timer's own callback.
    /// Returns true if the timer was still live.
    pub fn clear_timer(&mut self, id: TimerId) -> bool {
        self.timers.cancel(id)
    }

    /// Move the clock forward by `delta`, firing every timer that falls due.
    /// Returns the number of callbacks run. Time never moves backwards,
    /// even when a callback advances the clock itself.
    pub fn advance(&mut self, delta: Duration) -> usize {
        let until = self.timers.now() + delta;
        let outer = self.timers.running;
        let mut fired = 0;

        while let Some((due, id, task)) = self.timers.pop_due(until) {
            self.timers.now = self.timers.now.max(due);
            self.timers.running = Some((id, false));
            match task {
                Task::Once(callback) => callback(self),
                Task::Repeat {
                    period,
                    mut callback,
                } => {
                    callback(self);
                    let cleared = matches!(self.timers.running, Some((_, true)));
                    if !cleared {
                        self.timers.schedule(id, due + period, Task::Repeat { period, callback });
                    }
                }
            }
            self.timers.running = outer;
            fired += 1;
        }

        // A callback may have advanced the clock past `until` itself
        self.timers.now = self.timers.now.max(until);
        fired
    }
}
