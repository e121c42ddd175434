// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A one-slot task queue for work deferred to the next rendered frame.
//!
//! The host drives it: it schedules a task, arranges for a frame callback,
//! and calls [`FrameQueue::flush`] from that callback. At most one task is
//! ever pending; scheduling while one is pending coalesces into it, so a
//! burst of registrations within a frame produces a single batch. Every
//! scheduled task can be aborted through its [`CancelToken`] before the
//! frame runs.

/// A handle to a pending task, used to abort it before it runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CancelToken(u64);

/// The one-slot frame task queue.
#[derive(Debug)]
pub struct FrameQueue<T> {
    pending: Option<(CancelToken, T)>,
    next_token: u64,
}

impl<T> Default for FrameQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameQueue<T> {
    /// An empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: None,
            next_token: 0,
        }
    }

    /// Schedule `task` for the next flush.
    ///
    /// When a task is already pending the new one is discarded and the
    /// pending task's token is returned: the pending batch already covers the
    /// work.
    pub fn schedule(&mut self, task: T) -> CancelToken {
        if let Some((token, _)) = &self.pending {
            return *token;
        }
        let token = CancelToken(self.next_token);
        self.next_token += 1;
        self.pending = Some((token, task));
        token
    }

    /// Abort the pending task if `token` still refers to it. Returns whether
    /// anything was aborted.
    pub fn cancel(&mut self, token: CancelToken) -> bool {
        match &self.pending {
            Some((pending, _)) if *pending == token => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// The pending task, if any, without taking it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|(_, task)| task)
    }

    /// Take the pending task, if its token has not been cancelled.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(_, task)| task)
    }

    /// Drop the pending task unconditionally.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Whether a task is waiting for the next frame.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_returns_the_scheduled_task_once() {
        let mut q = FrameQueue::new();
        q.schedule(1);
        assert!(q.is_pending());
        assert_eq!(q.flush(), Some(1));
        assert!(!q.is_pending());
        assert_eq!(q.flush(), None);
    }

    #[test]
    fn scheduling_while_pending_coalesces() {
        let mut q = FrameQueue::new();
        let first = q.schedule(1);
        let second = q.schedule(2);
        assert_eq!(first, second);
        // The original batch survives; the duplicate is dropped.
        assert_eq!(q.flush(), Some(1));
    }

    #[test]
    fn cancelled_tasks_never_flush() {
        let mut q = FrameQueue::new();
        let token = q.schedule(1);
        assert!(q.cancel(token));
        assert_eq!(q.flush(), None);
        // Cancelling twice is a no-op.
        assert!(!q.cancel(token));
    }

    #[test]
    fn a_stale_token_cannot_cancel_a_newer_task() {
        let mut q = FrameQueue::new();
        let stale = q.schedule(1);
        q.flush();
        let fresh = q.schedule(2);
        assert_ne!(stale, fresh);
        assert!(!q.cancel(stale));
        assert_eq!(q.flush(), Some(2));
    }
}
