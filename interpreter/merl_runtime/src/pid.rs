//! Process identifiers and mailboxes.
//!
//! A process identifier is an opaque handle to a mailbox: an unbounded
//! FIFO queue of values. Sends never block the sender; once the owning
//! process has terminated the mailbox is closed and further sends are
//! silently dropped, so post-termination sends never crash anyone.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crossbeam::channel::{unbounded, Receiver, Sender};

use crate::value::Value;

/// Monotonic process id allocator.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// A process identifier: a shared handle to one mailbox.
///
/// Cloning a `Pid` clones the handle, not the mailbox. Equality is
/// identity on the underlying mailbox.
#[derive(Clone)]
pub struct Pid(Arc<Mailbox>);

struct Mailbox {
    id: u64,
    tx: Sender<Value>,
    rx: Receiver<Value>,
    closed: AtomicBool,
}

impl Pid {
    /// Allocate a fresh process identifier with an empty mailbox.
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Pid(Arc::new(Mailbox {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            tx,
            rx,
            closed: AtomicBool::new(false),
        }))
    }

    /// The numeric id, unique for the lifetime of the program.
    pub fn id(&self) -> u64 {
        self.0.id
    }

    /// Enqueue a message. Returns immediately; the message is dropped if
    /// the mailbox has been closed.
    pub fn send(&self, msg: Value) {
        if self.0.closed.load(Ordering::Acquire) {
            return;
        }
        // The channel can only disconnect if the mailbox itself is gone,
        // in which case dropping the message is exactly the contract.
        let _ = self.0.tx.send(msg);
    }

    /// Block until the next message arrives.
    ///
    /// Only the owning process reads its mailbox. `None` is impossible
    /// while the handle is alive but kept in the signature so callers
    /// need no unwrap.
    pub fn recv(&self) -> Option<Value> {
        self.0.rx.recv().ok()
    }

    /// Block until the next message arrives or the deadline passes.
    pub fn recv_deadline(&self, deadline: Instant) -> Option<Value> {
        self.0.rx.recv_deadline(deadline).ok()
    }

    /// Close the mailbox. Subsequent sends are dropped.
    pub fn close(&self) {
        self.0.closed.store(true, Ordering::Release);
    }
}

impl Default for Pid {
    fn default() -> Self {
        Pid::new()
    }
}

impl PartialEq for Pid {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Pid {}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<0.{}.0>", self.0.id)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pid({self})")
    }
}
