//! Anytime channel between the decision loop and its host.
//!
//! The agent overwrites a single slot every time it has a better answer; the
//! host may read the slot at any moment and asks the agent to stop through a
//! shared cancellation flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::cell::Cell;
use crate::types::{Depth, Score};
use crate::util::spinlock::SpinMutex;

/// A move recommendation published by the agent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    pub best_move: Cell,
    /// Value of `best_move` for the side to move.
    pub score: Score,
    /// Completed search depth backing the move, 0 for unsearched moves.
    pub depth: Depth,
    pub n_nodes: u64,
}

#[derive(Default)]
struct Slot {
    latest: Option<Report>,
    published: u64,
}

struct Shared {
    slot: SpinMutex<Slot>,
    cancelled: Arc<AtomicBool>,
}

/// Creates a connected sender/receiver pair with an empty slot.
pub fn report_channel() -> (ReportSender, ReportReceiver) {
    let shared = Arc::new(Shared {
        slot: SpinMutex::new(Slot::default()),
        cancelled: Arc::new(AtomicBool::new(false)),
    });
    (
        ReportSender {
            shared: Arc::clone(&shared),
        },
        ReportReceiver { shared },
    )
}

/// Producer half, owned by the agent.
pub struct ReportSender {
    shared: Arc<Shared>,
}

impl ReportSender {
    /// Replaces the stored report.
    pub fn publish(&self, report: Report) {
        let mut slot = self.shared.slot.lock();
        slot.latest = Some(report);
        slot.published += 1;
    }

    /// Returns `true` once the receiver asked the agent to stop.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::Relaxed)
    }

    /// Returns the shared cancellation flag, for a search to poll.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shared.cancelled)
    }
}

/// Consumer half, owned by the host.
pub struct ReportReceiver {
    shared: Arc<Shared>,
}

impl ReportReceiver {
    /// Returns the most recently published report.
    pub fn latest(&self) -> Option<Report> {
        self.shared.slot.lock().latest
    }

    /// Asks the agent to stop. Reports published afterwards are still stored.
    pub fn cancel(&self) {
        self.shared.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::Relaxed)
    }

    /// Returns how many reports have been published so far.
    pub fn publish_count(&self) -> u64 {
        self.shared.slot.lock().published
    }
}
