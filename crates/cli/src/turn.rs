//! Runs one agent decision against a wall-clock deadline.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use isolation_core::agent::{Agent, AgentContext};
use isolation_core::board::Board;
use isolation_core::report::{Report, report_channel};
use tracing::trace;

const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Lets `agent` think about `board` for at most `time_limit`, then cancels it
/// and returns the last report it published.
pub fn run_turn(
    agent: &mut Agent,
    ctx: &mut AgentContext,
    board: &Board,
    time_limit: Duration,
) -> Result<Option<Report>> {
    let (tx, rx) = report_channel();
    let deadline = Instant::now() + time_limit;

    thread::scope(|s| {
        let worker = s.spawn(|| agent.decide(board, ctx, &tx));
        while !worker.is_finished() && Instant::now() < deadline {
            thread::sleep(POLL_INTERVAL);
        }
        if !worker.is_finished() {
            trace!(publish_count = rx.publish_count(), "deadline reached, cancelling");
            rx.cancel();
        }
        worker.join().map_err(|_| anyhow!("agent thread panicked"))
    })?;

    Ok(rx.latest())
}
