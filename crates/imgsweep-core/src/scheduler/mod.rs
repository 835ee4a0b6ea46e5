//! Download scheduler.
//!
//! Turns the extracted URL queue into tasks with unique destinations, then
//! drives the fetcher over them in fixed-size batches with a full barrier
//! between batches, folding outcomes into a [`RunSummary`].

mod batch;
mod progress;
mod summary;
mod task;

pub use batch::run_batches;
pub use progress::{BatchProgress, EventSender, RunEvent};
pub use summary::RunSummary;
pub use task::{plan_tasks, DownloadTask};

pub(crate) use progress::emit;
