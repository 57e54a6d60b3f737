//! Fan-out/fan-in batch runner.
//!
//! Every track gets its own lookup task on a dedicated rayon pool. Workers
//! send their report over a channel to a single aggregator thread, which is
//! the only owner of the `BatchResult` under construction. The pool scope is
//! the barrier: `run` returns only after every task has reported.

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{unbounded, Receiver};
use std::thread;

use crate::lookup::LyricsLookup;
use crate::models::{BatchResult, LookupOutcome, TrackRef};
use crate::progress::{create_progress_bar, log_progress};
use crate::worker::Worker;

/// Log-only progress interval (tracks)
const LOG_INTERVAL: u64 = 100;

/// How many lookups may be in flight at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Concurrency {
    /// One thread per track.
    Unbounded,
    /// At most `n` concurrent lookups (n >= 1).
    Capped(usize),
}

impl Concurrency {
    /// CLI mapping: 0 means unbounded.
    pub fn from_workers(workers: usize) -> Self {
        if workers == 0 {
            Concurrency::Unbounded
        } else {
            Concurrency::Capped(workers)
        }
    }

    /// Thread count for a batch of `tracks` items.
    pub fn pool_size(self, tracks: usize) -> usize {
        let size = match self {
            Concurrency::Unbounded => tracks,
            Concurrency::Capped(n) => n.min(tracks),
        };
        size.max(1)
    }
}

pub struct BatchOrchestrator<'a, L: ?Sized> {
    client: &'a L,
    concurrency: Concurrency,
}

impl<'a, L: LyricsLookup + ?Sized> BatchOrchestrator<'a, L> {
    pub fn new(client: &'a L, concurrency: Concurrency) -> Self {
        Self {
            client,
            concurrency,
        }
    }

    /// Look up every track concurrently and collect the successes.
    ///
    /// Per-track failures never abort the batch. Errors are limited to
    /// setting up the thread pool or the aggregator thread dying.
    pub fn run(&self, tracks: Vec<TrackRef>) -> Result<BatchResult> {
        let attempted = tracks.len();
        if attempted == 0 {
            return Ok(BatchResult::new(0));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.concurrency.pool_size(attempted))
            .thread_name(|i| format!("lyrics-worker-{}", i))
            .build()
            .context("Failed to build lookup thread pool")?;

        let (tx, rx) = unbounded::<(TrackRef, LookupOutcome)>();
        let worker = Worker::new(self.client);

        thread::scope(|s| {
            let aggregator = s.spawn(move || aggregate(rx, attempted));

            pool.in_place_scope(|scope| {
                let worker = &worker;
                for track in tracks {
                    let tx = tx.clone();
                    scope.spawn(move |_| {
                        // Receiver only goes away if the aggregator panicked.
                        let _ = tx.send(worker.run(track));
                    });
                }
            });
            drop(tx);

            aggregator
                .join()
                .map_err(|_| anyhow!("Result aggregator panicked"))
        })
    }
}

/// Drain worker reports until every sender is gone.
fn aggregate(rx: Receiver<(TrackRef, LookupOutcome)>, attempted: usize) -> BatchResult {
    let pb = create_progress_bar(attempted as u64, "Fetching lyrics");
    let mut result = BatchResult::new(attempted);

    for (track, outcome) in rx {
        result.record(track, outcome);
        pb.inc(1);
        log_progress("fetch", result.reported() as u64, attempted as u64, LOG_INTERVAL);
    }

    pb.finish_with_message(format!(
        "Fetched lyrics for {}/{} tracks",
        result.succeeded, attempted
    ));
    result
}
