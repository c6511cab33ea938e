//! Distribution of independent counting problems over worker threads.
//!
//! Every problem is counted with its own memo table; tables never cross
//! problem or thread boundaries, so the counting itself needs no locking.
//!
//! # Strategies
//!
//! - [`Strategy::Sequential`]: count in the calling thread
//! - [`Strategy::Workers`]: fixed pool fed through a bounded queue (default)
//! - [`Strategy::Rayon`]: parallel iterator on a dedicated rayon pool
//!
//! # Worker protocol
//!
//! The producer pushes `(index, problem)` items into a bounded queue and then
//! drops its sender; a closed, drained queue is the "no more work" signal every
//! worker observes. Each worker reports `Counted` for every problem and exactly
//! one `Done` before it exits. The coordinator sums counts and stops once every
//! worker has reported `Done` (or every report sender is gone).

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::sync::{Arc, Mutex};
use std::thread;

use log::{debug, trace};
use rayon::prelude::*;

use crate::counter::{Memo, Problem};
use crate::error::{CountError, DispatchError};
use crate::memo::Backend;
use crate::progress::Progress;

/// Default bound of the work and report queues.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// How problems are spread over threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// No parallelism; count every problem in the calling thread
    Sequential,
    /// Fixed pool of worker threads fed through a bounded queue
    #[default]
    Workers,
    /// Rayon thread pool with a parallel iterator
    Rayon,
}

/// Message from a worker to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Report {
    Counted {
        index: usize,
        count: Result<u64, CountError>,
    },
    Done {
        worker: usize,
    },
}

/// Outcome of a worker pool run.
#[derive(Debug, Default)]
struct Tally {
    sum: u64,
    counted: usize,
    done: usize,
    /// First overflow seen; counting continues so workers drain the queue
    overflow: Option<DispatchError>,
}

impl Tally {
    fn add(&mut self, index: usize, count: Result<u64, CountError>) {
        self.counted += 1;
        if self.overflow.is_some() {
            return;
        }
        match count.map(|count| self.sum.checked_add(count)) {
            Ok(Some(sum)) => self.sum = sum,
            Ok(None) => self.overflow = Some(DispatchError::SumOverflow),
            Err(_) => self.overflow = Some(DispatchError::Overflow { index }),
        }
    }
}

/// Sums the arrangement counts of many problems.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    strategy: Strategy,
    threads: usize,
    queue_capacity: usize,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Strategy::default(), default_threads())
    }
}

impl Dispatcher {
    /// Creates a dispatcher. A thread count of zero is treated as one.
    pub fn new(strategy: Strategy, threads: usize) -> Self {
        Self {
            strategy,
            threads: threads.max(1),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    pub fn sequential() -> Self {
        Self::new(Strategy::Sequential, 1)
    }

    /// Sets the bound of the work and report queues (at least one slot).
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Counts every problem and returns the sum of the counts.
    ///
    /// Result order is irrelevant; the sum is the same for every strategy.
    pub fn sum(&self, problems: &[Problem], progress: &dyn Progress) -> Result<u64, DispatchError> {
        let total = problems.len();
        debug!(
            "dispatching {} problems ({:?}, {} threads)",
            total, self.strategy, self.threads
        );
        progress.started(total);

        let sum = match self.strategy {
            Strategy::Sequential => sum_sequential(problems, progress),
            Strategy::Workers => self.sum_workers(problems, progress).and_then(|tally| {
                match tally.overflow {
                    Some(err) => Err(err),
                    None => Ok(tally.sum),
                }
            }),
            Strategy::Rayon => self.sum_rayon(problems, progress),
        }?;

        progress.finished(total);
        Ok(sum)
    }

    fn sum_workers(
        &self,
        problems: &[Problem],
        progress: &dyn Progress,
    ) -> Result<Tally, DispatchError> {
        let total = problems.len();
        let workers = self.threads.min(total.max(1));
        let (work_tx, work_rx) = mpsc::sync_channel::<(usize, &Problem)>(self.queue_capacity);
        let (report_tx, report_rx) = mpsc::sync_channel::<Report>(self.queue_capacity);

        thread::scope(|s| {
            // Workers own the only handles to the queue receiver, so the
            // producer stops if every worker is gone.
            let work_rx = Arc::new(Mutex::new(work_rx));
            let handles: Vec<_> = (0..workers)
                .map(|id| {
                    let queue = Arc::clone(&work_rx);
                    let reports = report_tx.clone();
                    s.spawn(move || run_worker(id, queue, reports))
                })
                .collect();
            drop(work_rx);
            drop(report_tx);

            s.spawn(move || {
                for item in problems.iter().enumerate() {
                    if work_tx.send(item).is_err() {
                        break;
                    }
                }
            });

            let mut tally = Tally::default();
            while tally.done < workers {
                match report_rx.recv() {
                    Ok(Report::Counted { index, count }) => {
                        trace!("problem {index}: {count:?} arrangements");
                        tally.add(index, count);
                        progress.advanced(tally.counted, total);
                    }
                    Ok(Report::Done { worker }) => {
                        trace!("worker {worker} done");
                        tally.done += 1;
                    }
                    Err(_) => break,
                }
            }

            let mut panicked = None;
            for (id, handle) in handles.into_iter().enumerate() {
                if handle.join().is_err() && panicked.is_none() {
                    panicked = Some(id);
                }
            }
            if let Some(id) = panicked {
                return Err(DispatchError::WorkerPanicked(id));
            }
            if tally.counted != total {
                return Err(DispatchError::Incomplete {
                    counted: tally.counted,
                    total,
                });
            }
            Ok(tally)
        })
    }

    fn sum_rayon(&self, problems: &[Problem], progress: &dyn Progress) -> Result<u64, DispatchError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| DispatchError::ThreadPool(e.to_string()))?;

        let total = problems.len();
        let counted = AtomicUsize::new(0);
        let run = || {
            problems
                .par_iter()
                .enumerate()
                .map(|(index, problem)| {
                    let count = problem.count();
                    let done = counted.fetch_add(1, Ordering::Relaxed) + 1;
                    progress.advanced(done, total);
                    count.map_err(|_| DispatchError::Overflow { index })
                })
                .try_reduce(|| 0, checked_sum)
        };

        panic::catch_unwind(AssertUnwindSafe(|| pool.install(run)))
            .map_err(|_| DispatchError::PoolPanicked)?
    }
}

fn checked_sum(a: u64, b: u64) -> Result<u64, DispatchError> {
    a.checked_add(b).ok_or(DispatchError::SumOverflow)
}

fn sum_sequential(problems: &[Problem], progress: &dyn Progress) -> Result<u64, DispatchError> {
    let total = problems.len();
    problems
        .iter()
        .enumerate()
        .try_fold(0, |sum, (index, problem)| {
            let count = problem
                .count()
                .map_err(|_| DispatchError::Overflow { index })?;
            progress.advanced(index + 1, total);
            checked_sum(sum, count)
        })
}

fn run_worker(
    id: usize,
    queue: Arc<Mutex<Receiver<(usize, &Problem)>>>,
    reports: SyncSender<Report>,
) {
    loop {
        let next = match queue.lock() {
            Ok(rx) => rx.recv(),
            Err(_) => break,
        };
        let Ok((index, problem)) = next else {
            break;
        };

        let (count, memo) = problem.count_with(Memo::new());
        trace!("worker {id}: problem {index} used {} memo entries", memo.len());
        if reports.send(Report::Counted { index, count }).is_err() {
            return;
        }
    }
    // The coordinator may already be gone; nothing left to report to.
    let _ = reports.send(Report::Done { worker: id });
}

/// Default pool size: twice the available parallelism.
pub fn default_threads() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        * 2
}
