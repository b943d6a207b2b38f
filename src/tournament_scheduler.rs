use std::collections::VecDeque;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{error, trace};

/// Keeps track of pending and running matches, launching new ones as slots free up.
///
/// A `max_parallel` of `0` lets every match run at once.
pub(crate) struct TournamentScheduler<M> {
    pending_matches: VecDeque<M>,
    running_matches: usize,
    max_parallel: usize,
}

impl<M> TournamentScheduler<M> {
    pub fn new(matches: impl IntoIterator<Item = M>, max_parallel: usize) -> Self {
        TournamentScheduler {
            pending_matches: matches.into_iter().collect(),
            running_matches: 0,
            max_parallel,
        }
    }

    /// Matches that can be launched now.
    pub fn advance(&mut self) -> Vec<M> {
        let free = if self.max_parallel == 0 {
            self.pending_matches.len()
        } else {
            self.max_parallel.saturating_sub(self.running_matches)
        };
        let n = free.min(self.pending_matches.len());
        let matches_to_run: Vec<M> = self.pending_matches.drain(..n).collect();
        self.running_matches += matches_to_run.len();
        matches_to_run
    }

    /// A running match finished: returns the matches that can take its place.
    pub fn on_result(&mut self) -> Vec<M> {
        self.running_matches -= 1;
        self.advance()
    }

    /// All matches ran and finished
    pub fn is_finished(&self) -> bool {
        self.running_matches == 0 && self.pending_matches.is_empty()
    }

    pub fn running(&self) -> usize {
        self.running_matches
    }
}

/// Run `play` on every match, each on its own thread, and feed the reports to `consume` on the
/// calling thread as they arrive.
///
/// `consume` receives `None` when the match panicked. It is the only place where results are
/// handled, so it needs no synchronisation.
pub(crate) fn run_matches<M, R, P, C>(
    matches: Vec<M>,
    max_parallel: usize,
    play: P,
    mut consume: C,
) where
    M: Send + 'static,
    R: Send + 'static,
    P: Fn(M) -> R + Send + Sync + 'static,
    C: FnMut(Option<R>),
{
    let play = Arc::new(play);
    let mut scheduler = TournamentScheduler::new(matches, max_parallel);
    let (tx_result, rx_result) = mpsc::channel();

    for m in scheduler.advance() {
        launch_match(m, &play, tx_result.clone());
    }

    while !scheduler.is_finished() {
        // not finished <=> match running <=> report to receive
        let Ok(report) = rx_result.recv() else {
            error!("report channel closed with {} matches running", scheduler.running());
            break;
        };
        consume(report);
        for m in scheduler.on_result() {
            launch_match(m, &play, tx_result.clone());
        }
    }
    trace!("all matches finished");
}

fn launch_match<M, R, P>(m: M, play: &Arc<P>, tx_result: Sender<Option<R>>)
where
    M: Send + 'static,
    R: Send + 'static,
    P: Fn(M) -> R + Send + Sync + 'static,
{
    let play = Arc::clone(play);
    let tx_report = tx_result.clone();
    let spawned = thread::Builder::new()
        .name("match".to_owned())
        .spawn(move || {
            let report = panic::catch_unwind(AssertUnwindSafe(|| play(m)));
            if report.is_err() {
                error!("match task panicked");
            }
            // the receiver outlives every running match
            let _ = tx_result.send(report.ok());
        });
    report_spawn_failure(spawned, &tx_report);
}

/// A match whose thread could not be started is reported as failed, so the consumer still
/// counts it as finished.
fn report_spawn_failure<R>(spawned: io::Result<JoinHandle<()>>, tx_result: &Sender<Option<R>>) {
    if let Err(e) = spawned {
        error!("could not start match thread: {e}");
        let _ = tx_result.send(None);
    }
}
