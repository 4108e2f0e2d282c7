use std::collections::{HashSet, VecDeque};
use std::mem::take;

use log::debug;

use crate::polyomino::Polyomino;

/// Per square count statistics of the growth
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Free polyominoes, with or without holes
    pub accepted: usize,
    /// Free polyominoes without holes
    pub hole_free: usize,
    /// Candidates submitted, duplicates included
    pub registered: usize,
}

impl Stats {
    pub fn redundant(&self) -> usize {
        self.registered - self.accepted
    }
}

/// The database holds:
/// - the queue of unprocessed polyominoes of the last square count
/// - the cache of polyominoes for the next square count, in acceptance order
/// - stats by square count
///
/// Only one generation is cached at a time: flushing moves the cache into
/// the queue.
pub struct Database {
    queue: VecDeque<Polyomino>,
    cache: Vec<Polyomino>,
    seen: HashSet<Polyomino>,
    stats: Vec<Stats>,
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl Database {
    /// A database whose queue holds the single-cell polyomino
    pub fn new() -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(Polyomino::trivial());

        Self {
            queue,
            cache: vec![],
            seen: HashSet::new(),
            stats: vec![
                Stats {
                    accepted: 1,
                    hole_free: 1,
                    registered: 1,
                },
                Stats::default(),
            ],
        }
    }

    /// Square count of the polyominoes in the queue
    pub fn square_count(&self) -> usize {
        self.stats.len() - 1
    }

    pub fn pop(&mut self) -> Option<Polyomino> {
        self.queue.pop_front()
    }

    /// Register a candidate of the next generation.
    /// If no symmetric image of `p` was registered before, `p` itself becomes
    /// the representative of its class and is returned.
    pub fn register(&mut self, p: Polyomino) -> Option<&Polyomino> {
        let stats = self.next_stats();
        stats.registered += 1;

        if p.orbit().any(|q| self.seen.contains(&q)) {
            return None;
        }

        self.next_stats().accepted += 1;
        self.seen.insert(p.clone());
        self.cache.push(p);
        self.cache.last()
    }

    /// Count an accepted polyomino of the next generation as hole-free
    pub fn mark_hole_free(&mut self) {
        self.next_stats().hole_free += 1;
    }

    fn next_stats(&mut self) -> &mut Stats {
        // `stats` always ends with the entry of the generation being built
        let last = self.stats.len() - 1;
        &mut self.stats[last]
    }

    /// Flush the cache into the queue, ready to start processing the polyominoes
    /// with one more square.
    /// Panics if the queue is not empty.
    pub fn flush(&mut self) {
        if !self.queue.is_empty() {
            panic!("The queue database is not empty!")
        }

        self.seen.clear();
        self.queue = take(&mut self.cache).into();

        if let Some(stats) = self.stats.last() {
            debug!(
                "With {} squares: {} free, {} without hole ({} redundancies)",
                self.square_count() + 1,
                stats.accepted,
                stats.hole_free,
                stats.redundant()
            );
        }
        self.stats.push(Stats::default());
    }

    /// Returns the statistics of polyominoes with `n` squares,
    /// or None if that generation is not complete
    pub fn stats(&self, n: usize) -> Option<&Stats> {
        if n == 0 {
            return None;
        }
        self.stats[..self.square_count()].get(n - 1)
    }

    /// Statistics of every complete generation, by increasing square count
    pub fn all_stats(&self) -> std::slice::Iter<'_, Stats> {
        self.stats[..self.square_count()].iter()
    }
}
