//! A ticket-office simulation on top of [`List`].
//!
//! An [`Office`] owns one queue per service window. Customers take
//! numbered tickets, wait in a window's queue, may be relocated to
//! another window, be pulled out in a contiguous run, or watch their
//! whole queue migrate when a window closes. Every queue operation maps
//! onto one of the constant-time list primitives: joining a queue is a
//! `push_back`, serving is a `pop_front`, closing a window is a splice,
//! and a manager reversing a queue is the *O*(1) list reversal.
//!
//! In [`Office::extract_range`], the two handles give two positions in
//! the same queue in unknown order (the queue may have been reversed any
//! number of times). Extraction recovers the run's direction with the
//! list's probe, then erases node by node along that way.
//!
//! # Examples
//!
//! ```
//! use symmetric_list::office::Office;
//!
//! let mut office = Office::open(2);
//! let first = office.issue_ticket(0);
//! let second = office.issue_ticket(0);
//! assert_eq!(first.number(), 0);
//! assert_eq!(second.number(), 1);
//!
//! assert_eq!(office.serve(0), Some(first));
//! assert_eq!(office.serve(0), Some(second));
//! // Serving an empty queue is not an error.
//! assert_eq!(office.serve(0), None);
//! ```

use std::collections::HashMap;

use crate::list::{probe, List, Raw};

/// A handle to a waiting customer: the ticket they were issued.
///
/// The handle stays valid until the ticket is served, extracted or the
/// office shuts down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// The number printed on the ticket. Numbers are issued
    /// consecutively from zero.
    pub fn number(self) -> u64 {
        self.0
    }
}

/// Where a waiting ticket currently is: its window and its node in that
/// window's queue.
#[derive(Clone, Copy)]
struct Spot {
    window: usize,
    at: Raw<u64>,
}

/// A ticket office with a fixed number of service windows.
pub struct Office {
    windows: Vec<List<u64>>,
    spots: HashMap<u64, Spot>,
    next_number: u64,
}

impl Office {
    /// Open an office with `windows` service windows, all queues empty.
    pub fn open(windows: usize) -> Self {
        Self {
            windows: (0..windows).map(|_| List::new()).collect(),
            spots: HashMap::new(),
            next_number: 0,
        }
    }

    /// The number of service windows.
    pub fn windows(&self) -> usize {
        self.windows.len()
    }

    /// The number of customers waiting at `window`.
    ///
    /// # Panics
    ///
    /// Panics if `window` is out of range.
    pub fn queue_len(&self, window: usize) -> usize {
        self.windows[window].len()
    }

    /// Issue the next ticket and put it at the back of `window`'s queue.
    ///
    /// # Panics
    ///
    /// Panics if `window` is out of range.
    pub fn issue_ticket(&mut self, window: usize) -> Ticket {
        let number = self.next_number;
        self.next_number += 1;
        let queue = &mut self.windows[window];
        let end = queue.raw_end();
        // SAFETY: `end` is a position of `queue`.
        let at = unsafe { queue.insert_raw(end, number) };
        self.spots.insert(number, Spot { window, at });
        Ticket(number)
    }

    /// Serve the front of `window`'s queue and return its ticket, or
    /// `None` if nobody is waiting there.
    ///
    /// # Panics
    ///
    /// Panics if `window` is out of range.
    pub fn serve(&mut self, window: usize) -> Option<Ticket> {
        if self.windows[window].is_empty() {
            return None;
        }
        let number = self.windows[window].pop_front();
        self.spots.remove(&number);
        Some(Ticket(number))
    }

    /// Move a waiting customer to the back of `window`'s queue.
    ///
    /// # Panics
    ///
    /// Panics if the ticket is unknown (already served or extracted), or
    /// if `window` is out of range.
    pub fn relocate(&mut self, ticket: Ticket, window: usize) {
        let spot = *self
            .spots
            .get(&ticket.0)
            .expect("relocated a ticket that is no longer waiting");
        // SAFETY: `spot.at` is the recorded position of this ticket's
        // node in its window's queue; it stays valid until erased here.
        let (number, _) = unsafe { self.windows[spot.window].erase_raw(spot.at) };
        debug_assert_eq!(number, ticket.0);
        let queue = &mut self.windows[window];
        let end = queue.raw_end();
        // SAFETY: `end` is a position of `queue`.
        let at = unsafe { queue.insert_raw(end, number) };
        self.spots.insert(number, Spot { window, at });
    }

    /// Close window `from`: its whole queue moves to the back of `to`'s
    /// queue, in order. Window `from` stays open for new tickets with an
    /// empty queue.
    ///
    /// The queue transfer is a single *O*(1) splice; re-homing the moved
    /// tickets in the registry is linear in the donor queue.
    ///
    /// # Panics
    ///
    /// Panics if `from == to` or if either window is out of range.
    pub fn close_and_merge(&mut self, from: usize, to: usize) {
        assert_ne!(from, to, "merged a window queue into itself");
        let mut donor = std::mem::take(&mut self.windows[from]);
        for &number in donor.iter() {
            self.spots
                .get_mut(&number)
                .expect("queued ticket missing from the registry")
                .window = to;
        }
        self.windows[to].append(&mut donor);
        self.windows[from] = donor;
    }

    /// Pull the contiguous run of customers between `first` and `last`
    /// (both inclusive, in either order) out of their queue, returning
    /// the tickets in walk order from `first` to `last`.
    ///
    /// The direction of the walk is not known up front (the queue may
    /// have been reversed since the tickets were issued), so it is
    /// recovered with the list's directional probe.
    ///
    /// # Panics
    ///
    /// Panics if either ticket is unknown, or if the two tickets wait at
    /// different windows.
    pub fn extract_range(&mut self, first: Ticket, last: Ticket) -> Vec<Ticket> {
        let a = *self
            .spots
            .get(&first.0)
            .expect("extracted a ticket that is no longer waiting");
        let b = *self
            .spots
            .get(&last.0)
            .expect("extracted a ticket that is no longer waiting");
        assert_eq!(
            a.window, b.window,
            "extracted a range across two different windows"
        );
        let queue = &mut self.windows[a.window];
        // SAFETY: both nodes belong to the same queue, so the probe stays
        // within it.
        let (fwd, steps) = unsafe { probe(a.at.node, b.at.node) }
            .expect("two tickets of one window must reach each other");
        let mut at = Raw::new(a.at.node, fwd);
        let mut run = Vec::with_capacity(steps + 1);
        for _ in 0..=steps {
            // SAFETY: `at` walks over still-linked value nodes of `queue`,
            // from `first` towards `last`.
            let (number, next) = unsafe { queue.erase_raw(at) };
            self.spots.remove(&number);
            run.push(Ticket(number));
            at = next;
        }
        run
    }

    /// Reverse the queue at `window` in *O*(1).
    ///
    /// # Panics
    ///
    /// Panics if `window` is out of range.
    pub fn reverse(&mut self, window: usize) {
        self.windows[window].reverse();
    }

    /// Close the office. Returns all still-waiting tickets, lowest
    /// window first, each queue from front to back.
    pub fn shutdown(mut self) -> Vec<Ticket> {
        let mut remaining = Vec::with_capacity(self.spots.len());
        for queue in &mut self.windows {
            while !queue.is_empty() {
                remaining.push(Ticket(queue.pop_front()));
            }
        }
        remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn numbers(tickets: &[Ticket]) -> Vec<u64> {
        tickets.iter().map(|t| t.number()).collect()
    }

    #[test]
    fn serve_in_issue_order() {
        let mut office = Office::open(2);
        let first = office.issue_ticket(0);
        let second = office.issue_ticket(1);
        assert_eq!(first.number(), 0);
        assert_eq!(second.number(), 1);

        assert_eq!(office.serve(0), Some(first));
        // The queue of window 0 is now empty; serving it reports nobody
        // instead of failing.
        assert_eq!(office.serve(0), None);
        assert_eq!(office.serve(1), Some(second));
    }

    #[test]
    fn relocate_moves_to_the_back() {
        let mut office = Office::open(2);
        let a = office.issue_ticket(0);
        let b = office.issue_ticket(0);
        let c = office.issue_ticket(1);

        office.relocate(a, 1);
        assert_eq!(office.queue_len(0), 1);
        assert_eq!(office.queue_len(1), 2);

        assert_eq!(office.serve(1), Some(c));
        assert_eq!(office.serve(1), Some(a));
        assert_eq!(office.serve(0), Some(b));
    }

    #[test]
    fn close_and_merge_preserves_order() {
        let mut office = Office::open(3);
        let t: Vec<_> = (0..6).map(|i| office.issue_ticket(i % 3)).collect();
        // queues: 0: [t0, t3], 1: [t1, t4], 2: [t2, t5]

        office.close_and_merge(1, 0);
        assert_eq!(office.queue_len(1), 0);
        assert_eq!(office.queue_len(0), 4);

        // Window 1 stays usable after closing.
        let late = office.issue_ticket(1);

        assert_eq!(office.serve(0), Some(t[0]));
        assert_eq!(office.serve(0), Some(t[3]));
        assert_eq!(office.serve(0), Some(t[1]));
        assert_eq!(office.serve(0), Some(t[4]));
        assert_eq!(office.serve(1), Some(late));

        // Merged tickets are still relocatable (their window was
        // re-homed).
        let survivor = office.issue_ticket(1);
        office.close_and_merge(1, 2);
        office.relocate(survivor, 0);
        assert_eq!(office.serve(0), Some(survivor));
    }

    #[test]
    #[should_panic(expected = "merged a window queue into itself")]
    fn close_and_merge_self() {
        let mut office = Office::open(2);
        office.close_and_merge(1, 1);
    }

    #[test]
    fn extract_range_in_both_orders() {
        let mut office = Office::open(1);
        let t: Vec<_> = (0..6).map(|_| office.issue_ticket(0)).collect();

        let run = office.extract_range(t[1], t[3]);
        assert_eq!(numbers(&run), vec![1, 2, 3]);
        assert_eq!(office.queue_len(0), 3);

        // The handles may come in reverse queue order too.
        let run = office.extract_range(t[5], t[0]);
        assert_eq!(numbers(&run), vec![5, 4, 0]);
        assert_eq!(office.queue_len(0), 0);
    }

    #[test]
    fn extract_range_single() {
        let mut office = Office::open(1);
        let a = office.issue_ticket(0);
        let b = office.issue_ticket(0);

        assert_eq!(office.extract_range(a, a), vec![a]);
        assert_eq!(office.serve(0), Some(b));
    }

    #[test]
    fn extract_range_after_reverse() {
        let mut office = Office::open(1);
        let t: Vec<_> = (0..5).map(|_| office.issue_ticket(0)).collect();

        office.reverse(0);
        // queue is now [4, 3, 2, 1, 0]
        let run = office.extract_range(t[3], t[1]);
        assert_eq!(numbers(&run), vec![3, 2, 1]);

        assert_eq!(office.serve(0), Some(t[4]));
        assert_eq!(office.serve(0), Some(t[0]));
        assert_eq!(office.serve(0), None);
    }

    #[test]
    fn reverse_changes_serving_order() {
        let mut office = Office::open(1);
        let t: Vec<_> = (0..3).map(|_| office.issue_ticket(0)).collect();

        office.reverse(0);
        assert_eq!(office.serve(0), Some(t[2]));

        office.reverse(0);
        assert_eq!(office.serve(0), Some(t[0]));
        assert_eq!(office.serve(0), Some(t[1]));
    }

    #[test]
    fn shutdown_reports_remaining_in_window_order() {
        let mut office = Office::open(3);
        let t: Vec<_> = (0..6).map(|i| office.issue_ticket(i % 3)).collect();
        office.serve(0);

        let remaining = office.shutdown();
        assert_eq!(
            numbers(&remaining),
            vec![t[3].number(), t[1].number(), t[4].number(), t[2].number(), t[5].number()]
        );
    }

    /// Drive a random op mix against a plain `Vec` model of the queues
    /// and check every observable output, then compare the final state at
    /// shutdown.
    #[test]
    fn randomized_against_model() {
        for seed in 0..16u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let window_count = rng.gen_range(1..6);
            let mut office = Office::open(window_count);
            let mut model: Vec<Vec<u64>> = vec![Vec::new(); window_count];
            let mut handles: HashMap<u64, Ticket> = HashMap::new();

            for _ in 0..500 {
                match rng.gen_range(0..8) {
                    // Bias towards issuing so the queues stay populated.
                    0 | 1 | 2 => {
                        let window = rng.gen_range(0..window_count);
                        let ticket = office.issue_ticket(window);
                        model[window].push(ticket.number());
                        handles.insert(ticket.number(), ticket);
                    }
                    3 => {
                        let window = rng.gen_range(0..window_count);
                        let served = office.serve(window);
                        if model[window].is_empty() {
                            assert_eq!(served, None);
                        } else {
                            let expected = model[window].remove(0);
                            assert_eq!(served.map(Ticket::number), Some(expected));
                            handles.remove(&expected);
                        }
                    }
                    4 => {
                        let from = rng.gen_range(0..window_count);
                        if model[from].is_empty() {
                            continue;
                        }
                        let at = rng.gen_range(0..model[from].len());
                        let number = model[from].remove(at);
                        let to = rng.gen_range(0..window_count);
                        office.relocate(handles[&number], to);
                        model[to].push(number);
                    }
                    5 => {
                        if window_count < 2 {
                            continue;
                        }
                        let from = rng.gen_range(0..window_count);
                        let mut to = rng.gen_range(0..window_count);
                        while to == from {
                            to = rng.gen_range(0..window_count);
                        }
                        office.close_and_merge(from, to);
                        let moved = std::mem::take(&mut model[from]);
                        model[to].extend(moved);
                    }
                    6 => {
                        let window = rng.gen_range(0..window_count);
                        if model[window].is_empty() {
                            continue;
                        }
                        let a = rng.gen_range(0..model[window].len());
                        let b = rng.gen_range(a..model[window].len());
                        let first = handles[&model[window][a]];
                        let last = handles[&model[window][b]];
                        let run = office.extract_range(first, last);
                        let expected: Vec<u64> = model[window].drain(a..=b).collect();
                        assert_eq!(numbers(&run), expected);
                        for number in expected {
                            handles.remove(&number);
                        }
                    }
                    _ => {
                        let window = rng.gen_range(0..window_count);
                        office.reverse(window);
                        model[window].reverse();
                    }
                }

                for window in 0..window_count {
                    assert_eq!(office.queue_len(window), model[window].len());
                }
            }

            let remaining = office.shutdown();
            let expected: Vec<u64> = model.into_iter().flatten().collect();
            assert_eq!(numbers(&remaining), expected);
        }
    }
}
