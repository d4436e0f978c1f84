// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Line assignment engine.
//!
//! Skaters are partitioned into an ordered list of fixed-capacity lines plus
//! one unbounded bench. Lines are addressed by index. Whenever a line would
//! exceed capacity, its longest-resident members are evicted to the bench.
//!
//! The engine never creates or deletes players; it reads the [`Roster`] to
//! reject goaltenders and stale ids, which are silent no-ops.

use crate::roster::Roster;
use linemate_domain::{LineCapacity, Location, PlayerId};

/// Lines and bench for the current game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineAssignment {
    capacity: LineCapacity,
    lines: Vec<Vec<PlayerId>>,
    bench: Vec<PlayerId>,
}

impl LineAssignment {
    /// Creates an empty assignment with the given capacity.
    #[must_use]
    pub const fn new(capacity: LineCapacity) -> Self {
        Self {
            capacity,
            lines: Vec::new(),
            bench: Vec::new(),
        }
    }

    /// Rebuilds an assignment from restored parts without normalising it.
    ///
    /// Use [`crate::GameState::from_parts`] to get a consistent partition.
    #[must_use]
    pub const fn from_parts(
        capacity: LineCapacity,
        lines: Vec<Vec<PlayerId>>,
        bench: Vec<PlayerId>,
    ) -> Self {
        Self {
            capacity,
            lines,
            bench,
        }
    }

    /// Configured line capacity.
    #[must_use]
    pub const fn capacity(&self) -> LineCapacity {
        self.capacity
    }

    /// All lines in order.
    #[must_use]
    pub fn lines(&self) -> &[Vec<PlayerId>] {
        &self.lines
    }

    /// The bench in insertion order.
    #[must_use]
    pub fn bench(&self) -> &[PlayerId] {
        &self.bench
    }

    /// Finds where a player currently sits.
    #[must_use]
    pub fn locate(&self, id: &PlayerId) -> Option<Location> {
        self.lines
            .iter()
            .position(|line| line.contains(id))
            .map(Location::Line)
            .or_else(|| self.bench.contains(id).then_some(Location::Bench))
    }

    /// Every placed id, lines first then bench.
    pub fn placed_ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.lines.iter().flatten().chain(self.bench.iter())
    }

    /// Changes the capacity and immediately rebalances `skaters`.
    pub fn set_capacity(&mut self, capacity: LineCapacity, skaters: &[PlayerId]) {
        self.capacity = capacity;
        self.auto_balance(skaters);
    }

    /// Distributes `skaters` round-robin over `ceil(n / capacity)` lines
    /// (at least one), then truncates each line to capacity.
    ///
    /// Truncated ids go to the bench; the previous bench is discarded.
    pub fn auto_balance(&mut self, skaters: &[PlayerId]) {
        let capacity: usize = self.capacity.get();
        let line_count: usize = skaters.len().div_ceil(capacity).max(1);

        let mut lines: Vec<Vec<PlayerId>> = vec![Vec::new(); line_count];
        for (i, id) in skaters.iter().enumerate() {
            lines[i % line_count].push(id.clone());
        }

        let mut truncated: Vec<PlayerId> = Vec::new();
        for line in &mut lines {
            if line.len() > capacity {
                truncated.extend(line.drain(capacity..));
            }
        }

        // Bench keeps the skaters' original order, not the per-line order.
        self.bench = skaters
            .iter()
            .filter(|id| truncated.contains(*id))
            .cloned()
            .collect();
        self.lines = lines;
    }

    /// Appends an empty line.
    pub fn add_line(&mut self) {
        self.lines.push(Vec::new());
    }

    /// Deletes a whole line, sending its members to the bench.
    ///
    /// Returns `false` when the index is out of range.
    pub fn remove_line(&mut self, line_index: usize) -> bool {
        if line_index >= self.lines.len() {
            return false;
        }
        let members: Vec<PlayerId> = self.lines.remove(line_index);
        for id in members {
            self.push_bench(id);
        }
        true
    }

    /// Moves a skater to the bench from wherever they are.
    ///
    /// Returns `false` for goaltenders, stale ids, and players already benched.
    pub fn move_to_bench(&mut self, roster: &Roster, id: &PlayerId) -> bool {
        if !roster.is_skater(id) || self.bench.contains(id) {
            return false;
        }
        self.remove_from_lines(id);
        self.bench.push(id.clone());
        true
    }

    /// Moves a skater to the end of a line.
    ///
    /// If the line overflows, its front entries are evicted to the bench.
    /// Returns `false` for goaltenders, stale ids, an out-of-range index, or a
    /// player already in the target line.
    pub fn move_to_line(&mut self, roster: &Roster, line_index: usize, id: &PlayerId) -> bool {
        if !roster.is_skater(id) {
            return false;
        }
        match self.lines.get(line_index) {
            Some(line) if !line.contains(id) => {}
            _ => return false,
        }

        self.purge(id);

        let capacity: usize = self.capacity.get();
        let mut evicted: Vec<PlayerId> = Vec::new();
        if let Some(line) = self.lines.get_mut(line_index) {
            line.push(id.clone());
            while line.len() > capacity {
                evicted.push(line.remove(0));
            }
        }
        for evictee in evicted {
            self.push_bench(evictee);
        }
        true
    }

    /// Takes a player out of a specific line and puts them on the bench.
    ///
    /// Returns `false` when the player is not in that line.
    pub fn remove_from_line(&mut self, line_index: usize, id: &PlayerId) -> bool {
        let Some(line) = self.lines.get_mut(line_index) else {
            return false;
        };
        let Some(position) = line.iter().position(|p| p == id) else {
            return false;
        };
        let removed: PlayerId = line.remove(position);
        self.push_bench(removed);
        true
    }

    /// Removes an id from every line and the bench.
    ///
    /// Safe for ids that are not placed anywhere.
    pub fn purge(&mut self, id: &PlayerId) {
        self.remove_from_lines(id);
        self.bench.retain(|p| p != id);
    }

    /// Appends to the bench unless already present.
    pub(crate) fn push_bench(&mut self, id: PlayerId) {
        if !self.bench.contains(&id) {
            self.bench.push(id);
        }
    }

    /// Drops every id that `keep` rejects and every repeat occurrence.
    pub(crate) fn retain_unique(&mut self, mut keep: impl FnMut(&PlayerId) -> bool) {
        let mut seen: Vec<PlayerId> = Vec::new();
        let mut admit = |id: &PlayerId| -> bool {
            if !keep(id) || seen.contains(id) {
                return false;
            }
            seen.push(id.clone());
            true
        };
        for line in &mut self.lines {
            line.retain(&mut admit);
        }
        self.bench.retain(&mut admit);
    }

    /// Evicts the front entries of any over-full line to the bench.
    pub(crate) fn enforce_capacity(&mut self) {
        let capacity: usize = self.capacity.get();
        let mut evicted: Vec<PlayerId> = Vec::new();
        for line in &mut self.lines {
            if line.len() > capacity {
                let excess: usize = line.len() - capacity;
                evicted.extend(line.drain(..excess));
            }
        }
        for id in evicted {
            self.push_bench(id);
        }
    }

    /// Clears lines and bench, keeping the capacity.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.bench.clear();
    }

    fn remove_from_lines(&mut self, id: &PlayerId) {
        for line in &mut self.lines {
            line.retain(|p| p != id);
        }
    }
}
