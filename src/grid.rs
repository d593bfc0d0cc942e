//! Weekly time-occupancy tracking at 15-minute granularity.

use chrono::Weekday;
use rustc_hash::FxHashSet;
use std::fmt;
use std::ops::Range;

use crate::models::{weekday_name, SlotTime};

/// Number of 15-minute blocks in one day.
pub const BLOCKS_PER_DAY: u16 = 96;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Tracks occupied 15-minute blocks for each day of one week.
///
/// Exactly one grid exists per search. Invariant: each day's set holds
/// the union of blocks committed by currently-active allocations on the
/// search path; rolled-back allocations leave no residue. All conflict
/// detection funnels through `add`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeGrid {
    /// Occupied block indices per day, indexed by days from Monday.
    occupied: [FxHashSet<u16>; 7],
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            occupied: std::array::from_fn(|_| FxHashSet::default()),
        }
    }

    /// Convert a clock time to its 15-minute block index (0-95).
    ///
    /// Minutes truncate to the lower block boundary: `0810` and `0800`
    /// both map to block 32.
    #[inline]
    pub fn time_to_block(t: SlotTime) -> u16 {
        t.hour() * 4 + t.minute() / 15
    }

    /// Half-open block range covered by `[start, end)`.
    ///
    /// Empty when `start == end` (zero-duration slots occupy nothing).
    #[inline]
    pub fn range_to_blocks(start: SlotTime, end: SlotTime) -> Range<u16> {
        Self::time_to_block(start)..Self::time_to_block(end)
    }

    /// Occupy `[start, end)` on `day`.
    ///
    /// Returns `false` without mutating anything if any block in the
    /// range is already taken. An empty range succeeds trivially.
    pub fn add(&mut self, day: Weekday, start: SlotTime, end: SlotTime) -> bool {
        let blocks = Self::range_to_blocks(start, end);
        let set = &mut self.occupied[day.num_days_from_monday() as usize];
        if blocks.clone().any(|b| set.contains(&b)) {
            return false;
        }
        set.extend(blocks);
        true
    }

    /// Release `[start, end)` on `day`.
    ///
    /// Idempotent: blocks not currently occupied are silently ignored.
    pub fn clear(&mut self, day: Weekday, start: SlotTime, end: SlotTime) {
        let set = &mut self.occupied[day.num_days_from_monday() as usize];
        for block in Self::range_to_blocks(start, end) {
            set.remove(&block);
        }
    }

    /// Occupied block indices for `day`.
    pub fn occupied_blocks(&self, day: Weekday) -> &FxHashSet<u16> {
        &self.occupied[day.num_days_from_monday() as usize]
    }

    /// Whether no day holds any occupied block.
    pub fn is_empty(&self) -> bool {
        self.occupied.iter().all(|set| set.is_empty())
    }

    /// Clock-time string for a block index (display only).
    fn block_to_time(block: u16) -> String {
        format!("{:02}{:02}", block / 4, (block % 4) * 15)
    }
}

impl fmt::Display for TimeGrid {
    /// Renders each non-empty day as merged runs of occupied blocks,
    /// e.g. `Monday: 0800-0945, 1400-1545`. Run ends name the run's
    /// last block, not the block after it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first_day = true;
        for day in WEEK {
            let set = self.occupied_blocks(day);
            if set.is_empty() {
                continue;
            }
            let mut blocks: Vec<u16> = set.iter().copied().collect();
            blocks.sort_unstable();

            let mut runs: Vec<(u16, u16)> = Vec::new();
            let mut run_start = blocks[0];
            let mut run_end = blocks[0];
            for &block in &blocks[1..] {
                if block == run_end + 1 {
                    run_end = block;
                } else {
                    runs.push((run_start, run_end));
                    run_start = block;
                    run_end = block;
                }
            }
            runs.push((run_start, run_end));

            if !first_day {
                writeln!(f)?;
            }
            first_day = false;
            let ranges: Vec<String> = runs
                .iter()
                .map(|(s, e)| format!("{}-{}", Self::block_to_time(*s), Self::block_to_time(*e)))
                .collect();
            write!(f, "{}: {}", weekday_name::full_name(day), ranges.join(", "))?;
        }
        Ok(())
    }
}
