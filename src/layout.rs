//! Day-schedule grid layout.
//!
//! Maps a day's entries (appointments, breaks, time off) onto a grid of
//! discrete time rows for rendering: each owner gets a column, each entry
//! a row index and row span. Pure computation, invoked per render — no
//! state is kept between calls.
//!
//! Entries within one column are normally non-overlapping (the
//! availability engine has already done its job), but the layout must not
//! fall over when they do overlap: such entries are stacked into
//! side-by-side lanes inside the column instead.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::{BlockKind, Interval, TimeOfDay};

/// One renderable entry of a day schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridEntry {
    /// Staff member or resource whose column this entry belongs to.
    pub owner_id: String,
    /// The entry's time span.
    pub interval: Interval,
    /// What the entry represents.
    pub kind: BlockKind,
}

impl GridEntry {
    /// Creates a grid entry.
    pub fn new(owner_id: impl Into<String>, interval: Interval, kind: BlockKind) -> Self {
        Self {
            owner_id: owner_id.into(),
            interval,
            kind,
        }
    }
}

/// Grid coordinates for one entry.
///
/// `row_index + row_span` never exceeds the grid's row count; entries
/// reaching past the grid window are clipped to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPlacement {
    /// Index of the entry in the input slice.
    pub entry: usize,
    /// Owner column, in order of first appearance in the input.
    pub column: usize,
    /// Stack position inside the column; 0 unless entries overlap.
    pub lane: usize,
    /// First grid row covered by the entry.
    pub row_index: u32,
    /// Number of grid rows covered.
    pub row_span: u32,
}

/// Computes grid placements for one day's entries.
///
/// The grid spans `row_count` rows of `row_step_minutes` starting at
/// `grid_start`. Entries wholly outside that window are omitted; entries
/// partly outside are clipped. `row_index = floor((start - grid_start) /
/// step)` and `row_span = ceil(span / step)`, clamped to the grid.
///
/// Output order follows input order, one placement per visible entry.
pub fn layout_day(
    entries: &[GridEntry],
    grid_start: TimeOfDay,
    row_step_minutes: u32,
    row_count: u32,
) -> Result<Vec<GridPlacement>> {
    if row_step_minutes == 0 {
        return Err(ScheduleError::config("row_step_minutes", "must be positive"));
    }
    if row_count == 0 {
        return Err(ScheduleError::config("row_count", "must be positive"));
    }

    let grid_start_min = grid_start.minutes();
    let grid_end_min = row_step_minutes
        .checked_mul(row_count)
        .and_then(|span| grid_start_min.checked_add(span))
        .ok_or_else(|| {
            // A wrapped extent would silently misclassify entries as
            // outside the grid.
            ScheduleError::config("row_count", "grid extent overflows minute arithmetic")
        })?;

    // Column per owner, first appearance first.
    let mut owners: Vec<&str> = Vec::new();
    for entry in entries {
        if !owners.contains(&entry.owner_id.as_str()) {
            owners.push(&entry.owner_id);
        }
    }

    let mut placements = Vec::with_capacity(entries.len());
    for (column, owner) in owners.iter().enumerate() {
        // Visible entries for this column, in start order for lane
        // assignment.
        let mut visible: Vec<(usize, u32, u32)> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.owner_id == *owner)
            .filter_map(|(idx, e)| {
                let start = e.interval.start().minutes().max(grid_start_min);
                let end = e.interval.end().minutes().min(grid_end_min);
                (start < end).then_some((idx, start, end))
            })
            .collect();
        visible.sort_by_key(|&(idx, start, end)| (start, end, idx));

        // Greedy first-free-lane stacking; lane_ends[i] is the end of the
        // last entry placed in lane i.
        let mut lane_ends: Vec<u32> = Vec::new();
        for (idx, start, end) in visible {
            let lane = match lane_ends.iter().position(|&lane_end| lane_end <= start) {
                Some(free) => {
                    lane_ends[free] = end;
                    free
                }
                None => {
                    lane_ends.push(end);
                    lane_ends.len() - 1
                }
            };

            let row_index = (start - grid_start_min) / row_step_minutes;
            let row_span = (end - start).div_ceil(row_step_minutes).max(1);
            let row_span = row_span.min(row_count - row_index);

            placements.push(GridPlacement {
                entry: idx,
                column,
                lane,
                row_index,
                row_span,
            });
        }
    }

    placements.sort_by_key(|p| p.entry);
    Ok(placements)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: &str, end: &str) -> Interval {
        Interval::new(TimeOfDay::parse(start).unwrap(), TimeOfDay::parse(end).unwrap()).unwrap()
    }

    fn at(time: &str) -> TimeOfDay {
        TimeOfDay::parse(time).unwrap()
    }

    fn entry(owner: &str, start: &str, end: &str) -> GridEntry {
        GridEntry::new(owner, iv(start, end), BlockKind::Appointment)
    }

    #[test]
    fn test_rows_and_spans() {
        let entries = vec![
            entry("anna", "09:00", "09:30"),
            entry("anna", "10:15", "11:00"),
        ];
        let got = layout_day(&entries, at("09:00"), 15, 32).unwrap();

        assert_eq!(got[0].row_index, 0);
        assert_eq!(got[0].row_span, 2);
        assert_eq!(got[1].row_index, 5);
        assert_eq!(got[1].row_span, 3);
        assert!(got.iter().all(|p| p.column == 0 && p.lane == 0));
    }

    #[test]
    fn test_partial_row_rounds_span_up() {
        // 09:05-09:20 touches rows 0 and 1 on a 15-minute grid.
        let entries = vec![entry("anna", "09:05", "09:20")];
        let got = layout_day(&entries, at("09:00"), 15, 8).unwrap();
        assert_eq!(got[0].row_index, 0);
        assert_eq!(got[0].row_span, 1);

        let entries = vec![entry("anna", "09:00", "09:20")];
        let got = layout_day(&entries, at("09:00"), 15, 8).unwrap();
        assert_eq!(got[0].row_span, 2);
    }

    #[test]
    fn test_placements_never_exceed_grid() {
        let entries = vec![
            entry("anna", "08:00", "09:30"),
            entry("anna", "16:30", "18:00"),
            entry("bert", "09:00", "17:00"),
        ];
        // Grid: 09:00-17:00 in 30-minute rows.
        let got = layout_day(&entries, at("09:00"), 30, 16).unwrap();
        assert_eq!(got.len(), 3);
        for p in &got {
            assert!(p.row_index + p.row_span <= 16, "placement {p:?} leaves grid");
        }
    }

    #[test]
    fn test_entries_outside_grid_are_omitted() {
        let entries = vec![
            entry("anna", "07:00", "08:00"),
            entry("anna", "09:00", "10:00"),
            entry("anna", "18:00", "19:00"),
        ];
        let got = layout_day(&entries, at("09:00"), 30, 16).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].entry, 1);
    }

    #[test]
    fn test_one_column_per_owner_in_appearance_order() {
        let entries = vec![
            entry("bert", "09:00", "10:00"),
            entry("anna", "09:00", "10:00"),
            entry("bert", "11:00", "12:00"),
        ];
        let got = layout_day(&entries, at("09:00"), 30, 16).unwrap();
        assert_eq!(got[0].column, 0); // bert appeared first
        assert_eq!(got[1].column, 1);
        assert_eq!(got[2].column, 0);
    }

    #[test]
    fn test_overlapping_entries_stack_into_lanes() {
        // Should not happen after availability filtering, but the layout
        // degrades to side-by-side lanes rather than crashing.
        let entries = vec![
            entry("anna", "09:00", "10:00"),
            entry("anna", "09:30", "10:30"),
            entry("anna", "10:00", "11:00"),
        ];
        let got = layout_day(&entries, at("09:00"), 30, 16).unwrap();

        assert_eq!(got[0].lane, 0);
        assert_eq!(got[1].lane, 1);
        // Third entry starts as the first ends; lane 0 is free again.
        assert_eq!(got[2].lane, 0);
    }

    #[test]
    fn test_back_to_back_share_a_lane() {
        let entries = vec![
            entry("anna", "09:00", "10:00"),
            entry("anna", "10:00", "11:00"),
        ];
        let got = layout_day(&entries, at("09:00"), 30, 16).unwrap();
        assert!(got.iter().all(|p| p.lane == 0));
    }

    #[test]
    fn test_invalid_grid_parameters() {
        let entries = vec![entry("anna", "09:00", "10:00")];
        assert!(matches!(
            layout_day(&entries, at("09:00"), 0, 16),
            Err(ScheduleError::InvalidConfiguration { field: "row_step_minutes", .. })
        ));
        assert!(matches!(
            layout_day(&entries, at("09:00"), 30, 0),
            Err(ScheduleError::InvalidConfiguration { field: "row_count", .. })
        ));
    }

    #[test]
    fn test_oversized_grid_extent_is_rejected() {
        let entries = vec![entry("anna", "09:00", "10:00")];
        assert!(matches!(
            layout_day(&entries, at("09:00"), u32::MAX, 2),
            Err(ScheduleError::InvalidConfiguration { field: "row_count", .. })
        ));
        assert!(matches!(
            layout_day(&entries, at("09:00"), 2, u32::MAX),
            Err(ScheduleError::InvalidConfiguration { field: "row_count", .. })
        ));
        // A merely large grid is fine.
        assert!(layout_day(&entries, at("09:00"), 60, 1_000_000).is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert!(layout_day(&[], at("09:00"), 30, 16).unwrap().is_empty());
    }
}
