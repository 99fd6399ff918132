//! Sort and pagination core of the tabular grid.
//!
//! Plain functions over row counts and sort state; the `DataTable` component
//! is a thin shell around these.

use std::cmp::Ordering;
use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort: one column at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: &'static str,
    pub direction: SortDirection,
}

/// Next sort state after a click on `key`.
///
/// Cycles first direction → second direction → none. The first direction is
/// descending for columns marked `desc_first` (high scores up front),
/// ascending otherwise. Clicking a different column restarts the cycle.
pub fn next_sort(current: Option<&SortState>, key: &'static str, desc_first: bool) -> Option<SortState> {
    let (first, second) = if desc_first {
        (SortDirection::Descending, SortDirection::Ascending)
    } else {
        (SortDirection::Ascending, SortDirection::Descending)
    };

    match current {
        Some(state) if state.key == key => {
            if state.direction == first {
                Some(SortState { key, direction: second })
            } else {
                None
            }
        }
        _ => Some(SortState { key, direction: first }),
    }
}

/// Header indicator for the given column.
pub fn sort_indicator(current: Option<&SortState>, key: &str) -> &'static str {
    match current {
        Some(state) if state.key == key => match state.direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        },
        _ => "",
    }
}

/// Stable sort; descending reverses the comparator, which keeps equal rows
/// in their original relative order.
pub fn apply_sort<T>(rows: &mut [T], cmp: impl Fn(&T, &T) -> Ordering, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = cmp(a, b);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// Total-order comparison for metric floats (payload values are finite).
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Row window of the given page, clamped to the row count.
pub fn page_window(total: usize, page_size: usize, page_index: usize) -> Range<usize> {
    let start = (page_index * page_size).min(total);
    let end = (start + page_size).min(total);
    start..end
}

pub fn prev_disabled(page_index: usize) -> bool {
    page_index == 0
}

pub fn next_disabled(total: usize, page_size: usize, page_index: usize) -> bool {
    page_index + 1 >= page_count(total, page_size).max(1)
}

/// Footer summary: `"{start}–{end} of {total} items"`, `"0 items"` when empty.
pub fn footer_label(total: usize, page_size: usize, page_index: usize) -> String {
    if total == 0 {
        return "0 items".to_string();
    }
    let window = page_window(total, page_size, page_index);
    format!("{}–{} of {} items", window.start + 1, window.end, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_cycle_ascending_first() {
        let first = next_sort(None, "arr", false);
        assert_eq!(first, Some(SortState { key: "arr", direction: SortDirection::Ascending }));

        let second = next_sort(first.as_ref(), "arr", false);
        assert_eq!(second, Some(SortState { key: "arr", direction: SortDirection::Descending }));

        assert_eq!(next_sort(second.as_ref(), "arr", false), None);
    }

    #[test]
    fn test_sort_cycle_descending_first() {
        let first = next_sort(None, "health", true);
        assert_eq!(first, Some(SortState { key: "health", direction: SortDirection::Descending }));

        let second = next_sort(first.as_ref(), "health", true);
        assert_eq!(second, Some(SortState { key: "health", direction: SortDirection::Ascending }));

        assert_eq!(next_sort(second.as_ref(), "health", true), None);
    }

    #[test]
    fn test_clicking_another_column_restarts_cycle() {
        let sorted = next_sort(None, "arr", false);
        let other = next_sort(sorted.as_ref(), "nrr", false);
        assert_eq!(other, Some(SortState { key: "nrr", direction: SortDirection::Ascending }));
    }

    #[test]
    fn test_ascending_then_descending_reverses_order() {
        let mut rows = vec![3, 1, 2];
        apply_sort(&mut rows, |a, b| a.cmp(b), SortDirection::Ascending);
        assert_eq!(rows, vec![1, 2, 3]);

        apply_sort(&mut rows, |a, b| a.cmp(b), SortDirection::Descending);
        assert_eq!(rows, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        // Rows with the same key keep their original relative order.
        let mut rows = vec![("b", 1), ("a", 2), ("a", 1), ("b", 2)];
        apply_sort(&mut rows, |a, b| a.0.cmp(b.0), SortDirection::Ascending);
        assert_eq!(rows, vec![("a", 2), ("a", 1), ("b", 1), ("b", 2)]);

        let mut rows = vec![("b", 1), ("a", 2), ("a", 1), ("b", 2)];
        apply_sort(&mut rows, |a, b| a.0.cmp(b.0), SortDirection::Descending);
        assert_eq!(rows, vec![("b", 1), ("b", 2), ("a", 2), ("a", 1)]);
    }

    #[test]
    fn test_page_count_is_ceiling() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(30, 10), 3);
    }

    #[test]
    fn test_last_page_holds_remainder() {
        // 25 rows, page size 10: last page holds 25 mod 10 = 5 rows.
        assert_eq!(page_window(25, 10, 2), 20..25);
        // Multiple of page size: full last page.
        assert_eq!(page_window(30, 10, 2), 20..30);
        // Out-of-range page clamps to an empty window.
        assert_eq!(page_window(5, 10, 3), 5..5);
    }

    #[test]
    fn test_pagination_boundaries() {
        assert!(prev_disabled(0));
        assert!(!prev_disabled(1));

        assert!(next_disabled(25, 10, 2));
        assert!(!next_disabled(25, 10, 1));
        // Zero rows: both controls disabled.
        assert!(prev_disabled(0) && next_disabled(0, 10, 0));
    }

    #[test]
    fn test_footer_label() {
        assert_eq!(footer_label(25, 10, 0), "1–10 of 25 items");
        assert_eq!(footer_label(25, 10, 2), "21–25 of 25 items");
        assert_eq!(footer_label(3, 10, 0), "1–3 of 3 items");
        assert_eq!(footer_label(0, 10, 0), "0 items");
    }
}
