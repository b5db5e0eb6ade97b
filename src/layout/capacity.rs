//! Row capacity - how many fixed-width items fit in one row.

/// Number of items that fit in a row of `inner_width`, given the fixed item
/// width and the gap between neighbors.
///
/// Always at least 1: a container narrower than a single item still lays out
/// one (overflowing) column rather than none.
///
/// The naive `inner_width / (item_width + gap)` undercounts by up to one
/// column, because the last item in a row carries no trailing gap. When one
/// more item width fits after `rough` full item+gap units, that column is
/// reclaimed.
///
/// Negative inputs are not validated; callers pass measured, non-negative
/// lengths.
pub fn row_capacity(inner_width: f64, item_width: f64, gap: f64) -> usize {
    if inner_width <= item_width {
        return 1;
    }
    let avg_item_width = item_width + gap;
    let rough = (inner_width / avg_item_width).floor();
    if (rough + 1.0) * item_width + rough * gap <= inner_width {
        rough as usize + 1
    } else {
        rough as usize
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_narrower_than_one_item_is_one_column() {
        assert_eq!(row_capacity(100.0, 200.0, 20.0), 1);
        assert_eq!(row_capacity(200.0, 200.0, 20.0), 1);
        assert_eq!(row_capacity(0.0, 200.0, 0.0), 1);
    }

    #[test]
    fn test_four_columns_with_gap() {
        // floor(1000 / 220) = 4; a fifth column would need 1080.
        assert_eq!(row_capacity(1000.0, 200.0, 20.0), 4);
    }

    #[test]
    fn test_no_gap() {
        assert_eq!(row_capacity(1000.0, 200.0, 0.0), 5);
        assert_eq!(row_capacity(1200.0, 200.0, 0.0), 6);
        assert_eq!(row_capacity(900.0, 150.0, 0.0), 6);
        assert_eq!(row_capacity(1050.0, 150.0, 0.0), 7);
        assert_eq!(row_capacity(650.0, 100.0, 0.0), 6);
        assert_eq!(row_capacity(700.0, 100.0, 0.0), 7);
    }

    #[test]
    fn test_correction_reclaims_the_trailing_gap() {
        // floor(430 / 110) = 3, but 4 * 100 + 3 * 10 = 430 fits exactly.
        assert_eq!(row_capacity(430.0, 100.0, 10.0), 4);
    }

    proptest! {
        /// The returned capacity fits within the inner width, and one more
        /// column would not.
        #[test]
        fn test_capacity_is_tight(
            item_width in 1.0f64..400.0,
            gap in 0.0f64..80.0,
            extra in 0.001f64..4000.0,
        ) {
            let inner_width = item_width + extra;
            let capacity = row_capacity(inner_width, item_width, gap) as f64;

            let used = capacity * item_width + (capacity - 1.0) * gap;
            prop_assert!(used <= inner_width);

            let with_one_more = (capacity + 1.0) * item_width + capacity * gap;
            prop_assert!(inner_width < with_one_more);
        }

        #[test]
        fn test_at_most_one_item_when_not_wider(
            item_width in 0.0f64..400.0,
            gap in 0.0f64..80.0,
            inner_width in 0.0f64..400.0,
        ) {
            prop_assume!(inner_width <= item_width);
            prop_assert_eq!(row_capacity(inner_width, item_width, gap), 1);
        }
    }
}
