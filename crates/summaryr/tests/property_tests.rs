//! Property-based tests for the column summarizer.
//!
//! These tests use proptest to generate random datasets and verify that
//! summaries keep their invariants under all inputs:
//!
//! 1. **Shape**: one record per column, in column order
//! 2. **Conservation**: categorical counts add up to the row count
//! 3. **Rollup rule**: pooling happens exactly when the threshold is above
//!    one and at least two categories fall below it
//! 4. **Missing values**: `nulls` is present exactly when values are missing

use proptest::prelude::*;

use summaryr::summary::value_counts;
use summaryr::{summarize, Column, Dataset, SummaryConfig, SummaryRecord};

// =============================================================================
// Test Strategies
// =============================================================================

/// Category labels drawn from a small alphabet so repeats are common.
fn category_cells(rows: usize) -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(prop::option::weighted(0.85, "[a-e]"), rows)
}

fn float_cells(rows: usize) -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(prop::option::weighted(0.8, -1.0e6f64..1.0e6), rows)
}

fn int_cells(rows: usize) -> impl Strategy<Value = Vec<Option<i64>>> {
    prop::collection::vec(prop::option::weighted(0.8, -20i64..20), rows)
}

/// A dataset with one column of each kind and the same row count.
fn mixed_dataset() -> impl Strategy<Value = Dataset> {
    (0usize..60).prop_flat_map(|rows| {
        (float_cells(rows), int_cells(rows), category_cells(rows)).prop_map(|(f, i, c)| {
            Dataset::from_columns([
                Column::float("f", f),
                Column::integer("i", i),
                Column::text("c", c),
            ])
            .expect("columns share a length")
        })
    })
}

fn config() -> impl Strategy<Value = SummaryConfig> {
    (any::<bool>(), -2i64..8).prop_map(|(ints, threshold)| {
        SummaryConfig::default()
            .with_treat_integer_as_numeric(ints)
            .with_value_count_threshold(threshold)
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_one_record_per_column_in_order(dataset in mixed_dataset(), config in config()) {
        let summary = summarize(&dataset, &config);

        prop_assert_eq!(summary.len(), dataset.column_count());
        let names: Vec<&str> = summary.columns().collect();
        let expected: Vec<&str> = dataset.column_names().collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn prop_categorical_counts_sum_to_rows(dataset in mixed_dataset(), config in config()) {
        let summary = summarize(&dataset, &config);
        let rows = dataset.row_count().unwrap_or(0);

        for (_, record) in summary.iter() {
            if let SummaryRecord::Categorical(c) = record {
                prop_assert_eq!(c.total(), rows);
            }
        }
    }

    #[test]
    fn prop_rollup_iff_two_rare_categories(dataset in mixed_dataset(), threshold in -2i64..8) {
        let config = SummaryConfig::default().with_value_count_threshold(threshold);
        let summary = summarize(&dataset, &config);
        let column = dataset.column("c").unwrap();

        let rare = value_counts(&column.data)
            .iter()
            .filter(|c| (c.count as i64) < threshold)
            .count();
        let categorical = summary["c"].as_categorical().unwrap();

        prop_assert_eq!(categorical.is_rolled_up(), threshold > 1 && rare > 1);
        prop_assert_eq!(categorical.note.is_some(), categorical.is_rolled_up());
        if categorical.is_rolled_up() {
            prop_assert!(categorical.counts.iter().all(|c| (c.count as i64) >= threshold));
        }
    }

    #[test]
    fn prop_counts_sorted_descending(dataset in mixed_dataset()) {
        let summary = summarize(&dataset, &SummaryConfig::default());
        let counts = &summary["c"].as_categorical().unwrap().counts;

        prop_assert!(counts.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn prop_nulls_present_iff_missing(dataset in mixed_dataset()) {
        let config = SummaryConfig::default().with_treat_integer_as_numeric(true);
        let summary = summarize(&dataset, &config);

        for name in ["f", "i"] {
            let column = dataset.column(name).unwrap();
            let numeric = summary[name].as_numeric().unwrap();
            let missing = column.missing_count();

            prop_assert_eq!(numeric.nulls, (missing > 0).then_some(missing));
            prop_assert_eq!(numeric.count + missing, column.len());
        }
    }

    #[test]
    fn prop_quartiles_are_ordered(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..80)) {
        let dataset = Dataset::from_columns([
            Column::float("x", values.into_iter().map(Some).collect()),
        ]).unwrap();
        let summary = summarize(&dataset, &SummaryConfig::default());
        let s = summary["x"].as_numeric().unwrap();

        let ordered = [s.min, s.q1, s.median, s.q3, s.max]
            .map(|v| v.expect("defined for non-empty input"));
        prop_assert!(ordered.windows(2).all(|w| w[0] <= w[1]));
        let mean = s.mean.unwrap();
        prop_assert!(mean >= ordered[0] - 1e-6 && mean <= ordered[4] + 1e-6);
    }
}
