/// How `columnize` distributes source items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// Round-robin: `[1, 2, 3, 4, 5]` into 3 becomes `[[1, 4], [2, 5], [3]]`.
    #[default]
    Alternating,
    /// Source order preserved as consecutive runs, remainder front-loaded:
    /// `[1, 2, 3, 4, 5]` into 3 becomes `[[1, 2], [3, 4], [5]]`.
    Stacked,
}

/// Distribute `items` into `columns` buckets for display. Empty input or
/// zero columns yield an empty result.
#[must_use]
pub fn columnize<T: Clone>(items: &[T], columns: usize, layout: Layout) -> Vec<Vec<T>> {
    if items.is_empty() || columns == 0 {
        return Vec::new();
    }

    let mut out: Vec<Vec<T>> = vec![Vec::new(); columns];
    match layout {
        Layout::Alternating => {
            for (index, item) in items.iter().enumerate() {
                out[index % columns].push(item.clone());
            }
        }
        Layout::Stacked => {
            let lengths = stacked_lengths(items.len(), columns);
            let mut column = 0;
            for item in items {
                out[column].push(item.clone());
                if out[column].len() >= lengths[column] {
                    column += 1;
                }
            }
        }
    }
    out
}

/// Per-column capacities for the stacked layout: earlier columns absorb the
/// remainder, so lengths differ by at most one and never re-order the source.
fn stacked_lengths(total: usize, columns: usize) -> Vec<usize> {
    let base = total / columns;
    let remainder = total % columns;
    (0..columns)
        .map(|index| base + usize::from(index < remainder))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_items_into_three_columns_is_one_each() {
        let out = columnize(&["hello", "there", "dude"], 3, Layout::Alternating);
        assert_eq!(out, [vec!["hello"], vec!["there"], vec!["dude"]]);
    }

    #[test]
    fn alternating_wraps_back_to_the_first_column() {
        let out = columnize(&["hello", "there", "dude"], 2, Layout::Alternating);
        assert_eq!(out, [vec!["hello", "dude"], vec!["there"]]);
    }

    #[test]
    fn alternating_five_into_three() {
        let out = columnize(&[1, 2, 3, 4, 5], 3, Layout::Alternating);
        assert_eq!(out, [vec![1, 4], vec![2, 5], vec![3]]);
    }

    #[test]
    fn stacked_keeps_source_order() {
        let out = columnize(&[1, 2, 3, 4, 5], 3, Layout::Stacked);
        assert_eq!(out, [vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn stacked_with_fewer_items_than_columns_leaves_tail_empty() {
        let out = columnize(&[1, 2, 3], 5, Layout::Stacked);
        assert_eq!(out, [vec![1], vec![2], vec![3], vec![], vec![]]);
    }

    #[test]
    fn stacked_even_split_has_equal_runs() {
        let out = columnize(&[1, 2, 3, 4, 5, 6], 3, Layout::Stacked);
        assert_eq!(out, [vec![1, 2], vec![3, 4], vec![5, 6]]);
    }

    #[test]
    fn empty_source_yields_empty_output() {
        let out: Vec<Vec<i32>> = columnize(&[], 3, Layout::Alternating);
        assert!(out.is_empty());
    }

    #[test]
    fn zero_columns_yield_empty_output() {
        let out = columnize(&[1, 2, 3], 0, Layout::Stacked);
        assert!(out.is_empty());
    }
}
