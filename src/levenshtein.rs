// src/levenshtein.rs

/// Reference definition of the distance, straight from the recurrence.
///
/// Runs in exponential time and is kept unmemoized on purpose; use
/// [`levenshtein_distance`] for anything but small inputs. Call depth is
/// bounded by `a.len() + b.len()`.
pub fn recursive_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (Some((last_a, rest_a)), Some((last_b, rest_b))) = (a.split_last(), b.split_last()) else {
        return a.len().max(b.len());
    };

    let cost = if last_a == last_b { 0 } else { 1 };

    std::cmp::min(
        recursive_distance(rest_a, b) + 1,
        std::cmp::min(
            recursive_distance(a, rest_b) + 1,
            recursive_distance(rest_a, rest_b) + cost,
        ),
    )
}

/// Levenshtein distance over a full `(m + 1) x (n + 1)` distance table.
///
/// O(m*n) time and space. Returns the same value as [`recursive_distance`]
/// for every pair of inputs.
pub fn levenshtein_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    DistanceTable::fill(a, b).result()
}

/// Row-major table of prefix distances, `cells[i * width + j]` holding the
/// distance between `a[..i]` and `b[..j]`.
struct DistanceTable {
    width: usize,
    cells: Vec<usize>,
}

impl DistanceTable {
    fn fill<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let width = b.len() + 1;
        let mut table = DistanceTable { width, cells: vec![0; rows * width] };

        for i in 1..rows {
            table.set(i, 0, i);
        }
        for j in 1..width {
            table.set(0, j, j);
        }

        for i in 1..rows {
            for j in 1..width {
                let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
                let value = std::cmp::min(
                    table.get(i - 1, j) + 1,
                    std::cmp::min(table.get(i, j - 1) + 1, table.get(i - 1, j - 1) + cost),
                );
                table.set(i, j, value);
            }
        }
        table
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }

    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.width + j] = value;
    }

    fn result(&self) -> usize {
        // never empty: the table is at least 1x1
        self.cells[self.cells.len() - 1]
    }
}
