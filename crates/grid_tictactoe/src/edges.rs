//! Edge predicates for row-major indices.
//!
//! The engine does not need these for any rule; renderers use them to
//! decide which borders a cell draws.

/// Cell sits in the first column.
pub fn is_left_edge(index: usize, size: usize) -> bool {
    index % size == 0
}

/// Cell sits in the last column.
pub fn is_right_edge(index: usize, size: usize) -> bool {
    (index + 1) % size == 0
}

/// Cell sits in the first row.
pub fn is_top_edge(index: usize, size: usize) -> bool {
    index < size
}

/// Cell sits in the last row.
pub fn is_bottom_edge(index: usize, size: usize) -> bool {
    index >= size * (size - 1)
}
