//! Array shapes.

use smallvec::SmallVec;

/// Shape of an observation array: one extent per dimension.
///
/// An empty shape denotes a scalar. Inline capacity of 4 covers vectors,
/// images (`H x W x C`) and stacked frames without heap allocation.
pub type Shape = SmallVec<[usize; 4]>;

/// Number of elements in an array of the given shape.
///
/// A scalar (empty shape) holds one element; any zero extent yields zero.
/// Returns `None` if the count does not fit in `usize`.
pub fn num_elements(shape: &[usize]) -> Option<usize> {
    if shape.contains(&0) {
        return Some(0);
    }
    shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use smallvec::smallvec;

    #[test]
    fn scalar_has_one_element() {
        let s: Shape = smallvec![];
        assert_eq!(num_elements(&s), Some(1));
    }

    #[test]
    fn zero_extent_is_empty() {
        assert_eq!(num_elements(&[3, 0, 2]), Some(0));
    }

    #[test]
    fn overflowing_count_is_none() {
        assert_eq!(num_elements(&[usize::MAX, 2]), None);
        assert_eq!(num_elements(&[usize::MAX / 2 + 1, 2]), None);
    }

    #[test]
    fn zero_extent_wins_over_large_extents() {
        assert_eq!(num_elements(&[usize::MAX, 2, 0]), Some(0));
    }

    proptest! {
        #[test]
        fn product_of_extents(dims in proptest::collection::vec(0usize..8, 0..5)) {
            let expected = dims.iter().fold(1usize, |acc, d| acc * d);
            prop_assert_eq!(num_elements(&dims), Some(expected));
        }
    }
}
