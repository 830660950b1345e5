/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Returns the index of the maximum value in the slice `vec` if found, [`None`] otherwise.
///
/// In case of ties, the smallest index is returned.
///
/// # Arguments
/// - `vec`: the slice of elements.
///
/// # Examples
/// ```
/// # use condensation_algo::utils::math::argmax;
/// let v = vec![1, 2, 5, 2, 5];
/// let index = argmax(&v);
/// assert_eq!(index, Some(2));
/// ```
pub fn argmax<T: std::cmp::PartialOrd + Copy>(vec: &[T]) -> Option<usize> {
    filtered_argmax(vec, |_, _| true)
}

/// Returns the index of the maximum value approved by `filter` in the slice `vec` if found, [`None`] otherwise.
///
/// In case of ties, the smallest index is returned. Elements that are not
/// comparable with the current maximum (e.g., NaN) are never selected over it.
///
/// # Arguments
/// - `vec`: the slice of elements.
/// - `filter`: a closure that takes as arguments the index of the element and the element itself and returns
///   `true` if the element may be selected.
///
/// # Examples
/// ```
/// # use condensation_algo::utils::math::filtered_argmax;
/// let v = vec![1.0, f64::NEG_INFINITY, 3.0, 3.0];
/// let index = filtered_argmax(&v, |_, element| element.is_finite());
/// assert_eq!(index, Some(2));
/// ```
pub fn filtered_argmax<T: std::cmp::PartialOrd + Copy, F: Fn(usize, T) -> bool>(
    vec: &[T],
    filter: F,
) -> Option<usize> {
    let mut argmax: Option<(usize, T)> = None;

    for (i, &elem) in vec.iter().enumerate() {
        if !filter(i, elem) {
            continue;
        }
        match argmax {
            Some((_, max)) if elem > max => argmax = Some((i, elem)),
            None => argmax = Some((i, elem)),
            _ => {}
        }
    }

    argmax.map(|(i, _)| i)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty() {
        let v: Vec<usize> = Vec::new();
        assert_eq!(argmax(&v), None);
    }

    #[test]
    fn test_single_element_min() {
        let v = vec![usize::MIN];
        assert_eq!(argmax(&v), Some(0));
    }

    #[test]
    fn test_normal() {
        let v = vec![2, 1, 5, 3];
        assert_eq!(argmax(&v), Some(2));
    }

    #[test]
    fn test_duplicates() {
        let v = vec![2, 5, 1, 3, 5];
        assert_eq!(argmax(&v), Some(1));
    }

    #[test]
    fn test_all_filtered_away() {
        let v = vec![2, 1, 5, 3, 1];
        assert_eq!(filtered_argmax(&v, |_, _| false), None);
    }

    #[test]
    fn test_filtered_infinities() {
        let v = vec![f64::NEG_INFINITY, 0.0, 7.5, f64::NEG_INFINITY, 7.5];
        assert_eq!(filtered_argmax(&v, |_, e| e > f64::NEG_INFINITY), Some(2));
        let v = vec![f64::NEG_INFINITY; 3];
        assert_eq!(filtered_argmax(&v, |_, e| e > f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_filtered_by_index() {
        let v = vec![1, 2, 3, 4, 5, 4, 3, 2, 1];
        assert_eq!(filtered_argmax(&v, |i, _| i % 2 == 1), Some(3));
    }
}
