// Worklint
// Copyright (C) 2025 Worklint Contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Edit distance scoring for name suggestions
//!
//! Used only to rank suggestion candidates; a call is never accepted as
//! resolved on a fuzzy match.

/// Levenshtein distance between two strings.
///
/// Insertions, deletions and substitutions at unit cost, computed over
/// `chars()` with a two-row rolling table.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for i in 1..=a.len() {
        current[0] = i;
        for j in 1..=b.len() {
            let substitution = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            current[j] = (previous[j] + 1)
                .min(current[j - 1] + 1)
                .min(previous[j - 1] + substitution);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_substitution() {
        assert_eq!(edit_distance("cab", "cat"), 1);
    }

    #[test]
    fn test_mixed_edits() {
        assert_eq!(edit_distance("cab", "cactus"), 4);
    }

    #[test]
    fn test_unrelated_names() {
        assert_eq!(edit_distance("HireEmployee", "ApplicationsFiltered"), 17);
    }

    #[test]
    fn test_empty_against_word() {
        assert_eq!(edit_distance("", "greet"), 5);
        assert_eq!(edit_distance("greet", ""), 5);
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        assert_eq!(edit_distance("naïve", "naive"), 1);
    }

    proptest! {
        #[test]
        fn prop_symmetric(a in ".{0,12}", b in ".{0,12}") {
            prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        }

        #[test]
        fn prop_identical_is_zero(a in ".{0,16}") {
            prop_assert_eq!(edit_distance(&a, &a), 0);
        }

        #[test]
        fn prop_empty_is_length(a in ".{0,16}") {
            prop_assert_eq!(edit_distance("", &a), a.chars().count());
        }
    }
}
