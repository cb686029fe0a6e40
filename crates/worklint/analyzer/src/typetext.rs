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

//! Normalized textual comparison of type representations
//!
//! Comparison is structural/textual only: whitespace is stripped and the
//! residue compared exactly. Aliased or differently-qualified spellings of
//! the same type are not recognized as equal.

/// Strip every whitespace character from a type's source text.
pub fn normalize(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whether two type texts are equal after normalization.
pub fn matches(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
