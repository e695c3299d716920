// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

/// Collapses witness indices into ranges, e.g. `1..=3, 7`. Order and
/// repeats in the input are ignored.
pub fn witness_ranges(indices: &[u32]) -> String {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let Some((&first, rest)) = sorted.split_first() else {
        return "-".to_string();
    };

    let mut parts = Vec::new();
    let mut start = first;
    let mut end = start;
    for &index in rest {
        if end.checked_add(1) == Some(index) {
            end = index;
            continue;
        }
        parts.push(range(start, end));
        start = index;
        end = index;
    }
    parts.push(range(start, end));
    parts.join(", ")
}

fn range(start: u32, end: u32) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{start}..={end}")
    }
}
