//! Multi-hunk diff producing an ordered edit script.
//!
//! This is the general strategy: it reports every unchanged span as an
//! `Equal` run, so cursors and selections sitting in untouched regions are
//! not disturbed by the patch. The algorithm:
//! 1. Trim the common prefix/suffix (surrogate-safe) and re-express them
//!    as leading/trailing `Equal` operations.
//! 2. Run Myers' shortest-edit-script search over the remaining middles at
//!    code-point granularity, then report lengths back in code units.
//!
//! Matching whole code points means no operation boundary can ever land
//! between a high surrogate and its low half. Runs are coalesced and each
//! divergence reports its deletion before its insertion.

use crate::edit::EditOp;
use crate::text::{common_affixes, units_to_string, Text};

/// Compare two snapshots and return an edit script covering both in full.
///
/// Identical snapshots yield a single `Equal` (or nothing when empty);
/// fully disjoint snapshots yield one `Delete` and one `Insert`.
pub fn diff(old: &Text, new: &Text) -> Vec<EditOp> {
    let a = old.units();
    let b = new.units();

    if a == b {
        return if a.is_empty() {
            Vec::new()
        } else {
            vec![EditOp::Equal(a.len())]
        };
    }

    let (prefix, suffix) = common_affixes(a, b);
    let mid_a: Vec<char> = units_to_string(&a[prefix..a.len() - suffix])
        .chars()
        .collect();
    let mid_b: Vec<char> = units_to_string(&b[prefix..b.len() - suffix])
        .chars()
        .collect();

    let mut ops = Vec::new();
    if prefix > 0 {
        ops.push(EditOp::Equal(prefix));
    }
    ops.extend(coalesce(&myers(&mid_a, &mid_b)));
    if suffix > 0 {
        ops.push(EditOp::Equal(suffix));
    }
    merge_adjacent(ops)
}

/// One step of the backtracked edit path, at code-point granularity.
#[derive(Debug, Clone, Copy)]
enum Step {
    Equal(char),
    Delete(char),
    Insert(char),
}

/// Myers' O(ND) greedy shortest-edit-script search with a full trace for
/// backtracking. Inputs are the already-trimmed middles, so they are small
/// whenever the two snapshots are broadly similar.
fn myers(a: &[char], b: &[char]) -> Vec<Step> {
    let n = a.len() as isize;
    let m = b.len() as isize;

    if n == 0 {
        return b.iter().map(|&c| Step::Insert(c)).collect();
    }
    if m == 0 {
        return a.iter().map(|&c| Step::Delete(c)).collect();
    }

    let max = n + m;
    let offset = max;
    let idx = |k: isize| (k + offset) as usize;
    let mut v = vec![0isize; (2 * max + 1) as usize];
    let mut trace: Vec<Vec<isize>> = Vec::new();

    'search: for d in 0..=max {
        trace.push(v.clone());
        let mut k = -d;
        while k <= d {
            let mut x = if k == -d || (k != d && v[idx(k - 1)] < v[idx(k + 1)]) {
                v[idx(k + 1)]
            } else {
                v[idx(k - 1)] + 1
            };
            let mut y = x - k;
            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }
            v[idx(k)] = x;
            if x >= n && y >= m {
                break 'search;
            }
            k += 2;
        }
    }

    // Walk the trace backwards from (n, m), recording one step per move.
    let mut steps = Vec::new();
    let mut x = n;
    let mut y = m;
    for (d, v) in trace.iter().enumerate().rev() {
        let d = d as isize;
        if d == 0 {
            // Only the initial snake remains.
            while x > 0 && y > 0 {
                x -= 1;
                y -= 1;
                steps.push(Step::Equal(a[x as usize]));
            }
            break;
        }

        let k = x - y;
        let prev_k = if k == -d || (k != d && v[idx(k - 1)] < v[idx(k + 1)]) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = v[idx(prev_k)];
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
            steps.push(Step::Equal(a[x as usize]));
        }
        if x == prev_x {
            y -= 1;
            steps.push(Step::Insert(b[y as usize]));
        } else {
            x -= 1;
            steps.push(Step::Delete(a[x as usize]));
        }
        x = prev_x;
        y = prev_y;
    }

    steps.reverse();
    steps
}

/// Collapse per-code-point steps into coalesced operations with code-unit
/// lengths. Within one divergence the deletion is reported first no matter
/// how the backtrack interleaved the steps.
fn coalesce(steps: &[Step]) -> Vec<EditOp> {
    let mut ops = Vec::new();
    let mut equal_units = 0;
    let mut deleted_units = 0;
    let mut inserted = String::new();

    for step in steps {
        match step {
            Step::Equal(c) => {
                if deleted_units > 0 {
                    ops.push(EditOp::Delete(std::mem::take(&mut deleted_units)));
                }
                if !inserted.is_empty() {
                    ops.push(EditOp::Insert(std::mem::take(&mut inserted)));
                }
                equal_units += c.len_utf16();
            }
            Step::Delete(c) => {
                if equal_units > 0 {
                    ops.push(EditOp::Equal(std::mem::take(&mut equal_units)));
                }
                deleted_units += c.len_utf16();
            }
            Step::Insert(c) => {
                if equal_units > 0 {
                    ops.push(EditOp::Equal(std::mem::take(&mut equal_units)));
                }
                inserted.push(*c);
            }
        }
    }

    if equal_units > 0 {
        ops.push(EditOp::Equal(equal_units));
    }
    if deleted_units > 0 {
        ops.push(EditOp::Delete(deleted_units));
    }
    if !inserted.is_empty() {
        ops.push(EditOp::Insert(inserted));
    }
    ops
}

/// Merge adjacent operations of the same kind across the trim seams.
fn merge_adjacent(ops: Vec<EditOp>) -> Vec<EditOp> {
    let mut merged: Vec<EditOp> = Vec::with_capacity(ops.len());
    for op in ops {
        match (merged.last_mut(), op) {
            (Some(EditOp::Equal(total)), EditOp::Equal(len)) => *total += len,
            (Some(EditOp::Delete(total)), EditOp::Delete(len)) => *total += len,
            (Some(EditOp::Insert(acc)), EditOp::Insert(text)) => acc.push_str(&text),
            (_, op) => merged.push(op),
        }
    }
    merged
}
