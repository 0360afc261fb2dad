//! Row assignment for multi-line flex layouts.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use super::{FlexMember, Placement};
use crate::host::Host;
use core::ops::Range;
use css_box::Dimension;
use log::debug;

/// One row: the members it spans, their summed grow weights and base sizes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowPlan {
    pub members: Range<usize>,
    pub pieces: i32,
    pub base_total: i32,
}

/// Assign every member to a row, caching its base size for the run.
///
/// With `wrap`, a member starts a new row when adding its base size would push
/// the current row past `available`. A member is always accepted into an empty
/// row, so no row is ever closed empty. `zero_basis` treats every base as zero.
pub fn assign_rows<M: FlexMember, H: Host>(
    host: &mut H,
    members: &mut [M],
    dimension: Dimension,
    available: i32,
    wrap: bool,
    zero_basis: bool,
) -> Vec<RowPlan> {
    let mut rows: Vec<RowPlan> = Vec::new();
    let mut current = RowPlan::default();
    for (idx, member) in members.iter_mut().enumerate() {
        let base_size = if zero_basis {
            0
        } else {
            member.base_size(host, dimension)
        };
        let is_first_in_row = idx == current.members.start;
        if wrap && !is_first_in_row && current.base_total + base_size > available {
            debug!(
                target: "css::flexbox::rows",
                "row {} closed at {}: {} + {base_size} > {available}",
                rows.len(),
                idx,
                current.base_total
            );
            rows.push(current);
            current = RowPlan {
                members: idx..idx,
                ..RowPlan::default()
            };
        }
        current.members.end = idx + 1;
        current.pieces += member.grow();
        current.base_total += base_size;
        *member.placement_mut() = Placement {
            row: rows.len(),
            base_size,
            maxed: false,
        };
    }
    if !current.members.is_empty() {
        rows.push(current);
    }
    rows
}
