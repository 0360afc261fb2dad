//! Grow and shrink distribution within one row.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>
//!
//! Space is shared out in whole pixels: each member asks for
//! `base + weight * unit`. When the host clamps a member short of that target,
//! the member is frozen at what it took and the remaining space is re-spread
//! over the members still eligible.

use super::FlexMember;
use crate::host::Host;
use css_box::{BoxKind, Dimension};
use log::debug;

/// What a row's distribution did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RowDistribution {
    /// Measured margin-box sizes of the row, summed after distribution.
    pub used: i32,
    /// `available - used`; the input to justification.
    pub space_left: i32,
    /// Weight still held by members that were never clamped.
    pub pieces: i32,
    /// Number of clamps that forced a re-spread.
    pub restarts: usize,
    /// Whether the row shrank instead of growing.
    pub shrinking: bool,
}

/// Share `available - base_total` across `row` by grow weight, or the deficit by
/// shrink weight when the row overflows.
///
/// Every member keeps the base size cached in its placement. The retry loop runs
/// at most once per member: each clamp removes one member from the worklist.
pub fn distribute_row<M: FlexMember, H: Host>(
    host: &mut H,
    row: &mut [M],
    dimension: Dimension,
    available: i32,
    base_total: i32,
) -> RowDistribution {
    let mut remaining = available - base_total;
    let shrinking = remaining < 0;
    let weight = |member: &M| {
        if shrinking {
            member.shrink()
        } else {
            member.grow()
        }
    };
    let mut pieces: i32 = row.iter().map(weight).sum();
    let mut unit = remaining / pieces.max(1);
    let mut eligible: Vec<usize> = (0..row.len()).collect();
    let mut restarts = 0;

    loop {
        let mut clamped_at = None;
        for (position, idx) in eligible.iter().copied().enumerate() {
            let Some(member) = row.get_mut(idx) else {
                continue;
            };
            let share = weight(member);
            let base_size = member.placement().base_size;
            let target = base_size + share * unit;
            let actual = member.set_size(host, target, dimension, BoxKind::Margin);
            let clamped = if shrinking {
                actual > target
            } else {
                actual < target
            };
            if clamped {
                member.placement_mut().maxed = true;
                pieces -= share;
                remaining -= actual - base_size;
                unit = remaining / pieces.max(1);
                debug!(
                    target: "css::flexbox::distribution",
                    "member {idx} clamped at {actual} (target {target}); {remaining}px over {pieces} pieces"
                );
                clamped_at = Some(position);
                break;
            }
        }
        match clamped_at {
            Some(position) => {
                eligible.remove(position);
                restarts += 1;
            }
            None => break,
        }
    }

    let used = row
        .iter()
        .map(|member| member.size(host, dimension, BoxKind::Margin))
        .sum::<i32>();
    RowDistribution {
        used,
        space_left: available - used,
        pieces,
        restarts,
        shrinking,
    }
}
