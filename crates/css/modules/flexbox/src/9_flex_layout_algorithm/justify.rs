//! Main-axis justification through margins.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
//!
//! Positions come from normal flow, so free space is handed out as extra margin
//! on the members rather than as offsets.

use super::FlexMember;
use crate::chapter5::JustifyContent;
use crate::host::Host;
use css_box::Dimension;
use log::debug;

/// Distribute `space_left` of a row according to `justify`.
///
/// Rows without positive free space are left untouched.
pub fn justify_row<M: FlexMember, H: Host>(
    host: &mut H,
    row: &mut [M],
    dimension: Dimension,
    justify: JustifyContent,
    space_left: i32,
) {
    let count = row.len() as i32;
    if space_left <= 0 || count == 0 {
        return;
    }
    let (leading, trailing) = dimension.sides();
    debug!(target: "css::flexbox::justify", "{justify:?}: {space_left}px over {count} members");
    match justify {
        JustifyContent::FlexStart => {}
        JustifyContent::FlexEnd => {
            if let Some(first) = row.first_mut() {
                first.add_margin(host, leading, space_left);
            }
        }
        JustifyContent::Center => {
            if let Some(first) = row.first_mut() {
                first.add_margin(host, leading, space_left / 2);
            }
        }
        JustifyContent::SpaceBetween => {
            let gap = space_left / (count - 1).max(1);
            let last = row.len() - 1;
            for member in row.iter_mut().take(last) {
                member.add_margin(host, trailing, gap);
            }
        }
        JustifyContent::SpaceAround => {
            let half = space_left / (2 * count);
            for member in row.iter_mut() {
                member.add_margin(host, leading, half);
                member.add_margin(host, trailing, half);
            }
        }
    }
}
