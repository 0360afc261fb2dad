//! Collections: a group of members measured and sized as one.
//!
//! Once the main pass has placed items into rows, each row becomes a
//! [`FlexCollection`] and the rows are laid out again along the cross axis with
//! the same group algorithm. A collection's size along its grouping direction is
//! the sum of its members; across it, the largest member.

use super::{FlexMember, Placement};
use crate::chapter5::{AlignItems, FlexDirection};
use crate::chapter6::FlexItem;
use crate::element::Measurable;
use crate::host::Host;
use css_box::{AxisEdges, BoxKind, BoxSizes, Dimension, Side};
use log::trace;

/// A collection member: a borrowed item or a nested collection.
#[derive(Debug)]
pub enum Member<'items> {
    Item(&'items mut FlexItem),
    Group(FlexCollection<'items>),
}

impl Measurable for Member<'_> {
    #[inline]
    fn measure<H: Host>(&self, host: &mut H, dimension: Dimension) -> BoxSizes {
        match self {
            Self::Item(item) => item.measure(host, dimension),
            Self::Group(group) => group.measure(host, dimension),
        }
    }

    #[inline]
    fn set_size<H: Host>(
        &mut self,
        host: &mut H,
        size: i32,
        dimension: Dimension,
        target: BoxKind,
    ) -> i32 {
        match self {
            Self::Item(item) => item.set_size(host, size, dimension, target),
            Self::Group(group) => group.set_size(host, size, dimension, target),
        }
    }
}

impl FlexMember for Member<'_> {
    #[inline]
    fn base_size<H: Host>(&self, host: &mut H, dimension: Dimension) -> i32 {
        match self {
            Self::Item(item) => item.base_size(host, dimension),
            Self::Group(group) => group.base_size(host, dimension),
        }
    }

    #[inline]
    fn grow(&self) -> i32 {
        match self {
            Self::Item(item) => item.grow(),
            Self::Group(group) => group.grow(),
        }
    }

    #[inline]
    fn shrink(&self) -> i32 {
        match self {
            Self::Item(item) => item.shrink(),
            Self::Group(group) => group.shrink(),
        }
    }

    #[inline]
    fn add_margin<H: Host>(&mut self, host: &mut H, side: Side, amount: i32) {
        match self {
            Self::Item(item) => item.add_margin(host, side, amount),
            Self::Group(group) => group.add_margin(host, side, amount),
        }
    }

    #[inline]
    fn alignment(&self, container: AlignItems) -> AlignItems {
        match self {
            Self::Item(item) => item.alignment(container),
            Self::Group(group) => group.alignment(container),
        }
    }

    #[inline]
    fn placement(&self) -> &Placement {
        match self {
            Self::Item(item) => item.placement(),
            Self::Group(group) => group.placement(),
        }
    }

    #[inline]
    fn placement_mut(&mut self) -> &mut Placement {
        match self {
            Self::Item(item) => item.placement_mut(),
            Self::Group(group) => group.placement_mut(),
        }
    }
}

/// Margin written onto a member while aligning it, kept so it can be undone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Offset {
    member: usize,
    side: Side,
    amount: i32,
}

/// A group of members laid out along `direction`.
#[derive(Debug)]
pub struct FlexCollection<'items> {
    members: Vec<Member<'items>>,
    /// Axis the members are grouped along.
    direction: FlexDirection,
    /// Alignment applied across the grouping axis.
    align_items: AlignItems,
    /// Whether the members are already laid out; base sizes are then their measured sizes.
    nested: bool,
    placement: Placement,
    offsets: Vec<Offset>,
}

impl<'items> FlexCollection<'items> {
    pub fn new(members: Vec<Member<'items>>, direction: FlexDirection, align_items: AlignItems) -> Self {
        Self {
            members,
            direction,
            align_items,
            nested: false,
            placement: Placement::default(),
            offsets: Vec::new(),
        }
    }

    /// A collection of members the main pass has already placed.
    pub fn nested(
        members: Vec<Member<'items>>,
        direction: FlexDirection,
        align_items: AlignItems,
    ) -> Self {
        Self {
            nested: true,
            ..Self::new(members, direction, align_items)
        }
    }

    /// A row of placed items, grouped along `direction`.
    pub fn line(
        items: Vec<&'items mut FlexItem>,
        direction: FlexDirection,
        align_items: AlignItems,
    ) -> Self {
        Self::nested(items.into_iter().map(Member::Item).collect(), direction, align_items)
    }

    #[inline]
    pub const fn direction(&self) -> FlexDirection {
        self.direction
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn members(&self) -> &[Member<'items>] {
        &self.members
    }

    #[inline]
    pub fn members_mut(&mut self) -> &mut [Member<'items>] {
        &mut self.members
    }

    /// Whether `dimension` runs along the grouping direction.
    #[inline]
    fn is_along(&self, dimension: Dimension) -> bool {
        self.direction.main_dimension() == dimension
    }

    /// Sum along the grouping direction, maximum across it.
    fn aggregate<I: IntoIterator<Item = i32>>(&self, dimension: Dimension, sizes: I) -> i32 {
        let sizes = sizes.into_iter();
        if self.is_along(dimension) {
            sizes.sum()
        } else {
            sizes.max().unwrap_or(0)
        }
    }

    /// Undo every alignment margin written by the previous `set_size`.
    fn revert_offsets<H: Host>(&mut self, host: &mut H) {
        for offset in self.offsets.drain(..) {
            if let Some(member) = self.members.get_mut(offset.member) {
                member.add_margin(host, offset.side, -offset.amount);
            }
        }
    }

    fn push_offset<H: Host>(&mut self, host: &mut H, member: usize, side: Side, amount: i32) {
        if amount == 0 {
            return;
        }
        if let Some(target) = self.members.get_mut(member) {
            target.add_margin(host, side, amount);
            self.offsets.push(Offset {
                member,
                side,
                amount,
            });
        }
    }
}

impl Measurable for FlexCollection<'_> {
    /// A collection has no edges of its own: every box is the aggregate margin box.
    fn measure<H: Host>(&self, host: &mut H, dimension: Dimension) -> BoxSizes {
        let sizes: Vec<i32> = self
            .members
            .iter()
            .map(|member| member.size(host, dimension, BoxKind::Margin))
            .collect();
        let total = self.aggregate(dimension, sizes);
        BoxSizes::from_border_box(total, AxisEdges::default(), total)
    }

    /// Along the grouping direction the size is shared out evenly. Across it, each
    /// member follows its effective alignment: `stretch` takes the size, the
    /// others keep their size and move with margins.
    ///
    /// Returns the largest stretched result, or `size` when nothing stretched.
    fn set_size<H: Host>(
        &mut self,
        host: &mut H,
        size: i32,
        dimension: Dimension,
        target: BoxKind,
    ) -> i32 {
        self.revert_offsets(host);
        if self.is_along(dimension) {
            let count = self.members.len().max(1) as i32;
            let share = size / count;
            for member in &mut self.members {
                member.set_size(host, share, dimension, target);
            }
            return self.size(host, dimension, target);
        }

        let (leading, trailing) = dimension.sides();
        let mut stretched: Option<i32> = None;
        for idx in 0..self.members.len() {
            let Some(member) = self.members.get_mut(idx) else {
                continue;
            };
            let alignment = member.alignment(self.align_items);
            if alignment == AlignItems::Stretch {
                let actual = member.set_size(host, size, dimension, target);
                stretched = Some(stretched.map_or(actual, |largest| largest.max(actual)));
                continue;
            }
            // Pin the current size so margins move the member instead of resizing it.
            let current = member.size(host, dimension, target);
            member.set_size(host, current, dimension, target);
            let free = size - current;
            trace!(target: "css::flexbox::alignment", "member {idx} {alignment:?}: {free}px free");
            match alignment {
                AlignItems::Center => {
                    self.push_offset(host, idx, leading, free / 2);
                    self.push_offset(host, idx, trailing, free / 2);
                }
                AlignItems::FlexEnd => self.push_offset(host, idx, leading, free),
                AlignItems::FlexStart | AlignItems::Stretch => {}
            }
        }
        stretched.unwrap_or(size)
    }
}

impl FlexMember for FlexCollection<'_> {
    /// Largest member across the grouping direction, summed along it.
    ///
    /// Placed members contribute their measured size, others their base size.
    fn base_size<H: Host>(&self, host: &mut H, dimension: Dimension) -> i32 {
        let sizes: Vec<i32> = self
            .members
            .iter()
            .map(|member| {
                if self.nested {
                    member.size(host, dimension, BoxKind::Margin)
                } else {
                    member.base_size(host, dimension)
                }
            })
            .collect();
        self.aggregate(dimension, sizes)
    }

    /// Placed collections share space evenly; others take their first member's weight.
    fn grow(&self) -> i32 {
        if self.nested {
            1
        } else {
            self.members.first().map_or(0, FlexMember::grow)
        }
    }

    fn shrink(&self) -> i32 {
        if self.nested {
            1
        } else {
            self.members.first().map_or(0, FlexMember::shrink)
        }
    }

    /// Moves the whole collection: every member gets the margin.
    fn add_margin<H: Host>(&mut self, host: &mut H, side: Side, amount: i32) {
        for member in &mut self.members {
            member.add_margin(host, side, amount);
        }
    }

    #[inline]
    fn placement(&self) -> &Placement {
        &self.placement
    }

    #[inline]
    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }
}
