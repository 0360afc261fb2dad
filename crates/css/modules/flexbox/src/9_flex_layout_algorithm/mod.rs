//! Flex Layout Algorithm
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>
//!
//! A container lays out in two passes over the same group algorithm
//! ([`calculate_group`]):
//!
//! 1. Main pass: items are measured, assigned to rows, grown or shrunk to fill
//!    each row, and justified with margins.
//! 2. Alignment pass: each row becomes a [`FlexCollection`] and the rows are
//!    grouped again along the cross axis with zero bases and equal weights, which
//!    stretches every line to an equal share of the container's cross size.
//!    Each line then applies its members' `align-self` inside that share. A
//!    container without a cross size gives every line its natural size instead.
//!
//! The alignment pass is simulated: it never starts another alignment pass.

mod collection;
mod distribution;
mod justify;
mod line_breaking;
#[cfg(test)]
mod tests;

pub use collection::{FlexCollection, Member};
pub use distribution::{RowDistribution, distribute_row};
pub use justify::justify_row;
pub use line_breaking::{RowPlan, assign_rows};

use crate::chapter5::{
    AlignContent, AlignItems, ContainerConfig, FlexDirection, FlexWrap, JustifyContent,
};
use crate::chapter6::{FlexItem, collect_flex_items};
use crate::chapter7::{Axes, resolve_axes};
use crate::element::{Element, Measurable};
use crate::error::LayoutError;
use crate::host::{Host, NodeRef};
use css_box::{BoxKind, BoxSizes, Dimension, Side};
use log::debug;

/// Per-run state of a member: which row it landed in, its cached base size,
/// and whether the host clamped it during distribution.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub base_size: i32,
    pub maxed: bool,
}

/// A member the group algorithm can place: an item or a collection of them.
pub trait FlexMember: Measurable {
    /// Margin-box size before distribution along `dimension`.
    fn base_size<H: Host>(&self, host: &mut H, dimension: Dimension) -> i32;

    /// Weight when sharing out free space.
    fn grow(&self) -> i32;

    /// Weight when absorbing a deficit.
    fn shrink(&self) -> i32;

    fn add_margin<H: Host>(&mut self, host: &mut H, side: Side, amount: i32);

    /// Effective cross-axis alignment inside a container aligning with `container`.
    #[inline]
    fn alignment(&self, container: AlignItems) -> AlignItems {
        container
    }

    fn placement(&self) -> &Placement;

    fn placement_mut(&mut self) -> &mut Placement;
}

/// Inputs of one [`calculate_group`] run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GroupParams {
    pub dimension: Dimension,
    /// Space along `dimension` the members share.
    pub available: i32,
    pub wrap: FlexWrap,
    pub justify: JustifyContent,
    /// Treat every base size as zero so members share `available` evenly.
    pub zero_basis: bool,
}

/// What happened to one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowOutcome {
    pub plan: RowPlan,
    pub distribution: RowDistribution,
}

/// Lay out `members` along `params.dimension`: assign rows, distribute each row,
/// then justify it.
pub fn calculate_group<M: FlexMember, H: Host>(
    host: &mut H,
    members: &mut [M],
    params: GroupParams,
) -> Vec<RowOutcome> {
    let plans = assign_rows(
        host,
        members,
        params.dimension,
        params.available,
        params.wrap.is_wrapping(),
        params.zero_basis,
    );
    let mut outcomes = Vec::with_capacity(plans.len());
    for plan in plans {
        let Some(row) = members.get_mut(plan.members.clone()) else {
            continue;
        };
        let distribution =
            distribute_row(host, row, params.dimension, params.available, plan.base_total);
        justify_row(
            host,
            row,
            params.dimension,
            params.justify,
            distribution.space_left,
        );
        debug!(
            target: "css::flexbox::layout",
            "{} row {:?}: base {} used {} left {} restarts {}",
            params.dimension,
            plan.members,
            plan.base_total,
            distribution.used,
            distribution.space_left,
            distribution.restarts
        );
        outcomes.push(RowOutcome { plan, distribution });
    }
    outcomes
}

/// Final geometry of one item.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ItemReport {
    pub node: NodeRef,
    pub base_size: i32,
    /// Margin-box size along the main axis.
    pub main_size: i32,
    /// Margin-box size along the cross axis.
    pub cross_size: i32,
    pub maxed: bool,
}

/// One row after both passes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineReport {
    pub items: Vec<ItemReport>,
    pub base_total: i32,
    pub used: i32,
    pub space_left: i32,
    /// Whether the line absorbed a deficit instead of sharing free space.
    pub shrinking: bool,
    /// Grow weight still held by unclamped items.
    pub pieces: i32,
    pub restarts: usize,
    /// Largest item cross size before alignment.
    pub natural_cross_size: i32,
    /// Largest item cross size after alignment.
    pub cross_size: i32,
}

/// Outcome of [`FlexContainer::layout`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutReport {
    pub container: NodeRef,
    pub direction: FlexDirection,
    pub available_main: i32,
    pub available_cross: i32,
    /// Summed cross size of every line after alignment.
    pub cross_size: i32,
    pub lines: Vec<LineReport>,
}

/// Cross-axis sizes gathered by the alignment pass.
struct CrossPass {
    available: i32,
    natural: Vec<i32>,
    sizes: Vec<i32>,
    total: i32,
}

/// A node laid out as a flex container over its in-flow children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlexContainer {
    element: Element,
    config: ContainerConfig,
    axes: Axes,
    items: Vec<FlexItem>,
}

impl FlexContainer {
    /// Read `node`'s configuration and wrap its in-flow children as items.
    ///
    /// Every node is checked before anything is written, so a failure leaves the
    /// host untouched.
    ///
    /// # Errors
    /// Returns `LayoutError::MissingNode` when the container or any child is unknown to the host.
    pub fn new<H: Host>(host: &mut H, node: NodeRef) -> Result<Self, LayoutError> {
        let element = Element::new(host, node)?;
        let children = collect_flex_items(host, node);
        if let Some(missing) = children
            .iter()
            .copied()
            .find(|child| host.computed_style(*child).is_none())
        {
            return Err(LayoutError::MissingNode(missing));
        }
        let config = ContainerConfig::read(host, node);
        let items = children
            .into_iter()
            .enumerate()
            .map(|(index, child)| FlexItem::new(host, child, index))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(target: "css::flexbox::layout", "{node}: {} items", items.len());
        Ok(Self {
            element,
            axes: resolve_axes(config.direction),
            config,
            items,
        })
    }

    #[inline]
    pub const fn node(&self) -> NodeRef {
        self.element.node()
    }

    #[inline]
    pub const fn config(&self) -> &ContainerConfig {
        &self.config
    }

    #[inline]
    pub const fn axes(&self) -> Axes {
        self.axes
    }

    /// Main-axis dimension.
    #[inline]
    pub const fn dimension(&self) -> Dimension {
        self.axes.main
    }

    #[inline]
    pub fn items(&self) -> &[FlexItem] {
        &self.items
    }

    /// Run both passes and commit the result to the host. Re-entrant: every run
    /// starts by clearing the previous run's output.
    pub fn layout<H: Host>(&mut self, host: &mut H) -> LayoutReport {
        for item in &mut self.items {
            item.reset_style(host);
        }
        let available_main = self.element.size(host, self.axes.main, BoxKind::Content);
        let rows = calculate_group(
            host,
            self.items.as_mut_slice(),
            GroupParams {
                dimension: self.axes.main,
                available: available_main,
                wrap: self.config.wrap,
                justify: self.config.justify_content,
                zero_basis: false,
            },
        );
        self.commit_flow(host, &rows);
        let cross = self.align_lines(host, rows.len());
        self.report(host, available_main, &rows, &cross)
    }

    /// Float row items left and clear the first item of every row after the first.
    fn commit_flow<H: Host>(&mut self, host: &mut H, rows: &[RowOutcome]) {
        if self.axes.direction != FlexDirection::Row {
            return;
        }
        for item in &mut self.items {
            let placement = *item.placement();
            let starts_row = rows
                .get(placement.row)
                .is_some_and(|row| row.plan.members.start == item.index());
            let clear = if starts_row && placement.row > 0 {
                "left"
            } else {
                ""
            };
            item.element_mut().set_float(host, "left");
            item.element().set_clear(host, clear);
        }
    }

    /// Stretch every line to an equal share of the cross size, or to its natural
    /// size when the container has none, then align items inside each line.
    fn align_lines<H: Host>(&mut self, host: &mut H, line_count: usize) -> CrossPass {
        let cross = self.axes.cross;
        let direction = self.axes.direction;
        let align_items = self.config.align_items;
        if self.config.align_content != AlignContent::Stretch {
            debug!(
                target: "css::flexbox::alignment",
                "align-content {:?} is laid out as stretch",
                self.config.align_content
            );
        }
        let definite = self.element.size(host, cross, BoxKind::Content);

        let mut rows: Vec<Vec<&mut FlexItem>> = (0..line_count).map(|_| Vec::new()).collect();
        for item in &mut self.items {
            let row = item.placement().row;
            if let Some(bucket) = rows.get_mut(row) {
                bucket.push(item);
            }
        }
        let lines = rows
            .into_iter()
            .map(|items| Member::Group(FlexCollection::line(items, direction, align_items)))
            .collect();
        let mut block = FlexCollection::nested(lines, direction.orthogonal(), align_items);
        let natural: Vec<i32> = block
            .members()
            .iter()
            .map(|line| line.base_size(host, cross))
            .collect();
        let available = if definite > 0 {
            definite
        } else {
            natural.iter().sum()
        };
        calculate_group(
            host,
            block.members_mut(),
            GroupParams {
                dimension: cross,
                available,
                wrap: FlexWrap::Nowrap,
                justify: JustifyContent::FlexStart,
                zero_basis: definite > 0,
            },
        );
        let sizes = block
            .members()
            .iter()
            .map(|line| line.size(host, cross, BoxKind::Margin))
            .collect();
        let total = block.size(host, cross, BoxKind::Margin);
        CrossPass {
            available,
            natural,
            sizes,
            total,
        }
    }

    fn report<H: Host>(
        &self,
        host: &mut H,
        available_main: i32,
        rows: &[RowOutcome],
        cross: &CrossPass,
    ) -> LayoutReport {
        let lines = rows
            .iter()
            .enumerate()
            .map(|(row, outcome)| {
                let items = self
                    .items
                    .get(outcome.plan.members.clone())
                    .unwrap_or(&[])
                    .iter()
                    .map(|item| ItemReport {
                        node: item.node(),
                        base_size: item.placement().base_size,
                        main_size: item.size(host, self.axes.main, BoxKind::Margin),
                        cross_size: item.size(host, self.axes.cross, BoxKind::Margin),
                        maxed: item.placement().maxed,
                    })
                    .collect();
                LineReport {
                    items,
                    base_total: outcome.plan.base_total,
                    used: outcome.distribution.used,
                    space_left: outcome.distribution.space_left,
                    shrinking: outcome.distribution.shrinking,
                    pieces: outcome.distribution.pieces,
                    restarts: outcome.distribution.restarts,
                    natural_cross_size: cross.natural.get(row).copied().unwrap_or(0),
                    cross_size: cross.sizes.get(row).copied().unwrap_or(0),
                }
            })
            .collect();
        LayoutReport {
            container: self.node(),
            direction: self.axes.direction,
            available_main,
            available_cross: cross.available,
            cross_size: cross.total,
            lines,
        }
    }
}

impl Measurable for FlexContainer {
    #[inline]
    fn measure<H: Host>(&self, host: &mut H, dimension: Dimension) -> BoxSizes {
        self.element.measure(host, dimension)
    }

    #[inline]
    fn set_size<H: Host>(
        &mut self,
        host: &mut H,
        size: i32,
        dimension: Dimension,
        target: BoxKind,
    ) -> i32 {
        self.element.set_size(host, size, dimension, target)
    }
}
