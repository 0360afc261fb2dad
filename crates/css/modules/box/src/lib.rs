//! CSS Box Model Module Level 3: box dimensions, margins, borders, padding.
//! Spec: <https://www.w3.org/TR/css-box-3/>
//!
//! Everything here works on whole pixels along a single dimension. The four
//! boxes nest as margin ⊇ border ⊇ padding ⊇ content, and [`convert_box`] moves
//! a size expressed in one box into any other.

use core::fmt;

/// Physical dimension a measurement runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    /// The perpendicular dimension.
    #[inline]
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Width => Self::Height,
            Self::Height => Self::Width,
        }
    }

    /// Leading and trailing physical sides along this dimension.
    #[inline]
    pub const fn sides(self) -> (Side, Side) {
        match self {
            Self::Width => (Side::Left, Side::Right),
            Self::Height => (Side::Top, Side::Bottom),
        }
    }

    /// CSS property name of the size along this dimension.
    #[inline]
    pub const fn property(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }

    /// CSS property name of the minimum size along this dimension.
    #[inline]
    pub const fn min_property(self) -> &'static str {
        match self {
            Self::Width => "min-width",
            Self::Height => "min-height",
        }
    }

    /// CSS property name of the maximum size along this dimension.
    #[inline]
    pub const fn max_property(self) -> &'static str {
        match self {
            Self::Width => "max-width",
            Self::Height => "max-height",
        }
    }
}

impl fmt::Display for Dimension {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.property())
    }
}

/// One physical side of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides in CSS shorthand order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    /// `margin-<side>`
    #[inline]
    pub const fn margin_property(self) -> &'static str {
        match self {
            Self::Top => "margin-top",
            Self::Right => "margin-right",
            Self::Bottom => "margin-bottom",
            Self::Left => "margin-left",
        }
    }

    /// `border-<side>-width`
    #[inline]
    pub const fn border_property(self) -> &'static str {
        match self {
            Self::Top => "border-top-width",
            Self::Right => "border-right-width",
            Self::Bottom => "border-bottom-width",
            Self::Left => "border-left-width",
        }
    }

    /// `padding-<side>`
    #[inline]
    pub const fn padding_property(self) -> &'static str {
        match self {
            Self::Top => "padding-top",
            Self::Right => "padding-right",
            Self::Bottom => "padding-bottom",
            Self::Left => "padding-left",
        }
    }
}

/// The four nested boxes of the CSS box model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BoxKind {
    #[default]
    Margin,
    Border,
    Padding,
    Content,
}

impl BoxKind {
    /// Boxes ordered from the outermost to the innermost.
    pub const OUTSIDE_IN: [Self; 4] = [Self::Margin, Self::Border, Self::Padding, Self::Content];

    /// Position in [`Self::OUTSIDE_IN`].
    #[inline]
    pub const fn depth(self) -> usize {
        match self {
            Self::Margin => 0,
            Self::Border => 1,
            Self::Padding => 2,
            Self::Content => 3,
        }
    }

    /// Parse a `box-sizing`-style keyword (`content-box`, `border-box`, ...).
    #[inline]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "margin-box" | "margin" => Some(Self::Margin),
            "border-box" | "border" => Some(Self::Border),
            "padding-box" | "padding" => Some(Self::Padding),
            "content-box" | "content" => Some(Self::Content),
            _ => None,
        }
    }
}

/// Box edges for all four sides, in whole pixels.
///
/// Padding and border widths are clamped to be non-negative. Margins can be negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxSides {
    pub margin_top: i32,
    pub margin_right: i32,
    pub margin_bottom: i32,
    pub margin_left: i32,

    pub padding_top: i32,
    pub padding_right: i32,
    pub padding_bottom: i32,
    pub padding_left: i32,

    pub border_top: i32,
    pub border_right: i32,
    pub border_bottom: i32,
    pub border_left: i32,
}

impl BoxSides {
    /// Build sides from a resolver that yields the pixel value of a property name.
    ///
    /// Properties the resolver does not know resolve to zero.
    pub fn from_resolver<F>(mut resolve: F) -> Self
    where
        F: FnMut(&str) -> Option<i32>,
    {
        let mut get = |name: &str| resolve(name).unwrap_or(0);
        Self {
            margin_top: get(Side::Top.margin_property()),
            margin_right: get(Side::Right.margin_property()),
            margin_bottom: get(Side::Bottom.margin_property()),
            margin_left: get(Side::Left.margin_property()),

            padding_top: get(Side::Top.padding_property()).max(0),
            padding_right: get(Side::Right.padding_property()).max(0),
            padding_bottom: get(Side::Bottom.padding_property()).max(0),
            padding_left: get(Side::Left.padding_property()).max(0),

            border_top: get(Side::Top.border_property()).max(0),
            border_right: get(Side::Right.border_property()).max(0),
            border_bottom: get(Side::Bottom.border_property()).max(0),
            border_left: get(Side::Left.border_property()).max(0),
        }
    }

    /// Margin on one side.
    #[inline]
    pub const fn margin(&self, side: Side) -> i32 {
        match side {
            Side::Top => self.margin_top,
            Side::Right => self.margin_right,
            Side::Bottom => self.margin_bottom,
            Side::Left => self.margin_left,
        }
    }

    /// Sum both sides of `dimension` for each edge kind.
    #[inline]
    pub const fn axis_edges(&self, dimension: Dimension) -> AxisEdges {
        match dimension {
            Dimension::Width => AxisEdges {
                margin: self.margin_left + self.margin_right,
                border: self.border_left + self.border_right,
                padding: self.padding_left + self.padding_right,
            },
            Dimension::Height => AxisEdges {
                margin: self.margin_top + self.margin_bottom,
                border: self.border_top + self.border_bottom,
                padding: self.padding_top + self.padding_bottom,
            },
        }
    }
}

/// Edge widths summed across both sides of one dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisEdges {
    pub margin: i32,
    pub border: i32,
    pub padding: i32,
}

/// Every box of one element measured along one dimension.
///
/// The `margin`/`border`/`padding`/`content` fields are the thickness each box adds
/// around the next inner one (`content` is the content box itself); the `*_box`
/// fields are the cumulative outer sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxSizes {
    pub margin: i32,
    pub border: i32,
    pub padding: i32,
    pub content: i32,

    pub margin_box: i32,
    pub border_box: i32,
    pub padding_box: i32,
    pub content_box: i32,

    /// The box the host treats as the element's assignable size.
    pub sizing: BoxKind,
}

impl BoxSizes {
    /// Derive all boxes from a measured border-box size and the summed edges.
    ///
    /// `client_size` is the host's native size of the element; the first cumulative
    /// box (outermost first) equal to it becomes the sizing mode, `Content` otherwise.
    pub fn from_border_box(border_box: i32, edges: AxisEdges, client_size: i32) -> Self {
        let margin_box = border_box + edges.margin;
        let padding_box = border_box - edges.border;
        let content_box = padding_box - edges.padding;
        let sizing = if margin_box == client_size {
            BoxKind::Margin
        } else if border_box == client_size {
            BoxKind::Border
        } else if padding_box == client_size {
            BoxKind::Padding
        } else {
            BoxKind::Content
        };
        Self {
            margin: edges.margin,
            border: edges.border,
            padding: edges.padding,
            content: content_box,
            margin_box,
            border_box,
            padding_box,
            content_box,
            sizing,
        }
    }

    /// Thickness contributed by `kind`.
    #[inline]
    pub const fn delta(&self, kind: BoxKind) -> i32 {
        match kind {
            BoxKind::Margin => self.margin,
            BoxKind::Border => self.border,
            BoxKind::Padding => self.padding,
            BoxKind::Content => self.content,
        }
    }

    /// Cumulative outer size of `kind`.
    #[inline]
    pub const fn size(&self, kind: BoxKind) -> i32 {
        match kind {
            BoxKind::Margin => self.margin_box,
            BoxKind::Border => self.border_box,
            BoxKind::Padding => self.padding_box,
            BoxKind::Content => self.content_box,
        }
    }

    /// Convert `size` from one box into another using these measurements.
    #[inline]
    pub fn convert(&self, size: i32, from: BoxKind, to: BoxKind) -> i32 {
        convert_box(size, from, to, self)
    }
}

/// Convert a size expressed in box `from` into the equivalent size in box `to`.
///
/// Walks `[margin, border, padding, content]`: moving inward subtracts every box
/// thickness from the outer box (inclusive) to the inner box (exclusive), moving
/// outward adds the same span back. Reversible for any input.
pub fn convert_box(size: i32, from: BoxKind, to: BoxKind, sizes: &BoxSizes) -> i32 {
    let outer = from.depth().min(to.depth());
    let inner = from.depth().max(to.depth());
    let span: i32 = BoxKind::OUTSIDE_IN
        .get(outer..inner)
        .unwrap_or(&[])
        .iter()
        .map(|kind| sizes.delta(*kind))
        .sum();
    if from.depth() <= to.depth() {
        size - span
    } else {
        size + span
    }
}
