//! Axis resolution
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>
//!
//! `order` is parsed onto each item but never reorders layout: items are placed
//! in document order.

use crate::chapter5::FlexDirection;
use css_box::{Dimension, Side};

/// Main and cross dimensions of a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    pub direction: FlexDirection,
    pub main: Dimension,
    pub cross: Dimension,
}

impl Axes {
    /// Side items are packed against along the main axis.
    #[inline]
    pub const fn main_start(&self) -> Side {
        self.main.sides().0
    }

    /// Side lines are packed against along the cross axis.
    #[inline]
    pub const fn cross_start(&self) -> Side {
        self.cross.sides().0
    }
}

/// Resolve the physical axes for `direction` in a horizontal-tb writing mode.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[inline]
pub const fn resolve_axes(direction: FlexDirection) -> Axes {
    let main = direction.main_dimension();
    Axes {
        direction,
        main,
        cross: main.cross(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if rows and columns do not map onto width and height respectively.
    fn axes_horizontal_tb() {
        let row = resolve_axes(FlexDirection::Row);
        assert_eq!(row.main, Dimension::Width);
        assert_eq!(row.cross, Dimension::Height);
        assert_eq!(row.main_start(), Side::Left);
        assert_eq!(row.cross_start(), Side::Top);

        let column = resolve_axes(FlexDirection::Column);
        assert_eq!(column.main, Dimension::Height);
        assert_eq!(column.cross, Dimension::Width);
        assert_eq!(column.main_start(), Side::Top);
    }
}
