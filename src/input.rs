//! Turns sampled button state into the drag force on the cloth's first row.

use crate::float::Float;
use crate::vec::Planar;

/// One frame's worth of drag controls.
///
/// `positive` and `negative` are the two push buttons; `vertical_axis` is the
/// modifier that switches the push from X to Y.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragInput {
    pub positive: bool,
    pub negative: bool,
    pub vertical_axis: bool,
}

impl DragInput {
    pub fn new(positive: bool, negative: bool, vertical_axis: bool) -> Self {
        DragInput { positive, negative, vertical_axis }
    }

    pub fn is_idle(&self) -> bool {
        !self.positive && !self.negative
    }

    /// Force of `magnitude` along the selected axis, or zero when idle.
    ///
    /// With both buttons held the negative direction wins.
    pub fn force<V: Planar>(&self, magnitude: V::Scalar) -> V {
        let signed = if self.negative {
            -magnitude
        } else if self.positive {
            magnitude
        } else {
            return V::zero();
        };

        if self.vertical_axis {
            V::from_planar(V::Scalar::zero(), signed)
        } else {
            V::from_planar(signed, V::Scalar::zero())
        }
    }
}
