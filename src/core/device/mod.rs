//! Device classification module.
//!
//! Derives a device-class label and an orientation from the screen size.

mod classifier;
mod types;

pub use classifier::{
    classify_device, classify_orientation, rect_matches_long_side, DeviceClassEntry,
    DeviceClassTable, MatchPolicy, LEGACY_TALL_PHONE_HEIGHT, MAX_DIMENSION_4_7_INCH,
    MAX_DIMENSION_4_INCH, MAX_DIMENSION_5_5_INCH,
};
pub use types::{DeviceClass, Orientation, ScreenRect};
