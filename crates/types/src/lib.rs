pub mod geometry;
pub mod params;

pub use geometry::{GridRect, PageGrid};
pub use params::{MonthRef, ParamValue, Params, WeekRef};
