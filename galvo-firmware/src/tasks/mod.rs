//! Embassy tasks for the meter firmware

pub mod meter;
pub mod status;

pub use meter::meter_task;
pub use status::status_task;
