pub mod reading;

pub use reading::{Dashboard, MeasurementsResponse, Reading, StatusResponse};
