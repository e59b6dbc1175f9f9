pub mod client;
pub mod models;
pub mod endpoints;

pub use client::AcquisitionsClient;
pub use models::{Acquisition, AcquisitionList, column_names};
