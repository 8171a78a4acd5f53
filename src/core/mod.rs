pub mod chain;
pub mod geo;
pub mod http;
pub mod ip;
pub mod passes;

pub use crate::domain::model::{Coordinates, PassRecord};
pub use crate::domain::ports::{ConfigProvider, GeoLookup, IpLookup, PassLookup};
pub use crate::utils::error::Result;
