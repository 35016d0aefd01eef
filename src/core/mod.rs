pub mod charts;
pub mod dataset;
pub mod layout;

pub use crate::domain::model::{LaunchRecord, PayloadRange, SiteSelection};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
