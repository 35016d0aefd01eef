pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::LocalStorage;
pub use crate::app::DashboardState;
pub use crate::config::DashboardSettings;
pub use crate::core::charts::{pie_chart, scatter_chart};
pub use crate::core::dataset::LaunchTable;
pub use crate::utils::error::{DashError, Result};
