pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, LauncherConfig, ReportConfig};
pub use core::{
    launcher::{LauncherTask, LAUNCHER_SCRIPT},
    report::{ProductReport, ReportTask},
    runner::TaskRunner,
};
pub use domain::model::{ProductDocument, ProductRecord};
pub use utils::error::{Result, ToolError};
