pub mod cli;

use std::path::PathBuf;

/// Saved product listing response read by the report tool.
pub const PRODUCTS_RESPONSE_PATH: &str = "/tmp/products_response.json";

/// Destination of the generated launcher script.
pub const LAUNCHER_OUTPUT_PATH: &str = "/mnt/c/flutter/bin/flutter";

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input_path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(PRODUCTS_RESPONSE_PATH),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LauncherConfig {
    pub output_path: PathBuf,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(LAUNCHER_OUTPUT_PATH),
        }
    }
}
