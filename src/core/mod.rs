pub mod launcher;
pub mod report;
pub mod runner;

pub use crate::domain::model::{ProductDocument, ProductRecord};
pub use crate::domain::ports::{Storage, Task};
pub use crate::utils::error::Result;
