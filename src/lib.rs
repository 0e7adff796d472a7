pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, ConvertConfig, InspectConfig};

pub use crate::core::{convert::ConvertPipeline, etl::EtlEngine, inspect::InspectPipeline};
pub use domain::model::{BrokerRecord, ColumnMap, WorkbookSummary};
pub use utils::error::{EtlError, Result};
