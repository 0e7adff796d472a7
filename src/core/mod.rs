pub mod convert;
pub mod etl;
pub mod inspect;
pub mod workbook;

pub use crate::domain::model::{BrokerRecord, ColumnMap, SheetRow, SheetTable, WorkbookSummary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
