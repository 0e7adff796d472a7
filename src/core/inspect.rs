use crate::core::workbook::parse_workbook;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{SheetTable, WorkbookSummary};
use crate::utils::error::Result;

/// 報告最多收錄的樣本列數
pub const SAMPLE_ROWS: usize = 10;

pub struct InspectPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> InspectPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for InspectPipeline<S, C> {
    type Output = WorkbookSummary;

    fn extract(&self) -> Result<SheetTable> {
        tracing::debug!("Reading workbook: {}", self.config.workbook_path());
        let bytes = self.storage.read_file(self.config.workbook_path())?;
        parse_workbook(bytes, self.config.sheet_name())
    }

    fn transform(&self, table: SheetTable) -> Result<WorkbookSummary> {
        let total_rows = table.rows.len();
        let sample = table.rows.into_iter().take(SAMPLE_ROWS).collect();

        Ok(WorkbookSummary {
            columns: table.columns,
            total_rows,
            sample,
        })
    }

    fn load(&self, summary: WorkbookSummary) -> Result<String> {
        // 給人看的報告，縮排輸出
        let json = serde_json::to_vec_pretty(&summary)?;

        tracing::debug!(
            "Writing summary ({} bytes) to {}",
            json.len(),
            self.config.target_file()
        );
        self.storage.write_file(self.config.target_file(), &json)?;

        Ok(format!(
            "{}/{}",
            self.config.output_path(),
            self.config.target_file()
        ))
    }
}
