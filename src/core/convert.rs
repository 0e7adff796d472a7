use crate::core::workbook::parse_workbook;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{BrokerRecord, ColumnMap, SheetTable};
use crate::utils::error::Result;

pub struct ConvertPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    mapping: ColumnMap,
}

impl<S: Storage, C: ConfigProvider> ConvertPipeline<S, C> {
    pub fn new(storage: S, config: C, mapping: ColumnMap) -> Self {
        Self {
            storage,
            config,
            mapping,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ConvertPipeline<S, C> {
    type Output = Vec<BrokerRecord>;

    fn extract(&self) -> Result<SheetTable> {
        tracing::debug!("Reading workbook: {}", self.config.workbook_path());
        let bytes = self.storage.read_file(self.config.workbook_path())?;

        tracing::debug!("Workbook loaded ({} bytes)", bytes.len());
        parse_workbook(bytes, self.config.sheet_name())
    }

    fn transform(&self, table: SheetTable) -> Result<Vec<BrokerRecord>> {
        // 每一列都轉出一筆紀錄，缺值由型別預設補齊，不跳列
        let records = table
            .rows
            .iter()
            .map(|row| BrokerRecord::from_row(row, &self.mapping))
            .collect::<Vec<_>>();

        tracing::debug!("Mapped {} rows to broker records", records.len());
        Ok(records)
    }

    fn load(&self, records: Vec<BrokerRecord>) -> Result<String> {
        // 緊湊輸出，不縮排
        let json = serde_json::to_vec(&records)?;

        tracing::debug!(
            "Writing {} records ({} bytes) to {}",
            records.len(),
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
