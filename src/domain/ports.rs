use crate::domain::model::SheetTable;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn workbook_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn target_file(&self) -> &str;
    fn sheet_name(&self) -> Option<&str>;
}

pub trait Pipeline: Send + Sync {
    type Output;

    fn extract(&self) -> Result<SheetTable>;
    fn transform(&self, table: SheetTable) -> Result<Self::Output>;
    fn load(&self, output: Self::Output) -> Result<String>;
}
