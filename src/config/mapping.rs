use crate::domain::model::ColumnMap;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use std::path::Path;

impl ColumnMap {
    /// 從 TOML 檔案載入欄位映射
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析欄位映射；缺漏的鍵落回預設的瑞典文標題
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// 替換環境變數 (例如 ${BROKER_UID_COLUMN})
fn substitute_env_vars(content: &str) -> Result<String> {
    use regex::Regex;
    // 使用正規表達式匹配 ${VAR_NAME} 格式
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

impl Validate for ColumnMap {
    fn validate(&self) -> Result<()> {
        // 每個目標欄位都必須指到一個非空的來源標題
        for (target, source) in self.entries() {
            validate_non_empty_string(target, source)?;
        }
        Ok(())
    }
}
