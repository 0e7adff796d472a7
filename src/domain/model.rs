use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 一列試算表資料，欄位順序與工作表一致
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SheetRow {
    pub cells: Map<String, Value>,
}

#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    pub sheet_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<SheetRow>,
}

/// 欄位映射表：目標欄位 -> 來源欄位標題
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub brokerage: String,
    pub brand: String,
    pub city: String,
    pub is_active: String,
    pub cost: String,
    pub discount: String,
    pub customer_number: String,
    pub product_name: String,
    pub email: String,
    pub registration_type: String,
    pub products: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            id: "Mäklarpaket.UID".to_string(),
            first_name: "Mäklare - Namn".to_string(),
            last_name: "Efternamn".to_string(),
            brokerage: "Företag - namn".to_string(),
            brand: "Företag - kedja/varumärke".to_string(),
            city: "Företag - postort".to_string(),
            is_active: "Mäklarpaket.Aktiv".to_string(),
            cost: "Mäklarpaket.Totalkostnad".to_string(),
            discount: "Mäklarpaket.Rabatt".to_string(),
            customer_number: "Mäklarpaket.KundNr".to_string(),
            product_name: "Mäklarpaket.ProduktNamn".to_string(),
            email: "Mäklarpaket.Epost".to_string(),
            registration_type: "Registreringstyp".to_string(),
            products: "Produkter".to_string(),
        }
    }
}

impl ColumnMap {
    /// 逐一列出目標欄位與其來源標題，供驗證與除錯使用
    pub fn entries(&self) -> [(&'static str, &str); 14] {
        [
            ("id", self.id.as_str()),
            ("first_name", self.first_name.as_str()),
            ("last_name", self.last_name.as_str()),
            ("brokerage", self.brokerage.as_str()),
            ("brand", self.brand.as_str()),
            ("city", self.city.as_str()),
            ("is_active", self.is_active.as_str()),
            ("cost", self.cost.as_str()),
            ("discount", self.discount.as_str()),
            ("customer_number", self.customer_number.as_str()),
            ("product_name", self.product_name.as_str()),
            ("email", self.email.as_str()),
            ("registration_type", self.registration_type.as_str()),
            ("products", self.products.as_str()),
        ]
    }
}

/// 轉換後的經紀人紀錄，14 個欄位一律齊全
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub brokerage: String,
    pub brand: String,
    pub city: String,
    pub is_active: bool,
    pub cost: f64,
    pub discount: f64,
    pub customer_number: String,
    pub product_name: String,
    pub email: String,
    pub registration_type: String,
    pub products: String,
}

impl BrokerRecord {
    /// 依映射表從一列資料建構紀錄，缺值以型別預設補齊
    pub fn from_row(row: &SheetRow, columns: &ColumnMap) -> Self {
        Self {
            id: text_cell(row.cells.get(columns.id.as_str())),
            first_name: text_cell(row.cells.get(columns.first_name.as_str())),
            last_name: text_cell(row.cells.get(columns.last_name.as_str())),
            brokerage: text_cell(row.cells.get(columns.brokerage.as_str())),
            brand: text_cell(row.cells.get(columns.brand.as_str())),
            city: text_cell(row.cells.get(columns.city.as_str())),
            is_active: flag_cell(row.cells.get(columns.is_active.as_str())),
            cost: number_cell(row.cells.get(columns.cost.as_str())),
            discount: number_cell(row.cells.get(columns.discount.as_str())),
            customer_number: text_cell(row.cells.get(columns.customer_number.as_str())),
            product_name: text_cell(row.cells.get(columns.product_name.as_str())),
            email: text_cell(row.cells.get(columns.email.as_str())),
            registration_type: text_cell(row.cells.get(columns.registration_type.as_str())),
            products: text_cell(row.cells.get(columns.products.as_str())),
        }
    }
}

/// 檢視報告：欄位清單、總列數與前幾列樣本
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookSummary {
    pub columns: Vec<String>,
    pub total_rows: usize,
    pub sample: Vec<SheetRow>,
}

pub fn text_cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

pub fn number_cell(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        // 字串欄位可能帶十進位逗號（瑞典格式）
        Some(Value::String(s)) => s.trim().replace(',', ".").parse().unwrap_or(0.0),
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

pub fn flag_cell(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.eq_ignore_ascii_case("true") || s == "1" || s.eq_ignore_ascii_case("ja")
        }
        _ => false,
    }
}
