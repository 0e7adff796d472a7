use crate::domain::model::{text_cell, SheetRow, SheetTable};
use crate::utils::error::{EtlError, Result};
use calamine::{Data, Reader, Xlsx};
use serde_json::{Map, Value};
use std::io::Cursor;

/// 解析 xlsx 位元組：首列當欄位標題，其餘列轉成標題對值的映射
pub fn parse_workbook(bytes: Vec<u8>, sheet: Option<&str>) -> Result<SheetTable> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| EtlError::ProcessingError {
                message: "Workbook contains no sheets".to_string(),
            })?,
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut raw_rows = range.rows();

    // 標題一律轉字串並去除前後空白
    let columns: Vec<String> = match raw_rows.next() {
        Some(header) => header.iter().map(cell_to_label).collect(),
        None => Vec::new(),
    };

    let mut rows = Vec::with_capacity(range.height().saturating_sub(1));
    for raw_row in raw_rows {
        let mut cells = Map::new();
        for (index, label) in columns.iter().enumerate() {
            // 沒有標題的欄位無鍵可掛，略過
            if label.is_empty() {
                continue;
            }
            let value = raw_row.get(index).map(cell_to_value).unwrap_or(Value::Null);
            cells.insert(label.clone(), value);
        }
        rows.push(SheetRow { cells });
    }

    tracing::debug!(
        "Parsed sheet '{}': {} columns, {} data rows",
        sheet_name,
        columns.len(),
        rows.len()
    );

    Ok(SheetTable {
        sheet_name,
        columns,
        rows,
    })
}

fn cell_to_label(cell: &Data) -> String {
    text_cell(Some(&cell_to_value(cell))).trim().to_string()
}

fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => {
            // 字面上的布林字串視為布林值
            match s.to_lowercase().as_str() {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => Value::String(s.clone()),
            }
        }
        Data::Int(i) => Value::Number((*i).into()),
        Data::Float(f) => float_to_number(*f),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| Value::String(d.to_string()))
            .unwrap_or(Value::Null),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        Data::Error(_) => Value::Null,
    }
}

/// Excel 內部一律存浮點數；整數值還原成 i64 以免輸出帶 ".0"
fn float_to_number(f: f64) -> Value {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Value::Number((f as i64).into())
    } else {
        serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
    use serde_json::json;

    fn broker_fixture() -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        sheet.write_string(0, 0, "  Mäklarpaket.UID  ").unwrap();
        sheet.write_string(0, 1, "Mäklarpaket.Totalkostnad").unwrap();
        sheet.write_string(0, 2, "Mäklarpaket.Aktiv").unwrap();

        sheet.write_string(1, 0, "MB-1").unwrap();
        sheet.write_number(1, 1, 1490.0).unwrap();
        sheet.write_boolean(1, 2, true).unwrap();

        sheet.write_string(2, 0, "MB-2").unwrap();
        sheet.write_number(2, 1, 12.5).unwrap();
        sheet.write_boolean(2, 2, false).unwrap();

        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn test_parse_workbook_trims_header_labels() {
        let table = parse_workbook(broker_fixture(), None).unwrap();

        assert_eq!(
            table.columns,
            vec![
                "Mäklarpaket.UID",
                "Mäklarpaket.Totalkostnad",
                "Mäklarpaket.Aktiv"
            ]
        );
        assert_eq!(
            table.rows[0].cells.get("Mäklarpaket.UID"),
            Some(&json!("MB-1"))
        );
    }

    #[test]
    fn test_parse_workbook_preserves_row_order() {
        let table = parse_workbook(broker_fixture(), None).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.rows[0].cells.get("Mäklarpaket.UID"),
            Some(&json!("MB-1"))
        );
        assert_eq!(
            table.rows[1].cells.get("Mäklarpaket.UID"),
            Some(&json!("MB-2"))
        );
    }

    #[test]
    fn test_whole_floats_become_integers() {
        let table = parse_workbook(broker_fixture(), None).unwrap();

        assert_eq!(
            table.rows[0].cells.get("Mäklarpaket.Totalkostnad"),
            Some(&json!(1490))
        );
        assert_eq!(
            table.rows[1].cells.get("Mäklarpaket.Totalkostnad"),
            Some(&json!(12.5))
        );
    }

    #[test]
    fn test_booleans_survive_round_trip() {
        let table = parse_workbook(broker_fixture(), None).unwrap();

        assert_eq!(
            table.rows[0].cells.get("Mäklarpaket.Aktiv"),
            Some(&json!(true))
        );
        assert_eq!(
            table.rows[1].cells.get("Mäklarpaket.Aktiv"),
            Some(&json!(false))
        );
    }

    #[test]
    fn test_literal_boolean_strings_become_booleans() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Mäklarpaket.Aktiv").unwrap();
        sheet.write_string(1, 0, "true").unwrap();
        sheet.write_string(2, 0, "FALSE").unwrap();
        sheet.write_string(3, 0, "ja").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let table = parse_workbook(bytes, None).unwrap();

        assert_eq!(
            table.rows[0].cells.get("Mäklarpaket.Aktiv"),
            Some(&json!(true))
        );
        assert_eq!(
            table.rows[1].cells.get("Mäklarpaket.Aktiv"),
            Some(&json!(false))
        );
        // 其他字串原樣保留
        assert_eq!(
            table.rows[2].cells.get("Mäklarpaket.Aktiv"),
            Some(&json!("ja"))
        );
    }

    #[test]
    fn test_named_sheet_selection() {
        let mut workbook = Workbook::new();
        let first = workbook.add_worksheet();
        first.set_name("Ignored").unwrap();
        first.write_string(0, 0, "Kolumn").unwrap();
        first.write_string(1, 0, "fel blad").unwrap();

        let second = workbook.add_worksheet();
        second.set_name("Mäklare").unwrap();
        second.write_string(0, 0, "Kolumn").unwrap();
        second.write_string(1, 0, "rätt blad").unwrap();

        let bytes = workbook.save_to_buffer().unwrap();
        let table = parse_workbook(bytes, Some("Mäklare")).unwrap();

        assert_eq!(table.sheet_name, "Mäklare");
        assert_eq!(table.rows[0].cells.get("Kolumn"), Some(&json!("rätt blad")));
    }

    #[test]
    fn test_missing_sheet_is_an_error() {
        let result = parse_workbook(broker_fixture(), Some("Finns inte"));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_bytes_are_an_error() {
        let result = parse_workbook(b"not an xlsx file".to_vec(), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_header_only_sheet_yields_no_rows() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Mäklarpaket.UID").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let table = parse_workbook(bytes, None).unwrap();

        assert_eq!(table.columns, vec!["Mäklarpaket.UID"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_unlabeled_columns_are_dropped_from_rows() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Efternamn").unwrap();
        // 第二欄沒有標題，值仍存在
        sheet.write_string(1, 0, "Lindqvist").unwrap();
        sheet.write_string(1, 1, "orphan value").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let table = parse_workbook(bytes, None).unwrap();

        assert_eq!(table.columns, vec!["Efternamn", ""]);
        assert_eq!(table.rows[0].cells.len(), 1);
        assert_eq!(table.rows[0].cells.get("Efternamn"), Some(&json!("Lindqvist")));
    }

    #[test]
    fn test_duplicate_labels_keep_rightmost_value() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Efternamn").unwrap();
        sheet.write_string(0, 1, "Efternamn").unwrap();
        sheet.write_string(1, 0, "Lindqvist").unwrap();
        sheet.write_string(1, 1, "Berg").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let table = parse_workbook(bytes, None).unwrap();

        // 同名欄位右邊覆蓋左邊，標題列仍全數保留
        assert_eq!(table.columns, vec!["Efternamn", "Efternamn"]);
        assert_eq!(table.rows[0].cells.len(), 1);
        assert_eq!(table.rows[0].cells.get("Efternamn"), Some(&json!("Berg")));
    }

    #[test]
    fn test_date_formatted_cells_render_as_timestamps() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Registrerad").unwrap();

        // 只有帶日期數字格式的儲存格才會被辨識為日期時間
        let stamp = ExcelDateTime::from_ymd(2024, 3, 1)
            .unwrap()
            .and_hms(12, 30, 45)
            .unwrap();
        let format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
        sheet.write_datetime_with_format(1, 0, stamp, &format).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let table = parse_workbook(bytes, None).unwrap();

        assert_eq!(
            table.rows[0].cells.get("Registrerad"),
            Some(&json!("2024-03-01 12:30:45"))
        );
    }
}
