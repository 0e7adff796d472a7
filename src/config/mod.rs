pub mod cli;
pub mod mapping;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "broker-etl")]
#[command(about = "Convert a broker spreadsheet into the CRM's brokers.json")]
pub struct ConvertConfig {
    #[arg(long, default_value = "Synthetic_Final.xlsx")]
    pub workbook: String,

    #[arg(long, default_value = ".", help = "Base directory for input and output paths")]
    pub output_path: String,

    #[arg(long, default_value = "sweden-broker-crm/src/data/brokers.json")]
    pub out_file: String,

    #[arg(long, help = "Worksheet to read (defaults to the first sheet)")]
    pub sheet: Option<String>,

    #[arg(long, help = "TOML file overriding the source column mapping")]
    pub mapping: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for ConvertConfig {
    fn workbook_path(&self) -> &str {
        &self.workbook
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn target_file(&self) -> &str {
        &self.out_file
    }

    fn sheet_name(&self) -> Option<&str> {
        self.sheet.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for ConvertConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("workbook", &self.workbook)?;
        validation::validate_file_extension("workbook", &self.workbook, &["xlsx", "xlsm"])?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("out_file", &self.out_file)?;
        if let Some(mapping) = &self.mapping {
            validation::validate_file_extension("mapping", mapping, &["toml"])?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "inspect-data")]
#[command(about = "Summarize a broker spreadsheet for inspection")]
pub struct InspectConfig {
    #[arg(long, default_value = "Synthetic_Final.xlsx")]
    pub workbook: String,

    #[arg(long, default_value = ".", help = "Base directory for input and output paths")]
    pub output_path: String,

    #[arg(long, default_value = "data_info.json")]
    pub out_file: String,

    #[arg(long, help = "Worksheet to read (defaults to the first sheet)")]
    pub sheet: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for InspectConfig {
    fn workbook_path(&self) -> &str {
        &self.workbook
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn target_file(&self) -> &str {
        &self.out_file
    }

    fn sheet_name(&self) -> Option<&str> {
        self.sheet.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for InspectConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("workbook", &self.workbook)?;
        validation::validate_file_extension("workbook", &self.workbook, &["xlsx", "xlsm"])?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("out_file", &self.out_file)?;
        Ok(())
    }
}
