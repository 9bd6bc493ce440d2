use crate::core::BatchConfigProvider;
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::{
    validate_delimiter, validate_non_empty_string, validate_one_of, validate_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SUPPORTED_FORMATS: [&str; 2] = ["json", "csv"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub batch: BatchSection,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_name_column")]
    pub name_column: String,
    #[serde(default = "default_birth_date_column")]
    pub birth_date_column: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: String,
    #[serde(default = "default_output_formats")]
    pub output_formats: Vec<String>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub json: Option<String>,
    pub csv: Option<String>,
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_name_column() -> String {
    "name".to_string()
}

fn default_birth_date_column() -> String {
    "birth_date".to_string()
}

fn default_output_formats() -> Vec<String> {
    vec!["json".to_string()]
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NumerologyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NumerologyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NumerologyError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 命令列覆蓋輸出目錄
    pub fn set_output_path(&mut self, output_path: impl Into<String>) {
        self.output.output_path = output_path.into();
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("batch.name", &self.batch.name)?;
        validate_path("input.path", &self.input.path)?;
        validate_path("output.output_path", &self.output.output_path)?;
        validate_delimiter("input.delimiter", &self.input.delimiter)?;
        validate_non_empty_string("input.name_column", &self.input.name_column)?;
        validate_non_empty_string("input.birth_date_column", &self.input.birth_date_column)?;
        validate_one_of(
            "output.output_formats",
            &self.output.output_formats,
            &SUPPORTED_FORMATS,
        )?;
        Ok(())
    }
}

impl BatchConfigProvider for TomlConfig {
    fn input_file(&self) -> &str {
        &self.input.path
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.output_formats
    }

    fn delimiter(&self) -> u8 {
        // validate() 已確認是單一字元
        self.input.delimiter.as_bytes().first().copied().unwrap_or(b',')
    }

    fn name_column(&self) -> &str {
        &self.input.name_column
    }

    fn birth_date_column(&self) -> &str {
        &self.input.birth_date_column
    }

    fn json_filename(&self) -> &str {
        self.output
            .filenames
            .as_ref()
            .and_then(|f| f.json.as_deref())
            .unwrap_or("reports.json")
    }

    fn csv_filename(&self) -> &str {
        self.output
            .filenames
            .as_ref()
            .and_then(|f| f.csv.as_deref())
            .unwrap_or("reports.csv")
    }
}
