use crate::core::calculator::generate_report;
use crate::core::{BatchConfigProvider, Pipeline, Storage};
use crate::domain::model::{BatchResult, FormInput, FormRow, RowFailure};
use crate::utils::error::{NumerologyError, Result};
use serde::Serialize;
use std::path::Path;

pub const FAILURES_FILENAME: &str = "failures.csv";

/// Reads people from a CSV file and writes one report per row.
pub struct BatchPipeline<S: Storage, C: BatchConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: BatchConfigProvider> BatchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_file(&self, filename: &str) -> String {
        Path::new(self.config.output_path())
            .join(filename)
            .to_string_lossy()
            .into_owned()
    }
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(column))
        .ok_or_else(|| NumerologyError::ProcessingError {
            message: format!(
                "Input is missing the '{}' column (found: {})",
                column,
                headers.iter().collect::<Vec<_>>().join(", ")
            ),
        })
}

fn to_csv<T: Serialize>(items: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for item in items {
        writer.serialize(item)?;
    }
    writer
        .into_inner()
        .map_err(|e| NumerologyError::ProcessingError {
            message: format!("Failed to flush CSV output: {}", e),
        })
}

#[async_trait::async_trait]
impl<S: Storage, C: BatchConfigProvider> Pipeline for BatchPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<FormRow>> {
        tracing::debug!("Reading input file: {}", self.config.input_file());
        let data = self.storage.read_file(self.config.input_file()).await?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter())
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(data.as_slice());

        let headers = reader.headers()?.clone();
        let name_index = column_index(&headers, self.config.name_column())?;
        let birth_date_index = column_index(&headers, self.config.birth_date_column())?;

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            rows.push(FormRow {
                row: index + 1,
                input: FormInput::new(
                    record.get(name_index).unwrap_or_default(),
                    record.get(birth_date_index).unwrap_or_default(),
                ),
            });
        }

        Ok(rows)
    }

    async fn transform(&self, rows: Vec<FormRow>) -> Result<BatchResult> {
        let mut reports = Vec::with_capacity(rows.len());
        let mut failures = Vec::new();

        for FormRow { row, input } in rows {
            match generate_report(&input.name, &input.birth_date) {
                Ok(report) => reports.push(report),
                Err(e) => {
                    // 單列失敗不中斷整批
                    tracing::warn!("Row {} skipped: {}", row, e);
                    failures.push(RowFailure {
                        row,
                        name: input.name,
                        birth_date: input.birth_date,
                        error: e.user_friendly_message(),
                    });
                }
            }
        }

        Ok(BatchResult { reports, failures })
    }

    async fn load(&self, result: &BatchResult) -> Result<String> {
        for format in self.config.output_formats() {
            match format.as_str() {
                "json" => {
                    let path = self.output_file(self.config.json_filename());
                    let data = serde_json::to_vec_pretty(&result.reports)?;
                    self.storage.write_file(&path, &data).await?;
                    tracing::debug!("Wrote {}", path);
                }
                "csv" => {
                    let path = self.output_file(self.config.csv_filename());
                    let data = to_csv(&result.reports)?;
                    self.storage.write_file(&path, &data).await?;
                    tracing::debug!("Wrote {}", path);
                }
                other => {
                    return Err(NumerologyError::InvalidConfigValueError {
                        field: "output.output_formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported format. Valid formats: json, csv".to_string(),
                    });
                }
            }
        }

        if !result.failures.is_empty() {
            let path = self.output_file(FAILURES_FILENAME);
            let data = to_csv(&result.failures)?;
            self.storage.write_file(&path, &data).await?;
            tracing::warn!("⚠️ {} rows failed, see {}", result.failures.len(), path);
        }

        Ok(self.config.output_path().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStorage {
        files: Mutex<HashMap<String, Vec<u8>>>,
    }

    impl MemoryStorage {
        fn with_file(path: &str, data: &str) -> Self {
            let storage = Self::default();
            storage
                .files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.as_bytes().to_vec());
            storage
        }

        fn get(&self, path: &str) -> Option<String> {
            self.files
                .lock()
                .unwrap()
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MemoryStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
                NumerologyError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    path.to_string(),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig {
        formats: Vec<String>,
        delimiter: u8,
    }

    impl TestConfig {
        fn new(formats: &[&str]) -> Self {
            Self {
                formats: formats.iter().map(|f| f.to_string()).collect(),
                delimiter: b',',
            }
        }
    }

    impl BatchConfigProvider for TestConfig {
        fn input_file(&self) -> &str {
            "people.csv"
        }

        fn output_path(&self) -> &str {
            "out"
        }

        fn output_formats(&self) -> &[String] {
            &self.formats
        }

        fn delimiter(&self) -> u8 {
            self.delimiter
        }

        fn name_column(&self) -> &str {
            "name"
        }

        fn birth_date_column(&self) -> &str {
            "birth_date"
        }

        fn json_filename(&self) -> &str {
            "reports.json"
        }

        fn csv_filename(&self) -> &str {
            "reports.csv"
        }
    }

    fn out(file: &str) -> String {
        Path::new("out").join(file).to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn test_extract_finds_columns_by_header() {
        let storage = MemoryStorage::with_file(
            "people.csv",
            "id,Birth_Date,Name\n1,2000-01-01,Bob\n2, 1990-07-14 ,Alice\n",
        );
        let pipeline = BatchPipeline::new(storage, TestConfig::new(&["json"]));

        let rows = pipeline.extract().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row, 1);
        assert_eq!(rows[0].input, FormInput::new("Bob", "2000-01-01"));
        assert_eq!(rows[1].input, FormInput::new("Alice", "1990-07-14"));
    }

    #[tokio::test]
    async fn test_extract_missing_column() {
        let storage = MemoryStorage::with_file("people.csv", "name,dob\nBob,2000-01-01\n");
        let pipeline = BatchPipeline::new(storage, TestConfig::new(&["json"]));

        assert!(matches!(
            pipeline.extract().await,
            Err(NumerologyError::ProcessingError { .. })
        ));
    }

    #[tokio::test]
    async fn test_semicolon_delimiter() {
        let storage =
            MemoryStorage::with_file("people.csv", "name;birth_date\nBob;2000-01-01\n");
        let mut config = TestConfig::new(&["json"]);
        config.delimiter = b';';
        let pipeline = BatchPipeline::new(storage, config);

        let rows = pipeline.extract().await.unwrap();
        assert_eq!(rows[0].input.birth_date, "2000-01-01");
    }

    #[tokio::test]
    async fn test_transform_collects_failures() {
        let pipeline = BatchPipeline::new(MemoryStorage::default(), TestConfig::new(&["json"]));
        let rows = vec![
            FormRow {
                row: 1,
                input: FormInput::new("Bob", "2000-01-01"),
            },
            FormRow {
                row: 2,
                input: FormInput::new("Bob", "not-a-date"),
            },
            FormRow {
                row: 3,
                input: FormInput::new("", "2000-01-01"),
            },
        ];

        let result = pipeline.transform(rows).await.unwrap();
        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.failures.len(), 2);
        assert_eq!(result.failures[0].row, 2);
        assert_eq!(result.failures[1].row, 3);
    }

    #[tokio::test]
    async fn test_load_writes_requested_formats() {
        let pipeline = BatchPipeline::new(MemoryStorage::default(), TestConfig::new(&["json", "csv"]));
        let result = BatchResult {
            reports: vec![generate_report("Bob", "2000-01-01").unwrap()],
            failures: vec![],
        };

        let output = pipeline.load(&result).await.unwrap();
        assert_eq!(output, "out");

        let json = pipeline.storage.get(&out("reports.json")).unwrap();
        assert!(json.contains("\"lifePathNumber\": 4"));

        let csv = pipeline.storage.get(&out("reports.csv")).unwrap();
        let header = csv.lines().next().unwrap();
        assert!(header.starts_with("name,birthDate,lifePathNumber,expressionNumber"));
        assert!(csv.contains("Bob,2000-01-01,4,1,6,4,"));

        assert!(pipeline.storage.get(&out(FAILURES_FILENAME)).is_none());
    }

    #[tokio::test]
    async fn test_load_writes_failures() {
        let pipeline = BatchPipeline::new(MemoryStorage::default(), TestConfig::new(&["json"]));
        let result = BatchResult {
            reports: vec![],
            failures: vec![RowFailure {
                row: 4,
                name: "Bob".to_string(),
                birth_date: "not-a-date".to_string(),
                error: "'not-a-date' is not a valid birth date".to_string(),
            }],
        };

        pipeline.load(&result).await.unwrap();
        let failures = pipeline.storage.get(&out(FAILURES_FILENAME)).unwrap();
        assert!(failures.starts_with("row,name,birthDate,error"));
        assert!(failures.contains("4,Bob,not-a-date"));
    }

    #[tokio::test]
    async fn test_load_rejects_unknown_format() {
        let pipeline = BatchPipeline::new(MemoryStorage::default(), TestConfig::new(&["xml"]));
        let result = BatchResult {
            reports: vec![],
            failures: vec![],
        };

        assert!(matches!(
            pipeline.load(&result).await,
            Err(NumerologyError::InvalidConfigValueError { .. })
        ));
    }
}
