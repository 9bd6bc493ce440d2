use crate::domain::model::{BatchResult, FormInput, FormRow, Report};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait BatchConfigProvider: Send + Sync {
    fn input_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn delimiter(&self) -> u8;
    fn name_column(&self) -> &str;
    fn birth_date_column(&self) -> &str;
    fn json_filename(&self) -> &str;
    fn csv_filename(&self) -> &str;
}

/// 單一工作階段的暫存：最後一次送出的表單與報告
pub trait SessionStore {
    fn save_form(&mut self, form: FormInput);
    fn saved_form(&self) -> Option<&FormInput>;
    fn save_report(&mut self, report: Report);
    fn saved_report(&self) -> Option<&Report>;
    fn clear(&mut self);
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<FormRow>>;
    async fn transform(&self, rows: Vec<FormRow>) -> Result<BatchResult>;
    async fn load(&self, result: &BatchResult) -> Result<String>;
}
