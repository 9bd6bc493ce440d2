use crate::core::calculator::generate_report;
use crate::core::Pipeline;
use crate::domain::model::{FormInput, Report, RowFailure};
use crate::domain::ports::SessionStore;
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::validate_present;
use std::time::Duration;

/// Drives the form -> report flow against a caller-owned session.
#[derive(Debug, Clone, Default)]
pub struct ReportEngine {
    latency: Duration,
}

impl ReportEngine {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// 只做必填檢查，日期與姓名的內容在產生報告時才驗證
    pub fn submit<S: SessionStore>(&self, session: &mut S, form: FormInput) -> Result<()> {
        validate_present("name", &form.name)?;
        validate_present("birth date", &form.birth_date)?;

        tracing::debug!("Saving form for '{}'", form.name);
        session.save_form(form);
        Ok(())
    }

    pub async fn run<S: SessionStore>(&self, session: &mut S) -> Result<Report> {
        let form = session
            .saved_form()
            .cloned()
            .ok_or(NumerologyError::MissingFormError)?;

        if !self.latency.is_zero() {
            tracing::debug!("Simulating {:?} of latency", self.latency);
            tokio::time::sleep(self.latency).await;
        }

        let report = generate_report(&form.name, &form.birth_date)?;
        tracing::info!("✅ Report generated for '{}'", report.name);

        session.save_report(report.clone());
        Ok(report)
    }

    pub async fn generate<S: SessionStore>(&self, session: &mut S, form: FormInput) -> Result<Report> {
        self.submit(session, form)?;
        self.run(session).await
    }
}

#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub output_path: String,
    pub reports: usize,
    pub failures: Vec<RowFailure>,
}

pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<BatchSummary> {
        tracing::info!("Starting batch report run...");

        // Extract
        tracing::info!("Reading input rows...");
        let rows = self.pipeline.extract().await?;
        tracing::info!("Read {} rows", rows.len());

        // Transform
        tracing::info!("Computing reports...");
        let result = self.pipeline.transform(rows).await?;
        tracing::info!(
            "Computed {} reports, {} rows failed",
            result.reports.len(),
            result.failures.len()
        );

        // Load
        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(&result).await?;
        tracing::info!("📁 Output saved to: {}", output_path);

        Ok(BatchSummary {
            output_path,
            reports: result.reports.len(),
            failures: result.failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::InMemorySession;

    #[tokio::test]
    async fn test_generate_stores_report_in_session() {
        let engine = ReportEngine::default();
        let mut session = InMemorySession::new();

        let report = engine
            .generate(&mut session, FormInput::new("Bob", "2000-01-01"))
            .await
            .unwrap();

        assert_eq!(report.life_path_number.get(), 4);
        assert_eq!(session.saved_report(), Some(&report));
        assert_eq!(session.saved_form().unwrap().birth_date, "2000-01-01");
    }

    #[tokio::test]
    async fn test_run_without_form_fails() {
        let engine = ReportEngine::default();
        let mut session = InMemorySession::new();

        assert!(matches!(
            engine.run(&mut session).await,
            Err(NumerologyError::MissingFormError)
        ));
    }

    #[test]
    fn test_submit_requires_all_fields() {
        let engine = ReportEngine::default();
        let mut session = InMemorySession::new();

        let err = engine
            .submit(&mut session, FormInput::new("", "2000-01-01"))
            .unwrap_err();
        assert!(matches!(err, NumerologyError::ValidationError { ref field, .. } if field == "name"));

        let err = engine
            .submit(&mut session, FormInput::new("Bob", " "))
            .unwrap_err();
        assert!(
            matches!(err, NumerologyError::ValidationError { ref field, .. } if field == "birth date")
        );
        assert!(session.saved_form().is_none());
    }

    #[tokio::test]
    async fn test_failed_report_keeps_form_but_no_report() {
        let engine = ReportEngine::default();
        let mut session = InMemorySession::new();

        let result = engine
            .generate(&mut session, FormInput::new("Bob", "not-a-date"))
            .await;

        assert!(matches!(result, Err(NumerologyError::InvalidDateError { .. })));
        assert!(session.saved_form().is_some());
        assert!(session.saved_report().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let engine = ReportEngine::new(Duration::from_millis(1500));
        let mut session = InMemorySession::new();
        let started = tokio::time::Instant::now();

        engine
            .generate(&mut session, FormInput::new("Bob", "2000-01-01"))
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
    }
}
