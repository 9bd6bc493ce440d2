use crate::domain::model::{FormInput, Report};
use crate::domain::ports::SessionStore;

/// Caller-owned session context. Holds at most one form and one report.
#[derive(Debug, Clone, Default)]
pub struct InMemorySession {
    form: Option<FormInput>,
    report: Option<Report>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySession {
    fn save_form(&mut self, form: FormInput) {
        // 新的表單會讓舊報告失效
        self.report = None;
        self.form = Some(form);
    }

    fn saved_form(&self) -> Option<&FormInput> {
        self.form.as_ref()
    }

    fn save_report(&mut self, report: Report) {
        self.report = Some(report);
    }

    fn saved_report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    fn clear(&mut self) {
        self.form = None;
        self.report = None;
    }
}
