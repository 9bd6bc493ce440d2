pub mod batch;
pub mod calculator;
pub mod descriptions;
pub mod engine;
pub mod session;

pub use crate::domain::model::{BatchResult, FormInput, FormRow, Report, RowFailure};
pub use crate::domain::ports::{BatchConfigProvider, Pipeline, SessionStore, Storage};
pub use crate::utils::error::Result;
