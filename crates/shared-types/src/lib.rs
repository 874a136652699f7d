pub mod types;

pub use types::{AnalysisReport, AnalysisStatus, Issue, IssueType, LegalDocument, Severity};
