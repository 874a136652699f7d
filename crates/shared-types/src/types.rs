#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LegalDocument {
    pub id: String,
    pub filename: String,
    pub text_content: Vec<String>, // Per-line text, 1-indexed in reports
    pub created_at: u64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisReport {
    pub document: String,
    pub issues: Vec<Issue>,
    pub status: AnalysisStatus,
    pub checked_at: u64,
}

/// Completion marker on the report envelope. Analysis that runs at all
/// completes; partial results are not a distinct state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Completed,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub description: String,
    pub location: String, // e.g. "строка 14" or "статьи 3 и 7"
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_snippet: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    MissingReference,
    SemanticContradiction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}
