use serde::Serialize;

/// One dataset entry. Immutable once loaded; its position in the loaded
/// sequence is its only identifier.
#[derive(Debug, Clone)]
pub struct Record {
    pub question: String,
    pub complex_cot: String,
    pub response: String,
}

/// Result of translating one record's question field.
#[derive(Debug, Clone)]
pub struct TranslationOutcome {
    /// Either a genuine translation or the `[ERROR: ...]` sentinel.
    pub translated_text: String,
    pub attempts_used: u32,
    pub succeeded: bool,
}

/// One output CSV row. Field order is the column order.
#[derive(Debug, Clone, Serialize)]
pub struct OutputRow {
    pub original_question_en: String,
    pub translated_question_th: String,
    pub complex_cot: String,
    pub response: String,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub rows: Vec<OutputRow>,
    pub failed_rows: usize,
}
