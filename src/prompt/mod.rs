// Prompt composition for invoice queries

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed instruction block that fronts every prompt.
pub const INVOICE_INSTRUCTION: &str = "You are an expert in reading and understanding invoices.\nAnalyze the uploaded invoice image and answer user queries.";

/// Output languages the form offers. The set is closed: serde rejects
/// anything else at the API boundary, and the page only renders these six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Spanish,
    French,
    German,
    Chinese,
}

impl Language {
    /// All supported languages, in the order the form lists them.
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Hindi,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Chinese,
    ];

    /// The name used both in the selector and in the prompt directive.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Chinese => "Chinese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the prompt sent to the model: the fixed instruction, a directive
/// naming the output language, then the user query verbatim. The query may
/// be empty; it is forwarded as-is.
pub fn compose(query: &str, language: Language) -> String {
    format!("{INVOICE_INSTRUCTION}\nAnswer in {language}.\nUser Query: {query}")
}
