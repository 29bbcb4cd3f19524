use std::sync::Arc;

use daybook_aggregate::{AnalyzerConfig, CrossJournalSummarizer, JournalAnalyzer};
use daybook_classifier::Stopwords;
use daybook_protocol::{Categorized, JournalAnnotations, JournalResult, RankedEntity};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The summary payload sent back to JavaScript.
#[derive(Serialize)]
pub struct SummaryReport {
    pub journals: usize,
    pub entities: Categorized<Vec<RankedEntity>>,
    pub risk_flag: bool,
}

/// Analyzer and summarizer sharing one stopword list, held by the page.
#[wasm_bindgen]
pub struct DaybookEngine {
    analyzer: JournalAnalyzer,
    summarizer: CrossJournalSummarizer,
}

#[wasm_bindgen]
impl DaybookEngine {
    /// `stopwords` is the plain-text list, typically fetched alongside the app.
    #[wasm_bindgen(constructor)]
    pub fn new(stopwords: &str) -> Self {
        let config = AnalyzerConfig::default();
        Self {
            analyzer: JournalAnalyzer::new(Arc::new(Stopwords::from_text(stopwords)), &config),
            summarizer: CrossJournalSummarizer::new(config.merger()),
        }
    }

    /// Backend annotations in, `JournalResult` out.
    pub fn analyze(&self, annotations: JsValue) -> Result<JsValue, JsValue> {
        let annotations: JournalAnnotations = serde_wasm_bindgen::from_value(annotations)?;
        let result = self.analyzer.analyze(&annotations);
        Ok(serde_wasm_bindgen::to_value(&result)?)
    }

    /// Array of stored `JournalResult`s in, ranked roll-up plus risk flag out.
    pub fn summarize(&self, journals: JsValue) -> Result<JsValue, JsValue> {
        let journals: Vec<JournalResult> = serde_wasm_bindgen::from_value(journals)?;
        let report = SummaryReport {
            journals: journals.len(),
            entities: self.summarizer.summarize_journals(&journals),
            risk_flag: self.summarizer.risk_flag(&journals),
        };
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }

    pub fn risk_flag(&self, journals: JsValue) -> Result<bool, JsValue> {
        let journals: Vec<JournalResult> = serde_wasm_bindgen::from_value(journals)?;
        Ok(self.summarizer.risk_flag(&journals))
    }
}
