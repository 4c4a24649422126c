//! Decoded shape of one report-generation response.
//!
//! Every field below the top level is optional: the server assembles the
//! payload from independent agents and any of them may have produced
//! nothing. Decoding pushes all "what if this is missing" decisions to the
//! type level so renderers only ever see `Option`s and empty sequences.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// One completed (or partially completed) generation response.
///
/// Immutable once decoded; a new request replaces the whole value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportResult {
    #[serde(deserialize_with = "lenient")]
    pub ingestion: Option<IngestionSummary>,

    #[serde(alias = "quantitative_steps", deserialize_with = "lenient")]
    pub quantitative_steps: Vec<AnalysisStep>,

    #[serde(alias = "qualitative_steps", deserialize_with = "lenient")]
    pub qualitative_steps: Vec<ResearchStep>,

    #[serde(deserialize_with = "lenient")]
    pub synthesis: Option<Synthesis>,

    /// Domain-level failure. A populated `error` on HTTP 200 means the
    /// request logically failed even though transport succeeded.
    #[serde(deserialize_with = "lenient")]
    pub error: Option<String>,
}

impl ReportResult {
    /// The server's failure message, if the payload carries one.
    pub fn service_error(&self) -> Option<&str> {
        non_blank(self.error.as_deref())
    }
}

/// Summary of the server-side dataset load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IngestionSummary {
    #[serde(deserialize_with = "lenient")]
    pub status: Option<String>,

    #[serde(alias = "row_count", deserialize_with = "lenient")]
    pub row_count: u64,

    #[serde(deserialize_with = "lenient")]
    pub columns: Vec<String>,
}

impl IngestionSummary {
    pub fn status(&self) -> Option<&str> {
        non_blank(self.status.as_deref())
    }
}

/// One quantitative-agent execution: a query, the code it ran, and
/// optionally a chart and a textual insight.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisStep {
    #[serde(deserialize_with = "lenient")]
    pub section: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub query: String,

    #[serde(deserialize_with = "lenient")]
    pub code: Option<String>,

    /// Base64-encoded chart image, passed through unmodified.
    #[serde(deserialize_with = "lenient")]
    pub image: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub insight: Option<String>,
}

impl AnalysisStep {
    pub fn section(&self) -> Option<&str> {
        non_blank(self.section.as_deref())
    }

    pub fn code(&self) -> Option<&str> {
        non_blank(self.code.as_deref())
    }

    pub fn image(&self) -> Option<&str> {
        non_blank(self.image.as_deref())
    }

    pub fn insight(&self) -> Option<&str> {
        non_blank(self.insight.as_deref())
    }

    /// Standard inline-data image reference for the rendering layer.
    pub fn image_data_uri(&self) -> Option<String> {
        self.image()
            .map(|payload| format!("data:image/png;base64,{payload}"))
    }

    /// Decoded size of the image payload, for display purposes.
    pub fn image_byte_len(&self) -> Option<usize> {
        let payload = self.image()?;
        Some(
            BASE64
                .decode(payload.as_bytes())
                .map(|bytes| bytes.len())
                .unwrap_or(payload.len() * 3 / 4),
        )
    }
}

/// One qualitative-agent execution: a research question, the retrieved
/// supporting text, and optionally a textual insight.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResearchStep {
    #[serde(deserialize_with = "lenient")]
    pub section: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub query: String,

    #[serde(deserialize_with = "lenient")]
    pub context: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub insight: Option<String>,
}

impl ResearchStep {
    pub fn section(&self) -> Option<&str> {
        non_blank(self.section.as_deref())
    }

    pub fn context(&self) -> Option<&str> {
        non_blank(self.context.as_deref())
    }

    pub fn insight(&self) -> Option<&str> {
        non_blank(self.insight.as_deref())
    }
}

/// The synthesizer's final narrative in markdown form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Synthesis {
    #[serde(alias = "markdown_content", deserialize_with = "lenient")]
    pub markdown_content: Option<String>,
}

impl Synthesis {
    pub fn markdown_content(&self) -> Option<&str> {
        non_blank(self.markdown_content.as_deref())
    }
}

/// The server emits empty strings where an agent produced
/// nothing; fold those into "absent" so renderers see one notion of
/// missing data.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Deserialize a field, falling back to its default when the value has the
/// wrong shape. A mistyped subsection must degrade to "nothing to show",
/// never fail the whole payload.
fn lenient<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: DeserializeOwned + Default,
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}
