//! Strategic motivation and ad copy generation.
//!
//! Generation sits behind [`ContentGenerator`] so a model-backed
//! implementation can replace [`TemplatedGenerator`], which fills fixed
//! `{placeholder}` templates and never leaves the process.

use std::collections::HashMap;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length for a client brief in characters.
pub const MAX_BRIEF_LENGTH: usize = 5_000;

/// Maximum length for a tone label.
pub const MAX_TONE_LENGTH: usize = 50;

/// Bounds on the number of copy variations generated per request.
pub const MIN_COPY_COUNT: u32 = 1;
pub const MAX_COPY_COUNT: u32 = 10;
pub const DEFAULT_COPY_COUNT: u32 = 3;

/// Default tone when a request omits one.
pub const DEFAULT_TONE: &str = "Professional";

/// Tones offered to users, with the phrasing used in generated copy.
pub const TONES: &[(&str, &str)] = &[
    ("Professional", "formal and business-like"),
    ("Friendly", "warm and approachable"),
    ("Enthusiastic", "excited and energetic"),
    ("Authoritative", "confident and commanding"),
    ("Humorous", "light-hearted and funny"),
];

/// Phrasing for any tone not listed in [`TONES`].
pub const FALLBACK_TONE_DESCRIPTION: &str = "conversational";

/// Call to action appended when requested.
pub const CALL_TO_ACTION: &str = " Call now to learn more about our exclusive offers!";

/// Copy body template.
pub const COPY_TEMPLATE: &str = "{motivation} with a {tone} tone. This copy is {length}.";

/// The standard strategic angles produced for every brief.
pub const STANDARD_MOTIVATIONS: &[&str] = &[
    "Empower customers to achieve their goals with our innovative solutions",
    "Simplify complex processes to save time and reduce stress",
    "Build trust through transparency and consistent quality",
    "Create memorable experiences that customers want to share",
    "Demonstrate expertise while remaining accessible and approachable",
    "Highlight the unique value proposition that sets us apart from competitors",
];

/// Compiled regex for `{placeholder}` tokens.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").expect("valid regex"));

// ---------------------------------------------------------------------------
// Copy length
// ---------------------------------------------------------------------------

/// Target length bucket for a copy variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyLength {
    Short,
    Medium,
    Long,
}

impl CopyLength {
    pub const ALL: [CopyLength; 3] = [CopyLength::Short, CopyLength::Medium, CopyLength::Long];

    pub fn as_str(self) -> &'static str {
        match self {
            CopyLength::Short => "short",
            CopyLength::Medium => "medium",
            CopyLength::Long => "long",
        }
    }

    /// Phrasing used inside generated copy.
    pub fn description(self) -> &'static str {
        match self {
            CopyLength::Short => "brief and concise",
            CopyLength::Medium => "balanced and informative",
            CopyLength::Long => "detailed and comprehensive",
        }
    }
}

impl std::str::FromStr for CopyLength {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(CopyLength::Short),
            "medium" => Ok(CopyLength::Medium),
            "long" => Ok(CopyLength::Long),
            other => Err(CoreError::Validation(format!(
                "Invalid copy length '{other}'. Must be one of: short, medium, long"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Requests and validation
// ---------------------------------------------------------------------------

/// Input for a copy generation run.
#[derive(Debug, Clone)]
pub struct CopyRequest {
    /// Text of the motivation the copy is derived from.
    pub motivation: String,
    pub tone: String,
    pub length: CopyLength,
    pub count: u32,
    pub include_cta: bool,
}

pub fn validate_brief(brief: &str) -> Result<(), CoreError> {
    let brief = brief.trim();
    if brief.is_empty() {
        return Err(CoreError::Validation("Please enter a client brief".to_string()));
    }
    if brief.chars().count() > MAX_BRIEF_LENGTH {
        return Err(CoreError::Validation(format!(
            "Client brief exceeds maximum length of {MAX_BRIEF_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_tone(tone: &str) -> Result<(), CoreError> {
    let tone = tone.trim();
    if tone.is_empty() {
        return Err(CoreError::Validation("Tone must not be empty".to_string()));
    }
    if tone.chars().count() > MAX_TONE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Tone exceeds maximum length of {MAX_TONE_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_copy_count(count: u32) -> Result<(), CoreError> {
    if (MIN_COPY_COUNT..=MAX_COPY_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Number of variations must be between {MIN_COPY_COUNT} and {MAX_COPY_COUNT} (got {count})"
        )))
    }
}

/// Phrasing for a tone, falling back to [`FALLBACK_TONE_DESCRIPTION`].
pub fn tone_description(tone: &str) -> &'static str {
    TONES
        .iter()
        .find(|(name, _)| *name == tone)
        .map_or(FALLBACK_TONE_DESCRIPTION, |(_, desc)| desc)
}

// ---------------------------------------------------------------------------
// Template rendering
// ---------------------------------------------------------------------------

/// Replace `{name}` placeholders in `template` with values from `vars`.
///
/// Placeholders without a value are left as-is. Substituted values are not
/// re-scanned, so braces inside user text survive untouched.
pub fn render_template(template: &str, vars: &HashMap<&str, &str>) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| match vars.get(&caps[1]) {
            Some(value) => (*value).to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Render one copy body for the given motivation text and settings.
pub fn render_copy(motivation: &str, tone: &str, length: CopyLength, include_cta: bool) -> String {
    let vars = HashMap::from([
        ("motivation", motivation),
        ("tone", tone_description(tone)),
        ("length", length.description()),
    ]);
    let mut copy = render_template(COPY_TEMPLATE, &vars);
    if include_cta {
        copy.push_str(CALL_TO_ACTION);
    }
    copy
}

// ---------------------------------------------------------------------------
// Generator seam
// ---------------------------------------------------------------------------

/// Produces marketing text. Implementations must be cheap to share across
/// request handlers.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Strategic angles for a client brief.
    async fn strategic_motivations(&self, brief: &str) -> Result<Vec<String>, CoreError>;

    /// `request.count` copy bodies derived from one motivation.
    async fn copy_variations(&self, request: &CopyRequest) -> Result<Vec<String>, CoreError>;
}

/// Template-driven generator with deterministic output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplatedGenerator;

#[async_trait]
impl ContentGenerator for TemplatedGenerator {
    async fn strategic_motivations(&self, brief: &str) -> Result<Vec<String>, CoreError> {
        validate_brief(brief)?;
        Ok(STANDARD_MOTIVATIONS.iter().map(|m| m.to_string()).collect())
    }

    async fn copy_variations(&self, request: &CopyRequest) -> Result<Vec<String>, CoreError> {
        validate_copy_count(request.count)?;
        validate_tone(&request.tone)?;
        let body = render_copy(
            &request.motivation,
            &request.tone,
            request.length,
            request.include_cta,
        );
        Ok(vec![body; request.count as usize])
    }
}
