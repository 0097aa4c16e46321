use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Default palette for light backgrounds.
pub const DEFAULT_COLOR_SCHEME_LIGHT: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
];

/// Default palette for dark backgrounds.
pub const DEFAULT_COLOR_SCHEME_DARK: &[&str] = &[
    "#8ab4f8", "#fdd663", "#f28b82", "#78d9ec", "#81c995", "#ffa9b8", "#c58af9", "#fcad70",
];

/// Ordered sequence of SVG color tokens.
///
/// Schemes are never empty; lookups past the end clamp to the last token, so
/// datasets longer than the scheme reuse its final color instead of reading
/// out of range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ColorScheme {
    tokens: Vec<String>,
}

impl TryFrom<Vec<String>> for ColorScheme {
    type Error = ChartError;

    fn try_from(tokens: Vec<String>) -> ChartResult<Self> {
        Self::new(tokens)
    }
}

impl From<ColorScheme> for Vec<String> {
    fn from(scheme: ColorScheme) -> Self {
        scheme.tokens
    }
}

impl ColorScheme {
    pub fn new(tokens: Vec<String>) -> ChartResult<Self> {
        if tokens.is_empty() {
            return Err(ChartError::InvalidData(
                "color scheme must contain at least one token".to_owned(),
            ));
        }
        if tokens.iter().any(String::is_empty) {
            return Err(ChartError::InvalidData(
                "color scheme tokens must not be empty".to_owned(),
            ));
        }
        Ok(Self { tokens })
    }

    #[must_use]
    pub fn light() -> Self {
        Self::from_tokens(DEFAULT_COLOR_SCHEME_LIGHT)
    }

    #[must_use]
    pub fn dark() -> Self {
        Self::from_tokens(DEFAULT_COLOR_SCHEME_DARK)
    }

    fn from_tokens(tokens: &[&str]) -> Self {
        Self {
            tokens: tokens.iter().map(|token| (*token).to_owned()).collect(),
        }
    }

    /// Token at `index`, clamped to the last token when out of range.
    #[must_use]
    pub fn pick(&self, index: usize) -> &str {
        &self.tokens[index.min(self.tokens.len() - 1)]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        // A constructed scheme always has at least one token.
        false
    }
}
