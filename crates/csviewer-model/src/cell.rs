use std::fmt;

/// One scalar cell of a parsed table.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    /// Classifies a raw CSV field.
    ///
    /// Blank fields are `Missing`, fields accepted by [`looks_numeric`] that
    /// fit a finite `f64` are `Number`, everything else is kept verbatim
    /// (trimmed) as `Text`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        if looks_numeric(trimmed)
            && let Ok(value) = trimmed.parse::<f64>()
            && value.is_finite()
        {
            return Self::Number(value);
        }
        Self::Text(trimmed.to_string())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(value) => write!(f, "{value}"),
            Self::Missing => Ok(()),
        }
    }
}

/// Locale-independent numeric check: optional sign, ASCII digits, at most one
/// decimal point, at least one digit. Exponents are not accepted.
pub fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);
    let mut seen_digit = false;
    let mut seen_point = false;
    for ch in digits.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}
