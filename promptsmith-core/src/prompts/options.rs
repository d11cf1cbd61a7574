use serde::{Deserialize, Serialize};

/// Caller-supplied style options. Every field is optional; a field that is
/// empty or only whitespace is treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Target word count, kept as the caller's raw text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
}

impl GenerationOptions {
    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length = Some(length.into());
        self
    }

    pub fn tone(&self) -> Option<&str> {
        non_blank(&self.tone)
    }

    pub fn audience(&self) -> Option<&str> {
        non_blank(&self.audience)
    }

    pub fn format(&self) -> Option<&str> {
        non_blank(&self.format)
    }

    pub fn length(&self) -> Option<&str> {
        non_blank(&self.length)
    }

    /// Word target as a number, if `length` starts with an integer
    pub fn length_target(&self) -> Option<i64> {
        self.length().and_then(parse_leading_integer)
    }

    /// Fill every unset field from `defaults`, keeping fields already set.
    pub fn merged_with(self, defaults: &GenerationOptions) -> Self {
        Self {
            tone: pick(self.tone, &defaults.tone),
            audience: pick(self.audience, &defaults.audience),
            format: pick(self.format, &defaults.format),
            length: pick(self.length, &defaults.length),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn pick(value: Option<String>, fallback: &Option<String>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => fallback.clone(),
    }
}

/// Parse the integer at the start of `text`, ignoring leading whitespace and
/// anything after the digits ("500 words" -> 500). Returns `None` when the
/// text does not start with an optionally signed run of digits. Values
/// outside the `i64` range saturate.
pub fn parse_leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let digits: Vec<i64> = rest
        .chars()
        .map_while(|c| c.to_digit(10))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits.into_iter().fold(0i64, |acc, digit| {
        let shifted = acc.saturating_mul(10);
        if negative {
            shifted.saturating_sub(digit)
        } else {
            shifted.saturating_add(digit)
        }
    });
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_count_as_unset() {
        let options = GenerationOptions::default()
            .with_tone("   ")
            .with_audience("")
            .with_format(" report ");
        assert_eq!(options.tone(), None);
        assert_eq!(options.audience(), None);
        assert_eq!(options.format(), Some("report"));
    }

    #[test]
    fn parses_leading_integers_like_a_form_field() {
        assert_eq!(parse_leading_integer("500"), Some(500));
        assert_eq!(parse_leading_integer("  750 words"), Some(750));
        assert_eq!(parse_leading_integer("-20"), Some(-20));
        assert_eq!(parse_leading_integer("+15"), Some(15));
        assert_eq!(parse_leading_integer("about 500"), None);
        assert_eq!(parse_leading_integer("abc"), None);
        assert_eq!(parse_leading_integer("-"), None);
    }

    #[test]
    fn oversized_integers_saturate() {
        assert_eq!(
            parse_leading_integer("99999999999999999999"),
            Some(i64::MAX)
        );
        assert_eq!(
            parse_leading_integer("-99999999999999999999 words"),
            Some(i64::MIN)
        );
        assert_eq!(
            parse_leading_integer("9223372036854775807"),
            Some(i64::MAX)
        );
        assert_eq!(
            parse_leading_integer("-9223372036854775808"),
            Some(i64::MIN)
        );
    }

    #[test]
    fn merge_keeps_caller_values() {
        let defaults = GenerationOptions::default()
            .with_tone("casual")
            .with_length("300");
        let merged = GenerationOptions::default()
            .with_tone("technical")
            .with_format("")
            .merged_with(&defaults);

        assert_eq!(merged.tone(), Some("technical"));
        assert_eq!(merged.length(), Some("300"));
        assert_eq!(merged.format(), None);
    }
}
