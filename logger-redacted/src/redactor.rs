use regex::Regex;
use lazy_static::lazy_static;
use sha2::{Sha256, Digest};
use base64::{Engine as _, engine::general_purpose};

lazy_static! {
    // 10-digit provider identifiers; first digit 1 (individual) or 2 (organization)
    static ref NPI_REGEX: Regex = Regex::new(r"\b[12]\d{9}\b").unwrap();
    // Full postal codes only when labelled; bare 5-digit runs are usually CPT codes
    static ref ZIP_REGEX: Regex = Regex::new(r"(?i)\b(zip(?:_code)?\s*[=:]\s*)(\d{5}(?:-\d{4})?)\b").unwrap();
}

/// Identifier redaction configuration
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub redact_npi: bool,
    pub redact_zip: bool,
    pub hash_for_correlation: bool,
    pub custom_patterns: Vec<(Regex, String)>,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redact_npi: true,
            redact_zip: true,
            hash_for_correlation: true,
            custom_patterns: Vec::new(),
        }
    }
}

impl RedactionConfig {
    /// Configuration that leaves every message untouched
    pub fn disabled() -> Self {
        Self {
            redact_npi: false,
            redact_zip: false,
            hash_for_correlation: false,
            custom_patterns: Vec::new(),
        }
    }
}

/// Identifier redactor for log messages
pub struct PiiRedactor {
    config: RedactionConfig,
}

impl PiiRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.config.redact_npi {
            result = self.redact_npi(&result);
        }

        if self.config.redact_zip {
            result = self.redact_zip(&result);
        }

        for (pattern, replacement) in &self.config.custom_patterns {
            result = pattern.replace_all(&result, replacement).to_string();
        }

        result
    }

    fn redact_npi(&self, text: &str) -> String {
        NPI_REGEX.replace_all(text, |caps: &regex::Captures| {
            if self.config.hash_for_correlation {
                format!("NPI[{}]", self.hash_value(&caps[0]))
            } else {
                "**********".to_string()
            }
        }).to_string()
    }

    fn redact_zip(&self, text: &str) -> String {
        ZIP_REGEX.replace_all(text, |caps: &regex::Captures| {
            let label = &caps[1];
            let zip = &caps[2];
            if self.config.hash_for_correlation {
                format!("{}ZIP[{}]", label, self.hash_value(zip))
            } else {
                // keep the 3-digit prefix, which is already de-identified
                format!("{}{}**", label, &zip[..3])
            }
        }).to_string()
    }

    fn hash_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        general_purpose::STANDARD.encode(&result[..8]) // Use first 8 bytes for shorter hash
    }
}
