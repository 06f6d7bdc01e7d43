use base64::{engine::general_purpose, Engine as _};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use sha2::{Digest, Sha256};

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    static ref SSN_REGEX: Regex = Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").unwrap();
    static ref CARD_REGEX: Regex = Regex::new(r"\b\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b").unwrap();
    static ref PHONE_REGEX: Regex = Regex::new(r"(?:\+1[-.\s]?)?(?:\(\d{3}\)\s?|\b\d{3}[-.\s])\d{3}[-.\s]\d{4}\b").unwrap();
    static ref IP_REGEX: Regex = Regex::new(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b").unwrap();
}

/// Replacement for literal values (patient names and the like)
pub const REDACTED_MARKER: &str = "[REDACTED]";

/// Kinds of identifier the redactor recognises in free text.
///
/// Order matters: [`PiiKind::ALL`] applies SSNs and card numbers before
/// phone numbers, whose pattern overlaps both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PiiKind {
    Email,
    Ssn,
    CardNumber,
    Phone,
    IpAddress,
}

impl PiiKind {
    pub const ALL: [PiiKind; 5] = [
        PiiKind::Email,
        PiiKind::Ssn,
        PiiKind::CardNumber,
        PiiKind::Phone,
        PiiKind::IpAddress,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            PiiKind::Email => &EMAIL_REGEX,
            PiiKind::Ssn => &SSN_REGEX,
            PiiKind::CardNumber => &CARD_REGEX,
            PiiKind::Phone => &PHONE_REGEX,
            PiiKind::IpAddress => &IP_REGEX,
        }
    }

    /// Prefix of the correlation tag, e.g. `EMAIL[abc=]`
    fn tag(self) -> &'static str {
        match self {
            PiiKind::Email => "EMAIL",
            PiiKind::Ssn => "SSN",
            PiiKind::CardNumber => "CC",
            PiiKind::Phone => "PHONE",
            PiiKind::IpAddress => "IP",
        }
    }

    /// Shape-preserving mask used when correlation hashing is off
    fn mask(self, matched: &str) -> String {
        match self {
            PiiKind::Email => match matched.split_once('@') {
                Some((local, domain)) => format!(
                    "{}***@{}***",
                    local.chars().next().unwrap_or('*'),
                    domain.chars().next().unwrap_or('*')
                ),
                None => "***@***".to_string(),
            },
            PiiKind::Ssn => "***-**-****".to_string(),
            PiiKind::CardNumber => "****-****-****-****".to_string(),
            PiiKind::Phone => "(***) ***-****".to_string(),
            PiiKind::IpAddress => {
                let octets: Vec<&str> = matched.split('.').collect();
                match (octets.first(), octets.last()) {
                    (Some(first), Some(last)) if octets.len() == 4 => format!("{}.***.***.{}", first, last),
                    _ => "***.***.***.***".to_string(),
                }
            }
        }
    }
}

/// Which identifiers to scrub and how to replace them
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub kinds: Vec<PiiKind>,
    /// Replace matches with a short SHA-256 tag instead of a mask, so the same
    /// value can be followed across log lines without being revealed
    pub hash_for_correlation: bool,
    pub custom_patterns: Vec<(Regex, String)>,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            kinds: PiiKind::ALL.to_vec(),
            hash_for_correlation: true,
            custom_patterns: Vec::new(),
        }
    }
}

impl RedactionConfig {
    /// Pass-through configuration (local debugging only)
    pub fn disabled() -> Self {
        Self {
            kinds: Vec::new(),
            hash_for_correlation: false,
            custom_patterns: Vec::new(),
        }
    }

    pub fn masking() -> Self {
        Self {
            hash_for_correlation: false,
            ..Self::default()
        }
    }

    /// Add a site-specific pattern, e.g. a payer's member id format
    pub fn with_custom_pattern(mut self, pattern: &str, replacement: &str) -> Result<Self, regex::Error> {
        self.custom_patterns.push((Regex::new(pattern)?, replacement.to_string()));
        Ok(self)
    }

    pub fn is_enabled(&self) -> bool {
        !self.kinds.is_empty() || !self.custom_patterns.is_empty()
    }
}

/// Scrubs identifiers out of free-text log messages
#[derive(Debug, Clone)]
pub struct PiiRedactor {
    config: RedactionConfig,
}

impl Default for PiiRedactor {
    fn default() -> Self {
        Self::new(RedactionConfig::default())
    }
}

impl PiiRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RedactionConfig {
        &self.config
    }

    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();

        for kind in PiiKind::ALL.into_iter().filter(|kind| self.config.kinds.contains(kind)) {
            result = kind
                .pattern()
                .replace_all(&result, |caps: &Captures| self.replacement(kind, &caps[0]))
                .into_owned();
        }

        for (pattern, replacement) in &self.config.custom_patterns {
            result = pattern.replace_all(&result, replacement.as_str()).into_owned();
        }

        result
    }

    /// Replace known sensitive literals (a patient display name, say), then
    /// apply pattern redaction.
    ///
    /// Literals are replaced even when every pattern kind is disabled.
    pub fn redact_values(&self, text: &str, values: &[&str]) -> String {
        let mut result = text.to_string();

        for value in values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
            let replacement = if self.config.hash_for_correlation {
                format!("VALUE[{}]", correlation_hash(value))
            } else {
                REDACTED_MARKER.to_string()
            };
            result = result.replace(value, &replacement);
        }

        self.redact(&result)
    }

    fn replacement(&self, kind: PiiKind, matched: &str) -> String {
        if self.config.hash_for_correlation {
            format!("{}[{}]", kind.tag(), correlation_hash(matched))
        } else {
            kind.mask(matched)
        }
    }
}

/// First 8 bytes of the SHA-256 digest, base64 encoded
fn correlation_hash(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    general_purpose::STANDARD.encode(digest.get(..8).unwrap_or_default())
}
