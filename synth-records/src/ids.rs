//! Sequential record identifiers (`PAT100000`, `CLM1000000`, ...)

pub const PATIENT_PREFIX: &str = "PAT";
pub const PROVIDER_PREFIX: &str = "PROV";
pub const CLAIM_PREFIX: &str = "CLM";
pub const NOTE_PREFIX: &str = "NOTE";

pub const PATIENT_ID_BASE: u64 = 100_000;
pub const PROVIDER_ID_BASE: u64 = 10_000;
pub const CLAIM_ID_BASE: u64 = 1_000_000;
pub const NOTE_ID_BASE: u64 = 100_000;

/// Monotonic identifier counter; unique within one sequence
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: &'static str,
    next: u64,
}

impl IdSequence {
    pub fn new(prefix: &'static str, base: u64) -> Self {
        Self { prefix, next: base }
    }

    pub fn patients() -> Self {
        Self::new(PATIENT_PREFIX, PATIENT_ID_BASE)
    }

    pub fn providers() -> Self {
        Self::new(PROVIDER_PREFIX, PROVIDER_ID_BASE)
    }

    pub fn claims() -> Self {
        Self::new(CLAIM_PREFIX, CLAIM_ID_BASE)
    }

    pub fn notes() -> Self {
        Self::new(NOTE_PREFIX, NOTE_ID_BASE)
    }

    /// Identifier for an explicit counter value
    pub fn format(&self, value: u64) -> String {
        format!("{}{}", self.prefix, value)
    }

    pub fn next_id(&mut self) -> String {
        let id = self.format(self.next);
        self.next += 1;
        id
    }

    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Claim a block of `count` values and return the first
    pub fn reserve(&mut self, count: u64) -> u64 {
        let first = self.next;
        self.next += count;
        first
    }
}

/// `true` when `id` is `prefix` followed by one or more ASCII digits
pub fn has_numeric_suffix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}
