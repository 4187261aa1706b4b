use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Patient gender as recorded on claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
    #[serde(rename = "U")]
    Unknown,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "O",
            Gender::Unknown => "U",
        }
    }
}

/// De-identified patient demographics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    /// First three ZIP digits only
    pub zip_code: String,
    pub state: String,
}

/// Provider type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderType {
    Physician,
    Hospital,
    Clinic,
    Emergency,
    Ambulatory,
    Laboratory,
    Imaging,
}

impl ProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Physician => "PHYSICIAN",
            ProviderType::Hospital => "HOSPITAL",
            ProviderType::Clinic => "CLINIC",
            ProviderType::Emergency => "EMERGENCY",
            ProviderType::Ambulatory => "AMBULATORY",
            ProviderType::Laboratory => "LABORATORY",
            ProviderType::Imaging => "IMAGING",
        }
    }

    /// Only individual practitioners and clinics carry a specialty
    pub fn has_specialty(&self) -> bool {
        matches!(self, ProviderType::Physician | ProviderType::Clinic)
    }
}

/// Healthcare provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub provider_id: String,
    /// NPI-like 10-digit identifier
    pub npi: String,
    pub provider_name: String,
    pub provider_type: ProviderType,
    pub specialty: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// ICD-10 diagnosis code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisCode {
    pub code: String,
    pub description: String,
    pub category: String,
    pub is_valid: bool,
}

/// CPT procedure code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureCode {
    pub code: String,
    pub description: String,
    pub category: String,
    pub is_valid: bool,
}

/// Claim type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimType {
    Inpatient,
    Outpatient,
    Emergency,
    Ambulatory,
    Physician,
}

impl ClaimType {
    pub const ALL: [ClaimType; 5] = [
        ClaimType::Inpatient,
        ClaimType::Outpatient,
        ClaimType::Emergency,
        ClaimType::Ambulatory,
        ClaimType::Physician,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Inpatient => "INPATIENT",
            ClaimType::Outpatient => "OUTPATIENT",
            ClaimType::Emergency => "EMERGENCY",
            ClaimType::Ambulatory => "AMBULATORY",
            ClaimType::Physician => "PHYSICIAN",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Adjudication outcome of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    Approved,
    Denied,
    Pending,
    Partial,
    Rejected,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 5] = [
        ClaimStatus::Approved,
        ClaimStatus::Denied,
        ClaimStatus::Pending,
        ClaimStatus::Partial,
        ClaimStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Approved => "APPROVED",
            ClaimStatus::Denied => "DENIED",
            ClaimStatus::Pending => "PENDING",
            ClaimStatus::Partial => "PARTIAL",
            ClaimStatus::Rejected => "REJECTED",
        }
    }

    /// Statuses that never carry a payment
    pub fn is_unpaid(&self) -> bool {
        matches!(
            self,
            ClaimStatus::Denied | ClaimStatus::Pending | ClaimStatus::Rejected
        )
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a claim was denied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DenialReason {
    InsufficientInfo,
    NotMedicallyNecessary,
    DuplicateClaim,
    AuthorizationRequired,
    PreAuthRequired,
    TimelyFiling,
}

impl DenialReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenialReason::InsufficientInfo => "INSUFFICIENT_INFO",
            DenialReason::NotMedicallyNecessary => "NOT_MEDICALLY_NECESSARY",
            DenialReason::DuplicateClaim => "DUPLICATE_CLAIM",
            DenialReason::AuthorizationRequired => "AUTHORIZATION_REQUIRED",
            DenialReason::PreAuthRequired => "PRE_AUTH_REQUIRED",
            DenialReason::TimelyFiling => "TIMELY_FILING",
        }
    }

    /// Payer-facing explanation printed on notes for denied claims
    pub fn explanation(&self) -> &'static str {
        match self {
            DenialReason::InsufficientInfo => {
                "Claim denied due to missing or incomplete documentation required for processing."
            }
            DenialReason::NotMedicallyNecessary => {
                "Services were determined not to be medically necessary based on clinical guidelines."
            }
            DenialReason::DuplicateClaim => {
                "Claim denied as duplicate of previously submitted claim."
            }
            DenialReason::AuthorizationRequired => {
                "Prior authorization was required but not obtained before service delivery."
            }
            DenialReason::PreAuthRequired => "Pre-authorization was required but not obtained.",
            DenialReason::TimelyFiling => "Claim submitted outside of timely filing window.",
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Healthcare claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_id: String,
    pub patient_id: String,
    pub provider_id: String,
    /// Date of service
    pub claim_date: NaiveDate,
    pub admission_date: Option<NaiveDate>,
    pub discharge_date: Option<NaiveDate>,
    pub claim_type: ClaimType,
    pub total_charge: Decimal,
    pub total_paid: Decimal,
    pub claim_status: ClaimStatus,
    pub denial_reason: Option<DenialReason>,
    pub primary_diagnosis_code: String,
    pub primary_procedure_code: Option<String>,
}

impl Claim {
    pub fn is_denied(&self) -> bool {
        self.claim_status == ClaimStatus::Denied
    }
}

/// Clinical note type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoteType {
    Admission,
    Discharge,
    Progress,
    Procedure,
    /// Denial explanation notice
    Diagnosis,
}

impl NoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteType::Admission => "ADMISSION",
            NoteType::Discharge => "DISCHARGE",
            NoteType::Progress => "PROGRESS",
            NoteType::Procedure => "PROCEDURE",
            NoteType::Diagnosis => "DIAGNOSIS",
        }
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clinical note attached to a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub note_id: String,
    pub claim_id: String,
    pub note_type: NoteType,
    pub note_text: String,
}
