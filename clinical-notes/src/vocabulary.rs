/// Clinical phrases used to fill note templates
///
/// Symptom and treatment phrases are keyed by ICD-10 code so a note reads
/// like the diagnosis on its claim. Codes without an entry fall back to a
/// single generic phrase.
pub struct ClinicalVocabulary;

/// Symptom phrase for diagnoses without their own vocabulary
pub const GENERIC_SYMPTOMS: &[&str] = &["generalized symptoms"];

/// Treatment phrase for diagnoses without their own vocabulary
pub const GENERIC_TREATMENTS: &[&str] = &["symptomatic treatment"];

pub const ASSESSMENTS: &[&str] = &[
    "stable condition",
    "improving",
    "deteriorating",
    "critical",
    "guarded",
    "fair",
    "good",
    "poor",
    "acute",
    "chronic",
    "subacute",
];

impl ClinicalVocabulary {
    pub fn symptoms(diagnosis_code: &str) -> &'static [&'static str] {
        match diagnosis_code {
            "E11.9" => &["elevated blood glucose", "increased thirst", "frequent urination", "fatigue"],
            "E10.9" => &["elevated blood glucose", "weight loss", "increased thirst"],
            "I10" => &["elevated blood pressure", "headache", "dizziness"],
            "M54.5" => &["lower back pain", "radiating pain", "stiffness"],
            "M25.561" => &["right knee pain", "swelling", "limited range of motion"],
            "J44.1" => &["shortness of breath", "chronic cough", "wheezing", "chest tightness"],
            "J18.9" => &["fever", "cough", "shortness of breath", "chest pain"],
            "F41.9" => &["anxiety", "restlessness", "difficulty concentrating", "sleep disturbances"],
            "F32.9" => &["depressed mood", "loss of interest", "fatigue", "sleep disturbances"],
            _ => GENERIC_SYMPTOMS,
        }
    }

    pub fn treatments(diagnosis_code: &str) -> &'static [&'static str] {
        match diagnosis_code {
            "E11.9" => &["blood glucose monitoring", "diabetes medication", "dietary counseling"],
            "E10.9" => &["insulin therapy", "blood glucose monitoring", "diabetes education"],
            "I10" => &["antihypertensive medication", "blood pressure monitoring", "lifestyle counseling"],
            "M54.5" => &["pain management", "physical therapy", "imaging studies"],
            "M25.561" => &["pain medication", "knee imaging", "orthopedic consultation"],
            "J44.1" => &["bronchodilator therapy", "oxygen therapy", "pulmonary function tests"],
            "J18.9" => &["antibiotic therapy", "chest imaging", "supportive care"],
            "F41.9" => &["anxiety medication", "counseling", "psychiatric evaluation"],
            "F32.9" => &["antidepressant medication", "psychotherapy", "psychiatric evaluation"],
            _ => GENERIC_TREATMENTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_diagnosis_has_own_phrases() {
        assert!(ClinicalVocabulary::symptoms("J44.1").contains(&"wheezing"));
        assert!(ClinicalVocabulary::treatments("E10.9").contains(&"insulin therapy"));
    }

    #[test]
    fn test_unmapped_diagnosis_falls_back() {
        assert_eq!(ClinicalVocabulary::symptoms("N18.6"), GENERIC_SYMPTOMS);
        assert_eq!(ClinicalVocabulary::treatments("N18.6"), GENERIC_TREATMENTS);
    }
}
