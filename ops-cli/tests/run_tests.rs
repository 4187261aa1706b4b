use std::collections::HashSet;

use chrono::NaiveDate;
use claimgen::{
    export_dataset, write_csv, DatasetOrchestrator, CLAIMS_FILE, ICD10_FILE, METADATA_FILE,
    NOTES_FILE, PATIENTS_FILE, PROVIDERS_FILE,
};
use config_engine::GenerationConfig;
use error_common::codes;

fn config(parallel: bool) -> GenerationConfig {
    GenerationConfig {
        seed: 7,
        patients: 30,
        providers: 6,
        claims_per_patient: 3,
        notes_per_claim: 1,
        reference_date: NaiveDate::from_ymd_opt(2024, 6, 30),
        parallel,
        ..GenerationConfig::default()
    }
}

#[test]
fn default_config_runs_end_to_end() {
    let defaults = GenerationConfig {
        reference_date: NaiveDate::from_ymd_opt(2024, 6, 30),
        ..GenerationConfig::default()
    };
    let (dataset, metadata) = DatasetOrchestrator::new(defaults).unwrap().run().unwrap();

    assert_eq!(metadata.seed, 42);
    assert_eq!(dataset.patients.len(), 1000);
    assert_eq!(dataset.providers.len(), 100);
    assert_eq!(dataset.claims.len(), 3000);
    assert_eq!(dataset.notes.len(), 3000);
    assert!(dataset.providers.iter().all(|p| p.zip_code.len() == 5));
    assert!(dataset.patients.iter().all(|p| p.zip_code.len() == 3));
}

#[test]
fn same_config_reproduces_dataset() {
    let (first, first_meta) = DatasetOrchestrator::new(config(false)).unwrap().run().unwrap();
    let (second, second_meta) = DatasetOrchestrator::new(config(false)).unwrap().run().unwrap();

    assert_eq!(first, second);
    assert_eq!(first_meta.record_counts, second_meta.record_counts);
    assert_eq!(first_meta.claim_summary, second_meta.claim_summary);
}

#[test]
fn parallel_run_is_reproducible_and_complete() {
    let (first, _) = DatasetOrchestrator::new(config(true)).unwrap().run().unwrap();
    let (second, metadata) = DatasetOrchestrator::new(config(true)).unwrap().run().unwrap();

    assert_eq!(first, second);
    assert!(metadata.parallel);
    assert_eq!(first.claims.len(), 90);

    let ids: HashSet<_> = first.claims.iter().map(|c| c.claim_id.as_str()).collect();
    assert_eq!(ids.len(), first.claims.len());

    let patient_ids: HashSet<_> = first.patients.iter().map(|p| p.patient_id.as_str()).collect();
    let provider_ids: HashSet<_> = first.providers.iter().map(|p| p.provider_id.as_str()).collect();
    for claim in &first.claims {
        assert!(patient_ids.contains(claim.patient_id.as_str()));
        assert!(provider_ids.contains(claim.provider_id.as_str()));
    }
}

#[test]
fn different_seeds_differ() {
    let (a, _) = DatasetOrchestrator::new(config(false)).unwrap().run().unwrap();
    let other = GenerationConfig {
        seed: 8,
        ..config(false)
    };
    let (b, _) = DatasetOrchestrator::new(other).unwrap().run().unwrap();
    assert_ne!(a.patients, b.patients);
}

#[test]
fn export_writes_every_file() {
    let dir = tempfile::tempdir().unwrap();
    let (dataset, metadata) = DatasetOrchestrator::new(config(false)).unwrap().run().unwrap();

    let written = export_dataset(dir.path(), &dataset, &metadata).unwrap();
    assert_eq!(written.len(), 7);
    for path in &written {
        assert!(path.is_file(), "missing {}", path.display());
    }
    assert!(!dir.path().join(format!("{}.tmp", CLAIMS_FILE)).exists());

    let mut claims = csv::Reader::from_path(dir.path().join(CLAIMS_FILE)).unwrap();
    let headers: Vec<String> = claims.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(
        headers,
        [
            "claim_id",
            "patient_id",
            "provider_id",
            "claim_date",
            "admission_date",
            "discharge_date",
            "claim_type",
            "total_charge",
            "total_paid",
            "claim_status",
            "denial_reason",
            "primary_diagnosis_code",
            "primary_procedure_code",
        ]
    );
    assert_eq!(claims.records().count(), dataset.claims.len());

    for (file, expected) in [
        (ICD10_FILE, dataset.diagnosis_codes.len()),
        (PATIENTS_FILE, dataset.patients.len()),
        (PROVIDERS_FILE, dataset.providers.len()),
        (NOTES_FILE, dataset.notes.len()),
    ] {
        let mut reader = csv::Reader::from_path(dir.path().join(file)).unwrap();
        assert_eq!(reader.records().count(), expected, "{}", file);
    }

    let raw = std::fs::read_to_string(dir.path().join(METADATA_FILE)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["seed"], 7);
    assert_eq!(json["reference_date"], "2024-06-30");
    assert_eq!(json["record_counts"]["claims"], 90);
    assert_eq!(json["claim_summary"]["total_claims"], 90);
    assert!(json["generated_at"].is_string());
}

#[test]
fn export_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("data").join("raw");
    let small = GenerationConfig {
        patients: 2,
        providers: 1,
        ..config(false)
    };
    let (dataset, metadata) = DatasetOrchestrator::new(small).unwrap().run().unwrap();

    export_dataset(&nested, &dataset, &metadata).unwrap();
    assert!(nested.join(PATIENTS_FILE).is_file());
}

#[test]
fn export_into_a_file_path_fails_with_export_code() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "x").unwrap();

    let small = GenerationConfig {
        patients: 1,
        providers: 1,
        ..config(false)
    };
    let (dataset, metadata) = DatasetOrchestrator::new(small).unwrap().run().unwrap();

    let err = export_dataset(&blocker, &dataset, &metadata).unwrap_err();
    assert_eq!(err.code(), codes::export::WRITE_FAILED);
}

#[test]
fn failed_rename_leaves_no_temporary_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join(CLAIMS_FILE);
    std::fs::create_dir(&target).unwrap();
    std::fs::write(target.join("occupied"), "x").unwrap();

    let small = GenerationConfig {
        patients: 2,
        providers: 1,
        ..config(false)
    };
    let (dataset, metadata) = DatasetOrchestrator::new(small).unwrap().run().unwrap();

    let err = write_csv(&target, &dataset.claims).unwrap_err();
    assert_eq!(err.code(), codes::export::WRITE_FAILED);
    assert!(!dir.path().join(format!("{}.tmp", CLAIMS_FILE)).exists());

    let metadata_target = dir.path().join(METADATA_FILE);
    std::fs::create_dir(&metadata_target).unwrap();
    std::fs::write(metadata_target.join("occupied"), "x").unwrap();
    std::fs::remove_dir_all(&target).unwrap();

    let err = export_dataset(dir.path(), &dataset, &metadata).unwrap_err();
    assert_eq!(err.code(), codes::export::WRITE_FAILED);
    assert!(!dir.path().join(format!("{}.tmp", METADATA_FILE)).exists());
    assert!(dir.path().join(CLAIMS_FILE).is_file());
}

#[test]
fn zero_patients_rejected() {
    let err = DatasetOrchestrator::new(GenerationConfig {
        patients: 0,
        ..config(false)
    })
    .err()
    .unwrap();
    assert_eq!(err.code(), codes::configuration::DEGENERATE_PARAMETER);
}
