use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::path::Path;
use tempfile::tempdir;

mod common;

const MIB: u64 = 1024 * 1024;

fn with(field: &str, value: Value) -> Value {
    let mut submission = common::valid_submission();
    submission[field] = value;
    submission
}

fn issue(dir: &Path, submission: &Value, extra: &[&str]) -> assert_cmd::assert::Assert {
    let input = common::write_submission(dir, "submission.json", submission);
    common::paylite()
        .arg("issue")
        .arg(&input)
        .arg("--ephemeral")
        .args(extra)
        .assert()
}

#[test]
fn test_amount_floor() {
    let dir = tempdir().unwrap();

    issue(dir.path(), &with("amount", json!(1000)), &[])
        .success()
        .stdout(predicate::str::contains("Nominal: Rp\u{a0}1.000\n"));

    issue(dir.path(), &with("amount", json!(999)), &[])
        .failure()
        .stderr(predicate::str::contains("amount: Nominal minimal Rp 1.000"));
}

#[test]
fn test_fractional_amount() {
    let dir = tempdir().unwrap();

    issue(dir.path(), &with("amount", json!(1500.5)), &[])
        .failure()
        .stderr(predicate::str::contains("amount: Nominal harus berupa angka bulat"));
}

#[test]
fn test_payer_name_length() {
    let dir = tempdir().unwrap();

    issue(dir.path(), &with("payerName", json!("Bo")), &[]).success();

    issue(dir.path(), &with("payerName", json!("B")), &[])
        .failure()
        .stderr(predicate::str::contains("payerName: Nama harus minimal 2 karakter"));

    issue(dir.path(), &with("payerName", json!("B1")), &[])
        .failure()
        .stderr(predicate::str::contains("payerName: Nama harus mengandung minimal 2 huruf"));
}

#[test]
fn test_proof_ceiling() {
    let dir = tempdir().unwrap();
    let proof = |size: u64| {
        with(
            "proofFileRef",
            json!({ "name": "bukti.png", "contentType": "image/png", "sizeBytes": size }),
        )
    };

    issue(dir.path(), &proof(2 * MIB), &[]).success();

    issue(dir.path(), &proof(2 * MIB + 1), &[])
        .failure()
        .stderr(predicate::str::contains("proofFileRef: File maksimal 2MB"));

    issue(
        dir.path(),
        &proof(2 * MIB + 1),
        &["--proof-ceiling", "pre-compression"],
    )
    .success();

    issue(
        dir.path(),
        &proof(5 * MIB + 1),
        &["--proof-ceiling", "pre-compression"],
    )
    .failure()
    .stderr(predicate::str::contains("proofFileRef: File maksimal 5MB"));
}

#[test]
fn test_proof_kind_and_emptiness() {
    let dir = tempdir().unwrap();

    issue(
        dir.path(),
        &with(
            "proofFileRef",
            json!({ "name": "bukti.pdf", "contentType": "application/pdf", "sizeBytes": 1024 }),
        ),
        &[],
    )
    .failure()
    .stderr(predicate::str::contains("proofFileRef:"));

    issue(
        dir.path(),
        &with(
            "proofFileRef",
            json!({ "name": "bukti.jpg", "contentType": "image/jpeg", "sizeBytes": 0 }),
        ),
        &[],
    )
    .failure()
    .stderr(predicate::str::contains("proofFileRef:"));
}

#[test]
fn test_reference_is_rendered() {
    let dir = tempdir().unwrap();

    issue(dir.path(), &with("reference", json!("TRX-778899")), &[])
        .success()
        .stdout(predicate::str::contains("Referensi/Catatan: TRX-778899\n"));
}
