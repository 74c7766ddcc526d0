#![allow(dead_code)]

use assert_cmd::cargo_bin;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const SECRET: &str = "paylite-secret-key-2024";
pub const MERCHANT_PHONE: &str = "6285883795285";

pub fn valid_submission() -> Value {
    json!({
        "payerName": "Budi Santoso",
        "amount": 50000,
        "paymentDate": "2024-06-01",
        "paymentMethod": "QRIS",
        "description": "Bayar makan siang",
        "proofFileRef": {
            "name": "bukti-qris.jpg",
            "contentType": "image/jpeg",
            "sizeBytes": 348211
        }
    })
}

pub fn write_submission(dir: &Path, name: &str, submission: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_vec_pretty(submission).unwrap()).unwrap();
    path
}

/// `paylite` with the secret and merchant number configured through the
/// environment, and no inherited log filter.
pub fn paylite() -> Command {
    let mut cmd = Command::new(cargo_bin!("paylite"));
    cmd.env("PAYLITE_SIGN_SECRET", SECRET)
        .env("PAYLITE_MERCHANT_PHONE", MERCHANT_PHONE)
        .env_remove("RUST_LOG");
    cmd
}
