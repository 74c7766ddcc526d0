//! Payment form rules.
//!
//! [`validate`] checks every field independently and reports every broken
//! rule at once, so a form can mark all invalid inputs in a single pass.

use crate::domain::payment::{
    Amount, ImageKind, PaymentDate, PaymentMethod, PaymentRecord, ProofFile, ProofFileRef,
    RawField, RawPaymentInput,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

const MEBIBYTE: u64 = 1024 * 1024;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_NAME_LETTERS: usize = 2;
pub const MIN_DESCRIPTION_CHARS: usize = 5;
pub const MIN_DESCRIPTION_LETTERS: usize = 5;

/// Form fields that carry rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    PayerName,
    Amount,
    PaymentDate,
    PaymentMethod,
    Description,
    ProofFileRef,
    Reference,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::PayerName => "payerName",
            Field::Amount => "amount",
            Field::PaymentDate => "paymentDate",
            Field::PaymentMethod => "paymentMethod",
            Field::Description => "description",
            Field::ProofFileRef => "proofFileRef",
            Field::Reference => "reference",
        }
    }

    /// Indonesian label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::PayerName => "Nama",
            Field::Amount => "Nominal",
            Field::PaymentDate => "Tanggal pembayaran",
            Field::PaymentMethod => "Metode pembayaran",
            Field::Description => "Deskripsi",
            Field::ProofFileRef => "Bukti pembayaran",
            Field::Reference => "Referensi/Catatan",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    Required,
    /// Present but not of the expected JSON type.
    InvalidType,
    TooShort { min: usize },
    TooFewLetters { min: usize },
    NotInteger,
    OutOfRange,
    BelowMinimum,
    InvalidDate,
    UnknownMethod,
    EmptyFile,
    UnsupportedFileKind,
    FileTooLarge { max_bytes: u64 },
}

/// One broken rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub rule: ValidationRule,
}

impl FieldError {
    /// The user-facing text shown next to the field.
    pub fn message(&self) -> String {
        let label = self.field.label();

        match self.rule {
            ValidationRule::Required => match self.field {
                Field::PayerName => "Nama pembayar wajib diisi".to_string(),
                Field::PaymentMethod => "Metode pembayaran wajib dipilih".to_string(),
                Field::ProofFileRef => "Bukti pembayaran wajib diupload".to_string(),
                _ => format!("{} wajib diisi", label),
            },
            ValidationRule::InvalidType => format!("{} tidak valid", label),
            ValidationRule::TooShort { min } => match self.field {
                Field::Description => format!("{} minimal {} karakter", label, min),
                _ => format!("{} harus minimal {} karakter", label, min),
            },
            ValidationRule::TooFewLetters { min } => match self.field {
                Field::Description => format!(
                    "{} harus mengandung minimal {} huruf (bukan hanya angka/simbol)",
                    label, min
                ),
                _ => format!("{} harus mengandung minimal {} huruf", label, min),
            },
            ValidationRule::NotInteger => format!("{} harus berupa angka bulat", label),
            ValidationRule::OutOfRange => format!("{} terlalu besar", label),
            ValidationRule::BelowMinimum => format!("{} minimal Rp 1.000", label),
            ValidationRule::InvalidDate => format!("{} tidak valid", label),
            ValidationRule::UnknownMethod => {
                format!("{} harus QRIS, Transfer, E-Wallet, atau Cash", label)
            }
            ValidationRule::EmptyFile => format!("{} wajib diupload", label),
            ValidationRule::UnsupportedFileKind => "File harus berformat JPG atau PNG".to_string(),
            ValidationRule::FileTooLarge { max_bytes } => {
                format!("File maksimal {}MB", max_bytes / MEBIBYTE)
            }
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationRule::Required => f.write_str("required"),
            ValidationRule::InvalidType => f.write_str("invalid type"),
            ValidationRule::TooShort { min } => write!(f, "shorter than {} characters", min),
            ValidationRule::TooFewLetters { min } => write!(f, "fewer than {} letters", min),
            ValidationRule::NotInteger => f.write_str("not a whole number"),
            ValidationRule::OutOfRange => f.write_str("out of range"),
            ValidationRule::BelowMinimum => write!(f, "below {}", Amount::MIN),
            ValidationRule::InvalidDate => f.write_str("invalid date"),
            ValidationRule::UnknownMethod => f.write_str("unknown payment method"),
            ValidationRule::EmptyFile => f.write_str("empty file"),
            ValidationRule::UnsupportedFileKind => f.write_str("unsupported file kind"),
            ValidationRule::FileTooLarge { max_bytes } => {
                write!(f, "larger than {} bytes", max_bytes)
            }
        }
    }
}

/// Every rule a submission broke, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: Field, rules: Vec<ValidationRule>) {
        self.errors
            .extend(rules.into_iter().map(|rule| FieldError { field, rule }));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn rules_for(&self, field: Field) -> Vec<ValidationRule> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.rule)
            .collect()
    }

    pub fn has(&self, field: Field, rule: ValidationRule) -> bool {
        self.errors.iter().any(|e| e.field == field && e.rule == rule)
    }

    /// Distinct invalid fields, in field order.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = self.errors.iter().map(|e| e.field).collect();
        fields.sort();
        fields.dedup();
        fields
    }

    /// Messages grouped by field, ready for inline display.
    pub fn messages(&self) -> BTreeMap<Field, Vec<String>> {
        let mut grouped: BTreeMap<Field, Vec<String>> = BTreeMap::new();
        for error in &self.errors {
            grouped.entry(error.field).or_default().push(error.message());
        }
        grouped
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Upper bound on the proof image size.
///
/// The form upload path hands the original file over untouched, so it
/// enforces the smaller ceiling. Flows that run the image through a
/// compression stage afterwards accept the larger, pre-compression ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProofCeiling {
    PreCompression,
    #[default]
    Uncompressed,
}

impl ProofCeiling {
    pub fn max_bytes(&self) -> u64 {
        match self {
            ProofCeiling::PreCompression => 5 * MEBIBYTE,
            ProofCeiling::Uncompressed => 2 * MEBIBYTE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationPolicy {
    pub proof_ceiling: ProofCeiling,
}

/// Latin letters, including the accented Latin-1 ranges.
pub fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(c, '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{FF}')
}

pub fn count_letters(text: &str) -> usize {
    text.chars().filter(|c| is_latin_letter(*c)).count()
}

/// Checks a raw submission against every rule.
pub fn validate(
    raw: &RawPaymentInput,
    policy: &ValidationPolicy,
) -> Result<PaymentRecord, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let payer_name = collect(
        &mut errors,
        Field::PayerName,
        check_payer_name(&raw.payer_name),
    );
    let amount = collect(
        &mut errors,
        Field::Amount,
        present(&raw.amount, ValidationRule::NotInteger)
            .and_then(|amount| Amount::new(*amount).map_err(|rule| vec![rule])),
    );
    let payment_date = collect(
        &mut errors,
        Field::PaymentDate,
        check_payment_date(&raw.payment_date),
    );
    let payment_method = collect(
        &mut errors,
        Field::PaymentMethod,
        present(&raw.payment_method, ValidationRule::UnknownMethod)
            .and_then(|method| method.parse::<PaymentMethod>().map_err(|rule| vec![rule])),
    );
    let description = collect(
        &mut errors,
        Field::Description,
        check_description(&raw.description),
    );
    let proof = collect(
        &mut errors,
        Field::ProofFileRef,
        present(&raw.proof_file_ref, ValidationRule::InvalidType)
            .and_then(|proof| check_proof(proof, policy.proof_ceiling)),
    );
    let reference = collect(
        &mut errors,
        Field::Reference,
        check_reference(&raw.reference),
    );

    match (
        payer_name,
        amount,
        payment_date,
        payment_method,
        description,
        proof,
        reference,
    ) {
        (
            Some(payer_name),
            Some(amount),
            Some(payment_date),
            Some(payment_method),
            Some(description),
            Some(proof),
            Some(reference),
        ) if errors.is_empty() => Ok(PaymentRecord::new(
            payer_name,
            amount,
            payment_date,
            payment_method,
            description,
            proof,
            reference,
        )),
        _ => Err(errors),
    }
}

fn collect<T>(
    errors: &mut ValidationErrors,
    field: Field,
    result: Result<T, Vec<ValidationRule>>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(rules) => {
            errors.push(field, rules);
            None
        }
    }
}

/// The given value, or `Required` when missing and `malformed` when mistyped.
fn present<T>(field: &RawField<T>, malformed: ValidationRule) -> Result<&T, Vec<ValidationRule>> {
    match field {
        RawField::Missing => Err(vec![ValidationRule::Required]),
        RawField::Given(value) => Ok(value),
        RawField::Malformed(_) => Err(vec![malformed]),
    }
}

fn check_payer_name(name: &RawField<String>) -> Result<String, Vec<ValidationRule>> {
    let name = present(name, ValidationRule::InvalidType)?;
    if name.trim().is_empty() {
        return Err(vec![ValidationRule::Required]);
    }

    let mut rules = Vec::new();
    if name.chars().count() < MIN_NAME_CHARS {
        rules.push(ValidationRule::TooShort {
            min: MIN_NAME_CHARS,
        });
    }
    if count_letters(name) < MIN_NAME_LETTERS {
        rules.push(ValidationRule::TooFewLetters {
            min: MIN_NAME_LETTERS,
        });
    }

    if rules.is_empty() {
        Ok(name.clone())
    } else {
        Err(rules)
    }
}

fn check_payment_date(date: &RawField<String>) -> Result<PaymentDate, Vec<ValidationRule>> {
    let date = present(date, ValidationRule::InvalidDate)?.trim();
    if date.is_empty() {
        return Err(vec![ValidationRule::Required]);
    }
    PaymentDate::parse(date).ok_or_else(|| vec![ValidationRule::InvalidDate])
}

fn check_description(description: &RawField<String>) -> Result<String, Vec<ValidationRule>> {
    let description = present(description, ValidationRule::InvalidType)?.trim();
    if description.is_empty() {
        return Err(vec![ValidationRule::Required]);
    }

    let mut rules = Vec::new();
    if description.chars().count() < MIN_DESCRIPTION_CHARS {
        rules.push(ValidationRule::TooShort {
            min: MIN_DESCRIPTION_CHARS,
        });
    }
    if count_letters(description) < MIN_DESCRIPTION_LETTERS {
        rules.push(ValidationRule::TooFewLetters {
            min: MIN_DESCRIPTION_LETTERS,
        });
    }

    if rules.is_empty() {
        Ok(description.to_string())
    } else {
        Err(rules)
    }
}

fn check_proof(proof: &ProofFileRef, ceiling: ProofCeiling) -> Result<ProofFile, Vec<ValidationRule>> {
    let mut rules = Vec::new();
    if proof.size_bytes == 0 {
        rules.push(ValidationRule::EmptyFile);
    }
    let kind = ImageKind::from_content_type(&proof.content_type);
    if kind.is_none() {
        rules.push(ValidationRule::UnsupportedFileKind);
    }
    let max_bytes = ceiling.max_bytes();
    if proof.size_bytes > max_bytes {
        rules.push(ValidationRule::FileTooLarge { max_bytes });
    }

    match kind {
        Some(kind) if rules.is_empty() => Ok(ProofFile {
            name: proof.name.clone(),
            kind,
            size_bytes: proof.size_bytes,
        }),
        _ => Err(rules),
    }
}

/// Optional free text. Blank becomes absent.
fn check_reference(reference: &RawField<String>) -> Result<Option<String>, Vec<ValidationRule>> {
    match reference {
        RawField::Missing => Ok(None),
        RawField::Given(text) => Ok(Some(text.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_string)),
        RawField::Malformed(_) => Err(vec![ValidationRule::InvalidType]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    const NAME_TOO_SHORT: ValidationRule = ValidationRule::TooShort { min: 2 };
    const NAME_TOO_FEW_LETTERS: ValidationRule = ValidationRule::TooFewLetters { min: 2 };
    const DESCRIPTION_TOO_FEW_LETTERS: ValidationRule = ValidationRule::TooFewLetters { min: 5 };

    fn valid_input() -> RawPaymentInput {
        RawPaymentInput {
            payer_name: "Budi Santoso".to_string().into(),
            amount: dec!(50000).into(),
            payment_date: "2024-06-01".to_string().into(),
            payment_method: "QRIS".to_string().into(),
            description: "Bayar makan siang".to_string().into(),
            proof_file_ref: ProofFileRef {
                name: "bukti.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                size_bytes: 250_000,
            }
            .into(),
            reference: RawField::Missing,
        }
    }

    fn description_errors(text: &str) -> Vec<ValidationRule> {
        let mut input = valid_input();
        input.description = text.to_string().into();
        match validate(&input, &ValidationPolicy::default()) {
            Ok(_) => Vec::new(),
            Err(errors) => errors.rules_for(Field::Description),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let record = validate(&valid_input(), &ValidationPolicy::default()).unwrap();
        assert_eq!(record.payer_name(), "Budi Santoso");
        assert_eq!(record.amount().value(), 50000);
        assert_eq!(record.payment_method(), PaymentMethod::Qris);
        assert_eq!(record.proof().kind, ImageKind::Jpeg);
        assert_eq!(record.reference(), None);
    }

    #[test]
    fn test_empty_input_reports_every_field() {
        let errors = validate(&RawPaymentInput::default(), &ValidationPolicy::default())
            .unwrap_err();

        assert_eq!(
            errors.fields(),
            vec![
                Field::PayerName,
                Field::Amount,
                Field::PaymentDate,
                Field::PaymentMethod,
                Field::Description,
                Field::ProofFileRef,
            ]
        );
        assert!(errors.iter().all(|e| e.rule == ValidationRule::Required));
    }

    #[test]
    fn test_payer_name_rules() {
        let mut input = valid_input();
        input.payer_name = "A".to_string().into();
        let errors = validate(&input, &ValidationPolicy::default()).unwrap_err();
        assert_eq!(
            errors.rules_for(Field::PayerName),
            vec![NAME_TOO_SHORT, NAME_TOO_FEW_LETTERS]
        );

        input.payer_name = "1234".to_string().into();
        let errors = validate(&input, &ValidationPolicy::default()).unwrap_err();
        assert_eq!(errors.rules_for(Field::PayerName), vec![NAME_TOO_FEW_LETTERS]);

        input.payer_name = "Zoë".to_string().into();
        assert!(validate(&input, &ValidationPolicy::default()).is_ok());
    }

    #[test]
    fn test_amount_below_floor_is_field_scoped() {
        let mut input = valid_input();
        input.amount = dec!(500).into();

        let errors = validate(&input, &ValidationPolicy::default()).unwrap_err();
        assert_eq!(errors.fields(), vec![Field::Amount]);
        assert!(errors.has(Field::Amount, ValidationRule::BelowMinimum));
    }

    #[test]
    fn test_fractional_amount_rejected() {
        let mut input = valid_input();
        input.amount = dec!(1500.25).into();

        let errors = validate(&input, &ValidationPolicy::default()).unwrap_err();
        assert!(errors.has(Field::Amount, ValidationRule::NotInteger));
    }

    #[test]
    fn test_description_needs_five_letters() {
        assert!(description_errors("12345").contains(&DESCRIPTION_TOO_FEW_LETTERS));
        assert!(description_errors("!!!??").contains(&DESCRIPTION_TOO_FEW_LETTERS));
        assert!(description_errors("hi 123").contains(&DESCRIPTION_TOO_FEW_LETTERS));
        assert_eq!(
            description_errors("  ab  "),
            vec![
                ValidationRule::TooShort { min: 5 },
                DESCRIPTION_TOO_FEW_LETTERS
            ]
        );
        assert!(description_errors("hello 123").is_empty());
        assert!(description_errors("Kopi Susu").is_empty());
    }

    #[test]
    fn test_unknown_method_and_bad_date() {
        let mut input = valid_input();
        input.payment_method = "Crypto".to_string().into();
        input.payment_date = "kemarin".to_string().into();

        let errors = validate(&input, &ValidationPolicy::default()).unwrap_err();
        assert!(errors.has(Field::PaymentMethod, ValidationRule::UnknownMethod));
        assert!(errors.has(Field::PaymentDate, ValidationRule::InvalidDate));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_proof_rules_follow_ceiling() {
        let mut input = valid_input();
        input.proof_file_ref = ProofFileRef {
            name: "bukti.png".to_string(),
            content_type: "image/png".to_string(),
            size_bytes: 3 * MEBIBYTE,
        }
        .into();

        let errors = validate(&input, &ValidationPolicy::default()).unwrap_err();
        assert!(errors.has(
            Field::ProofFileRef,
            ValidationRule::FileTooLarge {
                max_bytes: 2 * MEBIBYTE
            }
        ));

        let relaxed = ValidationPolicy {
            proof_ceiling: ProofCeiling::PreCompression,
        };
        assert!(validate(&input, &relaxed).is_ok());

        input.proof_file_ref = ProofFileRef {
            name: "bukti.gif".to_string(),
            content_type: "image/gif".to_string(),
            size_bytes: 0,
        }
        .into();
        let errors = validate(&input, &relaxed).unwrap_err();
        assert_eq!(
            errors.rules_for(Field::ProofFileRef),
            vec![ValidationRule::EmptyFile, ValidationRule::UnsupportedFileKind]
        );
    }

    #[test]
    fn test_blank_reference_is_absent() {
        let mut input = valid_input();
        input.reference = "   ".to_string().into();
        let record = validate(&input, &ValidationPolicy::default()).unwrap();
        assert_eq!(record.reference(), None);

        input.reference = " ORD-77 ".to_string().into();
        let record = validate(&input, &ValidationPolicy::default()).unwrap();
        assert_eq!(record.reference(), Some("ORD-77"));
    }

    #[test]
    fn test_messages_grouped_by_field() {
        let mut input = valid_input();
        input.amount = dec!(10).into();
        let errors = validate(&input, &ValidationPolicy::default()).unwrap_err();

        let messages = errors.messages();
        assert_eq!(
            messages.get(&Field::Amount),
            Some(&vec!["Nominal minimal Rp 1.000".to_string()])
        );
        assert_eq!(errors.to_string(), "amount: Nominal minimal Rp 1.000");
    }

    #[test]
    fn test_wrongly_typed_fields_are_reported_per_field() {
        let raw: RawPaymentInput = serde_json::from_value(json!({
            "payerName": "B",
            "amount": "lima puluh ribu",
            "paymentDate": 20240601,
            "paymentMethod": 1,
            "description": {"text": "Bayar makan siang"},
            "proofFileRef": "bukti.jpg",
            "reference": 17
        }))
        .unwrap();

        let errors = validate(&raw, &ValidationPolicy::default()).unwrap_err();
        assert_eq!(
            errors.rules_for(Field::PayerName),
            vec![NAME_TOO_SHORT, NAME_TOO_FEW_LETTERS]
        );
        assert!(errors.has(Field::Amount, ValidationRule::NotInteger));
        assert!(errors.has(Field::PaymentDate, ValidationRule::InvalidDate));
        assert!(errors.has(Field::PaymentMethod, ValidationRule::UnknownMethod));
        assert!(errors.has(Field::Description, ValidationRule::InvalidType));
        assert!(errors.has(Field::ProofFileRef, ValidationRule::InvalidType));
        assert!(errors.has(Field::Reference, ValidationRule::InvalidType));
        assert_eq!(errors.fields().len(), 7);
    }

    #[test]
    fn test_numeric_payer_name_is_invalid_type() {
        let mut input = valid_input();
        input.payer_name = RawField::Malformed(json!(42));

        let errors = validate(&input, &ValidationPolicy::default()).unwrap_err();
        assert_eq!(errors.rules_for(Field::PayerName), vec![ValidationRule::InvalidType]);
        assert_eq!(errors.to_string(), "payerName: Nama tidak valid");
    }

    #[test]
    fn test_every_rule_has_its_own_message() {
        let message = |field, rule| FieldError { field, rule }.message();

        assert_eq!(message(Field::PayerName, NAME_TOO_SHORT), "Nama harus minimal 2 karakter");
        assert_eq!(
            message(Field::PayerName, NAME_TOO_FEW_LETTERS),
            "Nama harus mengandung minimal 2 huruf"
        );
        assert_eq!(
            message(Field::Description, ValidationRule::TooShort { min: 5 }),
            "Deskripsi minimal 5 karakter"
        );
        assert_eq!(
            message(Field::Description, DESCRIPTION_TOO_FEW_LETTERS),
            "Deskripsi harus mengandung minimal 5 huruf (bukan hanya angka/simbol)"
        );
        assert_eq!(message(Field::Amount, ValidationRule::Required), "Nominal wajib diisi");
        assert_eq!(
            message(Field::Amount, ValidationRule::NotInteger),
            "Nominal harus berupa angka bulat"
        );
        assert_eq!(
            message(Field::PaymentDate, ValidationRule::Required),
            "Tanggal pembayaran wajib diisi"
        );
        assert_eq!(
            message(Field::PaymentDate, ValidationRule::InvalidDate),
            "Tanggal pembayaran tidak valid"
        );
        assert_eq!(
            message(Field::PaymentMethod, ValidationRule::UnknownMethod),
            "Metode pembayaran harus QRIS, Transfer, E-Wallet, atau Cash"
        );
        assert_eq!(
            message(Field::ProofFileRef, ValidationRule::EmptyFile),
            "Bukti pembayaran wajib diupload"
        );
        assert_eq!(
            message(Field::ProofFileRef, ValidationRule::UnsupportedFileKind),
            "File harus berformat JPG atau PNG"
        );
        assert_eq!(
            message(Field::ProofFileRef, ValidationRule::FileTooLarge { max_bytes: 5 * MEBIBYTE }),
            "File maksimal 5MB"
        );
        assert_eq!(
            message(Field::Reference, ValidationRule::InvalidType),
            "Referensi/Catatan tidak valid"
        );
    }
}
