use crate::domain::validation::{
    ProofCeiling, ValidationErrors, ValidationPolicy, ValidationRule, validate,
};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the payer says they paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "QRIS")]
    Qris,
    #[serde(rename = "Transfer")]
    Transfer,
    #[serde(rename = "E-Wallet")]
    EWallet,
    #[serde(rename = "Cash")]
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Qris,
        PaymentMethod::Transfer,
        PaymentMethod::EWallet,
        PaymentMethod::Cash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Qris => "QRIS",
            PaymentMethod::Transfer => "Transfer",
            PaymentMethod::EWallet => "E-Wallet",
            PaymentMethod::Cash => "Cash",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or(ValidationRule::UnknownMethod)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positive, whole amount of rupiah.
///
/// IDR has no minor unit in practice, so the smallest currency unit is one
/// rupiah and the amount is kept as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Amount(i64);

impl Amount {
    /// Smallest amount a payer may report.
    pub const MIN: i64 = 1000;

    pub fn new(value: Decimal) -> Result<Self, ValidationRule> {
        if !value.fract().is_zero() {
            return Err(ValidationRule::NotInteger);
        }
        let value = value.to_i64().ok_or(ValidationRule::OutOfRange)?;
        if value < Self::MIN {
            return Err(ValidationRule::BelowMinimum);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ValidationRule;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Amount {
    type Error = ValidationRule;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(Decimal::from(value))
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The payment date as submitted, plus its parsed value.
///
/// The submitted text is kept verbatim (after trimming) because it is part of
/// the signed message; re-rendering it from the parsed value could change the
/// signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PaymentDate {
    raw: String,
    value: NaiveDateTime,
}

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

impl PaymentDate {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let value = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .or_else(|| {
                DATE_TIME_FORMATS
                    .iter()
                    .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            })?;

        Some(Self {
            raw: raw.to_string(),
            value,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.value
    }

    pub fn date(&self) -> NaiveDate {
        self.value.date()
    }
}

impl TryFrom<String> for PaymentDate {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PaymentDate::parse(&value).ok_or_else(|| format!("invalid payment date: {:?}", value))
    }
}

impl From<PaymentDate> for String {
    fn from(date: PaymentDate) -> Self {
        date.raw
    }
}

impl fmt::Display for PaymentDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Accepted proof image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Jpeg,
    Png,
}

impl ImageKind {
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" => Some(ImageKind::Jpeg),
            "image/png" => Some(ImageKind::Png),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
        }
    }

    /// File extension taken from the subtype of the content type.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "jpeg",
            ImageKind::Png => "png",
        }
    }
}

/// Reference to the proof-of-payment image as handed over by the upload
/// collaborator. The bytes themselves never reach this crate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofFileRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub size_bytes: u64,
}

/// A proof reference that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofFile {
    pub name: String,
    pub kind: ImageKind,
    pub size_bytes: u64,
}

/// One submitted form value.
///
/// A value of the wrong JSON type is kept as `Malformed` instead of failing the
/// whole document, so validation can still report it against its field. JSON
/// `null` counts as missing.
#[derive(Debug, Clone, PartialEq)]
pub enum RawField<T> {
    Missing,
    Given(T),
    Malformed(serde_json::Value),
}

impl<T> RawField<T> {
    pub fn given(&self) -> Option<&T> {
        match self {
            RawField::Given(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, RawField::Missing)
    }
}

impl<T> Default for RawField<T> {
    fn default() -> Self {
        RawField::Missing
    }
}

impl<T> From<T> for RawField<T> {
    fn from(value: T) -> Self {
        RawField::Given(value)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for RawField<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(RawField::Missing);
        }
        Ok(match serde_json::from_value::<T>(value.clone()) {
            Ok(parsed) => RawField::Given(parsed),
            Err(_) => RawField::Malformed(value),
        })
    }
}

/// A form submission before validation. Every field may be missing or carry
/// the wrong type.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPaymentInput {
    #[serde(default)]
    pub payer_name: RawField<String>,
    #[serde(default)]
    pub amount: RawField<Decimal>,
    #[serde(default)]
    pub payment_date: RawField<String>,
    #[serde(default)]
    pub payment_method: RawField<String>,
    #[serde(default)]
    pub description: RawField<String>,
    #[serde(default)]
    pub proof_file_ref: RawField<ProofFileRef>,
    #[serde(default)]
    pub reference: RawField<String>,
}

/// A validated payment self-report. Only [`crate::domain::validation::validate`]
/// builds one, so holding a `PaymentRecord` means every rule passed.
///
/// Deserializing runs the same rules again, under the larger proof ceiling so
/// records issued under either policy load back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredRecord")]
pub struct PaymentRecord {
    payer_name: String,
    amount: Amount,
    payment_date: PaymentDate,
    payment_method: PaymentMethod,
    description: String,
    proof: ProofFile,
    reference: Option<String>,
}

impl PaymentRecord {
    pub(crate) fn new(
        payer_name: String,
        amount: Amount,
        payment_date: PaymentDate,
        payment_method: PaymentMethod,
        description: String,
        proof: ProofFile,
        reference: Option<String>,
    ) -> Self {
        Self {
            payer_name,
            amount,
            payment_date,
            payment_method,
            description,
            proof,
            reference,
        }
    }

    pub fn payer_name(&self) -> &str {
        &self.payer_name
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn payment_date(&self) -> &PaymentDate {
        &self.payment_date
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn proof(&self) -> &ProofFile {
        &self.proof
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    payer_name: String,
    amount: i64,
    payment_date: String,
    payment_method: String,
    description: String,
    proof: ProofFile,
    #[serde(default)]
    reference: Option<String>,
}

impl TryFrom<StoredRecord> for PaymentRecord {
    type Error = ValidationErrors;

    fn try_from(stored: StoredRecord) -> Result<Self, Self::Error> {
        let raw = RawPaymentInput {
            payer_name: stored.payer_name.into(),
            amount: Decimal::from(stored.amount).into(),
            payment_date: stored.payment_date.into(),
            payment_method: stored.payment_method.into(),
            description: stored.description.into(),
            proof_file_ref: ProofFileRef {
                name: stored.proof.name,
                content_type: stored.proof.kind.content_type().to_string(),
                size_bytes: stored.proof.size_bytes,
            }
            .into(),
            reference: stored.reference.map(RawField::from).unwrap_or_default(),
        };
        let policy = ValidationPolicy {
            proof_ceiling: ProofCeiling::PreCompression,
        };
        validate(&raw, &policy)
    }
}
