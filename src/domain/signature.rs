use crate::domain::payment::{Amount, PaymentDate, PaymentRecord};
use crate::domain::receipt::Receipt;
use crate::error::{ReceiptError, Result};
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Hex characters kept from the HMAC digest.
pub const SIGNATURE_LEN: usize = 16;
pub const RECEIPT_ID_MAX_LEN: usize = 12;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_SUFFIX_LEN: usize = 6;

/// Key for receipt signatures. Never printed.
#[derive(Clone)]
pub struct SigningSecret(String);

impl SigningSecret {
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ReceiptError::Signing(
                "receipt signing secret is not configured".to_string(),
            ));
        }
        Ok(Self(secret))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(***)")
    }
}

/// Truncated HMAC-SHA256 over payment date, payer name and amount.
///
/// Always [`SIGNATURE_LEN`] lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Signature(String);

impl Signature {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Signature {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        let well_formed = value.len() == SIGNATURE_LEN
            && value
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if well_formed {
            Ok(Self(value))
        } else {
            Err(format!(
                "signature must be {} lowercase hex characters, got {:?}",
                SIGNATURE_LEN, value
            ))
        }
    }
}

impl From<Signature> for String {
    fn from(signature: Signature) -> Self {
        signature.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Signs `{date}{payer_name}{amount}`.
///
/// The date is the submitted text and the amount its plain decimal digits, so
/// anyone holding the secret can recompute the value from a printed receipt.
pub fn sign(
    date: &PaymentDate,
    payer_name: &str,
    amount: Amount,
    secret: &SigningSecret,
) -> Result<Signature> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| ReceiptError::Signing(format!("invalid key length: {}", e)))?;

    let message = format!("{}{}{}", date.as_str(), payer_name, amount);
    mac.update(message.as_bytes());

    let mut digest = hex::encode(mac.finalize().into_bytes());
    digest.truncate(SIGNATURE_LEN);
    Ok(Signature(digest))
}

pub fn sign_record(record: &PaymentRecord, secret: &SigningSecret) -> Result<Signature> {
    sign(
        record.payment_date(),
        record.payer_name(),
        record.amount(),
        secret,
    )
}

/// Recomputes the signature from the receipt's own record and compares it in
/// constant time.
pub fn verify(receipt: &Receipt, secret: &SigningSecret) -> Result<bool> {
    let expected = sign_record(receipt.record(), secret)?;
    let expected = expected.as_str().as_bytes();
    let presented = receipt.signature().as_str().as_bytes();

    if expected.len() != presented.len() {
        return Ok(false);
    }
    Ok(expected.ct_eq(presented).into())
}

/// Short opaque receipt identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current time in base 36, a dash and a random base-36 suffix, cut to
/// twelve characters. Unlikely, not guaranteed, to be unique.
pub fn generate_receipt_id() -> ReceiptId {
    receipt_id_at(Utc::now().timestamp_millis(), &mut rand::thread_rng())
}

fn receipt_id_at<R: Rng>(unix_millis: i64, rng: &mut R) -> ReceiptId {
    let suffix: String = (0..RANDOM_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    let mut id = format!("{}-{}", to_base36(unix_millis.unsigned_abs()), suffix);
    id.truncate(RECEIPT_ID_MAX_LEN);
    ReceiptId(id)
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal_macros::dec;

    fn secret() -> SigningSecret {
        SigningSecret::new("paylite-secret-key-2024").unwrap()
    }

    fn date() -> PaymentDate {
        PaymentDate::parse("2024-06-01").unwrap()
    }

    #[test]
    fn test_known_signature() {
        let amount = Amount::new(dec!(50000)).unwrap();
        let signature = sign(&date(), "Budi Santoso", amount, &secret()).unwrap();
        assert_eq!(signature.as_str(), "415ceca5c13a6898");
    }

    #[test]
    fn test_signature_is_deterministic_and_amount_sensitive() {
        let amount = Amount::new(dec!(50000)).unwrap();
        let first = sign(&date(), "Budi Santoso", amount, &secret()).unwrap();
        let second = sign(&date(), "Budi Santoso", amount, &secret()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.as_str().len(), SIGNATURE_LEN);
        assert!(
            first
                .as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );

        let bumped = Amount::new(dec!(50001)).unwrap();
        let changed = sign(&date(), "Budi Santoso", bumped, &secret()).unwrap();
        assert_ne!(first, changed);
        assert_eq!(changed.as_str(), "a3f9cba911b0b5e8");
    }

    #[test]
    fn test_signature_depends_on_name_date_and_secret() {
        let amount = Amount::new(dec!(50000)).unwrap();
        let base = sign(&date(), "Budi Santoso", amount, &secret()).unwrap();

        let other_name = sign(&date(), "Budi Santosa", amount, &secret()).unwrap();
        let other_date = sign(
            &PaymentDate::parse("2024-06-02").unwrap(),
            "Budi Santoso",
            amount,
            &secret(),
        )
        .unwrap();
        let other_secret = sign(
            &date(),
            "Budi Santoso",
            amount,
            &SigningSecret::new("another-secret").unwrap(),
        )
        .unwrap();

        assert_ne!(base, other_name);
        assert_ne!(base, other_date);
        assert_ne!(base, other_secret);
    }

    #[test]
    fn test_blank_secret_is_a_signing_error() {
        assert!(matches!(
            SigningSecret::new("   "),
            Err(ReceiptError::Signing(_))
        ));
        assert_eq!(format!("{:?}", secret()), "SigningSecret(***)");
    }

    #[test]
    fn test_receipt_id_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = receipt_id_at(1_717_200_000_000, &mut rng);

        assert_eq!(id.as_str().len(), RECEIPT_ID_MAX_LEN);
        assert!(id.as_str().starts_with("lwvcjk00-"));
        assert!(id.as_str().is_ascii());

        let live = generate_receipt_id();
        assert!(live.as_str().len() <= RECEIPT_ID_MAX_LEN);
        assert!(live.as_str().contains('-'));
    }

    #[test]
    fn test_signature_serde_checks_format() {
        let signature: Signature = serde_json::from_str("\"415ceca5c13a6898\"").unwrap();
        assert_eq!(signature.as_str(), "415ceca5c13a6898");
        assert_eq!(
            serde_json::to_string(&signature).unwrap(),
            "\"415ceca5c13a6898\""
        );

        assert!(serde_json::from_str::<Signature>("\"zz\"").is_err());
        assert!(serde_json::from_str::<Signature>("\"415CECA5C13A6898\"").is_err());
        assert!(serde_json::from_str::<Signature>("\"415ceca5c13a68\"").is_err());
    }

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
