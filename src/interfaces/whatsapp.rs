use crate::error::{ReceiptError, Result};

const WA_BASE_URL: &str = "https://wa.me";

/// Merchant chat number, digits only in international form (`62812...`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantPhone(String);

impl MerchantPhone {
    /// Keeps only the digits, so `+62 858-8379` and `628588379` are the same.
    pub fn new(raw: &str) -> Result<Self> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(ReceiptError::Config(
                "merchant WhatsApp number is not configured".to_string(),
            ));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Deep link that opens a chat with `phone` prefilled with `text`.
pub fn handoff_link(phone: &MerchantPhone, text: &str) -> String {
    format!(
        "{}/{}?text={}",
        WA_BASE_URL,
        phone.as_str(),
        urlencoding::encode(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_keeps_digits_only() {
        let phone = MerchantPhone::new("+62 858-8379-5285").unwrap();
        assert_eq!(phone.as_str(), "6285883795285");

        assert!(matches!(
            MerchantPhone::new(" + "),
            Err(ReceiptError::Config(_))
        ));
    }

    #[test]
    fn test_handoff_link_encodes_text() {
        let phone = MerchantPhone::new("6285883795285").unwrap();
        let link = handoff_link(&phone, "Nama: Budi Santoso\nNominal: Rp 1.000 & lunas");

        assert_eq!(
            link,
            "https://wa.me/6285883795285?text=Nama%3A%20Budi%20Santoso%0ANominal%3A%20Rp%201.000%20%26%20lunas"
        );
    }

    #[test]
    fn test_handoff_link_round_trips() {
        let phone = MerchantPhone::new("628123").unwrap();
        let text = "Konfirmasi Pembayaran\n\nNominal: Rp\u{a0}50.000";
        let link = handoff_link(&phone, text);

        let encoded = link.split_once("?text=").unwrap().1;
        assert_eq!(urlencoding::decode(encoded).unwrap(), text);
    }
}
