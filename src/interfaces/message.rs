//! The confirmation text the payer pastes into the merchant chat.
//!
//! Merchants read these messages by eye and match on the labels, so the
//! wording, the labels and the line order must stay exactly as they are.

use crate::domain::currency::format_currency;
use crate::domain::payment::PaymentRecord;
use crate::domain::receipt::Receipt;
use chrono::{Datelike, NaiveDateTime};

const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agt", "Sep", "Okt", "Nov", "Des",
];

/// Placeholder shown when no reference was given.
pub const NO_REFERENCE: &str = "-";

/// Renders `01 Jun 2024, 00:00` with Indonesian month abbreviations.
///
/// The value is naive: no time zone is applied, so the wall-clock time the
/// payer submitted is printed as is and a date-only submission shows `00:00`.
pub fn format_payment_date(value: NaiveDateTime) -> String {
    let month = MONTHS_ID[value.month0() as usize];
    format!(
        "{} {} {}",
        value.format("%d"),
        month,
        value.format("%Y, %H:%M")
    )
}

pub fn build_message(record: &PaymentRecord, receipt: &Receipt) -> String {
    format!(
        "Konfirmasi Pembayaran

Nama: {name}
Tanggal: {date}
Metode: {method}
Nominal: {amount}
Deskripsi: {description}
Referensi/Catatan: {reference}

No. Struk: {receipt_number}
No. Invoice: {invoice_number}
Signature: {signature}

Bukti Bayar: Terlampir di pesan berikut
Struk JPG: Sudah saya simpan

(Dikirim otomatis dari PayLite Self-Report)",
        name = record.payer_name(),
        date = format_payment_date(record.payment_date().date_time()),
        method = record.payment_method(),
        amount = format_currency(record.amount().value()),
        description = record.description(),
        reference = record.reference().unwrap_or(NO_REFERENCE),
        receipt_number = receipt.receipt_number(),
        invoice_number = receipt.invoice_number(),
        signature = receipt.signature(),
    )
}
