use crate::domain::numbering::DocumentNumber;
use crate::domain::payment::PaymentRecord;
use crate::domain::signature::{ReceiptId, Signature};
use serde::{Deserialize, Serialize};

/// The issued artifact for one submission.
///
/// Built once by [`crate::application::issuer::ReceiptIssuer`] and never
/// changed afterwards. Starting over yields a new receipt with new numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    receipt_number: DocumentNumber,
    invoice_number: DocumentNumber,
    signature: Signature,
    receipt_id: ReceiptId,
    record: PaymentRecord,
}

impl Receipt {
    pub(crate) fn new(
        receipt_number: DocumentNumber,
        invoice_number: DocumentNumber,
        signature: Signature,
        receipt_id: ReceiptId,
        record: PaymentRecord,
    ) -> Self {
        Self {
            receipt_number,
            invoice_number,
            signature,
            receipt_id,
            record,
        }
    }

    pub fn receipt_number(&self) -> &DocumentNumber {
        &self.receipt_number
    }

    pub fn invoice_number(&self) -> &DocumentNumber {
        &self.invoice_number
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn receipt_id(&self) -> &ReceiptId {
        &self.receipt_id
    }

    pub fn record(&self) -> &PaymentRecord {
        &self.record
    }

    /// File name for the rendered receipt image.
    pub fn image_file_name(&self) -> String {
        format!("receipt-{}.jpg", self.receipt_number)
    }

    /// File name under which the proof image is attached to the chat.
    pub fn proof_attachment_name(&self) -> String {
        format!(
            "bukti-bayar-{}.{}",
            self.receipt_number,
            self.record.proof().kind.extension()
        )
    }
}
