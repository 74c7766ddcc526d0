use crate::domain::numbering::{NumberingService, SeriesKind};
use crate::domain::payment::{PaymentRecord, RawPaymentInput};
use crate::domain::ports::CounterStoreBox;
use crate::domain::receipt::Receipt;
use crate::domain::signature::{SigningSecret, generate_receipt_id, sign_record};
use crate::domain::validation::{ValidationPolicy, validate};
use crate::error::Result;
use chrono::{Local, NaiveDate};
use tracing::{info, warn};

/// Which calendar day a receipt's numbers are counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberingScope {
    /// The day the payer says they paid.
    #[default]
    PaymentDate,
    /// The local day on which the receipt is issued.
    IssuanceDate,
}

#[derive(Debug, Clone)]
pub struct IssuerConfig {
    pub secret: SigningSecret,
    pub policy: ValidationPolicy,
    pub scope: NumberingScope,
}

impl IssuerConfig {
    pub fn new(secret: SigningSecret) -> Self {
        Self {
            secret,
            policy: ValidationPolicy::default(),
            scope: NumberingScope::default(),
        }
    }
}

/// Turns validated payment records into signed, numbered receipts.
///
/// `ReceiptIssuer` owns the counter store through its numbering service.
/// Assembly is all or nothing: a caller gets either a complete [`Receipt`] or
/// an error, never a half-built one. It is also not idempotent; each call
/// consumes one slot in both the receipt and invoice series, so callers must
/// trigger it once per submission.
pub struct ReceiptIssuer {
    numbering: NumberingService,
    config: IssuerConfig,
}

impl ReceiptIssuer {
    /// Creates a new `ReceiptIssuer`.
    ///
    /// # Arguments
    ///
    /// * `store` - The durable counter store shared by both series.
    /// * `config` - Signing secret, validation policy and numbering scope.
    pub fn new(store: CounterStoreBox, config: IssuerConfig) -> Self {
        Self {
            numbering: NumberingService::new(store),
            config,
        }
    }

    pub fn config(&self) -> &IssuerConfig {
        &self.config
    }

    /// Validates a raw submission under the configured policy.
    pub fn validate(&self, raw: &RawPaymentInput) -> Result<PaymentRecord> {
        Ok(validate(raw, &self.config.policy)?)
    }

    /// Signs and numbers `record`.
    ///
    /// The signature is computed first, so a misconfigured secret fails before
    /// any counter slot is consumed. Any failure comes back wrapped in
    /// [`crate::error::ReceiptError::Assembly`].
    pub async fn assemble(&self, record: PaymentRecord) -> Result<Receipt> {
        match self.try_assemble(record).await {
            Ok(receipt) => {
                info!(
                    receipt_number = %receipt.receipt_number(),
                    invoice_number = %receipt.invoice_number(),
                    receipt_id = %receipt.receipt_id(),
                    "issued receipt"
                );
                Ok(receipt)
            }
            Err(e) => {
                warn!(error = %e, "receipt assembly failed");
                Err(e.into_assembly())
            }
        }
    }

    /// Validates then assembles. Invalid input never touches the counters.
    pub async fn submit(&self, raw: &RawPaymentInput) -> Result<Receipt> {
        let record = self.validate(raw)?;
        self.assemble(record).await
    }

    async fn try_assemble(&self, record: PaymentRecord) -> Result<Receipt> {
        let signature = sign_record(&record, &self.config.secret)?;
        let scope_date = self.scope_date(&record);

        let receipt_number = self
            .numbering
            .next_number(SeriesKind::Receipt, scope_date)
            .await?;
        let invoice_number = self
            .numbering
            .next_number(SeriesKind::Invoice, scope_date)
            .await?;

        Ok(Receipt::new(
            receipt_number,
            invoice_number,
            signature,
            generate_receipt_id(),
            record,
        ))
    }

    fn scope_date(&self, record: &PaymentRecord) -> NaiveDate {
        match self.config.scope {
            NumberingScope::PaymentDate => record.payment_date().date(),
            NumberingScope::IssuanceDate => Local::now().date_naive(),
        }
    }
}
