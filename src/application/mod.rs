//! Application layer orchestrating the receipt pipeline.
//!
//! This module defines the `ReceiptIssuer`, the entry point that validates a
//! submission, signs it and draws receipt and invoice numbers from the
//! injected counter store.

pub mod issuer;
