//! Domain layer: the payment record, its validation rules, numbering,
//! signing and the receipt artifact, plus the storage port they depend on.

pub mod currency;
pub mod numbering;
pub mod payment;
pub mod ports;
pub mod receipt;
pub mod signature;
pub mod validation;
