use crate::domain::payment::RawPaymentInput;
use crate::domain::receipt::Receipt;
use crate::error::Result;
use std::io::{Read, Write};

/// Reads one form submission from a JSON document.
///
/// Missing or wrongly typed fields are fine here; validation reports them per
/// field. Only documents that are not a JSON object fail at this stage.
pub fn read_submission<R: Read>(source: R) -> Result<RawPaymentInput> {
    Ok(serde_json::from_reader(source)?)
}

/// Reads a stored receipt. The embedded record goes through the payment rules
/// again and the signature must be well formed.
pub fn read_receipt<R: Read>(source: R) -> Result<Receipt> {
    Ok(serde_json::from_reader(source)?)
}

pub fn write_receipt<W: Write>(mut sink: W, receipt: &Receipt) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, receipt)?;
    sink.write_all(b"\n")?;
    sink.flush()?;
    Ok(())
}
