use clap::{Args, Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result, miette};
use paylite::application::issuer::{IssuerConfig, NumberingScope, ReceiptIssuer};
use paylite::domain::ports::CounterStoreBox;
use paylite::domain::signature::{SigningSecret, verify};
use paylite::domain::validation::{ProofCeiling, ValidationPolicy};
use paylite::error::ReceiptError;
use paylite::infrastructure::file::FileCounterStore;
use paylite::infrastructure::in_memory::InMemoryCounterStore;
#[cfg(feature = "storage-rocksdb")]
use paylite::infrastructure::rocksdb::RocksDBCounterStore;
use paylite::interfaces::json::{read_receipt, read_submission, write_receipt};
use paylite::interfaces::message::build_message;
use paylite::interfaces::whatsapp::{MerchantPhone, handoff_link};
use paylite::logging::init_tracing;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::warn;

const DEFAULT_COUNTER_FILE: &str = "paylite-counters.json";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Secret used to sign receipts
    #[arg(long, env = "PAYLITE_SIGN_SECRET", hide_env_values = true, global = true)]
    secret: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a payment submission and issue a signed, numbered receipt
    Issue(IssueArgs),
    /// Check that a saved receipt's signature matches its payment details
    Verify {
        /// Receipt JSON written by `issue --receipt-out`
        receipt: PathBuf,
    },
}

#[derive(Args)]
struct IssueArgs {
    /// Payment submission JSON file, or `-` for stdin
    input: PathBuf,

    /// Merchant WhatsApp number that receives the confirmation
    #[arg(long, env = "PAYLITE_MERCHANT_PHONE")]
    merchant_phone: String,

    /// JSON file holding the daily counters (default: paylite-counters.json)
    #[arg(long, conflicts_with_all = ["db_path", "ephemeral"])]
    counter_file: Option<PathBuf>,

    /// Path to a RocksDB counter database. Requires the `storage-rocksdb` feature.
    #[arg(long, conflicts_with = "ephemeral")]
    db_path: Option<PathBuf>,

    /// Keep counters in memory only; numbering restarts on every run
    #[arg(long)]
    ephemeral: bool,

    /// Largest accepted proof image
    #[arg(long, value_enum, default_value_t = CeilingArg::Uncompressed)]
    proof_ceiling: CeilingArg,

    /// Day under which receipt and invoice numbers are counted
    #[arg(long, value_enum, default_value_t = ScopeArg::PaymentDate)]
    numbering_scope: ScopeArg,

    /// Also write the issued receipt as JSON to this path
    #[arg(long)]
    receipt_out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum CeilingArg {
    /// 2 MB, the proof is sent as uploaded
    Uncompressed,
    /// 5 MB, the proof is compressed afterwards
    PreCompression,
}

impl From<CeilingArg> for ProofCeiling {
    fn from(arg: CeilingArg) -> Self {
        match arg {
            CeilingArg::Uncompressed => ProofCeiling::Uncompressed,
            CeilingArg::PreCompression => ProofCeiling::PreCompression,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ScopeArg {
    PaymentDate,
    IssuanceDate,
}

impl From<ScopeArg> for NumberingScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::PaymentDate => NumberingScope::PaymentDate,
            ScopeArg::IssuanceDate => NumberingScope::IssuanceDate,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("warn");
    let cli = Cli::parse();

    let secret = SigningSecret::new(cli.secret.unwrap_or_default()).into_diagnostic()?;

    match cli.command {
        Command::Issue(args) => issue(args, secret).await,
        Command::Verify { receipt } => verify_receipt(&receipt, &secret),
    }
}

async fn issue(args: IssueArgs, secret: SigningSecret) -> Result<()> {
    let phone = MerchantPhone::new(&args.merchant_phone).into_diagnostic()?;
    let raw = read_submission(open_input(&args.input)?).into_diagnostic()?;

    let config = IssuerConfig {
        secret,
        policy: ValidationPolicy {
            proof_ceiling: args.proof_ceiling.into(),
        },
        scope: args.numbering_scope.into(),
    };
    let issuer = ReceiptIssuer::new(open_store(&args)?, config);

    let receipt = match issuer.submit(&raw).await {
        Ok(receipt) => receipt,
        Err(ReceiptError::Validation(errors)) => {
            for error in errors.iter() {
                eprintln!("{}", error);
            }
            return Err(miette!(
                "Submission rejected: {} rule(s) failed on {} field(s)",
                errors.len(),
                errors.fields().len()
            ));
        }
        Err(e) => return Err(e).into_diagnostic(),
    };

    if let Some(path) = &args.receipt_out {
        let file = File::create(path).into_diagnostic()?;
        write_receipt(file, &receipt).into_diagnostic()?;
    }

    let message = build_message(receipt.record(), &receipt);
    println!("{}", message);
    println!();
    println!("{}", handoff_link(&phone, &message));

    Ok(())
}

fn verify_receipt(path: &Path, secret: &SigningSecret) -> Result<()> {
    let file = File::open(path).into_diagnostic()?;
    let receipt = read_receipt(BufReader::new(file)).into_diagnostic()?;

    if verify(&receipt, secret).into_diagnostic()? {
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        Err(miette!(
            "Signature does not match receipt {}",
            receipt.receipt_number()
        ))
    }
}

fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).into_diagnostic()?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_store(args: &IssueArgs) -> Result<CounterStoreBox> {
    if args.ephemeral {
        warn!("Counters are kept in memory only; numbering restarts on the next run.");
        return Ok(Box::new(InMemoryCounterStore::new()));
    }

    if let Some(db_path) = &args.db_path {
        #[cfg(feature = "storage-rocksdb")]
        {
            let store = RocksDBCounterStore::open(db_path).into_diagnostic()?;
            return Ok(Box::new(store));
        }

        #[cfg(not(feature = "storage-rocksdb"))]
        {
            let fallback = db_path.with_extension("json");
            warn!(
                "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to counter file {}.",
                fallback.display()
            );
            let store = FileCounterStore::open(fallback).into_diagnostic()?;
            return Ok(Box::new(store));
        }
    }

    let path = args
        .counter_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_COUNTER_FILE));
    let store = FileCounterStore::open(path).into_diagnostic()?;
    Ok(Box::new(store))
}
