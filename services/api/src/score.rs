use std::fs;
use std::path::PathBuf;

use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{compute_points, Receipt};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document
    #[arg(long)]
    pub(crate) receipt: PathBuf,
    /// Emit the result as JSON instead of plain text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.receipt)?;
    let receipt: Receipt = serde_json::from_str(&raw)?;
    let points = compute_points(&receipt);

    if args.json {
        println!("{}", serde_json::json!({ "points": points }));
    } else {
        println!("{} scores {points} points", receipt.retailer);
    }

    Ok(())
}
