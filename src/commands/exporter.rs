// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::models::{Debt, SavingsEntry, Transaction};
use crate::utils::required;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Everything `export backup` writes and `restore` reads back. A missing
/// ledger is left alone on restore.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Backup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debts: Option<Vec<Debt>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<Vec<SavingsEntry>>,
}

impl Backup {
    /// Record counts per ledger; absent ledgers count as zero.
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.transactions.as_ref().map_or(0, Vec::len),
            self.debts.as_ref().map_or(0, Vec::len),
            self.savings.as_ref().map_or(0, Vec::len),
        )
    }
}

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        Some(("debts", sub)) => export_debts(store, sub),
        Some(("savings", sub)) => export_savings(store, sub),
        Some(("backup", sub)) => export_backup(store, sub),
        _ => Ok(()),
    }
}

enum Format {
    Csv,
    Json,
}

fn format_of(sub: &clap::ArgMatches) -> Result<Format> {
    let fmt = required(sub, "format")?.to_lowercase();
    match fmt.as_str() {
        "csv" => Ok(Format::Csv),
        "json" => Ok(Format::Json),
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
}

fn write_json<T: Serialize>(out: &str, items: &T) -> Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(items)?)?;
    Ok(())
}

fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = format_of(sub)?;
    let out = required(sub, "out")?.trim();
    let mut rows = store.transactions().list(None)?;
    rows.reverse();

    match fmt {
        Format::Csv => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "type", "category", "amount", "note"])?;
            for r in &rows {
                wtr.write_record([
                    r.id.to_string(),
                    r.date.to_string(),
                    r.kind.to_string(),
                    r.category.clone(),
                    r.amount.to_string(),
                    r.note.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        Format::Json => write_json(out, &rows)?,
    }
    tracing::debug!(count = rows.len(), out, "exported transactions");
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}

fn export_debts(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = format_of(sub)?;
    let out = required(sub, "out")?.trim();
    let rows = store.debts().list()?;

    match fmt {
        Format::Csv => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "type", "person", "amount", "status", "note"])?;
            for d in &rows {
                wtr.write_record([
                    d.id.to_string(),
                    d.date.to_string(),
                    d.kind.to_string(),
                    d.person.clone(),
                    d.amount.to_string(),
                    d.status.to_string(),
                    d.note.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        Format::Json => write_json(out, &rows)?,
    }
    println!("Exported {} debts to {}", rows.len(), out);
    Ok(())
}

fn export_savings(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = format_of(sub)?;
    let out = required(sub, "out")?.trim();
    let mut rows = store.savings().list()?;
    rows.reverse();

    match fmt {
        Format::Csv => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "source", "amount"])?;
            for s in &rows {
                wtr.write_record([
                    s.id.to_string(),
                    s.date.to_string(),
                    s.source.clone(),
                    s.amount.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        Format::Json => write_json(out, &rows)?,
    }
    println!("Exported {} savings entries to {}", rows.len(), out);
    Ok(())
}

pub fn backup(store: &Store) -> Result<Backup> {
    let mut transactions = store.transactions().list(None)?;
    transactions.reverse();
    let mut savings = store.savings().list()?;
    savings.reverse();
    Ok(Backup {
        transactions: Some(transactions),
        debts: Some(store.debts().list()?),
        savings: Some(savings),
    })
}

fn export_backup(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let out = required(sub, "out")?.trim();
    let b = backup(store)?;
    write_json(out, &b)?;
    let (t, d, s) = b.counts();
    println!(
        "Backup written to {} ({} transactions, {} debts, {} savings)",
        out, t, d, s
    );
    Ok(())
}
