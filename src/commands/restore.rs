// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::exporter::Backup;
use crate::db::Store;
use crate::ledger::{Debts, Savings, Transactions};
use crate::utils::required;
use anyhow::{Context, Result};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    let path = required(m, "path")?.trim();
    let raw = std::fs::read_to_string(path).with_context(|| format!("Open backup {}", path))?;
    let backup: Backup =
        serde_json::from_str(&raw).with_context(|| format!("Parse backup {}", path))?;
    let (t, d, s) = restore(store, &backup)?;
    println!(
        "Restored {} transactions, {} debts, {} savings from {}",
        t, d, s, path
    );
    Ok(())
}

/// Replaces each ledger present in `backup` with its records, ids and debt
/// status included. Ledgers missing from `backup` are untouched. Either
/// every change lands or none does.
pub fn restore(store: &mut Store, backup: &Backup) -> Result<(usize, usize, usize)> {
    let tx = store.conn_mut().transaction()?;
    if let Some(rows) = &backup.transactions {
        tx.execute("DELETE FROM transactions", [])?;
        let txs = Transactions::new(&tx);
        for r in rows {
            txs.restore_row(r)
                .with_context(|| format!("Restore transaction #{}", r.id))?;
        }
    }
    if let Some(rows) = &backup.debts {
        tx.execute("DELETE FROM debts", [])?;
        let debts = Debts::new(&tx);
        for d in rows {
            debts
                .restore_row(d)
                .with_context(|| format!("Restore debt #{}", d.id))?;
        }
    }
    if let Some(rows) = &backup.savings {
        tx.execute("DELETE FROM savings", [])?;
        let savings = Savings::new(&tx);
        for s in rows {
            savings
                .restore_row(s)
                .with_context(|| format!("Restore savings #{}", s.id))?;
        }
    }
    tx.commit()?;
    let (t, d, s) = backup.counts();
    tracing::info!(transactions = t, debts = d, savings = s, "backup restored");
    Ok((t, d, s))
}
