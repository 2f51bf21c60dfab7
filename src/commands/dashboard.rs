// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{Summary, category_breakdown, in_month};
use crate::db::Store;
use crate::i18n::{self, t};
use crate::models::{Transaction, TransactionKind};
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table, resolve_language};
use anyhow::Result;

/// Reads every ledger and folds it into the dashboard metrics.
pub fn summary(store: &Store, month: Option<&str>) -> Result<Summary> {
    Ok(scan(store, month)?.0)
}

// One read of each ledger. Also hands back the transactions in scope.
fn scan(store: &Store, month: Option<&str>) -> Result<(Summary, Vec<Transaction>)> {
    let txs = store.transactions().list(None)?;
    let debts = store.debts().list()?;
    let savings = store.savings().list()?;
    let scoped = match month {
        Some(m) => in_month(&txs, m),
        None => txs,
    };
    let s = Summary::compute(&scoped, &debts, &savings)?;
    Ok((s, scoped))
}

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let lang = resolve_language(store.conn(), m)?;
    let month = m
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;
    let (s, scoped) = scan(store, month.as_deref())?;
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &s)? {
        return Ok(());
    }

    let metrics = vec![
        vec![t(lang, "income").to_string(), fmt_money(&s.total_income)],
        vec![t(lang, "expense").to_string(), fmt_money(&s.total_expense)],
        vec![t(lang, "balance").to_string(), fmt_money(&s.balance)],
        vec![t(lang, "debt_total").to_string(), fmt_money(&s.net_debt)],
        vec![t(lang, "capital").to_string(), fmt_money(&s.total_capital)],
    ];
    if let Some(ref mo) = month {
        println!("{} ({})", t(lang, "dashboard"), mo);
    } else {
        println!("{}", t(lang, "dashboard"));
    }
    println!("{}", pretty_table(&[t(lang, "metric"), t(lang, "amt")], metrics));

    let Some((inc, exp)) = s.distribution() else {
        println!("{}", t(lang, "no_data"));
        return Ok(());
    };
    let dist = vec![
        vec![
            i18n::transaction_kind(lang, TransactionKind::Income).to_string(),
            format!("{:.2}%", inc),
        ],
        vec![
            i18n::transaction_kind(lang, TransactionKind::Expense).to_string(),
            format!("{:.2}%", exp),
        ],
    ];
    println!("{}", pretty_table(&[t(lang, "type"), t(lang, "share")], dist));

    let rows: Vec<Vec<String>> = category_breakdown(&scoped, TransactionKind::Expense)?
        .into_iter()
        .map(|c| vec![c.category, fmt_money(&c.total)])
        .collect();
    if !rows.is_empty() {
        println!("{}", pretty_table(&[t(lang, "cat"), t(lang, "expense")], rows));
    }
    Ok(())
}
