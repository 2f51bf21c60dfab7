// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::i18n::{self, Language, t};
use crate::ledger::{SortBy, TransactionQuery};
use crate::models::TransactionKind;
use crate::utils::{
    date_or_today, fmt_money, maybe_print_json, parse_decimal, parse_month, pretty_table,
    required, resolve_language,
};
use anyhow::{Result, anyhow};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let lang = resolve_language(store.conn(), sub)?;
    let kind = required(sub, "type")?
        .parse::<TransactionKind>()
        .map_err(|e| anyhow!(e))?;
    let category = required(sub, "category")?;
    let amount = parse_decimal(required(sub, "amount")?)?;
    let date = date_or_today(sub.get_one::<String>("date"))?;
    let note = sub.get_one::<String>("note").map(|s| s.as_str());

    let id = store
        .transactions()
        .add(kind, category, amount, date, note)?;
    println!(
        "{} #{}: {} {} '{}' {}",
        t(lang, "saved"),
        id,
        i18n::transaction_kind(lang, kind),
        fmt_money(&amount),
        category.trim(),
        date
    );
    Ok(())
}

/// Builds the history filter from `tx list` arguments.
pub fn query_from_args(sub: &clap::ArgMatches) -> Result<TransactionQuery> {
    let kind = match sub.get_one::<String>("type").map(|s| s.to_ascii_lowercase()) {
        None => None,
        Some(s) if s == "all" => None,
        Some(s) => Some(s.parse::<TransactionKind>().map_err(|e| anyhow!(e))?),
    };
    let month = sub
        .get_one::<String>("month")
        .map(|m| parse_month(m))
        .transpose()?;
    let sort = match sub.get_one::<String>("sort") {
        Some(s) => s.parse::<SortBy>().map_err(|e| anyhow!(e))?,
        None => SortBy::Date,
    };
    Ok(TransactionQuery {
        search: sub.get_one::<String>("search").cloned(),
        kind,
        month,
        sort,
        limit: sub.get_one::<usize>("limit").copied(),
    })
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let lang = resolve_language(store.conn(), sub)?;
    let q = query_from_args(sub)?;
    let data = store.transactions().query(&q)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("{}", t(lang, "no_data"));
        return Ok(());
    }
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.date.to_string(),
                i18n::transaction_kind(lang, r.kind).to_string(),
                r.category.clone(),
                fmt_money(&r.amount),
                r.note.clone().unwrap_or_default(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&headers(lang), rows));
    Ok(())
}

fn headers(lang: Language) -> [&'static str; 6] {
    [
        t(lang, "id"),
        t(lang, "date"),
        t(lang, "type"),
        t(lang, "cat"),
        t(lang, "amt"),
        t(lang, "note"),
    ]
}

fn remove(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let lang = resolve_language(store.conn(), sub)?;
    let id = *sub
        .get_one::<i64>("id")
        .ok_or_else(|| anyhow!("--id is required"))?;
    if store.transactions().remove(id)? {
        println!("{} #{}", t(lang, "deleted"), id);
    } else {
        println!("{} (#{})", t(lang, "not_found"), id);
    }
    Ok(())
}
