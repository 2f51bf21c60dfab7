// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::i18n::{self, t};
use crate::models::{DebtKind, DebtStatus};
use crate::utils::{
    date_or_today, fmt_money, maybe_print_json, parse_decimal, pretty_table, required,
    resolve_language,
};
use anyhow::{Result, anyhow, bail};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("settle", sub)) => settle(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn id_of(sub: &clap::ArgMatches) -> Result<i64> {
    sub.get_one::<i64>("id")
        .copied()
        .ok_or_else(|| anyhow!("--id is required"))
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let lang = resolve_language(store.conn(), sub)?;
    let kind = required(sub, "type")?
        .parse::<DebtKind>()
        .map_err(|e| anyhow!(e))?;
    let person = required(sub, "person")?;
    let amount = parse_decimal(required(sub, "amount")?)?;
    let date = date_or_today(sub.get_one::<String>("date"))?;
    let note = sub.get_one::<String>("note").map(|s| s.as_str());

    let id = store.debts().add(kind, person, amount, date, note)?;
    println!(
        "{} #{}: {} {} ({})",
        t(lang, "saved"),
        id,
        i18n::debt_kind(lang, kind),
        fmt_money(&amount),
        person.trim()
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let lang = resolve_language(store.conn(), sub)?;
    let data = match sub.get_one::<String>("status") {
        Some(s) => {
            let status = s.parse::<DebtStatus>().map_err(|e| anyhow!(e))?;
            store.debts().list_by_status(status)?
        }
        None => store.debts().list()?,
    };
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("{}", t(lang, "no_data"));
        return Ok(());
    }
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|d| {
            vec![
                d.id.to_string(),
                d.date.to_string(),
                i18n::debt_kind(lang, d.kind).to_string(),
                d.person.clone(),
                fmt_money(&d.amount),
                i18n::debt_status(lang, d.status).to_string(),
                d.note.clone().unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                t(lang, "id"),
                t(lang, "date"),
                t(lang, "type"),
                t(lang, "person"),
                t(lang, "amt"),
                t(lang, "status"),
                t(lang, "note"),
            ],
            rows,
        )
    );
    Ok(())
}

fn settle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let lang = resolve_language(store.conn(), sub)?;
    let id = id_of(sub)?;
    if store.debts().settle(id)? {
        println!("#{} {}", id, t(lang, "settled"));
    } else {
        match store.debts().get(id)? {
            Some(_) => println!("#{} {}", id, t(lang, "settled")),
            None => println!("{} (#{})", t(lang, "not_found"), id),
        }
    }
    Ok(())
}

fn remove(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let lang = resolve_language(store.conn(), sub)?;
    let id = id_of(sub)?;
    let debts = store.debts();
    let Some(debt) = debts.get(id)? else {
        println!("{} (#{})", t(lang, "not_found"), id);
        return Ok(());
    };
    if debt.status == DebtStatus::Pending && !sub.get_flag("force") {
        tracing::warn!(id, "refusing to delete pending debt");
        bail!("Debt #{} is still pending; settle it first or pass --force", id);
    }
    debts.remove(id)?;
    println!("{} #{}", t(lang, "deleted"), id);
    Ok(())
}
