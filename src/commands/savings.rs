// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::total_capital;
use crate::db::Store;
use crate::i18n::t;
use crate::utils::{
    date_or_today, fmt_money, maybe_print_json, parse_decimal, pretty_table, required,
    resolve_language,
};
use anyhow::{Result, anyhow};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let lang = resolve_language(store.conn(), m)?;
    match m.subcommand() {
        Some(("add", sub)) => {
            let source = required(sub, "source")?;
            let amount = parse_decimal(required(sub, "amount")?)?;
            let date = date_or_today(sub.get_one::<String>("date"))?;
            let id = store.savings().add(source, amount, date)?;
            println!(
                "{} #{}: {} ({})",
                t(lang, "saved"),
                id,
                fmt_money(&amount),
                source.trim()
            );
        }
        Some(("list", sub)) => {
            let data = store.savings().list()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let rows: Vec<Vec<String>> = data
                    .iter()
                    .map(|s| {
                        vec![
                            s.id.to_string(),
                            s.date.to_string(),
                            s.source.clone(),
                            fmt_money(&s.amount),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(
                        &[t(lang, "id"), t(lang, "date"), t(lang, "source"), t(lang, "amt")],
                        rows,
                    )
                );
                let capital = total_capital(&data)?;
                println!("{}: {}", t(lang, "capital"), fmt_money(&capital));
            }
        }
        Some(("rm", sub)) => {
            let id = *sub
                .get_one::<i64>("id")
                .ok_or_else(|| anyhow!("--id is required"))?;
            if store.savings().remove(id)? {
                println!("{} #{}", t(lang, "deleted"), id);
            } else {
                println!("{} (#{})", t(lang, "not_found"), id);
            }
        }
        _ => {}
    }
    Ok(())
}
