// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::i18n::Language;
use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<String> {
    let s = s.trim();
    chrono::NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Date argument, defaulting to today.
pub fn date_or_today(s: Option<&String>) -> Result<NaiveDate> {
    match s {
        Some(d) => parse_date(d),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("৳{:.2}", d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

// Display language settings
pub fn get_language(conn: &Connection) -> Result<Language> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key='language'", [], |r| {
            r.get(0)
        })
        .optional()?;
    match v {
        Some(code) => code.parse::<Language>().map_err(|e| anyhow!(e)),
        None => Ok(Language::default()),
    }
}

pub fn set_language(conn: &Connection, lang: Language) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('language', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![lang.code()],
    )?;
    Ok(())
}

/// The `--lang` flag wins over the stored preference.
pub fn resolve_language(conn: &Connection, m: &clap::ArgMatches) -> Result<Language> {
    match m.try_get_one::<String>("lang").ok().flatten() {
        Some(code) => code.parse::<Language>().map_err(|e| anyhow!(e)),
        None => get_language(conn),
    }
}

pub fn required<'a>(sub: &'a clap::ArgMatches, name: &str) -> Result<&'a String> {
    sub.get_one::<String>(name)
        .with_context(|| format!("--{} is required", name))
}
