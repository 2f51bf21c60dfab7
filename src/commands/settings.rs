// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::i18n::{Language, t};
use crate::utils::{get_language, resolve_language, set_language};
use anyhow::{Result, anyhow};

pub fn handle_lang(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.get_one::<String>("code") {
        Some(code) => {
            let lang = code.parse::<Language>().map_err(|e| anyhow!(e))?;
            set_language(store.conn(), lang)?;
            println!("{}: {}", t(lang, "lang_label"), lang);
        }
        None => {
            let lang = get_language(store.conn())?;
            println!("{}: {}", t(lang, "lang_label"), lang);
        }
    }
    Ok(())
}

pub fn handle_about(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let lang = resolve_language(store.conn(), m)?;
    println!("{}", t(lang, "about"));
    println!("{}", t(lang, "dev_name"));
    println!("{}", t(lang, "dev_desc"));
    println!("- Email: Connect.shariful@gmail.com");
    println!("- Tech: Rust, SQLite");
    println!("- Privacy: {}", t(lang, "privacy"));
    Ok(())
}
