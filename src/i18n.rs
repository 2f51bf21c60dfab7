// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Display strings for the two supported locales. Only command handlers
//! look things up here; stored data never depends on the language.

use crate::models::{DebtKind, DebtStatus, TransactionKind};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    En,
    #[default]
    Bn,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "bn" | "bangla" | "bengali" | "বাংলা" => Ok(Language::Bn),
            other => Err(format!("unsupported language '{}' (use en|bn)", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// key, en, bn
const STRINGS: &[(&str, &str, &str)] = &[
    ("title", "Finance Manager Pro", "ব্যক্তিগত অর্থ ব্যবস্থাপক"),
    ("lang_label", "Language / ভাষা", "ভাষা / Language"),
    ("dashboard", "Dashboard", "ড্যাশবোর্ড"),
    ("history", "History", "ইতিহাস"),
    ("debts", "Debt Tracker", "ঋণ ট্র্যাকার"),
    ("savings", "Savings", "সঞ্চয়"),
    ("about", "Developer Info", "ডেভেলপার তথ্য"),
    ("income", "Total Income", "মোট আয়"),
    ("expense", "Total Expense", "মোট ব্যয়"),
    ("balance", "Balance", "বর্তমান ব্যালেন্স"),
    ("debt_total", "Net Debt", "মোট ঋণ"),
    ("capital", "Total Capital", "মোট মূলধন"),
    ("add_trans", "Add Transaction", "লেনদেন যোগ করুন"),
    ("id", "ID", "আইডি"),
    ("type", "Type", "ধরণ"),
    ("cat", "Category", "বিভাগ"),
    ("amt", "Amount", "পরিমাণ"),
    ("date", "Date", "তারিখ"),
    ("note", "Note", "নোট"),
    ("source", "Source", "উৎস"),
    ("share", "Share", "অংশ"),
    ("metric", "Metric", "সূচক"),
    ("income_label", "Income", "আয়"),
    ("expense_label", "Expense", "ব্যয়"),
    ("lend", "Lend", "ধার দেওয়া"),
    ("borrow", "Borrow", "ধার নেওয়া"),
    ("person", "Person Name", "ব্যক্তির নাম"),
    ("status", "Status", "অবস্থা"),
    ("pending", "Pending", "বকেয়া"),
    ("settled", "Settled", "পরিশোধিত"),
    ("delete", "Delete", "মুছে ফেলুন"),
    ("saved", "Saved", "সংরক্ষিত হয়েছে"),
    ("deleted", "Deleted", "মুছে ফেলা হয়েছে"),
    ("not_found", "No record with that ID", "এই আইডির কোনো তথ্য নেই"),
    ("no_data", "No data recorded yet.", "এখনো কোনো তথ্য নেই।"),
    ("dev_name", "Md. Shariful Islam", "মো. শরিফুল ইসলাম"),
    (
        "dev_desc",
        "Expert Software Developer dedicated to creating secure finance solutions.",
        "সফটওয়্যার ডেভেলপার, নিরাপদ ফিন্যান্স অ্যাপ তৈরিতে নিবেদিত।",
    ),
    (
        "privacy",
        "All data is stored locally on your device.",
        "সমস্ত তথ্য আপনার ডিভাইসেই সংরক্ষিত থাকে।",
    ),
];

static TABLE: Lazy<HashMap<&'static str, (&'static str, &'static str)>> =
    Lazy::new(|| STRINGS.iter().map(|(k, en, bn)| (*k, (*en, *bn))).collect());

/// Looks up a display string. Unknown keys come back unchanged.
pub fn t<'a>(lang: Language, key: &'a str) -> &'a str {
    match TABLE.get(key) {
        Some(&(en, bn)) => match lang {
            Language::En => en,
            Language::Bn => bn,
        },
        None => key,
    }
}

pub fn transaction_kind(lang: Language, kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => t(lang, "income_label"),
        TransactionKind::Expense => t(lang, "expense_label"),
    }
}

pub fn debt_kind(lang: Language, kind: DebtKind) -> &'static str {
    match kind {
        DebtKind::Lend => t(lang, "lend"),
        DebtKind::Borrow => t(lang, "borrow"),
    }
}

pub fn debt_status(lang: Language, status: DebtStatus) -> &'static str {
    match status {
        DebtStatus::Pending => t(lang, "pending"),
        DebtStatus::Settled => t(lang, "settled"),
    }
}
