// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Dashboard metrics. Everything here is a pure function over slices that
//! were just read from the stores; nothing is cached.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Debt, DebtKind, DebtStatus, SavingsEntry, Transaction, TransactionKind};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

pub fn total_income(txs: &[Transaction]) -> LedgerResult<Decimal> {
    sum_kind(txs, TransactionKind::Income)
}

pub fn total_expense(txs: &[Transaction]) -> LedgerResult<Decimal> {
    sum_kind(txs, TransactionKind::Expense)
}

pub fn balance(txs: &[Transaction]) -> LedgerResult<Decimal> {
    difference("balance", total_income(txs)?, total_expense(txs)?)
}

pub fn total_lend_pending(debts: &[Debt]) -> LedgerResult<Decimal> {
    sum_pending(debts, DebtKind::Lend)
}

pub fn total_borrow_pending(debts: &[Debt]) -> LedgerResult<Decimal> {
    sum_pending(debts, DebtKind::Borrow)
}

/// Positive when we owe more than we are owed.
pub fn net_debt(debts: &[Debt]) -> LedgerResult<Decimal> {
    difference("net debt", total_borrow_pending(debts)?, total_lend_pending(debts)?)
}

pub fn total_capital(savings: &[SavingsEntry]) -> LedgerResult<Decimal> {
    checked_sum("capital", savings.iter().map(|s| s.amount))
}

fn sum_kind(txs: &[Transaction], kind: TransactionKind) -> LedgerResult<Decimal> {
    let what = match kind {
        TransactionKind::Income => "income",
        TransactionKind::Expense => "expense",
    };
    checked_sum(what, txs.iter().filter(|t| t.kind == kind).map(|t| t.amount))
}

fn sum_pending(debts: &[Debt], kind: DebtKind) -> LedgerResult<Decimal> {
    let what = match kind {
        DebtKind::Lend => "pending lend",
        DebtKind::Borrow => "pending borrow",
    };
    checked_sum(
        what,
        debts
            .iter()
            .filter(|d| d.kind == kind && d.status == DebtStatus::Pending)
            .map(|d| d.amount),
    )
}

// Stored rows may predate the amount cap, so sums are checked.
fn checked_sum(
    what: &'static str,
    mut amounts: impl Iterator<Item = Decimal>,
) -> LedgerResult<Decimal> {
    amounts.try_fold(Decimal::ZERO, |acc, a| {
        acc.checked_add(a).ok_or(LedgerError::Overflow(what))
    })
}

fn difference(what: &'static str, a: Decimal, b: Decimal) -> LedgerResult<Decimal> {
    a.checked_sub(b).ok_or(LedgerError::Overflow(what))
}

/// Transactions whose date falls in `YYYY-MM`.
pub fn in_month(txs: &[Transaction], month: &str) -> Vec<Transaction> {
    txs.iter()
        .filter(|t| t.date.format("%Y-%m").to_string() == month)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub total_lend_pending: Decimal,
    pub total_borrow_pending: Decimal,
    pub net_debt: Decimal,
    pub total_capital: Decimal,
}

impl Summary {
    pub fn compute(
        txs: &[Transaction],
        debts: &[Debt],
        savings: &[SavingsEntry],
    ) -> LedgerResult<Self> {
        let total_income = total_income(txs)?;
        let total_expense = total_expense(txs)?;
        let total_lend_pending = total_lend_pending(debts)?;
        let total_borrow_pending = total_borrow_pending(debts)?;
        Ok(Summary {
            total_income,
            total_expense,
            balance: difference("balance", total_income, total_expense)?,
            total_lend_pending,
            total_borrow_pending,
            net_debt: difference("net debt", total_borrow_pending, total_lend_pending)?,
            total_capital: total_capital(savings)?,
        })
    }

    /// Income and expense are scoped to `month`; debts and capital are not.
    pub fn for_month(
        txs: &[Transaction],
        debts: &[Debt],
        savings: &[SavingsEntry],
        month: &str,
    ) -> LedgerResult<Self> {
        Summary::compute(&in_month(txs, month), debts, savings)
    }

    /// Income and expense as percentages of their sum, `None` when both are
    /// zero or the sum leaves `Decimal`'s range.
    pub fn distribution(&self) -> Option<(Decimal, Decimal)> {
        let whole = self.total_income.checked_add(self.total_expense)?;
        if whole.is_zero() {
            return None;
        }
        let hundred = Decimal::ONE_HUNDRED;
        // Divide first; the share is at most one.
        let income = self
            .total_income
            .checked_div(whole)?
            .checked_mul(hundred)?
            .round_dp(2);
        Some((income, hundred - income))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Per-category sums for one kind, largest first. Ties break by name.
pub fn category_breakdown(
    txs: &[Transaction],
    kind: TransactionKind,
) -> LedgerResult<Vec<CategoryTotal>> {
    let mut agg: HashMap<&str, Decimal> = HashMap::new();
    for t in txs.iter().filter(|t| t.kind == kind) {
        let total = agg.entry(t.category.as_str()).or_insert(Decimal::ZERO);
        *total = total
            .checked_add(t.amount)
            .ok_or(LedgerError::Overflow("category"))?;
    }
    let mut items: Vec<CategoryTotal> = agg
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect();
    items.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    Ok(items)
}
