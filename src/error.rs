// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    /// Input rejected before anything was written.
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Corrupt row {id} in '{table}': {reason}")]
    InvalidRecord {
        table: &'static str,
        id: i64,
        reason: String,
    },

    /// A total left `Decimal`'s range.
    #[error("Total of {0} is too large to compute")]
    Overflow(&'static str),
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
