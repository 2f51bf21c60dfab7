// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod dashboard;
pub mod debts;
pub mod exporter;
pub mod restore;
pub mod savings;
pub mod settings;
pub mod transactions;
