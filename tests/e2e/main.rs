// SPDX-License-Identifier: Apache-2.0

//! Tests against a live network.
//!
//! Everything here spends real hbars, so tests only run with `TEST_RUN_NONFREE=1`
//! and `OPERATOR_ID` / `OPERATOR_KEY` set; otherwise they pass without doing anything.

mod account;
mod common;
