// SPDX-License-Identifier: Apache-2.0

mod alias_key;

pub use alias_key::AliasKey;
