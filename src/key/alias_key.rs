// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use hedera::{
    EvmAddress,
    PrivateKey,
    PublicKey,
};

use crate::Error;

/// A freshly generated ECDSA(secp256k1) key pair for a new account, and the EVM address
/// used as that account's alias.
///
/// Lives only in memory; the private key is never written anywhere.
#[derive(Clone)]
pub struct AliasKey {
    private_key: PrivateKey,
    public_key: PublicKey,
    evm_address: EvmAddress,
}

impl AliasKey {
    /// Generate a new key pair.
    ///
    /// # Errors
    /// - [`Error::UnsupportedAliasKey`] if the generated key has no EVM address.
    pub fn generate() -> crate::Result<Self> {
        Self::from_private_key(PrivateKey::generate_ecdsa())
    }

    /// Use an existing private key as an alias key.
    ///
    /// # Errors
    /// - [`Error::UnsupportedAliasKey`] if `private_key` is not an ECDSA(secp256k1) key.
    pub fn from_private_key(private_key: PrivateKey) -> crate::Result<Self> {
        let public_key = private_key.public_key();
        let evm_address = public_key.to_evm_address().ok_or_else(|| {
            Error::UnsupportedAliasKey("expected an ECDSA(secp256k1) key".to_owned())
        })?;

        Ok(Self { private_key, public_key, evm_address })
    }

    /// Returns the private key.
    #[must_use]
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Returns the public key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        self.public_key
    }

    /// Returns the EVM address of the public key, which is both the account alias and
    /// what gets reported.
    #[must_use]
    pub fn evm_address(&self) -> EvmAddress {
        self.evm_address
    }
}

impl fmt::Debug for AliasKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AliasKey")
            .field("public_key", &self.public_key)
            .field("evm_address", &self.evm_address)
            .finish_non_exhaustive()
    }
}
