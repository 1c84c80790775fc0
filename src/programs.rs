//! On-chain program id registry
//!
//! Program ids are process-wide configuration rather than constants baked
//! into call sites, so alternate deployments (test clusters with their own
//! program ids) can be substituted without code changes. `Default` yields
//! the mainnet set.

use anyhow::{Context, Result};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::config::ProgramIdOverrides;

/// Memo program used by the Kin ecosystem.
pub const KIN_MEMO_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("Memo1UhkJRfHyvLMcVucJwxXeuD728EqVDDwQDxFMNo");

/// The program ids a transaction assembler needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramRegistry {
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub system_program: Pubkey,
    pub rent_sysvar: Pubkey,
    pub memo_program: Pubkey,
}

impl Default for ProgramRegistry {
    fn default() -> Self {
        Self {
            token_program: spl_token::id(),
            associated_token_program: spl_associated_token_account::id(),
            system_program: solana_sdk::system_program::id(),
            rent_sysvar: solana_sdk::sysvar::rent::id(),
            memo_program: KIN_MEMO_PROGRAM_ID,
        }
    }
}

impl ProgramRegistry {
    /// Build a registry from config overrides, falling back to the mainnet
    /// id for every field left unset.
    pub fn from_config(overrides: &ProgramIdOverrides) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            token_program: parse_or(&overrides.token_program, defaults.token_program)?,
            associated_token_program: parse_or(
                &overrides.associated_token_program,
                defaults.associated_token_program,
            )?,
            system_program: parse_or(&overrides.system_program, defaults.system_program)?,
            rent_sysvar: parse_or(&overrides.rent_sysvar, defaults.rent_sysvar)?,
            memo_program: parse_or(&overrides.memo_program, defaults.memo_program)?,
        })
    }
}

fn parse_or(value: &Option<String>, default: Pubkey) -> Result<Pubkey> {
    match value {
        Some(s) => Pubkey::from_str(s).with_context(|| format!("invalid program id: {}", s)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_uses_mainnet_ids() {
        let registry = ProgramRegistry::default();
        assert_eq!(registry.token_program, spl_token::id());
        assert_eq!(
            registry.associated_token_program,
            spl_associated_token_account::id()
        );
        assert_eq!(registry.system_program, solana_sdk::system_program::id());
        assert_eq!(registry.rent_sysvar, solana_sdk::sysvar::rent::id());
        assert_eq!(
            registry.memo_program.to_string(),
            "Memo1UhkJRfHyvLMcVucJwxXeuD728EqVDDwQDxFMNo"
        );
    }

    #[test]
    fn test_override_replaces_single_id() {
        let replacement = Pubkey::new_unique();
        let overrides = ProgramIdOverrides {
            memo_program: Some(replacement.to_string()),
            ..Default::default()
        };
        let registry = ProgramRegistry::from_config(&overrides).unwrap();
        assert_eq!(registry.memo_program, replacement);
        assert_eq!(registry.token_program, spl_token::id());
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        let overrides = ProgramIdOverrides {
            token_program: Some("not-a-pubkey".to_string()),
            ..Default::default()
        };
        assert!(ProgramRegistry::from_config(&overrides).is_err());
    }
}
