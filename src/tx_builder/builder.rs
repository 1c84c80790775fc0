//! Core transaction assembly
//!
//! Builds the fee-delegated account-creation transaction: an optional memo,
//! the associated-token-account creation, and a close-authority transfer to
//! the fee payer, signed by the owner and serialized for the Kinetic
//! service to countersign and broadcast.

use solana_sdk::{
    hash::Hash,
    message::Message,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_token::instruction::AuthorityType;
use std::str::FromStr;
use tracing::debug;

use crate::memo::KinMemo;
use crate::programs::ProgramRegistry;
use crate::tx_builder::errors::TransactionBuilderError;
use crate::tx_builder::instructions;

/// Derive the associated token account address for `(owner, mint)`.
///
/// Pure and deterministic: the same inputs always yield the same address.
/// The bounded bump-seed search can in principle exhaust its range, which
/// surfaces as a derivation error.
pub fn derive_associated_token_address(
    owner: &Pubkey,
    mint: &Pubkey,
    programs: &ProgramRegistry,
) -> Result<Pubkey, TransactionBuilderError> {
    Pubkey::try_find_program_address(
        &[
            owner.as_ref(),
            programs.token_program.as_ref(),
            mint.as_ref(),
        ],
        &programs.associated_token_program,
    )
    .map(|(address, _bump)| address)
    .ok_or_else(|| {
        TransactionBuilderError::derivation(format!(
            "no valid associated token address for owner {} and mint {}",
            owner, mint
        ))
    })
}

/// Assembles partially-signed account-creation transactions.
#[derive(Debug, Clone, Default)]
pub struct TransactionAssembler {
    programs: ProgramRegistry,
}

impl TransactionAssembler {
    pub fn new(programs: ProgramRegistry) -> Self {
        Self { programs }
    }

    pub fn programs(&self) -> &ProgramRegistry {
        &self.programs
    }

    /// Build, sign and serialize an account-creation transaction.
    ///
    /// Instruction order is fixed and significant: memo (if requested),
    /// then account creation, then the close-authority transfer to the fee
    /// payer — the authority transfer must follow the creation of the
    /// account it operates on.
    ///
    /// The message's payer slot is the owner, whose signature is attached
    /// here; `fee_payer` is the account that funds the creation and
    /// countersigns later. The two roles are deliberately distinct.
    ///
    /// `recent_blockhash` is treated as an opaque anchor: it is parsed,
    /// never checked for freshness. The returned bytes carry exactly one
    /// attached signature (the owner's) and are not broadcast-valid until
    /// the fee payer countersigns.
    pub fn assemble_account_creation(
        &self,
        add_memo: bool,
        app_index: u16,
        recent_blockhash: &str,
        fee_payer: &str,
        mint: &str,
        owner: &Keypair,
    ) -> Result<Vec<u8>, TransactionBuilderError> {
        let fee_payer = parse_pubkey(fee_payer, "fee_payer")?;
        let mint = parse_pubkey(mint, "mint")?;
        let blockhash = Hash::from_str(recent_blockhash)
            .map_err(|e| TransactionBuilderError::encoding("recent_blockhash", e.to_string()))?;

        let owner_pubkey = owner.pubkey();
        let associated_token =
            derive_associated_token_address(&owner_pubkey, &mint, &self.programs)?;

        let mut ixs = Vec::with_capacity(3);
        if add_memo {
            let memo = KinMemo::for_app_index(app_index)
                .map_err(|e| TransactionBuilderError::encoding("memo", e.to_string()))?;
            ixs.push(instructions::memo_instruction(&memo, &self.programs));
        }
        ixs.push(instructions::create_associated_token_account(
            &fee_payer,
            &associated_token,
            &owner_pubkey,
            &mint,
            &self.programs,
        ));
        ixs.push(instructions::set_authority(
            &associated_token,
            &owner_pubkey,
            Some(&fee_payer),
            AuthorityType::CloseAccount,
            &[],
            &self.programs,
        ));

        let message = Message::new_with_blockhash(&ixs, Some(&owner_pubkey), &blockhash);
        let mut tx = Transaction::new_unsigned(message);
        tx.try_partial_sign(&[owner], blockhash)?;

        debug!(
            owner = %owner_pubkey,
            mint = %mint,
            associated_token = %associated_token,
            instruction_count = ixs.len(),
            "Assembled account-creation transaction"
        );

        bincode::serialize(&tx)
            .map_err(|e| TransactionBuilderError::encoding("transaction", e.to_string()))
    }
}

fn parse_pubkey(value: &str, field: &'static str) -> Result<Pubkey, TransactionBuilderError> {
    Pubkey::from_str(value).map_err(|e| TransactionBuilderError::encoding(field, e.to_string()))
}
