//! Positional instruction constructors
//!
//! The on-chain programs consume accounts by position, not by name, and no
//! runtime schema validation exists on the wire. Each constructor therefore
//! takes exactly the required references in order, so a caller cannot build
//! a misordered account list.

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use spl_token::instruction::AuthorityType;

use crate::memo::KinMemo;
use crate::programs::ProgramRegistry;

/// SPL token program discriminant for the SetAuthority operation.
const SET_AUTHORITY_DISCRIMINANT: u8 = 6;

/// Memo instruction: no account operands, data is the base64 text of the
/// packed memo bytes.
pub fn memo_instruction(memo: &KinMemo, programs: &ProgramRegistry) -> Instruction {
    Instruction {
        program_id: programs.memo_program,
        accounts: vec![],
        data: memo.to_base64().into_bytes(),
    }
}

/// Create an associated token account for `owner` holding `mint`, with rent
/// and fees paid by `fee_payer`.
///
/// The program expects exactly these seven accounts in this order:
/// fee payer (signer, writable), the derived token account (writable),
/// owner, mint, then the system program, token program and rent sysvar
/// (all read-only). The instruction carries no payload.
pub fn create_associated_token_account(
    fee_payer: &Pubkey,
    associated_token: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
    programs: &ProgramRegistry,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*fee_payer, true),
        AccountMeta::new(*associated_token, false),
        AccountMeta::new_readonly(*owner, false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new_readonly(programs.system_program, false),
        AccountMeta::new_readonly(programs.token_program, false),
        AccountMeta::new_readonly(programs.rent_sysvar, false),
    ];

    Instruction {
        program_id: programs.associated_token_program,
        accounts,
        data: vec![],
    }
}

/// Transfer an authority over `account` from `current_authority` to
/// `new_authority` (or revoke it when `None`).
///
/// The payload is fixed-width: discriminant, authority-type byte, a
/// presence flag, then 32 authority bytes (all-zero placeholder when the
/// new authority is absent).
///
/// `signers` is the multisig signer set for `current_authority`; when it is
/// empty the current authority itself signs.
pub fn set_authority(
    account: &Pubkey,
    current_authority: &Pubkey,
    new_authority: Option<&Pubkey>,
    authority_type: AuthorityType,
    signers: &[Pubkey],
    programs: &ProgramRegistry,
) -> Instruction {
    let mut data = Vec::with_capacity(35);
    data.push(SET_AUTHORITY_DISCRIMINANT);
    data.push(authority_type_byte(&authority_type));
    match new_authority {
        Some(authority) => {
            data.push(1);
            data.extend_from_slice(authority.as_ref());
        }
        None => {
            data.push(0);
            data.extend_from_slice(&[0u8; 32]);
        }
    }

    let mut accounts = Vec::with_capacity(2 + signers.len());
    accounts.push(AccountMeta::new(*account, false));
    if signers.is_empty() {
        accounts.push(AccountMeta::new_readonly(*current_authority, true));
    } else {
        accounts.push(AccountMeta::new_readonly(*current_authority, false));
        accounts.extend(
            signers
                .iter()
                .map(|signer| AccountMeta::new_readonly(*signer, true)),
        );
    }

    Instruction {
        program_id: programs.token_program,
        accounts,
        data,
    }
}

fn authority_type_byte(authority_type: &AuthorityType) -> u8 {
    match authority_type {
        AuthorityType::MintTokens => 0,
        AuthorityType::FreezeAccount => 1,
        AuthorityType::AccountOwner => 2,
        AuthorityType::CloseAccount => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};

    fn programs() -> ProgramRegistry {
        ProgramRegistry::default()
    }

    #[test]
    fn test_memo_instruction_has_no_accounts() {
        let memo = KinMemo::for_app_index(7).unwrap();
        let ix = memo_instruction(&memo, &programs());

        assert_eq!(ix.program_id, programs().memo_program);
        assert!(ix.accounts.is_empty());
        let decoded = BASE64_STANDARD.decode(&ix.data).unwrap();
        assert_eq!(decoded.as_slice(), memo.as_bytes());
    }

    #[test]
    fn test_create_account_layout_is_fixed() {
        let fee_payer = Pubkey::new_unique();
        let associated_token = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let programs = programs();

        let ix =
            create_associated_token_account(&fee_payer, &associated_token, &owner, &mint, &programs);

        assert_eq!(ix.program_id, programs.associated_token_program);
        assert!(ix.data.is_empty());
        assert_eq!(ix.accounts.len(), 7);

        let expected = [
            (fee_payer, true, true),
            (associated_token, false, true),
            (owner, false, false),
            (mint, false, false),
            (programs.system_program, false, false),
            (programs.token_program, false, false),
            (programs.rent_sysvar, false, false),
        ];
        for (i, (pubkey, is_signer, is_writable)) in expected.iter().enumerate() {
            assert_eq!(ix.accounts[i].pubkey, *pubkey, "account {}", i);
            assert_eq!(ix.accounts[i].is_signer, *is_signer, "signer flag {}", i);
            assert_eq!(ix.accounts[i].is_writable, *is_writable, "writable flag {}", i);
        }
    }

    #[test]
    fn test_set_authority_payload_with_new_authority() {
        let account = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let fee_payer = Pubkey::new_unique();

        let ix = set_authority(
            &account,
            &owner,
            Some(&fee_payer),
            AuthorityType::CloseAccount,
            &[],
            &programs(),
        );

        assert_eq!(ix.program_id, programs().token_program);
        assert_eq!(ix.data.len(), 35);
        assert_eq!(ix.data[0], SET_AUTHORITY_DISCRIMINANT);
        assert_eq!(ix.data[1], 3); // close-account
        assert_eq!(ix.data[2], 1); // authority present
        assert_eq!(&ix.data[3..], fee_payer.as_ref());
    }

    #[test]
    fn test_set_authority_payload_without_new_authority() {
        let account = Pubkey::new_unique();
        let owner = Pubkey::new_unique();

        let ix = set_authority(
            &account,
            &owner,
            None,
            AuthorityType::CloseAccount,
            &[],
            &programs(),
        );

        assert_eq!(ix.data.len(), 35);
        assert_eq!(ix.data[2], 0); // authority absent
        assert_eq!(&ix.data[3..], [0u8; 32]);
    }

    #[test]
    fn test_set_authority_single_signer_accounts() {
        let account = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let fee_payer = Pubkey::new_unique();

        let ix = set_authority(
            &account,
            &owner,
            Some(&fee_payer),
            AuthorityType::CloseAccount,
            &[],
            &programs(),
        );

        assert_eq!(ix.accounts.len(), 2);
        assert_eq!(ix.accounts[0].pubkey, account);
        assert!(!ix.accounts[0].is_signer);
        assert!(ix.accounts[0].is_writable);
        assert_eq!(ix.accounts[1].pubkey, owner);
        assert!(ix.accounts[1].is_signer);
        assert!(!ix.accounts[1].is_writable);
    }

    #[test]
    fn test_set_authority_multisig_signer_accounts() {
        let account = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let signers = [Pubkey::new_unique(), Pubkey::new_unique()];

        let ix = set_authority(
            &account,
            &owner,
            None,
            AuthorityType::AccountOwner,
            &signers,
            &programs(),
        );

        assert_eq!(ix.accounts.len(), 4);
        // Multisig path: the authority itself is demoted to read-only
        // non-signer and the signer set follows.
        assert!(!ix.accounts[1].is_signer);
        assert_eq!(ix.accounts[2].pubkey, signers[0]);
        assert!(ix.accounts[2].is_signer);
        assert_eq!(ix.accounts[3].pubkey, signers[1]);
        assert!(ix.accounts[3].is_signer);
    }
}
