//! Transaction assembly for fee-delegated account creation
//!
//! The module is split into focused pieces:
//! - **errors**: error taxonomy for assembly operations
//! - **instructions**: positional instruction constructors (memo, create
//!   associated token account, set authority)
//! - **builder**: the `TransactionAssembler`, which orders the instructions,
//!   builds the message and attaches the owner signature
//!
//! The assembler produces a partially signed, serialized transaction: the
//! owner signs here, the fee payer countersigns server-side before
//! broadcast. Nothing in this module performs network or disk I/O.

pub mod errors;
pub use errors::TransactionBuilderError;

mod builder;
mod instructions;

pub use builder::{derive_associated_token_address, TransactionAssembler};
pub use instructions::{
    create_associated_token_account, memo_instruction, set_authority,
};
