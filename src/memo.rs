//! Kin binary memo encoding
//!
//! The Kinetic service tags transactions with a 32-byte bit-packed memo so
//! that off-chain indexers can attribute activity to a registered app. The
//! layout (bit offsets from the start of the buffer):
//!
//! - `[0, 1]`   magic byte (always `0x1`)
//! - `[2, 4]`   memo format version
//! - `[5, 9]`   transaction type
//! - `[10, 25]` app index
//! - `[26, ..]` foreign key (230 bits of off-chain reference data; 29 input
//!   bytes with the last byte's top 2 bits dropped)
//!
//! On the wire the memo instruction carries the base64 text of these 32
//! bytes as its data, with no account operands.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use thiserror::Error;

/// Low two bits of byte 0, identifies a Kin memo.
pub const MAGIC_BYTE: u8 = 0x1;

/// Memo format version emitted by this SDK.
pub const MEMO_VERSION: u8 = 1;

const MAX_VERSION: u8 = 7;
const MAX_FOREIGN_KEY_LEN: usize = 29;

/// Errors from memo construction
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MemoError {
    #[error("memo version {0} out of range (max {MAX_VERSION})")]
    VersionOutOfRange(u8),

    #[error("foreign key length {0} exceeds {MAX_FOREIGN_KEY_LEN} bytes")]
    ForeignKeyTooLong(usize),
}

/// Transaction classification embedded in the memo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TransactionType {
    /// No particular classification (the account-creation flow uses this)
    None = 0,
    Earn = 1,
    Spend = 2,
    P2P = 3,
}

impl TransactionType {
    fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::None),
            1 => Some(Self::Earn),
            2 => Some(Self::Spend),
            3 => Some(Self::P2P),
            _ => None,
        }
    }
}

/// A packed 32-byte Kin memo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KinMemo {
    data: [u8; 32],
}

impl KinMemo {
    /// Pack a memo from its fields.
    ///
    /// `app_index` spans the full 16-bit field, so no range check is needed
    /// beyond the type itself. The foreign key may be empty.
    pub fn new(
        version: u8,
        tx_type: TransactionType,
        app_index: u16,
        foreign_key: &[u8],
    ) -> Result<Self, MemoError> {
        if version > MAX_VERSION {
            return Err(MemoError::VersionOutOfRange(version));
        }
        if foreign_key.len() > MAX_FOREIGN_KEY_LEN {
            return Err(MemoError::ForeignKeyTooLong(foreign_key.len()));
        }

        let t = tx_type as u8;
        let mut data = [0u8; 32];
        data[0] = MAGIC_BYTE;
        data[0] |= version << 2;
        data[0] |= (t & 0x7) << 5;
        data[1] = (t & 0x18) >> 3;
        data[1] |= ((app_index & 0x3f) as u8) << 2;
        data[2] = ((app_index & 0x3fc0) >> 6) as u8;
        data[3] = ((app_index & 0xc000) >> 14) as u8;

        // The foreign key starts at bit 26, sharing byte 3 with the top of
        // the app index, so each input byte straddles two buffer bytes.
        if !foreign_key.is_empty() {
            data[3] |= foreign_key[0] << 2;
            for i in 4..3 + foreign_key.len() {
                data[i] = (foreign_key[i - 4] >> 6) | (foreign_key[i - 3] << 2);
            }
            // A full 29-byte key fills the field exactly and its last 2 bits
            // fall off the end; shorter keys carry their last bits over.
            if foreign_key.len() < MAX_FOREIGN_KEY_LEN {
                data[foreign_key.len() + 3] = foreign_key[foreign_key.len() - 1] >> 6;
            }
        }

        Ok(Self { data })
    }

    /// Memo carried by account-creation transactions: current version,
    /// type `None`, empty foreign key.
    pub fn for_app_index(app_index: u16) -> Result<Self, MemoError> {
        Self::new(MEMO_VERSION, TransactionType::None, app_index, &[])
    }

    pub fn version(&self) -> u8 {
        (self.data[0] & 0x1c) >> 2
    }

    pub fn transaction_type(&self) -> Option<TransactionType> {
        let raw = (self.data[0] >> 5) | ((self.data[1] & 0x3) << 3);
        TransactionType::from_raw(raw)
    }

    pub fn app_index(&self) -> u16 {
        ((self.data[1] >> 2) as u16)
            | ((self.data[2] as u16) << 6)
            | (((self.data[3] & 0x3) as u16) << 14)
    }

    /// The 230-bit foreign key field, unpacked to 29 bytes.
    ///
    /// The last byte carries only 6 bits, so it never exceeds `0x3f`.
    pub fn foreign_key(&self) -> [u8; 29] {
        let mut fk = [0u8; 29];
        for i in 0..28 {
            fk[i] = (self.data[i + 3] >> 2) | (self.data[i + 4] << 6);
        }
        fk[28] = self.data[31] >> 2;
        fk
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.data
    }

    /// Base64 text form, which is what goes into the memo instruction data.
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(self.data)
    }
}
