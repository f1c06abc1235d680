use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing an account identifier string.
#[derive(Debug, thiserror::Error)]
pub enum AccountIdError {
    #[error("account id must be {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("account id is not valid hexadecimal")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Number of raw bytes contained in an account identifier.
pub const ACCOUNT_BYTES: usize = 10;
/// Expected string length of an encoded identifier (lowercase hex).
pub const ACCOUNT_STRING_LENGTH: usize = ACCOUNT_BYTES * 2;

/// Encode a raw account identifier into its lowercase hex form.
pub fn encode_account(bytes: &[u8; ACCOUNT_BYTES]) -> String {
    hex::encode(bytes)
}

/// Attempt to decode a lowercase-hex account string into the raw bytes.
pub fn decode_account(account: &str) -> Result<[u8; ACCOUNT_BYTES], AccountIdError> {
    if account.len() != ACCOUNT_STRING_LENGTH {
        return Err(AccountIdError::InvalidLength {
            expected: ACCOUNT_STRING_LENGTH,
            actual: account.len(),
        });
    }

    let mut bytes = [0u8; ACCOUNT_BYTES];
    hex::decode_to_slice(account, &mut bytes)?;
    Ok(bytes)
}

/// Fixed-length account identifier as it appears on the ledger.
///
/// Serialized as a lowercase hex string in JSON, matching the decoded
/// block output the tooling consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(pub [u8; ACCOUNT_BYTES]);

impl AccountId {
    pub fn new(bytes: [u8; ACCOUNT_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ACCOUNT_BYTES] {
        &self.0
    }
}

impl From<[u8; ACCOUNT_BYTES]> for AccountId {
    fn from(value: [u8; ACCOUNT_BYTES]) -> Self {
        AccountId(value)
    }
}

impl From<AccountId> for String {
    fn from(value: AccountId) -> Self {
        encode_account(&value.0)
    }
}

impl TryFrom<String> for AccountId {
    type Error = AccountIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        decode_account(&value).map(AccountId)
    }
}

impl FromStr for AccountId {
    type Err = AccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_account(s).map(AccountId)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_account(&self.0))
    }
}
