//! Unique identifiers for ledger entities
//!
//! Each entity type has its own ID type to provide type safety and prevent
//! mixing up different kinds of identifiers.

use serde::{Deserialize, Serialize};

/// Unique identifier for an Account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub u32);

/// Unique identifier for a Transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub u64);
