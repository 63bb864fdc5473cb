//! Tracking code generation.
//!
//! Every customer-facing record (package, route plan, order, driver,
//! transaction) carries an opaque tracking code like `PKG-7F3K9Q2MXB`.
//! The prefix tells support staff what kind of record a code refers to
//! without a database lookup.

use rand::RngExt;

/// Charset for the random part of a tracking code (uppercase alphanumeric).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of the random part of a tracking code.
pub const TRACKING_CODE_LEN: usize = 10;

/// Record kind encoded in a tracking code prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePrefix {
    Package,
    Route,
    Order,
    Driver,
    Transaction,
}

impl CodePrefix {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Package => "PKG",
            Self::Route => "RTE",
            Self::Order => "ORD",
            Self::Driver => "DRV",
            Self::Transaction => "TXN",
        }
    }
}

/// Generate a fresh tracking code: `<PREFIX>-` plus 10 random charset chars.
///
/// Uniqueness is enforced by the database unique index, not here; the
/// keyspace (36^10) makes collisions a retry-on-conflict rarity.
pub fn generate_tracking_code(prefix: CodePrefix) -> String {
    let mut rng = rand::rng();
    let random: String = (0..TRACKING_CODE_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();
    format!("{}-{}", prefix.as_str(), random)
}
