//! Claims model for verified tokens.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claim types recognized by identity resolution.
///
/// Production tokens are minted by a .NET identity provider, so the long
/// WS-identity claim URIs come first in each precedence chain; the short
/// JWT-native names (`uid`, `email`, `role`, ...) are the fallbacks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ClaimType {
    /// Standard name-identifier claim (subject of the token).
    NameIdentifier,
    Uid,
    UserId,
    /// Standard email-address claim.
    Email,
    EmailShort,
    /// Standard role claim.
    Role,
    RoleShort,
}

impl ClaimType {
    /// Wire name of the claim type as embedded in token payloads.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ClaimType::NameIdentifier => {
                "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier"
            }
            ClaimType::Uid => "uid",
            ClaimType::UserId => "UserId",
            ClaimType::Email => {
                "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress"
            }
            ClaimType::EmailShort => "email",
            ClaimType::Role => "http://schemas.microsoft.com/ws/2008/06/identity/claims/role",
            ClaimType::RoleShort => "role",
        }
    }
}

/// A single typed key/value fact about an authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_type: String,
    pub value: String,
}

impl Claim {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

/// The full, ordered collection of claims for one verified token.
///
/// Produced once per request and immutable afterwards. Claim types are not
/// unique; lookup returns the **first** claim of a type in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClaimSet {
    claims: Vec<Claim>,
}

impl ClaimSet {
    pub fn new(claims: Vec<Claim>) -> Self {
        Self { claims }
    }

    /// Build a claim set from a decoded JWT payload.
    ///
    /// String values are kept verbatim; other scalars are rendered to their
    /// JSON text. Array values flatten into one claim per element, preserving
    /// element order. Null values carry no information and are dropped.
    pub fn from_payload(payload: &Map<String, Value>) -> Self {
        let mut claims = Vec::with_capacity(payload.len());
        for (claim_type, value) in payload {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        if let Some(rendered) = render_value(item) {
                            claims.push(Claim::new(claim_type.clone(), rendered));
                        }
                    }
                }
                other => {
                    if let Some(rendered) = render_value(other) {
                        claims.push(Claim::new(claim_type.clone(), rendered));
                    }
                }
            }
        }
        Self { claims }
    }

    /// First claim value of the given wire type, if any.
    pub fn first(&self, claim_type: &str) -> Option<&str> {
        self.claims
            .iter()
            .find(|c| c.claim_type == claim_type)
            .map(|c| c.value.as_str())
    }

    /// Typed variant of [`ClaimSet::first`].
    pub fn get(&self, claim_type: ClaimType) -> Option<&str> {
        self.first(claim_type.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Claim> {
        self.claims.iter()
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
