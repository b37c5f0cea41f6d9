//! Account types for the auth service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Account role, fixed at signup.
///
/// Sellers may create and edit catalog products; buyers may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Regular shopper.
    Buyer,
    /// Merchant account with catalog write access.
    Seller,
}

/// Error parsing a [`Role`] from a string.
#[derive(Debug, Error)]
#[error("unknown role {0:?}, expected \"Buyer\" or \"Seller\"")]
pub struct RoleParseError(String);

impl core::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Buyer" | "buyer" => Ok(Self::Buyer),
            "Seller" | "seller" => Ok(Self::Seller),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Buyer => "Buyer",
            Self::Seller => "Seller",
        })
    }
}

/// Account profile as returned by `GET /profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Account email address.
    pub email: String,
    /// Contact phone number, if the account registered one.
    #[serde(default)]
    pub phone: Option<String>,
    /// Account role.
    pub role: Role,
}

/// Payload for `POST /signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Account email address.
    pub email: String,
    /// Plaintext password; hashing is the auth service's job.
    pub password: String,
    /// Contact phone number.
    pub phone: String,
    /// Requested account role.
    pub role: Role,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_values() {
        assert_eq!(serde_json::to_string(&Role::Buyer).unwrap(), "\"Buyer\"");
        assert_eq!(serde_json::to_string(&Role::Seller).unwrap(), "\"Seller\"");
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("Seller".parse::<Role>().unwrap(), Role::Seller);
        assert_eq!("buyer".parse::<Role>().unwrap(), Role::Buyer);
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_profile_tolerates_missing_phone() {
        let profile: Profile =
            serde_json::from_str(r#"{"email":"a@b.co","role":"Buyer"}"#).unwrap();
        assert_eq!(profile.phone, None);
    }
}
