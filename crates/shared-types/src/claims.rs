use serde::{Deserialize, Serialize};

use crate::Role;

/// Placeholder the token issuer writes when a member has no phone number.
pub const NO_PHONE_NUMBER: &str = "NoNumber";

fn no_phone_number() -> String {
    NO_PHONE_NUMBER.to_string()
}

/// Claims carried in a member access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Member name, used as the token subject.
    pub sub: String,
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(rename = "phoneNumber", default = "no_phone_number")]
    pub phone_number: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn has_phone_number(&self) -> bool {
        self.phone_number != NO_PHONE_NUMBER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_number_uses_camel_case_on_the_wire() {
        let claims: Claims = serde_json::from_str(
            r#"{"sub":"kim","id":7,"name":"kim","email":"kim@example.com",
                "role":"OWNER","phoneNumber":"010-0000-0000","iat":1,"exp":2}"#,
        )
        .unwrap();
        assert_eq!(claims.phone_number, "010-0000-0000");
        assert!(claims.has_phone_number());
        assert!(claims.role.is_privileged());
    }

    #[test]
    fn missing_phone_number_defaults_to_placeholder() {
        let claims: Claims = serde_json::from_str(
            r#"{"sub":"lee","id":3,"name":"lee","email":"lee@example.com",
                "role":"SUPPORTER","iat":1,"exp":2}"#,
        )
        .unwrap();
        assert_eq!(claims.phone_number, NO_PHONE_NUMBER);
        assert!(!claims.has_phone_number());
    }
}
