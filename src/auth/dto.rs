use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;

use crate::auth::repo_types::PublicUser;

/// Request body for user registration. Every profile field is optional at the
/// wire level so that absence maps to the missing-fields error instead of a
/// body-parse rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub class: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<ByteBuf>,
    #[serde(default)]
    pub avatar_content_type: Option<String>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after register or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

#[cfg(test)]
mod dto_tests {
    use super::*;

    #[test]
    fn register_request_tolerates_absent_fields() {
        let req: RegisterRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(req.email.as_deref(), Some("a@x.com"));
        assert!(req.name.is_none());
        assert!(req.age.is_none());
        assert!(req.class.is_none());
        assert!(req.password.is_none());
        assert!(req.avatar.is_none());
    }

    #[test]
    fn register_request_parses_full_body() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{
                "name": "Ada",
                "age": 30,
                "class": "wizard",
                "email": "a@x.com",
                "password": "pw123",
                "avatar": [1, 2, 3],
                "avatarContentType": "image/png"
            }"#,
        )
        .unwrap();
        assert_eq!(req.age, Some(30));
        assert_eq!(req.avatar.unwrap().into_vec(), vec![1u8, 2, 3]);
        assert_eq!(req.avatar_content_type.as_deref(), Some("image/png"));
    }
}
