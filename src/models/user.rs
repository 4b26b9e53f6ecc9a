use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Profile of the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    pub username: String,
}

/// A film the user marked as favorite
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Favorite {
    pub id: i64,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_uses_camel_case() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["confirmPassword"], "secret");
        assert!(value.get("confirm_password").is_none());
    }

    #[test]
    fn test_favorites_deserialization() {
        let favorites: Vec<Favorite> =
            serde_json::from_str(r#"[{"id": 1, "title": "Le Samouraï"}]"#).unwrap();
        assert_eq!(favorites[0].title, "Le Samouraï");
    }
}
