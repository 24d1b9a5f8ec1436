use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Response of `POST /api/user/upload-image`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadResponse {
    pub image_path: String,
}

/// Body of a failed response. User endpoints send `error`; the presentation
/// endpoints send `message`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse an error body, tolerating anything that isn't JSON.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    pub fn into_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::User;

    #[test]
    fn test_error_body_prefers_error_field() {
        let body = ErrorBody::parse(r#"{"error":"Email already registered","message":"x"}"#);
        assert_eq!(body.into_message().as_deref(), Some("Email already registered"));

        let body = ErrorBody::parse(r#"{"success":false,"message":"Outline failed","data":null}"#);
        assert_eq!(body.into_message().as_deref(), Some("Outline failed"));
    }

    #[test]
    fn test_error_body_tolerates_garbage() {
        assert_eq!(ErrorBody::parse("<html>502</html>").into_message(), None);
        assert_eq!(ErrorBody::parse(r#"{"error":"  "}"#).into_message(), None);
    }

    #[test]
    fn test_upload_response_is_camel_case() {
        let resp: ImageUploadResponse =
            serde_json::from_str(r#"{"imagePath":"/uploads/abc.png"}"#).unwrap();
        assert_eq!(resp.image_path, "/uploads/abc.png");
    }

    #[test]
    fn test_user_wire_shape() {
        let user: User = serde_json::from_str(
            r#"{"id":7,"name":"Kim","email":"kim@example.com","avatar":null}"#,
        )
        .unwrap();
        assert_eq!(user.id, Some(7));
        assert_eq!(user.avatar, None);

        let json = serde_json::to_value(User::new("Lee", "lee@example.com")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Lee", "email": "lee@example.com", "avatar": null})
        );
    }
}
