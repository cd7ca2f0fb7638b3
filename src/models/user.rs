use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// User identifier as typed into the recommendation form
///
/// Parsing follows integer-prefix rules: leading whitespace is skipped, then
/// an optional sign and as many ASCII digits as are present. Input without a
/// leading number is kept as `NotANumber` and still sent to the service,
/// which is the only place ids are validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdInput {
    Numeric(i64),
    /// Signed digit run too wide for `i64`, forwarded as typed
    OutOfRange(String),
    NotANumber,
}

impl UserIdInput {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (sign, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => ("-", &trimmed[1..]),
            Some(b'+') => ("", &trimmed[1..]),
            _ => ("", trimmed),
        };

        let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digit_count == 0 {
            return UserIdInput::NotANumber;
        }

        let digits = format!("{}{}", sign, &rest[..digit_count]);
        match digits.parse::<i64>() {
            Ok(id) => UserIdInput::Numeric(id),
            Err(_) => UserIdInput::OutOfRange(digits),
        }
    }
}

impl Display for UserIdInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserIdInput::Numeric(id) => write!(f, "{}", id),
            UserIdInput::OutOfRange(digits) => f.write_str(digits),
            UserIdInput::NotANumber => write!(f, "NaN"),
        }
    }
}

/// Response of `GET user/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecommendations {
    #[serde(default)]
    pub user: Option<i64>,
    /// Bands the user already likes
    #[serde(default)]
    pub likes: Vec<String>,
    /// Recommended bands, best first
    pub recommendations: Vec<String>,
}

/// Body of `POST user/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUserRequest {
    pub likes: Vec<String>,
}

impl NewUserRequest {
    pub fn new(likes: Vec<String>) -> Self {
        Self { likes }
    }
}

/// Response of `POST user/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisteredUser {
    pub user_id: i64,
}

impl RegisteredUser {
    /// Confirmation text shown to the user after registering
    pub fn confirmation(&self) -> String {
        format!("User added. Your ID is: {}", self.user_id)
    }
}

/// Response of `GET user/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserCount {
    pub num_of_users: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(UserIdInput::parse("42"), UserIdInput::Numeric(42));
        assert_eq!(UserIdInput::parse("  7"), UserIdInput::Numeric(7));
        assert_eq!(UserIdInput::parse("-3"), UserIdInput::Numeric(-3));
        assert_eq!(UserIdInput::parse("+5"), UserIdInput::Numeric(5));
    }

    #[test]
    fn test_parse_numeric_prefix() {
        assert_eq!(UserIdInput::parse("12abc"), UserIdInput::Numeric(12));
        assert_eq!(UserIdInput::parse("3.9"), UserIdInput::Numeric(3));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert_eq!(UserIdInput::parse("abc"), UserIdInput::NotANumber);
        assert_eq!(UserIdInput::parse(""), UserIdInput::NotANumber);
        assert_eq!(UserIdInput::parse("-"), UserIdInput::NotANumber);
        assert_eq!(UserIdInput::parse("a12"), UserIdInput::NotANumber);
    }

    #[test]
    fn test_parse_out_of_range() {
        let user = UserIdInput::parse("99999999999999999999999");
        assert_eq!(
            user,
            UserIdInput::OutOfRange("99999999999999999999999".to_string())
        );
        assert_eq!(user.to_string(), "99999999999999999999999");

        let negative = UserIdInput::parse(" -123456789012345678901x");
        assert_eq!(negative.to_string(), "-123456789012345678901");
    }

    #[test]
    fn test_display_for_path() {
        assert_eq!(UserIdInput::Numeric(42).to_string(), "42");
        assert_eq!(UserIdInput::NotANumber.to_string(), "NaN");
    }

    #[test]
    fn test_confirmation_text() {
        let user = RegisteredUser { user_id: 42 };
        assert_eq!(user.confirmation(), "User added. Your ID is: 42");
    }

    #[test]
    fn test_new_user_request_serialization() {
        let request = NewUserRequest::new(vec!["abba".to_string(), "coldplay".to_string()]);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"likes":["abba","coldplay"]}"#);
    }

    #[test]
    fn test_user_recommendations_deserialization() {
        let json = r#"{
            "user": 3,
            "likes": ["abba"],
            "recommendations": ["coldplay", "keane"]
        }"#;
        let recs: UserRecommendations = serde_json::from_str(json).unwrap();
        assert_eq!(recs.user, Some(3));
        assert_eq!(recs.likes, vec!["abba"]);
        assert_eq!(recs.recommendations, vec!["coldplay", "keane"]);
    }
}
