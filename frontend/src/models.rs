use serde::{Deserialize, Serialize};

/// Matches the proxy's `Role` model and the upstream wire format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the conversation. The ordered list of these is the whole
/// session state worth persisting; the rendered transcript derives from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request body for `POST /api/proxy`.
#[derive(Debug, Serialize)]
pub struct ProxyRequest<'a> {
    pub messages: &'a [Message],
}

/// Display mode, persisted under its own key with its own lifecycle —
/// deleting all chats leaves it untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl TryFrom<&str> for Theme {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_round_trips_through_json() {
        let history = vec![
            Message::user("what is recursion?"),
            Message::assistant("Recursion is when a function calls itself."),
            Message::user("thanks"),
        ];

        let json = serde_json::to_string(&history).unwrap();
        let restored: Vec<Message> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, history);
    }

    #[test]
    fn roles_use_the_wire_spelling() {
        let json = serde_json::to_string(&Message::user("hi")).unwrap();
        assert!(json.contains(r#""role":"user""#));
        let json = serde_json::to_string(&Message::assistant("hi")).unwrap();
        assert!(json.contains(r#""role":"assistant""#));
    }

    #[test]
    fn theme_round_trips_and_toggles() {
        assert_eq!(Theme::try_from("light"), Ok(Theme::Light));
        assert_eq!(Theme::try_from(Theme::Dark.as_str()), Ok(Theme::Dark));
        assert!(Theme::try_from("sepia").is_err());
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::default(), Theme::Dark);
    }
}
