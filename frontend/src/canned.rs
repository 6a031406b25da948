//! Fixed replies for recognised phrases, checked before any network call.

const CANNED_REPLIES: &[(&str, &str)] = &[
    (
        "what is studybuddy",
        "StudyBuddy is your AI-powered learning companion that helps you study smarter, not harder!",
    ),
    (
        "who created you",
        "I was built by a team of developers and AI researchers to support student learning.",
    ),
    ("hello", "Hi there! Ready to learn something new today?"),
    ("how are you", "I'm just lines of code, but I'm always ready to help!"),
    ("thank you", "You're welcome! 😊"),
];

/// Looks up the lowercased, trimmed input in the table.
pub fn lookup(input: &str) -> Option<&'static str> {
    let normalized = input.trim().to_lowercase();
    CANNED_REPLIES
        .iter()
        .find(|(phrase, _)| *phrase == normalized)
        .map(|(_, reply)| *reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_normalizes_case_and_whitespace() {
        assert_eq!(
            lookup("  HELLO  "),
            Some("Hi there! Ready to learn something new today?")
        );
        assert_eq!(lookup("Thank You"), lookup("thank you"));
    }

    #[test]
    fn unknown_phrases_miss() {
        assert_eq!(lookup("explain photosynthesis"), None);
        assert_eq!(lookup(""), None);
    }
}
