/// Logging utilities for PII redaction
///
/// Submitter addresses and subjects are personal data; these helpers keep
/// enough of them for debugging without writing them to logs verbatim.
use regex::Regex;
use std::sync::LazyLock;

// Email redaction regex
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});

/// Redacts email addresses from text, preserving domain for debugging
///
/// # Examples
/// ```
/// use formrelay_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("user@example.com"), "***@example.com");
/// assert_eq!(redact_email("Reply to test@acme.com"), "Reply to ***@acme.com");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            match email.find('@') {
                Some(at_pos) => format!("***{}", &email[at_pos..]),
                None => "***@***".to_string(),
            }
        })
        .to_string()
}

/// Redacts subject line for logging (truncates and masks)
///
/// # Examples
/// ```
/// use formrelay_core::utils::logging::redact_subject;
///
/// assert_eq!(redact_subject("Confidential Document"), "Con...[21 chars]");
/// assert_eq!(redact_subject("Hi"), "Hi");
/// ```
pub fn redact_subject(subject: &str) -> String {
    const MAX_VISIBLE_CHARS: usize = 3;
    const MIN_LENGTH_TO_REDACT: usize = 6;

    let length = subject.chars().count();
    if length < MIN_LENGTH_TO_REDACT {
        subject.to_string()
    } else {
        let visible: String = subject.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}...[{} chars]", visible, length)
    }
}

/// Redacts message body for logging (shows length only)
pub fn redact_body(body: &str) -> String {
    format!("[{} bytes]", body.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_email() {
        assert_eq!(redact_email("user@example.com"), "***@example.com");
        assert_eq!(
            redact_email("From: alice@foo.com To: bob@bar.com"),
            "From: ***@foo.com To: ***@bar.com"
        );
        assert_eq!(redact_email("not an address"), "not an address");
    }

    #[test]
    fn test_redact_subject() {
        assert_eq!(redact_subject("Short"), "Short");
        assert_eq!(redact_subject("This is a long subject"), "Thi...[22 chars]");
        assert_eq!(redact_subject(""), "");
    }

    #[test]
    fn test_redact_subject_multibyte() {
        assert_eq!(redact_subject("Grüße aus Köln"), "Grü...[14 chars]");
    }

    #[test]
    fn test_redact_body() {
        assert_eq!(redact_body("Hello world"), "[11 bytes]");
        assert_eq!(redact_body(""), "[0 bytes]");
    }
}
