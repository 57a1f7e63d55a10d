use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

/// Delay standing in for the round trip to the intake backend.
pub const SIMULATED_LATENCY_MS: u32 = 2_000;

/// Matter categories offered by the contact form, as (value, label) pairs.
pub const CASE_TYPES: &[(&str, &str)] = &[
    ("consultation", "Initial Consultation"),
    ("corporate", "Corporate Law"),
    ("litigation", "Civil Litigation"),
    ("real-estate", "Real Estate"),
    ("estate-planning", "Estate Planning"),
    ("family", "Family Law"),
];

/// One contact request, read from the form controls at submit time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub case_type: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingField,
    InvalidEmail,
}

impl FormError {
    pub fn user_message(self) -> &'static str {
        match self {
            FormError::MissingField => "Please fill in all required fields.",
            FormError::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

/// Checks the required fields in a fixed order: presence of all four first,
/// then the email shape. The first failure wins.
pub fn validate(submission: &FormSubmission) -> Result<(), FormError> {
    if submission.name.is_empty()
        || submission.email.is_empty()
        || submission.case_type.is_empty()
        || submission.message.is_empty()
    {
        return Err(FormError::MissingField);
    }
    if !is_valid_email(&submission.email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

/// Address shape check: one `@` separating a non-empty local part from a
/// domain that carries an interior dot, with no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionError {
    /// The endpoint answered with a non-success status.
    Rejected(u16),
    /// The request never completed.
    Network(String),
}

/// Where a validated submission goes. The form takes this as a prop so a
/// host page can swap the default simulated send for a real intake URL.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEndpoint {
    /// Fixed-latency stand-in that always succeeds.
    Simulated,
    /// POST the submission as JSON to the given URL.
    Remote(String),
}

impl SubmissionEndpoint {
    /// Endpoint for a deployment with a real intake backend.
    pub fn backend() -> Self {
        SubmissionEndpoint::Remote(crate::config::get_contact_url())
    }

    pub async fn send(&self, submission: &FormSubmission) -> Result<(), SubmissionError> {
        match self {
            SubmissionEndpoint::Simulated => {
                TimeoutFuture::new(SIMULATED_LATENCY_MS).await;
                Ok(())
            }
            SubmissionEndpoint::Remote(url) => {
                let response = Request::post(url)
                    .json(submission)
                    .map_err(|e| SubmissionError::Network(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| SubmissionError::Network(e.to_string()))?;
                if response.ok() {
                    Ok(())
                } else {
                    Err(SubmissionError::Rejected(response.status()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormSubmission {
        FormSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            case_type: "consultation".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_submission() {
        assert_eq!(validate(&filled()), Ok(()));
    }

    #[test]
    fn rejects_any_missing_field() {
        for blank in ["name", "email", "case_type", "message"] {
            let mut submission = filled();
            match blank {
                "name" => submission.name.clear(),
                "email" => submission.email.clear(),
                "case_type" => submission.case_type.clear(),
                _ => submission.message.clear(),
            }
            assert_eq!(validate(&submission), Err(FormError::MissingField), "{blank}");
        }
    }

    #[test]
    fn missing_field_wins_over_bad_email() {
        let mut submission = filled();
        submission.email = "not-an-email".to_string();
        submission.message.clear();
        assert_eq!(validate(&submission), Err(FormError::MissingField));
    }

    #[test]
    fn rejects_malformed_email() {
        let mut submission = filled();
        submission.email = "not-an-email".to_string();
        assert_eq!(validate(&submission), Err(FormError::InvalidEmail));
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "jane@example.com", "first.last@sub.example.org"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in [
            "",
            "not-an-email",
            "@example.com",
            "jane@",
            "jane@example",
            "jane@.com",
            "jane@com.",
            "jane doe@example.com",
            "jane@exa mple.com",
            "jane@@example.com",
            "a@b@c.co",
        ] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn error_messages_are_fixed() {
        assert_eq!(
            FormError::MissingField.user_message(),
            "Please fill in all required fields."
        );
        assert_eq!(
            FormError::InvalidEmail.user_message(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn submission_serializes_for_the_wire() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["case_type"], "consultation");
    }

    #[test]
    fn backend_endpoint_points_at_the_contact_route() {
        match SubmissionEndpoint::backend() {
            SubmissionEndpoint::Remote(url) => assert!(url.ends_with("/api/contact")),
            other => panic!("unexpected endpoint: {other:?}"),
        }
    }

    #[test]
    fn case_types_have_unique_values() {
        let mut values: Vec<&str> = CASE_TYPES.iter().map(|(value, _)| *value).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), CASE_TYPES.len());
    }
}
