#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL, same origin
}

/// URL of the contact-form intake endpoint, used when the form is wired to a
/// real backend instead of the default simulated send.
pub fn get_contact_url() -> String {
    format!("{}/api/contact", get_backend_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_url_is_under_backend() {
        assert!(get_contact_url().ends_with("/api/contact"));
        assert!(get_contact_url().starts_with(get_backend_url()));
    }
}
