//! Email-based admin allow-list.

/// Admin allow-list keyed by email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPolicy {
    emails: Vec<String>,
}

impl AdminPolicy {
    /// Builds a policy from configured addresses; blanks are ignored.
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let emails = emails
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { emails }
    }

    /// True when `email` is present and on the allow-list, ignoring case.
    pub fn is_admin_email(&self, email: Option<&str>) -> bool {
        match email {
            Some(email) if !email.is_empty() => {
                let email = email.to_lowercase();
                self.emails.iter().any(|admin| *admin == email)
            }
            _ => false,
        }
    }

    pub fn emails(&self) -> &[String] {
        &self.emails
    }
}
