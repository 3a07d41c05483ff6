//! Admin allow-list configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::admin::AdminPolicy;

/// Admin email addresses, comma-separated.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_emails")]
    pub emails: String,
}

impl AdminConfig {
    pub fn emails_list(&self) -> Vec<String> {
        self.emails
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn policy(&self) -> AdminPolicy {
        AdminPolicy::new(self.emails_list())
    }

    /// Each address needs a local part and a dotted domain.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for email in self.emails_list() {
            let valid = match email.split_once('@') {
                Some((local, domain)) => {
                    !local.is_empty() && domain.contains('.') && !domain.contains('@')
                }
                None => false,
            };
            if !valid {
                return Err(ValidationError::InvalidAdminEmail(email));
            }
        }
        Ok(())
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            emails: default_emails(),
        }
    }
}

fn default_emails() -> String {
    "baron@dossx.com".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_admin() {
        let config = AdminConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.policy().is_admin_email(Some("baron@dossx.com")));
    }

    #[test]
    fn parses_comma_separated_list() {
        let config = AdminConfig {
            emails: "a@example.com, b@example.com,".to_string(),
        };
        assert_eq!(config.emails_list(), vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn rejects_malformed_address() {
        let config = AdminConfig {
            emails: "a@example.com, not-an-email".to_string(),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidAdminEmail("not-an-email".to_string()))
        );
    }
}
