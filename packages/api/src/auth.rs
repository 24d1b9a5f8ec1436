//! Local checks for the login and signup forms.
//!
//! These run before a request is sent so obviously incomplete forms never
//! reach the backend. The backend stays the authority on credentials.

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Name is required")]
    MissingName,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Password is required")]
    MissingPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

fn check_email(email: &str) -> Result<(), FormError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        check_email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::MissingPassword);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        check_email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::MissingPassword);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form() {
        let mut form = LoginForm {
            email: "kim@example.com".to_string(),
            password: "hunter22".to_string(),
        };
        assert_eq!(form.validate(), Ok(()));

        form.email = "kim.example.com".to_string();
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));

        form.email = "kim@example.com".to_string();
        form.password.clear();
        assert_eq!(form.validate(), Err(FormError::MissingPassword));
    }

    #[test]
    fn test_signup_form() {
        let mut form = SignupForm {
            name: "Kim".to_string(),
            email: "kim@example.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
        };
        assert_eq!(form.validate(), Ok(()));

        form.confirm_password = "hunter23".to_string();
        assert_eq!(form.validate(), Err(FormError::PasswordMismatch));

        form.name = "  ".to_string();
        assert_eq!(form.validate(), Err(FormError::MissingName));
    }
}
