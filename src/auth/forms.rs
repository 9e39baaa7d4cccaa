/// Form validation for sign-in, registration and profile edits
///
/// These only check shape. No credential is ever verified.
use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use validator::Validate;

/// Sign-in form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInForm {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Photographer registration form
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email")
    )]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

/// Edit-profile form
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    #[validate(length(min = 1, message = "Display Name is required"))]
    pub display_name: String,
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl SignInForm {
    pub fn normalized(mut self) -> Self {
        self.email = self.email.trim().to_string();
        self
    }
}

impl RegisterForm {
    pub fn normalized(mut self) -> Self {
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.email = self.email.trim().to_string();
        self
    }
}

impl ProfileForm {
    pub fn normalized(mut self) -> Self {
        self.display_name = self.display_name.trim().to_string();
        self.country = self.country.trim().to_string();
        self.city = self.city.trim().to_string();
        self
    }
}

/// Run derive validation, collecting the first message per field
pub fn check<T: Validate>(form: &T) -> AppResult<()> {
    let errors = match form.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let fields: BTreeMap<String, String> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect();

    Err(AppError::FieldValidation(fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_errors(result: AppResult<()>) -> BTreeMap<String, String> {
        match result {
            Err(AppError::FieldValidation(fields)) => fields,
            other => panic!("expected field validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_sign_in_form() {
        let ok = SignInForm {
            email: " klara@example.com ".to_string(),
            password: "hunter2".to_string(),
        }
        .normalized();
        assert!(check(&ok).is_ok());

        let bad = SignInForm {
            email: "klara.example.com".to_string(),
            password: String::new(),
        };
        let fields = field_errors(check(&bad));
        assert_eq!(fields["email"], "Please enter a valid email");
        assert_eq!(fields["password"], "Password is required");
    }

    #[test]
    fn test_register_form() {
        let form = RegisterForm {
            first_name: "Klara".to_string(),
            last_name: "Fors".to_string(),
            email: "klara@example.com".to_string(),
            password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
        };
        assert!(check(&form).is_ok());

        let bad = RegisterForm {
            first_name: "  ".to_string(),
            last_name: "Fors".to_string(),
            email: "klara@example.com".to_string(),
            password: "short".to_string(),
            confirm_password: "shorter".to_string(),
        }
        .normalized();
        let fields = field_errors(check(&bad));
        assert_eq!(fields["first_name"], "First name is required");
        assert_eq!(fields["password"], "Password must be at least 8 characters");
        assert_eq!(fields["confirm_password"], "Passwords do not match");
        assert!(!fields.contains_key("email"));
    }

    #[test]
    fn test_profile_form_requires_trimmed_values() {
        let form = ProfileForm {
            display_name: "   ".to_string(),
            country: "Sweden".to_string(),
            city: String::new(),
            avatar_url: None,
        }
        .normalized();

        let fields = field_errors(check(&form));
        assert_eq!(fields["display_name"], "Display Name is required");
        assert_eq!(fields["city"], "City is required");
        assert!(!fields.contains_key("country"));
    }
}
