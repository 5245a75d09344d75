//! Input validation for account forms
//!
//! - [`validate_password`] walks a fixed, ordered rule chain and reports the
//!   first rule that fails
//! - [`is_valid_email`] checks an address against the platform e-mail pattern

mod email;
mod password;

pub use email::is_valid_email;
pub use password::{
    MIN_PASSWORD_LENGTH, PasswordRule, VALID_PASSWORD_MESSAGE, check_password, validate_password,
};
