//! Field rules shared by the registration and sign-in forms.
//!
//! DESIGN
//! ======
//! Lengths are counted in UTF-16 code units, which is what the browser uses
//! for `minlength` on the rendered inputs. A password of four emoji is
//! therefore eight units long and passes, exactly as the input element would
//! report it.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Minimum accepted length for first and last names.
pub const MIN_NAME_LEN: usize = 2;

/// Field length as the browser measures it.
pub fn field_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Loose email check: anything with an `@` in it.
pub fn is_email(value: &str) -> bool {
    value.contains('@')
}

pub fn is_name(value: &str) -> bool {
    field_len(value) >= MIN_NAME_LEN
}

pub fn is_password(value: &str) -> bool {
    field_len(value) >= MIN_PASSWORD_LEN
}
