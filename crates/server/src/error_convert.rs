use shared_types::AppError;

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AddressQuery, AppErrorKind, PasswordCheckRequest};

    #[test]
    fn validation_failure_maps_to_field_error() {
        let err = AddressQuery {
            address: String::new(),
        }
        .validate_request()
        .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(
            err.field_errors.get("address").map(String::as_str),
            Some("Please enter a property address.")
        );
    }

    #[test]
    fn valid_request_passes() {
        assert!(PasswordCheckRequest {
            password: "secret".to_string()
        }
        .validate_request()
        .is_ok());
    }
}
