use crate::utils::error::{CopierError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CopierError::invalid_value(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if path.contains('\0') {
        return Err(CopierError::invalid_value(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CopierError::invalid_value(
            field_name,
            &value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("host", "example.com").is_ok());
        assert!(validate_non_empty_string("host", "").is_err());
        assert!(validate_non_empty_string("host", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("src", "./data.bin").is_ok());
        assert!(validate_path("dest", "/upload/data.bin").is_ok());
        assert!(validate_path("src", "").is_err());
        assert!(validate_path("dest", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("port", 22u32, 1, 65535).is_ok());
        assert!(validate_range("port", 0u32, 1, 65535).is_err());
        assert!(validate_range("port", 70000u32, 1, 65535).is_err());
    }

    #[test]
    fn test_error_names_field() {
        let err = validate_non_empty_string("username", "").unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("username"));
    }
}
