//! Shared validation helpers for inbound HTTP adapters.
//!
//! Raw path and body values are parsed into domain newtypes here so that
//! handlers only ever pass validated values to the driving ports. Failures
//! become `invalid_request` errors carrying `{field, code}` details.

use serde_json::json;

use crate::domain::{CatalogueId, EmailAddress, Error, UserName};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidEmail,
    InvalidName,
    InvalidId,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidEmail => "invalid_email",
            ErrorCode::InvalidName => "invalid_name",
            ErrorCode::InvalidId => "invalid_id",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn invalid_field(field: FieldName, code: ErrorCode, message: impl std::fmt::Display) -> Error {
    Error::invalid_request(format!("{}: {message}", field.as_str())).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn parse_email(value: impl Into<String>, field: FieldName) -> Result<EmailAddress, Error> {
    EmailAddress::new(value).map_err(|err| invalid_field(field, ErrorCode::InvalidEmail, err))
}

pub(crate) fn parse_name(value: impl Into<String>, field: FieldName) -> Result<UserName, Error> {
    UserName::new(value).map_err(|err| invalid_field(field, ErrorCode::InvalidName, err))
}

pub(crate) fn parse_catalogue_id(
    value: impl Into<String>,
    field: FieldName,
) -> Result<CatalogueId, Error> {
    CatalogueId::new(value).map_err(|err| invalid_field(field, ErrorCode::InvalidId, err))
}
