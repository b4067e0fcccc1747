use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    NotNumeric { field: &'static str, input: String },
    InvalidPhoneNumber { input: String },
    InvalidTemplateParams { reason: String },
    InvalidEndpoint { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NotNumeric { field, input } => {
                write!(f, "{field} must contain only digits: {input}")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidTemplateParams { reason } => {
                write!(f, "invalid template params: {reason}")
            }
            Self::InvalidEndpoint { input } => write!(f, "invalid endpoint URL: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
