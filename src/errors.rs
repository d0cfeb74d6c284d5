use std::fmt;

#[derive(Debug, Clone)]
pub enum LinkletError {
    Validation(String),
    NotFound(String),
    CodeSpaceExhausted(String),
}

impl LinkletError {
    pub fn code(&self) -> &'static str {
        match self {
            LinkletError::Validation(_) => "E001",
            LinkletError::NotFound(_) => "E002",
            LinkletError::CodeSpaceExhausted(_) => "E003",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            LinkletError::Validation(_) => "Validation Error",
            LinkletError::NotFound(_) => "Resource Not Found",
            LinkletError::CodeSpaceExhausted(_) => "Code Space Exhausted",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LinkletError::Validation(msg) => msg,
            LinkletError::NotFound(msg) => msg,
            LinkletError::CodeSpaceExhausted(msg) => msg,
        }
    }
}

impl fmt::Display for LinkletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for LinkletError {}

// 便捷的构造函数
impl LinkletError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkletError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkletError::NotFound(msg.into())
    }

    pub fn code_space_exhausted<T: Into<String>>(msg: T) -> Self {
        LinkletError::CodeSpaceExhausted(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, LinkletError>;
