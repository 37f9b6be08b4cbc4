use thiserror::Error;

/// Rejected budget edits. The messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BudgetError {
    #[error("Please enter a category name")]
    EmptyName,
    #[error("Category already exists")]
    DuplicateName(String),
    #[error("Amount must be greater than 0")]
    InvalidAmount(String),
    #[error("That category no longer exists")]
    NoSuchCategory(usize),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("viewer config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("viewer config field `{field}` is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Rejected scholarship form input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScholarshipError {
    #[error("Please enter a scholarship name")]
    EmptyName,
    #[error("Amount must be greater than 0")]
    InvalidAmount(String),
    #[error("Please pick a month")]
    UnknownMonth(String),
    #[error("Please enter a requirement title")]
    EmptyRequirement,
}
