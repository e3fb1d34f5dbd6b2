use thiserror::Error;

/// Errors raised while turning a delimited pattern such as `/\d+/i` into a
/// compiled regex.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
	#[error("Pattern is empty")]
	Empty,
	#[error("Invalid pattern delimiter: {0:?}")]
	InvalidDelimiter(char),
	#[error("No ending delimiter {0:?} found")]
	Unterminated(char),
	#[error("Unknown pattern modifier: {0:?}")]
	UnknownModifier(char),
	#[error("Invalid pattern: {0}")]
	Syntax(String),
}

impl From<regex::Error> for PatternError {
	fn from(err: regex::Error) -> Self {
		PatternError::Syntax(err.to_string())
	}
}

pub type PatternResult<T> = Result<T, PatternError>;

/// Error returned when a color format name is not one of the known formats.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown color format: {0}")]
pub struct UnknownColorFormat(pub String);
