use std::{
	fmt::{self, Display},
	io,
};


/// An error loading or reading options.
#[derive(Debug)]
pub enum Error {
	Io(io::Error),
	Json(serde_json::Error),
	/// An option has a value of the wrong type.
	InvalidValue { key: Box<str>, value: Box<str> },
}


impl Error {
	pub fn invalid_value(key: &str, value: &str) -> Self {
		Self::InvalidValue { key: key.into(), value: value.into() }
	}
}


impl From<io::Error> for Error {
	fn from(error: io::Error) -> Self {
		Self::Io(error)
	}
}


impl From<serde_json::Error> for Error {
	fn from(error: serde_json::Error) -> Self {
		Self::Json(error)
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Io(error) => write!(f, "cannot read options: {}", error),
			Self::Json(error) => write!(f, "invalid options file: {}", error),
			Self::InvalidValue { key, value } => write!(f, "invalid value for option '{}': '{}'", key, value),
		}
	}
}


impl std::error::Error for Error {}
