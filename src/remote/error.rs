use std::{
	fmt::{self, Display},
	io,
};


/// A failure talking to the remote music service.
#[derive(Debug)]
pub enum Error {
	/// No session could be established.
	NotAuthenticated,
	/// The requested object does not exist.
	NotFound(Box<str>),
	Io(io::Error),
	Json(serde_json::Error),
}


impl Error {
	pub fn not_found(id: &str) -> Self {
		Self::NotFound(id.into())
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
			Self::NotAuthenticated => "not authenticated".fmt(f),
			Self::NotFound(id) => write!(f, "'{}' was not found", id),
			Self::Io(error) => write!(f, "i/o error: {}", error),
			Self::Json(error) => write!(f, "invalid response: {}", error),
		}
	}
}


impl std::error::Error for Error {}
