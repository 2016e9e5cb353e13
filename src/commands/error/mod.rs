mod fmt;

use crate::{api::NotInList, input::Token, remote};


/// What the command was expecting instead of an unexpected token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
	End,
	Identifier,
	/// A cursor directive or number.
	CursorOffset,
}


/// The command that could not make sense of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
	Cursor,
	List,
}


/// A command error.
#[derive(Debug)]
pub enum Error {
	/// Unexpected token.
	Unexpected { token: Token, expected: Expected },
	/// An identifier that is neither a keyword nor a number.
	Unrecognized { subject: Subject, input: Box<str> },
	/// No command with this name.
	UnknownVerb(Box<str>),
	NoSongPlaying,
	/// The active list has no row under its cursor.
	NoRowSelected,
	SongNotInList,
	/// The command was recognized, but is not supported.
	NotImplemented(&'static str),
	Remote(remote::Error),
}


impl Error {
	/// Create an error signaling an unexpected token, and what was expected.
	pub fn unexpected(token: &Token, expected: Expected) -> Self {
		Self::Unexpected { token: token.clone(), expected }
	}


	pub fn unrecognized(subject: Subject, input: &str) -> Self {
		Self::Unrecognized { subject, input: input.into() }
	}


	pub fn unknown_verb(verb: &str) -> Self {
		Self::UnknownVerb(verb.into())
	}


	/// Whether the error happened before execution, while parsing.
	pub fn is_syntax(&self) -> bool {
		matches!(
			self,
			Self::Unexpected { .. } | Self::Unrecognized { .. } | Self::UnknownVerb(_)
		)
	}
}


impl From<remote::Error> for Error {
	fn from(error: remote::Error) -> Self {
		Self::Remote(error)
	}
}


impl From<NotInList> for Error {
	fn from(_: NotInList) -> Self {
		Self::SongNotInList
	}
}


impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Remote(error) => Some(error),
			_ => None,
		}
	}
}
