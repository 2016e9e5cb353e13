use std::fmt::{self, Display};

use super::{Error, Expected, Subject};
use crate::{
	fmt::sep_by,
	input::{Token, TokenClass},
};


/// The cursor directives suggested when none was given.
const CURSOR_HINTS: &[&str] = &["up", "down", "pgup", "pgdn", "home", "end", "current", "random", "<number>"];


/// Quote a token for messages. END has no text, so it is named instead.
struct Quoted<'a>(&'a Token);


impl<'a> Display for Quoted<'a> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.0.class {
			TokenClass::End => TokenClass::End.fmt(f),
			_ => write!(f, "'{}'", self.0),
		}
	}
}


impl Display for Expected {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::End => TokenClass::End.fmt(f),
			Self::Identifier => TokenClass::Identifier.fmt(f),
			Self::CursorOffset => {
				"cursor offset. Try one of: ".fmt(f)?;
				sep_by(CURSOR_HINTS.iter(), f, |hint, f| hint.fmt(f), ", ")
			}
		}
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Unexpected { token, expected } => {
				write!(f, "unexpected {}, expected {}", Quoted(token), expected)
			}

			Self::Unrecognized { subject: Subject::Cursor, input } => write!(
				f,
				"cannot move cursor: input '{}' is not recognized, and is not a number",
				input
			),

			Self::Unrecognized { subject: Subject::List, input } => write!(
				f,
				"cannot navigate lists: position '{}' is not recognized, and is not a number",
				input
			),

			Self::UnknownVerb(verb) => write!(f, "unknown command '{}'", verb),

			Self::NoSongPlaying => "no song is currently playing".fmt(f),

			Self::NoRowSelected => "no playlist selected".fmt(f),

			Self::SongNotInList => "the playing song is not in the current list".fmt(f),

			Self::NotImplemented(feature) => write!(f, "{} is not implemented", feature),

			Self::Remote(error) => error.fmt(f),
		}
	}
}
