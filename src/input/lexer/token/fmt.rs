use std::fmt::{self, Display};

use super::{Token, TokenClass};


impl TokenClass {
	/// The name used for this class in messages.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Identifier => "identifier",
			Self::Separator => "separator",
			Self::Stop => "stop",
			Self::Open => "open",
			Self::Close => "close",
			Self::Variable => "variable",
			Self::Comment => "comment",
			Self::End => "END",
		}
	}
}


impl Display for TokenClass {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.name().fmt(f)
	}
}


impl Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.class {
			TokenClass::End => Ok(()),
			_ => self.text.fmt(f),
		}
	}
}
