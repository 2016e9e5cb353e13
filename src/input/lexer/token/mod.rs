mod fmt;


/// All possible classes of token in a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
	Identifier,
	Separator, // |
	Stop,      // ;
	Open,      // {
	Close,     // }
	Variable,  // $
	Comment,   // # ...
	/// No more input on this line. Every token stream yields exactly one of these, last.
	End,
}


impl TokenClass {
	/// The single character tokens, if the given byte starts one.
	pub fn from_symbol(c: u8) -> Option<Self> {
		match c {
			b';' => Some(Self::Stop),
			b'|' => Some(Self::Separator),
			b'$' => Some(Self::Variable),
			b'{' => Some(Self::Open),
			b'}' => Some(Self::Close),
			_ => None,
		}
	}
}


/// A lexical token.
/// Variable tokens hold only the sigil. The name that follows is a separate identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
	pub class: TokenClass,
	pub text: String,
}


impl Token {
	pub fn new<S: Into<String>>(class: TokenClass, text: S) -> Self {
		Self { class, text: text.into() }
	}


	pub fn identifier<S: Into<String>>(text: S) -> Self {
		Self::new(TokenClass::Identifier, text)
	}


	pub fn end() -> Self {
		Self::new(TokenClass::End, String::new())
	}


	pub fn is_end(&self) -> bool {
		self.class == TokenClass::End
	}


	pub fn as_str(&self) -> &str {
		&self.text
	}
}
