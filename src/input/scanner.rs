use super::lexer::{self, Token, TokenClass};


/// The token source for commands.
/// Comments are skipped, and the last scanned token may be pushed back once.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
	input: &'a str,
	offset: usize,
	last: Option<Token>,
	unscanned: bool,
}


impl<'a> Scanner<'a> {
	pub fn new(input: &'a str) -> Self {
		Self { input, offset: 0, last: None, unscanned: false }
	}


	/// Scan the next token. After END, this keeps returning END.
	pub fn scan(&mut self) -> Token {
		if self.unscanned {
			self.unscanned = false;
			if let Some(token) = &self.last {
				return token.clone();
			}
		}

		let token = loop {
			let (token, consumed) = lexer::next_token(&self.input[self.offset ..]);
			self.offset += consumed;

			// A comment runs to the end of the line, so the next token is END.
			if token.class != TokenClass::Comment {
				break token;
			}
		};

		self.last = Some(token.clone());
		token
	}


	/// Push the last scanned token back, so that the next scan returns it again.
	/// Only one token of lookahead is kept: unscanning twice is the same as once.
	pub fn unscan(&mut self) {
		self.unscanned = self.last.is_some();
	}


	/// Look at the next token without consuming it.
	pub fn peek(&mut self) -> Token {
		let token = self.scan();
		self.unscan();
		token
	}


	/// Whether the line ends in whitespace, meaning the user has finished typing the last word.
	pub fn ends_with_whitespace(&self) -> bool {
		self.input
			.as_bytes()
			.last()
			.map_or(false, u8::is_ascii_whitespace)
	}
}
