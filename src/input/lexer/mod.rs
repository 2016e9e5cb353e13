mod automata;
mod cursor;
#[cfg(test)]
mod tests;
mod token;

use automata::Automata;
pub use cursor::Cursor;
pub use token::{Token, TokenClass};


/// Lex the next token from the given input.
/// Returns the token and the number of bytes it consumed, leading whitespace included.
/// Callers continue by slicing the input past the consumed bytes. On an input that is
/// empty or only whitespace, this always returns END.
pub fn next_token(input: &str) -> (Token, usize) {
	Automata::new(Cursor::from(input)).run()
}


/// The lexer for command lines.
/// Yields every token up to and including END, then stops.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
	input: &'a str,
	offset: usize,
	finished: bool,
}


impl<'a> Lexer<'a> {
	pub fn new(input: &'a str) -> Self {
		Self { input, offset: 0, finished: false }
	}


	/// How many bytes of the input have been consumed.
	pub fn offset(&self) -> usize {
		self.offset
	}
}


impl<'a> Iterator for Lexer<'a> {
	type Item = Token;

	fn next(&mut self) -> Option<Token> {
		if self.finished {
			return None;
		}

		let (token, consumed) = next_token(&self.input[self.offset ..]);
		self.offset += consumed;
		self.finished = token.is_end();

		Some(token)
	}
}
