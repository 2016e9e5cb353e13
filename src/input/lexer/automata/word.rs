use super::{Cursor, Root, State, Token, TokenClass, Transition};


/// The state for lexing identifiers.
/// Quoted and unquoted segments that touch each other are folded into a single word.
#[derive(Debug, Default)]
pub(super) struct Word {
	/// The parsed bytes, without quotes and escapes.
	value: Vec<u8>,
	/// Whether we are inside double quotes.
	quoted: bool,
	/// Whether the previous character was a backslash.
	escaping: bool,
}


impl Word {
	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// Escaped character.
			Some(c) if self.escaping => {
				self.value.push(c);
				self.escaping = false;
				Transition::step(self)
			}

			// Begin of escape sequence.
			Some(b'\\') => {
				self.escaping = true;
				Transition::step(self)
			}

			// Open or close a quoted segment.
			Some(b'"') => {
				self.quoted = !self.quoted;
				Transition::step(self)
			}

			// Quoted text keeps everything, whitespace included.
			Some(c) if self.quoted => {
				self.value.push(c);
				Transition::step(self)
			}

			// Word character.
			Some(c) if c.is_word() => {
				self.value.push(c);
				Transition::step(self)
			}

			// End of word. An unterminated quote is closed by EOF.
			_ => {
				let text = String::from_utf8_lossy(&self.value).into_owned();
				Transition::resume_produce(Root, Token::identifier(text))
			}
		}
	}
}


impl From<Word> for State {
	fn from(state: Word) -> State {
		State::Word(state)
	}
}


/// Helper trait for checking if a character is a valid word constituent.
pub trait IsWord {
	fn is_word(&self) -> bool;
}


impl IsWord for u8 {
	/// Anything but whitespace, comments, quotes, escapes and single character symbols.
	/// Non-ASCII bytes are word characters, so words never split a UTF-8 sequence.
	fn is_word(&self) -> bool {
		!self.is_ascii_whitespace()
			&& !matches!(self, b'#' | b'"' | b'\\')
			&& TokenClass::from_symbol(*self).is_none()
	}
}
