use super::{Comment, Cursor, State, Token, TokenClass, Transition, Word};


/// The top level lexer state.
#[derive(Debug)]
pub(super) struct Root;


impl Root {
	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// Whitespace.
			Some(c) if c.is_ascii_whitespace() => Transition::step(self),

			// Comments. The hash is part of the comment text.
			Some(b'#') => Transition::resume(Comment::at(cursor)),

			// Single character symbols.
			Some(c) => match TokenClass::from_symbol(c) {
				Some(class) => Transition::produce(self, Token::new(class, char::from(c).to_string())),

				// Identifiers, including quoted ones.
				None => Transition::resume(Word::default()),
			},

			// Eof. Nothing is consumed, so lexing the remainder again yields END again.
			None => Transition::resume_produce(self, Token::end()),
		}
	}
}


impl From<Root> for State {
	fn from(state: Root) -> State {
		State::Root(state)
	}
}
