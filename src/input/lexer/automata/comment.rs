use super::{Cursor, Root, State, Token, TokenClass, Transition};


/// The state for lexing comments.
/// A comment runs to the end of the line, so it is the last token before END.
#[derive(Debug)]
pub(super) struct Comment {
	start_offset: usize,
}


impl Comment {
	pub fn at(cursor: &Cursor) -> Self {
		Self { start_offset: cursor.offset() }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// Newline or EOF marks the end of the comment.
			Some(b'\n') | None => {
				let text = String::from_utf8_lossy(cursor.slice_from(self.start_offset));
				Transition::resume_produce(Root, Token::new(TokenClass::Comment, text))
			}

			// Otherwise, eat everything.
			_ => Transition::step(self),
		}
	}
}


impl From<Comment> for State {
	fn from(state: Comment) -> State {
		State::Comment(state)
	}
}
