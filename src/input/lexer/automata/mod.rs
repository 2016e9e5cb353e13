mod comment;
mod root;
mod word;

use self::{comment::Comment, root::Root, word::Word};
use super::{Cursor, Token, TokenClass};


/// The transition to be made after a character in the input has been visited.
#[derive(Debug)]
struct Transition {
	/// The next state.
	state: State,
	/// Whether to consume the visited input character.
	consume: bool,
	/// The produced token, if any.
	output: Option<Token>,
}


impl Transition {
	/// Consume the character while updating the machine state, but not producing a token
	/// yet.
	pub fn step<S: Into<State>>(state: S) -> Self {
		Self { state: state.into(), consume: true, output: None }
	}

	/// Consume the input character and produce a token.
	pub fn produce<S: Into<State>>(state: S, token: Token) -> Self {
		Self { state: state.into(), consume: true, output: Some(token) }
	}

	/// Don't consume the input character, updating the machine state instead.
	pub fn resume<S: Into<State>>(state: S) -> Self {
		Self { state: state.into(), consume: false, output: None }
	}

	/// Don't consume the input character, but produce a token.
	pub fn resume_produce<S: Into<State>>(state: S, token: Token) -> Self {
		Self { state: state.into(), consume: false, output: Some(token) }
	}
}


/// All states in the automata.
#[derive(Debug)]
enum State {
	Root(Root),
	Comment(Comment),
	Word(Word),
}


impl Default for State {
	fn default() -> Self {
		Root.into()
	}
}


impl State {
	pub fn visit(self, cursor: &Cursor) -> Transition {
		match self {
			State::Root(state) => state.visit(cursor),
			State::Comment(state) => state.visit(cursor),
			State::Word(state) => state.visit(cursor),
		}
	}
}


/// The automata instance. It lives for a single token only, which is what keeps
/// `next_token` free of hidden state.
#[derive(Debug)]
pub(super) struct Automata<'a> {
	state: State,
	cursor: Cursor<'a>,
}


impl<'a> Automata<'a> {
	pub fn new(cursor: Cursor<'a>) -> Self {
		Self { state: State::default(), cursor }
	}


	/// Run the machine until it produces a token, returning the token and how many bytes
	/// were consumed to produce it.
	pub fn run(mut self) -> (Token, usize) {
		loop {
			// We must temporarily take the state so that we can consume it.
			let state = std::mem::take(&mut self.state);

			let transition = state.visit(&self.cursor);

			self.state = transition.state;

			if transition.consume {
				self.cursor.step();
			}

			// Every state produces on EOF without consuming, so this always terminates.
			if let Some(token) = transition.output {
				return (token, self.cursor.offset());
			}
		}
	}
}
