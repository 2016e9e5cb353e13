mod error;
mod goto;
pub mod interpreter;
mod tab_complete;
pub mod verbs;

use rand::RngCore;

use crate::{api::Api, input::Token};
pub use error::{Error, Expected, Subject};
pub use goto::goto;
pub use tab_complete::TabComplete;


/// The capabilities a command may use while parsing and executing.
pub struct Context<'a> {
	pub api: &'a mut dyn Api,
	/// Source of randomness for directives such as `random`.
	pub rng: &'a mut dyn RngCore,
}


impl<'a> Context<'a> {
	pub fn new(api: &'a mut dyn Api, rng: &'a mut dyn RngCore) -> Self {
		Self { api, rng }
	}
}


/// A command that consumes the tokens of a line, and then executes an action.
pub trait Command {
	/// Consume the next token. This is called once per token, including the final END.
	/// Tokens after the command has enough input are errors, except for END.
	fn parse(&mut self, token: &Token, context: &mut Context) -> Result<(), Error>;

	/// Apply the parsed action. Called once, after END has been parsed.
	fn exec(&mut self, context: &mut Context) -> Result<(), Error>;

	/// The completion state published while parsing.
	fn tab_complete(&self) -> &TabComplete;
}


/// Accept only the end of input.
pub fn expect_end(token: &Token) -> Result<(), Error> {
	if token.is_end() {
		Ok(())
	} else {
		Err(Error::unexpected(token, Expected::End))
	}
}
