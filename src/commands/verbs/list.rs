use std::convert::TryFrom;

use super::{
	super::{expect_end, goto, Command, Context, Error, Expected, Subject, TabComplete},
	Verb,
};
use crate::{
	input::{Token, TokenClass},
	list::ROW_ID_KEY,
};


inventory::submit! { Verb { name: "list", new: List::boxed } }


const VERBS: &[&str] = &[
	"down",
	"duplicate",
	"end",
	"goto",
	"home",
	"next",
	"open",
	"prev",
	"previous",
	"remove",
	"up",
];


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
	Verb,
	/// Accumulating the name after `goto`.
	Name,
	Finished,
}


impl Default for State {
	fn default() -> Self {
		Self::Verb
	}
}


/// Navigates the cached lists, and loads named lists.
#[derive(Debug, Default)]
pub struct List {
	state: State,
	absolute: Option<usize>,
	relative: isize,
	duplicate: bool,
	remove: bool,
	open: bool,
	goto: Option<String>,
	tab_complete: TabComplete,
}


impl List {
	fn boxed() -> Box<dyn Command> {
		Box::new(Self::default())
	}


	fn verb(&mut self, verb: &str, context: &mut Context) -> Result<(), Error> {
		match verb {
			"duplicate" => self.duplicate = true,
			"remove" => self.remove = true,
			"up" | "prev" | "previous" => self.relative = -1,
			"down" | "next" => self.relative = 1,
			"home" => self.absolute = Some(0),
			"end" => self.absolute = context.api.db().len().checked_sub(1),
			"open" => self.open = true,
			"goto" => self.goto = Some(String::new()),
			position => {
				let position: isize = position
					.parse()
					.map_err(|_| Error::unrecognized(Subject::List, position))?;

				// Positions are one based.
				self.absolute = usize::try_from(position)
					.ok()
					.and_then(|position| position.checked_sub(1));
			}
		}

		Ok(())
	}

}


impl Command for List {
	fn parse(&mut self, token: &Token, context: &mut Context) -> Result<(), Error> {
		match self.state {
			State::Verb => {
				self.tab_complete.set(token.as_str(), VERBS.iter().copied());

				if token.class != TokenClass::Identifier {
					return Err(Error::unexpected(token, Expected::Identifier));
				}

				self.verb(token.as_str(), context)?;

				if self.goto.is_some() {
					self.tab_complete.set("", context.api.db().keys());
					self.state = State::Name;
				} else {
					self.tab_complete.clear();
					self.state = State::Finished;
				}

				Ok(())
			}

			State::Name => {
				if token.is_end() {
					self.state = State::Finished;
					return Ok(());
				}

				// The name may span several tokens, which are joined verbatim.
				let name = self.goto.get_or_insert_with(String::new);
				name.push_str(token.as_str());

				let partial = name.clone();
				self.tab_complete.set(partial, context.api.db().keys());

				Ok(())
			}

			State::Finished => expect_end(token),
		}
	}


	fn exec(&mut self, context: &mut Context) -> Result<(), Error> {
		if let Some(name) = &self.goto {
			goto(name, context)
		} else if self.open {
			let id = context.api
				.list()
				.cursor_row()
				.and_then(|row| row.get(ROW_ID_KEY))
				.cloned()
				.ok_or(Error::NoRowSelected)?;

			goto(&id, context)
		} else if self.relative != 0 {
			// The cache's current list is the active one.
			context.api.db_mut().move_cursor(self.relative);
			Ok(())
		} else if let Some(index) = self.absolute {
			context.api.db_mut().set_cursor(index);
			Ok(())
		} else if self.duplicate {
			Err(Error::NotImplemented("duplicate"))
		} else if self.remove {
			Err(Error::NotImplemented("remove"))
		} else {
			Ok(())
		}
	}


	fn tab_complete(&self) -> &TabComplete {
		&self.tab_complete
	}
}
