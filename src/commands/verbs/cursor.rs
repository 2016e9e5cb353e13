use rand::Rng;

use super::{
	super::{expect_end, Command, Context, Error, Expected, Subject, TabComplete},
	Verb,
};
use crate::input::{Token, TokenClass};


inventory::submit! { Verb { name: "cursor", new: Cursor::boxed } }


const DIRECTIVES: &[&str] = &[
	"up",
	"down",
	"pgup",
	"pageup",
	"pgdn",
	"pagedn",
	"pagedown",
	"home",
	"end",
	"current",
	"random",
];


/// Moves the cursor in the songlist widget, either by a named directive or by a relative
/// number of rows.
#[derive(Debug, Default)]
pub struct Cursor {
	relative: isize,
	absolute: usize,
	current: bool,
	finished: bool,
	tab_complete: TabComplete,
}


impl Cursor {
	fn boxed() -> Box<dyn Command> {
		Box::new(Self::default())
	}


	fn directive(&mut self, directive: &str, context: &mut Context) -> Result<(), Error> {
		let widget = context.api.songlist_widget();

		match directive {
			"up" => self.relative = -1,
			"down" => self.relative = 1,
			"pgup" | "pageup" => self.relative = -(widget.size().1 as isize),
			"pgdn" | "pagedn" | "pagedown" => self.relative = widget.size().1 as isize,
			"home" => self.absolute = 0,
			"end" => self.absolute = widget.len().saturating_sub(1),
			"current" => self.current = true,
			"random" => {
				// An empty list keeps the default target.
				let len = widget.len();
				if len > 0 {
					self.absolute = context.rng.gen_range(0 .. len);
				}
			}
			number => {
				self.relative = number
					.parse()
					.map_err(|_| Error::unrecognized(Subject::Cursor, number))?;
			}
		}

		Ok(())
	}
}


impl Command for Cursor {
	fn parse(&mut self, token: &Token, context: &mut Context) -> Result<(), Error> {
		if self.finished {
			return expect_end(token);
		}

		match token.class {
			TokenClass::Identifier => {
				self.tab_complete.set(token.as_str(), DIRECTIVES.iter().copied());
				self.directive(token.as_str(), context)?;
				self.tab_complete.clear();
				self.finished = true;
				Ok(())
			}

			_ => {
				self.tab_complete.set("", DIRECTIVES.iter().copied());
				Err(Error::unexpected(token, Expected::CursorOffset))
			}
		}
	}


	fn exec(&mut self, context: &mut Context) -> Result<(), Error> {
		if self.current {
			let song = context.api
				.song()
				.cloned()
				.ok_or(Error::NoSongPlaying)?;

			context.api.songlist_widget().cursor_to_song(&song)?;
		} else if self.relative != 0 {
			context.api.songlist_widget().move_cursor(self.relative);
		} else {
			context.api.songlist_widget().set_cursor(self.absolute);
		}

		Ok(())
	}


	fn tab_complete(&self) -> &TabComplete {
		&self.tab_complete
	}
}

