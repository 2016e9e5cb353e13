use std::fmt::{self, Display};

use crate::{
	list::{Db, List, Row},
	options::Options,
	remote::{self, Client},
};


/// The song is not in the list shown by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotInList;


impl Display for NotInList {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		"the song is not in the current list".fmt(f)
	}
}


impl std::error::Error for NotInList {}


/// The widget showing the active list.
pub trait SonglistWidget {
	/// The widget's size, as (width, height).
	fn size(&self) -> (usize, usize);

	/// How many rows the shown list has.
	fn len(&self) -> usize;

	fn cursor_to_song(&mut self, song: &Row) -> Result<(), NotInList>;

	/// Move the cursor by a signed delta. The widget clamps it.
	fn move_cursor(&mut self, delta: isize);

	fn set_cursor(&mut self, index: usize);
}


/// The part of the application that commands operate on.
pub trait Api {
	fn songlist_widget(&mut self) -> &mut dyn SonglistWidget;

	/// The song currently playing, if any.
	fn song(&self) -> Option<&Row>;

	/// The cache of named lists.
	fn db(&self) -> &Db;

	fn db_mut(&mut self) -> &mut Db;

	/// The active list.
	fn list(&self) -> &List;

	/// Make the given list the active one.
	fn set_list(&mut self, list: List);

	fn options(&self) -> &Options;

	/// The remote client, authenticating on first use.
	fn client(&mut self) -> Result<&mut dyn Client, remote::Error>;
}
