use crate::{
	api::{Api, NotInList, SonglistWidget},
	list::{Db, List, Row, ROW_ID_KEY},
	options::{self, Options},
	remote::{self, convert, Client},
};


/// Establishes a session with the remote service.
pub type Connector = Box<dyn FnMut() -> Result<Box<dyn Client>, remote::Error>>;


/// The dimensions of the headless songlist widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
	width: usize,
	height: usize,
}


/// The application state commands operate on.
/// The active list is the cache's current list, so cursor positions survive list switches.
pub struct App {
	view: Viewport,
	db: Db,
	/// Shown while the cache is empty.
	empty: List,
	playing: Option<Row>,
	options: Options,
	client: Option<Box<dyn Client>>,
	connect: Connector,
}


impl App {
	pub fn new(options: Options, connect: Connector) -> Result<Self, options::Error> {
		let height = options.get_usize("height")?;

		Ok(Self {
			view: Viewport { width: 80, height },
			db: Db::new(),
			empty: List::default(),
			playing: None,
			options,
			client: None,
			connect,
		})
	}


	/// Whether a remote session has been established.
	pub fn is_connected(&self) -> bool {
		self.client.is_some()
	}


	/// Ask the remote service what is playing. Without a session, nothing is.
	pub fn refresh_playing(&mut self) -> Result<(), remote::Error> {
		self.playing = match self.client.as_mut() {
			Some(client) => client
				.currently_playing()?
				.as_ref()
				.map(convert::track_row),
			None => None,
		};

		Ok(())
	}
}


impl SonglistWidget for App {
	fn size(&self) -> (usize, usize) {
		(self.view.width, self.view.height)
	}


	fn len(&self) -> usize {
		self.list().len()
	}


	fn cursor_to_song(&mut self, song: &Row) -> Result<(), NotInList> {
		let list = self.db.current_mut().ok_or(NotInList)?;

		let index = song
			.get(ROW_ID_KEY)
			.and_then(|id| list.row_index(id))
			.ok_or(NotInList)?;

		list.set_cursor(index);

		Ok(())
	}


	fn move_cursor(&mut self, delta: isize) {
		if let Some(list) = self.db.current_mut() {
			list.move_cursor(delta)
		}
	}


	fn set_cursor(&mut self, index: usize) {
		if let Some(list) = self.db.current_mut() {
			list.set_cursor(index)
		}
	}
}


impl Api for App {
	fn songlist_widget(&mut self) -> &mut dyn SonglistWidget {
		self
	}


	fn song(&self) -> Option<&Row> {
		self.playing.as_ref()
	}


	fn db(&self) -> &Db {
		&self.db
	}


	fn db_mut(&mut self) -> &mut Db {
		&mut self.db
	}


	fn list(&self) -> &List {
		self.db.current().unwrap_or(&self.empty)
	}


	/// The list is cached, and becomes the cache's current list.
	fn set_list(&mut self, list: List) {
		let index = self.db.insert(list);
		self.db.set_cursor(index);
	}


	fn options(&self) -> &Options {
		&self.options
	}


	fn client(&mut self) -> Result<&mut dyn Client, remote::Error> {
		if self.client.is_none() {
			let client = (self.connect)()?;
			log::debug!("Connected to the remote service");
			self.client = Some(client);
		}

		match self.client.as_mut() {
			Some(client) => Ok(&mut **client),
			None => Err(remote::Error::NotAuthenticated),
		}
	}
}
