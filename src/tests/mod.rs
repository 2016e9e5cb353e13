//! Shared fixtures for unit tests.

use std::{cell::Cell, rc::Rc};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::{json, Value};

use crate::{
	api::Api,
	app::{App, Connector},
	commands::{interpreter, Context, Error},
	list::{List, Row, ROW_ID_KEY},
	options::Options,
	remote::{
		self,
		model::{Device, FeaturedPlaylists, FullPlaylist, FullTrack, Paging, PlaylistTrack, SavedTrack, SimplePlaylist},
		Client,
		DumpClient,
		Page,
	},
};


/// A client that counts the requests it serves.
pub struct Recording {
	inner: DumpClient,
	calls: Rc<Cell<usize>>,
}


impl Recording {
	fn record(&self) {
		self.calls.set(self.calls.get() + 1);
	}
}


impl Client for Recording {
	fn playlist(&mut self, id: &str) -> Result<FullPlaylist, remote::Error> {
		self.record();
		self.inner.playlist(id)
	}


	fn playlist_tracks(&mut self, id: &str, page: Page) -> Result<Paging<PlaylistTrack>, remote::Error> {
		self.record();
		self.inner.playlist_tracks(id, page)
	}


	fn current_users_playlists(&mut self, page: Page) -> Result<Paging<SimplePlaylist>, remote::Error> {
		self.record();
		self.inner.current_users_playlists(page)
	}


	fn featured_playlists(&mut self, page: Page) -> Result<FeaturedPlaylists, remote::Error> {
		self.record();
		self.inner.featured_playlists(page)
	}


	fn current_users_tracks(&mut self, page: Page) -> Result<Paging<SavedTrack>, remote::Error> {
		self.record();
		self.inner.current_users_tracks(page)
	}


	fn current_users_top_tracks(&mut self, page: Page) -> Result<Paging<FullTrack>, remote::Error> {
		self.record();
		self.inner.current_users_top_tracks(page)
	}


	fn devices(&mut self) -> Result<Vec<Device>, remote::Error> {
		self.record();
		self.inner.devices()
	}


	fn currently_playing(&mut self) -> Result<Option<FullTrack>, remote::Error> {
		self.record();
		self.inner.currently_playing()
	}
}


pub fn track(id: &str, artist: &str, title: &str, year: &str) -> Value {
	json!({
		"id": id,
		"name": title,
		"artists": [ { "name": artist } ],
		"album": { "name": format!("{} album", artist), "release_date": format!("{}-01-01", year) },
		"duration_ms": 185_000,
		"popularity": 40,
	})
}


pub fn playlist(id: &str, name: &str, owner: &str, tracks: usize) -> Value {
	json!({
		"id": id,
		"name": name,
		"owner": { "id": owner.to_lowercase(), "display_name": owner },
		"collaborative": false,
		"public": true,
		"tracks": { "total": tracks },
	})
}


/// A small library. The saved tracks span two pages, and Debaser is playing.
pub fn library() -> Value {
	let saved: Vec<Value> = (0 .. 60)
		.rev()
		.map(
			|ix| json!({
				"added_at": "2020-01-01T00:00:00Z",
				"track": track(
					&format!("saved{}", ix),
					&format!("Artist {:02}", ix % 7),
					&format!("Song {:02}", ix),
					"1999"
				),
			})
		)
		.collect();

	json!({
		"playlists": [
			playlist("roadtrip", "Road trip", "Alice", 3),
			playlist("focus", "Focus", "Bob", 0),
		],
		"featured": {
			"message": "Monday picks",
			"playlists": [ playlist("picks", "Picks", "Editors", 1) ],
		},
		"playlist_tracks": {
			"roadtrip": [
				{ "track": track("t1", "Weezer", "Buddy Holly", "1994") },
				{ "track": null },
				{ "track": track("t2", "Pixies", "Debaser", "1989") },
			],
			"focus": [],
		},
		"saved_tracks": saved,
		// Ranked by the service, not by any column.
		"top_tracks": [
			track("t1", "Weezer", "Buddy Holly", "1994"),
			track("t2", "Pixies", "Debaser", "1989"),
			track("t3", "ABBA", "Waterloo", "1974"),
		],
		"devices": [
			{ "id": "d1", "name": "Kitchen", "type": "Speaker", "is_active": true, "volume_percent": 30 },
		],
		"playing": track("t2", "Pixies", "Debaser", "1989"),
	})
}


/// A list with the given id and number of rows.
pub fn list(id: &str, rows: usize) -> List {
	let rows = (0 .. rows)
		.map(
			|ix| {
				let mut row = Row::new();
				row.insert(ROW_ID_KEY.into(), format!("{}-{}", id, ix));
				row.insert("title".into(), format!("Song {}", ix));
				row
			}
		)
		.collect();

	let mut list = List::new(rows);
	list.set_id(id);
	list.set_name(format!("List {}", id));
	list
}


/// An application connected to a recording client, with a fixed seed.
pub struct Fixture {
	pub app: App,
	pub rng: ChaCha8Rng,
	/// How many remote requests were made.
	pub calls: Rc<Cell<usize>>,
}


impl Fixture {
	pub fn new() -> Self {
		Self::with_library(library())
	}


	pub fn with_library(library: Value) -> Self {
		let calls = Rc::new(Cell::new(0));
		let counter = calls.clone();

		let connect: Connector = Box::new(
			move || -> Result<Box<dyn Client>, remote::Error> {
				let inner = DumpClient::from_reader(library.to_string().as_bytes())?;
				Ok(Box::new(Recording { inner, calls: counter.clone() }))
			}
		);

		Self::with_connector(connect, calls)
	}


	/// An application that cannot authenticate.
	pub fn offline() -> Self {
		let connect: Connector = Box::new(
			|| -> Result<Box<dyn Client>, remote::Error> { Err(remote::Error::NotAuthenticated) }
		);
		Self::with_connector(connect, Rc::new(Cell::new(0)))
	}


	/// An offline application whose cache holds lists with the given ids.
	/// The last one is active.
	pub fn with_cached(ids: &[&str]) -> Self {
		let mut fixture = Self::offline();

		for id in ids {
			fixture.app.set_list(list(id, 3));
		}

		fixture
	}


	fn with_connector(connect: Connector, calls: Rc<Cell<usize>>) -> Self {
		let app = App::new(Options::default(), connect).expect("default options are valid");

		Self { app, rng: ChaCha8Rng::seed_from_u64(0x5eed), calls }
	}


	pub fn run<F, T>(&mut self, f: F) -> T
	where
		F: FnOnce(&mut Context) -> T,
	{
		let mut context = Context::new(&mut self.app, &mut self.rng);
		f(&mut context)
	}


	pub fn execute(&mut self, line: &str) -> Result<(), Error> {
		self.run(|context| interpreter::execute(line, context))
	}


	pub fn complete(&mut self, line: &str) -> Vec<String> {
		self.run(|context| interpreter::complete(line, context))
	}


	/// The songlist widget's cursor.
	pub fn cursor(&self) -> usize {
		self.app.list().cursor()
	}
}
