use std::{collections::HashMap, fs::File, io, path::Path};

use serde::Deserialize;

use super::{
	model::{
		Device,
		FeaturedPlaylists,
		FullPlaylist,
		FullTrack,
		Paging,
		PlaylistTrack,
		SavedTrack,
		SimplePlaylist,
	},
	Client,
	Error,
	Page,
};


#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Featured {
	message: String,
	playlists: Vec<SimplePlaylist>,
}


/// A snapshot of a user's library, as stored on disk.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Library {
	playlists: Vec<SimplePlaylist>,
	featured: Featured,
	/// Playlist contents, keyed by playlist id.
	playlist_tracks: HashMap<String, Vec<PlaylistTrack>>,
	saved_tracks: Vec<SavedTrack>,
	top_tracks: Vec<FullTrack>,
	devices: Vec<Device>,
	playing: Option<FullTrack>,
}


impl Library {
	fn find_playlist(&self, id: &str) -> Option<&SimplePlaylist> {
		self.playlists
			.iter()
			.chain(self.featured.playlists.iter())
			.find(|playlist| playlist.id == id)
	}
}


/// A client serving a library dump, paging it like the remote service would.
#[derive(Debug, Default)]
pub struct DumpClient {
	library: Library,
}


impl DumpClient {
	pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, Error> {
		let library = serde_json::from_reader(reader)?;
		Ok(Self { library })
	}


	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
		let path = path.as_ref();
		let client = Self::from_reader(io::BufReader::new(File::open(path)?))?;

		log::info!(
			"Opened library {} with {} playlists",
			path.display(),
			client.library.playlists.len()
		);

		Ok(client)
	}
}


/// Slice a page out of the given items.
fn paginate<T: Clone>(items: &[T], page: Page) -> Paging<T> {
	let start = page.offset.min(items.len());
	let end = start.saturating_add(page.limit).min(items.len());

	let next = if end < items.len() {
		Some(format!("offset={}&limit={}", end, page.limit))
	} else {
		None
	};

	Paging {
		items: items[start .. end].to_vec(),
		total: items.len(),
		offset: start,
		next,
	}
}


impl Client for DumpClient {
	fn playlist(&mut self, id: &str) -> Result<FullPlaylist, Error> {
		let playlist = self.library
			.find_playlist(id)
			.ok_or_else(|| Error::not_found(id))?;

		Ok(FullPlaylist {
			id: playlist.id.clone(),
			name: playlist.name.clone(),
			owner: playlist.owner.clone(),
			description: None,
		})
	}


	fn playlist_tracks(&mut self, id: &str, page: Page) -> Result<Paging<PlaylistTrack>, Error> {
		self.library
			.playlist_tracks
			.get(id)
			.map(|tracks| paginate(tracks, page))
			.ok_or_else(|| Error::not_found(id))
	}


	fn current_users_playlists(&mut self, page: Page) -> Result<Paging<SimplePlaylist>, Error> {
		Ok(paginate(&self.library.playlists, page))
	}


	fn featured_playlists(&mut self, page: Page) -> Result<FeaturedPlaylists, Error> {
		Ok(FeaturedPlaylists {
			message: self.library.featured.message.clone(),
			playlists: paginate(&self.library.featured.playlists, page),
		})
	}


	fn current_users_tracks(&mut self, page: Page) -> Result<Paging<SavedTrack>, Error> {
		Ok(paginate(&self.library.saved_tracks, page))
	}


	fn current_users_top_tracks(&mut self, page: Page) -> Result<Paging<FullTrack>, Error> {
		Ok(paginate(&self.library.top_tracks, page))
	}


	fn devices(&mut self) -> Result<Vec<Device>, Error> {
		Ok(self.library.devices.clone())
	}


	fn currently_playing(&mut self) -> Result<Option<FullTrack>, Error> {
		Ok(self.library.playing.clone())
	}
}
