pub mod convert;
mod dump;
mod error;
pub mod model;
#[cfg(test)]
mod tests;

pub use dump::DumpClient;
pub use error::Error;
use model::{Device, FeaturedPlaylists, FullPlaylist, FullTrack, Paging, PlaylistTrack, SavedTrack, SimplePlaylist};


/// Reserved list ids that name parts of the user's library instead of a playlist.
pub mod library {
	pub const MY_PLAYLISTS: &str = "my-playlists";
	pub const FEATURED_PLAYLISTS: &str = "featured-playlists";
	pub const MY_TRACKS: &str = "my-tracks";
	pub const TOP_TRACKS: &str = "top-tracks";
	pub const DEVICES: &str = "devices";
}


/// Which slice of a listing to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
	pub limit: usize,
	pub offset: usize,
}


impl Page {
	pub fn first(limit: usize) -> Self {
		Self { limit, offset: 0 }
	}
}


/// An authenticated client for the remote music service.
pub trait Client {
	fn playlist(&mut self, id: &str) -> Result<FullPlaylist, Error>;

	fn playlist_tracks(&mut self, id: &str, page: Page) -> Result<Paging<PlaylistTrack>, Error>;

	fn current_users_playlists(&mut self, page: Page) -> Result<Paging<SimplePlaylist>, Error>;

	fn featured_playlists(&mut self, page: Page) -> Result<FeaturedPlaylists, Error>;

	fn current_users_tracks(&mut self, page: Page) -> Result<Paging<SavedTrack>, Error>;

	fn current_users_top_tracks(&mut self, page: Page) -> Result<Paging<FullTrack>, Error>;

	fn devices(&mut self) -> Result<Vec<Device>, Error>;

	/// The track playing on the user's active device, if any.
	fn currently_playing(&mut self) -> Result<Option<FullTrack>, Error>;
}
