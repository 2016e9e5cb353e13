use serde::Deserialize;


/// A page of a remote listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Paging<T> {
	pub items: Vec<T>,
	#[serde(default)]
	pub total: usize,
	#[serde(default)]
	pub offset: usize,
	/// The location of the next page, if there is one.
	#[serde(default)]
	pub next: Option<String>,
}


#[derive(Debug, Clone, Deserialize)]
pub struct User {
	pub id: String,
	#[serde(default)]
	pub display_name: Option<String>,
}


impl User {
	/// The display name, falling back to the user id.
	pub fn name(&self) -> &str {
		self.display_name.as_deref().unwrap_or(&self.id)
	}
}


#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackCount {
	pub total: usize,
}


#[derive(Debug, Clone, Deserialize)]
pub struct SimplePlaylist {
	pub id: String,
	pub name: String,
	pub owner: User,
	#[serde(default)]
	pub collaborative: bool,
	#[serde(default)]
	pub public: Option<bool>,
	#[serde(default)]
	pub tracks: TrackCount,
}


#[derive(Debug, Clone, Deserialize)]
pub struct FullPlaylist {
	pub id: String,
	pub name: String,
	pub owner: User,
	#[serde(default)]
	pub description: Option<String>,
}


#[derive(Debug, Clone, Deserialize)]
pub struct SimpleArtist {
	#[serde(default)]
	pub id: Option<String>,
	pub name: String,
}


#[derive(Debug, Clone, Deserialize)]
pub struct SimpleAlbum {
	#[serde(default)]
	pub id: Option<String>,
	pub name: String,
	#[serde(default)]
	pub release_date: String,
}


#[derive(Debug, Clone, Deserialize)]
pub struct FullTrack {
	/// Local files have no id.
	#[serde(default)]
	pub id: Option<String>,
	pub name: String,
	pub artists: Vec<SimpleArtist>,
	pub album: SimpleAlbum,
	pub duration_ms: u64,
	#[serde(default)]
	pub popularity: u32,
}


#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrack {
	#[serde(default)]
	pub added_at: Option<String>,
	/// Removed tracks show up as null.
	pub track: Option<FullTrack>,
}


#[derive(Debug, Clone, Deserialize)]
pub struct SavedTrack {
	pub added_at: String,
	pub track: FullTrack,
}


#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedPlaylists {
	pub message: String,
	pub playlists: Paging<SimplePlaylist>,
}


#[derive(Debug, Clone, Deserialize)]
pub struct Device {
	#[serde(default)]
	pub id: Option<String>,
	pub name: String,
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(default)]
	pub is_active: bool,
	#[serde(default)]
	pub volume_percent: Option<u32>,
}
