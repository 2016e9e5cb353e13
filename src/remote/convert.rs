use super::{
	model::{Device, FullTrack, Paging, SimplePlaylist},
	Error,
	Page,
};
use crate::list::{List, Row, ROW_ID_KEY};


/// Request pages of the given size until the listing is complete.
pub fn collect_pages<T, F>(limit: usize, mut fetch: F) -> Result<Vec<T>, Error>
where
	F: FnMut(Page) -> Result<Paging<T>, Error>,
{
	let mut items = Vec::new();
	let mut page = Page::first(limit);

	loop {
		let paging = fetch(page)?;
		let received = paging.items.len();

		items.reserve(paging.total.saturating_sub(items.len()));
		items.extend(paging.items);

		// An empty page with a next link would loop forever.
		if paging.next.is_none() || received == 0 {
			return Ok(items);
		}

		page.offset = paging.offset + received;
	}
}


fn row<'a, I>(columns: I) -> Row
where
	I: IntoIterator<Item = (&'a str, String)>,
{
	columns
		.into_iter()
		.map(|(key, value)| (key.to_owned(), value))
		.collect()
}


/// Format a duration as m:ss.
fn duration(ms: u64) -> String {
	let seconds = ms / 1000;
	format!("{}:{:02}", seconds / 60, seconds % 60)
}


pub fn track_row(track: &FullTrack) -> Row {
	let artists: Vec<&str> = track.artists
		.iter()
		.map(|artist| artist.name.as_str())
		.collect();

	let year = track.album.release_date
		.get(.. 4)
		.unwrap_or_default()
		.to_owned();

	row(vec![
		(ROW_ID_KEY, track.id.clone().unwrap_or_default()),
		("artist", artists.join(", ")),
		("title", track.name.clone()),
		("album", track.album.name.clone()),
		("year", year),
		("time", duration(track.duration_ms)),
		("popularity", track.popularity.to_string()),
	])
}


pub fn playlist_row(playlist: &SimplePlaylist) -> Row {
	row(vec![
		(ROW_ID_KEY, playlist.id.clone()),
		("name", playlist.name.clone()),
		("owner", playlist.owner.name().to_owned()),
		("tracks", playlist.tracks.total.to_string()),
		("public", playlist.public.unwrap_or(false).to_string()),
		("collaborative", playlist.collaborative.to_string()),
	])
}


pub fn device_row(device: &Device) -> Row {
	row(vec![
		(ROW_ID_KEY, device.id.clone().unwrap_or_default()),
		("deviceName", device.name.clone()),
		("type", device.kind.clone()),
		("active", device.is_active.to_string()),
		("volume", device.volume_percent.map(|volume| volume.to_string()).unwrap_or_default()),
	])
}


pub fn tracks<'a, I>(tracks: I) -> List
where
	I: IntoIterator<Item = &'a FullTrack>,
{
	List::new(tracks.into_iter().map(track_row).collect())
}


pub fn playlists<'a, I>(playlists: I) -> List
where
	I: IntoIterator<Item = &'a SimplePlaylist>,
{
	List::new(playlists.into_iter().map(playlist_row).collect())
}


pub fn devices<'a, I>(devices: I) -> List
where
	I: IntoIterator<Item = &'a Device>,
{
	List::new(devices.into_iter().map(device_row).collect())
}
