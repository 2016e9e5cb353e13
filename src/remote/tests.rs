use assert_matches::assert_matches;

use super::*;
use crate::tests as fixtures;


fn client() -> DumpClient {
	DumpClient::from_reader(fixtures::library().to_string().as_bytes()).expect("invalid library")
}


#[test]
fn test_collect_pages_follows_next() {
	let mut client = client();
	let mut requested = Vec::new();

	let saved = convert::collect_pages(
		25,
		|page| {
			requested.push(page);
			client.current_users_tracks(page)
		}
	).expect("paging failed");

	assert_eq!(saved.len(), 60);
	assert_eq!(
		requested,
		[
			Page { limit: 25, offset: 0 },
			Page { limit: 25, offset: 25 },
			Page { limit: 25, offset: 50 },
		]
	);
}


#[test]
fn test_collect_pages_stops_on_empty_page() {
	let mut requests = 0;

	let items: Vec<u32> = convert::collect_pages(
		10,
		|_| {
			requests += 1;
			Ok(model::Paging { items: Vec::new(), total: 5, offset: 0, next: Some("more".into()) })
		}
	).expect("paging failed");

	assert!(items.is_empty());
	assert_eq!(requests, 1);
}


#[test]
fn test_collect_pages_propagates_errors() {
	let mut client = client();

	assert_matches!(
		convert::collect_pages(50, |page| client.playlist_tracks("missing", page)),
		Err(Error::NotFound(ref id)) if &**id == "missing"
	);
}


#[test]
fn test_track_rows() {
	let mut client = client();
	let page = client.playlist_tracks("roadtrip", Page::first(50)).expect("no such playlist");

	let tracks: Vec<&model::FullTrack> = page.items
		.iter()
		.filter_map(|entry| entry.track.as_ref())
		.collect();
	let list = convert::tracks(tracks);

	assert_eq!(list.len(), 2);

	let row = list.row(0).expect("empty list");
	assert_eq!(row["id"], "t1");
	assert_eq!(row["artist"], "Weezer");
	assert_eq!(row["title"], "Buddy Holly");
	assert_eq!(row["album"], "Weezer album");
	assert_eq!(row["year"], "1994");
	assert_eq!(row["time"], "3:05");
	assert_eq!(row["popularity"], "40");
}


#[test]
fn test_playlist_and_device_rows() {
	let mut client = client();

	let playlists = client.current_users_playlists(Page::first(1)).expect("no playlists");
	assert_eq!(playlists.total, 2);
	assert!(playlists.next.is_some());

	let list = convert::playlists(&playlists.items);
	assert_eq!(
		list.column_names(),
		["collaborative", "id", "name", "owner", "public", "tracks"]
	);
	let row = list.row(0).expect("empty list");
	assert_eq!(row["owner"], "Alice");
	assert_eq!(row["tracks"], "3");

	let devices = client.devices().expect("no devices");
	let list = convert::devices(&devices);
	let row = list.row(0).expect("empty list");
	assert_eq!(row["deviceName"], "Kitchen");
	assert_eq!(row["type"], "Speaker");
	assert_eq!(row["active"], "true");
	assert_eq!(row["volume"], "30");
}


#[test]
fn test_dump_playlist_lookup() {
	let mut client = client();

	let playlist = client.playlist("picks").expect("featured playlists are known");
	assert_eq!(playlist.name, "Picks");
	assert_eq!(playlist.owner.name(), "Editors");

	assert_matches!(client.playlist("nope"), Err(Error::NotFound(_)));
	assert_eq!(client.playlist("nope").map(|_| ()).unwrap_err().to_string(), "'nope' was not found");
}


#[test]
fn test_dump_rejects_malformed_library() {
	assert_matches!(DumpClient::from_reader(&b"{ \"playlists\": 3 }"[..]), Err(Error::Json(_)));
	assert_matches!(DumpClient::open("/nonexistent/library.json"), Err(Error::Io(_)));
}


#[test]
fn test_missing_display_name_falls_back_to_id() {
	let user: model::User = serde_json::from_str(r#"{ "id": "carol" }"#).expect("invalid user");
	assert_eq!(user.name(), "carol");
}


#[test]
fn test_dump_currently_playing() {
	let playing = client().currently_playing().expect("request failed");
	assert_matches!(playing, Some(ref track) if track.id.as_deref() == Some("t2"));

	let mut idle = DumpClient::from_reader("{}".as_bytes()).expect("invalid library");
	assert_matches!(idle.currently_playing(), Ok(None));
}
