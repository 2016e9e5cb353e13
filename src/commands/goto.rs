use std::time::Instant;

use super::{Context, Error};
use crate::{
	list::List,
	remote::{self, convert, library, Client},
};


/// The page size for remote requests. Whole listings are fetched, so the largest page
/// the service allows means the fewest round trips.
const LIMIT: usize = 50;


/// How a fetched list should be presented.
enum Layout {
	/// A list of tracks, shown with the configured columns.
	Tracks { sort: bool },
	/// Any other list, showing every column it has.
	AllColumns,
}


/// Load a named list and make it the active one.
/// Cached lists are used when present, and the remote service is only queried on a miss.
pub fn goto(id: &str, context: &mut Context) -> Result<(), Error> {
	if let Some(list) = context.api.db().list(id).cloned() {
		log::debug!("Using cached list {}", id);
		context.api.set_list(list);
		return Ok(());
	}

	let started = Instant::now();

	let (mut list, layout) = {
		let client = context.api.client()?;
		fetch(client, id)?
	};

	log::debug!(
		"Retrieved {} with {} items in {:?}",
		id,
		list.len(),
		started.elapsed()
	);

	match layout {
		Layout::Tracks { sort } => {
			let options = context.api.options();
			if sort {
				list.sort(&options.get_list("sort"));
			}
			list.set_visible_columns(options.get_list("columns"));
		}

		Layout::AllColumns => list.set_visible_columns(list.column_names()),
	}

	log::info!("Loaded {}.", list.name());

	list.set_cursor(0);
	context.api.set_list(list);

	Ok(())
}


fn fetch(client: &mut dyn Client, id: &str) -> Result<(List, Layout), remote::Error> {
	match id {
		library::MY_PLAYLISTS => {
			let playlists = convert::collect_pages(
				LIMIT,
				|page| client.current_users_playlists(page)
			)?;

			let mut list = convert::playlists(&playlists);
			list.set_name("My playlists");
			list.set_id(id);

			Ok((list, Layout::AllColumns))
		}

		library::FEATURED_PLAYLISTS => {
			let mut message = String::new();
			let playlists = convert::collect_pages(
				LIMIT,
				|page| {
					let featured = client.featured_playlists(page)?;
					message = featured.message;
					Ok(featured.playlists)
				}
			)?;

			let mut list = convert::playlists(&playlists);
			list.set_name(message);
			list.set_id(id);

			Ok((list, Layout::AllColumns))
		}

		library::MY_TRACKS => {
			let saved = convert::collect_pages(
				LIMIT,
				|page| client.current_users_tracks(page)
			)?;

			let mut list = convert::tracks(saved.iter().map(|saved| &saved.track));
			list.set_name("Saved tracks");
			list.set_id(id);

			Ok((list, Layout::Tracks { sort: true }))
		}

		library::TOP_TRACKS => {
			let tracks = convert::collect_pages(
				LIMIT,
				|page| client.current_users_top_tracks(page)
			)?;

			let mut list = convert::tracks(&tracks);
			list.set_name("Top tracks");
			list.set_id(id);

			Ok((list, Layout::Tracks { sort: false }))
		}

		library::DEVICES => {
			let devices = client.devices()?;

			let mut list = convert::devices(&devices);
			list.set_name("Devices");
			list.set_id(id);

			Ok((list, Layout::AllColumns))
		}

		_ => {
			let playlist = client.playlist(id)?;
			let entries = convert::collect_pages(
				LIMIT,
				|page| client.playlist_tracks(id, page)
			)?;

			// Tracks removed from the service show up as empty entries.
			let mut list = convert::tracks(
				entries.iter().filter_map(|entry| entry.track.as_ref())
			);
			list.set_name(format!("{} by {}", playlist.name, playlist.owner.name()));
			list.set_id(id);

			Ok((list, Layout::Tracks { sort: false }))
		}
	}
}
