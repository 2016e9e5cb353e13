use std::{ffi::OsString, path::PathBuf};

use clap::{clap_app, crate_authors, crate_version, crate_description};


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
	Help(Box<str>),
	Version(Box<str>),
	Run(Args)
}


#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Args {
	/// JSON file with option overrides.
	pub config: Option<PathBuf>,
	/// Library dump serving remote requests.
	pub library: Option<PathBuf>,
	/// Option overrides, applied over the config file.
	pub set: Vec<(String, String)>,
	/// Parse lines, but don't execute them.
	pub check: bool,
	/// Print the tokens of each line.
	pub tokens: bool,
	/// Print completion candidates for each line.
	pub complete: bool,
}


pub fn parse<A, T>(args: A) -> clap::Result<Command>
where
	A: IntoIterator<Item = T>,
	T: Into<OsString> + Clone
{
	let app = clap_app!(
		Songline =>
			(version: crate_version!())
			(author: crate_authors!())
			(about: crate_description!())
			(@arg config: -c --config +takes_value "Read options from a JSON file.")
			(@arg library: -l --library +takes_value "Serve remote lists from a library dump.")
			(@arg set: -s --set +takes_value +multiple "Override an option, as KEY=VALUE.")
			(@arg check: --check "Only parse the input lines instead of executing them.")
			(@arg tokens: --tokens conflicts_with[check complete] "Print the tokens of each line.")
			(@arg complete: --complete conflicts_with[check] "Print completion candidates for each line.")
	);

	match app.get_matches_from_safe(args) {
		Ok(matches) => Ok(
			Command::Run(
				Args {
					config: matches.value_of_os("config").map(PathBuf::from),
					library: matches.value_of_os("library").map(PathBuf::from),
					set: matches
						.values_of("set")
						.into_iter()
						.flatten()
						.map(parse_override)
						.collect::<clap::Result<_>>()?,
					check: matches.is_present("check"),
					tokens: matches.is_present("tokens"),
					complete: matches.is_present("complete"),
				}
			)
		),

		Err(error) => match error.kind {
			clap::ErrorKind::HelpDisplayed => Ok(
				Command::Help(error.message.into_boxed_str())
			),
			clap::ErrorKind::VersionDisplayed => Ok(
				Command::Version(error.message.into_boxed_str())
			),
			_ => Err(error)
		}
	}
}


/// Split a KEY=VALUE option override.
fn parse_override(arg: &str) -> clap::Result<(String, String)> {
	match arg.find('=') {
		Some(ix) => Ok((arg[.. ix].to_owned(), arg[ix + 1 ..].to_owned())),
		None => Err(
			clap::Error::with_description(
				&format!("invalid option override '{}', expected KEY=VALUE", arg),
				clap::ErrorKind::InvalidValue,
			)
		),
	}
}
