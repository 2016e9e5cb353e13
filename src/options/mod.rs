mod error;

use std::{collections::BTreeMap, fs::File, io, path::Path};

pub use error::Error;


/// The default option values.
const DEFAULTS: &[(&str, &str)] = &[
	("columns", "artist,title,album,year,time,popularity"),
	("height", "20"),
	("sort", "artist,album,year,title"),
];


/// A string key-value store of user options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options(BTreeMap<String, String>);


impl Options {
	/// Get an option, or the empty string if it is not set.
	pub fn get_string(&self, key: &str) -> &str {
		self.0
			.get(key)
			.map_or("", String::as_str)
	}


	/// Get a comma separated option as a list of its non-empty items.
	pub fn get_list(&self, key: &str) -> Vec<&str> {
		self.get_string(key)
			.split(',')
			.map(str::trim)
			.filter(|item| !item.is_empty())
			.collect()
	}


	/// Get a numeric option.
	pub fn get_usize(&self, key: &str) -> Result<usize, Error> {
		let value = self.get_string(key);
		value
			.parse()
			.map_err(|_| Error::invalid_value(key, value))
	}


	pub fn set<K, V>(&mut self, key: K, value: V)
	where
		K: Into<String>,
		V: Into<String>,
	{
		self.0.insert(key.into(), value.into());
	}


	/// Read options from a reader containing a JSON object of strings, overriding the
	/// defaults.
	pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, Error> {
		let overrides: BTreeMap<String, String> = serde_json::from_reader(reader)?;

		let mut options = Self::default();
		options.0.extend(overrides);

		Ok(options)
	}


	/// Read options from a JSON file.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
		let file = File::open(path)?;
		Self::from_reader(io::BufReader::new(file))
	}
}


impl Default for Options {
	fn default() -> Self {
		Self(
			DEFAULTS
				.iter()
				.map(|(key, value)| (key.to_string(), value.to_string()))
				.collect()
		)
	}
}
