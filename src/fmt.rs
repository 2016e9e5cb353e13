/// Format a sequence of items with a separator.
pub fn sep_by<T, I, F, S>(
	mut iter: I,
	f: &mut std::fmt::Formatter,
	mut format: F,
	separator: S,
) -> std::fmt::Result
where
	I: Iterator<Item = T>,
	F: FnMut(T, &mut std::fmt::Formatter) -> std::fmt::Result,
	S: std::fmt::Display,
{
	if let Some(item) = iter.next() {
		format(item, f)?;
	}

	for item in iter {
		separator.fmt(f)?;
		format(item, f)?;
	}

	Ok(())
}


/// Format a sequence of items with a separator into a string.
pub fn join<I, T>(iter: I, separator: &str) -> String
where
	I: IntoIterator<Item = T>,
	T: std::fmt::Display,
{
	let mut string = String::new();

	for (ix, item) in iter.into_iter().enumerate() {
		if ix > 0 {
			string.push_str(separator);
		}
		string.push_str(&item.to_string());
	}

	string
}
