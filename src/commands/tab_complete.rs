/// The word being completed, and what it may complete to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabComplete {
	partial: String,
	candidates: Vec<String>,
}


impl TabComplete {
	pub fn set<S, I, C>(&mut self, partial: S, candidates: I)
	where
		S: Into<String>,
		I: IntoIterator<Item = C>,
		C: Into<String>,
	{
		self.partial = partial.into();
		self.candidates = candidates.into_iter().map(Into::into).collect();
	}


	pub fn clear(&mut self) {
		self.partial.clear();
		self.candidates.clear();
	}


	/// The candidates starting with the partial word, sorted and without duplicates.
	pub fn matches(&self) -> Vec<String> {
		let mut matches: Vec<String> = self.candidates
			.iter()
			.filter(|candidate| candidate.starts_with(self.partial.as_str()))
			.cloned()
			.collect();

		matches.sort();
		matches.dedup();

		matches
	}
}
