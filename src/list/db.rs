use super::List;


/// The cache of named lists, with a cursor selecting the current one.
#[derive(Debug, Clone, Default)]
pub struct Db {
	lists: Vec<List>,
	cursor: usize,
}


impl Db {
	pub fn new() -> Self {
		Self::default()
	}


	pub fn len(&self) -> usize {
		self.lists.len()
	}


	/// The ids of all cached lists, in insertion order.
	pub fn keys(&self) -> Vec<String> {
		self.lists
			.iter()
			.map(|list| list.id().to_owned())
			.collect()
	}


	/// Find a cached list by id, falling back to the display name.
	pub fn list(&self, name: &str) -> Option<&List> {
		self.lists
			.iter()
			.find(|list| list.id() == name)
			.or_else(|| self.lists.iter().find(|list| list.name() == name))
	}


	/// Cache a list, replacing any list with the same id.
	/// Returns the list's position in the cache.
	pub fn insert(&mut self, list: List) -> usize {
		match self.lists.iter().position(|cached| cached.id() == list.id()) {
			Some(index) => {
				self.lists[index] = list;
				index
			}

			None => {
				self.lists.push(list);
				self.lists.len() - 1
			}
		}
	}


	pub fn cursor(&self) -> usize {
		self.cursor
	}


	/// The list under the cursor, or None if the cache is empty.
	pub fn current(&self) -> Option<&List> {
		self.lists.get(self.cursor)
	}


	pub fn current_mut(&mut self) -> Option<&mut List> {
		self.lists.get_mut(self.cursor)
	}


	pub fn set_cursor(&mut self, index: usize) {
		self.cursor = index.min(self.len().saturating_sub(1));
	}


	pub fn move_cursor(&mut self, delta: isize) {
		let target = if delta < 0 {
			self.cursor.saturating_sub(delta.unsigned_abs())
		} else {
			self.cursor.saturating_add(delta as usize)
		};

		self.set_cursor(target);
	}
}
