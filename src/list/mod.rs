mod db;

use std::{cmp::Ordering, collections::BTreeMap};

pub use db::Db;


/// The column holding a row's stable identity.
pub const ROW_ID_KEY: &str = "id";


/// A single row in a list: column name to value.
pub type Row = BTreeMap<String, String>;


/// A named list of rows with a cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
	id: String,
	name: String,
	rows: Vec<Row>,
	visible_columns: Vec<String>,
	cursor: usize,
}


impl List {
	pub fn new(rows: Vec<Row>) -> Self {
		Self { rows, ..Self::default() }
	}


	pub fn id(&self) -> &str {
		&self.id
	}


	pub fn set_id<S: Into<String>>(&mut self, id: S) {
		self.id = id.into();
	}


	pub fn name(&self) -> &str {
		&self.name
	}


	pub fn set_name<S: Into<String>>(&mut self, name: S) {
		self.name = name.into();
	}


	pub fn len(&self) -> usize {
		self.rows.len()
	}


	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}


	pub fn row(&self, index: usize) -> Option<&Row> {
		self.rows.get(index)
	}


	/// The index of the row with the given id, if any.
	pub fn row_index(&self, id: &str) -> Option<usize> {
		self.rows
			.iter()
			.position(|row| row.get(ROW_ID_KEY).map(String::as_str) == Some(id))
	}


	pub fn cursor(&self) -> usize {
		self.cursor
	}


	/// The row under the cursor, or None if the list is empty.
	pub fn cursor_row(&self) -> Option<&Row> {
		self.row(self.cursor)
	}


	/// Place the cursor, clamped to the list.
	pub fn set_cursor(&mut self, index: usize) {
		self.cursor = index.min(self.len().saturating_sub(1));
	}


	/// Move the cursor by a signed delta, clamped to the list.
	pub fn move_cursor(&mut self, delta: isize) {
		let target = if delta < 0 {
			self.cursor.saturating_sub(delta.unsigned_abs())
		} else {
			self.cursor.saturating_add(delta as usize)
		};

		self.set_cursor(target);
	}


	/// All column names present in any row, sorted.
	pub fn column_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.rows
			.iter()
			.flat_map(|row| row.keys())
			.cloned()
			.collect();

		names.sort();
		names.dedup();
		names
	}


	pub fn visible_columns(&self) -> &[String] {
		&self.visible_columns
	}


	pub fn set_visible_columns<I, S>(&mut self, columns: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.visible_columns = columns
			.into_iter()
			.map(Into::into)
			.filter(|column: &String| !column.is_empty())
			.collect();
	}


	/// Sort the rows by the given columns. The first column is the most significant one.
	/// The sort is stable, and missing columns sort as empty values.
	pub fn sort<S: AsRef<str>>(&mut self, columns: &[S]) {
		fn value<'a>(row: &'a Row, column: &str) -> &'a str {
			row.get(column).map_or("", String::as_str)
		}

		self.rows.sort_by(
			|a, b| columns
				.iter()
				.map(|column| value(a, column.as_ref()).cmp(value(b, column.as_ref())))
				.find(|ordering| *ordering != Ordering::Equal)
				.unwrap_or(Ordering::Equal)
		);
	}
}
