/// A cursor over the remaining bytes of a command line.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	input: &'a [u8],
	offset: usize,
}


impl<'a> Cursor<'a> {
	/// How many bytes have been consumed so far.
	pub fn offset(&self) -> usize {
		self.offset
	}


	pub fn is_eof(&self) -> bool {
		self.offset == self.input.len()
	}


	pub fn peek(&self) -> Option<u8> {
		self.input.get(self.offset).copied()
	}


	/// The consumed input between `start` and the current offset.
	pub fn slice_from(&self, start: usize) -> &'a [u8] {
		&self.input[start .. self.offset]
	}


	pub fn step(&mut self) {
		if !self.is_eof() {
			self.offset += 1;
		}
	}
}


impl<'a> From<&'a [u8]> for Cursor<'a> {
	fn from(input: &'a [u8]) -> Self {
		Self { input, offset: 0 }
	}
}


impl<'a> From<&'a str> for Cursor<'a> {
	fn from(input: &'a str) -> Self {
		Self::from(input.as_bytes())
	}
}
