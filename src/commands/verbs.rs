automod::dir!("src/commands/verbs");

use super::Command;


/// A registered command, constructed fresh for every statement.
pub struct Verb {
	pub name: &'static str,
	pub new: fn() -> Box<dyn Command>,
}


/// Instantiate the command for the given verb.
pub fn lookup(name: &str) -> Option<Box<dyn Command>> {
	inventory::iter::<Verb>
		.into_iter()
		.find(|verb| verb.name == name)
		.map(|verb| (verb.new)())
}


/// All verb names, sorted.
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<&'static str> = inventory::iter::<Verb>
		.into_iter()
		.map(|verb| verb.name)
		.collect();

	names.sort_unstable();

	names
}


inventory::collect!(Verb);
