use super::{verbs, Command, Context, Error, Expected};
use crate::input::{Scanner, Token, TokenClass};


/// What to do with a statement once it has been parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
	Execute,
	Check,
}


/// Parse and execute every statement in a line.
/// The first failing statement aborts the rest of the line.
pub fn execute(line: &str, context: &mut Context) -> Result<(), Error> {
	run(line, context, Mode::Execute)
}


/// Parse every statement in a line, without executing any.
pub fn check(line: &str, context: &mut Context) -> Result<(), Error> {
	run(line, context, Mode::Check)
}


fn run(line: &str, context: &mut Context, mode: Mode) -> Result<(), Error> {
	let mut scanner = Scanner::new(line);

	loop {
		let token = scanner.scan();

		match token.class {
			TokenClass::End => return Ok(()),

			// Empty statement.
			TokenClass::Stop => continue,

			TokenClass::Identifier => {
				let mut command = verbs::lookup(token.as_str())
					.ok_or_else(|| Error::unknown_verb(token.as_str()))?;

				parse_statement(command.as_mut(), &mut scanner, context)?;

				if mode == Mode::Execute {
					command.exec(context)?;
				}
			}

			_ => return Err(Error::unexpected(&token, Expected::Identifier)),
		}
	}
}


/// Feed the tokens of one statement to a command, up to and including its END.
/// A stop ends the statement, and is given to the command as END.
fn parse_statement(
	command: &mut dyn Command,
	scanner: &mut Scanner,
	context: &mut Context,
) -> Result<(), Error> {
	loop {
		let token = statement_token(scanner.scan());
		command.parse(&token, context)?;

		if token.is_end() {
			return Ok(());
		}
	}
}


fn statement_token(token: Token) -> Token {
	match token.class {
		TokenClass::Stop => Token::end(),
		_ => token,
	}
}


/// Completion candidates for the last word of a line. Nothing is executed.
pub fn complete(line: &str, context: &mut Context) -> Vec<String> {
	let mut scanner = Scanner::new(line);

	loop {
		let verb = scanner.scan();

		let more = match verb.class {
			TokenClass::End => return names_matching(""),

			TokenClass::Stop => continue,

			TokenClass::Identifier => {
				// The verb itself is still being typed.
				if scanner.peek().is_end() && !scanner.ends_with_whitespace() {
					return names_matching(verb.as_str());
				}

				match verbs::lookup(verb.as_str()) {
					Some(mut command) => {
						let more = feed_statement(command.as_mut(), &mut scanner, context);

						if !more {
							return command.tab_complete().matches();
						}

						true
					}

					None => skip_statement(&mut scanner),
				}
			}

			_ => skip_statement(&mut scanner),
		};

		if !more {
			return Vec::new();
		}
	}
}


/// Feed one statement to a command until it fails, consuming the statement's tokens.
/// Returns whether another statement follows.
fn feed_statement(command: &mut dyn Command, scanner: &mut Scanner, context: &mut Context) -> bool {
	let mut failed = false;

	loop {
		let token = scanner.scan();
		let stop = token.class == TokenClass::Stop;
		let token = statement_token(token);

		if !failed {
			failed = command.parse(&token, context).is_err();
		}

		if token.is_end() {
			return stop;
		}
	}
}


/// Consume the rest of a statement. Returns whether another statement follows.
fn skip_statement(scanner: &mut Scanner) -> bool {
	loop {
		match scanner.scan().class {
			TokenClass::Stop => return true,
			TokenClass::End => return false,
			_ => (),
		}
	}
}


fn names_matching(partial: &str) -> Vec<String> {
	verbs::names()
		.into_iter()
		.filter(|name| name.starts_with(partial))
		.map(str::to_owned)
		.collect()
}
