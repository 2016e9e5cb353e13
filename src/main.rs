mod api;
mod app;
mod args;
mod commands;
mod fmt;
mod input;
mod list;
mod options;
mod remote;
mod term;
#[cfg(test)]
mod tests;

use std::{
	io::{self, BufRead},
	time::{SystemTime, UNIX_EPOCH},
};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use api::Api;
use app::{App, Connector};
use args::{Args, Command};
use commands::{interpreter, Context};
use input::Lexer;
use options::Options;
use remote::{Client, DumpClient};
use term::color;


fn main() -> ! {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let command = match args::parse(std::env::args_os()) {
		Ok(command) => command,
		Err(error) => {
			eprint!("{}", error);
			std::process::exit(1)
		}
	};

	let result = match command {
		Command::Run(args) => run(args),
		Command::Help(msg) | Command::Version(msg) => {
			println!("{}", msg);
			std::process::exit(0)
		},
	};

	let exit_code = match result {
		Ok(code) => code,
		Err(error) => {
			eprintln!("{}: {}", color::Fg(color::Red, "Error"), error);
			1
		}
	};

	std::process::exit(exit_code)
}


fn run(args: Args) -> Result<i32, Box<dyn std::error::Error>> {
	let mut options = match &args.config {
		Some(path) => Options::load(path)?,
		None => Options::default(),
	};

	for (key, value) in &args.set {
		options.set(key.as_str(), value.as_str());
	}

	// Sessions are established on the first remote request.
	let library = args.library.clone();
	let connect: Connector = Box::new(
		move || -> Result<Box<dyn Client>, remote::Error> {
			match &library {
				Some(path) => Ok(Box::new(DumpClient::open(path)?)),
				None => Err(remote::Error::NotAuthenticated),
			}
		}
	);

	let mut app = App::new(options, connect)?;
	let mut rng = ChaCha8Rng::seed_from_u64(seed());
	let colored = termion::is_tty(&io::stdout());

	let mut failed = false;

	for line in io::stdin().lock().lines() {
		let line = line?;

		if args.tokens {
			let mut lexer = Lexer::new(&line);
			// Each token is printed with the byte offset where it ends.
			while let Some(token) = lexer.next() {
				println!("{}\t{}\t{}", lexer.offset(), token.class, token);
			}
			continue;
		}

		// Only an established session is asked, so that idle lines never authenticate.
		if let Err(error) = app.refresh_playing() {
			log::warn!("Failed to query the playing song: {}", error);
		}

		let mut context = Context::new(&mut app, &mut rng);

		if args.complete {
			println!("{}", fmt::join(interpreter::complete(&line, &mut context), " "));
			continue;
		}

		let result = if args.check {
			interpreter::check(&line, &mut context)
		} else {
			interpreter::execute(&line, &mut context)
		};

		match result {
			Ok(()) if args.check => (),

			Ok(()) => print_status(&app, colored),

			Err(error) => {
				failed = true;
				let label = if error.is_syntax() { "Syntax error" } else { "Error" };
				eprintln!(
					"{}: {}",
					color::Maybe { color: color::Red, value: label, enabled: colored },
					error
				);
			}
		}
	}

	if app.is_connected() {
		log::debug!("Closing the remote session");
	}

	Ok(if failed { 1 } else { 0 })
}


/// Print the active list's position in the cache and the row under its cursor.
fn print_status(app: &App, colored: bool) {
	let db = app.db();
	let list = app.list();

	let position = |cursor: usize, empty: bool| if empty { 0 } else { cursor + 1 };

	println!(
		"{} {}/{} [list {}/{}]",
		color::Maybe { color: color::Green, value: list.name(), enabled: colored },
		position(list.cursor(), list.is_empty()),
		list.len(),
		position(db.cursor(), db.current().is_none()),
		db.len(),
	);

	if let Some(row) = list.cursor_row().filter(|_| !list.visible_columns().is_empty()) {
		let values = list
			.visible_columns()
			.iter()
			.map(|column| row.get(column).map_or("", String::as_str));

		println!("\t{}", fmt::join(values, " | "));
	}
}


/// Seed for the random cursor directive.
fn seed() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|elapsed| elapsed.as_nanos() as u64)
		.unwrap_or_default()
}
