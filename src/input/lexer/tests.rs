use super::*;

use assert_matches::assert_matches;


/// Lex the whole input by repeatedly slicing it, like the command scanner does.
fn lex(input: &str) -> Vec<(TokenClass, String)> {
	let mut tokens = Vec::new();
	let mut pos = 0;

	loop {
		let (token, consumed) = next_token(&input[pos ..]);
		pos += consumed;

		let end = token.is_end();
		tokens.push((token.class, token.to_string()));

		if end {
			assert_eq!(pos, input.len(), "END must consume the rest of the input");
			return tokens;
		}

		assert!(tokens.len() <= input.len() + 1, "lexer generated too many tokens");
	}
}


fn expected(tokens: &[(TokenClass, &str)]) -> Vec<(TokenClass, String)> {
	tokens
		.iter()
		.map(|(class, text)| (*class, text.to_string()))
		.collect()
}


#[test]
fn test_whitespace_separators_quotes_and_comments() {
	use TokenClass::*;

	assert_eq!(
		lex("we  shall\t te|st white\"space and $quoting\"; and # comments"),
		expected(&[
			(Identifier, "we"),
			(Identifier, "shall"),
			(Identifier, "te"),
			(Separator, "|"),
			(Identifier, "st"),
			(Identifier, "whitespace and $quoting"),
			(Stop, ";"),
			(Identifier, "and"),
			(Comment, "# comments"),
			(End, ""),
		])
	);
}


#[test]
fn test_variables_and_braces() {
	use TokenClass::*;

	assert_eq!(
		lex("$variables are {nice }}, ar{}en't $they?"),
		expected(&[
			(Variable, "$"),
			(Identifier, "variables"),
			(Identifier, "are"),
			(Open, "{"),
			(Identifier, "nice"),
			(Close, "}"),
			(Close, "}"),
			(Identifier, ","),
			(Identifier, "ar"),
			(Open, "{"),
			(Close, "}"),
			(Identifier, "en't"),
			(Variable, "$"),
			(Identifier, "they?"),
			(End, ""),
		])
	);
}


#[test]
fn test_unterminated_quote() {
	use TokenClass::*;

	assert_eq!(
		lex("$1$2 \"unter minated"),
		expected(&[
			(Variable, "$"),
			(Identifier, "1"),
			(Variable, "$"),
			(Identifier, "2"),
			(Identifier, "unter minated"),
			(End, ""),
		])
	);
}


#[test]
fn test_escapes_and_fused_segments() {
	use TokenClass::*;

	assert_eq!(
		lex(r#""a b"c d\"e "" f\ g\"#),
		expected(&[
			(Identifier, "a bc"),
			(Identifier, "d\"e"),
			(Identifier, ""),
			(Identifier, "f g"),
			(End, ""),
		])
	);
}


#[test]
fn test_non_ascii_words() {
	use TokenClass::*;

	assert_eq!(
		lex("goto Sigur Rós|ágætis"),
		expected(&[
			(Identifier, "goto"),
			(Identifier, "Sigur"),
			(Identifier, "Rós"),
			(Separator, "|"),
			(Identifier, "ágætis"),
			(End, ""),
		])
	);
}


#[test]
fn test_comment_stops_at_newline() {
	let (token, consumed) = next_token("  # one\ntwo");
	assert_eq!(token, Token::new(TokenClass::Comment, "# one"));
	assert_eq!(consumed, 7);

	let (token, _) = next_token(&"  # one\ntwo"[consumed ..]);
	assert_eq!(token, Token::identifier("two"));
}


#[test]
fn test_end_is_idempotent() {
	for _ in 0 .. 3 {
		assert_matches!(next_token(""), (Token { class: TokenClass::End, .. }, 0));
	}

	let (token, consumed) = next_token(" \t ");
	assert!(token.is_end());
	assert_eq!(consumed, 3);
	assert_eq!(next_token(&" \t "[consumed ..]), (Token::end(), 0));
}


#[test]
fn test_consumed_bytes_add_up() {
	let inputs = [
		"",
		"   ",
		"cursor down",
		"  list goto \"my list\"  ",
		"a;b|c{d}$e # trailing  ",
		"x\"unterminated   ",
	];

	for input in inputs.iter() {
		let lexer = Lexer::new(input);
		let mut consumed = lexer.clone();
		let tokens: Vec<Token> = lexer.collect();

		assert_matches!(tokens.last(), Some(Token { class: TokenClass::End, .. }));
		assert_eq!(tokens.iter().filter(|token| token.is_end()).count(), 1);

		consumed.by_ref().for_each(drop);
		assert_eq!(consumed.offset(), input.len(), "input: {:?}", input);
	}
}


#[test]
fn test_lexer_is_restartable() {
	let input = "list goto $name";
	let first: Vec<Token> = Lexer::new(input).collect();

	let mut lexer = Lexer::new(input);
	lexer.next();
	let rest: Vec<Token> = Lexer::new(&input[lexer.offset() ..]).collect();

	assert_eq!(&first[1 ..], &rest[..]);
	assert_eq!(Lexer::new(input).collect::<Vec<_>>(), first);
}


#[test]
fn test_end_displays_empty() {
	assert_eq!(Token::end().to_string(), "");
	assert_eq!(Token::identifier("up").to_string(), "up");
	assert_eq!(TokenClass::End.to_string(), "END");
}
