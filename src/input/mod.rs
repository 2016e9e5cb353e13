pub mod lexer;
mod scanner;

pub use lexer::{Lexer, Token, TokenClass};
pub use scanner::Scanner;
