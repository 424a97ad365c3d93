use crate::{
    lexer::{Token, TokenKind},
    parser::{
        ast::{AstNode, Statement},
        end_of_input, FromTokens, ParseError, ParseState,
    },
};

/// A braced sequence of statements with its own scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl FromTokens<Token> for Block {
    fn parse(tokens: &mut ParseState<Token>) -> Result<AstNode, ParseError> {
        tokens.next();

        let mut statements = vec![];

        loop {
            match tokens.peek() {
                Some(Token {
                    kind: TokenKind::RightBrace,
                    ..
                }) => {
                    tokens.next();
                    return Ok(Block { statements }.into());
                }
                None
                | Some(Token {
                    kind: TokenKind::Eof,
                    ..
                }) => {
                    return Err(ParseError::at_end("Expect '}' .", end_of_input(tokens)));
                }
                _ => {
                    let result = Statement::parse(tokens)?;
                    let AstNode::Statement(statement) = result else {
                        unreachable!()
                    };
                    statements.push(statement);
                }
            }
        }
    }
}

impl From<Block> for AstNode {
    fn from(value: Block) -> Self {
        AstNode::Block(value)
    }
}
