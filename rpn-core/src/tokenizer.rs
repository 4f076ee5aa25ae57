// Line tokenizer for the text front end
//
// Tokens are whitespace separated. A `\` starts a comment that runs to the end
// of the line. A leading `'` forces a token to be read as a word.
use core::fmt;

// RUST CONCEPT: Source position for rich error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos {
    pub line: usize,
    pub column: usize,
    pub offset: usize, // Byte offset from start of input
}

impl SourcePos {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: SourcePos,
}

impl Token {
    pub fn new(kind: TokenKind, pos: SourcePos) -> Self {
        Self { kind, pos }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(String), // Keypad characters, fed to the engine one at a time
    Word(String),   // Dictionary lookup
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(s) => write!(f, "{}", s),
            TokenKind::Word(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

// Uppercase only: lowercase letters always name words, so `e` is the constant
fn is_number_char(ch: char) -> bool {
    matches!(ch, '0'..='9' | 'A'..='F' | '.' | '-')
}

fn classify(text: String) -> TokenKind {
    if let Some(word) = text.strip_prefix('\'') {
        return TokenKind::Word(word.to_string());
    }
    if text != "-" && text.chars().all(is_number_char) {
        TokenKind::Number(text)
    } else {
        TokenKind::Word(text)
    }
}

pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    let mut line = 1;
    let mut column = 1;
    let mut offset = 0;

    // Helper function to advance position tracking
    fn advance_pos(ch: char, line: &mut usize, column: &mut usize, offset: &mut usize) {
        if ch == '\n' {
            *line += 1;
            *column = 1;
        } else {
            *column += 1;
        }
        *offset += ch.len_utf8();
    }

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            advance_pos(ch, &mut line, &mut column, &mut offset);
            continue;
        }

        if ch == '\\' {
            // Skip comments - consume everything until newline
            while let Some(&c) = chars.peek() {
                if c == '\n' {
                    break;
                }
                chars.next();
                advance_pos(c, &mut line, &mut column, &mut offset);
            }
            continue;
        }

        let start = SourcePos::new(line, column, offset);
        let mut text = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_whitespace() || c == '\\' {
                break;
            }
            text.push(c);
            chars.next();
            advance_pos(c, &mut line, &mut column, &mut offset);
        }
        tokens.push(Token::new(classify(text), start));
    }

    tokens
}
