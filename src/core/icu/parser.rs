use super::{ArgumentFormat, Element, MessageSyntaxError, SelectorCase, SimpleKind};

type ParseResult<T> = Result<T, MessageSyntaxError>;

/// Parse message-format text into elements.
///
/// Whitespace in literal text is kept as written; whitespace between the
/// tokens of an argument, and around plural/select option bodies, is not
/// significant.
pub fn parse(text: &str) -> ParseResult<Vec<Element>> {
    let mut parser = Parser { src: text, pos: 0 };
    let elements = parser.parse_message(false)?;
    if parser.pos < text.len() {
        return Err(parser.error("unexpected `}`"));
    }
    Ok(elements)
}

/// A decoded `\\` escape.
enum Escape {
    Char(char),
    /// `\\#`, which stays distinct from a literal backslash.
    Hash,
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

fn is_ws(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn is_control(c: char) -> bool {
    (c <= '\u{1f}' && !is_ws(c)) || c == '\u{7f}'
}

/// Characters that end an argument name.
fn ends_argument_name(c: char) -> bool {
    is_ws(c) || matches!(c, ',' | '.' | '+' | '=' | '{' | '}' | '#')
}

impl<'a> Parser<'a> {
    fn error(&self, message: impl Into<String>) -> MessageSyntaxError {
        MessageSyntaxError::new(self.pos, message)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(is_ws) {
            self.bump();
        }
    }

    fn expect(&mut self, expected: char) -> ParseResult<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected `{}` but found `{}`", expected, c))),
            None => Err(self.error(format!("expected `{}` but reached end of message", expected))),
        }
    }

    /// Parse a sequence of text and arguments.
    ///
    /// A nested message stops in front of its closing `}`; the top level
    /// stops at the end of input, or at a stray `}` that the caller reports.
    fn parse_message(&mut self, nested: bool) -> ParseResult<Vec<Element>> {
        let mut elements = Vec::new();
        let mut text = String::new();

        loop {
            match self.peek() {
                None => {
                    if nested {
                        return Err(self.error("expected `}` but reached end of message"));
                    }
                    break;
                }
                Some('}') => break,
                Some('{') => {
                    if !text.is_empty() {
                        elements.push(Element::Text(std::mem::take(&mut text)));
                    }
                    elements.push(self.parse_argument()?);
                }
                Some('\\') => match self.parse_escape()? {
                    Escape::Char(c) => text.push(c),
                    Escape::Hash => {
                        if !text.is_empty() {
                            elements.push(Element::Text(std::mem::take(&mut text)));
                        }
                        elements.push(Element::EscapedHash);
                    }
                },
                Some(c) if is_control(c) => {
                    return Err(self.error(format!("unexpected control character U+{:04X}", c as u32)));
                }
                Some(c) => {
                    text.push(c);
                    self.bump();
                }
            }
        }

        if !text.is_empty() {
            elements.push(Element::Text(text));
        }
        Ok(elements)
    }

    fn parse_escape(&mut self) -> ParseResult<Escape> {
        let start = self.pos;
        self.bump();
        let c = match self.bump() {
            Some('#') => return Ok(Escape::Hash),
            Some(c @ ('{' | '}' | '\\')) => c,
            Some('u') => {
                let hex = self.src.get(self.pos..self.pos + 4).filter(|h| {
                    h.len() == 4 && h.chars().all(|c| c.is_ascii_hexdigit())
                });
                let decoded = hex
                    .and_then(|h| u32::from_str_radix(h, 16).ok())
                    .and_then(char::from_u32);
                match decoded {
                    Some(c) => {
                        self.pos += 4;
                        c
                    }
                    None => {
                        return Err(MessageSyntaxError::new(start, "invalid unicode escape"));
                    }
                }
            }
            _ => return Err(MessageSyntaxError::new(start, "invalid escape sequence")),
        };
        Ok(Escape::Char(c))
    }

    /// Read a run of `chars`: text characters up to whitespace or a brace.
    fn parse_chars(&mut self) -> ParseResult<String> {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if is_ws(c) || c == '{' || c == '}' {
                break;
            }
            if c == '\\' {
                match self.parse_escape()? {
                    Escape::Char(c) => out.push(c),
                    Escape::Hash => out.push('#'),
                }
                continue;
            }
            if is_control(c) {
                return Err(self.error(format!("unexpected control character U+{:04X}", c as u32)));
            }
            out.push(c);
            self.bump();
        }
        Ok(out)
    }

    fn parse_argument(&mut self) -> ParseResult<Element> {
        self.expect('{')?;
        self.skip_ws();

        let start = self.pos;
        while self.peek().is_some_and(|c| !ends_argument_name(c)) {
            self.bump();
        }
        if self.pos == start {
            return Err(self.error("expected argument name"));
        }
        let id = self.src[start..self.pos].to_string();

        self.skip_ws();
        let format = if self.peek() == Some(',') {
            self.bump();
            self.skip_ws();
            Some(self.parse_format()?)
        } else {
            None
        };

        self.skip_ws();
        self.expect('}')?;
        Ok(Element::Argument { id, format })
    }

    fn parse_format(&mut self) -> ParseResult<ArgumentFormat> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.bump();
        }
        let keyword = &self.src[start..self.pos];

        let simple = match keyword {
            "number" => Some(SimpleKind::Number),
            "date" => Some(SimpleKind::Date),
            "time" => Some(SimpleKind::Time),
            _ => None,
        };
        if let Some(kind) = simple {
            self.skip_ws();
            let style = if self.peek() == Some(',') {
                self.bump();
                self.skip_ws();
                let style = self.parse_chars()?;
                if style.is_empty() {
                    return Err(self.error("expected argument style"));
                }
                Some(style)
            } else {
                None
            };
            return Ok(ArgumentFormat::Simple { kind, style });
        }

        match keyword {
            "plural" | "selectordinal" => {
                self.skip_ws();
                self.expect(',')?;
                self.skip_ws();
                let offset = self.parse_offset()?;
                let options = self.parse_options()?;
                Ok(ArgumentFormat::Plural {
                    ordinal: keyword == "selectordinal",
                    offset,
                    options,
                })
            }
            "select" => {
                self.skip_ws();
                self.expect(',')?;
                let options = self.parse_options()?;
                Ok(ArgumentFormat::Select { options })
            }
            "" => Err(MessageSyntaxError::new(start, "expected argument type")),
            other => Err(MessageSyntaxError::new(
                start,
                format!("unknown argument type `{}`", other),
            )),
        }
    }

    fn parse_offset(&mut self) -> ParseResult<u64> {
        if !self.src[self.pos..].starts_with("offset:") {
            return Ok(0);
        }
        self.pos += "offset:".len();
        self.skip_ws();
        let digits = self.parse_number()?;
        digits
            .parse()
            .map_err(|_| self.error("offset is out of range"))
    }

    /// `0` or a digit sequence without a leading zero.
    fn parse_number(&mut self) -> ParseResult<String> {
        let start = self.pos;
        if self.peek() == Some('0') {
            self.bump();
        } else {
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
            }
        }
        if self.pos == start {
            return Err(self.error("expected a number"));
        }
        Ok(self.src[start..self.pos].to_string())
    }

    fn parse_options(&mut self) -> ParseResult<Vec<SelectorCase>> {
        let mut options = Vec::new();
        loop {
            self.skip_ws();
            match self.peek() {
                Some('}') | None => break,
                _ => options.push(self.parse_option()?),
            }
        }
        if options.is_empty() {
            return Err(self.error("expected at least one option"));
        }
        Ok(options)
    }

    fn parse_option(&mut self) -> ParseResult<SelectorCase> {
        let selector = if self.peek() == Some('=') {
            self.bump();
            format!("={}", self.parse_number()?)
        } else {
            self.parse_chars()?
        };
        if selector.is_empty() {
            return Err(self.error("expected option selector"));
        }

        self.skip_ws();
        self.expect('{')?;
        let mut value = self.parse_message(true)?;
        self.expect('}')?;
        trim_elements(&mut value);

        Ok(SelectorCase { selector, value })
    }
}

/// Strip insignificant whitespace at both ends of an option body.
fn trim_elements(elements: &mut Vec<Element>) {
    if let Some(Element::Text(first)) = elements.first_mut() {
        let trimmed = first.trim_start_matches(is_ws).to_string();
        *first = trimmed;
    }
    if let Some(Element::Text(last)) = elements.last_mut() {
        let trimmed = last.trim_end_matches(is_ws).to_string();
        *last = trimmed;
    }
    elements.retain(|e| !matches!(e, Element::Text(t) if t.is_empty()));
}
