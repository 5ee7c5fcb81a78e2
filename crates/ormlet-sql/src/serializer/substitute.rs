use super::{params::GENERIC, Placeholder, Serializer};

use crate::Flavor;

impl Serializer {
    /// Rewrite the generic `?` placeholders of a template into the flavor's
    /// native positional syntax.
    ///
    /// Question marks inside quoted strings, quoted identifiers and comments
    /// are left alone.
    pub fn substitute(&self, template: &str) -> String {
        let mut dst = String::with_capacity(template.len() + 8);
        let mut position = 0;

        scan(self.flavor, template, |segment| match segment {
            Segment::Text(text) => dst.push_str(text),
            Segment::Placeholder => {
                position += 1;
                Placeholder(position).write(self.flavor, &mut dst);
            }
        });

        dst
    }

    /// Number of generic placeholders in a template.
    pub fn placeholder_count(&self, template: &str) -> usize {
        let mut count = 0;

        scan(self.flavor, template, |segment| {
            if let Segment::Placeholder = segment {
                count += 1;
            }
        });

        count
    }
}

enum Segment<'a> {
    Text(&'a str),
    Placeholder,
}

#[derive(Clone, Copy)]
enum State {
    Code,
    Quoted(u8),
    LineComment,
    BlockComment,
}

/// Split a template into literal text and placeholders.
///
/// Quoted strings, quoted identifiers and comments (`-- ..`, `/* .. */`,
/// plus `# ..` on MySQL) never hold a placeholder.
fn scan<'a>(flavor: Flavor, template: &'a str, mut emit: impl FnMut(Segment<'a>)) {
    // MySQL honors backslash escapes inside string literals by default
    let mysql = matches!(flavor, Flavor::Mysql);

    let bytes = template.as_bytes();
    let mut state = State::Code;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let ch = bytes[i];
        let next = bytes.get(i + 1).copied();

        match state {
            State::Quoted(open) => {
                if ch == b'\\' && mysql && open != b'`' {
                    i += 2;
                    continue;
                }
                // A doubled quote closes and immediately reopens, which
                // leaves the scanner inside the literal as expected.
                if ch == open {
                    state = State::Code;
                }
            }
            State::LineComment => {
                if ch == b'\n' {
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if ch == b'*' && next == Some(b'/') {
                    state = State::Code;
                    i += 2;
                    continue;
                }
            }
            State::Code => match ch {
                b'\'' | b'"' | b'`' => state = State::Quoted(ch),
                b'#' if mysql => state = State::LineComment,
                // MySQL needs whitespace after `--` to start a comment
                b'-' if next == Some(b'-')
                    && (!mysql
                        || bytes
                            .get(i + 2)
                            .map_or(true, |c| c.is_ascii_whitespace())) =>
                {
                    state = State::LineComment;
                    i += 2;
                    continue;
                }
                b'/' if next == Some(b'*') => {
                    state = State::BlockComment;
                    i += 2;
                    continue;
                }
                _ if ch == GENERIC as u8 => {
                    emit(Segment::Text(&template[start..i]));
                    emit(Segment::Placeholder);
                    start = i + 1;
                }
                _ => {}
            },
        }

        i += 1;
    }

    emit(Segment::Text(&template[start..]));
}
