/// A key binding with its `-N` note taken out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSplit {
    /// `None` when `-N` was the last token of the line
    pub note: Option<String>,
    pub command: String,
}

/// True for `bind` / `bind-key` lines carrying a `-N` flag
pub fn has_note(line: &str) -> bool {
    note_flag(line.trim()).is_some()
}

/// Byte offset of the `-N` option of a `bind` / `bind-key` line.
///
/// Only the options before the key count: a `-N` given to the bound
/// command or inside an argument is not a note.
fn note_flag(line: &str) -> Option<usize> {
    let (start, end) = next_token(line, 0)?;
    if !matches!(&line[start..end], "bind" | "bind-key") {
        return None;
    }
    let mut pos = end;
    loop {
        let (start, end) = next_token(line, pos)?;
        let token = &line[start..end];
        if token == "-N" {
            return Some(start);
        }
        if token == "--" || token.len() < 2 || !token.starts_with('-') {
            return None;
        }
        pos = end;
        if token == "-T" {
            pos = next_token(line, pos)?.1;
        }
    }
}

/// Span of the next whitespace separated token at or after `from`,
/// keeping a quoted token whole
fn next_token(line: &str, from: usize) -> Option<(usize, usize)> {
    let rest = &line[from..];
    let start = from + (rest.len() - rest.trim_start().len());
    if start >= line.len() {
        return None;
    }
    let tail = &line[start..];
    let end = match tail.chars().next() {
        Some(quote @ ('"' | '\'')) => tail[1..].find(quote).map_or(line.len(), |i| start + i + 2),
        _ => tail.find(char::is_whitespace).map_or(line.len(), |i| start + i),
    };
    Some((start, end))
}

/// Removes the note from a key binding.
///
/// Returns `None` when the line should be left alone: comments, lines
/// whose binding has no `-N` option, and notes with an unterminated quote.
pub fn split_note(line: &str) -> Option<NoteSplit> {
    let line = line.trim();
    let flag = note_flag(line)?;
    let pre = line[..flag].trim();
    let post = line[flag + 2..].trim();

    if post.is_empty() {
        return Some(NoteSplit {
            note: None,
            command: pre.to_string(),
        });
    }

    let (note, mut rest) = match post.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let end = post[1..].find(quote)?;
            (&post[1..1 + end], &post[end + 2..])
        }
        _ => match post.find(char::is_whitespace) {
            Some(idx) => (&post[..idx], &post[idx..]),
            None => (post, ""),
        },
    };

    while rest.starts_with("   ") {
        rest = &rest[1..];
    }

    Some(NoteSplit {
        note: Some(note.to_string()),
        command: format!("{}{}", pre, rest),
    })
}

/// A back-tick not preceded by a backslash
pub fn has_unescaped_backtick(line: &str) -> bool {
    let mut prev = None;
    for c in line.chars() {
        if c == '`' && prev != Some('\\') {
            return true;
        }
        prev = Some(c);
    }
    false
}
