use std::fmt::Write as _;

/// Write and optionally escape a character inside a GraphQL string value.
fn write_character(c: char, buf: &mut String) {
    match c {
        '"' => buf.push_str(r#"\""#),
        '\\' => buf.push_str(r#"\\"#),
        '\n' => buf.push_str(r#"\n"#),
        '\r' => buf.push_str(r#"\r"#),
        '\t' => buf.push_str(r#"\t"#),
        '\u{0008}' => buf.push_str(r#"\b"#),
        '\u{000c}' => buf.push_str(r#"\f"#),
        c if c.is_control() => {
            let _ = write!(buf, "\\u{:04x}", c as u32);
        }
        // Other unicode chars are written as is
        c => buf.push(c),
    }
}

/// Write `value` as a quoted, single-line GraphQL string literal.
pub(crate) fn write_string_value(buf: &mut String, value: &str) {
    buf.reserve(value.len() + 2);
    buf.push('"');
    for c in value.chars() {
        write_character(c, buf);
    }
    buf.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn quoted(value: &str) -> String {
        let mut buf = String::new();
        write_string_value(&mut buf, value);
        buf
    }

    #[test]
    fn it_quotes_plain_strings() {
        assert_eq!(quoted("hello"), r#""hello""#);
        assert_eq!(quoted(""), r#""""#);
    }

    #[test]
    fn it_escapes_special_characters() {
        assert_eq!(quoted(r"o\hello"), r#""o\\hello""#);
        assert_eq!(quoted(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quoted("line\nbreak"), r#""line\nbreak""#);
        assert_eq!(quoted("carriage\rreturn"), r#""carriage\rreturn""#);
    }

    #[test]
    fn it_escapes_control_characters() {
        assert_eq!(quoted("a\tb"), r#""a\tb""#);
        assert_eq!(quoted("\u{0008}\u{000c}"), r#""\b\f""#);
        assert_eq!(quoted("\u{0001}"), r#""\u0001""#);
    }

    #[test]
    fn it_keeps_unicode() {
        assert_eq!(quoted("chashu 🐈"), "\"chashu 🐈\"");
    }
}
