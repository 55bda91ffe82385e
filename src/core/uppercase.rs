use crate::config::toml_config::DEFAULT_ABSENT_SENTINEL;
use crate::config::DrillConfig;
use crate::domain::model::TextInput;
use crate::domain::ports::Drill;
use crate::utils::error::{DrillError, Result};
use std::io::BufRead;

/// Uppercases `value`, or yields `""` when there is no value.
///
/// The mapping is Unicode's default one and never consults the process
/// locale, so `"i"` always becomes `"I"`.
pub fn to_upper_safe(value: Option<&str>) -> String {
    value.map(str::to_uppercase).unwrap_or_default()
}

const LINE_SEPARATORS: [char; 5] = ['\n', '\r', '\u{2028}', '\u{2029}', '\u{85}'];

/// Cuts `line` at its first line separator and maps the sentinel
/// (any ASCII case) to `None`.
pub fn parse_line<'a>(line: &'a str, sentinel: &str) -> Option<&'a str> {
    let line = match line.find(LINE_SEPARATORS) {
        Some(end) => &line[..end],
        None => line,
    };

    if line.eq_ignore_ascii_case(sentinel) {
        None
    } else {
        Some(line)
    }
}

#[derive(Debug, Clone)]
pub struct UppercaseDrill {
    sentinel: String,
}

impl UppercaseDrill {
    pub fn new(sentinel: impl Into<String>) -> Self {
        Self {
            sentinel: sentinel.into(),
        }
    }

    pub fn from_config(config: &DrillConfig) -> Self {
        Self::new(config.absent_sentinel())
    }

    pub fn read_input(&self, input: &mut dyn BufRead) -> Result<TextInput> {
        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Err(DrillError::InputError {
                message: "standard input ended before a line was read".to_string(),
            });
        }

        // Undecodable bytes become U+FFFD rather than failing the read.
        let line = String::from_utf8_lossy(&buf);
        let parsed = TextInput::from(parse_line(&line, &self.sentinel));
        if parsed.is_absent() {
            tracing::debug!("Input matched sentinel {:?}, treating as absent", self.sentinel);
        }
        Ok(parsed)
    }
}

impl Default for UppercaseDrill {
    fn default() -> Self {
        Self::new(DEFAULT_ABSENT_SENTINEL)
    }
}

impl Drill for UppercaseDrill {
    fn name(&self) -> &'static str {
        "uppercase-safe"
    }

    fn execute(&self, input: &mut dyn BufRead) -> Result<Vec<String>> {
        let value = self.read_input(input)?;
        Ok(vec![to_upper_safe(value.as_deref())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_absent_is_empty() {
        assert_eq!(to_upper_safe(None), "");
    }

    #[test]
    fn test_present_is_uppercased() {
        assert_eq!(to_upper_safe(Some("hello")), "HELLO");
        assert_eq!(to_upper_safe(Some("Hello, World 42!")), "HELLO, WORLD 42!");
        assert_eq!(to_upper_safe(Some("")), "");
    }

    #[test]
    fn test_uppercase_ignores_locale_specials() {
        // No Turkish dotted capital I, whatever the environment says.
        assert_eq!(to_upper_safe(Some("istanbul")), "ISTANBUL");
        assert_eq!(to_upper_safe(Some("straße")), "STRASSE");
    }

    #[test]
    fn test_parse_line_sentinel() {
        assert_eq!(parse_line("none", "none"), None);
        assert_eq!(parse_line("NoNe\n", "none"), None);
        assert_eq!(parse_line("NONE\r\n", "none"), None);
        assert_eq!(parse_line(" none", "none"), Some(" none"));
        assert_eq!(parse_line("nonexistent", "none"), Some("nonexistent"));
        assert_eq!(parse_line("hello\n", "none"), Some("hello"));
        assert_eq!(parse_line("\n", "none"), Some(""));
        assert_eq!(parse_line("none\r", "none"), None);
        assert_eq!(parse_line("a\rb\n", "none"), Some("a"));
        assert_eq!(parse_line("none\u{2028}tail", "none"), None);
        assert_eq!(parse_line("x\u{85}y", "none"), Some("x"));
    }

    #[test]
    fn test_execute_reads_only_first_line() {
        let drill = UppercaseDrill::default();
        let mut input = Cursor::new("abc\nnone\n");
        assert_eq!(drill.execute(&mut input).unwrap(), vec!["ABC".to_string()]);
    }

    #[test]
    fn test_execute_without_trailing_newline() {
        let drill = UppercaseDrill::default();
        let mut input = Cursor::new("NoNe");
        assert_eq!(drill.execute(&mut input).unwrap(), vec![String::new()]);
    }

    #[test]
    fn test_execute_on_empty_stdin_fails() {
        let drill = UppercaseDrill::default();
        let mut input = Cursor::new("");
        let err = drill.execute(&mut input).unwrap_err();
        assert!(matches!(err, DrillError::InputError { .. }));
    }

    #[test]
    fn test_custom_sentinel() {
        let drill = UppercaseDrill::new("null");
        assert_eq!(
            drill.execute(&mut Cursor::new("NULL\n")).unwrap(),
            vec![String::new()]
        );
        assert_eq!(
            drill.execute(&mut Cursor::new("none\n")).unwrap(),
            vec!["NONE".to_string()]
        );
    }
}
