use std::process::Command;

#[cfg(feature = "notify")]
use crate::{Error, Result};

/// Characters rejected by at least one mainstream filesystem. The union is
/// used on every host so a name produced here is portable.
const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

pub fn command_exists(cmd: &str) -> bool {
    let probe = if cfg!(windows) { "where" } else { "which" };
    Command::new(probe)
        .arg(cmd)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Drops invalid filename characters, turns spaces into hyphens and trims
/// hyphens from both ends.
pub fn sanitize_title(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !INVALID_FILENAME_CHARS.contains(c) && !c.is_control())
        .map(|c| if c == ' ' { '-' } else { c })
        .collect();

    cleaned.trim_matches('-').to_string()
}

/// Escapes `value` for use inside a double quoted JavaScript or AppleScript
/// string literal.
pub fn quote_script_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// `{startdate}-{title}.jpg`. The extension is fixed whatever the server sends.
pub fn image_file_name(start_date: &str, title: &str) -> String {
    format!("{}-{}.jpg", start_date, sanitize_title(title))
}

#[cfg(feature = "notify")]
pub fn send_notification(title: &str, message: &str) -> Result<()> {
    notify_rust::Notification::new()
        .summary(title)
        .body(message)
        .show()
        .map_err(|e| Error::DesktopEnv(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_question_mark_and_hyphenates_spaces() {
        assert_eq!(sanitize_title("A B?C"), "A-BC");
        assert_eq!(image_file_name("20240101", "A B?C"), "20240101-A-BC.jpg");
    }

    #[test]
    fn removes_every_invalid_character() {
        assert_eq!(sanitize_title(r#"a<b>c:d"e/f\g|h?i*j"#), "abcdefghij");
        assert_eq!(sanitize_title("tab\there\n"), "tabhere");
    }

    #[test]
    fn trims_leading_and_trailing_hyphens() {
        assert_eq!(sanitize_title("  Why not? "), "Why-not");
        assert_eq!(sanitize_title("-- edge --"), "edge");
        assert_eq!(sanitize_title("?"), "");
    }

    #[test]
    fn keeps_non_ascii_titles() {
        assert_eq!(
            sanitize_title("Aurora über Tromsø"),
            "Aurora-über-Tromsø"
        );
    }

    #[test]
    fn script_strings_escape_backslash_then_quote() {
        assert_eq!(quote_script_string("/tmp/plain.jpg"), "/tmp/plain.jpg");
        assert_eq!(
            quote_script_string(r#"/tmp/say "hi"/a.jpg"#),
            r#"/tmp/say \"hi\"/a.jpg"#
        );
        assert_eq!(quote_script_string(r#"C:\walls\"#), r#"C:\\walls\\"#);
    }

    #[test]
    fn sanitizing_is_idempotent() {
        for title in [
            "A B?C",
            " Lone pine, Sierra Nevada ",
            "What's *that*?",
            "a - b",
            "",
            "-?-",
        ] {
            let once = sanitize_title(title);
            assert_eq!(sanitize_title(&once), once, "title = {:?}", title);
        }
    }
}
