//! Terminal output sanitization
//!
//! Card text and category copy come from user-supplied content files and are drawn
//! straight into the terminal. ANSI escape sequences in that text could clear the screen,
//! move the cursor or restyle the UI, so the content loader strips them before the deck is
//! built.

/// Strips ANSI escape codes from a string
///
/// Applied to every item text and category string on load.
///
/// # Examples
///
/// ```
/// use swipedeck::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "Red text");
/// ```
///
/// # Security Note
///
/// Removes ANSI CSI sequences (ESC[...m for colors/styles, ESC[...H for cursor
/// movement), OSC sequences (window title, hyperlinks) and other control characters
/// such as bell and backspace. Tabs and line breaks are kept.
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            match chars.peek() {
                // CSI: ESC [ params final-letter
                Some('[') => {
                    chars.next();
                    for next_ch in chars.by_ref() {
                        if next_ch.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
                // OSC: ESC ] ... terminated by BEL or ESC \
                Some(']') => {
                    chars.next();
                    while let Some(next_ch) = chars.next() {
                        if next_ch == '\x07' {
                            break;
                        }
                        if next_ch == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }
        result.push(ch);
    }

    result
}
