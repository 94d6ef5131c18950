//! Width-aware text fitting for fixed-size grid cells.
//!
//! Widths are measured in terminal columns with `unicode-width`, so wide
//! glyphs count double and combining marks count zero.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Truncates `text` to `width` columns, ending with an ellipsis when cut.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(truncate_to_width("Punk IPA", 5), "Punk…");
/// assert_eq!(truncate_to_width("Buzz", 10), "Buzz");
/// ```
pub(crate) fn truncate_to_width(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_owned();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width.saturating_sub(1);
    let mut output = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > budget {
            break;
        }
        output.push(ch);
        used = used.saturating_add(char_width);
    }
    output.push(ELLIPSIS);
    output
}

/// Truncates or right-pads `text` with spaces to exactly `width` columns.
pub(crate) fn pad_to_width(text: &str, width: usize) -> String {
    let mut output = truncate_to_width(text, width);
    let used = UnicodeWidthStr::width(output.as_str());
    output.push_str(&" ".repeat(width.saturating_sub(used)));
    output
}

/// Word-wraps `text` onto at most two lines of `width` columns.
///
/// Overflow on the second line is replaced by an ellipsis. A first word
/// wider than the line is split mid-word.
pub(crate) fn wrap_two_lines(text: &str, width: usize) -> [String; 2] {
    let trimmed = text.trim();
    if width == 0 {
        return [String::new(), String::new()];
    }
    if UnicodeWidthStr::width(trimmed) <= width {
        return [trimmed.to_owned(), String::new()];
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    let mut first = String::new();
    let mut taken = 0usize;
    for word in &words {
        let separator = usize::from(!first.is_empty());
        let candidate = UnicodeWidthStr::width(first.as_str())
            .saturating_add(separator)
            .saturating_add(UnicodeWidthStr::width(*word));
        if candidate > width {
            break;
        }
        if separator == 1 {
            first.push(' ');
        }
        first.push_str(word);
        taken = taken.saturating_add(1);
    }

    if taken == 0 {
        let (head, tail) = split_at_width(trimmed, width);
        return [head.to_owned(), truncate_to_width(tail.trim_start(), width)];
    }

    let rest = words
        .iter()
        .skip(taken)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    [first, truncate_to_width(&rest, width)]
}

/// Centres `text` within `width` columns, truncating when it does not fit.
pub(crate) fn center(text: &str, width: usize) -> String {
    let fitted = truncate_to_width(text, width);
    let used = UnicodeWidthStr::width(fitted.as_str());
    let left = width.saturating_sub(used).checked_div(2).unwrap_or(0);
    format!("{}{fitted}", " ".repeat(left))
}

fn split_at_width(text: &str, width: usize) -> (&str, &str) {
    let mut used = 0usize;
    for (index, ch) in text.char_indices() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > width {
            return text.split_at_checked(index).unwrap_or((text, ""));
        }
        used = used.saturating_add(char_width);
    }
    (text, "")
}
