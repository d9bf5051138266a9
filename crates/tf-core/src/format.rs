//! printf-style rendering of a single unsigned 64-bit value.
//!
//! Supports the `%u`/`%d`/`%i`, `%x`/`%X` and `%o` conversions with the `-`,
//! `0` and `#` flags, a field width of at most [`MAX_WIDTH`], and the length
//! modifiers `l`, `ll`, `h`, `z` and `j`, which are accepted and ignored
//! since every value is already 64-bit.

use crate::error::{Error, Result};
use std::iter::Peekable;
use std::str::Chars;

/// Widest field a conversion may request.
pub const MAX_WIDTH: usize = 4096;

const LENGTH_MODIFIERS: &[&str] = &["", "l", "ll", "h", "z", "j"];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Conversion {
    left_align: bool,
    zero_pad: bool,
    alternate: bool,
    width: Option<usize>,
    kind: char,
}

/// Expand `template` against `value`. The template must hold exactly one
/// value conversion.
pub fn format_unsigned(template: &str, value: u64) -> Result<String> {
    let mut result = String::new();
    let mut conversions = 0usize;
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            result.push(ch);
            continue;
        }
        if matches!(chars.peek(), Some('%')) {
            chars.next();
            result.push('%');
            continue;
        }

        let conversion = parse_conversion(&mut chars, template)?;
        conversions += 1;
        if conversions > 1 {
            return Err(Error::format(format!(
                "template {:?} has more than one conversion",
                template
            )));
        }
        result.push_str(&render(&conversion, value));
    }

    if conversions == 0 {
        return Err(Error::format(format!(
            "template {:?} has no conversion",
            template
        )));
    }

    Ok(result)
}

fn parse_conversion(chars: &mut Peekable<Chars<'_>>, template: &str) -> Result<Conversion> {
    let mut conversion = Conversion::default();

    while let Some(&flag) = chars.peek() {
        match flag {
            '-' => conversion.left_align = true,
            '0' => conversion.zero_pad = true,
            '#' => conversion.alternate = true,
            _ => break,
        }
        chars.next();
    }

    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    if !digits.is_empty() {
        let width = digits
            .parse::<usize>()
            .map_err(|e| Error::format(format!("invalid width {:?}: {}", digits, e)))?;
        if width > MAX_WIDTH {
            return Err(Error::format(format!(
                "width {} too large (maximum {})",
                digits, MAX_WIDTH
            )));
        }
        conversion.width = Some(width);
    }

    let mut length = String::new();
    while let Some(&c) = chars.peek() {
        if !matches!(c, 'l' | 'h' | 'z' | 'j' | 't') {
            break;
        }
        length.push(c);
        chars.next();
    }
    if !LENGTH_MODIFIERS.contains(&length.as_str()) {
        return Err(Error::format(format!(
            "unsupported length modifier {:?} in template {:?}",
            length, template
        )));
    }

    match chars.next() {
        Some(kind @ ('u' | 'd' | 'i' | 'x' | 'X' | 'o')) => {
            conversion.kind = kind;
            Ok(conversion)
        }
        Some(other) => Err(Error::format(format!(
            "unsupported conversion '%{}' in template {:?}",
            other, template
        ))),
        None => Err(Error::format(format!(
            "dangling '%' at end of template {:?}",
            template
        ))),
    }
}

fn render(conversion: &Conversion, value: u64) -> String {
    let (prefix, digits) = match conversion.kind {
        'x' => ("0x", format!("{:x}", value)),
        'X' => ("0X", format!("{:X}", value)),
        // C prints a single leading zero for `%#o`, and none when the value is zero.
        'o' => ("0", format!("{:o}", value)),
        _ => ("", value.to_string()),
    };
    let prefix = if conversion.alternate && value != 0 {
        prefix
    } else {
        ""
    };

    let len = prefix.len() + digits.len();
    let width = conversion.width.unwrap_or(0);
    if len >= width {
        return format!("{}{}", prefix, digits);
    }

    let padding = width - len;
    if conversion.left_align {
        format!("{}{}{}", prefix, digits, " ".repeat(padding))
    } else if conversion.zero_pad {
        format!("{}{}{}", prefix, "0".repeat(padding), digits)
    } else {
        format!("{}{}{}", " ".repeat(padding), prefix, digits)
    }
}
