//! Normalization of free text, keys and identity codes
//!
//! Accented letters are folded to ASCII before filtering, so "José Ñúñez"
//! becomes "JOSE NUNEZ" (or "JOSE ÑUÑEZ" when the eñe is kept).

use orion_core::DomainError;

/// Longest audit description
pub const MAX_MESSAGE_LEN: usize = 256;

/// Description used when none is given
pub const DEFAULT_MESSAGE: &str = "Sin descripción";

const ELLIPSIS: &str = "...";

/// Fold a Spanish accented letter to its ASCII base
#[must_use]
pub fn transliterate(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'Á' | 'À' | 'Ä' | 'Â' => 'A',
        'É' | 'È' | 'Ë' | 'Ê' => 'E',
        'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
        'Ó' | 'Ò' | 'Ö' | 'Ô' => 'O',
        'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ç' => 'c',
        'Ç' => 'C',
        other => other,
    }
}

/// Cut to `max_len` characters, ending in "..." when something was dropped
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let keep = max_len.saturating_sub(ELLIPSIS.len());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Replace every run of rejected characters with a single separator
fn squeeze(input: impl Iterator<Item = char>, keep: impl Fn(char) -> bool, separator: &str) -> String {
    let mut out = String::new();
    let mut pending = false;
    for c in input {
        if keep(c) {
            if pending && !out.is_empty() {
                out.push_str(separator);
            }
            pending = false;
            out.push(c);
        } else {
            pending = true;
        }
    }
    out
}

/// Audit description: bounded length, never empty
#[must_use]
pub fn safe_message(input: &str, max_len: usize) -> String {
    let message = input.trim();
    if message.is_empty() {
        return DEFAULT_MESSAGE.to_string();
    }
    truncate(message, max_len)
}

/// Free text as stored: uppercase ASCII words, digits and `.()/-`
///
/// A `max_len` of zero disables truncation.
#[must_use]
pub fn safe_string(input: &str, max_len: usize, save_enie: bool) -> String {
    let folded = input.chars().map(|c| match c {
        'ñ' | 'Ñ' if save_enie => c,
        _ => transliterate(c),
    });
    let cleaned = squeeze(
        folded,
        |c| c.is_ascii_alphanumeric() || ".()/-".contains(c) || (save_enie && (c == 'ñ' || c == 'Ñ')),
        " ",
    )
    .to_uppercase();

    if max_len == 0 {
        cleaned
    } else {
        truncate(&cleaned, max_len)
    }
}

/// Catalog key: uppercase alphanumerics joined by dashes
#[must_use]
pub fn safe_clave(input: &str, max_len: usize) -> String {
    let cleaned = squeeze(
        input.trim().chars().map(transliterate),
        |c| c.is_ascii_alphanumeric(),
        "-",
    )
    .to_uppercase();
    cleaned.chars().take(max_len).collect()
}

/// Uppercase alphanumerics with everything else removed
fn compact(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(transliterate)
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_uppercase()
}

fn is_letters(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

fn is_curp(s: &str) -> bool {
    s.len() == 18
        && is_letters(&s[..4])
        && is_digits(&s[4..10])
        && is_letters(&s[10..16])
        && s[16..].chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_rfc(s: &str) -> bool {
    let letters = match s.len() {
        12 => 3,
        13 => 4,
        _ => return false,
    };
    is_letters(&s[..letters])
        && is_digits(&s[letters..letters + 6])
        && s[letters + 6..].chars().all(|c| c.is_ascii_alphanumeric())
}

/// CURP in canonical form
///
/// An empty input yields "" when `optional`; a search fragment skips
/// the format check.
pub fn safe_curp(input: &str, optional: bool, search_fragment: bool) -> Result<String, DomainError> {
    let final_str = compact(input);
    if final_str.is_empty() && optional {
        return Ok(final_str);
    }
    if !search_fragment && !is_curp(&final_str) {
        return Err(DomainError::validation("CURP inválida"));
    }
    Ok(final_str)
}

/// RFC in canonical form, same rules as [`safe_curp`]
pub fn safe_rfc(input: &str, optional: bool, search_fragment: bool) -> Result<String, DomainError> {
    let final_str = compact(input);
    if final_str.is_empty() && optional {
        return Ok(final_str);
    }
    if !search_fragment && !is_rfc(&final_str) {
        return Err(DomainError::validation("RFC inválido"));
    }
    Ok(final_str)
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty()
        && local.chars().all(|c| is_word(c) || c == '.' || c == '-')
        && !host.is_empty()
        && host.chars().all(|c| is_word(c) || c == '.' || c == '-')
        && !tld.is_empty()
        && tld.chars().all(is_word)
}

/// Lowercased e-mail; a search fragment is returned as typed or dropped
pub fn safe_email(input: &str, search_fragment: bool) -> Result<String, DomainError> {
    let final_str = input.trim().to_lowercase();
    if search_fragment {
        let plausible = final_str
            .chars()
            .all(|c| is_word(c) || c == '.' || c == '-' || c == '@');
        return Ok(if plausible { final_str } else { String::new() });
    }
    if !is_email(&final_str) {
        return Err(DomainError::validation("E-mail inválido"));
    }
    Ok(final_str)
}
