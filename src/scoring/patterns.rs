//! Fixed regular-expression patterns shared by the category analyzers

use regex::Regex;

/// RFC-ish email shape: local part, @, domain, dot, TLD of 2+ letters.
const EMAIL: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Flexible phone shape tolerating separators and an optional country code.
const PHONE: &str = r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}";

/// Characters outside the ATS-safe allow-list.
const SPECIAL_CHARS: &str = r#"[^\w\s\-.,()\[\]@#%&*+=|\\:;"'<>?/!$^~`]"#;

/// Runs of 4+ consecutive uppercase letters.
const EXCESSIVE_CAPS: &str = r"\b[A-Z]{4,}\b";

const NUMBER: &str = r"\d+";
const PERCENTAGE: &str = r"\d+%";

pub(crate) fn email() -> Regex {
    Regex::new(EMAIL).expect("invalid email pattern")
}

pub(crate) fn phone() -> Regex {
    Regex::new(PHONE).expect("invalid phone pattern")
}

pub(crate) fn special_chars() -> Regex {
    Regex::new(SPECIAL_CHARS).expect("invalid special-chars pattern")
}

pub(crate) fn excessive_caps() -> Regex {
    Regex::new(EXCESSIVE_CAPS).expect("invalid caps pattern")
}

pub(crate) fn number() -> Regex {
    Regex::new(NUMBER).expect("invalid number pattern")
}

pub(crate) fn percentage() -> Regex {
    Regex::new(PERCENTAGE).expect("invalid percentage pattern")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        let re = email();
        assert!(re.is_match("Contact: jane.doe+jobs@example.co.uk today"));
        assert!(!re.is_match("jane.doe at example dot com"));
    }

    #[test]
    fn test_phone_pattern() {
        let re = phone();
        assert!(re.is_match("(555) 123-4567"));
        assert!(re.is_match("+1 555.123.4567"));
        assert!(!re.is_match("call me maybe"));
    }

    #[test]
    fn test_special_chars_allow_list() {
        let re = special_chars();
        assert!(re.is_match("bullet \u{2022} point"));
        assert!(re.is_match("curly {braces}"));
        assert!(!re.is_match("plain text with (parens), [brackets] and email@host!"));
    }

    #[test]
    fn test_excessive_caps() {
        let re = excessive_caps();
        assert_eq!(re.find_iter("WORKED at NASA using CSS").count(), 2);
        assert!(!re.is_match("Abc DEF"));
    }
}
