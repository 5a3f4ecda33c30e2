// src/tools/capitalize.rs

/// Upper-cases the first character of every whitespace-separated word and
/// lower-cases the rest. Whitespace is copied through untouched.
pub fn capitalize_words(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize_next = true;

    for c in input.chars() {
        if c.is_whitespace() {
            result.push(c);
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capitalize_words("hello world"), "Hello World");
        assert_eq!(capitalize_words("hELLO wORLD"), "Hello World");
    }

    #[test]
    fn keeps_whitespace_runs() {
        assert_eq!(capitalize_words("  two   spaces\tand\ttabs\n"), "  Two   Spaces\tAnd\tTabs\n");
    }

    #[test]
    fn punctuation_does_not_split_words() {
        assert_eq!(capitalize_words("rock'n'roll e-mail"), "Rock'n'roll E-mail");
        assert_eq!(capitalize_words("123abc"), "123abc");
    }

    #[test]
    fn multi_char_case_mappings_expand() {
        assert_eq!(capitalize_words("ßtraße"), "SStraße");
        assert_eq!(capitalize_words("ÉCOLE"), "École");
    }
}
