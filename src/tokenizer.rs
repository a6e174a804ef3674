/// Characters that separate tokens and are themselves discarded.
const DELIMITERS: [char; 2] = [' ', '\t'];

/// Initial argument-vector capacity; `Vec` takes over growth from there.
const INITIAL_TOKENS: usize = 64;

/// Splits a line into whitespace-delimited tokens, preserving order.
///
/// Runs of delimiters collapse to a single boundary, so a blank or
/// all-delimiter line yields no tokens. Quotes and backslashes carry no
/// special meaning; there is no way to escape a delimiter into a token.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::with_capacity(INITIAL_TOKENS);
    let mut curr = String::new();

    for c in line.chars() {
        if DELIMITERS.contains(&c) {
            if !curr.is_empty() {
                tokens.push(std::mem::take(&mut curr));
            }
        } else {
            curr.push(c);
        }
    }

    if !curr.is_empty() {
        tokens.push(curr);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_command() {
        let result = tokenize("read notes.txt");
        assert_eq!(result, vec!["read".to_string(), "notes.txt".to_string()]);
    }

    #[test]
    fn test_tokenize_collapses_repeated_spaces() {
        let result = tokenize("calc  10   +    20");
        assert_eq!(
            result,
            vec![
                "calc".to_string(),
                "10".to_string(),
                "+".to_string(),
                "20".to_string()
            ]
        );
    }

    #[test]
    fn test_tokenize_tabs_and_mixed_whitespace() {
        let result = tokenize("\tdelete\t \told.txt ");
        assert_eq!(result, vec!["delete".to_string(), "old.txt".to_string()]);
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_only_delimiters() {
        assert!(tokenize("   \t  \t").is_empty());
    }

    #[test]
    fn test_tokenize_single_token() {
        assert_eq!(tokenize("list"), vec!["list".to_string()]);
    }

    #[test]
    fn test_tokenize_quotes_are_ordinary_characters() {
        let result = tokenize(r#"read "my file.txt""#);
        assert_eq!(
            result,
            vec![
                "read".to_string(),
                "\"my".to_string(),
                "file.txt\"".to_string()
            ]
        );
    }

    #[test]
    fn test_tokenize_preserves_order() {
        let result = tokenize("e d c b a");
        assert_eq!(result, vec!["e", "d", "c", "b", "a"]);
    }

    #[test]
    fn test_tokenize_more_tokens_than_initial_capacity() {
        let line = vec!["tok"; INITIAL_TOKENS * 2 + 3].join(" ");
        assert_eq!(tokenize(&line).len(), INITIAL_TOKENS * 2 + 3);
    }

    #[test]
    fn test_rejoining_with_single_spaces_is_stable() {
        let first = tokenize("  a\t\tbb   ccc d ");
        let rejoined = first.join(" ");
        assert_eq!(tokenize(&rejoined), first);
    }
}
