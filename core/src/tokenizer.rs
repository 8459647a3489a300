/// Split `text` into words on the single space character.
///
/// Only the ASCII space is a delimiter; tab and newline are kept inside
/// tokens. Runs of spaces never produce empty words.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_split() {
        assert_eq!(split_into_words("белый кот"), vec!["белый", "кот"]);
    }

    #[test]
    fn collapses_space_runs() {
        assert_eq!(split_into_words("  a   b  "), vec!["a", "b"]);
    }
}
