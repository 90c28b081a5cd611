/// Directory values are stored with a trailing slash so emitted paths and
/// link prefixes concatenate cleanly.
pub fn with_trailing_slash(dir: &str) -> String {
    let trimmed = dir.trim_end_matches('/');
    format!("{trimmed}/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_trailing_slash_appends_exactly_one_slash() {
        assert_eq!(with_trailing_slash("source"), "source/");
        assert_eq!(with_trailing_slash("source/"), "source/");
        assert_eq!(with_trailing_slash("source//"), "source/");
    }
}
