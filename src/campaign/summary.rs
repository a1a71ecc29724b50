use crate::config;

/// Summary panel text for the campaign name input.
pub fn summary_name(raw: &str) -> &str {
    match raw.trim() {
        "" => config::EMPTY_SUMMARY_NAME,
        name => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_shows_placeholder() {
        assert_eq!(summary_name(""), "--");
        assert_eq!(summary_name("   "), "--");
        assert_eq!(summary_name(" Spring Sale  "), "Spring Sale");
    }
}
