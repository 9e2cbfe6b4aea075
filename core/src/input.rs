// One-line task entry shared by the command interface and the TUI input
// bar: "title text :: description text". Only the first separator counts,
// and single colons stay part of the title, so titles like "Call Bob: 5pm"
// survive intact.
const DESCRIPTION_SEPARATOR: &str = "::";

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub title: String,
    // None means no separator was given, which edit flows treat as "leave
    // the description alone"; Some("") means it was given empty and the
    // description should be cleared.
    pub description: Option<String>,
}

pub fn parse_input(raw: &str) -> ParsedInput {
    match raw.split_once(DESCRIPTION_SEPARATOR) {
        Some((title, description)) => ParsedInput {
            title: title.trim().to_string(),
            description: Some(description.trim().to_string()),
        },
        None => ParsedInput {
            title: raw.trim().to_string(),
            description: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_only() {
        let parsed = parse_input("Buy milk");
        assert_eq!(parsed.title, "Buy milk");
        assert_eq!(parsed.description, None);
    }

    #[test]
    fn test_parse_title_and_description() {
        let parsed = parse_input("Buy milk :: 2% organic");
        assert_eq!(parsed.title, "Buy milk");
        assert_eq!(parsed.description, Some("2% organic".to_string()));
    }

    #[test]
    fn test_parse_keeps_single_colons_in_title() {
        let parsed = parse_input("Call Bob: 5pm :: about the contract");
        assert_eq!(parsed.title, "Call Bob: 5pm");
        assert_eq!(parsed.description, Some("about the contract".to_string()));
    }

    #[test]
    fn test_parse_empty_description_after_separator() {
        let parsed = parse_input("Buy milk ::");
        assert_eq!(parsed.title, "Buy milk");
        assert_eq!(parsed.description, Some(String::new()));
    }

    #[test]
    fn test_parse_only_first_separator_splits() {
        let parsed = parse_input("Buy milk :: 2% :: organic");
        assert_eq!(parsed.title, "Buy milk");
        assert_eq!(parsed.description, Some("2% :: organic".to_string()));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let parsed = parse_input("   Buy milk   ");
        assert_eq!(parsed.title, "Buy milk");
        assert_eq!(parsed.description, None);
    }

    #[test]
    fn test_parse_empty_input() {
        let parsed = parse_input("");
        assert_eq!(parsed.title, "");
        assert_eq!(parsed.description, None);
    }
}
