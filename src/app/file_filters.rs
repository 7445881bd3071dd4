/// Filter for the Open Text File dialog.
///
/// FLTK accepts these filter formats:
/// - Simple wildcard: "*.txt"
/// - Multiple wildcards: "*.{txt,md}"
/// - With description: "Text Files\t*.txt"
pub fn text_files_filter() -> String {
    "*.txt".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_filter_is_simple_wildcard() {
        assert_eq!(text_files_filter(), "*.txt");
    }
}
