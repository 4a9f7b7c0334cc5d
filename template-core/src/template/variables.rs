use std::collections::BTreeSet;

/// Collects the names of `${...}` placeholders still present in a part.
/// Delimiters are stripped and duplicates collapse.
pub(crate) fn collect_variables(xml: &str) -> BTreeSet<String> {
    let mut variables = BTreeSet::new();
    let mut rest = xml;
    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                variables.insert(after[..end].to_string());
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    variables
}

#[cfg(test)]
mod tests {

    use super::*;
    #[cfg(test)]
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collect_variables() {
        let xml = r#"<w:p><w:bookmarkStart w:id="0" w:name="${agree}"/><w:r><w:t>${name} ${agree}</w:t></w:r></w:p>"#;
        let vars: Vec<String> = collect_variables(xml).into_iter().collect();
        assert_eq!(vars, vec!["agree".to_string(), "name".to_string()]);
    }

    #[test]
    fn test_collect_variables_empty() {
        assert_eq!(collect_variables("<w:p/>"), BTreeSet::new());
    }

    #[test]
    fn test_collect_variables_unterminated() {
        assert_eq!(collect_variables("<w:t>${open</w:t>"), BTreeSet::new());
    }
}
