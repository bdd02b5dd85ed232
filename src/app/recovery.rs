#[must_use]
pub fn get_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("unknown route") {
        suggestions.push("Press / and search for the page by name".to_string());
        suggestions.push("Press Ctrl+H to return home".to_string());
    }

    if msg_lower.contains("poisoned") {
        suggestions.push("Restart wayfinder to reset navigation history".to_string());
    }

    if msg_lower.contains("already bound") {
        suggestions.push("Pick a different open_palette key in config.toml".to_string());
    }

    if msg_lower.contains("unknown key name") {
        suggestions.push("Use a single character or a named key such as F2".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions() {
        let s = get_suggestions("Unknown route: /nowhere");
        assert!(s.contains(&"Press Ctrl+H to return home".to_string()));

        let s = get_suggestions("Ctrl+k is already bound to \"Focus search\"");
        assert!(s.contains(&"Pick a different open_palette key in config.toml".to_string()));

        assert!(get_suggestions("something else").is_empty());
    }
}
