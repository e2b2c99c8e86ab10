use folio_engine::Inline;

/// Inline runs as plain text; links keep their target in brackets
pub fn inline_plain(runs: &[Inline]) -> String {
    runs.iter()
        .map(|run| match run {
            Inline::Text { text } => text.clone(),
            Inline::Link { text, href } => format!("{} <{}>", text, href),
        })
        .collect()
}

/// Truncate to `max_chars` characters, marking the cut with an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_plain_keeps_order() {
        let runs = vec![
            Inline::Text {
                text: "Built ".to_string(),
            },
            Inline::Link {
                text: "Macaroni".to_string(),
                href: "https://www.macaroni.works".to_string(),
            },
            Inline::Text {
                text: "!".to_string(),
            },
        ];
        assert_eq!(
            inline_plain(&runs),
            "Built Macaroni <https://www.macaroni.works>!"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
