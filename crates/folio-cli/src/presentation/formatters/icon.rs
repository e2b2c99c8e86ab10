use folio_types::{IconKey, LinkKind};

/// Glyph for a skill-area icon. Unknown keys get a neutral bullet.
pub fn icon_glyph(icon: IconKey) -> &'static str {
    match icon {
        IconKey::Code => "</>",
        IconKey::Database => "🗄",
        IconKey::Cloud => "☁",
        IconKey::Brain => "🧠",
        IconKey::Chart => "📈",
        IconKey::ThumbsUp => "👍",
        IconKey::Unknown => "•",
    }
}

pub fn link_glyph(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Linkedin => "in",
        LinkKind::Github => "gh",
        LinkKind::Email => "✉",
        LinkKind::Download => "⬇",
        LinkKind::Website => "🔗",
    }
}
