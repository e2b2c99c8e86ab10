use serde::{Deserialize, Serialize};
use std::path::Path;

use super::DetailItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Linkedin,
    Github,
    Email,
    Download,
    #[default]
    Website,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Linkedin => "linkedin",
            LinkKind::Github => "github",
            LinkKind::Email => "email",
            LinkKind::Download => "download",
            LinkKind::Website => "website",
        }
    }
}

/// Outbound link in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub kind: LinkKind,
}

impl ProfileLink {
    /// Anchor target; bare addresses on email links get a `mailto:` scheme
    pub fn href(&self) -> String {
        match self.kind {
            LinkKind::Email if !self.url.starts_with("mailto:") => {
                format!("mailto:{}", self.url)
            }
            _ => self.url.clone(),
        }
    }

    /// Email and download links stay in the current context
    pub fn opens_new_context(&self) -> bool {
        !matches!(self.kind, LinkKind::Email | LinkKind::Download)
    }
}

/// Sidebar identity: name, links, photo and biography
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub photo: Option<String>,
    #[serde(alias = "photoAlt")]
    pub photo_alt: Option<String>,
    /// CV document offered as a download after the configured links
    #[serde(alias = "cvDocument")]
    pub cv_document: Option<String>,
    pub links: Vec<ProfileLink>,
    pub bio: Vec<DetailItem>,
}

impl Profile {
    /// Configured links followed by the CV download, unless a download link
    /// already points at the same document
    pub fn all_links(&self) -> Vec<ProfileLink> {
        let mut links = self.links.clone();
        let Some(document) = self.cv_document.as_deref().filter(|d| !d.is_empty()) else {
            return links;
        };
        let listed = links
            .iter()
            .any(|link| link.kind == LinkKind::Download && link.url == document);
        if !listed {
            links.push(ProfileLink {
                label: cv_label(document),
                url: document.to_string(),
                kind: LinkKind::Download,
            });
        }
        links
    }
}

/// "CV.pdf" for "/cv_jprettyman.pdf"; plain "CV" without an extension
fn cv_label(document: &str) -> String {
    match Path::new(document).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("CV.{}", ext),
        None => "CV".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_aliases_are_accepted() {
        let profile: Profile = serde_json::from_str(
            r#"{"name": "Ada", "cvDocument": "/cv.pdf", "photoAlt": "Ada smiling"}"#,
        )
        .unwrap();
        assert_eq!(profile.photo_alt.as_deref(), Some("Ada smiling"));
        assert_eq!(profile.cv_document.as_deref(), Some("/cv.pdf"));
    }

    #[test]
    fn test_cv_document_becomes_trailing_download_link() {
        let profile = Profile {
            name: "Ada".to_string(),
            cv_document: Some("/cv_ada.pdf".to_string()),
            links: vec![ProfileLink {
                label: "GitHub".to_string(),
                url: "https://github.com/ada".to_string(),
                kind: LinkKind::Github,
            }],
            ..Profile::default()
        };

        let links = profile.all_links();
        assert_eq!(links.len(), 2);
        let cv = &links[1];
        assert_eq!(cv.label, "CV.pdf");
        assert_eq!(cv.href(), "/cv_ada.pdf");
        assert_eq!(cv.kind, LinkKind::Download);
        assert!(!cv.opens_new_context());
    }

    #[test]
    fn test_cv_document_not_duplicated() {
        let profile = Profile {
            cv_document: Some("/cv.pdf".to_string()),
            links: vec![ProfileLink {
                label: "Résumé".to_string(),
                url: "/cv.pdf".to_string(),
                kind: LinkKind::Download,
            }],
            ..Profile::default()
        };
        assert_eq!(profile.all_links().len(), 1);
        assert!(Profile::default().all_links().is_empty());
    }
}
