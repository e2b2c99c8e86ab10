use folio_engine::{render_rich_text, Dashboard, Section};
use folio_types::Profile;

use super::{present_education, present_employment, present_skills};
use crate::presentation::view_models::{
    DashboardViewModel, LinkViewModel, SectionViewModel, SidebarViewModel, TabViewModel,
};

pub fn present_sidebar(profile: &Profile) -> SidebarViewModel {
    SidebarViewModel {
        name: profile.name.clone(),
        photo: profile.photo.clone(),
        photo_alt: profile.photo_alt.clone(),
        links: profile
            .all_links()
            .iter()
            .map(|link| LinkViewModel {
                label: link.label.clone(),
                href: link.href(),
                kind: link.kind,
                new_context: link.opens_new_context(),
            })
            .collect(),
        bio: profile.bio.iter().map(render_rich_text).collect(),
    }
}

pub fn present_section(dashboard: &Dashboard, section: Section) -> SectionViewModel {
    match section {
        Section::Skills => SectionViewModel::Skills(present_skills(&dashboard.skills)),
        Section::Employment => {
            SectionViewModel::Employment(present_employment(&dashboard.employment))
        }
        Section::Education => SectionViewModel::Education(present_education(&dashboard.education)),
    }
}

/// Only the active section is presented
pub fn present_dashboard(dashboard: &Dashboard, title: &str) -> DashboardViewModel {
    let active = dashboard.active_section();
    DashboardViewModel {
        title: title.to_string(),
        sidebar: present_sidebar(&dashboard.profile),
        tabs: Section::ALL
            .iter()
            .map(|section| TabViewModel {
                section: *section,
                title: section.title().to_string(),
                active: *section == active,
            })
            .collect(),
        content: present_section(dashboard, active),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::LinkKind;

    #[test]
    fn test_sidebar_offers_cv_download_in_current_context() {
        let profile: Profile = toml::from_str(
            r#"
name = "Ada"
cv_document = "/cv.pdf"
photoAlt = "Ada smiling"
"#,
        )
        .unwrap();

        let sidebar = present_sidebar(&profile);
        assert_eq!(sidebar.photo_alt.as_deref(), Some("Ada smiling"));
        assert_eq!(sidebar.links.len(), 1);
        let cv = &sidebar.links[0];
        assert_eq!(cv.kind, LinkKind::Download);
        assert_eq!(cv.href, "/cv.pdf");
        assert!(!cv.new_context);
    }
}
