use folio_engine::*;
use folio_types::*;

fn ym(s: &str) -> YearMonth {
    s.parse().unwrap()
}

fn job(role: &str, start: &str, end: &str) -> Job {
    Job {
        role: role.to_string(),
        company: format!("{} Ltd", role),
        company_url: None,
        logo_url: None,
        start_date: ym(start),
        end_date: ym(end),
        description: None,
        achievements: Vec::new(),
    }
}

fn period(name: &str, start: &str, end: &str) -> EducationPeriod {
    EducationPeriod {
        institution: name.to_string(),
        institution_short: None,
        degree: "BSc".to_string(),
        start_date: ym(start),
        end_date: ym(end),
        description: None,
        logo_url: None,
        highlights: Vec::new(),
        grade: None,
        publications: Vec::new(),
    }
}

fn area(name: &str, icon: IconKey) -> SkillArea {
    SkillArea {
        name: name.to_string(),
        icon_name: icon,
        skills: vec!["one".to_string()],
        more_details: Vec::new(),
    }
}

#[test]
fn test_selecting_entry_shows_that_entry() {
    let mut history = EmploymentHistory::new(vec![
        job("Analyst", "2015-01", "2017-01"),
        job("Engineer", "2017-02", "2020-01"),
        job("Lead", "2020-02", "2024-01"),
    ]);
    assert_eq!(history.selected().unwrap().role, "Analyst");

    assert!(history.select(2));
    assert_eq!(history.selected().unwrap().role, "Lead");
    let marked = (0..3).filter(|i| history.selection().is_selected(*i)).count();
    assert_eq!(marked, 1);
}

#[test]
fn test_education_default_index_is_bounds_safe() {
    let one = EducationTimeline::new(vec![period("A", "2010-09", "2013-06")]);
    assert_eq!(one.selected().unwrap().institution, "A");

    let two = EducationTimeline::new(vec![
        period("A", "2010-09", "2013-06"),
        period("B", "2013-09", "2014-09"),
    ]);
    assert_eq!(two.selected().unwrap().institution, "B");

    let four = EducationTimeline::new(vec![
        period("A", "2010-09", "2013-06"),
        period("B", "2013-09", "2014-09"),
        period("C", "2014-10", "2018-09"),
        period("D", "2018-10", "2020-09"),
    ]);
    assert_eq!(four.selected().unwrap().institution, "C");
}

#[test]
fn test_education_layout_within_bounds() {
    let timeline = EducationTimeline::new(vec![
        period("A", "2018-01", "2019-06"),
        period("B", "2019-01", "2020-12"),
        period("C", "2021-01", "2022-06"),
    ]);
    let layout = timeline.layout().unwrap();
    assert_eq!(layout.segments.len(), 3);
    for seg in &layout.segments {
        assert!(seg.position >= 0.0);
        assert!(seg.position + seg.width <= 100.0 + 1e-9);
    }
}

#[test]
fn test_skill_section_empty() {
    let section = SkillSection::new(Vec::new());
    assert!(section.is_empty());
    assert!(section.selected().is_none());
}

#[test]
fn test_dashboard_select_in_active_section() {
    let mut dashboard = Dashboard::new(
        Profile::default(),
        Datasets {
            skills: vec![area("Code", IconKey::Code), area("Data", IconKey::Database)],
            jobs: vec![job("Analyst", "2015-01", "2017-01")],
            education: Vec::new(),
        },
    );

    assert!(!dashboard.select_in_active(1));
    dashboard.carousel.select(Section::Skills.position());
    assert!(dashboard.select_in_active(1));
    assert_eq!(dashboard.skills.selected().unwrap().name, "Data");
    assert_eq!(dashboard.employment.selection().selected(), Some(0));
}

#[test]
fn test_validate_reports_unknown_icon_and_reversed_dates() {
    let data = Datasets {
        skills: vec![area("Code", IconKey::Code), area("Mystery", IconKey::Unknown)],
        jobs: vec![job("Backwards", "2020-01", "2019-01")],
        education: vec![period("A", "2010-09", "2013-06")],
    };

    let issues = validate(&data);
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].dataset, "skills");
    assert_eq!(issues[0].index, Some(1));
    assert_eq!(issues[1].dataset, "jobs");
    assert!(issues[1].to_string().starts_with("jobs[0]:"));
}

#[test]
fn test_validate_warns_on_zero_span_timeline() {
    let data = Datasets {
        education: vec![period("A", "2020-01", "2020-01")],
        ..Datasets::default()
    };
    let issues = validate(&data);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
}

#[test]
fn test_inline_serializes_with_kind_tag() {
    let inline = Inline::Link {
        text: "x".to_string(),
        href: "https://example.com".to_string(),
    };
    let json = serde_json::to_value(&inline).unwrap();
    assert_eq!(json["kind"], "link");
    assert_eq!(json["href"], "https://example.com");
}
