use folio_types::*;

#[test]
fn test_parse_skill_dataset() {
    let json = r#"[
        {
            "name": "Programming",
            "iconName": "code",
            "skills": ["Python", "Rust"],
            "moreDetails": [
                "Ten years of Python",
                [{"text": "Built "}, {"text": "Macaroni", "link": "https://www.macaroni.works"}]
            ]
        }
    ]"#;

    let skills: Vec<SkillArea> = parse_dataset(json).unwrap();
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].icon_name, IconKey::Code);
    assert_eq!(skills[0].skills, vec!["Python", "Rust"]);
    assert_eq!(skills[0].more_details[0], DetailItem::from("Ten years of Python"));
    assert_eq!(
        skills[0].more_details[1],
        DetailItem::Rich(vec![
            RichTextItem::text("Built "),
            RichTextItem::link("Macaroni", "https://www.macaroni.works"),
        ])
    );
}

#[test]
fn test_unknown_icon_is_explicit_variant() {
    let json = r#"[{"name": "Misc", "iconName": "rocket", "skills": []}]"#;
    let skills: Vec<SkillArea> = parse_dataset(json).unwrap();
    assert_eq!(skills[0].icon_name, IconKey::Unknown);
    assert!(!skills[0].icon_name.is_known());
    assert!(skills[0].more_details.is_empty());
}

#[test]
fn test_icon_key_alias() {
    let json = r#"[{"name": "Data", "iconKey": "thumbs_up"}]"#;
    let skills: Vec<SkillArea> = parse_dataset(json).unwrap();
    assert_eq!(skills[0].icon_name, IconKey::ThumbsUp);
}

#[test]
fn test_parse_job_optional_fields() {
    let json = r#"[{
        "role": "Data Scientist",
        "company": "Blink SEO",
        "startDate": "2021-06",
        "endDate": "2024-01",
        "achievements": []
    }]"#;
    let jobs: Vec<Job> = parse_dataset(json).unwrap();
    assert_eq!(jobs[0].company_url, None);
    assert_eq!(jobs[0].description, None);
    assert_eq!(jobs[0].start_date.label(), "Jun 2021");
}

#[test]
fn test_parse_education_with_publication() {
    let json = r#"[{
        "institution": "University of Warwick",
        "institutionShort": "Warwick",
        "degree": "Ph.D. Mathematics",
        "startDate": "2014-10",
        "endDate": "2018-09",
        "highlights": [],
        "publications": [{"title": "A paper", "date": "2017-05", "abstract": "Short."}]
    }]"#;
    let periods: Vec<EducationPeriod> = parse_dataset(json).unwrap();
    assert_eq!(periods[0].short_label(), "Warwick");
    assert_eq!(periods[0].publications[0].r#abstract.as_deref(), Some("Short."));
    assert_eq!(periods[0].grade, None);
}

#[test]
fn test_malformed_date_fails_dataset() {
    let json = r#"[{"role": "x", "company": "y", "startDate": "2021-6", "endDate": "2022-01"}]"#;
    let err = parse_dataset::<Job>(json).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().contains("2021-6"));
}

#[test]
fn test_non_array_dataset_is_rejected() {
    let err = parse_dataset::<SkillArea>(r#"{"name": "Cloud"}"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_email_link_href() {
    let link = ProfileLink {
        label: "Email".to_string(),
        url: "me@example.com".to_string(),
        kind: LinkKind::Email,
    };
    assert_eq!(link.href(), "mailto:me@example.com");
    assert!(!link.opens_new_context());
}
