use folio_engine::education::abstract_needs_read_more;
use folio_engine::{EducationTimeline, Segment};
use folio_types::Publication;

use super::present_details;
use crate::presentation::view_models::{
    EducationViewModel, PeriodViewModel, PublicationViewModel,
};

pub fn present_education(timeline: &EducationTimeline) -> EducationViewModel {
    let selection = timeline.selection();
    let layout = timeline.layout();

    let periods = timeline
        .periods()
        .iter()
        .enumerate()
        .map(|(i, period)| PeriodViewModel {
            institution: period.institution.clone(),
            label: period.short_label().to_string(),
            degree: period.degree.clone(),
            start_date: period.start_date,
            end_date: period.end_date,
            description: period.description.clone(),
            logo_url: period.logo_url.clone(),
            grade: period.grade.clone(),
            highlights: present_details(&period.highlights),
            publications: period.publications.iter().map(present_publication).collect(),
            segment: layout
                .and_then(|l| l.segments.get(i).copied())
                .unwrap_or(Segment {
                    position: 0.0,
                    width: 100.0,
                }),
            selected: selection.is_selected(i),
        })
        .collect();

    EducationViewModel {
        periods,
        ticks: layout.map(|l| l.ticks.clone()).unwrap_or_default(),
        total_span_months: layout.map(|l| l.total_span_months).unwrap_or(0),
        selected: selection.selected(),
    }
}

fn present_publication(publication: &Publication) -> PublicationViewModel {
    let abstract_text = publication
        .r#abstract
        .clone()
        .filter(|text| !text.is_empty());
    PublicationViewModel {
        title: publication.title.clone(),
        url: publication.url.clone().filter(|url| !url.is_empty()),
        publisher: publication.publisher.clone(),
        date: publication.date,
        read_more: abstract_text
            .as_deref()
            .map(abstract_needs_read_more)
            .unwrap_or(false),
        abstract_text,
    }
}
