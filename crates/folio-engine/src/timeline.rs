use folio_types::YearMonth;
use serde::Serialize;

/// Horizontal placement of one period, in percent of the full axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub position: f64,
    pub width: f64,
}

/// Year marker at January of `year`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tick {
    pub year: i32,
    pub position: f64,
}

/// Proportional layout of date ranges on a single axis.
///
/// The axis runs from the earliest start to the latest end. When that span
/// is zero months, every segment covers the whole axis and no ticks are
/// produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayout {
    pub start: YearMonth,
    pub end: YearMonth,
    pub total_span_months: i64,
    pub segments: Vec<Segment>,
    pub ticks: Vec<Tick>,
}

impl TimelineLayout {
    /// Lay out `(start, end)` ranges; None when there are no ranges
    pub fn compute(ranges: &[(YearMonth, YearMonth)]) -> Option<Self> {
        let start = ranges.iter().map(|(s, _)| *s).min()?;
        let end = ranges.iter().map(|(_, e)| *e).max()?;
        let total_span_months = end.month_index() - start.month_index();

        if total_span_months <= 0 {
            return Some(Self {
                start,
                end,
                total_span_months: 0,
                segments: ranges
                    .iter()
                    .map(|_| Segment {
                        position: 0.0,
                        width: 100.0,
                    })
                    .collect(),
                ticks: Vec::new(),
            });
        }

        let scale = |months: i64| months as f64 / total_span_months as f64 * 100.0;

        let segments = ranges
            .iter()
            .map(|(s, e)| {
                let position = scale(s.month_index() - start.month_index()).clamp(0.0, 100.0);
                let width = scale(e.month_index() - s.month_index()).clamp(0.0, 100.0 - position);
                Segment { position, width }
            })
            .collect();

        let ticks = ((start.year() + 1)..=end.year())
            .filter_map(YearMonth::january)
            .map(|jan| Tick {
                year: jan.year(),
                position: scale(jan.month_index() - start.month_index()),
            })
            .collect();

        Some(Self {
            start,
            end,
            total_span_months,
            segments,
            ticks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_has_no_layout() {
        assert!(TimelineLayout::compute(&[]).is_none());
    }

    #[test]
    fn test_segments_stay_inside_axis() {
        let ranges = [
            (ym("2018-01"), ym("2019-06")),
            (ym("2019-09"), ym("2020-09")),
            (ym("2020-10"), ym("2022-06")),
        ];
        let layout = TimelineLayout::compute(&ranges).unwrap();
        assert_eq!(layout.total_span_months, 53);
        for seg in &layout.segments {
            assert!(seg.position >= 0.0);
            assert!(seg.position + seg.width <= 100.0 + 1e-9);
        }
        assert_eq!(layout.segments[0].position, 0.0);
        let last = layout.segments[2];
        assert!((last.position + last.width - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_ticks_start_after_first_year() {
        let ranges = [(ym("2018-01"), ym("2022-06"))];
        let layout = TimelineLayout::compute(&ranges).unwrap();
        let years: Vec<i32> = layout.ticks.iter().map(|t| t.year).collect();
        assert_eq!(years, vec![2019, 2020, 2021, 2022]);
        assert!((layout.ticks[0].position - 12.0 / 53.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_span_is_full_width() {
        let ranges = [(ym("2020-05"), ym("2020-05")), (ym("2020-05"), ym("2020-05"))];
        let layout = TimelineLayout::compute(&ranges).unwrap();
        assert_eq!(layout.total_span_months, 0);
        assert!(layout.ticks.is_empty());
        for seg in &layout.segments {
            assert_eq!((seg.position, seg.width), (0.0, 100.0));
        }
    }
}
