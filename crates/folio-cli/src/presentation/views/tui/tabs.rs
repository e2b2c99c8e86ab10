use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs, Widget},
};

use crate::presentation::view_models::TabViewModel;

/// Header row with every section title; the active one is emphasized
pub struct TabsView<'a> {
    tabs: &'a [TabViewModel],
    title: &'a str,
}

impl<'a> TabsView<'a> {
    pub fn new(tabs: &'a [TabViewModel], title: &'a str) -> Self {
        Self { tabs, title }
    }
}

impl Widget for TabsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<String> = self.tabs.iter().map(|tab| tab.title.clone()).collect();
        let active = self.tabs.iter().position(|tab| tab.active).unwrap_or(0);

        Tabs::new(titles)
            .select(active)
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .render(area, buf);
    }
}
