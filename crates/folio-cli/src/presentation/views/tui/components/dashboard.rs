//! Dashboard Component
//!
//! Owns the dashboard state and maps key presses onto it. The engine keeps
//! every selection in bounds, so rendering never needs to clamp.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_engine::{Carousel, Dashboard};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{ListState, Paragraph},
    Frame,
};

use crate::presentation::presenters::present_dashboard;
use crate::presentation::view_models::SectionViewModel;
use crate::presentation::views::tui::{
    EducationView, EmploymentView, SidebarView, SkillsView, TabsView,
};

/// Actions the component hands back to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    Quit,
}

pub struct DashboardComponent {
    dashboard: Dashboard,
    title: String,
    /// Scroll offset for the entry list - PRIVATE
    list_state: ListState,
    expand_abstracts: bool,
}

impl DashboardComponent {
    pub fn new(dashboard: Dashboard, title: impl Into<String>) -> Self {
        Self {
            dashboard,
            title: title.into(),
            list_state: ListState::default(),
            expand_abstracts: false,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Whether publication abstracts are shown in full
    pub fn abstracts_expanded(&self) -> bool {
        self.expand_abstracts
    }

    /// Handle keyboard input
    ///
    /// Returns an action when the renderer has to respond (only quitting).
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DashboardAction> {
        let section = self.dashboard.active_section();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(DashboardAction::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(DashboardAction::Quit);
            }
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => self.switch(|c| c.next()),
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
                self.switch(|c| c.previous())
            }
            KeyCode::Char(ch @ '1'..='3') => {
                let index = ch as usize - '1' as usize;
                self.switch(|c| {
                    c.select(index);
                });
            }
            KeyCode::Down | KeyCode::Char('j') => self.dashboard.selection_mut(section).next(),
            KeyCode::Up | KeyCode::Char('k') => self.dashboard.selection_mut(section).previous(),
            KeyCode::Home | KeyCode::Char('g') => self.dashboard.selection_mut(section).first(),
            KeyCode::End | KeyCode::Char('G') => self.dashboard.selection_mut(section).last(),
            KeyCode::Char('a') => self.expand_abstracts = !self.expand_abstracts,
            _ => {}
        }
        None
    }

    /// Apply a tab change; a new tab starts with a fresh scroll offset
    fn switch(&mut self, f: impl FnOnce(&mut Carousel)) {
        let before = self.dashboard.active_section();
        f(&mut self.dashboard.carousel);
        if self.dashboard.active_section() != before {
            self.list_state = ListState::default();
            self.expand_abstracts = false;
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let [sidebar_area, main_area] =
            Layout::horizontal([Constraint::Percentage(25), Constraint::Min(0)]).areas(area);
        let [tabs_area, content_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(main_area);

        let view_model = present_dashboard(&self.dashboard, &self.title);
        f.render_widget(SidebarView::new(&view_model.sidebar), sidebar_area);
        f.render_widget(TabsView::new(&view_model.tabs, &self.title), tabs_area);

        match &view_model.content {
            SectionViewModel::Skills(vm) => {
                let view = SkillsView::new(vm);
                if view.is_empty() {
                    f.render_widget(view.build_placeholder(), content_area);
                } else {
                    let [list_area, detail_area] = split_panes(content_area);
                    self.list_state.select(vm.selected);
                    f.render_stateful_widget(view.build_list(), list_area, &mut self.list_state);
                    f.render_widget(view.build_detail(), detail_area);
                }
            }
            SectionViewModel::Employment(vm) => {
                let view = EmploymentView::new(vm);
                if view.is_empty() {
                    f.render_widget(view.build_placeholder(), content_area);
                } else {
                    let [list_area, detail_area] = split_panes(content_area);
                    self.list_state.select(vm.selected);
                    f.render_stateful_widget(view.build_list(), list_area, &mut self.list_state);
                    f.render_widget(view.build_detail(), detail_area);
                }
            }
            SectionViewModel::Education(vm) => {
                let view = EducationView::new(vm);
                if view.is_empty() {
                    f.render_widget(view.build_placeholder(), content_area);
                } else {
                    let [timeline_area, detail_area] = Layout::vertical([
                        Constraint::Length(view.timeline_height()),
                        Constraint::Min(0),
                    ])
                    .areas(content_area);
                    f.render_widget(view.build_timeline(timeline_area.width), timeline_area);
                    f.render_widget(view.build_detail(self.expand_abstracts), detail_area);
                }
            }
        }

        f.render_widget(
            Paragraph::new(" ←/→ tab · ↑/↓ select · 1-3 jump · a abstracts · q quit"),
            help_area,
        );
    }
}

fn split_panes(area: Rect) -> [Rect; 2] {
    Layout::horizontal([Constraint::Length(40), Constraint::Min(0)]).areas(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::{Datasets, Section};
    use folio_types::{Job, Profile};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn job(role: &str) -> Job {
        Job {
            role: role.to_string(),
            company: "Acme".to_string(),
            company_url: None,
            logo_url: None,
            start_date: "2020-01".parse().unwrap(),
            end_date: "2021-01".parse().unwrap(),
            description: None,
            achievements: Vec::new(),
        }
    }

    fn component() -> DashboardComponent {
        let data = Datasets {
            jobs: vec![job("A"), job("B")],
            ..Datasets::default()
        };
        DashboardComponent::new(Dashboard::new(Profile::default(), data), "CV")
    }

    #[test]
    fn test_arrows_move_selection_in_active_section() {
        let mut c = component();
        assert_eq!(c.dashboard().active_section(), Section::Employment);
        c.handle_input(key(KeyCode::Down));
        c.handle_input(key(KeyCode::Down));
        assert_eq!(c.dashboard().employment.selected().unwrap().role, "B");
        c.handle_input(key(KeyCode::Up));
        assert_eq!(c.dashboard().employment.selected().unwrap().role, "A");
    }

    #[test]
    fn test_tab_navigation_wraps() {
        let mut c = component();
        c.handle_input(key(KeyCode::Right));
        assert_eq!(c.dashboard().active_section(), Section::Education);
        c.handle_input(key(KeyCode::Right));
        assert_eq!(c.dashboard().active_section(), Section::Skills);
        c.handle_input(key(KeyCode::Left));
        assert_eq!(c.dashboard().active_section(), Section::Education);
        c.handle_input(key(KeyCode::Char('2')));
        assert_eq!(c.dashboard().active_section(), Section::Employment);
    }

    #[test]
    fn test_abstract_toggle_resets_on_tab_switch() {
        let mut c = component();
        assert!(!c.abstracts_expanded());

        c.handle_input(key(KeyCode::Char('a')));
        assert!(c.abstracts_expanded());
        c.handle_input(key(KeyCode::Char('a')));
        assert!(!c.abstracts_expanded());

        c.handle_input(key(KeyCode::Char('a')));
        c.handle_input(key(KeyCode::Right));
        assert_eq!(c.dashboard().active_section(), Section::Education);
        assert!(!c.abstracts_expanded());

        // Jumping to the tab that is already active keeps the toggle
        c.handle_input(key(KeyCode::Char('a')));
        c.handle_input(key(KeyCode::Char('3')));
        assert!(c.abstracts_expanded());
    }

    #[test]
    fn test_quit() {
        let mut c = component();
        assert_eq!(
            c.handle_input(key(KeyCode::Char('q'))),
            Some(DashboardAction::Quit)
        );
        assert_eq!(c.handle_input(key(KeyCode::Char('x'))), None);
    }
}
