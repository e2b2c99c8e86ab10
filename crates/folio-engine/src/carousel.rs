use serde::Serialize;
use std::fmt;

/// Content sections of the dashboard, in header order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Skills,
    Employment,
    Education,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Skills, Section::Employment, Section::Education];

    /// Header title
    pub fn title(&self) -> &'static str {
        match self {
            Section::Skills => "Skills",
            Section::Employment => "Employment History",
            Section::Education => "Academic Background",
        }
    }

    /// Stable identifier used in page names and on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Skills => "skills",
            Section::Employment => "employment",
            Section::Education => "education",
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Section::Skills => 0,
            Section::Employment => 1,
            Section::Education => 2,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Tab switcher over `Section::ALL`. Employment is active by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
}

impl Carousel {
    pub const DEFAULT_INDEX: usize = 1;

    pub fn new() -> Self {
        Self {
            current: Self::DEFAULT_INDEX,
        }
    }

    pub fn with_section(section: Section) -> Self {
        Self {
            current: section.position(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Section {
        Section::ALL[self.current]
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.current() == section
    }

    /// Activate the title at `index`; out-of-range positions are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index >= Section::ALL.len() {
            return false;
        }
        self.current = index;
        true
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % Section::ALL.len();
    }

    pub fn previous(&mut self) {
        let n = Section::ALL.len();
        self.current = (self.current + n - 1) % n;
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}
