use folio_engine::Section;

/// Landing page: default tab, default selections
pub const INDEX_PAGE: &str = "index.html";

/// Page for a section with its default selection
pub fn section_page(section: Section) -> String {
    format!("{}.html", section.slug())
}

/// Page for a section with entry `index` selected
pub fn entry_page(section: Section, index: usize) -> String {
    format!("{}-{}.html", section.slug(), index)
}
