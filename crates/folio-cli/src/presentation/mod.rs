//! # Presentation Layer
//!
//! An adaptation of **MVVM (Model-View-ViewModel)**, with one stateful
//! component for the interactive dashboard.
//!
//! ## Architecture & Data Flow
//!
//! ### Static site and console output:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(HTML)==> [ html::HtmlPage ] --> files
//!  (Controller)     (Converter)        (Data)           (Driver)   ==(Text)==> [ console::SectionText ] --> stdout
//!                                                                  ==(JSON)==> [ serde_json ] --> stdout
//! ```
//!
//! ### Interactive TUI:
//!
//! ```text
//! [ Handler ] --> [ TuiRenderer ] --> [ DashboardComponent ] <-- key presses
//!                   (event loop)       (owns Dashboard state)
//!                                               |
//!                                   [ Presenter ] --> [ ViewModel ] --> [ View ] (widgets)
//! ```
//!
//! ## Rules
//!
//! ### 1. Raw data in view models
//! Dates stay `YearMonth`, durations stay month counts, timeline geometry
//! stays in percent. `show --format json` dumps the view model as is, so it
//! is an API.
//!
//! ### 2. Selection lives in the engine
//! Presenters copy `selected` flags out of `folio_engine` selections. Views
//! never compute which entry is selected and never index into lists.
//!
//! ### 3. One view per output
//! HTML, plain text and ratatui each get their own view over the same view
//! model; shared string helpers live in `formatters`.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;
