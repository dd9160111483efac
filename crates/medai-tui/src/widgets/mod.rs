//! Custom widget components

mod command_palette;
mod document;
mod examples_dialog;
mod explanation_sheet;
mod footer;
mod header;
pub mod modal_overlay;
mod section_nav;
pub mod sections;

pub use command_palette::CommandPalette;
pub use document::Document;
pub use examples_dialog::ExamplesDialog;
pub use explanation_sheet::ExplanationSheet;
pub use footer::Footer;
pub use header::MainHeader;
pub use section_nav::SectionIndicator;
