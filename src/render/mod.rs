pub mod bar;
pub mod braille;
pub mod frame;
pub mod pie;
pub mod sections;
pub mod table;

pub use braille::{BraillePlot, bars_to_braille};
pub use frame::{PlotBody, render_frame};
pub use sections::render_section;
pub use table::TableView;
