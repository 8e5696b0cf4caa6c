pub mod layout;
pub mod options;
pub mod types;

pub use layout::{BAR_GAP_PX, bar_slot_width, label_font_size, layout_bars, max_value};
pub use options::ChartOptions;
pub use types::{Bar, DataPoint, Viewport};
