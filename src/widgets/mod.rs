// Reusable UI widgets

pub mod button;
pub mod dialog;
pub mod picture;
pub mod text_input;

pub use button::ButtonRow;
pub use dialog::DialogFrame;
pub use picture::{ImageResource, Picture};
pub use text_input::{TextInputWidget, TextInputWidgetExt};
