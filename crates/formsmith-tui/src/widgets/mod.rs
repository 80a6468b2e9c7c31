//! Custom widget components

mod confirm_dialog;
mod field_cards;
mod footer;
mod header;
mod input_text;
pub mod modal_overlay;
mod notice;
mod result_modal;
mod wrap;

pub use confirm_dialog::ConfirmDialog;
pub use field_cards::{card_height, layout_cards, placeholders, FieldCards, MAX_VALUE_ROWS};
pub use footer::Footer;
pub use header::MainHeader;
pub use notice::Notice;
pub use result_modal::{result_max_scroll, ResultModal, COPIED_LABEL};
