pub mod console_view;
pub mod message_box;
