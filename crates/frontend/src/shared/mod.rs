pub mod config;
pub mod icons;
pub mod modal_frame;
pub mod number_format;
pub mod outside_click;
pub mod page_frame;
