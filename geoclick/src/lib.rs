pub mod app;
pub mod click;
