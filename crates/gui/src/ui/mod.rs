pub mod extrude_menu;
pub mod status_bar;
