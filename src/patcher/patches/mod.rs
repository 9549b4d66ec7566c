pub mod custom;
pub mod menus;
pub mod panels;
pub mod revealer;
pub mod settings;
pub mod styles;
