//! Presentational components for the portfolio page.

pub mod about;
pub mod background;
pub mod contact;
pub mod hero;
pub mod icons;
pub mod nav_bar;
pub mod projects;
pub mod skills;
