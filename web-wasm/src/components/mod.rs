//! UIコンポーネント

pub mod about;
pub mod contact;
pub mod deferred;
pub mod education;
pub mod footer;
pub mod hero;
pub mod loading_spinner;
pub mod navbar;
pub mod project_card;
pub mod project_details;
pub mod project_search;
pub mod projects;
pub mod scroll_to_top;
pub mod seo;
pub mod skills;
pub mod theme_toggle;
