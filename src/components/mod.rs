pub mod avatar;
pub mod history_sidebar;
pub mod profile_card;
