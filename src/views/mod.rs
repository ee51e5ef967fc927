pub mod ask;
pub mod health;
pub mod layout;
pub mod settings;
