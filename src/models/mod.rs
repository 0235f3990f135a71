pub mod commander;
pub mod credentials;
pub mod deck_post;
pub mod exit_code;
pub mod notice;
pub mod settings;
