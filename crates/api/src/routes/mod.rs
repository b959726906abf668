pub mod characters;
pub mod health;
