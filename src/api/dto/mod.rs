pub mod health;
pub mod url;
