mod delete;
mod health;
mod redirect;
mod save;

pub use delete::delete_handler;
pub use health::{health_handler, index_handler};
pub use redirect::redirect_handler;
pub use save::save_handler;
