//! HTTP request handlers.

pub mod fallback;
pub mod redirect;
pub mod root;
pub mod shorten;

pub use fallback::not_found_handler;
pub use redirect::redirect_handler;
pub use root::root_handler;
pub use shorten::shorten_handler;
