pub mod backend;
pub mod backends;

mod render_list;
pub use render_list::*;
