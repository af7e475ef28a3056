mod footer;
mod nav;
mod scroll;

pub use footer::Footer;
pub use nav::{is_scrolled, Navbar};
pub use scroll::scroll_to_section;
