mod about;
mod contact;
mod hero;
mod impact;
mod portfolio;
mod services;
mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use impact::Impact;
pub use portfolio::Portfolio;
pub use services::Services;
pub use testimonials::Testimonials;
