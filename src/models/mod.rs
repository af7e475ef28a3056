pub mod contact;
pub mod content;

pub use contact::{validate, ContactFormRecord, Field, FieldErrors};
pub use content::{Carousel, Category, Direction, Section};
