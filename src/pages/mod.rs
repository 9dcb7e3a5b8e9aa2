//! Pages
//!
//! One component per navigation tab.

mod about;
mod contact;
mod gallery;
mod home;
mod services;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use services::ServicesPage;
