//! Page components for the Mojju landing site.

mod landing;

pub use landing::Landing;
