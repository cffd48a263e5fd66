mod health_check;
mod home;
mod subscribers;

pub use health_check::*;
pub use home::*;
pub use subscribers::*;
