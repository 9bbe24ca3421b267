mod contact;
mod content;
mod health_check;
mod helpers;
mod home;
mod newsletter;
mod static_files;

pub use contact::*;
pub use content::*;
pub use health_check::*;
pub use helpers::SubmissionResponse;
pub use home::*;
pub use newsletter::*;
pub use static_files::*;
