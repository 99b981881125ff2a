pub mod template;
mod user_interface;

pub use template::{certificate_file_name, certificate_path, render_certificate, select_user};
pub use user_interface::{handle_certificate, CertificateOutcome};
