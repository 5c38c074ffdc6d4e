mod header;
pub mod toast;

pub use header::Header;
pub use toast::{use_toast, Toast, ToastProvider};
