pub mod connect_modal;
pub mod toast;

pub use connect_modal::ConnectModal;
pub use toast::Toasts;
