//! Reusable components. Screens live in the web crate.

mod code_block;
mod confirm_dialog;
mod header;
mod login_form;
mod login_modal;
mod modal_overlay;
mod post_card;
mod post_editor;
mod register_form;
mod status;
mod tag_filter;

pub use code_block::CodeBlock;
pub use confirm_dialog::ConfirmDialog;
pub use header::Header;
pub use login_form::LoginForm;
pub use login_modal::LoginModal;
pub use modal_overlay::ModalOverlay;
pub use post_card::{author_label, PostCard};
pub use post_editor::PostEditor;
pub use register_form::RegisterForm;
pub use status::{ErrorMessage, LoadingIndicator};
pub use tag_filter::TagFilter;
