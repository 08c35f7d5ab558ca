mod app_shell;
pub use app_shell::{use_login_prompt, AppShell, Protected};

mod root;
pub use root::Root;

mod landing;
pub use landing::Landing;

mod explore;
pub use explore::Explore;

mod auth_success;
pub use auth_success::AuthSuccess;

mod post_detail;
pub use post_detail::PostDetail;

mod post_create;
pub use post_create::PostCreate;

mod post_edit;
pub use post_edit::PostEdit;

mod my_code;
pub use my_code::MyCode;

mod settings;
pub use settings::Settings;

mod not_found;
pub use not_found::NotFound;
