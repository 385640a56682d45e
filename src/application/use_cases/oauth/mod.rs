//! QQ OAuth Use Cases

mod bind_qq_user;
mod get_qq_login_url;
mod qq_login;

pub use bind_qq_user::{BindQqData, BindQqUserUseCase};
pub use get_qq_login_url::GetQqLoginUrlUseCase;
pub use qq_login::{QqLoginOutcome, QqLoginUseCase};
