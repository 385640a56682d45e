//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{middleware as axum_middleware, Router};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::addresses::{
    CreateAddressUseCase, DeleteAddressUseCase, ListAddressesUseCase, SetDefaultAddressUseCase,
    UpdateAddressTitleUseCase, UpdateAddressUseCase,
};
use crate::application::use_cases::areas::{GetAreaUseCase, ListProvincesUseCase};
use crate::application::use_cases::carts::MergeCartUseCase;
use crate::application::use_cases::histories::{AddBrowseHistoryUseCase, ListBrowseHistoryUseCase};
use crate::application::use_cases::oauth::{BindQqUserUseCase, GetQqLoginUrlUseCase, QqLoginUseCase};
use crate::application::use_cases::payments::{GetPaymentUseCase, RecordPaymentUseCase};
use crate::application::use_cases::users::{
    CountMobileUseCase, CountUsernameUseCase, GetUserProfileUseCase, LoginUseCase, RegisterUserUseCase,
    SendSmsCodeUseCase, UpdateEmailUseCase, VerifyEmailUseCase,
};
use crate::domain::gateways::{
    AddressRepository, AreaRepository, CartStore, HistoryStore, Notifier, PasswordHasher, PaymentRepository,
    QqBindingRepository, QqOAuthClient, SkuRepository, TokenService, UserRepository, VerificationStore,
};
use crate::infrastructure::driven_adapters::config::AppConfig;

/// Everything the HTTP use cases need from the outside world
#[derive(Clone)]
pub struct Gateways {
    pub users: Arc<dyn UserRepository>,
    pub addresses: Arc<dyn AddressRepository>,
    pub areas: Arc<dyn AreaRepository>,
    pub qq_bindings: Arc<dyn QqBindingRepository>,
    pub skus: Arc<dyn SkuRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub histories: Arc<dyn HistoryStore>,
    pub carts: Arc<dyn CartStore>,
    pub verifications: Arc<dyn VerificationStore>,
    pub qq_oauth: Arc<dyn QqOAuthClient>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordHasher>,
    pub notifier: Arc<dyn Notifier>,
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub count_username_use_case: Arc<CountUsernameUseCase>,
    pub count_mobile_use_case: Arc<CountMobileUseCase>,
    pub send_sms_code_use_case: Arc<SendSmsCodeUseCase>,
    pub register_user_use_case: Arc<RegisterUserUseCase>,
    pub login_use_case: Arc<LoginUseCase>,
    pub get_user_profile_use_case: Arc<GetUserProfileUseCase>,
    pub update_email_use_case: Arc<UpdateEmailUseCase>,
    pub verify_email_use_case: Arc<VerifyEmailUseCase>,
    pub get_qq_login_url_use_case: Arc<GetQqLoginUrlUseCase>,
    pub qq_login_use_case: Arc<QqLoginUseCase>,
    pub bind_qq_user_use_case: Arc<BindQqUserUseCase>,
    pub merge_cart_use_case: Arc<MergeCartUseCase>,
    pub list_addresses_use_case: Arc<ListAddressesUseCase>,
    pub create_address_use_case: Arc<CreateAddressUseCase>,
    pub update_address_use_case: Arc<UpdateAddressUseCase>,
    pub delete_address_use_case: Arc<DeleteAddressUseCase>,
    pub update_address_title_use_case: Arc<UpdateAddressTitleUseCase>,
    pub set_default_address_use_case: Arc<SetDefaultAddressUseCase>,
    pub add_browse_history_use_case: Arc<AddBrowseHistoryUseCase>,
    pub list_browse_history_use_case: Arc<ListBrowseHistoryUseCase>,
    pub list_provinces_use_case: Arc<ListProvincesUseCase>,
    pub get_area_use_case: Arc<GetAreaUseCase>,
    pub record_payment_use_case: Arc<RecordPaymentUseCase>,
    pub get_payment_use_case: Arc<GetPaymentUseCase>,
}

impl AppState {
    /// Wire every use case to its gateways
    #[must_use]
    pub fn new(config: Arc<AppConfig>, g: Gateways) -> Self {
        let verify_url = config.email.verify_url.clone();
        Self {
            count_username_use_case: Arc::new(CountUsernameUseCase::new(g.users.clone())),
            count_mobile_use_case: Arc::new(CountMobileUseCase::new(g.users.clone())),
            send_sms_code_use_case: Arc::new(SendSmsCodeUseCase::new(g.verifications.clone(), g.notifier.clone())),
            register_user_use_case: Arc::new(RegisterUserUseCase::new(
                g.users.clone(),
                g.verifications.clone(),
                g.passwords.clone(),
                g.tokens.clone(),
            )),
            login_use_case: Arc::new(LoginUseCase::new(g.users.clone(), g.passwords.clone(), g.tokens.clone())),
            get_user_profile_use_case: Arc::new(GetUserProfileUseCase::new(g.users.clone())),
            update_email_use_case: Arc::new(UpdateEmailUseCase::new(
                g.users.clone(),
                g.tokens.clone(),
                g.notifier.clone(),
                verify_url,
            )),
            verify_email_use_case: Arc::new(VerifyEmailUseCase::new(g.users.clone(), g.tokens.clone())),
            get_qq_login_url_use_case: Arc::new(GetQqLoginUrlUseCase::new(g.qq_oauth.clone())),
            qq_login_use_case: Arc::new(QqLoginUseCase::new(
                g.qq_oauth.clone(),
                g.qq_bindings.clone(),
                g.users.clone(),
                g.tokens.clone(),
            )),
            bind_qq_user_use_case: Arc::new(BindQqUserUseCase::new(
                g.qq_bindings.clone(),
                g.users.clone(),
                g.verifications.clone(),
                g.passwords.clone(),
                g.tokens.clone(),
            )),
            merge_cart_use_case: Arc::new(MergeCartUseCase::new(g.carts.clone())),
            list_addresses_use_case: Arc::new(ListAddressesUseCase::new(g.addresses.clone(), g.users.clone())),
            create_address_use_case: Arc::new(CreateAddressUseCase::new(
                g.addresses.clone(),
                g.areas.clone(),
                g.users.clone(),
            )),
            update_address_use_case: Arc::new(UpdateAddressUseCase::new(g.addresses.clone(), g.areas.clone())),
            delete_address_use_case: Arc::new(DeleteAddressUseCase::new(g.addresses.clone(), g.users.clone())),
            update_address_title_use_case: Arc::new(UpdateAddressTitleUseCase::new(g.addresses.clone())),
            set_default_address_use_case: Arc::new(SetDefaultAddressUseCase::new(
                g.addresses.clone(),
                g.users.clone(),
            )),
            add_browse_history_use_case: Arc::new(AddBrowseHistoryUseCase::new(g.skus.clone(), g.histories.clone())),
            list_browse_history_use_case: Arc::new(ListBrowseHistoryUseCase::new(g.skus.clone(), g.histories)),
            list_provinces_use_case: Arc::new(ListProvincesUseCase::new(g.areas.clone())),
            get_area_use_case: Arc::new(GetAreaUseCase::new(g.areas)),
            record_payment_use_case: Arc::new(RecordPaymentUseCase::new(g.payments.clone())),
            get_payment_use_case: Arc::new(GetPaymentUseCase::new(g.payments)),
            config,
        }
    }
}

/// Build the full API router
///
/// The `add_config_extension` layer makes the config available to the
/// `JwtAuth` extractor; request ids wrap every request.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::users::router())
        .merge(handlers::oauth::router())
        .merge(handlers::addresses::router())
        .merge(handlers::histories::router())
        .merge(handlers::areas::router())
        .merge(handlers::payments::router())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::add_config_extension,
        ))
        .layer(axum_middleware::from_fn(middleware::request_id::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
