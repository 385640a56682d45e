//! In-Memory Adapters
//!
//! Gateway implementations backed by `Mutex`-guarded collections, used by
//! the unit tests and the router tests under `tests/`. Inherent `seed_*`
//! helpers load fixtures without going through the gateways.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::domain::gateways::{
    AddressRepository, AreaRepository, CartStore, ContentRepository, HistoryStore, Notifier, PaymentRepository,
    QqBindingRepository, SkuRepository, UserRepository, VerificationStore,
};
use crate::domain::models::address::{Address, AddressData, AddressId};
use crate::domain::models::area::{Area, AreaRef};
use crate::domain::models::cart::CartItem;
use crate::domain::models::content::{Content, ContentCategory, GoodsCategory, GoodsChannel};
use crate::domain::models::oauth::QqBinding;
use crate::domain::models::payment::{Order, OrderStatus, Payment};
use crate::domain::models::sku::Sku;
use crate::domain::models::user::{NewUser, User, UserId};
use crate::shared::errors::{RepositoryError, ServiceError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Default)]
struct Tables {
    next_id: i64,
    users: BTreeMap<i64, User>,
    areas: BTreeMap<i64, Area>,
    addresses: BTreeMap<i64, Address>,
    bindings: Vec<QqBinding>,
    skus: BTreeMap<i64, Sku>,
    orders: BTreeMap<String, Order>,
    payments: Vec<Payment>,
    channels: Vec<GoodsChannel>,
    goods_categories: Vec<GoodsCategory>,
    content_categories: Vec<ContentCategory>,
    contents: Vec<Content>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn area_ref(&self, id: i64) -> Result<AreaRef, RepositoryError> {
        self.areas
            .get(&id)
            .map(Area::to_area_ref)
            .ok_or_else(|| RepositoryError::NotFound(format!("area {id}")))
    }

    fn build_address(
        &self,
        id: AddressId,
        user_id: UserId,
        data: &AddressData,
        created_at: chrono::DateTime<Utc>,
    ) -> Result<Address, RepositoryError> {
        Ok(Address::restore(
            id,
            user_id,
            data.effective_title(),
            data.receiver.clone(),
            self.area_ref(data.province_id)?,
            self.area_ref(data.city_id)?,
            self.area_ref(data.district_id)?,
            data.place.clone(),
            data.mobile.clone(),
            data.tel.clone(),
            data.email.clone(),
            false,
            created_at,
            Utc::now(),
        ))
    }

    fn replace_user(&mut self, user: &User, email: Option<String>, email_active: bool, default: Option<AddressId>) {
        let updated = User::restore(
            user.id(),
            user.username().to_string(),
            user.password_hash().to_string(),
            user.mobile().to_string(),
            email,
            email_active,
            default,
            user.created_at(),
            Utc::now(),
        );
        self.users.insert(user.id().value(), updated);
    }
}

/// Relational data held in memory
#[derive(Default)]
pub struct InMemoryDatabase {
    tables: Mutex<Tables>,
}

impl InMemoryDatabase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user directly; `password_hash` is stored as given
    pub fn seed_user(&self, username: &str, password_hash: &str, mobile: &str) -> User {
        let mut tables = lock(&self.tables);
        let id = tables.next_id();
        let now = Utc::now();
        let user = User::restore(
            UserId::new(id),
            username.to_string(),
            password_hash.to_string(),
            mobile.to_string(),
            None,
            false,
            None,
            now,
            now,
        );
        tables.users.insert(id, user.clone());
        user
    }

    #[must_use]
    pub fn user(&self, id: UserId) -> Option<User> {
        lock(&self.tables).users.get(&id.value()).cloned()
    }

    /// User bound to a QQ openid
    #[must_use]
    pub fn binding_for(&self, openid: &str) -> Option<UserId> {
        lock(&self.tables)
            .bindings
            .iter()
            .find(|b| b.openid == openid)
            .map(|b| b.user_id)
    }

    pub fn seed_area(&self, id: i64, name: &str, parent_id: Option<i64>) {
        lock(&self.tables).areas.insert(
            id,
            Area {
                id,
                name: name.to_string(),
                parent_id,
            },
        );
    }

    /// Insert an address; unknown area ids resolve to empty names
    pub fn seed_address(&self, user_id: UserId, data: &AddressData) -> Address {
        let mut tables = lock(&self.tables);
        let id = AddressId::new(tables.next_id());
        let name_of = |area: i64| AreaRef {
            id: area,
            name: tables.areas.get(&area).map(|a| a.name.clone()).unwrap_or_default(),
        };
        let now = Utc::now();
        let address = Address::restore(
            id,
            user_id,
            data.effective_title(),
            data.receiver.clone(),
            name_of(data.province_id),
            name_of(data.city_id),
            name_of(data.district_id),
            data.place.clone(),
            data.mobile.clone(),
            data.tel.clone(),
            data.email.clone(),
            false,
            now,
            now,
        );
        tables.addresses.insert(id.value(), address.clone());
        address
    }

    #[must_use]
    pub fn address(&self, id: AddressId) -> Option<Address> {
        lock(&self.tables).addresses.get(&id.value()).cloned()
    }

    pub fn seed_sku(&self, id: i64, name: &str, is_launched: bool) {
        lock(&self.tables).skus.insert(
            id,
            Sku {
                id,
                name: name.to_string(),
                price: Decimal::new(199_900, 2),
                default_image_url: format!("group1/M00/00/{id:02}.jpg"),
                comments: 0,
                is_launched,
            },
        );
    }

    pub fn seed_order(&self, order_id: &str, user_id: UserId, status: OrderStatus) {
        lock(&self.tables).orders.insert(
            order_id.to_string(),
            Order {
                order_id: order_id.to_string(),
                user_id,
                total_amount: Decimal::new(9_900, 2),
                status,
            },
        );
    }

    #[must_use]
    pub fn order_status(&self, order_id: &str) -> Option<OrderStatus> {
        lock(&self.tables).orders.get(order_id).map(|o| o.status)
    }

    pub fn seed_goods_category(&self, category: GoodsCategory) {
        lock(&self.tables).goods_categories.push(category);
    }

    pub fn seed_channel(&self, channel: GoodsChannel) {
        lock(&self.tables).channels.push(channel);
    }

    pub fn seed_content_category(&self, category: ContentCategory) {
        lock(&self.tables).content_categories.push(category);
    }

    pub fn seed_content(&self, content: Content) {
        lock(&self.tables).contents.push(content);
    }
}

#[async_trait]
impl UserRepository for InMemoryDatabase {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.user(id))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(lock(&self.tables)
            .users
            .values()
            .find(|u| u.username() == username)
            .cloned())
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, RepositoryError> {
        Ok(lock(&self.tables).users.values().find(|u| u.mobile() == mobile).cloned())
    }

    async fn count_by_username(&self, username: &str) -> Result<i64, RepositoryError> {
        let tables = lock(&self.tables);
        Ok(tables.users.values().filter(|u| u.username() == username).count() as i64)
    }

    async fn count_by_mobile(&self, mobile: &str) -> Result<i64, RepositoryError> {
        let tables = lock(&self.tables);
        Ok(tables.users.values().filter(|u| u.mobile() == mobile).count() as i64)
    }

    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        {
            let tables = lock(&self.tables);
            if tables
                .users
                .values()
                .any(|u| u.username() == user.username || u.mobile() == user.mobile)
            {
                return Err(RepositoryError::Duplicate(format!("user {}", user.username)));
            }
        }
        Ok(self.seed_user(&user.username, &user.password_hash, &user.mobile))
    }

    async fn update_email(&self, user: &User) -> Result<Option<User>, RepositoryError> {
        let mut tables = lock(&self.tables);
        let Some(stored) = tables.users.get(&user.id().value()).cloned() else {
            return Ok(None);
        };
        tables.replace_user(
            &stored,
            user.email().map(str::to_string),
            user.email_active(),
            stored.default_address_id(),
        );
        Ok(tables.users.get(&user.id().value()).cloned())
    }

    async fn set_default_address(&self, id: UserId, address_id: Option<AddressId>) -> Result<bool, RepositoryError> {
        let mut tables = lock(&self.tables);
        let Some(stored) = tables.users.get(&id.value()).cloned() else {
            return Ok(false);
        };
        tables.replace_user(
            &stored,
            stored.email().map(str::to_string),
            stored.email_active(),
            address_id,
        );
        Ok(true)
    }
}

#[async_trait]
impl AddressRepository for InMemoryDatabase {
    async fn find_by_id(&self, id: AddressId) -> Result<Option<Address>, RepositoryError> {
        Ok(self.address(id))
    }

    async fn list_active(&self, user_id: UserId) -> Result<Vec<Address>, RepositoryError> {
        let tables = lock(&self.tables);
        let mut addresses: Vec<Address> = tables
            .addresses
            .values()
            .filter(|a| a.is_visible_to(user_id))
            .cloned()
            .collect();
        addresses.sort_by(|a, b| {
            b.updated_at()
                .cmp(&a.updated_at())
                .then_with(|| b.id().value().cmp(&a.id().value()))
        });
        Ok(addresses)
    }

    async fn count_active(&self, user_id: UserId) -> Result<i64, RepositoryError> {
        let tables = lock(&self.tables);
        Ok(tables.addresses.values().filter(|a| a.is_visible_to(user_id)).count() as i64)
    }

    async fn create(&self, user_id: UserId, data: &AddressData) -> Result<Address, RepositoryError> {
        let mut tables = lock(&self.tables);
        let id = AddressId::new(tables.next_id());
        let address = tables.build_address(id, user_id, data, Utc::now())?;
        tables.addresses.insert(id.value(), address.clone());
        Ok(address)
    }

    async fn update(&self, id: AddressId, data: &AddressData) -> Result<Option<Address>, RepositoryError> {
        let mut tables = lock(&self.tables);
        let Some(current) = tables.addresses.get(&id.value()).filter(|a| !a.is_deleted()).cloned() else {
            return Ok(None);
        };
        let address = tables.build_address(id, current.user_id(), data, current.created_at())?;
        tables.addresses.insert(id.value(), address.clone());
        Ok(Some(address))
    }

    async fn update_title(&self, id: AddressId, title: &str) -> Result<bool, RepositoryError> {
        let mut tables = lock(&self.tables);
        let Some(current) = tables.addresses.get(&id.value()).filter(|a| !a.is_deleted()).cloned() else {
            return Ok(false);
        };
        let updated = Address::restore(
            id,
            current.user_id(),
            title.to_string(),
            current.receiver().to_string(),
            current.province().clone(),
            current.city().clone(),
            current.district().clone(),
            current.place().to_string(),
            current.mobile().to_string(),
            current.tel().map(str::to_string),
            current.email().map(str::to_string),
            false,
            current.created_at(),
            Utc::now(),
        );
        tables.addresses.insert(id.value(), updated);
        Ok(true)
    }

    async fn soft_delete(&self, id: AddressId) -> Result<bool, RepositoryError> {
        let mut tables = lock(&self.tables);
        let Some(current) = tables.addresses.get(&id.value()).filter(|a| !a.is_deleted()).cloned() else {
            return Ok(false);
        };
        let deleted = Address::restore(
            id,
            current.user_id(),
            current.title().to_string(),
            current.receiver().to_string(),
            current.province().clone(),
            current.city().clone(),
            current.district().clone(),
            current.place().to_string(),
            current.mobile().to_string(),
            current.tel().map(str::to_string),
            current.email().map(str::to_string),
            true,
            current.created_at(),
            Utc::now(),
        );
        tables.addresses.insert(id.value(), deleted);
        Ok(true)
    }
}

#[async_trait]
impl AreaRepository for InMemoryDatabase {
    async fn find_by_id(&self, id: i64) -> Result<Option<Area>, RepositoryError> {
        Ok(lock(&self.tables).areas.get(&id).cloned())
    }

    async fn list_provinces(&self) -> Result<Vec<Area>, RepositoryError> {
        Ok(lock(&self.tables)
            .areas
            .values()
            .filter(|a| a.is_province())
            .cloned()
            .collect())
    }

    async fn list_children(&self, parent_id: i64) -> Result<Vec<Area>, RepositoryError> {
        Ok(lock(&self.tables)
            .areas
            .values()
            .filter(|a| a.is_child_of(parent_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl QqBindingRepository for InMemoryDatabase {
    async fn find_by_openid(&self, openid: &str) -> Result<Option<QqBinding>, RepositoryError> {
        Ok(lock(&self.tables)
            .bindings
            .iter()
            .find(|b| b.openid == openid)
            .cloned())
    }

    async fn create(&self, user_id: UserId, openid: &str) -> Result<QqBinding, RepositoryError> {
        let mut tables = lock(&self.tables);
        if tables.bindings.iter().any(|b| b.openid == openid) {
            return Err(RepositoryError::Duplicate(format!("openid {openid}")));
        }
        let binding = QqBinding {
            id: tables.next_id(),
            user_id,
            openid: openid.to_string(),
            created_at: Utc::now(),
        };
        tables.bindings.push(binding.clone());
        Ok(binding)
    }
}

#[async_trait]
impl SkuRepository for InMemoryDatabase {
    async fn find_by_id(&self, id: i64) -> Result<Option<Sku>, RepositoryError> {
        Ok(lock(&self.tables).skus.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Sku>, RepositoryError> {
        let tables = lock(&self.tables);
        Ok(tables
            .skus
            .values()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PaymentRepository for InMemoryDatabase {
    async fn find_order(&self, order_id: &str) -> Result<Option<Order>, RepositoryError> {
        Ok(lock(&self.tables).orders.get(order_id).cloned())
    }

    async fn find_by_order(&self, order_id: &str) -> Result<Option<Payment>, RepositoryError> {
        Ok(lock(&self.tables)
            .payments
            .iter()
            .rev()
            .find(|p| p.order_id == order_id)
            .cloned())
    }

    async fn record(&self, order_id: &str, trade_no: &str) -> Result<Option<Payment>, RepositoryError> {
        let mut tables = lock(&self.tables);
        match tables.orders.get_mut(order_id) {
            Some(order) if order.is_payable() => order.status = OrderStatus::Unsent,
            _ => return Ok(None),
        }
        let now = Utc::now();
        let payment = Payment {
            id: tables.next_id(),
            order_id: order_id.to_string(),
            trade_no: trade_no.to_string(),
            create_time: now,
            update_time: now,
        };
        tables.payments.push(payment.clone());
        Ok(Some(payment))
    }
}

#[async_trait]
impl ContentRepository for InMemoryDatabase {
    async fn list_channels(&self) -> Result<Vec<GoodsChannel>, RepositoryError> {
        let mut channels = lock(&self.tables).channels.clone();
        channels.sort_by_key(|c| (c.group_id, c.sequence));
        Ok(channels)
    }

    async fn list_goods_categories(&self) -> Result<Vec<GoodsCategory>, RepositoryError> {
        Ok(lock(&self.tables).goods_categories.clone())
    }

    async fn list_content_categories(&self) -> Result<Vec<ContentCategory>, RepositoryError> {
        Ok(lock(&self.tables).content_categories.clone())
    }

    async fn list_active_contents(&self) -> Result<Vec<Content>, RepositoryError> {
        let mut contents: Vec<Content> = lock(&self.tables)
            .contents
            .iter()
            .filter(|c| c.status)
            .cloned()
            .collect();
        contents.sort_by_key(|c| c.sequence);
        Ok(contents)
    }
}

#[derive(Default)]
struct KeyValueState {
    sms_codes: HashMap<String, (String, Instant)>,
    sms_locks: HashMap<String, Instant>,
    histories: HashMap<UserId, Vec<i64>>,
    carts: HashMap<UserId, HashMap<i64, (u32, bool)>>,
}

/// Expiring key-value state: SMS codes, browsing history and carts
#[derive(Default)]
pub struct InMemoryKeyValue {
    state: Mutex<KeyValueState>,
}

impl InMemoryKeyValue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn history(&self, user_id: UserId) -> Vec<i64> {
        lock(&self.state).histories.get(&user_id).cloned().unwrap_or_default()
    }

    /// sku id → (count, selected)
    #[must_use]
    pub fn cart(&self, user_id: UserId) -> HashMap<i64, (u32, bool)> {
        lock(&self.state).carts.get(&user_id).cloned().unwrap_or_default()
    }

    /// Live SMS code for `mobile`
    #[must_use]
    pub fn sms_code(&self, mobile: &str) -> Option<String> {
        let state = lock(&self.state);
        state
            .sms_codes
            .get(mobile)
            .filter(|(_, expires)| *expires > Instant::now())
            .map(|(code, _)| code.clone())
    }
}

#[async_trait]
impl VerificationStore for InMemoryKeyValue {
    async fn is_send_locked(&self, mobile: &str) -> Result<bool, RepositoryError> {
        let state = lock(&self.state);
        Ok(state
            .sms_locks
            .get(mobile)
            .is_some_and(|expires| *expires > Instant::now()))
    }

    async fn save_sms_code(
        &self,
        mobile: &str,
        code: &str,
        code_ttl: Duration,
        lock_ttl: Duration,
    ) -> Result<(), RepositoryError> {
        let now = Instant::now();
        let mut state = lock(&self.state);
        state
            .sms_codes
            .insert(mobile.to_string(), (code.to_string(), now + code_ttl));
        state.sms_locks.insert(mobile.to_string(), now + lock_ttl);
        Ok(())
    }

    async fn get_sms_code(&self, mobile: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self.sms_code(mobile))
    }

    async fn delete_sms_code(&self, mobile: &str) -> Result<(), RepositoryError> {
        lock(&self.state).sms_codes.remove(mobile);
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for InMemoryKeyValue {
    async fn push(&self, user_id: UserId, sku_id: i64, limit: usize) -> Result<(), RepositoryError> {
        let mut state = lock(&self.state);
        let history = state.histories.entry(user_id).or_default();
        history.retain(|id| *id != sku_id);
        history.insert(0, sku_id);
        history.truncate(limit);
        Ok(())
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<i64>, RepositoryError> {
        Ok(self.history(user_id))
    }
}

#[async_trait]
impl CartStore for InMemoryKeyValue {
    async fn merge(&self, user_id: UserId, items: &[CartItem]) -> Result<(), RepositoryError> {
        let mut state = lock(&self.state);
        let cart = state.carts.entry(user_id).or_default();
        for item in items {
            cart.insert(item.sku_id, (item.count, item.selected));
        }
        Ok(())
    }
}

/// Notifier that keeps every message for inspection
#[derive(Default)]
pub struct RecordingNotifier {
    sms: Mutex<Vec<(String, String)>>,
    emails: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sent SMS codes as `(mobile, code)`
    #[must_use]
    pub fn sms(&self) -> Vec<(String, String)> {
        lock(&self.sms).clone()
    }

    /// Sent verification e-mails as `(email, link)`
    #[must_use]
    pub fn emails(&self) -> Vec<(String, String)> {
        lock(&self.emails).clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_sms_code(&self, mobile: &str, code: &str, _expires_minutes: u64) -> Result<(), ServiceError> {
        lock(&self.sms).push((mobile.to_string(), code.to_string()));
        Ok(())
    }

    async fn send_verification_email(&self, email: &str, verify_url: &str) -> Result<(), ServiceError> {
        lock(&self.emails).push((email.to_string(), verify_url.to_string()));
        Ok(())
    }
}
