//! In-memory repository fakes shared by the integration tests.
//!
//! Unlike the per-usecase stubs in the unit tests, these implement the
//! real filtering, scoping, and mutation semantics over shared vectors,
//! so several use cases can be driven against one store and the final
//! state inspected.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use shipway_api::domain::repository::{
    BankAccountRepository, DriverRepository, LogisticRepository, OrderRepository,
    PackageRepository, PaymentGateway, PricePackageRepository, TransactionRepository,
    UserRepository,
};
use shipway_api::domain::types::{
    BankAccount, CargoType, Driver, DriverContact, DriverPatch, Logistic, LogisticPatch, Order,
    Package, PackagePatch, PricePackage, PricePackagePatch, Profile, ProfilePatch, Transaction,
    TransactionStatus, User,
};
use shipway_api::error::ApiServiceError;
use shipway_auth_types::scope::PackageScope;
use shipway_domain::pagination::PageRequest;

fn paginate<T: Clone>(items: &[T], page: PageRequest) -> Vec<T> {
    let page = page.clamped();
    let skip = ((page.page - 1) * page.per_page) as usize;
    items
        .iter()
        .skip(skip)
        .take(page.per_page as usize)
        .cloned()
        .collect()
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
    pub profiles: Arc<Mutex<Vec<Profile>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>, profiles: Vec<Profile>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            profiles: Arc::new(Mutex::new(profiles)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![], vec![])
    }

    /// A second view over the same stored accounts, for driving another use case.
    pub fn share(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            profiles: Arc::clone(&self.profiles),
        }
    }

    /// Returns a shared handle to the stored users for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }

    /// Returns a shared handle to the stored profiles for post-execution inspection.
    pub fn profiles_handle(&self) -> Arc<Mutex<Vec<Profile>>> {
        Arc::clone(&self.profiles)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, ApiServiceError> {
        Ok(paginate(&self.users.lock().unwrap(), page))
    }

    async fn create_with_profile(
        &self,
        user: &User,
        profile: &Profile,
    ) -> Result<(), ApiServiceError> {
        self.users.lock().unwrap().push(user.clone());
        self.profiles.lock().unwrap().push(profile.clone());
        Ok(())
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<Profile>, ApiServiceError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        patch: &ProfilePatch,
    ) -> Result<bool, ApiServiceError> {
        let mut profiles = self.profiles.lock().unwrap();
        let profile = match profiles.iter_mut().find(|p| p.user_id == user_id) {
            Some(profile) => profile,
            None => return Ok(false),
        };
        if let Some(first_name) = &patch.first_name {
            profile.first_name = first_name.clone();
        }
        if let Some(last_name) = &patch.last_name {
            profile.last_name = last_name.clone();
        }
        if let Some(phone) = &patch.phone {
            profile.phone = phone.clone();
        }
        if let Some(address) = &patch.address {
            profile.address = address.clone();
        }
        if let Some(city) = &patch.city {
            profile.city = city.clone();
        }
        if let Some(state) = &patch.state {
            profile.state = state.clone();
        }
        if let Some(zip) = &patch.zip {
            profile.zip = zip.clone();
        }
        if let Some(about) = &patch.about {
            profile.about = about.clone();
        }
        if let Some(account_type) = patch.account_type {
            profile.account_type = Some(account_type);
        }
        Ok(true)
    }

    async fn mark_email_verified(&self, user_id: Uuid) -> Result<bool, ApiServiceError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == user_id) {
            Some(user) => {
                user.verified_email = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ── MockLogisticRepo ─────────────────────────────────────────────────────────

pub struct MockLogisticRepo {
    pub logistics: Vec<Logistic>,
}

impl MockLogisticRepo {
    pub fn new(logistics: Vec<Logistic>) -> Self {
        Self { logistics }
    }
}

impl LogisticRepository for MockLogisticRepo {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Logistic>, ApiServiceError> {
        Ok(self
            .logistics
            .iter()
            .find(|l| l.user_id == user_id)
            .cloned())
    }

    async fn update(
        &self,
        user_id: Uuid,
        _patch: &LogisticPatch,
    ) -> Result<bool, ApiServiceError> {
        Ok(self.logistics.iter().any(|l| l.user_id == user_id))
    }
}

// ── MockOfferRepo ────────────────────────────────────────────────────────────

pub struct MockOfferRepo {
    pub offers: Vec<PricePackage>,
}

impl MockOfferRepo {
    pub fn new(offers: Vec<PricePackage>) -> Self {
        Self { offers }
    }
}

impl PricePackageRepository for MockOfferRepo {
    async fn find_matching_route(
        &self,
        pickup_location: &str,
        delivery_location: &str,
    ) -> Result<Vec<PricePackage>, ApiServiceError> {
        Ok(self
            .offers
            .iter()
            .filter(|o| {
                o.pickup_location.eq_ignore_ascii_case(pickup_location)
                    && o.delivery_location.eq_ignore_ascii_case(delivery_location)
            })
            .cloned()
            .collect())
    }

    async fn find_by_tracking_code(
        &self,
        tracking_code: &str,
    ) -> Result<Option<PricePackage>, ApiServiceError> {
        Ok(self
            .offers
            .iter()
            .find(|o| o.tracking_code == tracking_code)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PricePackage>, ApiServiceError> {
        Ok(self.offers.iter().find(|o| o.id == id).cloned())
    }

    async fn create(&self, _price_package: &PricePackage) -> Result<(), ApiServiceError> {
        Ok(())
    }

    async fn update(
        &self,
        logistic_id: Uuid,
        tracking_code: &str,
        _patch: &PricePackagePatch,
    ) -> Result<bool, ApiServiceError> {
        Ok(self
            .offers
            .iter()
            .any(|o| o.logistic_id == logistic_id && o.tracking_code == tracking_code))
    }

    async fn delete(
        &self,
        logistic_id: Uuid,
        tracking_code: &str,
    ) -> Result<bool, ApiServiceError> {
        Ok(self
            .offers
            .iter()
            .any(|o| o.logistic_id == logistic_id && o.tracking_code == tracking_code))
    }
}

// ── MockPackageRepo ──────────────────────────────────────────────────────────

pub struct MockPackageRepo {
    pub packages: Arc<Mutex<Vec<Package>>>,
    pub offers: Vec<PricePackage>,
    pub links: Arc<Mutex<Vec<(Uuid, Uuid)>>>,
}

impl MockPackageRepo {
    pub fn new(packages: Vec<Package>, offers: Vec<PricePackage>) -> Self {
        Self {
            packages: Arc::new(Mutex::new(packages)),
            offers,
            links: Arc::new(Mutex::new(vec![])),
        }
    }

    /// A second view over the same stored packages, for driving another use case.
    pub fn share(&self) -> Self {
        Self {
            packages: Arc::clone(&self.packages),
            offers: self.offers.clone(),
            links: Arc::clone(&self.links),
        }
    }

    /// Returns a shared handle to the stored packages for post-execution inspection.
    pub fn packages_handle(&self) -> Arc<Mutex<Vec<Package>>> {
        Arc::clone(&self.packages)
    }

    /// Seed a candidate link as if the package had been created against the offer.
    pub fn link(&self, package_id: Uuid, price_package_id: Uuid) {
        self.links.lock().unwrap().push((package_id, price_package_id));
    }
}

impl PackageRepository for MockPackageRepo {
    async fn list(
        &self,
        scope: PackageScope,
        page: PageRequest,
    ) -> Result<Vec<Package>, ApiServiceError> {
        let visible: Vec<Package> = self
            .packages
            .lock()
            .unwrap()
            .iter()
            .filter(|p| scope.allows(p.user_id))
            .cloned()
            .collect();
        Ok(paginate(&visible, page))
    }

    async fn search_by_tracking_code(
        &self,
        scope: PackageScope,
        tracking_code: &str,
        page: PageRequest,
    ) -> Result<Vec<Package>, ApiServiceError> {
        let needle = tracking_code.to_lowercase();
        let visible: Vec<Package> = self
            .packages
            .lock()
            .unwrap()
            .iter()
            .filter(|p| scope.allows(p.user_id) && p.tracking_code.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(paginate(&visible, page))
    }

    async fn find_by_tracking_code(
        &self,
        scope: PackageScope,
        tracking_code: &str,
    ) -> Result<Option<Package>, ApiServiceError> {
        Ok(self
            .packages
            .lock()
            .unwrap()
            .iter()
            .find(|p| scope.allows(p.user_id) && p.tracking_code == tracking_code)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Package>, ApiServiceError> {
        Ok(self
            .packages
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create_with_candidates(
        &self,
        package: &Package,
        price_package_ids: &[Uuid],
    ) -> Result<(), ApiServiceError> {
        self.packages.lock().unwrap().push(package.clone());
        let mut links = self.links.lock().unwrap();
        for id in price_package_ids {
            links.push((package.id, *id));
        }
        Ok(())
    }

    async fn update(
        &self,
        scope: PackageScope,
        tracking_code: &str,
        patch: &PackagePatch,
    ) -> Result<bool, ApiServiceError> {
        let mut packages = self.packages.lock().unwrap();
        let package = match packages
            .iter_mut()
            .find(|p| scope.allows(p.user_id) && p.tracking_code == tracking_code)
        {
            Some(package) => package,
            None => return Ok(false),
        };
        if let Some(cargo_name) = &patch.cargo_name {
            package.cargo_name = cargo_name.clone();
        }
        if let Some(cargo_type) = patch.cargo_type {
            package.cargo_type = cargo_type;
        }
        if let Some(weight) = patch.weight {
            package.weight = weight;
        }
        if let Some(quantity) = patch.quantity {
            package.quantity = quantity;
        }
        if let Some(pickup_location) = &patch.pickup_location {
            package.pickup_location = pickup_location.clone();
        }
        if let Some(delivery_location) = &patch.delivery_location {
            package.delivery_location = delivery_location.clone();
        }
        package.updated_at = Utc::now();
        Ok(true)
    }

    async fn candidates(&self, package_id: Uuid) -> Result<Vec<PricePackage>, ApiServiceError> {
        let links = self.links.lock().unwrap();
        Ok(self
            .offers
            .iter()
            .filter(|o| links.iter().any(|(p, pp)| *p == package_id && *pp == o.id))
            .cloned()
            .collect())
    }
}

// ── MockOrderRepo ────────────────────────────────────────────────────────────

pub struct MockOrderRepo {
    pub orders: Arc<Mutex<Vec<Order>>>,
    pub packages: Vec<Package>,
    pub offers: Vec<PricePackage>,
    pub paid_order_ids: Vec<Uuid>,
}

impl MockOrderRepo {
    pub fn new(orders: Vec<Order>, packages: Vec<Package>, offers: Vec<PricePackage>) -> Self {
        Self {
            orders: Arc::new(Mutex::new(orders)),
            packages,
            offers,
            paid_order_ids: vec![],
        }
    }

    /// Returns a shared handle to the stored orders for post-execution inspection.
    pub fn orders_handle(&self) -> Arc<Mutex<Vec<Order>>> {
        Arc::clone(&self.orders)
    }

    fn owner_of(&self, order: &Order) -> Option<Uuid> {
        self.packages
            .iter()
            .find(|p| p.id == order.package_id)
            .map(|p| p.user_id)
    }

    fn logistic_of(&self, order: &Order) -> Option<Uuid> {
        self.offers
            .iter()
            .find(|o| o.id == order.price_package_id)
            .map(|o| o.logistic_id)
    }
}

impl OrderRepository for MockOrderRepo {
    async fn list_for_owner(
        &self,
        owner_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Order>, ApiServiceError> {
        let owned: Vec<Order> = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| self.owner_of(o) == Some(owner_id))
            .cloned()
            .collect();
        Ok(paginate(&owned, page))
    }

    async fn find_for_owner(
        &self,
        owner_id: Uuid,
        tracking_code: &str,
    ) -> Result<Option<Order>, ApiServiceError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.tracking_code == tracking_code && self.owner_of(o) == Some(owner_id))
            .cloned())
    }

    async fn find_by_package_id(&self, package_id: Uuid) -> Result<Option<Order>, ApiServiceError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.package_id == package_id)
            .cloned())
    }

    async fn find_for_logistic(
        &self,
        logistic_id: Uuid,
        tracking_code: &str,
    ) -> Result<Option<Order>, ApiServiceError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.tracking_code == tracking_code && self.logistic_of(o) == Some(logistic_id))
            .cloned())
    }

    async fn has_transaction(&self, order_id: Uuid) -> Result<bool, ApiServiceError> {
        Ok(self.paid_order_ids.contains(&order_id))
    }

    async fn replace_for_package(&self, order: &Order) -> Result<(), ApiServiceError> {
        let mut orders = self.orders.lock().unwrap();
        orders.retain(|o| o.package_id != order.package_id);
        orders.push(order.clone());
        Ok(())
    }

    async fn delete_for_owner(
        &self,
        owner_id: Uuid,
        tracking_code: &str,
    ) -> Result<bool, ApiServiceError> {
        let mut orders = self.orders.lock().unwrap();
        let before = orders.len();
        let removable: Vec<Uuid> = orders
            .iter()
            .filter(|o| o.tracking_code == tracking_code && self.owner_of(o) == Some(owner_id))
            .map(|o| o.id)
            .collect();
        orders.retain(|o| !removable.contains(&o.id));
        Ok(orders.len() < before)
    }

    async fn list_recent_for_logistic(
        &self,
        logistic_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Order>, ApiServiceError> {
        let served: Vec<Order> = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| self.logistic_of(o) == Some(logistic_id))
            .cloned()
            .collect();
        Ok(paginate(&served, page))
    }

    async fn list_for_price_package(
        &self,
        price_package_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Order>, ApiServiceError> {
        let selected: Vec<Order> = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.price_package_id == price_package_id)
            .cloned()
            .collect();
        Ok(paginate(&selected, page))
    }

    async fn assign_driver(&self, order_id: Uuid, driver_id: Uuid) -> Result<(), ApiServiceError> {
        let mut orders = self.orders.lock().unwrap();
        if let Some(order) = orders.iter_mut().find(|o| o.id == order_id) {
            order.driver_id = Some(driver_id);
        }
        Ok(())
    }
}

// ── MockDriverRepo ───────────────────────────────────────────────────────────

pub struct MockDriverRepo {
    pub contacts: Arc<Mutex<Vec<DriverContact>>>,
}

impl MockDriverRepo {
    pub fn new(contacts: Vec<DriverContact>) -> Self {
        Self {
            contacts: Arc::new(Mutex::new(contacts)),
        }
    }

    /// A second view over the same stored drivers, for driving another use case.
    pub fn share(&self) -> Self {
        Self {
            contacts: Arc::clone(&self.contacts),
        }
    }

    /// Returns a shared handle to the stored contacts for post-execution inspection.
    pub fn contacts_handle(&self) -> Arc<Mutex<Vec<DriverContact>>> {
        Arc::clone(&self.contacts)
    }
}

impl DriverRepository for MockDriverRepo {
    async fn list_for_logistic(
        &self,
        logistic_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<DriverContact>, ApiServiceError> {
        let enrolled: Vec<DriverContact> = self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.driver.logistic_id == logistic_id)
            .cloned()
            .collect();
        Ok(paginate(&enrolled, page))
    }

    async fn contacts_for_logistic(
        &self,
        logistic_id: Uuid,
    ) -> Result<Vec<DriverContact>, ApiServiceError> {
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.driver.logistic_id == logistic_id)
            .cloned()
            .collect())
    }

    async fn find_for_logistic(
        &self,
        logistic_id: Uuid,
        tracking_code: &str,
    ) -> Result<Option<DriverContact>, ApiServiceError> {
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.driver.logistic_id == logistic_id && c.driver.tracking_code == tracking_code)
            .cloned())
    }

    async fn create(&self, driver: &Driver) -> Result<(), ApiServiceError> {
        // Contact details are joined in at read time by the real repository.
        self.contacts.lock().unwrap().push(DriverContact {
            driver: driver.clone(),
            email: String::new(),
            phone: String::new(),
        });
        Ok(())
    }

    async fn update(
        &self,
        logistic_id: Uuid,
        tracking_code: &str,
        patch: &DriverPatch,
    ) -> Result<bool, ApiServiceError> {
        let mut contacts = self.contacts.lock().unwrap();
        let contact = match contacts.iter_mut().find(|c| {
            c.driver.logistic_id == logistic_id && c.driver.tracking_code == tracking_code
        }) {
            Some(contact) => contact,
            None => return Ok(false),
        };
        if let Some(verified) = patch.verified {
            contact.driver.verified = verified;
        }
        if let Some(active) = patch.active {
            contact.driver.active = active;
        }
        Ok(true)
    }

    async fn delete(
        &self,
        logistic_id: Uuid,
        tracking_code: &str,
    ) -> Result<bool, ApiServiceError> {
        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| {
            !(c.driver.logistic_id == logistic_id && c.driver.tracking_code == tracking_code)
        });
        Ok(contacts.len() < before)
    }
}

// ── MockTransactionRepo ──────────────────────────────────────────────────────

pub struct MockTransactionRepo {
    pub transactions: Arc<Mutex<Vec<Transaction>>>,
}

impl MockTransactionRepo {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Arc::new(Mutex::new(transactions)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the stored transactions for post-execution inspection.
    pub fn transactions_handle(&self) -> Arc<Mutex<Vec<Transaction>>> {
        Arc::clone(&self.transactions)
    }
}

impl TransactionRepository for MockTransactionRepo {
    async fn create(&self, transaction: &Transaction) -> Result<(), ApiServiceError> {
        self.transactions.lock().unwrap().push(transaction.clone());
        Ok(())
    }

    async fn find_by_reference(
        &self,
        reference: &str,
    ) -> Result<Option<Transaction>, ApiServiceError> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.reference == reference)
            .cloned())
    }

    async fn find_by_order_id(
        &self,
        order_id: Uuid,
    ) -> Result<Option<Transaction>, ApiServiceError> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.order_id == order_id)
            .cloned())
    }

    async fn mark_success(
        &self,
        transaction: &Transaction,
        paid_at: DateTime<Utc>,
    ) -> Result<(), ApiServiceError> {
        let mut transactions = self.transactions.lock().unwrap();
        if let Some(row) = transactions.iter_mut().find(|t| t.id == transaction.id) {
            row.status = TransactionStatus::Success;
            row.paid_at = Some(paid_at);
        }
        Ok(())
    }

    async fn mark_failed(&self, transaction_id: Uuid) -> Result<(), ApiServiceError> {
        let mut transactions = self.transactions.lock().unwrap();
        if let Some(row) = transactions.iter_mut().find(|t| t.id == transaction_id) {
            row.status = TransactionStatus::Failed;
        }
        Ok(())
    }

    async fn list_for_bank_account(
        &self,
        bank_account_id: Uuid,
        status: Option<TransactionStatus>,
        page: PageRequest,
    ) -> Result<Vec<Transaction>, ApiServiceError> {
        let incoming: Vec<Transaction> = self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| {
                t.bank_account_id == Some(bank_account_id)
                    && match status {
                        Some(wanted) => t.status == wanted,
                        None => true,
                    }
            })
            .cloned()
            .collect();
        Ok(paginate(&incoming, page))
    }

    async fn find_for_bank_account(
        &self,
        bank_account_id: Uuid,
        tracking_code: &str,
    ) -> Result<Option<Transaction>, ApiServiceError> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.bank_account_id == Some(bank_account_id) && t.tracking_code == tracking_code)
            .cloned())
    }
}

// ── MockBankAccountRepo ──────────────────────────────────────────────────────

pub struct MockBankAccountRepo {
    pub accounts: Vec<BankAccount>,
    /// (order id, payout account user id) pairs.
    pub payouts: Vec<(Uuid, Uuid)>,
}

impl MockBankAccountRepo {
    pub fn new(accounts: Vec<BankAccount>, payouts: Vec<(Uuid, Uuid)>) -> Self {
        Self { accounts, payouts }
    }
}

impl BankAccountRepository for MockBankAccountRepo {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<BankAccount>, ApiServiceError> {
        Ok(self.accounts.iter().find(|a| a.user_id == user_id).cloned())
    }

    async fn upsert(&self, _account: &BankAccount) -> Result<(), ApiServiceError> {
        Ok(())
    }

    async fn find_for_order(&self, order_id: Uuid) -> Result<Option<BankAccount>, ApiServiceError> {
        let payout = match self.payouts.iter().find(|(order, _)| *order == order_id) {
            Some((_, user_id)) => *user_id,
            None => return Ok(None),
        };
        Ok(self.accounts.iter().find(|a| a.user_id == payout).cloned())
    }
}

// ── MockGateway ──────────────────────────────────────────────────────────────

pub struct MockGateway {
    pub init_url: Option<String>,
    pub verify_outcome: Option<bool>,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockGateway {
    pub fn new(init_url: Option<&str>, verify_outcome: Option<bool>) -> Self {
        Self {
            init_url: init_url.map(str::to_owned),
            verify_outcome,
            calls: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Returns a shared handle to the recorded (callback url, reference) init calls.
    pub fn calls_handle(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        Arc::clone(&self.calls)
    }
}

impl PaymentGateway for MockGateway {
    async fn create_init_transaction(
        &self,
        _email: &str,
        _amount: Decimal,
        callback_url: &str,
        reference: &str,
    ) -> Option<String> {
        self.calls
            .lock()
            .unwrap()
            .push((callback_url.to_owned(), reference.to_owned()));
        self.init_url.clone()
    }

    async fn verify_transaction(&self, _transaction_id: &str, _amount: Decimal) -> Option<bool> {
        self.verify_outcome
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_user() -> User {
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        email: "sam@shipway.example".to_owned(),
        active: true,
        staff: false,
        admin: false,
        verified_email: true,
        created_at: Utc::now(),
    }
}

pub fn test_profile(user_id: Uuid) -> Profile {
    Profile {
        user_id,
        username: "sam".to_owned(),
        first_name: "Sam".to_owned(),
        last_name: "Eze".to_owned(),
        phone: "08021234567".to_owned(),
        address: "4 Wharf Close".to_owned(),
        city: "Lagos".to_owned(),
        state: "Lagos".to_owned(),
        zip: "101241".to_owned(),
        about: String::new(),
        account_type: None,
        approved: false,
        created_at: Utc::now(),
    }
}

pub fn test_logistic(user_id: Uuid) -> Logistic {
    Logistic {
        id: Uuid::now_v7(),
        user_id,
        name: "Swift Haulage".to_owned(),
        address: "12 Dockyard Rd".to_owned(),
        about: String::new(),
        created_at: Utc::now(),
    }
}

pub fn test_offer(logistic_id: Uuid, tracking_code: &str, price: Decimal) -> PricePackage {
    PricePackage {
        id: Uuid::now_v7(),
        tracking_code: tracking_code.to_owned(),
        logistic_id,
        pickup_location: "Lagos".to_owned(),
        delivery_location: "Abuja".to_owned(),
        price,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn test_package(user_id: Uuid) -> Package {
    Package {
        id: Uuid::now_v7(),
        tracking_code: "PKG-BBBB222233".to_owned(),
        user_id,
        cargo_name: "generators".to_owned(),
        cargo_type: CargoType::Solid,
        weight: dec!(2),
        quantity: 3,
        pickup_location: "Lagos".to_owned(),
        delivery_location: "Abuja".to_owned(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn test_order(package_id: Uuid, price_package_id: Uuid) -> Order {
    Order {
        id: Uuid::now_v7(),
        tracking_code: "ORD-CCCC333344".to_owned(),
        package_id,
        price_package_id,
        driver_id: None,
        price: dec!(1200),
        created_at: Utc::now(),
    }
}

pub fn test_contact(
    logistic_id: Uuid,
    email: &str,
    phone: &str,
    verified: bool,
    active: bool,
) -> DriverContact {
    DriverContact {
        driver: Driver {
            id: Uuid::now_v7(),
            tracking_code: "DRV-DDDD444455".to_owned(),
            logistic_id,
            user_id: Uuid::now_v7(),
            verified,
            active,
            created_at: Utc::now(),
        },
        email: email.to_owned(),
        phone: phone.to_owned(),
    }
}

pub fn test_bank_account(user_id: Uuid) -> BankAccount {
    BankAccount {
        user_id,
        bank_name: "First Bank".to_owned(),
        account_number: "0123456789".to_owned(),
        account_name: "Swift Haulage Ltd".to_owned(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn test_transaction(
    order_id: Uuid,
    bank_account_id: Option<Uuid>,
    redirect_url: Option<&str>,
) -> Transaction {
    Transaction {
        id: Uuid::now_v7(),
        tracking_code: "TXN-EEEE555566".to_owned(),
        reference: "f00dfeedfacef00dfeedfacef00dfeed".to_owned(),
        order_id,
        bank_account_id,
        amount: dec!(1200),
        status: TransactionStatus::Pending,
        paid_at: None,
        redirect_url: redirect_url.map(str::to_owned),
        created_at: Utc::now(),
    }
}

pub const TEST_API_KEY: &str = "test-api-key";
