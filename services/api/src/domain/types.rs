use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Account record. Credentials and token issuance live at the identity
/// edge; this service only keeps the account row.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub active: bool,
    pub staff: bool,
    pub admin: bool,
    pub verified_email: bool,
    pub created_at: DateTime<Utc>,
}

/// Profile attached 1:1 to an account.
#[derive(Debug, Clone)]
pub struct Profile {
    pub user_id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub about: String,
    pub account_type: Option<AccountType>,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Partner field updates for PATCH /accounts/me. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub about: Option<String>,
    pub account_type: Option<AccountType>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip.is_none()
            && self.about.is_none()
            && self.account_type.is_none()
    }
}

/// Logistics company owned by one partner account.
#[derive(Debug, Clone)]
pub struct Logistic {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub address: String,
    pub about: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct LogisticPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub about: Option<String>,
}

impl LogisticPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none() && self.about.is_none()
    }
}

/// Route offer published by a logistics company: price per unit of weight
/// for a pickup/delivery pair.
#[derive(Debug, Clone)]
pub struct PricePackage {
    pub id: Uuid,
    pub tracking_code: String,
    pub logistic_id: Uuid,
    pub pickup_location: String,
    pub delivery_location: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Route offer paired with the shipping price quoted for one package.
#[derive(Debug, Clone)]
pub struct OfferQuote {
    pub offer: PricePackage,
    pub shipping_price: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct PricePackagePatch {
    pub pickup_location: Option<String>,
    pub delivery_location: Option<String>,
    pub price: Option<Decimal>,
}

impl PricePackagePatch {
    pub fn is_empty(&self) -> bool {
        self.pickup_location.is_none() && self.delivery_location.is_none() && self.price.is_none()
    }
}

/// Shipment declared by a customer.
#[derive(Debug, Clone)]
pub struct Package {
    pub id: Uuid,
    pub tracking_code: String,
    pub user_id: Uuid,
    pub cargo_name: String,
    pub cargo_type: CargoType,
    pub weight: Decimal,
    pub quantity: i32,
    pub pickup_location: String,
    pub delivery_location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct PackagePatch {
    pub cargo_name: Option<String>,
    pub cargo_type: Option<CargoType>,
    pub weight: Option<Decimal>,
    pub quantity: Option<i32>,
    pub pickup_location: Option<String>,
    pub delivery_location: Option<String>,
}

impl PackagePatch {
    pub fn is_empty(&self) -> bool {
        self.cargo_name.is_none()
            && self.cargo_type.is_none()
            && self.weight.is_none()
            && self.quantity.is_none()
            && self.pickup_location.is_none()
            && self.delivery_location.is_none()
    }
}

/// Order binding a package to the route offer its owner selected.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub tracking_code: String,
    pub package_id: Uuid,
    pub price_package_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Driver enrolled with a logistics company.
#[derive(Debug, Clone)]
pub struct Driver {
    pub id: Uuid,
    pub tracking_code: String,
    pub logistic_id: Uuid,
    pub user_id: Uuid,
    pub verified: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Driver joined with the contact details on its user account, the unit
/// the partner-facing driver endpoints work with.
#[derive(Debug, Clone)]
pub struct DriverContact {
    pub driver: Driver,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default)]
pub struct DriverPatch {
    pub verified: Option<bool>,
    pub active: Option<bool>,
}

impl DriverPatch {
    pub fn is_empty(&self) -> bool {
        self.verified.is_none() && self.active.is_none()
    }
}

/// Payout account of a logistics partner.
#[derive(Debug, Clone)]
pub struct BankAccount {
    pub user_id: Uuid,
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payment attempt for an order.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: Uuid,
    pub tracking_code: String,
    pub reference: String,
    pub order_id: Uuid,
    pub bank_account_id: Option<Uuid>,
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub redirect_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Saved payment-method token returned by the gateway after a successful
/// charge. `authorization_code` is never serialized to clients.
#[derive(Debug, Clone)]
pub struct UserAuthorization {
    pub id: Uuid,
    pub user_id: Uuid,
    pub account_name: String,
    pub authorization_code: String,
    pub card_type: String,
    pub last4: String,
    pub created_at: DateTime<Utc>,
}

/// Partner account categories a profile can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Logistics,
    Transportation,
    Driver,
}

impl AccountType {
    pub fn from_kebab_case(s: &str) -> Option<Self> {
        match s {
            "logistics" => Some(Self::Logistics),
            "transportation" => Some(Self::Transportation),
            "driver" => Some(Self::Driver),
            _ => None,
        }
    }

    pub fn as_kebab_case(self) -> &'static str {
        match self {
            Self::Logistics => "logistics",
            Self::Transportation => "transportation",
            Self::Driver => "driver",
        }
    }
}

/// Cargo categories a package can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CargoType {
    Solid,
    Liquid,
    Fragile,
    Perishable,
}

impl CargoType {
    pub const ALL: [CargoType; 4] = [
        Self::Solid,
        Self::Liquid,
        Self::Fragile,
        Self::Perishable,
    ];

    pub fn from_kebab_case(s: &str) -> Option<Self> {
        match s {
            "solid" => Some(Self::Solid),
            "liquid" => Some(Self::Liquid),
            "fragile" => Some(Self::Fragile),
            "perishable" => Some(Self::Perishable),
            _ => None,
        }
    }

    pub fn as_kebab_case(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Liquid => "liquid",
            Self::Fragile => "fragile",
            Self::Perishable => "perishable",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Liquid => "Liquid",
            Self::Fragile => "Fragile",
            Self::Perishable => "Perishable",
        }
    }
}

/// Lifecycle states of a payment transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
}

impl TransactionStatus {
    pub fn from_kebab_case(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "success" => Some(Self::Success),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    pub fn as_kebab_case(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

/// Quoted price for shipping a package on a route offer: the offer price
/// covers one unit of weight one way, doubled for the return leg, then
/// scaled by weight and quantity.
pub fn order_price(offer_price: Decimal, weight: Decimal, quantity: i32) -> Decimal {
    offer_price * Decimal::from(2) * weight * Decimal::from(quantity)
}

/// Minimal shape check for registration emails: a non-empty local part
/// and a dotted domain.
pub fn validate_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// Derive the profile username from the email local part, capped at 60
/// characters.
pub fn username_from_email(email: &str) -> String {
    let local = match email.split_once('@') {
        Some((local, _)) => local,
        None => email,
    };
    local.chars().take(60).collect()
}
