use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    sea_query::{Expr, OnConflict},
};
use uuid::Uuid;

use shipway_api_schema::{
    bank_accounts, drivers, logistics, orders, outbox_events, package_price_packages, packages,
    price_packages, profiles, transactions, user_authorizations, users,
};
use shipway_auth_types::scope::PackageScope;
use shipway_domain::pagination::PageRequest;

use crate::domain::repository::{
    AuthorizationRepository, BankAccountRepository, DriverRepository, LogisticRepository,
    OrderRepository, PackageRepository, PricePackageRepository, TransactionRepository,
    UserRepository,
};
use crate::domain::types::{
    BankAccount, Driver, DriverContact, DriverPatch, Logistic, LogisticPatch, Order, Package,
    PackagePatch, PricePackage, PricePackagePatch, Profile, ProfilePatch, Transaction,
    TransactionStatus, User, UserAuthorization,
};
use crate::error::ApiServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, ApiServiceError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn create_with_profile(
        &self,
        user: &User,
        profile: &Profile,
    ) -> Result<(), ApiServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let user = user.clone();
                let profile = profile.clone();
                Box::pin(async move {
                    users::ActiveModel {
                        id: Set(user.id),
                        email: Set(user.email.clone()),
                        active: Set(user.active),
                        staff: Set(user.staff),
                        admin: Set(user.admin),
                        verified_email: Set(user.verified_email),
                        created_at: Set(user.created_at),
                    }
                    .insert(txn)
                    .await?;

                    profiles::ActiveModel {
                        user_id: Set(profile.user_id),
                        username: Set(profile.username.clone()),
                        first_name: Set(profile.first_name.clone()),
                        last_name: Set(profile.last_name.clone()),
                        phone: Set(profile.phone.clone()),
                        address: Set(profile.address.clone()),
                        city: Set(profile.city.clone()),
                        state: Set(profile.state.clone()),
                        zip: Set(profile.zip.clone()),
                        about: Set(profile.about.clone()),
                        account_type: Set(profile
                            .account_type
                            .map(|t| t.as_kebab_case().to_owned())),
                        approved: Set(profile.approved),
                        created_at: Set(profile.created_at),
                    }
                    .insert(txn)
                    .await?;
                    Ok(())
                })
            })
            .await
            .context("create user with profile")?;
        Ok(())
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<Profile>, ApiServiceError> {
        let model = profiles::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("find profile")?;
        Ok(model.map(profile_from_model))
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        patch: &ProfilePatch,
    ) -> Result<bool, ApiServiceError> {
        let existing = profiles::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("find profile for update")?;

        match existing {
            Some(row) => {
                let mut profile = row.into_active_model();
                if let Some(first_name) = &patch.first_name {
                    profile.first_name = Set(first_name.clone());
                }
                if let Some(last_name) = &patch.last_name {
                    profile.last_name = Set(last_name.clone());
                }
                if let Some(phone) = &patch.phone {
                    profile.phone = Set(phone.clone());
                }
                if let Some(address) = &patch.address {
                    profile.address = Set(address.clone());
                }
                if let Some(city) = &patch.city {
                    profile.city = Set(city.clone());
                }
                if let Some(state) = &patch.state {
                    profile.state = Set(state.clone());
                }
                if let Some(zip) = &patch.zip {
                    profile.zip = Set(zip.clone());
                }
                if let Some(about) = &patch.about {
                    profile.about = Set(about.clone());
                }
                if let Some(account_type) = patch.account_type {
                    profile.account_type = Set(Some(account_type.as_kebab_case().to_owned()));
                }
                profile.update(&self.db).await.context("update profile")?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_email_verified(&self, user_id: Uuid) -> Result<bool, ApiServiceError> {
        let result = users::Entity::update_many()
            .filter(users::Column::Id.eq(user_id))
            .col_expr(users::Column::VerifiedEmail, Expr::value(true))
            .exec(&self.db)
            .await
            .context("mark email verified")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        active: model.active,
        staff: model.staff,
        admin: model.admin,
        verified_email: model.verified_email,
        created_at: model.created_at,
    }
}

fn profile_from_model(model: profiles::Model) -> Profile {
    Profile {
        user_id: model.user_id,
        username: model.username,
        first_name: model.first_name,
        last_name: model.last_name,
        phone: model.phone,
        address: model.address,
        city: model.city,
        state: model.state,
        zip: model.zip,
        about: model.about,
        account_type: model
            .account_type
            .as_deref()
            .and_then(crate::domain::types::AccountType::from_kebab_case),
        approved: model.approved,
        created_at: model.created_at,
    }
}

// ── Package repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPackageRepository {
    pub db: DatabaseConnection,
}

impl PackageRepository for DbPackageRepository {
    async fn list(
        &self,
        scope: PackageScope,
        page: PageRequest,
    ) -> Result<Vec<Package>, ApiServiceError> {
        let mut query = packages::Entity::find();
        if let Some(owner_id) = scope.owner_filter() {
            query = query.filter(packages::Column::UserId.eq(owner_id));
        }
        let models = query
            .order_by_asc(packages::Column::CargoName)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list packages")?;
        models.into_iter().map(package_from_model).collect()
    }

    async fn search_by_tracking_code(
        &self,
        scope: PackageScope,
        tracking_code: &str,
        page: PageRequest,
    ) -> Result<Vec<Package>, ApiServiceError> {
        // Codes are stored uppercase; uppercasing the needle makes LIKE
        // behave case-insensitively.
        let needle = tracking_code.to_uppercase();
        let mut query =
            packages::Entity::find().filter(packages::Column::TrackingCode.contains(&needle));
        if let Some(owner_id) = scope.owner_filter() {
            query = query.filter(packages::Column::UserId.eq(owner_id));
        }
        let models = query
            .order_by_asc(packages::Column::CargoName)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("search packages by tracking code")?;
        models.into_iter().map(package_from_model).collect()
    }

    async fn find_by_tracking_code(
        &self,
        scope: PackageScope,
        tracking_code: &str,
    ) -> Result<Option<Package>, ApiServiceError> {
        let mut query =
            packages::Entity::find().filter(packages::Column::TrackingCode.eq(tracking_code));
        if let Some(owner_id) = scope.owner_filter() {
            query = query.filter(packages::Column::UserId.eq(owner_id));
        }
        let model = query
            .one(&self.db)
            .await
            .context("find package by tracking code")?;
        model.map(package_from_model).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Package>, ApiServiceError> {
        let model = packages::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find package by id")?;
        model.map(package_from_model).transpose()
    }

    async fn create_with_candidates(
        &self,
        package: &Package,
        price_package_ids: &[Uuid],
    ) -> Result<(), ApiServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let package = package.clone();
                let price_package_ids = price_package_ids.to_vec();
                Box::pin(async move {
                    packages::ActiveModel {
                        id: Set(package.id),
                        tracking_code: Set(package.tracking_code.clone()),
                        user_id: Set(package.user_id),
                        cargo_name: Set(package.cargo_name.clone()),
                        cargo_type: Set(package.cargo_type.as_kebab_case().to_owned()),
                        weight: Set(package.weight),
                        quantity: Set(package.quantity),
                        pickup_location: Set(package.pickup_location.clone()),
                        delivery_location: Set(package.delivery_location.clone()),
                        created_at: Set(package.created_at),
                        updated_at: Set(package.updated_at),
                    }
                    .insert(txn)
                    .await?;

                    for price_package_id in price_package_ids {
                        package_price_packages::ActiveModel {
                            package_id: Set(package.id),
                            price_package_id: Set(price_package_id),
                        }
                        .insert(txn)
                        .await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("create package with candidate offers")?;
        Ok(())
    }

    async fn update(
        &self,
        scope: PackageScope,
        tracking_code: &str,
        patch: &PackagePatch,
    ) -> Result<bool, ApiServiceError> {
        let mut query =
            packages::Entity::find().filter(packages::Column::TrackingCode.eq(tracking_code));
        if let Some(owner_id) = scope.owner_filter() {
            query = query.filter(packages::Column::UserId.eq(owner_id));
        }
        let existing = query
            .one(&self.db)
            .await
            .context("find package for update")?;

        match existing {
            Some(row) => {
                let mut package = row.into_active_model();
                if let Some(cargo_name) = &patch.cargo_name {
                    package.cargo_name = Set(cargo_name.clone());
                }
                if let Some(cargo_type) = patch.cargo_type {
                    package.cargo_type = Set(cargo_type.as_kebab_case().to_owned());
                }
                if let Some(weight) = patch.weight {
                    package.weight = Set(weight);
                }
                if let Some(quantity) = patch.quantity {
                    package.quantity = Set(quantity);
                }
                if let Some(pickup) = &patch.pickup_location {
                    package.pickup_location = Set(pickup.clone());
                }
                if let Some(delivery) = &patch.delivery_location {
                    package.delivery_location = Set(delivery.clone());
                }
                package.updated_at = Set(Utc::now());
                package.update(&self.db).await.context("update package")?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn candidates(&self, package_id: Uuid) -> Result<Vec<PricePackage>, ApiServiceError> {
        let models = price_packages::Entity::find()
            .filter(
                price_packages::Column::Id.in_subquery(
                    sea_orm::sea_query::Query::select()
                        .column(package_price_packages::Column::PricePackageId)
                        .from(package_price_packages::Entity)
                        .and_where(
                            Expr::col(package_price_packages::Column::PackageId).eq(package_id),
                        )
                        .to_owned(),
                ),
            )
            .order_by_asc(price_packages::Column::Price)
            .all(&self.db)
            .await
            .context("list candidate offers for package")?;
        Ok(models.into_iter().map(price_package_from_model).collect())
    }
}

fn package_from_model(model: packages::Model) -> Result<Package, ApiServiceError> {
    let cargo_type = crate::domain::types::CargoType::from_kebab_case(&model.cargo_type)
        .ok_or_else(|| anyhow::anyhow!("unknown cargo type {:?}", model.cargo_type))?;
    Ok(Package {
        id: model.id,
        tracking_code: model.tracking_code,
        user_id: model.user_id,
        cargo_name: model.cargo_name,
        cargo_type,
        weight: model.weight,
        quantity: model.quantity,
        pickup_location: model.pickup_location,
        delivery_location: model.delivery_location,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── PricePackage repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPricePackageRepository {
    pub db: DatabaseConnection,
}

impl PricePackageRepository for DbPricePackageRepository {
    async fn find_matching_route(
        &self,
        pickup_location: &str,
        delivery_location: &str,
    ) -> Result<Vec<PricePackage>, ApiServiceError> {
        use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

        let models = price_packages::Model::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"
            SELECT * FROM price_packages
            WHERE LOWER(pickup_location) = LOWER($1)
              AND LOWER(delivery_location) = LOWER($2)
            ORDER BY price ASC
            "#,
            [pickup_location.into(), delivery_location.into()],
        ))
        .all(&self.db)
        .await
        .context("find offers matching route")?;
        Ok(models.into_iter().map(price_package_from_model).collect())
    }

    async fn find_by_tracking_code(
        &self,
        tracking_code: &str,
    ) -> Result<Option<PricePackage>, ApiServiceError> {
        let model = price_packages::Entity::find()
            .filter(price_packages::Column::TrackingCode.eq(tracking_code))
            .one(&self.db)
            .await
            .context("find offer by tracking code")?;
        Ok(model.map(price_package_from_model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PricePackage>, ApiServiceError> {
        let model = price_packages::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find offer by id")?;
        Ok(model.map(price_package_from_model))
    }

    async fn create(&self, price_package: &PricePackage) -> Result<(), ApiServiceError> {
        price_packages::ActiveModel {
            id: Set(price_package.id),
            tracking_code: Set(price_package.tracking_code.clone()),
            logistic_id: Set(price_package.logistic_id),
            pickup_location: Set(price_package.pickup_location.clone()),
            delivery_location: Set(price_package.delivery_location.clone()),
            price: Set(price_package.price),
            created_at: Set(price_package.created_at),
            updated_at: Set(price_package.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create offer")?;
        Ok(())
    }

    async fn update(
        &self,
        logistic_id: Uuid,
        tracking_code: &str,
        patch: &PricePackagePatch,
    ) -> Result<bool, ApiServiceError> {
        let existing = price_packages::Entity::find()
            .filter(price_packages::Column::LogisticId.eq(logistic_id))
            .filter(price_packages::Column::TrackingCode.eq(tracking_code))
            .one(&self.db)
            .await
            .context("find offer for update")?;

        match existing {
            Some(row) => {
                let mut offer = row.into_active_model();
                if let Some(pickup) = &patch.pickup_location {
                    offer.pickup_location = Set(pickup.clone());
                }
                if let Some(delivery) = &patch.delivery_location {
                    offer.delivery_location = Set(delivery.clone());
                }
                if let Some(price) = patch.price {
                    offer.price = Set(price);
                }
                offer.updated_at = Set(Utc::now());
                offer.update(&self.db).await.context("update offer")?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(
        &self,
        logistic_id: Uuid,
        tracking_code: &str,
    ) -> Result<bool, ApiServiceError> {
        let result = price_packages::Entity::delete_many()
            .filter(price_packages::Column::LogisticId.eq(logistic_id))
            .filter(price_packages::Column::TrackingCode.eq(tracking_code))
            .exec(&self.db)
            .await
            .context("delete offer")?;
        Ok(result.rows_affected > 0)
    }
}

fn price_package_from_model(model: price_packages::Model) -> PricePackage {
    PricePackage {
        id: model.id,
        tracking_code: model.tracking_code,
        logistic_id: model.logistic_id,
        pickup_location: model.pickup_location,
        delivery_location: model.delivery_location,
        price: model.price,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: DatabaseConnection,
}

impl OrderRepository for DbOrderRepository {
    async fn list_for_owner(
        &self,
        owner_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Order>, ApiServiceError> {
        use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

        let offset = page.offset() as i64;
        let limit = page.limit() as i64;

        let models = orders::Model::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"
            SELECT o.* FROM orders AS o
            JOIN packages AS p ON p.id = o.package_id
            WHERE p.user_id = $1
            ORDER BY p.cargo_name ASC
            LIMIT $2 OFFSET $3
            "#,
            [owner_id.into(), limit.into(), offset.into()],
        ))
        .all(&self.db)
        .await
        .context("list orders for owner")?;
        Ok(models.into_iter().map(order_from_model).collect())
    }

    async fn find_for_owner(
        &self,
        owner_id: Uuid,
        tracking_code: &str,
    ) -> Result<Option<Order>, ApiServiceError> {
        let model = orders::Entity::find()
            .filter(orders::Column::TrackingCode.eq(tracking_code))
            .filter(
                orders::Column::PackageId.in_subquery(
                    sea_orm::sea_query::Query::select()
                        .column(packages::Column::Id)
                        .from(packages::Entity)
                        .and_where(Expr::col(packages::Column::UserId).eq(owner_id))
                        .to_owned(),
                ),
            )
            .one(&self.db)
            .await
            .context("find order for owner")?;
        Ok(model.map(order_from_model))
    }

    async fn find_by_package_id(&self, package_id: Uuid) -> Result<Option<Order>, ApiServiceError> {
        let model = orders::Entity::find()
            .filter(orders::Column::PackageId.eq(package_id))
            .one(&self.db)
            .await
            .context("find order by package id")?;
        Ok(model.map(order_from_model))
    }

    async fn find_for_logistic(
        &self,
        logistic_id: Uuid,
        tracking_code: &str,
    ) -> Result<Option<Order>, ApiServiceError> {
        let model = orders::Entity::find()
            .filter(orders::Column::TrackingCode.eq(tracking_code))
            .filter(
                orders::Column::PricePackageId.in_subquery(
                    sea_orm::sea_query::Query::select()
                        .column(price_packages::Column::Id)
                        .from(price_packages::Entity)
                        .and_where(Expr::col(price_packages::Column::LogisticId).eq(logistic_id))
                        .to_owned(),
                ),
            )
            .one(&self.db)
            .await
            .context("find order for logistic")?;
        Ok(model.map(order_from_model))
    }

    async fn has_transaction(&self, order_id: Uuid) -> Result<bool, ApiServiceError> {
        let model = transactions::Entity::find()
            .filter(transactions::Column::OrderId.eq(order_id))
            .one(&self.db)
            .await
            .context("find transaction for order")?;
        Ok(model.is_some())
    }

    async fn replace_for_package(&self, order: &Order) -> Result<(), ApiServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let order = order.clone();
                Box::pin(async move {
                    let _ = orders::Entity::delete_many()
                        .filter(orders::Column::PackageId.eq(order.package_id))
                        .exec(txn)
                        .await?;

                    orders::ActiveModel {
                        id: Set(order.id),
                        tracking_code: Set(order.tracking_code.clone()),
                        package_id: Set(order.package_id),
                        price_package_id: Set(order.price_package_id),
                        driver_id: Set(order.driver_id),
                        price: Set(order.price),
                        created_at: Set(order.created_at),
                    }
                    .insert(txn)
                    .await?;
                    Ok(())
                })
            })
            .await
            .context("replace order for package")?;
        Ok(())
    }

    async fn delete_for_owner(
        &self,
        owner_id: Uuid,
        tracking_code: &str,
    ) -> Result<bool, ApiServiceError> {
        let result = orders::Entity::delete_many()
            .filter(orders::Column::TrackingCode.eq(tracking_code))
            .filter(
                orders::Column::PackageId.in_subquery(
                    sea_orm::sea_query::Query::select()
                        .column(packages::Column::Id)
                        .from(packages::Entity)
                        .and_where(Expr::col(packages::Column::UserId).eq(owner_id))
                        .to_owned(),
                ),
            )
            .exec(&self.db)
            .await
            .context("delete order for owner")?;
        Ok(result.rows_affected > 0)
    }

    async fn list_recent_for_logistic(
        &self,
        logistic_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Order>, ApiServiceError> {
        let models = orders::Entity::find()
            .filter(
                orders::Column::PricePackageId.in_subquery(
                    sea_orm::sea_query::Query::select()
                        .column(price_packages::Column::Id)
                        .from(price_packages::Entity)
                        .and_where(Expr::col(price_packages::Column::LogisticId).eq(logistic_id))
                        .to_owned(),
                ),
            )
            .order_by_desc(orders::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list recent orders for logistic")?;
        Ok(models.into_iter().map(order_from_model).collect())
    }

    async fn list_for_price_package(
        &self,
        price_package_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Order>, ApiServiceError> {
        let models = orders::Entity::find()
            .filter(orders::Column::PricePackageId.eq(price_package_id))
            .order_by_desc(orders::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list orders for offer")?;
        Ok(models.into_iter().map(order_from_model).collect())
    }

    async fn assign_driver(
        &self,
        order_id: Uuid,
        driver_id: Uuid,
    ) -> Result<(), ApiServiceError> {
        orders::Entity::update_many()
            .filter(orders::Column::Id.eq(order_id))
            .col_expr(orders::Column::DriverId, Expr::value(driver_id))
            .exec(&self.db)
            .await
            .context("assign driver to order")?;
        Ok(())
    }
}

fn order_from_model(model: orders::Model) -> Order {
    Order {
        id: model.id,
        tracking_code: model.tracking_code,
        package_id: model.package_id,
        price_package_id: model.price_package_id,
        driver_id: model.driver_id,
        price: model.price,
        created_at: model.created_at,
    }
}

// ── Driver repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDriverRepository {
    pub db: DatabaseConnection,
}

impl DbDriverRepository {
    async fn with_contact(&self, model: drivers::Model) -> Result<DriverContact, ApiServiceError> {
        let user = users::Entity::find_by_id(model.user_id)
            .one(&self.db)
            .await
            .context("find driver user")?;
        let profile = profiles::Entity::find_by_id(model.user_id)
            .one(&self.db)
            .await
            .context("find driver profile")?;
        Ok(DriverContact {
            email: user.map(|u| u.email).unwrap_or_default(),
            phone: profile.map(|p| p.phone).unwrap_or_default(),
            driver: driver_from_model(model),
        })
    }
}

impl DriverRepository for DbDriverRepository {
    async fn list_for_logistic(
        &self,
        logistic_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<DriverContact>, ApiServiceError> {
        let models = drivers::Entity::find()
            .filter(drivers::Column::LogisticId.eq(logistic_id))
            .order_by_desc(drivers::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list drivers for logistic")?;

        let mut results = Vec::with_capacity(models.len());
        for model in models {
            results.push(self.with_contact(model).await?);
        }
        Ok(results)
    }

    async fn contacts_for_logistic(
        &self,
        logistic_id: Uuid,
    ) -> Result<Vec<DriverContact>, ApiServiceError> {
        let models = drivers::Entity::find()
            .filter(drivers::Column::LogisticId.eq(logistic_id))
            .order_by_desc(drivers::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list driver contacts for logistic")?;

        let mut results = Vec::with_capacity(models.len());
        for model in models {
            results.push(self.with_contact(model).await?);
        }
        Ok(results)
    }

    async fn find_for_logistic(
        &self,
        logistic_id: Uuid,
        tracking_code: &str,
    ) -> Result<Option<DriverContact>, ApiServiceError> {
        let model = drivers::Entity::find()
            .filter(drivers::Column::LogisticId.eq(logistic_id))
            .filter(drivers::Column::TrackingCode.eq(tracking_code))
            .one(&self.db)
            .await
            .context("find driver for logistic")?;

        match model {
            Some(model) => Ok(Some(self.with_contact(model).await?)),
            None => Ok(None),
        }
    }

    async fn create(&self, driver: &Driver) -> Result<(), ApiServiceError> {
        drivers::ActiveModel {
            id: Set(driver.id),
            tracking_code: Set(driver.tracking_code.clone()),
            logistic_id: Set(driver.logistic_id),
            user_id: Set(driver.user_id),
            verified: Set(driver.verified),
            active: Set(driver.active),
            created_at: Set(driver.created_at),
        }
        .insert(&self.db)
        .await
        .context("create driver")?;
        Ok(())
    }

    async fn update(
        &self,
        logistic_id: Uuid,
        tracking_code: &str,
        patch: &DriverPatch,
    ) -> Result<bool, ApiServiceError> {
        let existing = drivers::Entity::find()
            .filter(drivers::Column::LogisticId.eq(logistic_id))
            .filter(drivers::Column::TrackingCode.eq(tracking_code))
            .one(&self.db)
            .await
            .context("find driver for update")?;

        match existing {
            Some(row) => {
                let mut driver = row.into_active_model();
                if let Some(verified) = patch.verified {
                    driver.verified = Set(verified);
                }
                if let Some(active) = patch.active {
                    driver.active = Set(active);
                }
                driver.update(&self.db).await.context("update driver")?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(
        &self,
        logistic_id: Uuid,
        tracking_code: &str,
    ) -> Result<bool, ApiServiceError> {
        let result = drivers::Entity::delete_many()
            .filter(drivers::Column::LogisticId.eq(logistic_id))
            .filter(drivers::Column::TrackingCode.eq(tracking_code))
            .exec(&self.db)
            .await
            .context("delete driver")?;
        Ok(result.rows_affected > 0)
    }
}

fn driver_from_model(model: drivers::Model) -> Driver {
    Driver {
        id: model.id,
        tracking_code: model.tracking_code,
        logistic_id: model.logistic_id,
        user_id: model.user_id,
        verified: model.verified,
        active: model.active,
        created_at: model.created_at,
    }
}

// ── Transaction repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTransactionRepository {
    pub db: DatabaseConnection,
}

impl TransactionRepository for DbTransactionRepository {
    async fn create(&self, transaction: &Transaction) -> Result<(), ApiServiceError> {
        transactions::ActiveModel {
            id: Set(transaction.id),
            tracking_code: Set(transaction.tracking_code.clone()),
            reference: Set(transaction.reference.clone()),
            order_id: Set(transaction.order_id),
            bank_account_id: Set(transaction.bank_account_id),
            amount: Set(transaction.amount),
            status: Set(transaction.status.as_kebab_case().to_owned()),
            paid_at: Set(transaction.paid_at),
            redirect_url: Set(transaction.redirect_url.clone()),
            created_at: Set(transaction.created_at),
        }
        .insert(&self.db)
        .await
        .context("create transaction")?;
        Ok(())
    }

    async fn find_by_reference(
        &self,
        reference: &str,
    ) -> Result<Option<Transaction>, ApiServiceError> {
        let model = transactions::Entity::find()
            .filter(transactions::Column::Reference.eq(reference))
            .one(&self.db)
            .await
            .context("find transaction by reference")?;
        model.map(transaction_from_model).transpose()
    }

    async fn find_by_order_id(
        &self,
        order_id: Uuid,
    ) -> Result<Option<Transaction>, ApiServiceError> {
        let model = transactions::Entity::find()
            .filter(transactions::Column::OrderId.eq(order_id))
            .one(&self.db)
            .await
            .context("find transaction by order id")?;
        model.map(transaction_from_model).transpose()
    }

    async fn mark_success(
        &self,
        transaction: &Transaction,
        paid_at: DateTime<Utc>,
    ) -> Result<(), ApiServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let transaction = transaction.clone();
                Box::pin(async move {
                    let _ = transactions::Entity::update_many()
                        .filter(transactions::Column::Id.eq(transaction.id))
                        .col_expr(
                            transactions::Column::Status,
                            Expr::value(TransactionStatus::Success.as_kebab_case()),
                        )
                        .col_expr(transactions::Column::PaidAt, Expr::value(paid_at))
                        .exec(txn)
                        .await?;

                    // Receipt mail is sent by the outbox worker. The unique
                    // idempotency key makes replayed callbacks a no-op.
                    let event = outbox_events::ActiveModel {
                        id: Set(Uuid::now_v7()),
                        kind: Set("transaction_succeeded".to_owned()),
                        payload: Set(serde_json::json!({
                            "transaction_id": transaction.id,
                            "tracking_code": transaction.tracking_code,
                            "order_id": transaction.order_id,
                            "reference": transaction.reference,
                            "amount": transaction.amount,
                            "paid_at": paid_at,
                        })),
                        idempotency_key: Set(format!("transaction_succeeded:{}", transaction.id)),
                        attempts: Set(0),
                        last_error: Set(None),
                        created_at: Set(paid_at),
                        next_attempt_at: Set(paid_at),
                        processed_at: Set(None),
                        failed_at: Set(None),
                    };
                    outbox_events::Entity::insert(event)
                        .on_conflict(
                            OnConflict::column(outbox_events::Column::IdempotencyKey)
                                .do_nothing()
                                .to_owned(),
                        )
                        .exec_without_returning(txn)
                        .await?;
                    Ok(())
                })
            })
            .await
            .context("mark transaction success")?;
        Ok(())
    }

    async fn mark_failed(&self, transaction_id: Uuid) -> Result<(), ApiServiceError> {
        transactions::Entity::update_many()
            .filter(transactions::Column::Id.eq(transaction_id))
            .col_expr(
                transactions::Column::Status,
                Expr::value(TransactionStatus::Failed.as_kebab_case()),
            )
            .exec(&self.db)
            .await
            .context("mark transaction failed")?;
        Ok(())
    }

    async fn list_for_bank_account(
        &self,
        bank_account_id: Uuid,
        status: Option<TransactionStatus>,
        page: PageRequest,
    ) -> Result<Vec<Transaction>, ApiServiceError> {
        let mut query = transactions::Entity::find()
            .filter(transactions::Column::BankAccountId.eq(bank_account_id));
        if let Some(status) = status {
            query = query.filter(transactions::Column::Status.eq(status.as_kebab_case()));
        }
        let models = query
            .order_by_desc(transactions::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list transactions for bank account")?;
        models.into_iter().map(transaction_from_model).collect()
    }

    async fn find_for_bank_account(
        &self,
        bank_account_id: Uuid,
        tracking_code: &str,
    ) -> Result<Option<Transaction>, ApiServiceError> {
        let model = transactions::Entity::find()
            .filter(transactions::Column::BankAccountId.eq(bank_account_id))
            .filter(transactions::Column::TrackingCode.eq(tracking_code))
            .one(&self.db)
            .await
            .context("find transaction for bank account")?;
        model.map(transaction_from_model).transpose()
    }
}

fn transaction_from_model(model: transactions::Model) -> Result<Transaction, ApiServiceError> {
    let status = TransactionStatus::from_kebab_case(&model.status)
        .ok_or_else(|| anyhow::anyhow!("unknown transaction status {:?}", model.status))?;
    Ok(Transaction {
        id: model.id,
        tracking_code: model.tracking_code,
        reference: model.reference,
        order_id: model.order_id,
        bank_account_id: model.bank_account_id,
        amount: model.amount,
        status,
        paid_at: model.paid_at,
        redirect_url: model.redirect_url,
        created_at: model.created_at,
    })
}

// ── BankAccount repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBankAccountRepository {
    pub db: DatabaseConnection,
}

impl BankAccountRepository for DbBankAccountRepository {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<BankAccount>, ApiServiceError> {
        let model = bank_accounts::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("find bank account")?;
        Ok(model.map(bank_account_from_model))
    }

    async fn upsert(&self, account: &BankAccount) -> Result<(), ApiServiceError> {
        let bank_account = bank_accounts::ActiveModel {
            user_id: Set(account.user_id),
            bank_name: Set(account.bank_name.clone()),
            account_number: Set(account.account_number.clone()),
            account_name: Set(account.account_name.clone()),
            created_at: Set(account.created_at),
            updated_at: Set(account.updated_at),
        };
        bank_accounts::Entity::insert(bank_account)
            .on_conflict(
                OnConflict::column(bank_accounts::Column::UserId)
                    .update_columns([
                        bank_accounts::Column::BankName,
                        bank_accounts::Column::AccountNumber,
                        bank_accounts::Column::AccountName,
                        bank_accounts::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert bank account")?;
        Ok(())
    }

    async fn find_for_order(
        &self,
        order_id: Uuid,
    ) -> Result<Option<BankAccount>, ApiServiceError> {
        let order = orders::Entity::find_by_id(order_id)
            .one(&self.db)
            .await
            .context("find order for bank account lookup")?;
        let order = match order {
            Some(order) => order,
            None => return Ok(None),
        };

        let offer = price_packages::Entity::find_by_id(order.price_package_id)
            .one(&self.db)
            .await
            .context("find offer for bank account lookup")?;
        let offer = match offer {
            Some(offer) => offer,
            None => return Ok(None),
        };

        let logistic = logistics::Entity::find_by_id(offer.logistic_id)
            .one(&self.db)
            .await
            .context("find logistic for bank account lookup")?;
        let logistic = match logistic {
            Some(logistic) => logistic,
            None => return Ok(None),
        };

        let model = bank_accounts::Entity::find_by_id(logistic.user_id)
            .one(&self.db)
            .await
            .context("find bank account for logistic owner")?;
        Ok(model.map(bank_account_from_model))
    }
}

fn bank_account_from_model(model: bank_accounts::Model) -> BankAccount {
    BankAccount {
        user_id: model.user_id,
        bank_name: model.bank_name,
        account_number: model.account_number,
        account_name: model.account_name,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Authorization repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAuthorizationRepository {
    pub db: DatabaseConnection,
}

impl AuthorizationRepository for DbAuthorizationRepository {
    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<UserAuthorization>, ApiServiceError> {
        let models = user_authorizations::Entity::find()
            .filter(user_authorizations::Column::UserId.eq(user_id))
            .order_by_asc(user_authorizations::Column::AccountName)
            .all(&self.db)
            .await
            .context("list authorizations for user")?;
        Ok(models.into_iter().map(authorization_from_model).collect())
    }
}

fn authorization_from_model(model: user_authorizations::Model) -> UserAuthorization {
    UserAuthorization {
        id: model.id,
        user_id: model.user_id,
        account_name: model.account_name,
        authorization_code: model.authorization_code,
        card_type: model.card_type,
        last4: model.last4,
        created_at: model.created_at,
    }
}

// ── Logistic repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLogisticRepository {
    pub db: DatabaseConnection,
}

impl LogisticRepository for DbLogisticRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Logistic>, ApiServiceError> {
        let model = logistics::Entity::find()
            .filter(logistics::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find logistic by user id")?;
        Ok(model.map(logistic_from_model))
    }

    async fn update(
        &self,
        user_id: Uuid,
        patch: &LogisticPatch,
    ) -> Result<bool, ApiServiceError> {
        let existing = logistics::Entity::find()
            .filter(logistics::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find logistic for update")?;

        match existing {
            Some(row) => {
                let mut logistic = row.into_active_model();
                if let Some(name) = &patch.name {
                    logistic.name = Set(name.clone());
                }
                if let Some(address) = &patch.address {
                    logistic.address = Set(address.clone());
                }
                if let Some(about) = &patch.about {
                    logistic.about = Set(about.clone());
                }
                logistic.update(&self.db).await.context("update logistic")?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn logistic_from_model(model: logistics::Model) -> Logistic {
    Logistic {
        id: model.id,
        user_id: model.user_id,
        name: model.name,
        address: model.address,
        about: model.about,
        created_at: model.created_at,
    }
}
