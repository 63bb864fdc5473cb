use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAuthorizationRepository, DbBankAccountRepository, DbDriverRepository, DbLogisticRepository,
    DbOrderRepository, DbPackageRepository, DbPricePackageRepository, DbTransactionRepository,
    DbUserRepository,
};
use crate::infra::gateway::HttpPaymentGateway;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub gateway: HttpPaymentGateway,
    pub api_key: String,
    pub public_base_url: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn package_repo(&self) -> DbPackageRepository {
        DbPackageRepository {
            db: self.db.clone(),
        }
    }

    pub fn price_package_repo(&self) -> DbPricePackageRepository {
        DbPricePackageRepository {
            db: self.db.clone(),
        }
    }

    pub fn order_repo(&self) -> DbOrderRepository {
        DbOrderRepository {
            db: self.db.clone(),
        }
    }

    pub fn driver_repo(&self) -> DbDriverRepository {
        DbDriverRepository {
            db: self.db.clone(),
        }
    }

    pub fn transaction_repo(&self) -> DbTransactionRepository {
        DbTransactionRepository {
            db: self.db.clone(),
        }
    }

    pub fn bank_account_repo(&self) -> DbBankAccountRepository {
        DbBankAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn authorization_repo(&self) -> DbAuthorizationRepository {
        DbAuthorizationRepository {
            db: self.db.clone(),
        }
    }

    pub fn logistic_repo(&self) -> DbLogisticRepository {
        DbLogisticRepository {
            db: self.db.clone(),
        }
    }

    pub fn gateway(&self) -> HttpPaymentGateway {
        self.gateway.clone()
    }
}
