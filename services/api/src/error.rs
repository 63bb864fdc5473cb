use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Api service domain error variants.
///
/// 434 and 435 are inherited application codes: 434 means no route offer
/// covers the requested pickup/delivery pair, 435 means the order already
/// has a payment transaction and may no longer be re-selected.
#[derive(Debug, thiserror::Error)]
pub enum ApiServiceError {
    #[error("no matching route offers for this pickup and delivery")]
    NoMatchingRoute,
    #[error("order already has a payment in progress")]
    PaymentInProgress,
    #[error("email not verified")]
    UnverifiedEmail { email: String },
    #[error("package not found")]
    PackageNotFound,
    #[error("price package not found")]
    PricePackageNotFound,
    #[error("order not found")]
    OrderNotFound,
    #[error("transaction not found")]
    TransactionNotFound,
    #[error("driver not found")]
    DriverNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("logistic not found")]
    LogisticNotFound,
    #[error("bank account not found")]
    BankAccountNotFound,
    #[error("email already registered")]
    EmailTaken,
    #[error("Unable to complete payment, try again.")]
    PaymentSessionFailed,
    #[error("missing data")]
    MissingData,
    #[error("invalid cargo type")]
    InvalidCargoType,
    #[error("invalid status filter")]
    InvalidStatusFilter,
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoMatchingRoute => "NO_MATCHING_ROUTE",
            Self::PaymentInProgress => "PAYMENT_IN_PROGRESS",
            Self::UnverifiedEmail { .. } => "UNVERIFIED_EMAIL",
            Self::PackageNotFound => "PACKAGE_NOT_FOUND",
            Self::PricePackageNotFound => "PRICE_PACKAGE_NOT_FOUND",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::TransactionNotFound => "TRANSACTION_NOT_FOUND",
            Self::DriverNotFound => "DRIVER_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::LogisticNotFound => "LOGISTIC_NOT_FOUND",
            Self::BankAccountNotFound => "BANK_ACCOUNT_NOT_FOUND",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::PaymentSessionFailed => "PAYMENT_SESSION_FAILED",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidCargoType => "INVALID_CARGO_TYPE",
            Self::InvalidStatusFilter => "INVALID_STATUS_FILTER",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            // Application-specific codes outside the IANA registry.
            Self::NoMatchingRoute => StatusCode::from_u16(434).unwrap_or(StatusCode::CONFLICT),
            Self::PaymentInProgress => StatusCode::from_u16(435).unwrap_or(StatusCode::CONFLICT),
            Self::UnverifiedEmail { .. } => {
                StatusCode::from_u16(431).unwrap_or(StatusCode::CONFLICT)
            }
            Self::PackageNotFound
            | Self::PricePackageNotFound
            | Self::OrderNotFound
            | Self::TransactionNotFound
            | Self::DriverNotFound
            | Self::UserNotFound
            | Self::ProfileNotFound
            | Self::LogisticNotFound
            | Self::BankAccountNotFound => StatusCode::NOT_FOUND,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::PaymentSessionFailed
            | Self::MissingData
            | Self::InvalidCargoType
            | Self::InvalidStatusFilter => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let mut body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Self::UnverifiedEmail { ref email } = self {
            body["email"] = serde_json::json!(email);
        }
        (status, axum::Json(body)).into_response()
    }
}
