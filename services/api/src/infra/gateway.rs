//! HTTP client for the hosted payment gateway.

use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use crate::domain::repository::PaymentGateway;

/// REST client implementing `PaymentGateway`.
///
/// Gateway failures are soft: transport errors and unreadable payloads are
/// logged and flattened to `None`, and the caller decides what that means
/// for the payment flow.
#[derive(Clone)]
pub struct HttpPaymentGateway {
    client: Client,
    base_url: String,
    secret_key: String,
}

#[derive(Debug, Deserialize)]
struct InitResponse {
    status: String,
    data: Option<InitData>,
}

#[derive(Debug, Deserialize)]
struct InitData {
    link: String,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    status: String,
    data: Option<VerifyData>,
}

#[derive(Debug, Deserialize)]
struct VerifyData {
    status: String,
    amount: Decimal,
}

impl HttpPaymentGateway {
    pub fn new(base_url: &str, secret_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            secret_key: secret_key.to_owned(),
        }
    }
}

impl PaymentGateway for HttpPaymentGateway {
    async fn create_init_transaction(
        &self,
        email: &str,
        amount: Decimal,
        callback_url: &str,
        reference: &str,
    ) -> Option<String> {
        let url = format!("{}/payments", self.base_url);
        let body = json!({
            "tx_ref": reference,
            "amount": amount,
            "currency": "NGN",
            "redirect_url": callback_url,
            "customer": { "email": email },
        });

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .json(&body)
            .send()
            .await;

        match resp {
            Ok(resp) => match resp.json::<InitResponse>().await {
                Ok(parsed) if parsed.status == "success" => parsed.data.map(|d| d.link),
                Ok(parsed) => {
                    tracing::warn!(status = %parsed.status, "gateway rejected init transaction");
                    None
                }
                Err(e) => {
                    tracing::warn!(error = %e, "unreadable gateway init response");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "gateway init request failed");
                None
            }
        }
    }

    async fn verify_transaction(&self, transaction_id: &str, amount: Decimal) -> Option<bool> {
        let url = format!("{}/transactions/{}/verify", self.base_url, transaction_id);

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.secret_key)
            .send()
            .await;

        match resp {
            Ok(resp) => match resp.json::<VerifyResponse>().await {
                Ok(parsed) if parsed.status == "success" => parsed
                    .data
                    .map(|data| data.status == "successful" && data.amount == amount),
                Ok(parsed) => {
                    tracing::warn!(status = %parsed.status, "gateway rejected verify request");
                    None
                }
                Err(e) => {
                    tracing::warn!(error = %e, "unreadable gateway verify response");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "gateway verify request failed");
                None
            }
        }
    }
}
