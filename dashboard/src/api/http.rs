//! `reqwest`-backed implementation of the API collaborator traits.
//!
//! Every response arrives wrapped in a `{"data": ...}` envelope. Transport
//! failures (connection refused, decode errors) surface with status 0;
//! non-2xx responses carry their status code and body text. Mapping those
//! onto actions is the reducers' job, not this layer's.

use finboard_core::api::ApiFuture;
use finboard_core::entities::{
    Category, DateRange, Transaction, TransactionId, User, Wallet, WalletId, WalletMetrics,
};
use finboard_core::{ApiError, AuthApi, WalletApi};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// The envelope every endpoint wraps its payload in.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// HTTP client for the finance API.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Create a client against a base URL, e.g. `http://localhost:8080`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing connection pool.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn execute<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::new(status.as_u16(), body));
        }

        response
            .json::<Envelope<T>>()
            .await
            .map(|envelope| envelope.data)
            .map_err(|e| ApiError::transport(e.to_string()))
    }

    /// Like [`Self::execute`], for endpoints whose payload we discard.
    async fn execute_unit(request: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::new(status.as_u16(), body));
        }

        Ok(())
    }
}

impl AuthApi for HttpApi {
    fn fetch_session_user(&self) -> ApiFuture<'_, User> {
        let request = self.client.get(self.url("/v1/auth/user"));
        Box::pin(async move { Self::execute(request).await })
    }

    fn set_file_passwords(&self, passwords: Vec<String>) -> ApiFuture<'_, ()> {
        let request = self
            .client
            .put(self.url("/v1/file-passwords"))
            .json(&serde_json::json!({ "passwords": passwords }));
        Box::pin(async move { Self::execute_unit(request).await })
    }
}

impl WalletApi for HttpApi {
    fn list_wallets(&self) -> ApiFuture<'_, Vec<Wallet>> {
        let request = self.client.get(self.url("/v1/wallets"));
        Box::pin(async move { Self::execute(request).await })
    }

    fn list_transactions(&self, wallet_id: WalletId) -> ApiFuture<'_, Vec<Transaction>> {
        let request = self
            .client
            .get(self.url(&format!("/v1/wallets/{wallet_id}/transactions")));
        Box::pin(async move { Self::execute(request).await })
    }

    fn get_transaction(
        &self,
        wallet_id: WalletId,
        transaction_id: TransactionId,
    ) -> ApiFuture<'_, Transaction> {
        let request = self.client.get(self.url(&format!(
            "/v1/wallets/{wallet_id}/transactions/{transaction_id}"
        )));
        Box::pin(async move { Self::execute(request).await })
    }

    fn sync_transactions_from_email(&self, wallet_id: WalletId) -> ApiFuture<'_, String> {
        let request = self.client.post(self.url(&format!(
            "/v1/wallets/{wallet_id}/transactions/sync-from-mail"
        )));
        Box::pin(async move { Self::execute(request).await })
    }

    fn compute_metrics(
        &self,
        wallet_id: WalletId,
        range: DateRange,
    ) -> ApiFuture<'_, WalletMetrics> {
        let request = self
            .client
            .get(self.url(&format!("/v1/wallets/{wallet_id}/metrics")))
            .query(&[
                ("from", range.from.to_rfc3339()),
                ("to", range.to.to_rfc3339()),
            ]);
        Box::pin(async move { Self::execute(request).await })
    }

    fn list_categories(&self, wallet_id: WalletId) -> ApiFuture<'_, Vec<Category>> {
        let request = self
            .client
            .get(self.url(&format!("/v1/wallets/{wallet_id}/categories")));
        Box::pin(async move { Self::execute(request).await })
    }

    fn create_category(&self, wallet_id: WalletId, category: Category) -> ApiFuture<'_, String> {
        let request = self
            .client
            .post(self.url(&format!("/v1/wallets/{wallet_id}/categories")))
            .json(&category);
        Box::pin(async move { Self::execute(request).await })
    }

    fn update_transaction(
        &self,
        wallet_id: WalletId,
        transaction_id: TransactionId,
        transaction: Transaction,
    ) -> ApiFuture<'_, ()> {
        let request = self
            .client
            .patch(self.url(&format!(
                "/v1/wallets/{wallet_id}/transactions/{transaction_id}"
            )))
            .json(&transaction);
        Box::pin(async move { Self::execute_unit(request).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = HttpApi::new("http://localhost:8080/");
        assert_eq!(api.url("/v1/wallets"), "http://localhost:8080/v1/wallets");
    }

    #[test]
    fn envelope_unwraps_the_payload() {
        let json = r#"{"data": [{"ID": "W1", "name": "Family", "role": "owner",
                       "joinedAt": "2024-01-15T09:00:00Z"}]}"#;
        let envelope: Envelope<Vec<Wallet>> =
            serde_json::from_str(json).unwrap_or_else(|e| unreachable!("valid fixture: {e}"));
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].id, WalletId::new("W1"));
    }

    #[test]
    fn envelope_tolerates_extra_top_level_fields() {
        let json = r#"{"data": "ok", "requestId": "abc"}"#;
        let envelope: Envelope<String> =
            serde_json::from_str(json).unwrap_or_else(|e| unreachable!("valid fixture: {e}"));
        assert_eq!(envelope.data, "ok");
    }

    #[tokio::test]
    async fn unreachable_host_surfaces_a_transport_error() {
        // Reserved TEST-NET address, nothing listens there.
        let api = HttpApi::new("http://192.0.2.1:9");
        let request = api.client.get(api.url("/v1/wallets")).timeout(
            std::time::Duration::from_millis(250),
        );
        let result: Result<Vec<Wallet>, ApiError> = HttpApi::execute(request).await;
        let Err(error) = result else {
            unreachable!("nothing listens on TEST-NET");
        };
        assert_eq!(error.status, finboard_core::error::STATUS_TRANSPORT);
    }
}
