//! Kinetic API client

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use serde::{de::DeserializeOwned, Serialize};
use solana_sdk::signature::Keypair;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::models::{
    AppTransaction, Commitment, CreateAccountRequest, LatestBlockhashResponse,
    RequestAirdropRequest, RequestAirdropResponse,
};
use crate::config::KineticConfig;
use crate::programs::ProgramRegistry;
use crate::tx_builder::{TransactionAssembler, TransactionBuilderError};

/// Errors from the REST binding
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("kinetic api error (status={status}): {message}")]
    Api { status: u16, message: String },

    /// Local transaction assembly failed before anything was sent
    #[error("transaction assembly failed: {0}")]
    Assembly(#[from] TransactionBuilderError),

    /// Invalid client configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// Client for the Kinetic service
///
/// Holds the app identity (environment + index) from config and a
/// transaction assembler wired to the configured program ids.
#[derive(Debug, Clone)]
pub struct KineticClient {
    http: reqwest::Client,
    endpoint: String,
    environment: String,
    index: u16,
    commitment: Commitment,
    assembler: TransactionAssembler,
}

impl KineticClient {
    pub fn new(config: &KineticConfig) -> Result<Self, ApiError> {
        config
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        let programs = ProgramRegistry::from_config(&config.programs)
            .map_err(|e| ApiError::Config(e.to_string()))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            environment: config.environment.clone(),
            index: config.index,
            commitment: config.commitment,
            assembler: TransactionAssembler::new(programs),
        })
    }

    pub fn assembler(&self) -> &TransactionAssembler {
        &self.assembler
    }

    /// Request an airdrop of `amount` (or the service default) to `account`.
    pub async fn request_airdrop(
        &self,
        account: &str,
        mint: &str,
        amount: Option<&str>,
    ) -> Result<RequestAirdropResponse, ApiError> {
        let request = RequestAirdropRequest {
            account: account.to_string(),
            amount: amount.map(str::to_string),
            commitment: self.commitment,
            environment: self.environment.clone(),
            index: self.index,
            mint: mint.to_string(),
        };
        debug!(account = %account, mint = %mint, "Requesting airdrop");
        self.post_json("/api/airdrop", &request).await
    }

    /// Fetch a recent blockhash anchor for this app's environment.
    pub async fn latest_blockhash(&self) -> Result<LatestBlockhashResponse, ApiError> {
        let path = format!(
            "/api/transaction/latest-blockhash/{}/{}",
            self.environment, self.index
        );
        let response = self.http.get(format!("{}{}", self.endpoint, path)).send().await?;
        Self::handle(response).await
    }

    /// Create an associated token account for `owner` holding `mint`.
    ///
    /// Fetches a fresh blockhash, assembles and owner-signs the creation
    /// transaction, and submits it for the service to countersign (as fee
    /// payer) and broadcast.
    pub async fn create_account(
        &self,
        owner: &Keypair,
        mint: &str,
        fee_payer: &str,
        add_memo: bool,
        reference_id: Option<&str>,
    ) -> Result<AppTransaction, ApiError> {
        let blockhash = self.latest_blockhash().await?;
        let tx = self.assembler.assemble_account_creation(
            add_memo,
            self.index,
            &blockhash.blockhash,
            fee_payer,
            mint,
            owner,
        )?;

        let request = CreateAccountRequest {
            commitment: self.commitment,
            environment: self.environment.clone(),
            index: self.index,
            last_valid_block_height: blockhash.last_valid_block_height,
            mint: mint.to_string(),
            reference_id: reference_id.map(str::to_string),
            tx: BASE64_STANDARD.encode(tx),
        };
        self.post_json("/api/account/create", &request).await
    }

    async fn post_json<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, ApiError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}{}", self.endpoint, path))
            .json(body)
            .send()
            .await?;
        Self::handle(response).await
    }

    async fn handle<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = %status, "Kinetic API request failed");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}
