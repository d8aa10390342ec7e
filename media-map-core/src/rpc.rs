//! Odoo JSON-RPC record store.
//!
//! Reads go through `call_kw` on `/web/dataset/call_kw/<model>/search_read`,
//! the same endpoint the web client's ORM service uses. In the browser the
//! request carries the session cookie of the page, so no authentication is
//! done here.

use std::cell::Cell;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::capability::RecordStore;
use crate::error::{Result, SiteMapError};
use crate::filter::Filter;
use crate::record::SiteRecord;

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'static str,
    id: u64,
    params: CallKw<'a>,
}

#[derive(Debug, Serialize)]
struct CallKw<'a> {
    model: &'a str,
    method: &'static str,
    args: [Value; 0],
    kwargs: SearchReadKwargs<'a>,
}

#[derive(Debug, Serialize)]
struct SearchReadKwargs<'a> {
    domain: &'a Filter,
    fields: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Vec<SiteRecord>>,
    #[serde(default)]
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    #[serde(default)]
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<RpcErrorData>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorData {
    #[serde(default)]
    message: Option<String>,
}

/// Record store backed by an Odoo server.
#[derive(Debug)]
pub struct OdooRpcStore {
    client: reqwest::Client,
    base_url: String,
    next_id: Cell<u64>,
}

impl OdooRpcStore {
    /// `base_url` is the server origin, e.g. `https://erp.example.com`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            next_id: Cell::new(1),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/web/dataset/call_kw/{}/search_read", self.base_url, model)
    }

    fn request<'a>(
        &self,
        model: &'a str,
        domain: &'a Filter,
        fields: &'a [&'a str],
    ) -> RpcRequest<'a> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        RpcRequest {
            jsonrpc: "2.0",
            method: "call",
            id,
            params: CallKw {
                model,
                method: "search_read",
                args: [],
                kwargs: SearchReadKwargs { domain, fields },
            },
        }
    }
}

/// Turn a JSON-RPC envelope into records or an error.
fn decode_response(body: &str) -> Result<Vec<SiteRecord>> {
    let response: RpcResponse = serde_json::from_str(body)?;
    if let Some(error) = response.error {
        let message = error
            .data
            .and_then(|d| d.message)
            .unwrap_or(error.message);
        return Err(SiteMapError::Rpc {
            code: error.code,
            message,
        });
    }
    response
        .result
        .ok_or_else(|| SiteMapError::Fetch("response has neither result nor error".to_string()))
}

impl RecordStore for OdooRpcStore {
    async fn search_read(
        &self,
        model: &str,
        domain: &Filter,
        fields: &[&str],
    ) -> Result<Vec<SiteRecord>> {
        let request = self.request(model, domain, fields);
        let response = self
            .client
            .post(self.endpoint(model))
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        let records = decode_response(&body)?;
        log::info!(
            "[MediaMap] rpc: search_read {} returned {} records",
            model,
            records.len()
        );
        Ok(records)
    }
}
