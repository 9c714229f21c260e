// SPDX-License-Identifier: MPL-2.0
//! Defect endpoints.

use super::client::ApiClient;
use crate::domain::defeito::{Defeito, DefeitoStatus, DefeitoStatusPayload};
use crate::error::Result;

pub const DEFEITOS_PATH: &str = "/defeitos/";

#[must_use]
pub fn defeito_path(id: i64) -> String {
    format!("{DEFEITOS_PATH}{id}")
}

pub async fn fetch_all(client: &ApiClient) -> Result<Vec<Defeito>> {
    client
        .get::<Vec<Defeito>>(DEFEITOS_PATH)
        .await
        .inspect_err(|err| tracing::error!(error = %err, "failed to load defects"))
}

pub async fn update_status(client: &ApiClient, id: i64, status: DefeitoStatus) -> Result<()> {
    let payload = DefeitoStatusPayload { status };
    client
        .put(&defeito_path(id), &payload)
        .await
        .inspect(|_| tracing::info!(id, status = %payload.status, "defect status updated"))
        .inspect_err(|err| tracing::error!(id, error = %err, "failed to update defect status"))
}

/// Downloads one evidence image.
pub async fn fetch_evidencia(client: &ApiClient, url: &str) -> Result<Vec<u8>> {
    client
        .fetch_bytes(url)
        .await
        .inspect_err(|err| tracing::warn!(url, error = %err, "failed to fetch evidence image"))
}
