// SPDX-License-Identifier: MPL-2.0
//! Project endpoints and the reference lists the project screen needs.

use super::client::ApiClient;
use crate::domain::projeto::{Modulo, Projeto, SaveRequest, Usuario};
use crate::error::Result;
use futures_util::future::try_join3;
use std::future::Future;

pub const PROJETOS_PATH: &str = "/projetos/";
pub const MODULOS_PATH: &str = "/modulos/";
pub const USUARIOS_PATH: &str = "/usuarios/";

/// Everything the project screen shows, loaded together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub projetos: Vec<Projeto>,
    pub modulos: Vec<Modulo>,
    pub usuarios: Vec<Usuario>,
}

/// Runs the three fetches concurrently and fails as soon as any of them does.
///
/// The caller only ever sees all three lists or none.
pub async fn join_catalog<P, M, U>(projetos: P, modulos: M, usuarios: U) -> Result<Catalog>
where
    P: Future<Output = Result<Vec<Projeto>>>,
    M: Future<Output = Result<Vec<Modulo>>>,
    U: Future<Output = Result<Vec<Usuario>>>,
{
    let (projetos, modulos, usuarios) = try_join3(projetos, modulos, usuarios).await?;
    Ok(Catalog {
        projetos,
        modulos,
        usuarios,
    })
}

pub async fn load_catalog(client: &ApiClient) -> Result<Catalog> {
    join_catalog(
        client.get::<Vec<Projeto>>(PROJETOS_PATH),
        client.get::<Vec<Modulo>>(MODULOS_PATH),
        client.get::<Vec<Usuario>>(USUARIOS_PATH),
    )
    .await
    .inspect_err(|err| tracing::error!(error = %err, "failed to load project catalog"))
}

pub async fn fetch_projetos(client: &ApiClient) -> Result<Vec<Projeto>> {
    client
        .get::<Vec<Projeto>>(PROJETOS_PATH)
        .await
        .inspect_err(|err| tracing::error!(error = %err, "failed to refresh projects"))
}

/// Creates or updates a project.
pub async fn save(client: &ApiClient, request: &SaveRequest) -> Result<()> {
    let result = match request {
        SaveRequest::Create(payload) => client.post(PROJETOS_PATH, payload).await,
        SaveRequest::Update { id, payload } => {
            client.put(&format!("{PROJETOS_PATH}{id}"), payload).await
        }
    };
    match &result {
        Ok(()) => tracing::info!(nome = %request.payload().nome, "project saved"),
        Err(err) => tracing::error!(error = %err, "failed to save project"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::future::ready;

    fn modulo(id: i64) -> Modulo {
        Modulo {
            id,
            nome: format!("Módulo {id}"),
            sistema_id: None,
        }
    }

    #[tokio::test]
    async fn join_returns_all_lists_on_success() {
        let catalog = join_catalog(
            ready(Ok(Vec::new())),
            ready(Ok(vec![modulo(1), modulo(2)])),
            ready(Ok(Vec::new())),
        )
        .await
        .expect("join succeeds");

        assert_eq!(catalog.modulos.len(), 2);
        assert!(catalog.projetos.is_empty());
    }

    #[tokio::test]
    async fn join_fails_when_any_fetch_fails() {
        let result = join_catalog(
            ready(Ok(Vec::new())),
            ready(Ok(vec![modulo(1)])),
            ready(Err(Error::Status {
                status: 500,
                detail: String::new(),
            })),
        )
        .await;

        assert!(matches!(result, Err(Error::Status { status: 500, .. })));
    }

    #[tokio::test]
    async fn join_runs_fetches_concurrently() {
        use tokio::sync::oneshot;

        // Each side waits on the other; a sequential join would deadlock.
        let (tx_a, rx_a) = oneshot::channel::<()>();
        let (tx_b, rx_b) = oneshot::channel::<()>();

        let projetos = async move {
            let _ = tx_a.send(());
            let _ = rx_b.await;
            Ok::<Vec<Projeto>, Error>(Vec::new())
        };
        let modulos = async move {
            let _ = rx_a.await;
            let _ = tx_b.send(());
            Ok::<Vec<Modulo>, Error>(vec![modulo(7)])
        };

        let catalog = tokio::time::timeout(
            std::time::Duration::from_secs(1),
            join_catalog(projetos, modulos, ready(Ok(Vec::new()))),
        )
        .await
        .expect("join did not deadlock")
        .expect("join succeeds");

        assert_eq!(catalog.modulos[0].id, 7);
    }
}
