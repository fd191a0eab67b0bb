//! [`Tx`] client definitions.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard};
use tokio_postgres::{types::ToSql, Row, ToStatement};
use tracerr::Traced;

use crate::infra::database::{
    self,
    postgres::{self, connection, Connection},
};

use super::{acquire, delegate_to_acquired, NonTx};

/// Transactional Postgres database client.
///
/// The transaction is started on the first query, and is rolled back once the
/// last clone of this client is dropped without [`Tx::commit()`].
#[derive(Clone, Debug)]
pub struct Tx {
    /// [`connection::Pool`] the transaction [`Connection`] is taken from.
    pool: connection::Pool,

    /// Running transaction, once started.
    tx: Arc<RwLock<Option<connection::Tx>>>,
}

impl Tx {
    /// Creates a new [`Tx`] client sharing the pool of the provided [`NonTx`]
    /// client.
    #[must_use]
    pub fn from_non_tx(client: &NonTx) -> Self {
        Self {
            pool: client.pool.clone(),
            tx: Arc::default(),
        }
    }

    /// Returns the transaction [`Connection`] of this [`Tx`] client, starting
    /// it on the first call.
    async fn connection(
        &self,
    ) -> Result<RwLockReadGuard<'_, connection::Tx>, Traced<database::Error>>
    {
        acquire(&self.tx, || async {
            let conn = self
                .pool
                .get()
                .await
                .map_err(tracerr::from_and_wrap!(=> postgres::Error))
                .map_err(tracerr::map_from_and_wrap!(=> database::Error))?;
            connection::Tx::begin(conn).await.map_err(tracerr::wrap!())
        })
        .await
    }

    /// Commits the transaction of this [`Tx`] client, if it was started.
    ///
    /// # Errors
    ///
    /// If failed to commit the transaction.
    pub async fn commit(&self) -> Result<(), Traced<database::Error>> {
        let Some(tx) = self.tx.write().await.take() else {
            return Ok(());
        };
        tx.commit().await.map_err(tracerr::wrap!())
    }
}

delegate_to_acquired!(Tx);
