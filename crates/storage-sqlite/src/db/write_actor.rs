use super::DbPool;
use crate::errors::{IntoCore, StorageError};
use budgetify_core::errors::{DatabaseError, Error, Result};
use diesel::SqliteConnection;
use log::warn;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A job receives the writer's connection, already inside a transaction.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, ErasedReply)>,
}

fn writer_gone() -> Error {
    Error::Database(DatabaseError::Internal(
        "database writer is no longer running".to_string(),
    ))
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    ///
    /// The job runs inside an immediate transaction: it is committed when the job
    /// returns `Ok` and rolled back when it returns `Err`.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| writer_gone())?;

        let boxed = ret_rx.await.map_err(|_| writer_gone())??;
        boxed
            .downcast::<T>()
            .map(|v| *v)
            .map_err(|_| Error::Unexpected("writer returned an unexpected result type".into()))
    }
}

/// Spawns a background Tokio task that acts as the single writer to the database.
///
/// The actor owns one connection from the pool for its whole lifetime and processes
/// write jobs serially, one transaction per job.
pub fn spawn_writer(pool: DbPool) -> Result<WriteHandle> {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, ErasedReply)>(1024);
    let mut conn = pool.get().into_core()?;

    tokio::spawn(async move {
        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(|e: StorageError| {
                    warn!("Write transaction rolled back: {}", e);
                    e.into()
                });

            // The caller may have gone away (request cancelled); nothing to do then.
            let _ = reply_tx.send(result);
        }
    });

    Ok(WriteHandle { tx })
}

#[cfg(test)]
mod tests {
    use crate::db::{get_connection, test_support::setup_db};
    use crate::schema::expense;
    use budgetify_core::errors::{DatabaseError, Error};
    use chrono::Utc;
    use diesel::prelude::*;

    #[tokio::test]
    async fn failing_job_rolls_back_its_writes() {
        let (_dir, pool, writer) = setup_db();

        let err = writer
            .exec(|conn| -> budgetify_core::Result<()> {
                diesel::insert_into(expense::table)
                    .values((
                        expense::category.eq("Food"),
                        expense::amount.eq(12.0),
                        expense::date.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(crate::errors::StorageError::from)?;
                Err(Error::Database(DatabaseError::QueryFailed(
                    "failed after insert".to_string(),
                )))
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Database(DatabaseError::QueryFailed(_))));

        let mut conn = get_connection(&pool).unwrap();
        let rows: i64 = expense::table.count().get_result(&mut conn).unwrap();
        assert_eq!(rows, 0);

        // The writer keeps serving after a rollback.
        let inserted = writer
            .exec(|conn| -> budgetify_core::Result<usize> {
                Ok(diesel::insert_into(expense::table)
                    .values((
                        expense::category.eq("Rent"),
                        expense::amount.eq(900.0),
                        expense::date.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(crate::errors::StorageError::from)?)
            })
            .await
            .unwrap();
        assert_eq!(inserted, 1);
    }
}
