use ormlet::PoolConfig;
use std::time::Duration;
use tests::{tests, DbTest};

async fn lease_blocks_at_capacity(test: &mut DbTest) {
    let db = test
        .try_setup_db(PoolConfig::new().max_size(1))
        .await
        .unwrap();

    let lease = db.pool().get().await.unwrap();
    assert_eq!(db.pool().status().max_size, 1);

    let waiting = tokio::time::timeout(Duration::from_millis(50), db.pool().get()).await;
    assert!(waiting.is_err(), "second lease must wait for the first");

    drop(lease);

    let lease = tokio::time::timeout(Duration::from_secs(5), db.pool().get())
        .await
        .expect("lease after release")
        .unwrap();
    drop(lease);
}

async fn wait_timeout_fails_acquire(test: &mut DbTest) {
    let db = test
        .try_setup_db(
            PoolConfig::new()
                .max_size(1)
                .wait_timeout(Duration::from_millis(20)),
        )
        .await
        .unwrap();

    let _lease = db.pool().get().await.unwrap();

    let err = db.pool().get().await.unwrap_err();
    assert!(err.is_connection_pool(), "{err}");
}

async fn lease_released_on_error(test: &mut DbTest) {
    let db = test
        .try_setup_db(PoolConfig::new().max_size(1))
        .await
        .unwrap();

    assert!(db
        .run_query("select * from missing_table", vec![], None)
        .await
        .unwrap_err()
        .is_driver());

    let rows = db.run_query("select 1 as one", vec![], None).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(db.pool().status().available, 1);
}

async fn invalid_pool_config(test: &mut DbTest) {
    let err = test
        .try_setup_db(PoolConfig::new().max_size(1).min_size(2))
        .await
        .unwrap_err();
    assert!(err.is_invalid_configuration());

    let err = test
        .try_setup_db(PoolConfig::new().max_size(0).min_size(0))
        .await
        .unwrap_err();
    assert!(err.is_invalid_configuration());
}

async fn closed_pool_rejects_calls(test: &mut DbTest) {
    let db = test.setup_db().await;
    db.close();

    assert!(db.pool().is_closed());
    assert!(db.pool().get().await.unwrap_err().is_connection_pool());
}

tests!(
    lease_blocks_at_capacity,
    wait_timeout_fails_acquire,
    lease_released_on_error,
    invalid_pool_config,
    closed_pool_rejects_calls,
);
