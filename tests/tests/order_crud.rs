use orders::Order;
use pretty_assertions::assert_eq;
use tests::{assert_eq_unordered, sample_orders, tests, DbTest};

async fn insert_then_scan(test: &mut DbTest) {
    let store = test.setup_store().await;
    let orders = sample_orders();

    assert_eq!(store.batch_insert(&orders).await.unwrap(), 4);

    let scanned = store.scan_all().await.unwrap();
    assert_eq_unordered!(&scanned, &orders);
}

async fn scan_empty_table(test: &mut DbTest) {
    let store = test.setup_store().await;

    assert!(store.scan_all().await.unwrap().is_empty());
}

async fn insert_nothing(test: &mut DbTest) {
    let store = test.setup_store().await;

    assert_eq!(store.batch_insert(&[]).await.unwrap(), 0);
    assert!(store.scan_all().await.unwrap().is_empty());
}

async fn insert_more_than_one_batch(test: &mut DbTest) {
    let store = test.setup_store().await;

    let orders: Vec<_> = (0..60)
        .map(|i| Order::new(format!("O{i}"), format!("C{}", i % 3), i, "Pending"))
        .collect();

    assert_eq!(store.batch_insert(&orders).await.unwrap(), 60);

    let scanned = store.scan_all().await.unwrap();
    assert_eq!(scanned.len(), 60);
    assert_eq_unordered!(&scanned, &orders);
}

async fn update_status(test: &mut DbTest) {
    let store = test.setup_store().await;
    store.batch_insert(&sample_orders()).await.unwrap();

    assert!(store.update_status("O2", "Shipped").await.unwrap());

    let mut expected = sample_orders();
    expected[1].status = "Shipped".to_string();

    let scanned = store.scan_all().await.unwrap();
    assert_eq_unordered!(&scanned, &expected);
}

async fn update_missing_order(test: &mut DbTest) {
    let store = test.setup_store().await;
    store.batch_insert(&sample_orders()).await.unwrap();

    assert!(!store.update_status("O9", "Shipped").await.unwrap());

    let scanned = store.scan_all().await.unwrap();
    assert_eq_unordered!(&scanned, &sample_orders());
}

async fn delete_order(test: &mut DbTest) {
    let store = test.setup_store().await;
    store.batch_insert(&sample_orders()).await.unwrap();

    store.delete("O4").await.unwrap();

    let scanned = store.scan_all().await.unwrap();
    assert!(scanned.iter().all(|order| order.order_id != "O4"));
    assert_eq_unordered!(&scanned, &sample_orders()[..3]);
}

async fn delete_is_idempotent(test: &mut DbTest) {
    let store = test.setup_store().await;
    store.batch_insert(&sample_orders()).await.unwrap();

    store.delete("O1").await.unwrap();
    let once = store.scan_all().await.unwrap();

    store.delete("O1").await.unwrap();
    let twice = store.scan_all().await.unwrap();

    assert_eq_unordered!(&twice, &once);
}

async fn delete_missing_order(test: &mut DbTest) {
    let store = test.setup_store().await;

    store.delete("O404").await.unwrap();
    assert!(store.scan_all().await.unwrap().is_empty());
}

async fn demo_sequence(test: &mut DbTest) {
    let store = test.setup_store().await;

    store.batch_insert(&sample_orders()).await.unwrap();
    assert_eq!(store.scan_all().await.unwrap().len(), 4);

    assert!(store.update_status("O2", "Shipped").await.unwrap());
    assert_eq!(store.aggregate_by_customer("C1").await.unwrap(), 300);

    store.delete("O4").await.unwrap();

    let scanned = store.scan_all().await.unwrap();
    assert_eq_unordered!(
        &scanned,
        &[
            Order::new("O1", "C1", 100, "Completed"),
            Order::new("O2", "C1", 200, "Shipped"),
            Order::new("O3", "C2", 150, "Completed"),
        ]
    );
}

tests!(
    insert_then_scan,
    scan_empty_table,
    insert_nothing,
    insert_more_than_one_batch,
    update_status,
    update_missing_order,
    delete_order,
    delete_is_idempotent,
    delete_missing_order,
    demo_sequence,
);
