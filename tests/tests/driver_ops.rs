use orders::{
    driver::{Operation, Rows},
    schema::{CUSTOMER_INDEX, STATUS},
    Value,
};
use pretty_assertions::assert_eq;
use tests::{sample_orders, tests, DbTest};

async fn batch_insert_writes_full_items(test: &mut DbTest) {
    let store = test.setup_store().await;
    store.batch_insert(&sample_orders()).await.unwrap();

    let log = test.log();
    assert_eq!(log.len(), 1);

    let (op, resp) = log.pop();
    let Operation::BatchPut(op) = op else {
        panic!("expected batch put, got {op:#?}");
    };

    assert_eq!(op.table.name, "Orders");
    assert_eq!(
        op.items,
        sample_orders()
            .iter()
            .map(|order| order.to_item())
            .collect::<Vec<_>>()
    );
    assert!(matches!(resp.rows, Rows::Count(4)));
}

async fn update_sets_one_attribute(test: &mut DbTest) {
    let store = test.setup_store().await;
    store.batch_insert(&sample_orders()).await.unwrap();
    test.log().clear();

    store.update_status("O2", "Shipped").await.unwrap();

    let log = test.log();
    assert_eq!(log.len(), 1);

    let (op, resp) = log.pop();
    let Operation::UpdateByKey(op) = op else {
        panic!("expected update by key, got {op:#?}");
    };

    assert_eq!(op.key, Value::from("O2"));
    assert_eq!(op.attribute, STATUS);
    assert_eq!(op.value, Value::from("Shipped"));
    assert!(matches!(resp.rows, Rows::Count(1)));
}

async fn aggregate_queries_customer_index(test: &mut DbTest) {
    let store = test.setup_store().await;
    store.batch_insert(&sample_orders()).await.unwrap();
    test.log().clear();

    store.aggregate_by_customer("C1").await.unwrap();

    let log = test.log();
    assert_eq!(log.count(|op| matches!(op, Operation::Scan(_))), 0);

    let (op, resp) = log.pop();
    let Operation::QueryByIndex(op) = op else {
        panic!("expected query by index, got {op:#?}");
    };

    assert_eq!(op.index.name, CUSTOMER_INDEX);
    assert_eq!(op.value, Value::from("C1"));

    let Rows::Items(items) = resp.rows else {
        panic!("expected items");
    };
    assert_eq!(items.len(), 2);
    assert!(log.is_empty());
}

async fn every_read_goes_to_the_store(test: &mut DbTest) {
    let store = test.setup_store().await;
    store.batch_insert(&sample_orders()).await.unwrap();
    test.log().clear();

    store.scan_all().await.unwrap();
    store.scan_all().await.unwrap();

    assert_eq!(test.log().count(|op| matches!(op, Operation::Scan(_))), 2);
}

tests!(
    batch_insert_writes_full_items,
    update_sets_one_attribute,
    aggregate_queries_customer_index,
    every_read_goes_to_the_store,
);
