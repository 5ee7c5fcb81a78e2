use ormlet::{Field, Flavor, Record, Schema, Value};
use tests::{models, tests, DbTest};

async fn argument_count_mismatch(test: &mut DbTest) {
    let db = test.setup_db().await;
    let counters = test.create_table(&db, &mut models::counter()).await;

    let err = db
        .run_mutation(counters.delete(), vec![])
        .await
        .unwrap_err();
    assert!(err.is_invalid_statement(), "{err}");

    let err = db
        .run_query(counters.select(), vec![Value::I64(1)], None)
        .await
        .unwrap_err();
    assert!(err.is_invalid_statement(), "{err}");

    // Rejected before reaching the database
    assert!(test.log().is_empty());
}

async fn question_mark_in_literal_is_not_a_placeholder(test: &mut DbTest) {
    let db = test.setup_db().await;
    let counters = test.create_table(&db, &mut models::counter()).await;

    Record::new(&counters)
        .with("id", 1)
        .unwrap()
        .with("label", "why?")
        .unwrap()
        .save(&db)
        .await
        .unwrap();

    let rows = db
        .run_query(
            "select label from counters where label = 'why?' and id = ?",
            vec![Value::I64(1)],
            None,
        )
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

async fn question_mark_in_comment_is_not_a_placeholder(test: &mut DbTest) {
    let db = test.setup_db().await;
    let counters = test.create_table(&db, &mut models::counter()).await;

    Record::new(&counters)
        .with("id", 1)
        .unwrap()
        .with("label", "hits")
        .unwrap()
        .save(&db)
        .await
        .unwrap();

    let rows = db
        .run_query(
            "select label from counters where label = ? -- why?\n and id = ? /* which? */",
            vec![Value::from("hits"), Value::I64(1)],
            None,
        )
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

async fn flavor_mismatch(test: &mut DbTest) {
    let db = test.setup_db().await;

    let other = match test.flavor() {
        Flavor::Mysql => Flavor::Sqlite,
        Flavor::Sqlite => Flavor::Mysql,
    };
    let schema = Schema::builder("Tag")
        .flavor(other)
        .field("id", Field::integer().primary_key())
        .build()
        .unwrap();

    let err = db.find(&schema, 1).await.unwrap_err();
    assert!(err.is_invalid_schema(), "{err}");

    let mut tag = Record::new(&schema).with("id", 1).unwrap();
    assert!(tag.save(&db).await.unwrap_err().is_invalid_schema());
    assert!(test.log().is_empty());
}

async fn duplicate_key_is_driver_error(test: &mut DbTest) {
    let db = test.setup_db().await;
    let counters = test.create_table(&db, &mut models::counter()).await;

    let mut counter = Record::new(&counters).with("id", 1).unwrap();
    counter.save(&db).await.unwrap();

    let mut again = Record::new(&counters).with("id", 1).unwrap();
    let err = again.save(&db).await.unwrap_err();
    assert!(err.is_driver(), "{err}");
    assert!(std::error::Error::source(&err).is_some());
}

tests!(
    argument_count_mismatch,
    question_mark_in_literal_is_not_a_placeholder,
    question_mark_in_comment_is_not_a_placeholder,
    flavor_mismatch,
    duplicate_key_is_driver_error,
);
