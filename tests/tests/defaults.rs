use ormlet::{Record, Value};
use pretty_assertions::assert_eq;
use tests::{models, tests, DbTest};

async fn defaults_fill_unset_attributes(test: &mut DbTest) {
    let db = test.setup_db().await;
    let users = test.create_table(&db, &mut models::user()).await;

    let mut user = Record::new(&users).with("name", "Bob").unwrap();
    user.save(&db).await.unwrap();

    assert_eq!(user.get("admin"), Some(&Value::Bool(false)));
    assert!(user.get_as::<f64>("created_at").unwrap() > 0.0);
    assert!(!user.is_set("email"));

    let found = db.find(&users, user.primary_key()).await.unwrap().unwrap();
    assert_eq!(found.value("created_at"), user.value("created_at"));
    assert_eq!(found.value("email"), Value::Null);
}

async fn explicit_null_is_kept(test: &mut DbTest) {
    let db = test.setup_db().await;
    let users = test.create_table(&db, &mut models::user()).await;

    let mut user = Record::new(&users)
        .with("created_at", Value::Null)
        .unwrap();
    user.save(&db).await.unwrap();

    let found = db.find(&users, user.primary_key()).await.unwrap().unwrap();
    assert_eq!(found.value("created_at"), Value::Null);
}

async fn saved_key_is_stable(test: &mut DbTest) {
    let db = test.setup_db().await;
    let blogs = test.create_table(&db, &mut models::blog()).await;

    let mut blog = Record::new(&blogs);
    let key = blog.value_or_default("id").unwrap();
    blog.save(&db).await.unwrap();

    assert_eq!(blog.primary_key(), key);
    assert!(db.find(&blogs, key).await.unwrap().is_some());
}

tests!(
    defaults_fill_unset_attributes,
    explicit_null_is_kept,
    saved_key_is_stable,
);
