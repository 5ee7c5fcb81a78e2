use ormlet::{
    driver::{Operation, Rows},
    Field, Record, Schema, Value,
};
use pretty_assertions::assert_eq;
use tests::{models, tests, DbTest, WarnLog};

async fn save_then_find(test: &mut DbTest) {
    let db = test.setup_db().await;
    let users = test.create_table(&db, &mut models::user()).await;

    let mut user = Record::new(&users)
        .with("email", "ann@example.com")
        .unwrap()
        .with("name", "Ann")
        .unwrap();

    assert_eq!(user.save(&db).await.unwrap(), 1);

    let id = user.primary_key();
    assert_eq!(id.as_str().map(str::len), Some(50));

    // Never-assigned attributes were stored as null
    assert_eq!(user.get("passwd"), Some(&Value::Null));

    let found = db.find(&users, id.clone()).await.unwrap().unwrap();
    assert_eq!(found, user);
    assert_eq!(found.value("admin"), Value::Bool(false));
    assert_eq!(found.value("image"), Value::Null);
}

async fn find_missing_key(test: &mut DbTest) {
    let db = test.setup_db().await;
    let users = test.create_table(&db, &mut models::user()).await;

    assert!(db.find(&users, "nobody").await.unwrap().is_none());
}

async fn update_then_find(test: &mut DbTest) {
    let db = test.setup_db().await;
    let blogs = test.create_table(&db, &mut models::blog()).await;

    let mut blog = Record::new(&blogs).with("name", "First post").unwrap();
    blog.save(&db).await.unwrap();

    blog.set("name", "Renamed").unwrap();
    blog.set("content", "Hello").unwrap();
    assert_eq!(blog.update(&db).await.unwrap(), 1);

    let found = db.find(&blogs, blog.primary_key()).await.unwrap().unwrap();
    assert_eq!(found.value("name"), Value::from("Renamed"));
    assert_eq!(found.value("content"), Value::from("Hello"));
    assert_eq!(found, blog);
}

async fn update_missing_row_affects_nothing(test: &mut DbTest) {
    let db = test.setup_db().await;
    let blogs = test.create_table(&db, &mut models::blog()).await;

    let blog = Record::new(&blogs)
        .with("id", "missing")
        .unwrap()
        .with("name", "ghost")
        .unwrap();

    assert_eq!(blog.update(&db).await.unwrap(), 0);
    assert_eq!(blog.remove(&db).await.unwrap(), 0);
}

async fn affected_row_mismatch_logs_warning(test: &mut DbTest) {
    let db = test.setup_db().await;
    let blogs = test.create_table(&db, &mut models::blog()).await;
    let (warnings, _guard) = WarnLog::capture();

    let mut blog = Record::new(&blogs).with("name", "First post").unwrap();
    assert_eq!(blog.save(&db).await.unwrap(), 1);
    assert_eq!(blog.update(&db).await.unwrap(), 1);
    assert!(warnings.messages().is_empty(), "{:?}", warnings.messages());

    let ghost = Record::new(&blogs)
        .with("id", "missing")
        .unwrap()
        .with("name", "ghost")
        .unwrap();

    assert_eq!(ghost.update(&db).await.unwrap(), 0);
    assert_eq!(ghost.remove(&db).await.unwrap(), 0);
    assert_eq!(
        warnings.messages(),
        [
            "failed to update by primary key: affected rows",
            "failed to remove by primary key: affected rows",
        ]
    );

    // The mismatch is not an error; the table is untouched
    assert!(db.find(&blogs, "missing").await.unwrap().is_none());
    assert_eq!(blog.remove(&db).await.unwrap(), 1);
    assert_eq!(warnings.messages().len(), 2);
}

async fn remove_deletes_row(test: &mut DbTest) {
    let db = test.setup_db().await;
    let comments = test.create_table(&db, &mut models::comment()).await;

    let mut comment = Record::new(&comments).with("content", "nice").unwrap();
    comment.save(&db).await.unwrap();
    assert!(db.find(&comments, comment.primary_key()).await.unwrap().is_some());

    assert_eq!(comment.remove(&db).await.unwrap(), 1);
    assert!(db.find(&comments, comment.primary_key()).await.unwrap().is_none());
}

async fn generated_key_and_default_views(test: &mut DbTest) {
    let db = test.setup_db().await;

    let mut builder = Schema::builder("Post");
    builder
        .table("posts")
        .field(
            "id",
            Field::string()
                .primary_key()
                .default_with(ormlet::schema::default::next_id)
                .ddl("varchar(50)"),
        )
        .field("title", Field::text())
        .field("views", Field::integer());
    let posts = test.create_table(&db, &mut builder).await;

    let mut post = Record::new(&posts).with("title", "Hello").unwrap();
    post.save(&db).await.unwrap();

    let id = post.get_as::<String>("id").unwrap();
    assert!(!id.is_empty());

    let found = db.find(&posts, id).await.unwrap().unwrap();
    assert_eq!(found.get_as::<i64>("views").unwrap(), 0);
    assert_eq!(found.get_as::<String>("title").unwrap(), "Hello");
}

async fn operations_sent_to_driver(test: &mut DbTest) {
    let db = test.setup_db().await;
    let counters = test.create_table(&db, &mut models::counter()).await;

    let mut counter = Record::new(&counters)
        .with("id", 7)
        .unwrap()
        .with("label", "hits")
        .unwrap();
    counter.save(&db).await.unwrap();
    db.find(&counters, 7).await.unwrap();

    let mut log = test.log();
    assert_eq!(log.len(), 2);

    let (op, resp) = log.pop().unwrap();
    let op = match op {
        Operation::ExecSql(op) => op,
        op => panic!("expected an insert, got {op:?}"),
    };
    assert_eq!(
        op.params,
        [Value::from("hits"), Value::I64(0), Value::I64(7)]
    );
    assert!(matches!(resp.rows, Rows::Count(1)));

    let (op, resp) = log.pop().unwrap();
    let op = match op {
        Operation::QuerySql(op) => op,
        op => panic!("expected a select, got {op:?}"),
    };
    assert_eq!(op.params, [Value::I64(7)]);
    assert_eq!(op.limit, Some(1));
    assert!(matches!(resp.rows, Rows::Values(ref rows) if rows.len() == 1));

    assert!(log.is_empty());
}

tests!(
    save_then_find,
    find_missing_key,
    update_then_find,
    update_missing_row_affects_nothing,
    affected_row_mismatch_logs_warning,
    remove_deletes_row,
    generated_key_and_default_views,
    operations_sent_to_driver,
);
