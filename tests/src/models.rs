//! The records of a small blog: users, their posts and comments on posts.

use ormlet::{
    schema::{
        default::{next_id, unix_timestamp},
        Builder,
    },
    Field, Schema,
};

fn id() -> Field {
    Field::string()
        .primary_key()
        .default_with(next_id)
        .ddl("varchar(50)")
}

pub fn user() -> Builder {
    let mut builder = Schema::builder("User");
    builder
        .table("users")
        .field("id", id())
        .field("email", Field::string().ddl("varchar(50)"))
        .field("passwd", Field::string().ddl("varchar(50)"))
        .field("admin", Field::boolean())
        .field("name", Field::string().ddl("varchar(50)"))
        .field("image", Field::string().ddl("varchar(500)"))
        .field("created_at", Field::float().default_with(unix_timestamp));
    builder
}

pub fn blog() -> Builder {
    let mut builder = Schema::builder("Blog");
    builder
        .table("blogs")
        .field("id", id())
        .field("user_id", Field::string().ddl("varchar(50)"))
        .field("user_name", Field::string().ddl("varchar(50)"))
        .field("user_image", Field::string().ddl("varchar(500)"))
        .field("name", Field::string().ddl("varchar(50)"))
        .field("summary", Field::string().ddl("varchar(200)"))
        .field("content", Field::text())
        .field("created_at", Field::float().default_with(unix_timestamp));
    builder
}

pub fn comment() -> Builder {
    let mut builder = Schema::builder("Comment");
    builder
        .table("comments")
        .field("id", id())
        .field("blog_id", Field::string().ddl("varchar(50)"))
        .field("user_id", Field::string().ddl("varchar(50)"))
        .field("user_name", Field::string().ddl("varchar(50)"))
        .field("user_image", Field::string().ddl("varchar(500)"))
        .field("content", Field::text())
        .field("created_at", Field::float().default_with(unix_timestamp));
    builder
}

/// A counter table keyed by integer, for numeric tests.
pub fn counter() -> Builder {
    let mut builder = Schema::builder("Counter");
    builder
        .table("counters")
        .field("id", Field::integer().primary_key())
        .field("label", Field::string())
        .field("views", Field::integer());
    builder
}
