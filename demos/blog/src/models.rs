use ormlet::{
    schema::default::{next_id, unix_timestamp},
    Field, Flavor, Result, Schema,
};

use std::sync::Arc;

pub struct Models {
    pub user: Arc<Schema>,
    pub blog: Arc<Schema>,
    pub comment: Arc<Schema>,
}

impl Models {
    pub fn new(flavor: Flavor) -> Result<Models> {
        Ok(Models {
            user: Schema::builder("User")
                .table("users")
                .flavor(flavor)
                .field("id", id())
                .field("email", Field::string().ddl("varchar(50)"))
                .field("passwd", Field::string().ddl("varchar(50)"))
                .field("admin", Field::boolean())
                .field("name", Field::string().ddl("varchar(50)"))
                .field("image", Field::string().ddl("varchar(500)"))
                .field("created_at", Field::float().default_with(unix_timestamp))
                .build()?,

            blog: Schema::builder("Blog")
                .table("blogs")
                .flavor(flavor)
                .field("id", id())
                .field("user_id", Field::string().ddl("varchar(50)"))
                .field("user_name", Field::string().ddl("varchar(50)"))
                .field("user_image", Field::string().ddl("varchar(500)"))
                .field("name", Field::string().ddl("varchar(50)"))
                .field("summary", Field::string().ddl("varchar(200)"))
                .field("content", Field::text())
                .field("created_at", Field::float().default_with(unix_timestamp))
                .build()?,

            comment: Schema::builder("Comment")
                .table("comments")
                .flavor(flavor)
                .field("id", id())
                .field("blog_id", Field::string().ddl("varchar(50)"))
                .field("user_id", Field::string().ddl("varchar(50)"))
                .field("user_name", Field::string().ddl("varchar(50)"))
                .field("user_image", Field::string().ddl("varchar(500)"))
                .field("content", Field::text())
                .field("created_at", Field::float().default_with(unix_timestamp))
                .build()?,
        })
    }

    pub fn all(&self) -> [&Arc<Schema>; 3] {
        [&self.user, &self.blog, &self.comment]
    }
}

fn id() -> Field {
    Field::string()
        .primary_key()
        .default_with(next_id)
        .ddl("varchar(50)")
}

/// `create table` for a schema. The ORM does not manage tables; the demo
/// creates its own.
pub fn create_table(schema: &Schema) -> String {
    let quote = schema.flavor().identifier_quote();
    let columns = schema
        .mapping()
        .iter()
        .map(|(attr, field)| {
            let column = field.column_name().unwrap_or(attr);
            let key = if field.is_primary_key() { " primary key" } else { "" };
            format!("{quote}{column}{quote} {}{key}", field.column_type())
        })
        .collect::<Vec<_>>();

    format!(
        "create table if not exists {quote}{}{quote} ({})",
        schema.table_name(),
        columns.join(", ")
    )
}
