use flamelink_utils::{
    Capabilities, ContentType, Error, FilterOptions, OrderOptions, QueryHandle, RefScope,
    ResultSet, Stage, apply_filters, apply_order_by, compose, pluck_content,
};
use serde_json::{Value, json};

#[derive(ContentType)]
#[content(reference = "blog-posts")]
#[allow(dead_code)]
pub struct BlogPost {
    pub title: String,
    pub slug: String,
}

// 只打印调用的查询句柄
struct PrintRef(String);

impl QueryHandle for PrintRef {
    fn capabilities(&self) -> Capabilities {
        Capabilities::ALL
    }

    fn limit_to_first(self, limit: &Value) -> Self {
        PrintRef(format!("{}.limitToFirst({})", self.0, limit))
    }

    fn start_at(self, value: &Value) -> Self {
        PrintRef(format!("{}.startAt({})", self.0, value))
    }

    fn order_by_child(self, path: &str) -> Self {
        PrintRef(format!("{}.orderByChild({:?})", self.0, path))
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let scope = RefScope::default().with_locale("en-GB");
    let path = scope.content_path_for::<BlogPost>()?;

    let query = apply_order_by(PrintRef(path), Some(&OrderOptions::by_child("slug")))?;
    let query = apply_filters(
        query,
        Some(&FilterOptions::new().start_at("b").limit_to_first(10)),
    );
    println!("{}", query.0);

    let transform = compose([
        Stage::sync(|results: Value| {
            Value::from(pluck_content::<BlogPost>(ResultSet::from(results)))
        }),
        Stage::deferred(|results: Value| async move { Ok::<_, Error>(results) }),
    ]);
    let results = transform
        .run(json!({
            "1": { "title": "Hello", "slug": "hello", "body": "..." },
            "2": { "title": "World", "slug": "world", "body": "..." },
        }))
        .await?;
    println!("{}", results);

    Ok(())
}
