//! Demonstration caller: decode a fixed document, print it both ways, and
//! recursively walk one named list.

use jsonish::{decode, encode, Value};

const DOCUMENT: &str = r#"
{
    "a": 123.23,
    "hello": ["c", "cpp", "py"],
    "ktt": true,
    "ymm": false,
    "xmm":
    {
        "v": "vvv"
    }
}
"#;

fn main() {
    let (json, _eaten) = decode(DOCUMENT);
    println!("{json}");
    println!("{}", encode(&json));

    let dict = json.as_dict().expect("document root is a dict");
    visit(&dict["hello"]);
}

fn visit(value: &Value) {
    match value {
        Value::List(items) => {
            for item in items {
                visit(item);
            }
        }
        leaf => println!("visit: {leaf}"),
    }
}
