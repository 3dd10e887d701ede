use argtext_parser::{Flag, ParsedArgs};
use argtext_tokenizer::tokenize;

const CONFIG: &str = r#"
    --save
    --port=8081
    --path '/some/path'
    --comment="done"
"#;

fn main() {
    let args = tokenize(CONFIG);
    let argv: Vec<&str> = args.iter().map(String::as_str).collect();

    let ids = &[
        (Flag::Long("save"), "save"),
        (Flag::Long("port"), "port"),
        (Flag::Long("path"), "path"),
        (Flag::Long("comment"), "comment"),
    ];

    let parsed: ParsedArgs<'_, 4> =
        ParsedArgs::try_parse(argv.as_slice(), ids).expect("must be parsed");

    let port: u16 = parsed.get_one("port").expect("must be present");
    let path: String = parsed.get_one("path").expect("must be present");
    let comment: String = parsed.get_one("comment").expect("must be present");

    if !parsed.contains("save") {
        panic!("missing save");
    }

    if 8081 != port || path != "/some/path" || comment != "done" {
        panic!("invalid config");
    }
}
