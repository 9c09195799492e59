use book_dispatch::core::Serializable;
use book_dispatch::{Book, Command, DispatchError, Dispatcher, OperationRegistry};
use quick_xml::events::Event;
use quick_xml::Reader;

fn run(book: &Book, commands: &[Command]) -> (book_dispatch::Result<Option<String>>, String) {
    let mut dispatcher = Dispatcher::new(Vec::new());
    let result = dispatcher.dispatch(book, commands);
    let output = String::from_utf8(dispatcher.into_inner()).unwrap();
    (result, output)
}

/// Parses a flat XML document into its root tag and `(child, text)` pairs.
fn parse_flat_xml(xml: &str) -> (String, Vec<(String, String)>) {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();
    let mut root = String::new();
    let mut children = Vec::new();

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                if stack.is_empty() {
                    root = name.clone();
                } else {
                    children.push((name.clone(), String::new()));
                }
                stack.push(name);
            }
            Event::Text(t) => {
                if stack.len() == 2 {
                    let text = t.unescape().unwrap().into_owned();
                    children.last_mut().unwrap().1.push_str(&text);
                }
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    (root, children)
}

#[test]
fn test_display_variants() {
    let book = Book::new("T", "abc");

    let (_, output) = run(&book, &[Command::new("display", "console")]);
    assert_eq!(output, "abc\n");

    let (_, output) = run(&book, &[Command::new("display", "reverse")]);
    assert_eq!(output, "cba\n");
}

#[test]
fn test_print_variants() {
    let book = Book::new("T", "Content");

    let (_, output) = run(&book, &[Command::new("print", "console")]);
    assert_eq!(output, "Printing the book: T...\nContent\n");

    let (_, output) = run(&book, &[Command::new("print", "reverse")]);
    assert_eq!(output, "Printing the book in reverse: T...\ntnetnoC\n");
}

#[test]
fn test_serialize_json_parses_back() {
    let book = Book::new("Sample Book", "hi");
    let (result, output) = run(&book, &[Command::new("serialize", "json")]);

    let json = result.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"title": "Sample Book", "content": "hi"})
    );
    assert!(output.is_empty());
}

#[test]
fn test_serialize_xml_parses_back() {
    let book = Book::new("Sample Book", "hi");
    let (result, _) = run(&book, &[Command::new("serialize", "xml")]);

    let xml = result.unwrap().unwrap();
    assert!(!xml.starts_with("<?xml"));

    let (root, children) = parse_flat_xml(&xml);
    assert_eq!(root, "book");
    assert_eq!(
        children,
        vec![
            ("title".to_string(), "Sample Book".to_string()),
            ("content".to_string(), "hi".to_string()),
        ]
    );
}

#[test]
fn test_serialize_xml_escaping_round_trips() {
    let book = Book::new("Q&A <draft>", "a < b && c > d");
    let (result, _) = run(&book, &[Command::new("serialize", "xml")]);

    let (_, children) = parse_flat_xml(&result.unwrap().unwrap());
    assert_eq!(children[0].1, "Q&A <draft>");
    assert_eq!(children[1].1, "a < b && c > d");
}

#[test]
fn test_display_then_serialize_stops_processing() {
    let book = Book::new("Sample Book", "This is some sample content.");
    let commands = vec![
        Command::new("display", "reverse"),
        Command::new("serialize", "xml"),
        Command::new("print", "console"),
        Command::new("display", "nonexistent"),
    ];

    let (result, output) = run(&book, &commands);

    assert_eq!(output, ".tnetnoc elpmas emos si sihT\n");
    assert_eq!(
        result.unwrap().as_deref(),
        Some(
            "<book><title>Sample Book</title>\
             <content>This is some sample content.</content></book>"
        )
    );
}

#[test]
fn test_unknown_variant_raises_lookup_error() {
    let book = Book::new("T", "C");
    let (result, output) = run(&book, &[Command::new("display", "nonexistent")]);

    match result {
        Err(DispatchError::UnknownOperation { key, .. }) => assert_eq!(key, "DisplayNonexistent"),
        other => panic!("expected UnknownOperation, got {:?}", other),
    }
    assert!(output.is_empty());

    let (result, _) = run(&book, &[Command::new("serialize", "yaml")]);
    assert!(matches!(result, Err(DispatchError::UnknownOperation { .. })));
}

#[test]
fn test_unknown_action_is_a_no_op() {
    let book = Book::new("T", "C");
    let (result, output) = run(&book, &[Command::new("unknown", "console")]);

    assert!(result.unwrap().is_none());
    assert!(output.is_empty());
}

#[test]
fn test_unicode_content_reverses_by_char() {
    let book = Book::new("Ünïcode", "añb€");
    let (_, output) = run(
        &book,
        &[
            Command::new("display", "reverse"),
            Command::new("print", "reverse"),
        ],
    );

    assert_eq!(
        output,
        "€bña\nPrinting the book in reverse: Ünïcode...\n€bña\n"
    );
}

struct SerializeTitleOnly;

impl Serializable for SerializeTitleOnly {
    fn serializer_type(&self, book: &Book) -> book_dispatch::Result<String> {
        Ok(book.title.clone())
    }
}

#[test]
fn test_custom_registry_variant_is_dispatched() {
    let mut registry = OperationRegistry::with_defaults();
    registry.register_serializer("titleonly", SerializeTitleOnly);

    let mut dispatcher = Dispatcher::with_registry(registry, Vec::new());
    assert!(dispatcher.registry().keys().contains(&"SerializeTitleonly"));

    let book = Book::new("Sample Book", "hi");
    let result = dispatcher.dispatch(
        &book,
        &[
            Command::new("display", "console"),
            Command::new("serialize", "TitleOnly"),
        ],
    );

    assert_eq!(result.unwrap().as_deref(), Some("Sample Book"));
    assert_eq!(dispatcher.into_inner(), b"hi\n".to_vec());
}
