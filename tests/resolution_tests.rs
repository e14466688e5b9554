// Declaration resolution against real C++ parsed with the bundled grammar

use doxystub::{
    DocGenerator, DoxyError, DoxyResult, Insertion, OutputFormat, Position, Settings, SourceText,
};
use rstest::rstest;

fn generate_at(source: &str, line: usize, column: usize) -> DoxyResult<Insertion> {
    let mut generator = DocGenerator::new(&Settings::default())?;
    let text = SourceText::from_text(source, 4);
    generator.generate(
        &text,
        "test.cpp",
        Position::from_editor(line, column),
        OutputFormat::Plain,
    )
}

fn brief(insertion: &Insertion) -> &str {
    insertion.lines[0].trim_start()
}

#[rstest]
#[case::name_start(4)]
#[case::name_middle(7)]
#[case::name_end(10)]
#[case::parameter_list(12)]
fn test_positions_in_function_name_resolve_to_function(#[case] column: usize) {
    let insertion = generate_at("int compute();\n", 1, column).unwrap();
    assert_eq!(insertion.line, 1);
    assert_eq!(brief(&insertion), "/// \\brief compute");
}

#[test]
fn test_type_reference_before_name_resolves_to_function() {
    let source = "struct Foo {};\nFoo make(int seed);\n";
    let insertion = generate_at(source, 2, 0).unwrap();

    assert_eq!(insertion.line, 2);
    assert_eq!(brief(&insertion), "/// \\brief make");
    assert_eq!(
        insertion.lines.last().map(String::as_str),
        Some("/// \\return Foo")
    );
}

#[test]
fn test_namespace_qualifier_resolves_to_qualified_entity() {
    let source = "namespace geo {\nstruct Point {};\n}\ngeo::Point origin();\n";
    let insertion = generate_at(source, 4, 1).unwrap();

    assert_eq!(insertion.line, 4);
    assert_eq!(brief(&insertion), "/// \\brief origin");
    assert_eq!(
        insertion.lines.last().map(String::as_str),
        Some("/// \\return geo::Point")
    );
}

#[test]
fn test_out_of_line_method_qualifier_resolves_to_method() {
    let source = "\
class Shape {
public:
    int area() const;
};

int Shape::area() const { return 0; }
";
    let insertion = generate_at(source, 6, 5).unwrap();
    assert_eq!(insertion.line, 6);
    assert_eq!(brief(&insertion), "/// \\brief area");
}

#[test]
fn test_member_declarations_inside_class_body() {
    let source = "\
class Widget {
public:
    Widget(int size);
    ~Widget();
};
";
    let ctor = generate_at(source, 3, 4).unwrap();
    assert_eq!(ctor.line, 3);
    assert_eq!(
        ctor.lines,
        vec![
            "    /// \\brief Widget",
            "    /// ",
            "    /// ",
            "    /// ",
            "    /// \\param size size",
        ]
    );

    let dtor = generate_at(source, 4, 0).unwrap();
    assert_eq!(dtor.line, 4);
    assert_eq!(brief(&dtor), "/// \\brief ~Widget");
    assert_eq!(dtor.lines.len(), 3);
}

#[test]
fn test_class_declaration_at_name() {
    let insertion = generate_at("class Widget {};\n", 1, 6).unwrap();
    assert_eq!(insertion.line, 1);
    assert_eq!(
        insertion.lines,
        vec!["/// \\brief Widget", "/// ", "/// "]
    );
}

#[test]
fn test_body_statement_climbs_to_enclosing_function() {
    let source = "\
double scale(double x) {
    double factor = 2.0;
    return x * factor;
}
";
    let insertion = generate_at(source, 3, 0).unwrap();
    assert_eq!(insertion.line, 1);
    assert_eq!(brief(&insertion), "/// \\brief scale");
}

#[test]
fn test_first_character_without_declaration_is_not_found() {
    let source = "#include <vector>\nint value = 3;\n";
    let err = generate_at(source, 1, 0).unwrap_err();
    assert!(matches!(
        err,
        DoxyError::NoDeclarationFound {
            line: 1,
            column: 1,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "No supported declaration found at test.cpp:1,1"
    );
}

#[test]
fn test_variable_is_not_documented() {
    let err = generate_at("int value = 3;\n", 1, 4).unwrap_err();
    assert!(matches!(err, DoxyError::NoDeclarationFound { .. }));
}

#[test]
fn test_struct_is_not_documented() {
    let err = generate_at("struct Foo { int x; };\n", 1, 7).unwrap_err();
    assert!(matches!(err, DoxyError::NoDeclarationFound { .. }));
}

#[test]
fn test_anonymous_class_is_not_documented() {
    let err = generate_at("class {} anon;\n", 1, 2).unwrap_err();
    assert!(matches!(err, DoxyError::NoDeclarationFound { .. }));
}

#[test]
fn test_tab_indented_declaration() {
    let source = "namespace app {\n\tint run(int argc);\n}\n";
    let insertion = generate_at(source, 2, 5).unwrap();
    assert_eq!(insertion.line, 2);
    assert_eq!(insertion.lines[0], "    /// \\brief run");
}

#[test]
fn test_function_template_resolves_from_return_type() {
    let source = "\
template <typename T>
T identity(T value) {
    return value;
}
";
    let insertion = generate_at(source, 2, 0).unwrap();
    assert_eq!(insertion.line, 1);
    assert_eq!(brief(&insertion), "/// \\brief identity");
}

#[test]
fn test_explicit_specialization_is_plain_function() {
    let source = "\
template <typename T> int size() { return 0; }
template <> int size<char>() { return 1; }
";
    let insertion = generate_at(source, 2, 16).unwrap();
    assert_eq!(insertion.line, 2);
    assert_eq!(brief(&insertion), "/// \\brief size");
    assert_eq!(
        insertion.lines.last().map(String::as_str),
        Some("/// \\return int")
    );
}

#[test]
fn test_insertion_applies_above_declaration() {
    let source = "#include <cstdio>\n\nvoid greet();\n";
    let insertion = generate_at(source, 3, 5).unwrap();

    let mut buffer: Vec<String> = source.lines().map(str::to_string).collect();
    insertion.apply(&mut buffer);
    assert_eq!(
        buffer,
        vec![
            "#include <cstdio>",
            "",
            "/// \\brief greet",
            "/// ",
            "/// ",
            "void greet();",
        ]
    );
}
