//! End-to-end generation into a temporary directory.

use std::path::Path;

use fpgen::codegen::generate;
use fpgen::output::{BuiltinTemplates, MemoryWriter, PsrPathResolver};
use fpgen::{Argument, Constructor, Definition, DefinitionCollection, Deriving, Generator, GeneratorConfig, GeneratorError};
use tempfile::TempDir;

const HEADER: &str = "<?php\n\n// this file is auto-generated by fpgen\n// don't edit this file manually\n\ndeclare(strict_types=1);\n\n";

fn config(root: &Path) -> GeneratorConfig {
    let mut config = GeneratorConfig::default();
    config.definitions_dir = root.join("definitions");
    config.psr4.insert("Foo\\".to_string(), root.join("src"));
    config.psr4.insert("My\\".to_string(), root.join("src").join("My"));
    config
}

fn collection(definitions: Vec<Definition>) -> DefinitionCollection {
    DefinitionCollection::from_definitions(definitions).unwrap()
}

#[test]
fn test_dumps_simple_class() {
    let dir = TempDir::new().unwrap();
    let generator = Generator::new(config(dir.path()));
    let bar = Definition::new("Foo", "Bar", vec![Constructor::new("String")]);

    let result = generator
        .generate_collection(&collection(vec![bar]), &mut fpgen::output::FsWriter)
        .unwrap();

    let path = dir.path().join("src").join("Bar.php");
    assert_eq!(result.files, vec![path.clone()]);

    let expected = format!(
        "{}{}",
        HEADER,
        r#"namespace Foo {
    final class Bar
    {
        private $value;

        public function __construct(string $value)
        {
            $this->value = $value;
        }

        public function value(): string
        {
            return $this->value;
        }
    }
}
"#
    );
    assert_eq!(std::fs::read_to_string(path).unwrap(), expected);
}

#[test]
fn test_dumps_class_with_its_child() {
    let dir = TempDir::new().unwrap();
    let generator = Generator::new(config(dir.path()));
    let bar = Definition::new("Foo", "Bar", vec![Constructor::new("Foo\\Bar"), Constructor::new("Foo\\Baz")]);

    generator
        .generate_collection(&collection(vec![bar]), &mut fpgen::output::FsWriter)
        .unwrap();

    let bar = std::fs::read_to_string(dir.path().join("src").join("Bar.php")).unwrap();
    let baz = std::fs::read_to_string(dir.path().join("src").join("Baz.php")).unwrap();

    assert_eq!(bar, format!("{}namespace Foo {{\n    class Bar\n    {{\n    }}\n}}\n", HEADER));
    assert_eq!(baz, format!("{}namespace Foo {{\n    final class Baz extends Bar\n    {{\n    }}\n}}\n", HEADER));
}

#[test]
fn test_child_definitions_extend_their_parent() {
    let shape = Definition::new("Foo", "Shape", vec![Constructor::new("Foo\\Circle")]);
    let circle = Definition::new(
        "Foo",
        "Circle",
        vec![Constructor::with_arguments("Foo\\Circle", vec![Argument::new("radius", "float")])],
    )
    .with_derivings(vec![Deriving::Equals]);

    let paths = PsrPathResolver::new().with_psr4("Foo\\", "/out");
    let generated = generate(&collection(vec![shape, circle]), &BuiltinTemplates, &paths).unwrap();

    let classes: Vec<&str> = generated.files.iter().map(|f| f.class.as_str()).collect();
    assert_eq!(classes, vec!["Foo\\Shape", "Foo\\Circle"]);

    let circle = &generated.files[1].content;
    assert!(circle.contains("    final class Circle extends Shape\n"));
    assert!(circle.contains("        public function equals(Circle $circle): bool\n        {\n            return $this->radius === $circle->radius;\n        }\n"));
}

#[test]
fn test_sum_type_over_two_definitions() {
    let shape = Definition::new("Foo", "Shape", vec![Constructor::new("Foo\\Circle"), Constructor::new("Foo\\Square")]);
    let circle = Definition::new(
        "Foo",
        "Circle",
        vec![Constructor::with_arguments("Foo\\Circle", vec![Argument::new("radius", "float")])],
    );
    let square = Definition::new(
        "Foo",
        "Square",
        vec![Constructor::with_arguments("Foo\\Square", vec![Argument::new("side", "float")])],
    );

    let paths = PsrPathResolver::new().with_psr4("Foo\\", "/out");
    let generated = generate(&collection(vec![shape, circle, square]), &BuiltinTemplates, &paths).unwrap();

    let classes: Vec<&str> = generated.files.iter().map(|f| f.class.as_str()).collect();
    assert_eq!(classes, vec!["Foo\\Shape", "Foo\\Circle", "Foo\\Square"]);

    assert!(generated.files[0].content.contains("\n    class Shape\n"));
    assert!(generated.files[1].content.contains("\n    final class Circle extends Shape\n"));
    assert!(generated.files[2].content.contains("\n    final class Square extends Shape\n"));
}

#[test]
fn test_enum_generates_base_and_options() {
    let color = Definition::new("Foo", "Color", vec![Constructor::new("Foo\\Red"), Constructor::new("Foo\\Blue")])
        .with_derivings(vec![Deriving::Enum]);
    let paths = PsrPathResolver::new().with_psr4("Foo\\", "/out");

    let generated = generate(&collection(vec![color]), &BuiltinTemplates, &paths).unwrap();

    assert_eq!(generated.files.len(), 3);
    let base = &generated.files[0].content;
    assert!(base.contains("    abstract class Color\n"));
    assert!(base.contains("            Red::VALUE => Red::class,\n            Blue::VALUE => Blue::class,\n"));

    let red = &generated.files[1];
    assert_eq!(red.path, Path::new("/out/Red.php"));
    assert!(red.content.contains("    final class Red extends Color\n    {\n        public const VALUE = 'Red';\n    }\n"));
}

#[test]
fn test_wrapper_methods_are_inserted() {
    let email = Definition::new("Foo", "Email", vec![Constructor::new("String")])
        .with_derivings(vec![Deriving::FromString, Deriving::ToString]);
    let paths = PsrPathResolver::new().with_psr4("Foo\\", "/out");

    let generated = generate(&collection(vec![email]), &BuiltinTemplates, &paths).unwrap();
    let content = &generated.files[0].content;

    assert!(content.contains("        public static function fromString(string $value): self\n"));
    assert!(content.contains("        public function toString(): string\n        {\n            return $this->value;\n        }\n"));
    assert!(!content.contains("@derived-methods"));
    assert!(!content.contains("{{"));
}

#[test]
fn test_messages_render_complete_classes() {
    let user_id = Definition::new("My", "UserId", vec![Constructor::new("My\\UserId")]).with_derivings(vec![Deriving::Uuid]);
    let registered = Definition::new(
        "My",
        "UserRegistered",
        vec![Constructor::with_arguments(
            "My\\UserRegistered",
            vec![Argument::new("id", "My\\UserId"), Argument::new("name", "string")],
        )],
    )
    .with_derivings(vec![Deriving::AggregateChanged]);
    let paths = PsrPathResolver::new().with_psr4("My\\", "/out");

    let generated = generate(&collection(vec![user_id, registered]), &BuiltinTemplates, &paths).unwrap();
    let event = &generated.files[1].content;

    assert!(event.contains("    final class UserRegistered extends \\Prooph\\Common\\Messaging\\DomainEvent\n"));
    assert!(event.contains("        public static function with(UserId $id, string $name): self\n"));
    assert!(event.contains("$this->setPayload(array_merge($payload, ['id' => $aggregateId]));"));
    assert!(!event.contains("{{"));
}

#[test]
fn test_invalid_collection_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let generator = Generator::new(config(dir.path()));
    let good = Definition::new("Foo", "Good", vec![Constructor::new("String")]);
    let bad = Definition::new(
        "Foo",
        "Bad",
        vec![Constructor::with_arguments("Foo\\Bad", vec![Argument::new("x", "Foo\\Missing")])],
    );

    let mut writer = MemoryWriter::new();
    let result = generator.generate_collection(&collection(vec![good, bad]), &mut writer);

    assert!(matches!(result, Err(GeneratorError::InvalidDefinitions { .. })));
    assert!(writer.is_empty());
}

#[test]
fn test_unresolvable_path_writes_nothing() {
    let good = Definition::new("Foo", "Good", vec![Constructor::new("String")]);
    let elsewhere = Definition::new("Other", "Thing", vec![Constructor::new("String")]);
    let paths = PsrPathResolver::new().with_psr4("Foo\\", "/out");

    let result = generate(&collection(vec![good, elsewhere]), &BuiltinTemplates, &paths);
    assert!(matches!(result, Err(GeneratorError::UnresolvablePath { class }) if class == "Other\\Thing"));
}

#[test]
fn test_duplicate_output_paths() {
    let upper = Definition::new("Foo\\A", "Thing", vec![Constructor::new("String")]);
    let lower = Definition::new("Foo\\B", "Thing", vec![Constructor::new("String")]);
    let paths = PsrPathResolver::new().with_psr4("Foo\\A\\", "/out").with_psr4("Foo\\B\\", "/out");

    let result = generate(&collection(vec![upper, lower]), &BuiltinTemplates, &paths);
    assert!(matches!(result, Err(GeneratorError::DuplicateOutput { .. })));
}

#[test]
fn test_pipeline_from_definition_files() {
    let dir = TempDir::new().unwrap();
    let definitions = dir.path().join("definitions");
    std::fs::create_dir_all(&definitions).unwrap();
    std::fs::write(
        definitions.join("user.json"),
        r#"{"definitions": [
            {"namespace": "My", "name": "UserId", "constructors": [{"name": "My\\UserId"}], "derivings": ["Uuid"]},
            {"namespace": "My", "name": "RegisterUser",
             "constructors": [{"name": "My\\RegisterUser", "arguments": [{"name": "id", "type": "My\\UserId"}]}],
             "derivings": ["Command"]}
        ]}"#,
    )
    .unwrap();

    let generator = Generator::new(config(dir.path()));
    assert_eq!(generator.check().unwrap(), 2);

    let result = generator.generate().unwrap();
    assert_eq!(result.definitions, 2);
    assert!(result.written);

    let command = std::fs::read_to_string(dir.path().join("src").join("My").join("RegisterUser.php")).unwrap();
    assert!(command.contains("            return UserId::fromString($this->payload['id']);\n"));
    assert!(dir.path().join("src").join("My").join("UserId.php").is_file());
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let definitions = dir.path().join("definitions");
    std::fs::create_dir_all(&definitions).unwrap();
    std::fs::write(
        definitions.join("name.json"),
        r#"{"definitions": [{"namespace": "Foo", "name": "Name", "constructors": [{"name": "String"}]}]}"#,
    )
    .unwrap();

    let mut config = config(dir.path());
    config.dry_run = true;
    let result = Generator::new(config).generate().unwrap();

    assert_eq!(result.files, vec![dir.path().join("src").join("Name.php")]);
    assert!(!result.written);
    assert!(!dir.path().join("src").exists());
}

#[test]
fn test_regeneration_is_byte_identical() {
    let person = Definition::new(
        "Foo",
        "Person",
        vec![Constructor::with_arguments(
            "Foo\\Person",
            vec![Argument::new("name", "string"), Argument::new("age", "int").nullable()],
        )],
    )
    .with_derivings(vec![Deriving::FromArray, Deriving::ToArray, Deriving::Equals]);
    let definitions = collection(vec![person]);
    let paths = PsrPathResolver::new().with_psr4("Foo\\", "/out");

    let first = generate(&definitions, &BuiltinTemplates, &paths).unwrap();
    let second = generate(&definitions, &BuiltinTemplates, &paths).unwrap();
    assert_eq!(first.files, second.files);
}

#[test]
fn test_aggregate_id_must_convert_to_string() {
    let counted = Definition::new(
        "Foo",
        "Counted",
        vec![Constructor::with_arguments(
            "Foo\\Counted",
            vec![Argument::new("id", "int"), Argument::new("n", "int")],
        )],
    )
    .with_derivings(vec![Deriving::AggregateChanged]);
    let paths = PsrPathResolver::new().with_psr4("Foo\\", "/out");

    let err = generate(&collection(vec![counted]), &BuiltinTemplates, &paths).unwrap_err();
    match err {
        GeneratorError::InvalidDefinitions { errors } => assert!(matches!(
            errors.as_slice(),
            [GeneratorError::InvalidDeriving { deriving, .. }] if deriving == "AggregateChanged"
        )),
        other => panic!("unexpected error: {other}"),
    }
}
