use std::path::Path;

use super::*;

fn parse(source: &str) -> Result<SyntaxTree, ParseError> {
    PhpParser::new().parse(source, Path::new("migration.php"))
}

fn method<'a>(tree: &'a SyntaxTree, name: &str) -> Option<&'a SyntaxNode> {
    tree.preorder()
        .find(|n| *n.kind() == NodeKind::MethodDeclaration && n.name() == Some(name))
}

const IRREVERSIBLE: &str = r"<?php

declare(strict_types=1);

final class SuccessMigration
{
    public function up(): void
    {
        // SQL CODE
    }

    public function down(): void
    {
        throw new \Exception('This migration is irreversible and cannot be reverted.');
    }
}
";

#[test]
fn parses_class_with_methods() {
    let tree = parse(IRREVERSIBLE).unwrap();

    let class = tree
        .preorder()
        .find(|n| *n.kind() == NodeKind::ClassDeclaration)
        .unwrap();
    assert_eq!(class.name(), Some("SuccessMigration"));

    let names: Vec<_> = tree
        .preorder()
        .filter(|n| *n.kind() == NodeKind::MethodDeclaration)
        .filter_map(SyntaxNode::name)
        .collect();
    assert_eq!(names, vec!["up", "down"]);
}

#[test]
fn throw_statement_is_tagged_as_throw() {
    let tree = parse(IRREVERSIBLE).unwrap();
    let down = method(&tree, "down").unwrap();

    assert_eq!(down.children().len(), 1);
    assert!(down.children()[0].is_throw());
    assert_eq!(down.line(), 12);
}

#[test]
fn comment_only_body_has_no_statements() {
    let tree = parse(IRREVERSIBLE).unwrap();
    let up = method(&tree, "up").unwrap();

    assert!(up.children().is_empty());
}

#[test]
fn comments_around_throw_are_ignored() {
    let source = r"<?php
class M
{
    public function down()
    {
        // cannot be undone
        throw new RuntimeException('irreversible');
        /* trailing */
    }
}
";
    let tree = parse(source).unwrap();
    let down = method(&tree, "down").unwrap();

    assert_eq!(down.children().len(), 1);
    assert!(down.children()[0].is_throw());
}

#[test]
fn stray_semicolons_are_not_statements() {
    let source = r"<?php
class M
{
    public function down()
    {
        ;
        throw new RuntimeException('irreversible');;
    }
}
";
    let tree = parse(source).unwrap();
    let down = method(&tree, "down").unwrap();

    assert_eq!(down.children().len(), 1);
    assert!(down.children()[0].is_throw());
}

#[test]
fn semicolon_only_body_has_no_statements() {
    let source = "<?php\nclass M { public function down() { ; } }\n";
    let tree = parse(source).unwrap();

    assert!(method(&tree, "down").unwrap().children().is_empty());
}

#[test]
fn nested_block_statements_are_inlined() {
    let source = r"<?php
class M
{
    public function down()
    {
        {
            {
                throw new RuntimeException('irreversible');
            }
        }
    }
}
";
    let tree = parse(source).unwrap();
    let down = method(&tree, "down").unwrap();

    assert_eq!(down.children().len(), 1);
    assert!(down.children()[0].is_throw());
    assert_eq!(down.children()[0].line(), 8);
}

#[test]
fn throw_inside_if_is_not_a_throw_statement() {
    let source = r"<?php
class M
{
    public function down()
    {
        if (true) {
            throw new Exception('nope');
        }
    }
}
";
    let tree = parse(source).unwrap();
    let down = method(&tree, "down").unwrap();

    assert_eq!(down.children().len(), 1);
    assert!(!down.children()[0].is_throw());
}

#[test]
fn abstract_method_has_no_body_statements() {
    let source = r"<?php
abstract class M
{
    abstract public function down(): void;
}
";
    let tree = parse(source).unwrap();
    let down = method(&tree, "down").unwrap();

    assert!(down.children().is_empty());
}

#[test]
fn free_function_is_not_a_method() {
    let source = r"<?php
function down()
{
    throw new Exception('x');
}
";
    let tree = parse(source).unwrap();

    assert!(method(&tree, "down").is_none());
    assert!(
        tree.preorder()
            .any(|n| *n.kind() == NodeKind::FunctionDeclaration && n.name() == Some("down"))
    );
}

#[test]
fn anonymous_class_methods_are_found() {
    let source = r"<?php

use Illuminate\Database\Migrations\Migration;

return new class extends Migration
{
    public function up(): void
    {
    }

    public function down(): void
    {
        throw new LogicException('irreversible');
    }
};
";
    let tree = parse(source).unwrap();
    let down = method(&tree, "down").unwrap();

    assert_eq!(down.children().len(), 1);
    assert!(down.children()[0].is_throw());
}

#[test]
fn namespaced_class_methods_are_found() {
    let source = r"<?php

namespace Database\Migrations;

use Doctrine\Migrations\AbstractMigration;

final class Version20240101000000 extends AbstractMigration
{
    public function down(Schema $schema): void
    {
        $this->addSql('DROP TABLE users');
    }
}
";
    let tree = parse(source).unwrap();
    let down = method(&tree, "down").unwrap();

    assert_eq!(down.children().len(), 1);
    assert!(!down.children()[0].is_throw());
}

#[test]
fn syntax_error_reports_position() {
    let source = "<?php\nclass Broken\n{\n    public function down(): void\n    {\n        throw new \\Exception('x';\n    }\n}\n";

    let err = parse(source).unwrap_err();

    assert!(err.message.starts_with("Syntax error"));
    assert!(err.line.is_some());
    assert!(err.column.is_some());
    assert!(err.to_string().contains("on line"));
}

#[test]
fn plain_text_file_has_no_methods() {
    let tree = parse("just some notes, no php here\n").unwrap();

    assert!(method(&tree, "down").is_none());
}
