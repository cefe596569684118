//! Tests for the parser, rendered through the S-expression builder.
use super::*;
use crate::ast::{NoOp, SExpression};
use crate::reader::{tokenize, ErrorKind, ReadErr};

fn render(input: &str) -> ReadResult<String> {
    let table = TokenTable::new("test.obl", tokenize("test.obl", input)?);
    let mut builder = SExpression;
    Ok(Parser::new(table, &mut builder).parse()?.join("\n"))
}

fn check(input: &str, want: &str) -> ReadResult<()> {
    assert_eq!(render(input)?, want, "input: {input}");
    Ok(())
}

fn syntax_error(input: &str) -> ReadErr {
    match render(input) {
        Err(e) => {
            assert_eq!(e.kind, ErrorKind::Syntax, "input: {input}");
            e
        }
        Ok(v) => panic!("expected syntax error for {input}, got {v}"),
    }
}

#[test]
fn empty_input() -> ReadResult<()> {
    check("", "")?;
    check("  \n\n ", "")?;
    check("()", "()")
}

#[test]
fn terminals_in_lists() -> ReadResult<()> {
    check("(a)", "(a)")?;
    check("(1 \"two\" 3.5 0b101)", "(1 \"two\" 3.5 0b101)")?;
    check("(self)", "(self)")?;
    check("(42 factorial)", "(factorial 42)")
}

#[test]
fn multiple_top_level_forms() -> ReadResult<()> {
    check("(a) (b c)", "(a)\n(c b)")
}

#[test]
fn parentheses_only_group_compound_forms() -> ReadResult<()> {
    check("((((a))))", "(a)")?;
    check("(((x size)))", "(size x)")?;
    check("(x foo self)", "((foo x) self)")
}

#[test]
fn hashes() -> ReadResult<()> {
    check("({})", "(new Hash ())")?;
    check(
        "({a: {}, b: {}})",
        "(new Hash ((new Association (new Symbol \"a\") (new Hash ())) \
         (new Association (new Symbol \"b\") (new Hash ()))))",
    )?;
    check(
        "({a: 1, b: 2, c: 3})",
        "(new Hash ((new Association (new Symbol \"a\") 1) \
         (new Association (new Symbol \"b\") 2) \
         (new Association (new Symbol \"c\") 3)))",
    )
}

#[test]
fn hashes_with_arrows() -> ReadResult<()> {
    check(
        "({:a => 1, :b => 2})",
        "(new Hash ((new Association (new Symbol \"a\") 1) \
         (new Association (new Symbol \"b\") 2)))",
    )?;
    check(
        "({:a => (self), :b => (super), :c => 3})",
        "(new Hash ((new Association (new Symbol \"a\") (self)) \
         (new Association (new Symbol \"b\") (super)) \
         (new Association (new Symbol \"c\") 3)))",
    )?;
    check(
        r#"({"k1" => "v1", "k2" => "v2"})"#,
        r#"(new Hash ((new Association "k1" "v1") (new Association "k2" "v2")))"#,
    )
}

#[test]
fn hash_values_are_expressions() -> ReadResult<()> {
    check(
        "({a: x size, b: 1 + 2})",
        "(new Hash ((new Association (new Symbol \"a\") (size x)) \
         (new Association (new Symbol \"b\") (+ 1 2))))",
    )?;
    check(
        "(x = {:a => 100, :b => 200})",
        "(= x (new Hash ((new Association (new Symbol \"a\") 100) \
         (new Association (new Symbol \"b\") 200))))",
    )
}

#[test]
fn hashes_without_commas() -> ReadResult<()> {
    let want = "(new Hash ((new Association (new Symbol \"a\") 1) \
                (new Association (new Symbol \"b\") 2)))";
    check("({a: 1 b: 2})", want)?;
    check("({a: 1\n b: 2})", want)?;
    check("({:a => 1 :b => 2})", want)?;
    check("({a: 1, :b => 2})", want)
}

#[test]
fn keyword_sends_in_hash_values_need_parentheses() -> ReadResult<()> {
    check(
        "({a: (x at: 1) b: x size})",
        "(new Hash ((new Association (new Symbol \"a\") (at: x 1)) \
         (new Association (new Symbol \"b\") (size x))))",
    )
}

#[test]
fn keyword_messages() -> ReadResult<()> {
    check(
        "(x = Association key: :a value: 100)",
        "(= x (key:value: Association (new Symbol \"a\") 100))",
    )?;
    check("(x at: \"a\" put: 3)", "(at:put: x \"a\" 3)")?;
    check(
        "(x at: :a if_absent: \"\")",
        "(at:if_absent: x (new Symbol \"a\") \"\")",
    )?;
    check(
        "(b = x includes_key: :a)",
        "(= b (includes_key: x (new Symbol \"a\")))",
    )?;
    check("(x bitAnd: 0xff)", "(bitAnd: x 0xff)")
}

#[test]
fn keyword_arguments_take_binary_expressions() -> ReadResult<()> {
    check("(x at: 1 + 2 put: y size)", "(at:put: x (+ 1 2) (size y))")?;
    check("(x inject: 0 into: +)", "(inject:into: x 0 +)")
}

#[test]
fn unary_messages() -> ReadResult<()> {
    check("(x keys puts)", "(puts (keys x))")?;
    check("(x is_empty?)", "(is_empty? x)")?;
    check("(x sort!)", "(sort! x)")?;
    check("(self foo)", "(foo self)")?;
    check("(super new)", "(new super)")?;
    check("(y = x key)", "(= y (key x))")
}

#[test]
fn suffix_characters_before_operators() -> ReadResult<()> {
    check("(x!=y)", "(!= x y)")?;
    check("(x?=y)", "(?= x y)")?;
    check("(x != y)", "(!= x y)")?;
    check("(x is_empty? == y)", "(== (is_empty? x) y)")?;
    check("(done! = 1)", "(= done! 1)")
}

#[test]
fn binary_messages() -> ReadResult<()> {
    check("(a + b * c)", "(* (+ a b) c)")?;
    check("(x == y)", "(== x y)")?;
    check("(a >= b)", "(>= a b)")?;
    check("(a size + b size)", "(+ (size a) (size b))")
}

#[test]
fn assignment_is_right_associative() -> ReadResult<()> {
    check("(a = b = 3)", "(= a (= b 3))")?;
    check("(a = b + 1)", "(= a (+ b 1))")
}

#[test]
fn signs() -> ReadResult<()> {
    check("(-5)", "(negated 5)")?;
    check("(x = -2.5)", "(= x (negated 2.5))")?;
    check("(3 - 5)", "(- 3 5)")?;
    check("(3 -5)", "(- 3 5)")?;
    check("(x - -5)", "(- x (negated 5))")
}

#[test]
fn symbols() -> ReadResult<()> {
    check("(:ok)", "(new Symbol \"ok\")")?;
    check(
        "(:a,:b,:c)",
        "(, (, (new Symbol \"a\") (new Symbol \"b\")) (new Symbol \"c\"))",
    )?;
    check("(x = :Hello)", "(= x (new Symbol \"Hello\"))")
}

#[test]
fn tuples() -> ReadResult<()> {
    check("([])", "(new Tuple ())")?;
    check("([[] []])", "(new Tuple ((new Tuple ()) (new Tuple ())))")?;
    check("([41 42])", "(new Tuple (41 42))")?;
    check(r#"([42 "str" var])"#, r#"(new Tuple (42 "str" var))"#)
}

#[test]
fn commas_in_tuples_chain_to_the_left() -> ReadResult<()> {
    check(r#"([42, "str", var])"#, r#"(new Tuple (, (, 42 "str") var))"#)?;
    check(r#"([(42, "str")])"#, r#"(new Tuple (, 42 "str"))"#)?;
    check("([1, 2] size)", "(size (new Tuple (, 1 2)))")
}

#[test]
fn tuples_of_sends() -> ReadResult<()> {
    check(
        "(x each_key: [(a) (a puts)])",
        "(each_key: x (new Tuple ((a) (puts a))))",
    )?;
    check("([x size])", "(new Tuple (size x))")?;
    check("([(x size) (y size)])", "(new Tuple ((size x) (size y)))")
}

#[test]
fn quoted_lists() -> ReadResult<()> {
    check("`(1 2 3)", "(__quoted__ (1 2 3))")?;
    check("`()", "(__quoted__ ())")?;
    check("(`(a))", "(__quoted__ (a))")
}

#[test]
fn strings_keep_their_escapes() -> ReadResult<()> {
    check(
        r#"("a \"quoted\" word" size)"#,
        r#"(size "a \"quoted\" word")"#,
    )
}

#[test]
fn rendering_is_idempotent() -> ReadResult<()> {
    let once = render("(1 (2 \"s\") 3.5)")?;
    assert_eq!(once, "(1 (2 \"s\") 3.5)");
    assert_eq!(render(&once)?, once);
    Ok(())
}

#[test]
fn unclosed_collections() {
    let cases = [
        ("(x", "missing closing parenthesis on list"),
        ("(])", "missing closing parenthesis on list"),
        ("([)", "missing closing bracket on tuple"),
        ("[1 2", "missing closing bracket on tuple"),
        ("({)", "missing closing brace on hash"),
        ("({a: 1)", "missing closing brace on hash"),
        ("`(a", "missing closing parenthesis on quoted list"),
    ];
    for (input, want) in cases {
        assert_eq!(syntax_error(input).message(), want, "input: {input}");
    }
}

#[test]
fn bad_hash_associations() {
    assert_eq!(
        syntax_error("({a 1})").message(),
        "invalid key in hash association"
    );
    assert_eq!(
        syntax_error("({1 => 2})").message(),
        "invalid key in hash association"
    );
    assert_eq!(
        syntax_error("({:a 1})").message(),
        "expected '=>' in hash association"
    );
    assert_eq!(
        syntax_error("({\"k\" = > 1})").message(),
        "expected '=>' in hash association"
    );
}

#[test]
fn unexpected_tokens() {
    assert_eq!(syntax_error(")").message(), "unexpected token ')'");
    assert_eq!(syntax_error("(x at : 1)").message(), "unexpected token ':'");
    assert_eq!(syntax_error("(at: 1)").message(), "unexpected keyword 'at:'");
}

#[test]
fn missing_arguments() {
    assert_eq!(syntax_error("(x at:)").message(), "missing argument after 'at:'");
    assert_eq!(syntax_error("(x at: ").message(), "missing argument after 'at:'");
    assert_eq!(syntax_error("(a +)").message(), "missing argument after '+'");
    assert_eq!(syntax_error("(x = )").message(), "missing argument after '='");
    assert_eq!(syntax_error("({a: })").message(), "missing argument after 'a:'");
}

#[test]
fn errors_report_the_line() {
    let err = syntax_error("(x at: 1\n  put: [2\n)");
    assert_eq!(err.message(), "missing closing bracket on tuple");
    assert_eq!(err.line, Some(3));
    assert_eq!(err.source_name, "test.obl");
}

#[test]
fn lexical_errors_pass_through() {
    match render("(042)") {
        Err(e) => assert_eq!(e.kind, ErrorKind::Lexical),
        Ok(v) => panic!("expected lexical error, got {v}"),
    }
}

#[test]
fn no_op_builder_counts_forms() -> ReadResult<()> {
    let tokens = tokenize("test.obl", "(x at: 1) [1 2] {a: 3}")?;
    let mut builder = NoOp;
    let forms = Parser::new(TokenTable::new("test.obl", tokens), &mut builder).parse()?;
    assert_eq!(forms.len(), 3);
    Ok(())
}

#[test]
fn no_op_builder_reports_errors() -> ReadResult<()> {
    let tokens = tokenize("test.obl", "({a: 1)")?;
    let mut builder = NoOp;
    match Parser::new(TokenTable::new("test.obl", tokens), &mut builder).parse() {
        Err(e) => assert_eq!(e.message(), "missing closing brace on hash"),
        Ok(v) => panic!("expected syntax error, got {} forms", v.len()),
    }
    Ok(())
}
