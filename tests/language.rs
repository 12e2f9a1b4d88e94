use std::fs::{self};

use funcalc::{Config, DivisionPolicy, Error, ErrorKind, Session, Value};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = Session::new().run(&code) {
                panic!("DSL example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```funcalc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_result(src: &str, expected: f64) {
    match Session::new().run(src) {
        Ok(value) => assert_eq!(value, expected, "script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match Session::new().run(src) {
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "unexpected error: {e}"),
    }
}

fn number(session: &Session, name: &str) -> Option<f64> {
    session.scope().get_local(name).and_then(Value::as_number)
}

#[test]
fn precedence_and_parentheses() {
    assert_result("1+2*3.", 7.0);
    assert_result("(1+2)*3.", 9.0);
    assert_result("2 * 3 - 4 / 2.", 4.0);
    assert_result("((2)).", 2.0);
}

#[test]
fn non_assignment_operators_are_left_associative() {
    assert_result("8 - 2 - 1.", 5.0);
    assert_result("8 / 2 * 2.", 8.0);
    assert_result("8 / 2 / 2.", 2.0);
    assert_result("1 - 2 + 3.", 2.0);
}

#[test]
fn decimal_literals() {
    assert_result("1.5 + 1.", 2.5);
    assert_result("0.25 * 4.", 1.0);
}

#[test]
fn assignment_persists_across_runs() {
    let mut session = Session::new();

    assert_eq!(session.run("x = 5.").unwrap(), 5.0);
    assert_eq!(session.run("x+1.").unwrap(), 6.0);
}

#[test]
fn chained_assignment_is_right_associative() {
    let mut session = Session::new();

    assert_eq!(session.run("x = y = 3.").unwrap(), 3.0);
    assert_eq!(number(&session, "x"), Some(3.0));
    assert_eq!(number(&session, "y"), Some(3.0));
}

#[test]
fn unassigned_variable_reads_as_zero() {
    let mut session = Session::new();

    assert_eq!(session.run("z.").unwrap(), 0.0);
    assert_eq!(session.run("z = z+1.").unwrap(), 1.0);
}

#[test]
fn statements_and_expression_lists() {
    assert_result("a = 1, b = 2, a + b.", 3.0);
    assert_result("a = 2. b = a * 3. b - 1.", 5.0);
    assert_result("a = 2.\nb = a * 3.\n\tb - 1.\n", 5.0);
}

#[test]
fn function_literal_and_call() {
    let mut session = Session::new();

    session.run("f = fun(a,b) -> a+b end.").unwrap();
    assert_eq!(session.run("f(2,3).").unwrap(), 5.0);
}

#[test]
fn function_outlives_defining_document() {
    let mut session = Session::new();

    session.run("square = fun(a) -> a * a end.").unwrap();
    assert_eq!(session.run("square(4).").unwrap(), 16.0);
    assert_eq!(session.run("square(square(2)).").unwrap(), 16.0);
}

#[test]
fn function_body_returns_last_expression() {
    assert_result("f = fun(a) -> b = a * 2, b + 1 end. f(4).", 9.0);
    assert_result("f = fun() -> 42 end. f().", 42.0);
}

#[test]
fn parameter_binding_does_not_mutate_outer_variable() {
    let mut session = Session::new();

    session.run("n = 1.").unwrap();
    session.run("g = fun(n) -> n+1 end.").unwrap();
    assert_eq!(session.run("g(10).").unwrap(), 11.0);
    assert_eq!(session.run("n.").unwrap(), 1.0);
}

#[test]
fn assignment_inside_function_shadows_outer_variable() {
    let mut session = Session::new();

    session.run("m = 1.").unwrap();
    assert_eq!(session.run("s = fun() -> m = m + 10, m end. s().").unwrap(), 11.0);
    assert_eq!(session.run("m.").unwrap(), 1.0);
}

#[test]
fn assignment_inside_function_does_not_leak() {
    let mut session = Session::new();

    assert_eq!(session.run("k = fun() -> w = 7 end. k().").unwrap(), 7.0);
    assert!(!session.scope().contains_local("w"));
}

#[test]
fn read_miss_inside_function_defines_name_in_call_scope_only() {
    let mut session = Session::new();

    assert_eq!(session.run("h = fun() -> q end. h().").unwrap(), 0.0);
    assert!(!session.scope().contains_local("q"));
}

#[test]
fn function_bodies_see_the_callers_scope() {
    // `f` reads `a` from whichever scope calls it, not where it was defined.
    assert_result("a = 1. f = fun() -> a end. g = fun(a) -> f() end. g(42).", 42.0);
    assert_result("a = 1. f = fun() -> a end. f().", 1.0);
}

#[test]
fn arguments_are_evaluated_in_the_callers_scope() {
    let mut session = Session::new();

    session.run("id = fun(v) -> v end.").unwrap();
    assert_eq!(session.run("id(t = 3) + t.").unwrap(), 6.0);
    assert_eq!(number(&session, "t"), Some(3.0));
}

#[test]
fn functions_are_first_class() {
    assert_result("apply = fun(g, x) -> g(x) end. double = fun(v) -> v * 2 end. apply(double, 21).",
                  42.0);
    assert_result("make = fun() -> fun(v) -> v + 1 end end. inc = make(). inc(1).", 2.0);
}

#[test]
fn function_values_display_their_parameters() {
    let value = Session::new().run("fun(a, b) -> a end.").unwrap();

    assert!(value.as_function().is_some());
    assert_eq!(value.to_string(), "fun(a, b)");
}

#[test]
fn function_literal_does_not_evaluate_its_body() {
    let mut session = Session::new();

    assert!(session.run("fun() -> q end.").is_ok());
    assert!(!session.scope().contains_local("q"));

    assert!(session.run("g = fun() -> v(1) end.").is_ok());
    assert!(!session.scope().contains_local("v"));
    assert_eq!(session.run("g().").unwrap_err().kind(), ErrorKind::Invocation);
}

#[test]
fn keywords_are_whole_words() {
    assert_result("funny = 3. funny + 1.", 4.0);
    assert_result("ending = 2. ending.", 2.0);
    assert_failure("end = 1.", ErrorKind::Syntax);
}

#[test]
fn division_by_zero_follows_ieee_by_default() {
    let mut session = Session::new();

    assert!(session.run("1/0.").unwrap().as_number().unwrap().is_infinite());
    assert!(session.run("0/0.").unwrap().as_number().unwrap().is_nan());
}

#[test]
fn strict_division_by_zero_is_error() {
    let mut session = Session::with_config(Config::default().with_division(DivisionPolicy::Strict));

    let err = session.run("1/0.").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Arithmetic);
    assert_eq!(session.run("1/4.").unwrap(), 0.25);
}

#[test]
fn unknown_character_is_lex_error() {
    assert_failure("$.", ErrorKind::Lex);
    assert_failure("x = 1 # 2.", ErrorKind::Lex);
}

#[test]
fn lex_error_reports_its_line() {
    let err = Session::new().run("x = 1.\ny = $.").unwrap_err();

    match err {
        Error::Parse(e) => assert_eq!(e.line(), 2),
        Error::Runtime(e) => panic!("expected a parse error, got {e}"),
    }
}

#[test]
fn missing_tokens_are_syntax_errors() {
    assert_failure("1+2", ErrorKind::Syntax);
    assert_failure("(1 + 2.", ErrorKind::Syntax);
    assert_failure("f = fun a) -> a end.", ErrorKind::Syntax);
    assert_failure("f = fun(a -> a end.", ErrorKind::Syntax);
    assert_failure("f = fun(a) a end.", ErrorKind::Syntax);
    assert_failure("f = fun(a) -> a.", ErrorKind::Syntax);
    assert_failure("f(1, 2.", ErrorKind::Syntax);
    assert_failure("1 + .", ErrorKind::Syntax);
    assert_failure("", ErrorKind::Syntax);
}

#[test]
fn only_variables_can_be_assigned() {
    assert_failure("1 = 2.", ErrorKind::Syntax);
    assert_failure("f(1) = 2.", ErrorKind::Syntax);
}

#[test]
fn parse_error_leaves_scope_untouched() {
    let mut session = Session::new();

    assert!(session.run("c = 1. c = 5").is_err());
    assert!(!session.scope().contains_local("c"));
}

#[test]
fn runtime_error_keeps_earlier_assignments() {
    let mut session = Session::new();

    let err = session.run("a = 1. a = 2, b(1). a = 3.").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Invocation);
    assert_eq!(number(&session, "a"), Some(2.0));
}

#[test]
fn calling_a_number_is_invocation_error() {
    let mut session = Session::new();

    session.run("v = 5.").unwrap();
    assert_eq!(session.run("v(1).").unwrap_err().kind(), ErrorKind::Invocation);
}

#[test]
fn wrong_function_arity_is_error() {
    assert_failure("f = fun(a) -> a end. f(1, 2).", ErrorKind::Invocation);
    assert_failure("f = fun(a, b) -> a end. f(1).", ErrorKind::Invocation);
}

#[test]
fn empty_function_body_is_error_when_called() {
    let mut session = Session::new();

    assert!(session.run("f = fun() -> end.").is_ok());
    assert_eq!(session.run("f().").unwrap_err().kind(), ErrorKind::EmptyBody);
}

#[test]
fn arithmetic_on_function_is_type_error() {
    assert_failure("f = fun() -> 1 end. f + 1.", ErrorKind::Type);

    let error = Session::new().run("f = fun() -> 1 end.\n2 * f.").unwrap_err();
    assert_eq!(error.to_string(),
               "Error on line 2: Type error: operator '*' expects numbers, found a function.");
}

#[test]
fn unbounded_recursion_hits_call_limit() {
    assert_failure("f = fun(n) -> f(n) end. f(1).", ErrorKind::RecursionLimit);

    let mut session = Session::with_config(Config::default().with_max_call_depth(3));
    session.run("f = fun(n) -> n end. g = fun(n) -> f(n) end. h = fun(n) -> g(n) end.")
           .unwrap();
    assert_eq!(session.run("h(5).").unwrap(), 5.0);
    session.run("i = fun(n) -> h(n) end.").unwrap();
    assert_eq!(session.run("i(5).").unwrap_err().kind(), ErrorKind::RecursionLimit);
}

#[test]
fn deep_nesting_hits_nesting_limit() {
    let depth = 64;
    let source = format!("{}1{}.", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(Session::new().run(&source).unwrap(), 1.0);

    let mut session = Session::with_config(Config::default().with_max_nesting_depth(16));
    assert_eq!(session.run(&source).unwrap_err().kind(), ErrorKind::RecursionLimit);

    let pathological = format!("{}1.", "(".repeat(100_000));
    assert_eq!(Session::new().run(&pathological).unwrap_err().kind(),
               ErrorKind::RecursionLimit);
}

#[test]
fn long_operator_chain_hits_nesting_limit() {
    let chain = format!("{}1.", "1+".repeat(100));
    assert_eq!(Session::new().run(&chain).unwrap(), 101.0);

    let pathological = format!("{}1.", "1+".repeat(100_000));
    assert_eq!(Session::new().run(&pathological).unwrap_err().kind(),
               ErrorKind::RecursionLimit);

    let assignments = format!("{}1.", "x=".repeat(100_000));
    assert_eq!(Session::new().run(&assignments).unwrap_err().kind(),
               ErrorKind::RecursionLimit);
}

#[test]
fn reruns_with_same_prior_assignments_are_deterministic() {
    let program = "f = fun(a, b) -> c = a * b, c - a / b end. x = 3. y = f(x, 4) + x.";

    let first = Session::new().run(program).unwrap();
    let second = Session::new().run(program).unwrap();
    assert_eq!(first, second);

    let mut seeded = Session::new();
    seeded.run("x = 10.").unwrap();
    let mut reseeded = Session::new();
    reseeded.run("x = 10.").unwrap();
    assert_eq!(seeded.run("x * 2 + x.").unwrap(),
               reseeded.run("x * 2 + x.").unwrap());
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.funcalc").expect("missing file");

    assert_eq!(Session::new().run(&script).unwrap(), 120.0);
}
