// Integration tests for the SharpScript interpreter.
//
// Each test runs a complete program through the lexer, parser, and
// interpreter with the print-family output captured into a buffer, then
// asserts on the produced lines and/or on the final global bindings.

use sharpscript::interpreter::{Interpreter, Value};
use sharpscript::lexer::Lexer;
use sharpscript::parser::Parser;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

fn run_program(source: &str) -> (Interpreter, String) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse();
    let mut interp = Interpreter::new();
    let sink = Arc::new(Mutex::new(Vec::new()));
    interp.set_output(sink.clone());
    interp.run(&program);
    let output = {
        let bytes = sink.lock().unwrap();
        String::from_utf8_lossy(&bytes).to_string()
    };
    (interp, output)
}

fn lines_of(source: &str) -> Vec<String> {
    run_program(source).1.lines().map(str::to_string).collect()
}

fn number_binding(interp: &Interpreter, name: &str) -> f64 {
    match interp.lookup(name) {
        Some(Value::Number(n)) => n,
        other => panic!("expected {} to be a number, got {:?}", name, other),
    }
}

fn temp_file(stem: &str) -> std::path::PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let unique = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("sharpscript_it_{}_{}_{}", stem, std::process::id(), unique))
}

// --- arithmetic, strings, printing ---

#[test]
fn test_arithmetic_and_string_concatenation() {
    let lines = lines_of(
        "&insert x = 2; &insert y = 3; system.output(x + y); system.output(\"sum=\" + (x+y));",
    );
    assert_eq!(lines, vec!["5", "sum=5"]);
}

#[test]
fn test_integer_results_print_without_decimal_point() {
    let lines = lines_of(
        "system.output(0); system.output(-7); system.output(12345); system.output(10 / 4 * 2);",
    );
    assert_eq!(lines, vec!["0", "-7", "12345", "5"]);
}

#[test]
fn test_fractional_results_use_general_format() {
    let lines = lines_of("system.output(2.5); system.output(1 / 3);");
    assert_eq!(lines, vec!["2.5", "0.333333"]);
}

#[test]
fn test_division_by_zero_follows_ieee() {
    let lines = lines_of("system.output(1 / 0); system.output(-1 / 0);");
    assert_eq!(lines, vec!["inf", "-inf"]);
}

#[test]
fn test_modulo_keeps_dividend_sign() {
    let lines = lines_of("system.output(7 % 3); system.output(-7 % 3); system.output(7.5 % 2);");
    assert_eq!(lines, vec!["1", "-1", "1.5"]);
}

#[test]
fn test_concatenation_converts_every_operand_kind() {
    let lines = lines_of("system.output(\"v=\" + true + null + 4 + 0.5);");
    assert_eq!(lines, vec!["v=truenull40.5"]);
}

#[test]
fn test_print_joins_arguments_with_spaces() {
    let lines = lines_of("system.print(1, \"two\", true);");
    assert_eq!(lines, vec!["1 two true"]);
}

#[test]
fn test_warning_prefix() {
    let lines = lines_of("system.warning(\"low memory\");");
    assert_eq!(lines, vec!["Warning: low memory"]);
}

#[test]
fn test_equality_and_relational_rules() {
    let lines = lines_of(
        "system.output(1 == 1); system.output(\"a\" == \"a\"); system.output(1 == \"1\"); \
         system.output(1 != \"1\"); system.output(null == null); system.output(2 <= 2);",
    );
    assert_eq!(lines, vec!["true", "true", "false", "true", "false", "true"]);
}

#[test]
fn test_logical_operators_evaluate_both_sides() {
    // Both operands run, left to right, before the truth combination.
    let lines = lines_of(
        "function left(void) { system.output(\"L\"); return 0; } \
         function right(void) { system.output(\"R\"); return 1; } \
         system.output(left() && right());",
    );
    assert_eq!(lines, vec!["L", "R", "false"]);
}

#[test]
fn test_unary_operators() {
    let lines = lines_of("system.output(!0); system.output(!\"\"); system.output(-(3 + 4));");
    assert_eq!(lines, vec!["true", "true", "-7"]);
}

// --- declarations, assignment, scoping ---

#[test]
fn test_const_violation_keeps_the_original_value() {
    let (interp, _) = run_program("const x = 5; x = 9;");
    assert_eq!(number_binding(&interp, "x"), 5.0);
}

#[test]
fn test_redeclaration_keeps_the_first_binding() {
    let (interp, _) = run_program("&insert x = 1; &insert x = 2;");
    assert_eq!(number_binding(&interp, "x"), 1.0);
}

#[test]
fn test_plain_assignment_requires_declaration() {
    let (interp, lines) = run_program("ghost = 5; system.output(\"after\");");
    assert!(interp.lookup("ghost").is_none());
    assert_eq!(lines, "after\n");
}

#[test]
fn test_compound_assignment_updates_in_place() {
    let (interp, _) = run_program("&insert x = 10; x += 5; x -= 3; x *= 4; x /= 2; x %= 7;");
    assert_eq!(number_binding(&interp, "x"), 24.0 % 7.0);
}

#[test]
fn test_word_compound_assignment_desugars() {
    let (interp, _) =
        run_program("&insert x = 8; add x = 2; sub x = 1; mul x = 3; div x = 9; mod x = 2;");
    assert_eq!(number_binding(&interp, "x"), ((8.0 + 2.0 - 1.0) * 3.0 / 9.0) % 2.0);
}

#[test]
fn test_increment_and_decrement() {
    let (interp, _) = run_program("&insert n = 5; n++; n++; n--;");
    assert_eq!(number_binding(&interp, "n"), 6.0);
}

#[test]
fn test_compound_concatenation_on_strings() {
    let (interp, _) = run_program("&insert s = \"ab\"; s += \"cd\";");
    assert!(matches!(interp.lookup("s"), Some(Value::Str(s)) if s == "abcd"));
}

#[test]
fn test_type_annotations_are_enforced_at_declaration() {
    let (interp, _) = run_program("&insert good : number = 1; &insert bad : string = 2;");
    assert_eq!(number_binding(&interp, "good"), 1.0);
    assert!(interp.lookup("bad").is_none());
}

#[test]
fn test_assignment_checks_the_recorded_type() {
    let (interp, _) = run_program("&insert x = 1; x = \"nope\";");
    assert_eq!(number_binding(&interp, "x"), 1.0);
}

#[test]
fn test_annotate_changes_the_expected_type() {
    let (interp, lines) = run_program(
        "&insert x = 1; system.annotate(\"x\", \"string\"); x = \"now a string\"; \
         system.output(x);",
    );
    assert!(matches!(interp.lookup("x"), Some(Value::Str(s)) if s == "now a string"));
    assert_eq!(lines, "now a string\n");
}

#[test]
fn test_blocks_share_the_enclosing_frame() {
    // Only calls and namespace bodies open frames; an if arm does not.
    let (interp, _) = run_program("if (true) { &insert inner = 42; } ");
    assert_eq!(number_binding(&interp, "inner"), 42.0);
}

// --- control flow ---

#[test]
fn test_if_else_branches() {
    let lines = lines_of(
        "if (1 < 2) { system.output(\"then\"); } else { system.output(\"else\"); } \
         if (0) => { system.output(\"no\"); } else => { system.output(\"yes\"); }",
    );
    assert_eq!(lines, vec!["then", "yes"]);
}

#[test]
fn test_while_loop_with_continue() {
    let lines = lines_of(
        "&insert i = 0; while (i < 5) { i++; if (i % 2 == 0) { continue; } system.output(i); }",
    );
    assert_eq!(lines, vec!["1", "3", "5"]);
}

#[test]
fn test_c_style_for_loop() {
    let lines = lines_of("for (&insert i = 0; i < 3; i++) { system.output(i); }");
    assert_eq!(lines, vec!["0", "1", "2"]);
}

#[test]
fn test_for_in_over_array_with_break() {
    let lines = lines_of("for (x in [1,2,3,4]) { if (x == 3) break; system.output(x); }");
    assert_eq!(lines, vec!["1", "2"]);
}

#[test]
fn test_for_in_iteration_count_matches_len() {
    let (interp, _) = run_program(
        "&insert a = [1, 2, 3, 4, 5]; &insert acc = 0; for (x in a) { acc += 1; } \
         &insert expected = system.len(a);",
    );
    assert_eq!(number_binding(&interp, "acc"), number_binding(&interp, "expected"));
}

#[test]
fn test_for_in_over_map_binds_key_value_pairs() {
    let lines = lines_of(
        "&insert m = {\"a\": 1, \"b\": 2}; \
         for (pair in m) { system.output(pair[\"key\"] + \"=\" + pair[\"value\"]); }",
    );
    assert_eq!(lines, vec!["a=1", "b=2"]);
}

#[test]
fn test_for_in_over_non_collection_reports_and_continues() {
    let lines = lines_of("for (x in 42) { system.output(\"never\"); } system.output(\"after\");");
    assert_eq!(lines, vec!["after"]);
}

#[test]
fn test_nested_loops_break_only_the_innermost() {
    let lines = lines_of(
        "for (i in [1, 2]) { for (j in [1, 2, 3]) { if (j == 2) { break; } } system.output(i); }",
    );
    assert_eq!(lines, vec!["1", "2"]);
}

#[test]
fn test_match_selects_first_equal_case() {
    let lines = lines_of(
        "&insert k = 7; match (k) { case 1: system.output(\"one\"); \
         case 7: system.output(\"seven\"); default: system.output(\"other\"); }",
    );
    assert_eq!(lines, vec!["seven"]);
}

#[test]
fn test_match_falls_back_to_default() {
    let lines = lines_of(
        "match (\"x\") { case \"a\": system.output(\"a\"); default: system.output(\"dflt\"); }",
    );
    assert_eq!(lines, vec!["dflt"]);
}

#[test]
fn test_match_without_any_match_is_null() {
    let lines = lines_of("match (9) { case 1: system.output(\"one\"); } system.output(\"after\");");
    assert_eq!(lines, vec!["after"]);
}

#[test]
fn test_match_cases_use_the_equality_rule() {
    // A string scrutinee never equals a number pattern.
    let lines = lines_of(
        "match (\"1\") { case 1: system.output(\"num\"); default: system.output(\"none\"); }",
    );
    assert_eq!(lines, vec!["none"]);
}

// --- functions and closures ---

#[test]
fn test_function_with_default_and_closure() {
    let lines = lines_of(
        "function make(k) { function add(x, y = k) { return x + y; } return add; } \
         &insert f = make(10); system.output(f(1)); system.output(f(1, 2));",
    );
    assert_eq!(lines, vec!["11", "3"]);
}

#[test]
fn test_static_scoping_uses_the_definition_site() {
    let lines = lines_of(
        "&insert x = 1; \
         function outer(void) { &insert x = 10; function inner(void) { return x; } return inner; } \
         &insert f = outer(); system.output(f());",
    );
    assert_eq!(lines, vec!["10"]);
}

#[test]
fn test_missing_arguments_bind_null_and_extra_are_ignored() {
    let lines = lines_of(
        "function show(a, b) { system.output(a, b); } show(1); show(1, 2, 3);",
    );
    assert_eq!(lines, vec!["1 null", "1 2"]);
}

#[test]
fn test_defaults_evaluate_in_the_callee_frame() {
    // A later default may reference an earlier parameter.
    let lines = lines_of("function f(a, b = a * 2) { return b; } system.output(f(3));");
    assert_eq!(lines, vec!["6"]);
}

#[test]
fn test_recursion() {
    let lines = lines_of(
        "function fact(n) { if (n <= 1) { return 1; } return n * fact(n - 1); } \
         system.output(fact(6));",
    );
    assert_eq!(lines, vec!["720"]);
}

#[test]
fn test_function_without_return_yields_null() {
    let lines = lines_of("function f(void) { 5; } system.output(f());");
    assert_eq!(lines, vec!["null"]);
}

#[test]
fn test_return_unwinds_through_loops_and_blocks() {
    let lines = lines_of(
        "function find(void) { for (x in [1,2,3]) { if (x == 2) { return x; } } return 0; } \
         system.output(find());",
    );
    assert_eq!(lines, vec!["2"]);
}

#[test]
fn test_lambda_values_and_calls() {
    let lines = lines_of(
        "&insert twice = (x) => { return x * 2; }; system.output(twice(21)); \
         &insert constant = () => { return 7; }; system.output(constant());",
    );
    assert_eq!(lines, vec!["42", "7"]);
}

#[test]
fn test_calling_a_non_function_reports_and_degrades() {
    let lines = lines_of("&insert x = 3; x(); system.output(\"after\");");
    assert_eq!(lines, vec!["after"]);
}

#[test]
fn test_functions_print_as_function() {
    let lines = lines_of("function f(void) { } system.output(f);");
    assert_eq!(lines, vec!["<function>"]);
}

// --- collections ---

#[test]
fn test_array_literals_and_indexing() {
    let lines = lines_of(
        "&insert a = [1, \"two\", [3, 4]]; system.output(a[0]); system.output(a[1]); \
         system.output(a[2][1]); system.output(a[9]); system.output(a);",
    );
    assert_eq!(lines, vec!["1", "two", "4", "null", "[1, two, [3, 4]]"]);
}

#[test]
fn test_len_counts_bytes_and_elements() {
    let lines = lines_of(
        "system.output(system.len(\"hello\")); system.output(system.len(\"héllo\")); \
         system.output(system.len([1,2,3])); system.output(system.len(42));",
    );
    // é is two bytes in UTF-8.
    assert_eq!(lines, vec!["5", "6", "3", "0"]);
}

#[test]
fn test_map_literals_index_by_string_form() {
    let lines = lines_of(
        "&insert m = {\"a\": 1, 2: \"two\"}; system.output(m[\"a\"]); system.output(m[2]); \
         system.output(m[\"missing\"]);",
    );
    assert_eq!(lines, vec!["1", "two", "null"]);
}

#[test]
fn test_type_names() {
    let lines = lines_of(
        "system.output(system.type(1)); system.output(system.type(\"s\")); \
         system.output(system.type(true)); system.output(system.type(null)); \
         system.output(system.type([1])); system.output(system.type({\"k\": 1}));",
    );
    assert_eq!(lines, vec!["number", "string", "boolean", "null", "array", "map"]);
}

// --- namespaces, enums, classes ---

#[test]
fn test_namespace_qualification_and_enum() {
    let lines = lines_of(
        "namespace M { &insert b = 10; function show(void) { system.output(b); } } \
         enum C { R = 1, G, B = 4 } \
         M.show(); system.output(M.b); system.output(C.R); system.output(C.G); system.output(C.B);",
    );
    assert_eq!(lines, vec!["10", "10", "1", "2", "4"]);
}

#[test]
fn test_namespace_preserves_const_flags() {
    let (interp, _) = run_program("namespace N { const c = 5; } N.c = 9;");
    assert_eq!(number_binding(&interp, "N.c"), 5.0);
}

#[test]
fn test_enum_members_are_const() {
    let (interp, _) = run_program("enum E { A, B } E.A = 99;");
    assert_eq!(number_binding(&interp, "E.A"), 0.0);
    assert_eq!(number_binding(&interp, "E.B"), 1.0);
}

#[test]
fn test_class_body_runs_in_the_current_frame() {
    let lines = lines_of(
        "class Point : Base { &insert dims = 2; } struct Pair { &insert size = 2; } \
         system.output(dims + size);",
    );
    assert_eq!(lines, vec!["4"]);
}

// --- structured errors ---

#[test]
fn test_structured_error_with_finally() {
    let lines = lines_of(
        "try { system.throw(\"Oops\",\"bad\",1); system.output(\"unreached\"); } \
         catch(e) { system.output(e); } finally { system.output(\"done\"); }",
    );
    assert_eq!(lines, vec!["<Oops: bad>", "done"]);
}

#[test]
fn test_error_display_form() {
    let lines = lines_of("try { system.throw(\"E\",\"m\",7) } catch(e) { system.output(e); }");
    assert_eq!(lines, vec!["<E: m>"]);
}

#[test]
fn test_throw_unwinds_through_call_frames() {
    let lines = lines_of(
        "function deep(void) { system.throw(\"Deep\", \"from below\", 2); } \
         function mid(void) { deep(); system.output(\"unreached\"); } \
         try { mid(); } catch (e) { system.output(e); }",
    );
    assert_eq!(lines, vec!["<Deep: from below>"]);
}

#[test]
fn test_finally_runs_while_unwinding() {
    let lines = lines_of(
        "try { try { system.throw(\"E\", \"m\", 1); } finally { system.output(\"inner\"); } } \
         catch (e) { system.output(e); }",
    );
    assert_eq!(lines, vec!["inner", "<E: m>"]);
}

#[test]
fn test_catch_without_binding() {
    let lines = lines_of("try { system.throw(\"E\") } catch { system.output(\"handled\"); }");
    assert_eq!(lines, vec!["handled"]);
}

#[test]
fn test_uncaught_error_stops_the_program_evaluation() {
    let lines = lines_of("system.output(\"before\"); system.throw(\"E\", \"m\"); system.output(\"after\");");
    assert_eq!(lines, vec!["before"]);
}

#[test]
fn test_try_value_is_the_last_body_value() {
    let lines = lines_of(
        "&insert v = 0; \
         function probe(void) { return 5; } \
         match (1) { case 1: { try { v = probe(); } catch (e) { v = -1; } } } \
         system.output(v);",
    );
    assert_eq!(lines, vec!["5"]);
}

#[test]
fn test_throw_defaults() {
    let lines = lines_of("try { system.throw(\"Bare\") } catch (e) { system.output(e); }");
    assert_eq!(lines, vec!["<Bare: >"]);
}

// --- calculator memory, history, conversion ---

#[test]
fn test_store_recall_memclear() {
    let lines = lines_of(
        "system.store(\"k\", 41); system.output(system.recall(\"k\")); \
         system.memclear(); system.output(system.recall(\"k\"));",
    );
    assert_eq!(lines, vec!["41", "null"]);
}

#[test]
fn test_store_copies_the_value() {
    let lines = lines_of(
        "&insert x = 1; system.store(\"snap\", x); x = 2; system.output(system.recall(\"snap\"));",
    );
    assert_eq!(lines, vec!["1"]);
}

#[test]
fn test_history_add_get_clear() {
    let lines = lines_of(
        "system.history.add(1); system.history.add(\"two\"); \
         system.output(system.len(system.history.get())); \
         system.output(system.history.get()[1]); \
         system.history.clear(); system.output(system.len(system.history.get()));",
    );
    assert_eq!(lines, vec!["2", "two", "0"]);
}

#[test]
fn test_convert_in_script() {
    let lines = lines_of(
        "system.output(system.convert(1500, \"m\", \"km\")); \
         system.output(system.convert(100, \"C\", \"F\")); \
         system.output(system.convert(1, \"m\", \"lb\"));",
    );
    assert_eq!(lines, vec!["1.5", "212", "null"]);
}

#[test]
fn test_math_builtins_in_script() {
    let lines = lines_of(
        "system.output(system.sqrt(16)); system.output(system.pow(2, 10)); \
         system.output(system.log(100)); system.output(system.sin(\"x\"));",
    );
    assert_eq!(lines, vec!["4", "1024", "2", "0"]);
}

// --- file builtins ---

#[test]
fn test_file_write_and_read() {
    let path = temp_file("file_roundtrip");
    let path_str = path.to_string_lossy().to_string();
    let source = format!(
        "file.write(\"{p}\", \"payload\"); system.output(file.read(\"{p}\")); \
         file.write(\"{p}\", 2.5); system.output(file.read(\"{p}\"));",
        p = path_str
    );
    let lines: Vec<String> = run_program(&source).1.lines().map(str::to_string).collect();
    assert_eq!(lines, vec!["payload", "2.5"]);
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_file_read_failure_is_null() {
    let path = temp_file("file_missing");
    let source = format!("system.output(file.read(\"{}\"));", path.to_string_lossy());
    let lines: Vec<String> = run_program(&source).1.lines().map(str::to_string).collect();
    assert_eq!(lines, vec!["null"]);
}

// --- includes ---

#[test]
fn test_include_runs_once_per_parser() {
    let path = temp_file("included.sharp");
    std::fs::write(&path, "&insert included_marker = 1; system.output(\"included\");")
        .expect("failed to write include fixture");
    let p = path.to_string_lossy();
    let source = format!(
        "#include \"{p}\"\n#include \"{p}\"\nsystem.output(\"after\");",
        p = p
    );
    let (interp, output) = run_program(&source);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, vec!["included", "after"]);
    assert_eq!(number_binding(&interp, "included_marker"), 1.0);
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_involve_behaves_like_include() {
    let path = temp_file("involved.sharp");
    std::fs::write(&path, "system.output(\"involved\");").expect("failed to write fixture");
    let source = format!("#involve \"{}\"", path.to_string_lossy());
    let lines: Vec<String> = run_program(&source).1.lines().map(str::to_string).collect();
    assert_eq!(lines, vec!["involved"]);
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_missing_include_degrades_to_nothing() {
    let lines = lines_of("#include \"definitely_not_here.sharp\"\nsystem.output(\"after\");");
    assert_eq!(lines, vec!["after"]);
}

// --- diagnostics degrade to null, never halt ---

#[test]
fn test_undefined_variable_evaluates_to_null() {
    let lines = lines_of("system.output(missing); system.output(\"after\");");
    assert_eq!(lines, vec!["null", "after"]);
}

#[test]
fn test_undefined_function_evaluates_to_null() {
    let lines = lines_of("&insert r = nothere(1, 2); system.output(system.type(r));");
    assert_eq!(lines, vec!["null"]);
}

#[test]
fn test_lexing_errors_are_skipped() {
    let lines = lines_of("@ $ system.output(\"still here\");");
    assert_eq!(lines, vec!["still here"]);
}

#[test]
fn test_parse_errors_recover_locally() {
    let lines = lines_of("if (1 { system.output(\"broken\"); } system.output(\"next\");");
    // The malformed if is reported and skipped; parsing continues.
    assert_eq!(lines.last().map(String::as_str), Some("next"));
}

// --- reserved words ---

#[test]
fn test_new_is_a_reserved_no_op() {
    let lines = lines_of("new\nsystem.output(\"after\");");
    assert_eq!(lines, vec!["after"]);
}

#[test]
fn test_help_prints_documentation_or_fallback() {
    // Depending on the working directory the guide may be missing; either
    // way something is printed and evaluation continues.
    let (_, output) = run_program("help(\"user\"); system.output(\"after\");");
    assert!(output.ends_with("after\n"));
    assert!(output.len() > "after\n".len());
}

// --- interpreter state across runs ---

#[test]
fn test_bindings_persist_across_runs_like_a_repl() {
    let mut interp = Interpreter::new();
    let sink = Arc::new(Mutex::new(Vec::new()));
    interp.set_output(sink.clone());

    for source in ["&insert x = 2", "x = x + 3", "system.output(x)"] {
        let mut parser = Parser::new(Lexer::new(source));
        let program = parser.parse();
        interp.run(&program);
    }

    let output = String::from_utf8_lossy(&sink.lock().unwrap()).to_string();
    assert_eq!(output, "5\n");
}

#[test]
fn test_evaluation_continues_after_an_uncaught_error() {
    let mut interp = Interpreter::new();
    let sink = Arc::new(Mutex::new(Vec::new()));
    interp.set_output(sink.clone());

    for source in ["system.throw(\"E\", \"m\")", "system.output(\"recovered\")"] {
        let mut parser = Parser::new(Lexer::new(source));
        let program = parser.parse();
        interp.run(&program);
    }

    let output = String::from_utf8_lossy(&sink.lock().unwrap()).to_string();
    assert_eq!(output, "recovered\n");
}

#[test]
fn test_synthesized_main_call_shape() {
    // What the CLI does after running a script file.
    let mut interp = Interpreter::new();
    let sink = Arc::new(Mutex::new(Vec::new()));
    interp.set_output(sink.clone());

    let mut parser = Parser::new(Lexer::new(
        "function main(void) { system.output(\"from main\"); }",
    ));
    let program = parser.parse();
    interp.run(&program);

    use sharpscript::ast::{Expr, Stmt};
    let call = Stmt::Expr(Expr::Call { name: "main".to_string(), args: Vec::new() });
    interp.run(&call);

    let output = String::from_utf8_lossy(&sink.lock().unwrap()).to_string();
    assert_eq!(output, "from main\n");
}
