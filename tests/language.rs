use std::fs::{self};

use sprig::{
    error::Error,
    interpreter::{evaluator::core::Settings, value::core::Value},
    run_source, run_with_settings,
};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "sprig"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        let module = path.file_stem().map_or_else(String::new, |s| s.to_string_lossy().into_owned());
        match run_source(&source, &module, Vec::new()) {
            Ok(output) => assert_eq!(String::from_utf8_lossy(&output), expected, "output of {path:?}"),
            Err(e) => panic!("Script {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn run(src: &str) -> Result<String, Error> {
    run_source(src, "test", Vec::new()).map(|output| String::from_utf8_lossy(&output).into_owned())
}

fn assert_output(src: &str, expected: &str) {
    match run(src) {
        Ok(output) => assert_eq!(output, expected),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: &str) {
    match run(src) {
        Ok(output) => panic!("Script succeeded with output {output:?} but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), expected),
    }
}

#[test]
fn main_is_the_entry_point() {
    assert_output("fun main() {\n println \"hi\"\n}", "hi\n");
    assert_output("fun helper() {\n println 1\n}\nfun main() {\n}", "");
    assert_failure("fun helper() {\n}", "test:1: Function 'main' is not defined");
}

#[test]
fn globals_run_before_main() {
    assert_output("var g = 2\nconst h = g * 3\nfun main() {\n g += h\n println g\n}", "8\n");
}

#[test]
fn main_may_return_a_value() {
    let program = sprig::compile("fun main() {\n return 6 * 7\n println \"unreachable\"\n}",
                                 "test").unwrap();
    let mut interpreter =
        sprig::interpreter::evaluator::core::Interpreter::new(Vec::new(), Settings::default());

    assert_eq!(interpreter.invoke_main(&program).unwrap(), Value::Integer(42));
    assert!(interpreter.output().is_empty());
}

#[test]
fn switch_falls_through_until_break() {
    assert_output("fun main() {
    var x = 1
    switch (x) {
        case 1:
            println 1
        case 2:
            println 2
        default:
            println \"default\"
    }
}",
                  "1\n2\ndefault\n");
}

#[test]
fn switch_without_match_or_default_does_nothing() {
    assert_output("fun main() {
    switch (\"b\") {
        case \"a\":
            println \"a\"
    }
    println \"after\"
}",
                  "after\n");
}

#[test]
fn switch_default_may_come_first() {
    assert_output("fun main() {
    switch (2) {
        default:
            println \"default\"
        case 1:
            println 1
            break
        case 2:
            println 2
    }
}",
                  "2\n");
}

#[test]
fn continue_and_return_leave_a_switch() {
    assert_output("fun first_even(limit) {
    for (var i = 1; i < limit; i++) {
        switch (i % 2) {
            case 1:
                continue
            default:
                return i
        }
    }
    return -1
}

fun main() {
    println first_even(10)
    println first_even(2)
}",
                  "2\n-1\n");
}

#[test]
fn loops_with_break_and_continue() {
    assert_output("fun main() {
    var i = 0
    while (i < 10) {
        i++
        if (i == 3) {
            continue
        }
        if (i > 5) {
            break
        }
        println i
    }
}",
                  "1\n2\n4\n5\n");
}

#[test]
fn for_initializer_lives_for_the_whole_loop() {
    assert_output("fun main() {
    var sum = 0
    for (var i = 0; i < 4; i++) {
        var square = i * i
        sum += square
    }
    println sum
    for (var i = 0; i < 1; i++) {
        println i
    }
}",
                  "14\n0\n");
}

#[test]
fn do_while_runs_at_least_once() {
    assert_output("fun main() {\n var n = 10\n do {\n println n\n } while (n < 5)\n}", "10\n");
}

#[test]
fn functions_see_globals_but_not_callers() {
    assert_output("var g = 1
fun read() {
    return g
}
fun main() {
    var local = 5
    println read()
}",
                  "1\n");
    assert_failure("fun peek() {
    return local
}
fun main() {
    var local = 5
    println peek()
}",
                   "test:2: Variable 'local' is not defined");
}

#[test]
fn recursion() {
    assert_output("fun fact(n) {
    if (n <= 1) {
        return 1
    }
    return n * fact(n - 1)
}
fun main() {
    println fact(20)
}",
                  "2432902008176640000\n");
}

#[test]
fn functions_without_return_yield_null() {
    assert_output("fun nothing() {\n}\nfun main() {\n println nothing()\n}", "null\n");
}

#[test]
fn short_circuit_skips_calls() {
    assert_output("fun loud() {
    println \"called\"
    return true
}
fun main() {
    println false && loud()
    println true || loud()
    println true && loud()
}",
                  "false\ntrue\ncalled\ntrue\n");
}

#[test]
fn short_circuit_skips_compound_calls() {
    assert_output("fun loud() {
    println \"called\"
    return 1
}
fun main() {
    var x = 0
    println false && loud() > 0
    println true || (x = 5) > 0
    println x
    println false && 1 / 0 == 0
    println true && loud() > 0
}",
                  "false\ntrue\n0\nfalse\ncalled\ntrue\n");
}

#[test]
fn arguments_are_evaluated_in_the_caller() {
    assert_output("fun pair(a, b) {
    return a + \":\" + b
}
fun main() {
    var i = 0
    println pair(i++, i++)
    println i
}",
                  "0:1\n2\n");
}

#[test]
fn division_by_zero() {
    assert_failure("fun main() {\n println 1 / 0\n}", "test:2: / by zero");
    assert_failure("fun main() {\n var x = 0\n\n println 5 % x\n}", "test:4: / by zero");
}

#[test]
fn constants_are_immutable() {
    assert_failure("const c = 1\nfun main() {\n c = 2\n}", "test:3: Constant 'c' can not be changed");
    assert_failure("fun main() {\n const c = 1\n c++\n}", "test:3: Constant 'c' can not be changed");
    assert_failure("fun main() {\n const c\n}", "test:2: Constant 'c' should be initialized");
}

#[test]
fn names_are_not_shadowed() {
    assert_failure("fun main() {
    var a = 1
    {
        var a = 2
    }
}",
                   "test:4: Variable 'a' with same name is already defined");
    assert_failure("var n = 0\nfun f(n) {\n}\nfun main() {\n f(1)\n}",
                   "test:2: Variable 'n' with same name is already defined");
}

#[test]
fn conditions_must_be_boolean() {
    assert_failure("fun main() {\n if (1) {\n }\n}",
                   "test:2: if condition should be boolean but was 'int'");
    assert_failure("fun main() {\n while (\"yes\") {\n }\n}",
                   "test:2: while condition should be boolean but was 'string'");
}

#[test]
fn bad_calls() {
    assert_failure("fun main() {\n missing()\n}", "test:2: Function 'missing' is not defined");
    assert_failure("fun f(a, b) {\n}\nfun main() {\n f(1)\n}",
                   "test:4: Function 'f' expects 2 arguments but got 1");
}

#[test]
fn jumps_outside_loops() {
    assert_failure("fun main() {\n break\n}", "test:2: 'break' operation is not expected here");
    assert_failure("fun f() {\n continue\n}\nfun main() {\n f()\n}",
                   "test:2: 'continue' operation is not expected here");
    assert_failure("fun f() {\n var a = 1\n break\n}\nfun main() {\n f()\n println \"after\"\n}",
                   "test:3: 'break' operation is not expected here");
}

#[test]
fn call_depth_is_limited() {
    let source = "fun down(n) {\n return down(n + 1)\n}\nfun main() {\n down(0)\n}";
    let error = run_with_settings(source, "deep", Vec::new(), Settings { max_call_depth: 50 }).unwrap_err();
    assert_eq!(error.to_string(), "deep:2: Maximum call depth of 50 exceeded");
}

#[test]
fn syntax_errors() {
    assert_failure("println 1", "test:1: 'println' is not expected at top level");
    assert_failure("fun main() {\n}\nfun main() {\n}", "test:3: Function 'main' is already defined");
    assert_failure("fun f(a, a) {\n}", "test:1: Function 'f' has duplicate parameter 'a'");
    assert_failure("fun main() {\n var while = 1\n}", "test:2: Invalid identifier: 'while'");
    assert_failure("fun main() {\n println (1 + 2\n}", "test:2: Missing )");
    assert_failure("fun main() {\n if 1 {\n }\n}", "test:2: Expected '(' but found '1'");
    assert_failure("fun main() {\n println 1", "test:2: Expected '}' but reached end of source");
    assert_failure("fun main() {\n switch (1) {\n default:\n default:\n }\n}",
                   "test:4: Switch can have only one default label");
    assert_failure("fun main() {\n var s = \"open\n}", "test:2: String literal is not closed");
}

#[test]
fn statements_continue_after_operators() {
    assert_output("fun main() {
    var total = 1 +
        2 +
        3
    println total; println total * 2
    println max(
        4,
        9)
}
fun max(a, b) {
    return a > b ? a : b
}",
                  "6\n12\n9\n");
}
