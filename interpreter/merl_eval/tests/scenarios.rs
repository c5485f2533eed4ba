//! Larger end-to-end programs exercising the interpreter as a whole.

use merl_eval::{parse_eval, root_env, Pid, Value};
use pretty_assertions::assert_eq;

#[test]
fn fizzbuzz() {
    let env = root_env();
    let pid = Pid::new();

    parse_eval(
        "fun fizzbuzz (X) ->
             case { X rem 3, X rem 5 } of
                 {0, 0} -> fizz_buzz;
                 {0, _} -> fizz;
                 {_, 0} -> buzz;
                 _ -> X
             end
         end.",
        &env,
        &pid,
    )
    .unwrap();

    let cases: Vec<(i64, Value)> = vec![
        (1, Value::int(1)),
        (2, Value::int(2)),
        (3, Value::atom("fizz")),
        (4, Value::int(4)),
        (5, Value::atom("buzz")),
        (6, Value::atom("fizz")),
        (7, Value::int(7)),
        (8, Value::int(8)),
        (9, Value::atom("fizz")),
        (10, Value::atom("buzz")),
        (15, Value::atom("fizz_buzz")),
    ];
    for (n, expected) in cases {
        assert_eq!(
            parse_eval(&format!("fizzbuzz({n})."), &env, &pid),
            Ok(expected),
            "fizzbuzz({n})"
        );
    }
}

#[test]
fn map_with_a_function_argument() {
    let env = root_env();
    let pid = Pid::new();

    parse_eval(
        "fun map
             (Lst, Fun) ->
                 map(Lst, Fun, []);
             ([], _, Acc) ->
                 rev(Acc);
             (Lst, Fun, Acc) ->
                 X = last(Lst),
                 map(rest(Lst), Fun, Acc ++ [Fun(X)])
         end.",
        &env,
        &pid,
    )
    .unwrap();

    assert_eq!(
        parse_eval("map([1,2,3], fun(X) -> X+10 end).", &env, &pid),
        Ok(Value::list(vec![
            Value::int(11),
            Value::int(12),
            Value::int(13)
        ]))
    );
}

#[test]
fn included_demo_files_run() {
    let env = root_env();
    let pid = Pid::new();
    // the demo prints 1..15; its value is the last `print`, which
    // returns what it printed
    assert_eq!(
        parse_eval(r#"include("../../demos/fizzbuzz.merl")."#, &env, &pid),
        Ok(Value::string("fizz_buzz\n"))
    );
}
