//! Deep-recursion benchmarks: factorial and naive Fibonacci over a
//! pre-defined environment.

use criterion::{criterion_group, criterion_main, Criterion};
use merl_eval::{parse_eval, root_env, Env, Pid};

fn prepared(definition: &str) -> (Env, Pid) {
    let env = root_env();
    let pid = Pid::new();
    parse_eval(definition, &env, &pid).expect("benchmark definition must evaluate");
    (env, pid)
}

fn bench_fact(c: &mut Criterion) {
    let (env, pid) = prepared(
        "fun fact
            (0) -> 1;
            (N) when N > 0 -> N * fact(N-1)
        end.",
    );

    let mut group = c.benchmark_group("fact");
    for n in [10, 100, 1_000] {
        group.bench_function(format!("fact({n})"), |b| {
            let code = format!("fact({n}).");
            b.iter(|| parse_eval(&code, &env, &pid).expect("fact must evaluate"));
        });
    }
    group.finish();
}

fn bench_fibo(c: &mut Criterion) {
    let (env, pid) = prepared(
        "fun fibo
            (0) -> 0;
            (1) -> 1;
            (N) when N > 0 ->
                fibo(N-1) + fibo(N-2)
        end.",
    );

    let mut group = c.benchmark_group("fibo");
    for n in [5, 10, 15, 20] {
        group.bench_function(format!("fibo({n})"), |b| {
            let code = format!("fibo({n}).");
            b.iter(|| parse_eval(&code, &env, &pid).expect("fibo must evaluate"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fact, bench_fibo);
criterion_main!(benches);
