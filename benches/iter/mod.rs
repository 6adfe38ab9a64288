use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use ordtree::{Traversal, Tree};

use crate::random_tree;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("iter");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let (t, _) = random_tree(n_values);

    bench_into_iter(n_values, g, &t);
    bench_pre_order(n_values, g, &t);
    bench_in_order(n_values, g, &t);
    bench_post_order(n_values, g, &t);
}

fn bench_into_iter<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &Tree<u16>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "into_iter",
    };

    g.throughput(Throughput::Elements(n_values as _));
    // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || t.clone(),
            |t| {
                for v in t {
                    black_box(v);
                }
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

macro_rules! iter_bench {
    (
        $name:ident,
        $order:expr
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &Tree<u16>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                g.throughput(Throughput::Elements(n_values as _));
                // Values per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| {
                        let iter = t.iter_order($order);
                        for v in iter {
                            black_box(v);
                        }
                    })
                });
            }
        }
    };
}

iter_bench!(pre_order, Traversal::PreOrder);
iter_bench!(in_order, Traversal::InOrder);
iter_bench!(post_order, Traversal::PostOrder);
