//! Benchmarks for display-string synthesis.
//!
//! Tests synthesis performance for the shapes a trimmed runtime hits most:
//! - Identity-backed named types (pure table lookup)
//! - Decorated types (arrays, pointers)
//! - Constructed generics (slot collection plus right-to-left splicing)
//! - Deeply nested generic instantiations

extern crate trimscope;

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use trimscope::prelude::*;

/// A bench-local reflected type; only the shapes benchmarked here are wired up.
struct BenchType {
    identity: Option<TypeIdentity>,
    element: Option<TypeHandle>,
    is_array: bool,
    rank: u32,
    is_pointer: bool,
    constructed: Option<(TypeHandle, Vec<TypeHandle>)>,
    name: Option<String>,
    is_definition: bool,
    arity: usize,
}

impl BenchType {
    fn identified(identity: u64) -> TypeHandle {
        Arc::new(BenchType {
            identity: Some(TypeIdentity::new(identity)),
            element: None,
            is_array: false,
            rank: 1,
            is_pointer: false,
            constructed: None,
            name: None,
            is_definition: false,
            arity: 0,
        })
    }

    fn array(element: TypeHandle, rank: u32) -> TypeHandle {
        Arc::new(BenchType {
            identity: Some(TypeIdentity::new(999)),
            element: Some(element),
            is_array: true,
            rank,
            is_pointer: false,
            constructed: None,
            name: None,
            is_definition: false,
            arity: 0,
        })
    }

    fn pointer(element: TypeHandle) -> TypeHandle {
        Arc::new(BenchType {
            identity: None,
            element: Some(element),
            is_array: false,
            rank: 1,
            is_pointer: true,
            constructed: None,
            name: None,
            is_definition: false,
            arity: 0,
        })
    }

    fn definition(name: &str, arity: usize) -> TypeHandle {
        Arc::new(BenchType {
            identity: None,
            element: None,
            is_array: false,
            rank: 1,
            is_pointer: false,
            constructed: None,
            name: Some(name.to_string()),
            is_definition: true,
            arity,
        })
    }

    fn generic(definition: TypeHandle, arguments: Vec<TypeHandle>) -> TypeHandle {
        Arc::new(BenchType {
            identity: None,
            element: None,
            is_array: false,
            rank: 1,
            is_pointer: false,
            constructed: Some((definition, arguments)),
            name: None,
            is_definition: false,
            arity: 0,
        })
    }
}

impl ReflectedType for BenchType {
    fn identity(&self) -> Option<TypeIdentity> {
        self.identity
    }

    fn has_element_type(&self) -> bool {
        self.element.is_some()
    }

    fn is_array(&self) -> bool {
        self.is_array
    }

    fn array_rank(&self) -> u32 {
        self.rank
    }

    fn element_type(&self) -> Option<TypeHandle> {
        self.element.clone()
    }

    fn is_pointer(&self) -> bool {
        self.is_pointer
    }

    fn is_constructed_generic(&self) -> bool {
        self.constructed.is_some()
    }

    fn generic_type_definition(&self) -> Option<TypeHandle> {
        self.constructed.as_ref().map(|(d, _)| d.clone())
    }

    fn generic_type_arguments(&self) -> Vec<TypeHandle> {
        self.constructed
            .as_ref()
            .map(|(_, a)| a.clone())
            .unwrap_or_default()
    }

    fn is_generic_type_definition(&self) -> bool {
        self.is_definition
    }

    fn generic_arity(&self) -> usize {
        self.arity
    }

    fn name_if_available(&self) -> Option<String> {
        self.name.clone()
    }

    fn full_name(&self) -> trimscope::Result<String> {
        self.name
            .clone()
            .ok_or_else(|| Error::MissingMetadata("trimmed".to_string()))
    }

    fn raw_display(&self) -> String {
        self.name.clone().unwrap_or_else(|| "<bench>".to_string())
    }
}

fn bench_table() -> DiagnosticStringTable {
    let table = DiagnosticStringTable::new();
    table.insert(TypeIdentity::new(1), "System.Int32");
    table.insert(TypeIdentity::new(2), "System.Collections.Generic.KeyValuePair");
    table
}

/// Benchmark the pure table-lookup path for an identity-backed named type.
fn bench_named_with_identity(c: &mut Criterion) {
    let table = bench_table();
    let synth = NameSynthesizer::new(&table);
    let ty = BenchType::identified(1);

    c.bench_function("display_named_identity", |b| {
        b.iter(|| {
            let s = synth.display_string(black_box(&ty));
            black_box(s)
        });
    });
}

/// Benchmark a rank-3 array of a pointer type.
fn bench_decorated(c: &mut Criterion) {
    let table = bench_table();
    let synth = NameSynthesizer::new(&table);
    let ty = BenchType::array(BenchType::pointer(BenchType::identified(1)), 3);

    c.bench_function("display_array_of_pointer", |b| {
        b.iter(|| {
            let s = synth.display_string(black_box(&ty));
            black_box(s)
        });
    });
}

/// Benchmark a two-argument generic instantiation (slot collection plus splicing).
fn bench_constructed_generic(c: &mut Criterion) {
    let table = bench_table();
    let synth = NameSynthesizer::new(&table);
    let ty = BenchType::generic(
        BenchType::definition("Dictionary", 2),
        vec![BenchType::identified(1), BenchType::identified(2)],
    );

    c.bench_function("display_constructed_generic", |b| {
        b.iter(|| {
            let s = synth.display_string(black_box(&ty));
            black_box(s)
        });
    });
}

/// Benchmark a generic nested four levels deep.
fn bench_nested_generic(c: &mut Criterion) {
    let table = bench_table();
    let synth = NameSynthesizer::new(&table);

    let mut ty = BenchType::identified(1);
    for _ in 0..4 {
        ty = BenchType::generic(BenchType::definition("List", 1), vec![ty]);
    }

    c.bench_function("display_nested_generic", |b| {
        b.iter(|| {
            let s = synth.display_string(black_box(&ty));
            black_box(s)
        });
    });
}

criterion_group!(
    benches,
    bench_named_with_identity,
    bench_decorated,
    bench_constructed_generic,
    bench_nested_generic
);
criterion_main!(benches);
