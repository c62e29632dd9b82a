//! Benchmarks for wrapper equality, hashing and detaching.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ontograph_graph::turtle::parse_turtle;
use ontograph_objects::{
    objects_equal, ModelConfig, ObjectKind, OntModel, OntObject, StandaloneFactory,
};

fn union_document(width: usize, copies: usize) -> String {
    let mut doc = String::from("@prefix owl: <http://www.w3.org/2002/07/owl#> .\n");
    doc.push_str("@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n");
    for n in 0..copies {
        let members: Vec<String> = (0..width)
            .map(|i| format!("<http://example.org/C{}>", (i + n) % width))
            .collect();
        doc.push_str(&format!(
            "<http://example.org/S{n}> rdfs:subClassOf [ owl:unionOf ( {} ) ] .\n",
            members.join(" ")
        ));
    }
    doc
}

fn model(width: usize, copies: usize) -> OntModel {
    let graph = parse_turtle(&union_document(width, copies)).unwrap();
    OntModel::new(graph, ModelConfig::default())
}

fn subclass_axioms(model: &OntModel) -> Vec<OntObject> {
    model.axioms_of(ObjectKind::SubClassOf).unwrap()
}

fn bench_axiom_discovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("axiom_discovery");
    for copies in [8, 64, 256].iter() {
        group.throughput(Throughput::Elements(*copies as u64));
        group.bench_with_input(BenchmarkId::from_parameter(copies), copies, |b, &copies| {
            b.iter(|| {
                let model = model(8, copies);
                black_box(subclass_axioms(&model));
            });
        });
    }
    group.finish();
}

fn bench_equality(c: &mut Criterion) {
    let mut group = c.benchmark_group("equality");
    for width in [2, 16, 64].iter() {
        let model = model(*width, 2);
        let graph = model.snapshot();
        let triples: Vec<_> = graph.iter().filter(|t| t.subject.is_uri()).cloned().collect();
        let a = model.statement(ObjectKind::SubClassOf, &triples[0]).unwrap();
        let b = model.statement(ObjectKind::SubClassOf, &triples[1]).unwrap();
        a.content().unwrap();
        b.content().unwrap();

        group.bench_with_input(BenchmarkId::new("warm", width), width, |bench, _| {
            bench.iter(|| black_box(objects_equal(black_box(&a), black_box(&b)).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("cold", width), width, |bench, _| {
            bench.iter(|| {
                let fresh = model.statement(ObjectKind::SubClassOf, &triples[0]).unwrap();
                black_box(objects_equal(&fresh, &b).unwrap())
            });
        });
    }
    group.finish();
}

fn bench_erase(c: &mut Criterion) {
    let mut group = c.benchmark_group("erase");
    for width in [2, 16, 64].iter() {
        let model = model(*width, 1);
        let axioms = subclass_axioms(&model);
        group.bench_with_input(BenchmarkId::from_parameter(width), width, |b, _| {
            b.iter(|| {
                for axiom in &axioms {
                    black_box(axiom.erase(&StandaloneFactory).unwrap());
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_axiom_discovery, bench_equality, bench_erase);
criterion_main!(benches);
