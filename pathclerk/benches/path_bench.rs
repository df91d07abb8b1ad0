use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathclerk::path::{self, PathRelationship};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("clean_absolute", |b| {
        b.iter(|| path::normalize(black_box("/absolute/path/to/file")));
    });

    group.bench_function("messy", |b| {
        b.iter(|| path::normalize(black_box("  ///a//b///c//d//  ")));
    });

    group.bench_function("reorient", |b| {
        b.iter(|| path::reorient(black_box("C:\\Users\\me\\Documents\\file.txt")));
    });

    group.finish();
}

fn bench_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("segments");

    for depth in [2usize, 8, 32] {
        let p: String = (0..depth).map(|i| format!("/seg{i}")).collect();
        group.bench_with_input(BenchmarkId::new("split", depth), &p, |b, p| {
            b.iter(|| path::split(black_box(p)));
        });
        group.bench_with_input(BenchmarkId::new("split_join", depth), &p, |b, p| {
            b.iter(|| path::join(path::split(black_box(p))));
        });
    }

    group.bench_function("concat", |b| {
        b.iter(|| path::concat(black_box(["/usr", "local/", "/bin"])));
    });

    group.finish();
}

fn bench_accessors(c: &mut Criterion) {
    let mut group = c.benchmark_group("accessors");
    let p = "/home/user/projects/pathclerk/src/path/mod.rs";

    group.bench_function("trail", |b| b.iter(|| path::trail(black_box(p))));
    group.bench_function("basename", |b| b.iter(|| path::basename(black_box(p))));
    group.bench_function("deconstruct", |b| b.iter(|| path::deconstruct(black_box(p))));
    group.bench_function("index", |b| b.iter(|| path::index(black_box("src"), black_box(p))));
    group.bench_function("bisect", |b| b.iter(|| path::bisect(black_box(p), -2)));

    group.finish();
}

fn bench_mutators(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutators");
    let p = "/srv/app/releases/41/bin/server.tar.gz";

    group.bench_function("replace", |b| {
        b.iter(|| path::replace(black_box("releases/41"), black_box("releases/42"), black_box(p)));
    });
    group.bench_function("change_ext", |b| b.iter(|| path::change_ext(black_box(p), "zip")));
    group.bench_function("increment_base", |b| {
        b.iter(|| path::increment_base(black_box("/tmp/shot 999.png")));
    });
    group.bench_function("hide", |b| b.iter(|| path::hide(black_box(p))));

    group.finish();
}

fn bench_relationship(c: &mut Criterion) {
    let mut group = c.benchmark_group("relationship");

    let ancestor = "/users/test/projects/pathclerk";
    let descendant = "/users/test/projects/pathclerk/src/path";
    let unrelated1 = "/users/test/projects/pathclerk/src";
    let unrelated2 = "/users/test/projects/other";

    group.bench_function("ancestor", |b| {
        b.iter(|| PathRelationship::between(black_box(ancestor), black_box(descendant)));
    });

    group.bench_function("unrelated", |b| {
        b.iter(|| PathRelationship::between(black_box(unrelated1), black_box(unrelated2)));
    });

    group.bench_function("is_in_path", |b| {
        b.iter(|| path::is_in_path(black_box("src/path"), black_box(descendant)));
    });

    group.bench_function("shared_subpath", |b| {
        b.iter(|| path::shared_subpath(black_box([descendant, unrelated1, unrelated2])));
    });

    group.bench_function("is_legal_with", |b| {
        b.iter(|| path::is_legal_with(black_box(descendant), black_box(&[':', '*', '?'])));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_segments,
    bench_accessors,
    bench_mutators,
    bench_relationship
);
criterion_main!(benches);
