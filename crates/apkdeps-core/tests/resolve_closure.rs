use apkdeps_core::{
    DependencyGraph, Diagnostics, PackageRecord, RecordTable, parse_index, parse_index_with,
    render_tree, resolve,
};
use pretty_assertions::assert_eq;

const ALPINE_SAMPLE: &str = "\
C:Q1o8bN6vcxZ8cMa6hP0qQV8dPZb4I=
P:musl
V:1.2.5-r0
A:x86_64
S:411321
I:649216
T:the musl c library (libc) implementation
p:so:libc.musl-x86_64.so.1=1

C:Q1Hx1Nf3Xk7kz0Ye7jvcW8C4Xk9Jo=
P:busybox
V:1.36.1-r29
A:x86_64
D:so:libc.musl-x86_64.so.1
p:cmd:busybox=1.36.1-r29 /bin/sh cmd:sh=1.36.1-r29

C:Q1m2qzZ7h6kDk8oYfN1w3W0p6oHnQ=
P:alpine-baselayout
V:3.6.5-r0
D:alpine-baselayout-data=3.6.5-r0 /bin/sh

P:alpine-baselayout-data
V:3.6.5-r0

P:apk-tools
V:2.14.4-r0
D:musl>=1.2.3_git20230424 ca-certificates-bundle so:libcrypto.so.3 so:libz.so.1

P:ca-bundle-provider
V:1.0
p:ca-certificates-bundle=20240705-r0

P:alpine-base
V:3.20.3-r0
D:alpine-baselayout busybox apk-tools scanelf cmd:sh
";

fn records(entries: &[(&str, &str, &str)]) -> RecordTable {
    entries
        .iter()
        .map(|(name, deps, provides)| {
            PackageRecord::new(*name)
                .with_dependencies(*deps)
                .with_provides(*provides)
        })
        .collect()
}

fn visited(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn cycle_terminates_and_visits_both() {
    let table = records(&[("A", "B", ""), ("B", "A", "")]);
    let resolution = resolve("A", "", &table);

    assert_eq!(
        resolution.visited.iter().cloned().collect::<Vec<_>>(),
        visited(&["A", "B"])
    );
    assert_eq!(resolution.graph.dependencies_of("A"), ["B"]);
    assert_eq!(resolution.graph.dependencies_of("B"), ["A"]);
}

#[test]
fn virtual_dependency_resolves_to_provider() {
    let table = records(&[("A", "virt", ""), ("B", "", "virt")]);
    let resolution = resolve("A", "", &table);

    assert_eq!(resolution.graph.dependencies_of("A"), ["B"]);
    assert!(resolution.visited.contains("B"));
}

#[test]
fn leaf_root_yields_empty_graph() {
    let table = records(&[("leaf", "", "")]);
    let resolution = resolve("leaf", "", &table);

    assert!(resolution.graph.is_empty());
    assert_eq!(render_tree("leaf", &resolution.graph), "└── leaf\n    (no dependencies)\n");
}

#[test]
fn end_to_end_example() {
    let table = records(&[
        ("pkgA", "pkgB pkgC>=2", ""),
        ("pkgB", "", ""),
        ("pkgC", "pkgA", ""),
    ]);
    let resolution = resolve("pkgA", "1.0", &table);

    let expected: DependencyGraph = [("pkgA", vec!["pkgB", "pkgC"]), ("pkgC", vec!["pkgA"])]
        .into_iter()
        .collect();
    assert_eq!(resolution.graph, expected);
    assert_eq!(
        resolution.visited.iter().cloned().collect::<Vec<_>>(),
        visited(&["pkgA", "pkgB", "pkgC"])
    );
}

#[test]
fn parse_is_idempotent() {
    assert_eq!(parse_index(ALPINE_SAMPLE), parse_index(ALPINE_SAMPLE));
}

#[test]
fn parse_is_total_over_garbage() {
    let inputs = [
        "",
        "\n\n\n",
        "P:",
        "garbage without tags",
        "P:ok\u{0}\nD:\u{fffd}\n\n:::\n\nP:\n\nV:1",
        "P:a\r\nV:1\r\n\r\nP:b\r\n",
    ];

    for input in inputs {
        let table = parse_index(input);
        assert!(table.names().all(|name| !name.is_empty()), "empty name from {input:?}");
    }
}

#[test]
fn alpine_sample_resolves_through_providers() {
    let mut sink = Diagnostics::new();
    let table = parse_index_with(ALPINE_SAMPLE, &mut sink);
    assert_eq!(table.len(), 7);
    assert_eq!(sink.dropped_blocks(), 0);

    let resolution = resolve("alpine-base", "3.20.3-r0", &table);

    assert_eq!(
        resolution.graph.dependencies_of("alpine-base"),
        ["alpine-baselayout", "busybox", "apk-tools"]
    );
    assert_eq!(
        resolution.graph.dependencies_of("alpine-baselayout"),
        ["alpine-baselayout-data"]
    );
    assert_eq!(
        resolution.graph.dependencies_of("apk-tools"),
        ["musl", "ca-bundle-provider"]
    );
    assert!(!resolution.graph.contains_node("busybox"));

    let tree = render_tree("alpine-base", &resolution.graph);
    assert_eq!(
        tree,
        "\
└── alpine-base
    ├── alpine-baselayout
    │   └── alpine-baselayout-data
    ├── busybox
    └── apk-tools
        ├── musl
        └── ca-bundle-provider
"
    );
}

#[test]
fn diamond_is_printed_once_per_path() {
    let table = records(&[
        ("app", "left right", ""),
        ("left", "base", ""),
        ("right", "base", ""),
        ("base", "libc", ""),
        ("libc", "", ""),
    ]);
    let resolution = resolve("app", "", &table);

    // `base` is expanded once, but both paths lead to it.
    assert_eq!(resolution.visited.len(), 5);
    assert_eq!(
        render_tree("app", &resolution.graph),
        "\
└── app
    ├── left
    │   └── base
    │       └── libc
    └── right
        └── base
            └── libc
"
    );
}
