//! End-to-end classification scenarios over declared snapshots.

mod common;

use apicompat_core::classify::{ChangeClassifier, ChangeKind, TypeChange};
use apicompat_core::model::{
    BasicKind, Documentation, Field, NamedType, StructType, TypeDescriptor, TypeSnapshot,
};
use apicompat_core::oracle::{AssignabilityTable, StructuralOracle};
use common::*;

fn classify(before: Option<&TypeSnapshot>, after: Option<&TypeSnapshot>) -> ChangeKind {
    TypeChange::new(before, after).kind()
}

// ---------------------------------------------------------------------------
// Presence
// ---------------------------------------------------------------------------

// A: new declaration
#[test]
fn test_added_declaration() {
    let after = declare("X", record(vec![("X", basic(BasicKind::Int))]));
    assert_eq!(classify(None, Some(&after)), ChangeKind::Added);
}

#[test]
fn test_removed_declaration() {
    let before = declare("X", record(vec![("X", basic(BasicKind::Int))]));
    assert_eq!(classify(Some(&before), None), ChangeKind::Removed);
}

#[test]
fn test_both_absent_is_unchanged() {
    assert_eq!(classify(None, None), ChangeKind::Unchanged);
}

// ---------------------------------------------------------------------------
// Struct shapes
// ---------------------------------------------------------------------------

// B: visible field added
#[test]
fn test_struct_field_added_is_compatible() {
    let before = declare("T", record(vec![("A", basic(BasicKind::Int))]));
    let after = declare(
        "T",
        record(vec![
            ("A", basic(BasicKind::Int)),
            ("B", basic(BasicKind::String)),
        ]),
    );
    assert_eq!(classify(Some(&before), Some(&after)), ChangeKind::Compatible);
}

// C: visible field removed
#[test]
fn test_struct_field_removed_is_breaking() {
    let before = declare(
        "T",
        record(vec![
            ("A", basic(BasicKind::Int)),
            ("B", basic(BasicKind::String)),
        ]),
    );
    let after = declare("T", record(vec![("A", basic(BasicKind::Int))]));
    assert_eq!(classify(Some(&before), Some(&after)), ChangeKind::Breaking);
}

// D: same shape
#[test]
fn test_identical_struct_is_unchanged() {
    let before = declare("T", record(vec![("A", basic(BasicKind::Int))]));
    let after = declare("T", record(vec![("A", basic(BasicKind::Int))]));
    assert_eq!(classify(Some(&before), Some(&after)), ChangeKind::Unchanged);
}

#[test]
fn test_private_field_churn_is_unchanged() {
    let before = declare(
        "T",
        record(vec![("A", basic(BasicKind::Int)), ("cache", opaque("map[string]int"))]),
    );
    let after = declare(
        "T",
        record(vec![("A", basic(BasicKind::Int)), ("mu", opaque("sync.Mutex"))]),
    );
    assert_eq!(classify(Some(&before), Some(&after)), ChangeKind::Unchanged);
}

#[test]
fn test_reordered_fields_are_unchanged() {
    let before = declare(
        "T",
        record(vec![("A", basic(BasicKind::Int)), ("B", basic(BasicKind::Bool))]),
    );
    let after = declare(
        "T",
        record(vec![("B", basic(BasicKind::Bool)), ("A", basic(BasicKind::Int))]),
    );
    assert_eq!(classify(Some(&before), Some(&after)), ChangeKind::Unchanged);
}

// ---------------------------------------------------------------------------
// Basic kinds
// ---------------------------------------------------------------------------

// E: byte -> uint8
#[test]
fn test_kind_alias_rename_is_compatible() {
    let before = declare("K", alias("byte", BasicKind::Uint8));
    let after = declare("K", basic(BasicKind::Uint8));
    assert_eq!(classify(Some(&before), Some(&after)), ChangeKind::Compatible);
}

#[test]
fn test_kind_change_is_breaking() {
    let before = declare("K", basic(BasicKind::Int32));
    let after = declare("K", basic(BasicKind::Int64));
    assert_eq!(classify(Some(&before), Some(&after)), ChangeKind::Breaking);
}

#[test]
fn test_struct_to_basic_is_breaking() {
    let before = declare("T", record(vec![("A", basic(BasicKind::Int))]));
    let after = declare("T", basic(BasicKind::Int));
    assert_eq!(classify(Some(&before), Some(&after)), ChangeKind::Breaking);
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

#[test]
fn test_interface_narrowing_is_compatible_but_widening_breaks() {
    let rw = declare("Stream", interface(&["Read", "Write"]));
    let r = declare("Stream", interface(&["Read"]));
    assert_eq!(classify(Some(&rw), Some(&r)), ChangeKind::Compatible);
    assert_eq!(classify(Some(&r), Some(&rw)), ChangeKind::Breaking);
}

#[test]
fn test_injected_oracle_decides_opaque_pairs() {
    let before = declare("Src", opaque("*bytes.Buffer"));
    let after = declare("Src", opaque("io.Reader"));

    let structural = ChangeClassifier::new(StructuralOracle);
    let table = ChangeClassifier::new(AssignabilityTable::new().allow("*bytes.Buffer", "io.Reader"));

    let change = TypeChange::new(Some(&before), Some(&after));
    assert_eq!(change.kind_with(&structural), ChangeKind::Breaking);
    assert_eq!(change.kind_with(&table), ChangeKind::Compatible);
}

#[test]
fn test_field_rewrapped_in_other_package_compares_by_underlying() {
    let id_in = |package: &str| -> TypeDescriptor {
        NamedType {
            package: package.to_string(),
            name: "ID".to_string(),
            underlying: Box::new(basic(BasicKind::Int)),
            methods: vec![],
        }
        .into()
    };
    let before = declare("Wrap", record(vec![("V", id_in("example.com/a"))]));
    let after = declare("Wrap", record(vec![("V", id_in("example.com/b"))]));

    // Qualified names keep the identities apart, so the full comparison runs
    assert_ne!(before.canonical_identity(), after.canonical_identity());
    assert_eq!(classify(Some(&before), Some(&after)), ChangeKind::Unchanged);
}

// ---------------------------------------------------------------------------
// Deep nesting
// ---------------------------------------------------------------------------

fn nested(levels: usize) -> TypeDescriptor {
    (0..levels).fold(basic(BasicKind::Int), |inner, _| record(vec![("In", inner)]))
}

#[test]
fn test_deeply_nested_identical_types_are_unchanged() {
    let before = declare("Deep", record(vec![("A", nested(70))]));
    let after = declare("Deep", record(vec![("A", nested(70))]));
    assert_eq!(classify(Some(&before), Some(&after)), ChangeKind::Unchanged);
    assert_eq!(
        ChangeClassifier::new(StructuralOracle)
            .comparator()
            .compare(before.underlying(), after.underlying()),
        apicompat_core::Compatibility::Identical
    );
}

#[test]
fn test_field_added_next_to_deep_field_is_compatible() {
    let before = declare("Deep", record(vec![("A", nested(70))]));
    let after = declare(
        "Deep",
        record(vec![("A", nested(70)), ("B", basic(BasicKind::Int))]),
    );
    assert_eq!(classify(Some(&before), Some(&after)), ChangeKind::Compatible);
}

#[test]
fn test_change_at_the_bottom_of_deep_nesting_is_breaking() {
    let before = declare("Deep", nested(70));
    let after = declare("Deep", {
        let mut ty = basic(BasicKind::String);
        for _ in 0..70 {
            ty = record(vec![("In", ty)]);
        }
        ty
    });
    assert_eq!(classify(Some(&before), Some(&after)), ChangeKind::Breaking);
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

fn single_field(exported: bool) -> TypeDescriptor {
    StructType {
        fields: vec![Field {
            name: "A".to_string(),
            exported,
            ty: basic(BasicKind::Int),
        }],
    }
    .into()
}

#[test]
fn test_field_hidden_without_rename_is_breaking() {
    let before = declare("Vis", single_field(true));
    let after = declare("Vis", single_field(false));

    assert_ne!(before.canonical_identity(), after.canonical_identity());
    assert_eq!(classify(Some(&before), Some(&after)), ChangeKind::Breaking);
}

#[test]
fn test_field_exposed_without_rename_is_compatible() {
    let before = declare("Vis", single_field(false));
    let after = declare("Vis", single_field(true));
    assert_eq!(classify(Some(&before), Some(&after)), ChangeKind::Compatible);
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn test_show_before_and_after() {
    let before = declare("T", record(vec![("A", basic(BasicKind::Int))])).with_doc(Documentation {
        text: "T is a thing.".to_string(),
        decl: "type T struct {\n\tA int\n}".to_string(),
    });
    let after = declare("T", record(vec![]));

    let change = TypeChange::new(Some(&before), Some(&after));
    assert_eq!(change.show_before(), "// T is a thing.\ntype T struct {\n\tA int\n}");
    assert_eq!(change.show_after(), "");
    assert_eq!(change.kind(), ChangeKind::Breaking);
}
