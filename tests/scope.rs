use funcalc::{Scope, Value};

#[test]
fn read_miss_defines_zero_locally() {
    let mut root = Scope::new();

    assert_eq!(root.read("x"), 0.0);
    assert!(root.contains_local("x"));
    assert_eq!(root.len(), 1);
}

#[test]
fn read_miss_in_child_does_not_touch_parent() {
    let root = Scope::new();
    let mut child = Scope::with_parent(&root);

    assert_eq!(child.read("x"), 0.0);
    assert!(child.contains_local("x"));
    assert!(root.is_empty());
}

#[test]
fn read_finds_ancestor_without_copying_it() {
    let mut root = Scope::new();
    root.write("x", Value::Number(3.0));

    let middle = Scope::with_parent(&root);
    let mut leaf = Scope::with_parent(&middle);

    assert_eq!(leaf.read("x"), 3.0);
    assert!(!leaf.contains_local("x"));
    assert!(middle.is_empty());
}

#[test]
fn nearest_binding_wins() {
    let mut root = Scope::new();
    root.write("x", Value::Number(1.0));

    let mut middle = Scope::with_parent(&root);
    middle.write("x", Value::Number(2.0));

    let mut leaf = Scope::with_parent(&middle);
    assert_eq!(leaf.read("x"), 2.0);
}

#[test]
fn write_shadows_instead_of_updating_parent() {
    let mut root = Scope::new();
    root.write("x", Value::Number(3.0));

    let mut child = Scope::with_parent(&root);
    child.write("x", Value::Number(9.0));

    assert_eq!(child.lookup("x"), Some(&Value::Number(9.0)));
    assert_eq!(root.get_local("x"), Some(&Value::Number(3.0)));
}

#[test]
fn write_overwrites_local_binding() {
    let mut root = Scope::new();
    root.write("x", Value::Number(1.0));
    root.write("x", Value::Number(2.0));

    assert_eq!(root.get_local("x"), Some(&Value::Number(2.0)));
    assert_eq!(root.len(), 1);
}

#[test]
fn lookup_never_defines() {
    let root = Scope::new();
    let child = Scope::with_parent(&root);

    assert_eq!(child.lookup("missing"), None);
    assert!(child.is_empty());
    assert!(child.parent().is_some());
    assert!(root.parent().is_none());
}
