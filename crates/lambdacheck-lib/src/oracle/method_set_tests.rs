use lambdacheck_core::types::{Field, Method};
use lambdacheck_core::{BasicKind, ProgramBuilder, TypeId};

use super::TypeOracle;

const APP: &str = "example.com/app";

fn embed(ty: TypeId) -> Field {
    Field {
        name: "embedded".to_owned(),
        ty,
        embedded: true,
    }
}

fn names(set: &super::MethodSet) -> Vec<&str> {
    let mut names: Vec<&str> = set.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}

#[test]
fn pointer_receivers_need_pointer() {
    let mut b = ProgramBuilder::new();
    let t = b.named(Some(APP), "T");
    let empty = b.struct_type(vec![]);
    b.set_underlying(t, empty);
    b.add_method(t, "Value", &[], &[], false);
    b.add_method(t, "Ptr", &[], &[], true);
    let pt = b.pointer(t);
    let program = b.finish();

    assert_eq!(names(&program.method_set(t)), ["Value"]);
    assert_eq!(names(&program.method_set(pt)), ["Ptr", "Value"]);
}

#[test]
fn embedded_struct_promotes_methods() {
    let mut b = ProgramBuilder::new();
    let inner = b.named(Some(APP), "Inner");
    let empty = b.struct_type(vec![]);
    b.set_underlying(inner, empty);
    b.add_method(inner, "Hello", &[], &[], false);
    b.add_method(inner, "Bye", &[], &[], true);

    let outer = b.named(Some(APP), "Outer");
    let st = b.struct_type(vec![embed(inner)]);
    b.set_underlying(outer, st);

    let inner_ptr = b.pointer(inner);
    let via_ptr = b.named(Some(APP), "ViaPtr");
    let st = b.struct_type(vec![embed(inner_ptr)]);
    b.set_underlying(via_ptr, st);
    let program = b.finish();

    assert_eq!(names(&program.method_set(outer)), ["Hello"]);
    assert_eq!(names(&program.method_set(via_ptr)), ["Bye", "Hello"]);
}

#[test]
fn same_depth_collision_is_ambiguous() {
    let mut b = ProgramBuilder::new();
    let empty = b.struct_type(vec![]);
    let a = b.named(Some(APP), "A");
    b.set_underlying(a, empty);
    b.add_method(a, "Run", &[], &[], false);
    b.add_method(a, "OnlyA", &[], &[], false);
    let c = b.named(Some(APP), "C");
    b.set_underlying(c, empty);
    b.add_method(c, "Run", &[], &[], false);

    let both = b.named(Some(APP), "Both");
    let st = b.struct_type(vec![embed(a), embed(c)]);
    b.set_underlying(both, st);
    let program = b.finish();

    assert_eq!(names(&program.method_set(both)), ["OnlyA"]);
}

#[test]
fn shallower_method_wins() {
    let mut b = ProgramBuilder::new();
    let empty = b.struct_type(vec![]);
    let inner = b.named(Some(APP), "Inner");
    b.set_underlying(inner, empty);
    let inner_run = b.add_method(inner, "Run", &[], &[], false);

    let outer = b.named(Some(APP), "Outer");
    let st = b.struct_type(vec![embed(inner)]);
    b.set_underlying(outer, st);
    let int = b.basic(BasicKind::Int);
    let outer_run = b.add_method(outer, "Run", &[int], &[], false);
    let program = b.finish();

    let set = program.method_set(outer);
    assert_eq!(set.get("Run"), Some(&outer_run));
    assert_ne!(set.get("Run"), Some(&inner_run));
}

#[test]
fn field_shadows_deeper_method() {
    let mut b = ProgramBuilder::new();
    let empty = b.struct_type(vec![]);
    let inner = b.named(Some(APP), "Inner");
    b.set_underlying(inner, empty);
    b.add_method(inner, "Done", &[], &[], false);

    let int = b.basic(BasicKind::Int);
    let outer = b.named(Some(APP), "Outer");
    let st = b.struct_type(vec![
        embed(inner),
        Field {
            name: "Done".to_owned(),
            ty: int,
            embedded: false,
        },
    ]);
    b.set_underlying(outer, st);
    let program = b.finish();

    assert!(program.method_set(outer).is_empty());
}

#[test]
fn recursive_embedding_terminates() {
    let mut b = ProgramBuilder::new();
    let node = b.named(Some(APP), "Node");
    let node_ptr = b.pointer(node);
    let st = b.struct_type(vec![embed(node_ptr)]);
    b.set_underlying(node, st);
    b.add_method(node, "Walk", &[], &[], true);
    let program = b.finish();

    // The embedded *Node is the type itself, already seen at depth zero.
    assert!(program.method_set(node).is_empty());
    assert_eq!(names(&program.method_set(node_ptr)), ["Walk"]);
}

#[test]
fn interface_method_set_includes_embeds() {
    let mut b = ProgramBuilder::new();
    let string = b.basic(BasicKind::String);
    let sig = b.signature(&[], &[string]);
    let method = |name: &str| Method {
        name: name.to_owned(),
        signature: sig,
        pointer_receiver: false,
    };
    let base = b.interface(vec![method("Name")], vec![]);
    let named_base = b.named(Some(APP), "Base");
    b.set_underlying(named_base, base);
    let derived = b.interface(vec![method("Title")], vec![named_base]);
    let pointer_to_iface = b.pointer(named_base);
    let program = b.finish();

    assert_eq!(names(&program.method_set(derived)), ["Name", "Title"]);
    assert!(program.method_set(pointer_to_iface).is_empty());
}

#[test]
fn struct_embedding_context_implements_it() {
    let mut b = ProgramBuilder::new();
    let context = b.context_type();
    let wrapper = b.named(Some(APP), "Wrapped");
    let st = b.struct_type(vec![embed(context)]);
    b.set_underlying(wrapper, st);
    let string = b.basic(BasicKind::String);
    let program = b.finish();

    assert!(program.implements(wrapper, context));
    assert!(program.implements(context, context));
    assert!(!program.implements(string, context));
}

#[test]
fn pointer_receiver_implementation() {
    let mut b = ProgramBuilder::new();
    let error = b.error_type();
    let string = b.basic(BasicKind::String);
    let empty = b.struct_type(vec![]);
    let my_err = b.named(Some(APP), "MyErr");
    b.set_underlying(my_err, empty);
    b.add_method(my_err, "Error", &[], &[string], true);
    let ptr = b.pointer(my_err);
    let program = b.finish();

    assert!(!program.implements(my_err, error));
    assert!(program.implements(ptr, error));
}

#[test]
fn implements_requires_interface_target() {
    let mut b = ProgramBuilder::new();
    let int = b.basic(BasicKind::Int);
    let string = b.basic(BasicKind::String);
    let program = b.finish();

    assert!(!program.implements(string, int));
}
