use super::*;
use tyq_model::{TypeDescriptor, TypeId, TypeRegistry};

/// Classes `A<T>`, `B<T> : A<T>`, `C : B<object>`, with the closed
/// instantiations registered the way runtime metadata surfaces them.
struct GenericClassFixture {
    registry: TypeRegistry,
    a_definition: TypeId,
    b_definition: TypeId,
    b_of_object: TypeId,
    c: TypeId,
}

fn generic_class_fixture() -> GenericClassFixture {
    let registry = TypeRegistry::new();
    let a_definition = registry.register(TypeDescriptor::class("A`1").generic_definition());
    let a_of_object = registry.register(TypeDescriptor::class("A<object>").closed_over(a_definition));
    let b_definition = registry.register(
        TypeDescriptor::class("B`1")
            .generic_definition()
            .with_base(a_of_object),
    );
    let b_of_object = registry.register(
        TypeDescriptor::class("B<object>")
            .closed_over(b_definition)
            .with_base(a_of_object),
    );
    let c = registry.register(TypeDescriptor::class("C").with_base(b_of_object));
    GenericClassFixture {
        registry,
        a_definition,
        b_definition,
        b_of_object,
        c,
    }
}

#[test]
fn class_matches_definition_anywhere_in_its_base_chain() {
    let fixture = generic_class_fixture();

    assert!(matches_generic_definition(
        &fixture.registry,
        fixture.c,
        fixture.a_definition
    ));
    assert!(matches_generic_definition(
        &fixture.registry,
        fixture.c,
        fixture.b_definition
    ));
}

#[test]
fn definition_does_not_match_a_definition_derived_from_it() {
    let fixture = generic_class_fixture();

    // A<> is above B<> in the hierarchy, not below it.
    assert!(!matches_generic_definition(
        &fixture.registry,
        fixture.a_definition,
        fixture.b_definition
    ));
}

#[test]
fn definition_matches_itself() {
    let fixture = generic_class_fixture();

    assert!(matches_generic_definition(
        &fixture.registry,
        fixture.a_definition,
        fixture.a_definition
    ));
}

#[test]
fn closed_generic_matches_its_own_definition() {
    let fixture = generic_class_fixture();

    assert!(matches_generic_definition(
        &fixture.registry,
        fixture.b_of_object,
        fixture.b_definition
    ));
}

#[test]
fn non_generic_candidate_never_matches_through_the_chain() {
    let registry = TypeRegistry::new();
    let definition = registry.register(TypeDescriptor::class("A`1").generic_definition());
    let plain_base = registry.register(TypeDescriptor::class("PlainBase"));
    let plain = registry.register(TypeDescriptor::class("Plain").with_base(plain_base));

    assert!(!matches_generic_definition(&registry, plain, definition));
}

#[test]
fn non_definition_argument_yields_false_not_an_error() {
    let registry = TypeRegistry::new();
    let plain = registry.register(TypeDescriptor::class("Plain"));
    let closed = registry.register(TypeDescriptor::class("A<object>").closed_over(plain));

    // Neither a plain class, a closed generic, nor an unknown id is an
    // open generic definition.
    assert!(!matches_generic_definition(&registry, plain, plain));
    assert!(!matches_generic_definition(&registry, plain, closed));
    assert!(!matches_generic_definition(&registry, plain, TypeId::INVALID));
    assert!(!matches_generic_definition(&registry, TypeId(404), TypeId(405)));
}

/// Interfaces `IA<T>`, `IB<T> : IA<T>`, `IC : IB<object>`, and a class
/// `X<T> : IA<T>` instantiated as `X<int>`. The source re-lists inherited
/// interfaces at each level, matching how runtime metadata reports
/// "directly implemented" interfaces.
struct GenericInterfaceFixture {
    registry: TypeRegistry,
    ia_definition: TypeId,
    ia_of_object: TypeId,
    ib_definition: TypeId,
    ic: TypeId,
    x_of_int: TypeId,
}

fn generic_interface_fixture() -> GenericInterfaceFixture {
    let registry = TypeRegistry::new();
    let ia_definition = registry.register(TypeDescriptor::interface("IA`1").generic_definition());
    let ia_of_object =
        registry.register(TypeDescriptor::interface("IA<object>").closed_over(ia_definition));
    let ib_definition = registry.register(
        TypeDescriptor::interface("IB`1")
            .generic_definition()
            .with_interface(ia_of_object),
    );
    let ib_of_object = registry.register(
        TypeDescriptor::interface("IB<object>")
            .closed_over(ib_definition)
            .with_interface(ia_of_object),
    );
    let ic = registry.register(
        TypeDescriptor::interface("IC")
            .with_interface(ib_of_object)
            .with_interface(ia_of_object),
    );

    let x_definition = registry.register(TypeDescriptor::class("X`1").generic_definition());
    let ia_of_int =
        registry.register(TypeDescriptor::interface("IA<int>").closed_over(ia_definition));
    let x_of_int = registry.register(
        TypeDescriptor::class("X<int>")
            .closed_over(x_definition)
            .with_interface(ia_of_int),
    );

    GenericInterfaceFixture {
        registry,
        ia_definition,
        ia_of_object,
        ib_definition,
        ic,
        x_of_int,
    }
}

#[test]
fn interface_inherited_through_an_interface_chain_matches() {
    let fixture = generic_interface_fixture();

    assert!(matches_generic_definition(
        &fixture.registry,
        fixture.ic,
        fixture.ia_definition
    ));
    assert!(matches_generic_definition(
        &fixture.registry,
        fixture.ic,
        fixture.ib_definition
    ));
}

#[test]
fn class_implementing_a_closed_interface_matches_the_interface_definition() {
    let fixture = generic_interface_fixture();

    assert!(matches_generic_definition(
        &fixture.registry,
        fixture.x_of_int,
        fixture.ia_definition
    ));
}

#[test]
fn closed_interface_instantiation_matches_its_own_definition() {
    let fixture = generic_interface_fixture();

    assert!(matches_generic_definition(
        &fixture.registry,
        fixture.ia_of_object,
        fixture.ia_definition
    ));
}

#[test]
fn interface_matching_inspects_directly_declared_interfaces_only() {
    // Without the per-level re-listing the source contract requires, an
    // interface two extends-steps away is invisible: the matcher does not
    // recurse into an interface's own interface list.
    let registry = TypeRegistry::new();
    let ia_definition = registry.register(TypeDescriptor::interface("IA`1").generic_definition());
    let ia_of_object =
        registry.register(TypeDescriptor::interface("IA<object>").closed_over(ia_definition));
    let ib = registry.register(TypeDescriptor::interface("IB").with_interface(ia_of_object));
    let ic = registry.register(TypeDescriptor::interface("IC").with_interface(ib));

    assert!(matches_generic_definition(&registry, ib, ia_definition));
    assert!(!matches_generic_definition(&registry, ic, ia_definition));
}

#[test]
fn interface_implementation_declared_on_a_base_class_matches() {
    let registry = TypeRegistry::new();
    let ia_definition = registry.register(TypeDescriptor::interface("IA`1").generic_definition());
    let ia_of_int =
        registry.register(TypeDescriptor::interface("IA<int>").closed_over(ia_definition));
    let base = registry.register(TypeDescriptor::class("Base").with_interface(ia_of_int));
    let derived = registry.register(TypeDescriptor::class("Derived").with_base(base));

    // Declared on Base; recovered for Derived by the hierarchy walk.
    assert!(matches_generic_definition(&registry, derived, ia_definition));
}
