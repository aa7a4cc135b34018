//! Integration tests using Unit as the entry point.
//!
//! Each test declares a small model through the unit's builder, builds it
//! and checks the resolved items and diagnostics.

use biprog::{
    AstBuilder, BiprogError, Block, CompilationError, Item, Node, Reference, Span, StructureError,
    Target, Ty, Unit, UnitOptions, UnitProperty,
};
use bumpalo::Bump;

fn s() -> Span {
    Span::default()
}

fn params<'a>(b: &AstBuilder<'a>, params: &[(&str, Ty)]) -> Node<'a> {
    let items: Vec<Node<'a>> = params
        .iter()
        .map(|(name, ty)| Node::from(b.param(name, b.type_ref(ty.clone(), s()), s())))
        .collect();
    b.list(&items, s()).into()
}

fn body<'a>(b: &AstBuilder<'a>, items: &[Node<'a>]) -> Node<'a> {
    b.block(items, s()).into()
}

fn call<'a>(b: &AstBuilder<'a>, name: &str, args: &[Node<'a>], span: Span) -> Node<'a> {
    b.reference(None, name, None, Some(b.list(args, span).into()), span)
        .into()
}

/// The reference a function or method body ends with.
fn tail<'a>(item: &Item<'a>) -> &'a Reference<'a> {
    let body = match *item {
        Item::Function(f) => f.body,
        Item::Method { overload, .. } => overload.body,
        Item::Dim(_) => panic!("dims have no body"),
    };
    body.narrow::<Block>()
        .and_then(|block| block.tail())
        .and_then(|node| node.narrow::<Reference>())
        .expect("body ends with a reference")
}

// =============================================================================
// Scenario A: the most specific overload wins
// =============================================================================

#[test]
fn most_specific_overload_is_selected() {
    let arena = Bump::new();
    let mut unit = Unit::new(&arena);
    let b = unit.builder();

    // function f(x:Int) {true}  -> Bool
    // function f(x:Real) {x}    -> Real
    let f_int = unit
        .add_function(
            "f",
            Some(params(&b, &[("x", Ty::Int)])),
            Some(body(&b, &[b.boolean(true, s())])),
            s(),
        )
        .unwrap();
    let x = b.name_ref("x", s());
    unit.add_function("f", Some(params(&b, &[("x", Ty::Real)])), Some(body(&b, &[x])), s())
        .unwrap();

    // function main(n:Int) {f(n)}
    let n = b.name_ref("n", s());
    let f_n = call(&b, "f", &[n], s());
    unit.add_function("main", Some(params(&b, &[("n", Ty::Int)])), Some(body(&b, &[f_n])), s())
        .unwrap();

    let output = unit.build().unwrap().check().unwrap();
    let use_site = tail(&output.items[2]);
    assert_eq!(use_site.ty, Ty::Bool);
    match use_site.target {
        Some(Target::Function(chosen)) => assert!(std::ptr::eq(chosen, f_int)),
        other => panic!("expected a function target, got {other:?}"),
    }
}

#[test]
fn literal_arguments_pick_their_overload() {
    let arena = Bump::new();
    let mut unit = Unit::new(&arena);
    let b = unit.builder();

    let x = b.name_ref("x", s());
    unit.add_function("f", Some(params(&b, &[("x", Ty::Int)])), Some(body(&b, &[x])), s())
        .unwrap();
    let y = b.name_ref("y", s());
    unit.add_function("f", Some(params(&b, &[("y", Ty::Real)])), Some(body(&b, &[y])), s())
        .unwrap();

    let by_int = call(&b, "f", &[b.int(3, s())], s());
    let by_real = call(&b, "f", &[b.real(0.5, s())], s());
    unit.add_function("a", Some(params(&b, &[])), Some(body(&b, &[by_int])), s())
        .unwrap();
    unit.add_function("b", Some(params(&b, &[])), Some(body(&b, &[by_real])), s())
        .unwrap();

    let output = unit.build().unwrap().check().unwrap();
    assert_eq!(tail(&output.items[2]).ty, Ty::Int);
    assert_eq!(tail(&output.items[3]).ty, Ty::Real);
}

// =============================================================================
// Scenario B: incomparable minimal candidates are ambiguous
// =============================================================================

#[test]
fn incomparable_candidates_are_ambiguous() {
    let arena = Bump::new();
    let mut unit = Unit::new(&arena);
    let b = unit.builder();

    unit.add_function(
        "f",
        Some(params(&b, &[("a", Ty::Int), ("b", Ty::Real)])),
        Some(body(&b, &[])),
        s(),
    )
    .unwrap();
    unit.add_function(
        "f",
        Some(params(&b, &[("a", Ty::Real), ("b", Ty::Int)])),
        Some(body(&b, &[])),
        s(),
    )
    .unwrap();

    let site = Span::new(12, 5, 9);
    let i = b.name_ref("i", s());
    let j = b.name_ref("j", s());
    let f_ij = call(&b, "f", &[i, j], site);
    unit.add_function(
        "main",
        Some(params(&b, &[("i", Ty::Int), ("j", Ty::Int)])),
        Some(body(&b, &[f_ij])),
        s(),
    )
    .unwrap();

    let output = unit.build().unwrap();
    let diagnostics = output.check().unwrap_err().into_vec();
    assert_eq!(
        diagnostics,
        vec![CompilationError::AmbiguousOverload {
            name: "f".into(),
            args: "i, j".into(),
            candidates: vec![
                "function f(a:Int, b:Real) {}".into(),
                "function f(a:Real, b:Int) {}".into(),
            ],
            span: site,
        }]
    );
    assert_eq!(
        diagnostics[0].to_string(),
        "at 12:5: ambiguous call to 'f(i, j)'; candidates:\n    function f(a:Int, b:Real) {}\n    function f(a:Real, b:Int) {}"
    );
}

// =============================================================================
// Scenario C: duplicate signatures
// =============================================================================

#[test]
fn duplicate_signature_is_reported_once() {
    let arena = Bump::new();
    let mut unit = Unit::new(&arena);
    let b = unit.builder();

    let first = Span::new(1, 1, 20);
    let second = Span::new(2, 1, 20);
    unit.add_function(
        "f",
        Some(params(&b, &[("x", Ty::Int)])),
        Some(body(&b, &[b.int(1, s())])),
        first,
    )
    .unwrap();
    unit.add_function(
        "f",
        Some(params(&b, &[("x", Ty::Int)])),
        Some(body(&b, &[b.int(1, s())])),
        second,
    )
    .unwrap();

    let output = unit.build().unwrap();
    let errors: Vec<_> = output.diagnostics.iter().collect();
    assert_eq!(errors.len(), 1);
    match errors[0] {
        CompilationError::DuplicateSignature {
            name,
            span,
            previous_span,
            ..
        } => {
            assert_eq!(name, "f");
            assert_eq!(*span, second);
            assert_eq!(*previous_span, first);
        }
        other => panic!("expected DuplicateSignature, got {other:?}"),
    }
    assert_eq!(
        output.scope.function("f").map(|f| f.overloads.len()),
        Some(1)
    );
}

// =============================================================================
// Scenario D: malformed structure aborts the build
// =============================================================================

#[test]
fn method_without_parameters_is_malformed() {
    let arena = Bump::new();
    let mut unit = Unit::new(&arena);
    let b = unit.builder();
    let span = Span::new(3, 1, 14);

    let err = unit
        .add_method("model", "f", None, Some(body(&b, &[])), span)
        .unwrap_err();
    assert_eq!(
        err,
        StructureError::malformed("method", "f", "parameter list", span)
    );
    assert!(unit.items().is_empty());

    // Later, valid items do not rescue the build.
    unit.add_function("g", Some(params(&b, &[])), Some(body(&b, &[])), s())
        .unwrap();
    match unit.build() {
        Err(BiprogError::Structure(e)) => assert_eq!(e, err),
        other => panic!("expected a structure error, got {other:?}"),
    }
}

// =============================================================================
// Scenario E: dim redeclaration
// =============================================================================

#[test]
fn equal_dims_unify_and_different_dims_mismatch() {
    let arena = Bump::new();
    let mut unit = Unit::new(&arena);
    let b = unit.builder();

    let x3 = unit.add_dim("x", Some(b.int(3, s())), s()).unwrap();
    unit.add_dim("x", Some(b.int(3, s())), s()).unwrap();
    let clash = Span::new(9, 1, 8);
    unit.add_dim("x", Some(b.int(4, s())), clash).unwrap();

    let output = unit.build().unwrap();
    assert_eq!(
        output.diagnostics.into_vec(),
        vec![CompilationError::TypeMismatch {
            name: "x".into(),
            expected: "3".into(),
            found: "4".into(),
            span: clash,
        }]
    );
    assert!(output.scope.dim("x").is_some_and(|d| std::ptr::eq(d, x3)));
}

#[test]
fn lenient_dims_keep_the_first_declaration() {
    let arena = Bump::new();
    let options = UnitOptions::new().with(UnitProperty::StrictDimUnify, 0);
    let mut unit = Unit::with_options(&arena, options);
    let b = unit.builder();

    let first = unit.add_dim("x", Some(b.int(3, s())), s()).unwrap();
    unit.add_dim("x", Some(b.type_ref(Ty::Int, s()).into()), s())
        .unwrap();

    let output = unit.build().unwrap();
    assert!(output.is_clean());
    assert!(output.scope.dim("x").is_some_and(|d| std::ptr::eq(d, first)));
}

// =============================================================================
// Whole models
// =============================================================================

#[test]
fn model_with_receivers_and_dims() {
    let arena = Bump::new();
    let mut unit = Unit::with_options(&arena, UnitOptions::new().with(UnitProperty::DumpTypes, 1));
    let b = unit.builder();

    unit.add_dim("n", Some(b.int(10, s())), s()).unwrap();

    // method model.rate(k:Int) {k}
    let k = b.name_ref("k", s());
    unit.add_method("model", "rate", Some(params(&b, &[("k", Ty::Int)])), Some(body(&b, &[k])), s())
        .unwrap();
    // method model.rate(v:Real) {v}
    let v = b.name_ref("v", s());
    unit.add_method(
        "model",
        "rate",
        Some(params(&b, &[("v", Ty::Real)])),
        Some(body(&b, &[v])),
        s(),
    )
    .unwrap();

    // function simulate(i:Int) {model.rate(n[i])}
    let i = b.name_ref("i", s());
    let n_i = b.reference(None, "n", Some(i), None, s());
    let rate = b.reference(
        Some("model"),
        "rate",
        None,
        Some(b.list(&[Node::from(n_i)], s()).into()),
        s(),
    );
    unit.add_function(
        "simulate",
        Some(params(&b, &[("i", Ty::Int)])),
        Some(body(&b, &[Node::from(rate)])),
        s(),
    )
    .unwrap();

    let output = unit.build().unwrap();
    assert!(output.is_clean(), "{}", output.diagnostics);

    let use_site = tail(&output.items[3]);
    assert_eq!(use_site.to_string(), "model.rate(n[i])");
    assert_eq!(use_site.ty, Ty::Int);

    assert_eq!(
        output.dump.as_deref(),
        Some(concat!(
            "dim n[10] : Int\n",
            "model: method rate(k:Int) {k} : (Int) -> Int\n",
            "    k : Int\n",
            "model: method rate(v:Real) {v} : (Real) -> Real\n",
            "    v : Real\n",
            "function simulate(i:Int) {model.rate(n[i])} : (Int) -> Int\n",
            "    i : Int\n",
            "    n[i] : Int\n",
            "    model.rate(n[i]) : Int\n",
        ))
    );
}

#[test]
fn unknown_names_do_not_stop_resolution() {
    let arena = Bump::new();
    let mut unit = Unit::new(&arena);
    let b = unit.builder();

    let ghost = b.name_ref("ghost", Span::new(4, 3, 5));
    let elsewhere = b.reference(Some("elsewhere"), "f", None, None, Span::new(5, 3, 11));
    let x = b.name_ref("x", s());
    unit.add_function(
        "f",
        Some(params(&b, &[("x", Ty::Real)])),
        Some(body(&b, &[ghost, Node::from(elsewhere), x])),
        s(),
    )
    .unwrap();

    let output = unit.build().unwrap();
    let messages: Vec<String> = output.diagnostics.iter().map(|e| e.to_string()).collect();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], "at 4:3: unknown name 'ghost'");
    assert!(messages[1].contains("elsewhere"));
    assert_eq!(tail(&output.items[0]).ty, Ty::Real);
}
