//! Resolution Pass (Pass 2) - resolve every use site.
//!
//! A rewriting [`Visitor`]: each [`Reference`] is looked up, calls go
//! through [`Overloaded::resolve`](biprog_ast::Overloaded::resolve), and the
//! reference is replaced with a new node carrying its type and a
//! back-reference to its declaration. Compound nodes are rebuilt only when a
//! child changed. Nothing is mutated in place.
//!
//! ## Lookup order
//!
//! 1. `recv.name` looks in `recv`'s methods only
//! 2. Parameters of the enclosing signature
//! 3. Methods of the enclosing receiver
//! 4. Global dims, then global functions
//!
//! A function or method written without parentheses is a nullary call.
//!
//! ## Ordering
//!
//! The walk is depth-first. A call's target is resolved before the call's
//! type is read, even when it is declared later; a target that is still
//! being resolved (recursion) gives the call the type `Unknown`. Every
//! declaration is resolved at most once: results are memoised by node
//! identity, so a declaration reached from a use site and again as an item
//! yields the same resolved node. Use sites are memoised per enclosing
//! signature, since a shared node may bind to different parameters in each.
//!
//! Dim extents are resolved in the global frame, whichever use site first
//! reaches the dim.

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use biprog_ast::{
    AstBuilder, Block, Dim, Expression, Function, FunctionOverload, Item, List, Method,
    MethodOverload, Node, Param, Reference, Target, Typed, Visitor,
};
use biprog_core::{CompilationError, Span, Ty};
use bumpalo::Bump;

use crate::scope::Scope;

/// Output of the resolution pass.
#[derive(Debug, Default)]
pub struct ResolutionOutput<'ast> {
    /// The items with every use site resolved, in input order.
    pub items: Vec<Item<'ast>>,
    /// Collected errors.
    pub errors: Vec<CompilationError>,
}

/// Lexical context of the signature being resolved.
struct Frame<'ast> {
    /// Identity of the signature; `None` for the global frame.
    owner: Option<*const ()>,
    params: FxHashMap<&'ast str, &'ast Param<'ast>>,
    receiver: Option<&'ast str>,
}

impl<'ast> Frame<'ast> {
    fn global() -> Self {
        Self {
            owner: None,
            params: FxHashMap::default(),
            receiver: None,
        }
    }

    fn new(owner: *const (), receiver: Option<&'ast str>, params: Node<'ast>) -> Self {
        let mut frame = Self {
            owner: Some(owner),
            params: FxHashMap::default(),
            receiver,
        };
        match params {
            Node::List(list) => {
                for param in list.items.iter().filter_map(|item| item.narrow::<Param>()) {
                    frame.params.insert(param.name, param);
                }
            }
            Node::Param(param) => {
                frame.params.insert(param.name, param);
            }
            _ => {}
        }
        frame
    }
}

/// What [`ResolutionPass::resolve_body`] found.
enum Body<'ast> {
    /// Resolved earlier; the memoised signature.
    Done(Node<'ast>),
    /// Already on the resolution stack.
    Recursive,
    /// The newly resolved body.
    Fresh(Node<'ast>),
}

/// Pass 2: resolve references against a populated [`Scope`].
pub struct ResolutionPass<'a, 'ast> {
    builder: AstBuilder<'ast>,
    scope: &'a Scope<'ast>,
    frames: Vec<Frame<'ast>>,
    /// Resolved declaration by the identity of its unresolved original.
    resolved: FxHashMap<*const (), Node<'ast>>,
    /// Resolved use site by its identity and the enclosing signature's.
    uses: FxHashMap<(*const (), Option<*const ()>), Node<'ast>>,
    /// Declarations whose children are being resolved.
    in_progress: FxHashSet<*const ()>,
    errors: Vec<CompilationError>,
}

impl<'a, 'ast> ResolutionPass<'a, 'ast> {
    /// Create a pass allocating its rewritten nodes in `arena`.
    pub fn new(arena: &'ast Bump, scope: &'a Scope<'ast>) -> Self {
        Self {
            builder: AstBuilder::new(arena),
            scope,
            frames: Vec::new(),
            resolved: FxHashMap::default(),
            uses: FxHashMap::default(),
            in_progress: FxHashSet::default(),
            errors: Vec::new(),
        }
    }

    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn run(mut self, items: &[Item<'ast>]) -> ResolutionOutput<'ast> {
        let items = items.iter().map(|item| self.resolve_item(*item)).collect();
        debug!(
            "resolution pass: {} declarations and {} use sites resolved, {} errors",
            self.resolved.len(),
            self.uses.len(),
            self.errors.len()
        );
        ResolutionOutput {
            items,
            errors: self.errors,
        }
    }

    fn resolve_item(&mut self, item: Item<'ast>) -> Item<'ast> {
        match item {
            Item::Dim(dim) => Item::Dim(self.resolve_dim(dim)),
            Item::Function(overload) => Item::Function(self.resolve_function(overload)),
            Item::Method { receiver, overload } => Item::Method {
                receiver,
                overload: self.resolve_method(Some(receiver), overload),
            },
        }
    }

    fn current_receiver(&self) -> Option<&'ast str> {
        self.frames.last().and_then(|frame| frame.receiver)
    }

    fn owner(&self) -> Option<*const ()> {
        self.frames.last().and_then(|frame| frame.owner)
    }

    fn local(&self, name: &str) -> Option<&'ast Param<'ast>> {
        self.frames
            .last()
            .and_then(|frame| frame.params.get(name).copied())
    }

    // ==========================================================================
    // Signatures
    // ==========================================================================

    /// Resolve a signature body under a fresh frame.
    fn resolve_body(
        &mut self,
        original: Node<'ast>,
        receiver: Option<&'ast str>,
        params: Node<'ast>,
        body: Node<'ast>,
    ) -> Body<'ast> {
        let key = original.addr();
        if let Some(done) = self.resolved.get(&key) {
            return Body::Done(*done);
        }
        if !self.in_progress.insert(key) {
            return Body::Recursive;
        }
        self.frames.push(Frame::new(key, receiver, params));
        let resolved = body.accept(self);
        self.frames.pop();
        self.in_progress.remove(&key);
        Body::Fresh(resolved)
    }

    fn resolve_function(
        &mut self,
        overload: &'ast FunctionOverload<'ast>,
    ) -> &'ast FunctionOverload<'ast> {
        let original = Node::FunctionOverload(overload);
        let body = match self.resolve_body(original, None, overload.params, overload.body) {
            Body::Recursive => return overload,
            Body::Done(done) => return done.narrow().unwrap_or(overload),
            Body::Fresh(body) => body,
        };
        let resolved = if body.same(&overload.body) {
            overload
        } else {
            self.builder.arena().alloc(FunctionOverload {
                name: overload.name,
                params: overload.params,
                body,
                span: overload.span,
            })
        };
        self.resolved.insert(original.addr(), Node::FunctionOverload(resolved));
        resolved
    }

    fn resolve_method(
        &mut self,
        receiver: Option<&'ast str>,
        overload: &'ast MethodOverload<'ast>,
    ) -> &'ast MethodOverload<'ast> {
        let original = Node::MethodOverload(overload);
        let body = match self.resolve_body(original, receiver, overload.params, overload.body) {
            Body::Recursive => return overload,
            Body::Done(done) => return done.narrow().unwrap_or(overload),
            Body::Fresh(body) => body,
        };
        let resolved = if body.same(&overload.body) {
            overload
        } else {
            self.builder.arena().alloc(MethodOverload {
                name: overload.name,
                params: overload.params,
                body,
                span: overload.span,
            })
        };
        self.resolved.insert(original.addr(), Node::MethodOverload(resolved));
        resolved
    }

    /// Resolve a dim's extent in the global frame. A dim whose extent
    /// refers back to itself keeps the unresolved node.
    fn resolve_dim(&mut self, dim: &'ast Dim<'ast>) -> &'ast Dim<'ast> {
        let key = Node::Dim(dim).addr();
        if let Some(done) = self.resolved.get(&key) {
            return done.narrow().unwrap_or(dim);
        }
        if !self.in_progress.insert(key) {
            return dim;
        }
        self.frames.push(Frame::global());
        let extent = dim.extent.accept(self);
        self.frames.pop();
        self.in_progress.remove(&key);

        let resolved = if extent.same(&dim.extent) {
            dim
        } else {
            self.builder.arena().alloc(Dim {
                name: dim.name,
                extent,
                span: dim.span(),
            })
        };
        self.resolved.insert(key, Node::Dim(resolved));
        resolved
    }

    // ==========================================================================
    // Use sites
    // ==========================================================================

    fn lookup(
        &mut self,
        reference: &'ast Reference<'ast>,
        parens: Option<Node<'ast>>,
    ) -> Result<(Ty, Target<'ast>), CompilationError> {
        let scope = self.scope;
        let name = reference.name;
        let span = reference.span;

        if let Some(receiver) = reference.receiver {
            let methods =
                scope
                    .receiver(receiver)
                    .ok_or_else(|| CompilationError::UnknownReceiver {
                        receiver: receiver.to_string(),
                        name: name.to_string(),
                        span,
                    })?;
            let method = methods
                .method(name)
                .ok_or_else(|| CompilationError::UnknownName {
                    name: format!("{receiver}.{name}"),
                    span,
                })?;
            return self.call_method(method, parens, span);
        }

        if parens.is_none() {
            if let Some(param) = self.local(name) {
                return Ok((param.ty(), Target::Param(param)));
            }
        }
        if let Some(method) = self
            .current_receiver()
            .and_then(|receiver| scope.receiver(receiver))
            .and_then(|methods| methods.method(name))
        {
            return self.call_method(method, parens, span);
        }
        if parens.is_none() {
            if let Some(dim) = scope.dim(name) {
                let dim = self.resolve_dim(dim);
                return Ok((dim.ty(), Target::Dim(dim)));
            }
        }
        if let Some(function) = scope.function(name) {
            return self.call_function(function, parens, span);
        }
        Err(CompilationError::UnknownName {
            name: name.to_string(),
            span,
        })
    }

    fn arguments(&self, parens: Option<Node<'ast>>, span: Span) -> Node<'ast> {
        parens.unwrap_or_else(|| Node::List(self.builder.list(&[], span)))
    }

    fn call_function(
        &mut self,
        function: &Function<'ast>,
        parens: Option<Node<'ast>>,
        span: Span,
    ) -> Result<(Ty, Target<'ast>), CompilationError> {
        let args = self.arguments(parens, span);
        let candidate = function.resolve(&args, span)?;
        if self.in_progress.contains(&Node::from(candidate).addr()) {
            return Ok((Ty::Unknown, Target::Function(candidate)));
        }
        let resolved = self.resolve_function(candidate);
        Ok((resolved.result_ty(), Target::Function(resolved)))
    }

    fn call_method(
        &mut self,
        method: &Method<'ast>,
        parens: Option<Node<'ast>>,
        span: Span,
    ) -> Result<(Ty, Target<'ast>), CompilationError> {
        let args = self.arguments(parens, span);
        let candidate = method.resolve(&args, span)?;
        if self.in_progress.contains(&Node::from(candidate).addr()) {
            return Ok((Ty::Unknown, Target::Method(candidate)));
        }
        let resolved = self.resolve_method(Some(method.receiver), candidate);
        Ok((resolved.result_ty(), Target::Method(resolved)))
    }

    /// Visit every item, returning the new items if any of them changed.
    fn resolve_items(&mut self, items: &'ast [Node<'ast>]) -> Option<Vec<Node<'ast>>> {
        let resolved: Vec<Node<'ast>> = items.iter().map(|item| item.accept(self)).collect();
        let changed = resolved
            .iter()
            .zip(items)
            .any(|(new, old)| !new.same(old));
        changed.then_some(resolved)
    }
}

impl<'ast> Visitor<'ast> for ResolutionPass<'_, 'ast> {
    fn visit_reference(&mut self, reference: &'ast Reference<'ast>) -> Node<'ast> {
        let key = (Node::Reference(reference).addr(), self.owner());
        if let Some(done) = self.uses.get(&key) {
            return *done;
        }

        let brackets = reference.brackets.map(|node| node.accept(self));
        let parens = reference.parens.map(|node| node.accept(self));

        // Arguments that failed to resolve were reported already.
        let lookup = if parens.is_some_and(|args| args.ty().is_unknown()) {
            None
        } else {
            match self.lookup(reference, parens) {
                Ok(found) => Some(found),
                Err(err) => {
                    self.errors.push(err);
                    None
                }
            }
        };
        let (ty, target) = match lookup {
            Some((ty, target)) => {
                debug!("resolved {reference} to {} : {ty}", target.node());
                (ty, Some(target))
            }
            None => (Ty::Unknown, None),
        };

        let unchanged = target.is_none()
            && same_child(brackets, reference.brackets)
            && same_child(parens, reference.parens);
        let resolved = if unchanged {
            Node::Reference(reference)
        } else {
            Node::Reference(self.builder.arena().alloc(Reference {
                receiver: reference.receiver,
                name: reference.name,
                brackets,
                parens,
                ty,
                target,
                span: reference.span,
            }))
        };
        self.uses.insert(key, resolved);
        resolved
    }

    fn visit_list(&mut self, list: &'ast List<'ast>) -> Node<'ast> {
        match self.resolve_items(list.items) {
            Some(items) => Node::List(self.builder.list(&items, list.span)),
            None => Node::List(list),
        }
    }

    fn visit_block(&mut self, block: &'ast Block<'ast>) -> Node<'ast> {
        match self.resolve_items(block.items) {
            Some(items) => Node::Block(self.builder.block(&items, block.span)),
            None => Node::Block(block),
        }
    }

    fn visit_dim(&mut self, dim: &'ast Dim<'ast>) -> Node<'ast> {
        Node::Dim(self.resolve_dim(dim))
    }

    fn visit_function_overload(&mut self, overload: &'ast FunctionOverload<'ast>) -> Node<'ast> {
        Node::FunctionOverload(self.resolve_function(overload))
    }

    fn visit_method_overload(&mut self, overload: &'ast MethodOverload<'ast>) -> Node<'ast> {
        let receiver = self.current_receiver();
        Node::MethodOverload(self.resolve_method(receiver, overload))
    }
}

fn same_child(a: Option<Node<'_>>, b: Option<Node<'_>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.same(&b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::DeclarationPass;
    use biprog_core::UnitOptions;

    struct Model<'a> {
        b: AstBuilder<'a>,
        items: Vec<Item<'a>>,
    }

    impl<'a> Model<'a> {
        fn new(arena: &'a Bump) -> Self {
            Self {
                b: AstBuilder::new(arena),
                items: Vec::new(),
            }
        }

        fn params(&self, params: &[(&str, Ty)]) -> Node<'a> {
            let s = Span::default();
            let items: Vec<Node<'a>> = params
                .iter()
                .map(|(name, ty)| {
                    Node::from(self.b.param(name, self.b.type_ref(ty.clone(), s), s))
                })
                .collect();
            self.b.list(&items, s).into()
        }

        fn function(
            &mut self,
            name: &str,
            params: &[(&str, Ty)],
            body: &[Node<'a>],
        ) -> &'a FunctionOverload<'a> {
            let s = Span::default();
            let body = self.b.block(body, s);
            let f = self
                .b
                .function_overload(name, Some(self.params(params)), Some(body.into()), s)
                .unwrap();
            self.items.push(Item::Function(f));
            f
        }

        fn method(
            &mut self,
            receiver: &'a str,
            name: &str,
            params: &[(&str, Ty)],
            body: &[Node<'a>],
        ) {
            let s = Span::default();
            let body = self.b.block(body, s);
            let m = self
                .b
                .method_overload(name, Some(self.params(params)), Some(body.into()), s)
                .unwrap();
            self.items.push(Item::Method { receiver, overload: m });
        }

        fn call(&self, receiver: Option<&str>, name: &str, args: &[Node<'a>]) -> Node<'a> {
            let s = Span::default();
            let args = self.b.list(args, s);
            self.b.reference(receiver, name, None, Some(args.into()), s).into()
        }

        fn resolve(&self, arena: &'a Bump) -> ResolutionOutput<'a> {
            let mut scope = Scope::new();
            let declared = DeclarationPass::new(&mut scope, &UnitOptions::new()).run(&self.items);
            assert!(declared.errors.is_empty(), "{:?}", declared.errors);
            ResolutionPass::new(arena, &scope).run(&self.items)
        }
    }

    fn body_tail<'a>(item: &Item<'a>) -> &'a Reference<'a> {
        let body = match *item {
            Item::Function(f) => f.body,
            Item::Method { overload, .. } => overload.body,
            Item::Dim(_) => panic!("dims have no body"),
        };
        body.narrow::<Block>()
            .and_then(|block| block.tail())
            .and_then(|tail| tail.narrow::<Reference>())
            .expect("body ends with a reference")
    }

    #[test]
    fn calls_take_the_type_of_the_selected_overload() {
        let arena = Bump::new();
        let mut m = Model::new(&arena);
        let s = Span::default();
        let y = m.b.name_ref("y", s);
        let call = m.call(None, "f", &[y]);
        m.function("g", &[("y", Ty::Int)], &[call]);
        let x = m.b.name_ref("x", s);
        m.function("f", &[("x", Ty::Int)], &[x]);
        let yes = m.b.boolean(true, s);
        m.function("f", &[("x", Ty::Real)], &[yes]);

        let output = m.resolve(&arena);
        assert!(output.errors.is_empty(), "{:?}", output.errors);

        let call = body_tail(&output.items[0]);
        assert_eq!(call.ty, Ty::Int);
        // The call's target is the same node the item list carries.
        let target = call.target.expect("resolved").node();
        assert!(target.same(&output.items[1].node()));
        assert_eq!(body_tail(&output.items[1]).ty, Ty::Int);
    }

    #[test]
    fn unknown_names_are_reported_and_siblings_continue() {
        let arena = Bump::new();
        let mut m = Model::new(&arena);
        let s = Span::default();
        let missing = m.b.name_ref("missing", s);
        let nobody = m.call(Some("nobody"), "f", &[]);
        let x = m.b.name_ref("x", s);
        m.function("f", &[("x", Ty::Real)], &[missing, nobody, x]);

        let output = m.resolve(&arena);
        assert_eq!(output.errors.len(), 2);
        assert!(matches!(
            &output.errors[0],
            CompilationError::UnknownName { name, .. } if name == "missing"
        ));
        assert!(matches!(
            &output.errors[1],
            CompilationError::UnknownReceiver { receiver, .. } if receiver == "nobody"
        ));
        assert_eq!(body_tail(&output.items[0]).ty, Ty::Real);
    }

    #[test]
    fn ambiguous_calls_are_reported_at_the_call_site() {
        let arena = Bump::new();
        let mut m = Model::new(&arena);
        let s = Span::default();
        m.function("f", &[("a", Ty::Int), ("b", Ty::Real)], &[]);
        m.function("f", &[("a", Ty::Real), ("b", Ty::Int)], &[]);
        let (one, two) = (m.b.int(1, s), m.b.int(2, s));
        let call = m.call(None, "f", &[one, two]);
        // An argument built from the ambiguous call is not reported again.
        let outer = m.call(None, "f", &[call, two]);
        m.function("main", &[], &[outer]);

        let output = m.resolve(&arena);
        assert_eq!(output.errors.len(), 1);
        match &output.errors[0] {
            CompilationError::AmbiguousOverload { args, candidates, .. } => {
                assert_eq!(args, "1, 2");
                assert_eq!(candidates.len(), 2);
            }
            other => panic!("expected AmbiguousOverload, got {other:?}"),
        }
        assert!(body_tail(&output.items[2]).ty.is_unknown());
    }

    #[test]
    fn recursion_yields_unknown() {
        let arena = Bump::new();
        let mut m = Model::new(&arena);
        let s = Span::default();
        let n = m.b.name_ref("n", s);
        let call = m.call(None, "loop", &[n]);
        m.function("loop", &[("n", Ty::Int)], &[call]);

        let output = m.resolve(&arena);
        assert!(output.errors.is_empty());
        let call = body_tail(&output.items[0]);
        assert!(call.ty.is_unknown());
        assert!(call.is_resolved());
    }

    #[test]
    fn methods_resolve_inside_their_receiver() {
        let arena = Bump::new();
        let mut m = Model::new(&arena);
        let s = Span::default();
        let v = m.b.name_ref("v", s);
        m.method("model", "rate", &[("v", Ty::Real)], &[v]);
        // Unqualified inside the receiver, qualified outside it.
        let one = m.b.int(1, s);
        let inner = m.call(None, "rate", &[one]);
        m.method("model", "step", &[], &[inner]);
        let outer = m.call(Some("model"), "step", &[]);
        m.function("run", &[], &[outer]);

        let output = m.resolve(&arena);
        assert!(output.errors.is_empty(), "{:?}", output.errors);
        assert_eq!(body_tail(&output.items[1]).ty, Ty::Real);
        assert_eq!(body_tail(&output.items[2]).ty, Ty::Real);
        assert!(matches!(
            body_tail(&output.items[2]).target,
            Some(Target::Method(_))
        ));
    }

    #[test]
    fn dims_and_indices() {
        let arena = Bump::new();
        let mut m = Model::new(&arena);
        let s = Span::default();
        let ten = m.b.int(10, s);
        let n = m.b.dim("n", Some(ten), s).unwrap();
        m.items.push(Item::Dim(n));
        let i = m.b.name_ref("i", s);
        let indexed = m.b.reference(None, "n", Some(i), None, s);
        m.function("at", &[("i", Ty::Int)], &[Node::from(indexed)]);

        let output = m.resolve(&arena);
        assert!(output.errors.is_empty(), "{:?}", output.errors);
        let use_site = body_tail(&output.items[1]);
        assert_eq!(use_site.ty, Ty::Int);
        assert!(matches!(use_site.target, Some(Target::Dim(d)) if std::ptr::eq(d, n)));
        let index = use_site.brackets.and_then(|b| b.narrow::<Reference>()).unwrap();
        assert!(matches!(index.target, Some(Target::Param(_))));
    }

    #[test]
    fn each_node_is_resolved_once() {
        let arena = Bump::new();
        let mut m = Model::new(&arena);
        let s = Span::default();
        let x = m.b.name_ref("x", s);
        // One reference node shared by two positions.
        m.function("twice", &[("x", Ty::Int)], &[x, x]);

        let output = m.resolve(&arena);
        let Item::Function(f) = output.items[0] else {
            panic!("expected a function");
        };
        let block = f.body.narrow::<Block>().unwrap();
        assert!(block.items[0].same(&block.items[1]));
        assert!(!block.items[0].same(&x));
    }

    #[test]
    fn use_sites_see_the_resolved_dim() {
        let arena = Bump::new();
        let mut m = Model::new(&arena);
        let s = Span::default();
        let ten = m.b.int(10, s);
        let n = m.b.dim("n", Some(ten), s).unwrap();
        let extent = m.b.name_ref("n", s);
        let dim_m = m.b.dim("m", Some(extent), s).unwrap();
        m.items.push(Item::Dim(n));
        m.items.push(Item::Dim(dim_m));
        let use_m = m.b.name_ref("m", s);
        m.function("f", &[], &[use_m]);

        let output = m.resolve(&arena);
        assert!(output.errors.is_empty(), "{:?}", output.errors);
        let Some(Target::Dim(target)) = body_tail(&output.items[2]).target else {
            panic!("expected a dim target");
        };
        let extent = target.extent.narrow::<Reference>().unwrap();
        assert!(extent.is_resolved());
        assert!(matches!(extent.target, Some(Target::Dim(d)) if std::ptr::eq(d, n)));
        assert!(Node::Dim(target).same(&output.items[1].node()));
    }

    #[test]
    fn dim_extents_ignore_the_enclosing_parameters() {
        let arena = Bump::new();
        let mut m = Model::new(&arena);
        let s = Span::default();
        let ten = m.b.int(10, s);
        let n = m.b.dim("n", Some(ten), s).unwrap();
        let extent = m.b.name_ref("n", s);
        let dim_m = m.b.dim("m", Some(extent), s).unwrap();
        let use_m = m.b.name_ref("m", s);
        // `n` is a Real parameter here, but the extent binds to the global dim.
        m.function("f", &[("n", Ty::Real)], &[use_m]);
        m.items.push(Item::Dim(n));
        m.items.push(Item::Dim(dim_m));

        let output = m.resolve(&arena);
        assert!(output.errors.is_empty(), "{:?}", output.errors);
        let Item::Dim(resolved) = output.items[2] else {
            panic!("expected a dim");
        };
        let extent = resolved.extent.narrow::<Reference>().unwrap();
        assert!(matches!(extent.target, Some(Target::Dim(_))));
        assert_eq!(extent.ty, Ty::Int);
    }

    #[test]
    fn shared_use_sites_bind_per_signature() {
        let arena = Bump::new();
        let mut m = Model::new(&arena);
        let s = Span::default();
        let x = m.b.name_ref("x", s);
        m.function("f", &[("x", Ty::Int)], &[x]);
        m.function("g", &[("x", Ty::Bool)], &[x]);

        let output = m.resolve(&arena);
        assert!(output.errors.is_empty(), "{:?}", output.errors);
        assert_eq!(body_tail(&output.items[0]).ty, Ty::Int);
        assert_eq!(body_tail(&output.items[1]).ty, Ty::Bool);
    }
}
