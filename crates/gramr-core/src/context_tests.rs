use crate::Context;

#[test]
fn guard_pops_on_drop() {
    let context = Context::new();
    {
        let _outer = context.enter("outer");
        let _inner = context.enter("inner");
        assert_eq!(context.path(), ["outer", "inner"]);
    }
    assert!(context.is_empty());
}

#[test]
fn in_path_scopes_closure() {
    let context = Context::new();
    let seen = context.in_path("json", || context.in_path("string", || context.path()));
    assert_eq!(seen, ["json", "string"]);
    assert_eq!(context.depth(), 0);
}

#[test]
fn guard_restores_depth_on_early_return() {
    fn bail(context: &Context) -> Result<(), &'static str> {
        let _guard = context.enter("step");
        if context.depth() > 0 {
            return Err("early");
        }
        Ok(())
    }

    let context = Context::new();
    assert!(bail(&context).is_err());
    assert!(context.is_empty());
}

#[test]
fn guard_restores_depth_on_panic() {
    let context = Context::new();
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        context.in_path("doomed", || -> i32 { panic!("boom") })
    }));
    assert!(outcome.is_err());
    assert!(context.is_empty());
}
