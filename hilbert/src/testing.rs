//! Propositional logic with equality, for tests.

use crate::{DvSet, Expr, Fresh, Kind, Namespace, Operator, Statement, Var};
use alloc::vec;
use alloc::vec::Vec;

pub struct Prop {
    pub fresh: Fresh,
    pub ns: Namespace,
    pub wff: Kind,
    pub set: Kind,
    pub imp: Operator,
    pub not: Operator,
    pub eq: Operator,
    pub f: Operator,
    pub g: Operator,
    /// a \/ b := -. a -> b
    pub or: Operator,
    /// a /\ b := -. (a -> -. b)
    pub and: Operator,
    /// a <-> b := (a -> b) /\ (b -> a)
    pub iff: Operator,
    /// id a := a
    pub id: Operator,
    /// T := z -> z
    pub taut: Operator,
    pub a: Var,
    pub b: Var,
    pub c: Var,
    pub x: Var,
    pub y: Var,
    pub z: Var,
}

fn app(op: &Operator, args: Vec<Expr>) -> Expr {
    Expr::new_appl(op.clone(), args)
}

impl Prop {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let fresh = Fresh::new();
        let mut ns = Namespace::new();
        let wff = ns.add_kind("wff", &fresh).unwrap();
        let set = ns.add_kind("set", &fresh).unwrap();

        let mut functor = |name, result: &Kind, inputs: Vec<&Kind>| {
            let inputs = inputs.into_iter().cloned().collect();
            ns.add_functor(name, result.clone(), inputs, &fresh).unwrap()
        };
        let imp = functor("->", &wff, vec![&wff, &wff]);
        let not = functor("-.", &wff, vec![&wff]);
        let eq = functor("=", &wff, vec![&set, &set]);
        let f = functor("f", &set, vec![&set]);
        let g = functor("g", &set, vec![&set]);

        let [a, b, c] = ["a", "b", "c"].map(|n| ns.add_variable(n, wff.clone(), &fresh).unwrap());
        let [x, y, z] = ["x", "y", "z"].map(|n| ns.add_variable(n, set.clone(), &fresh).unwrap());
        let (ea, eb, ec) = (Expr::var(a.clone()), Expr::var(b.clone()), Expr::var(c.clone()));
        let imp2 = |l: &Expr, r: &Expr| app(&imp, vec![l.clone(), r.clone()]);
        let not1 = |e: &Expr| app(&not, vec![e.clone()]);

        let mut define = |name, params: &[&Var], definiens| {
            let params = params.iter().map(|&v| v.clone()).collect();
            ns.add_definition(name, params, definiens, &fresh).unwrap()
        };
        let or = define("\\/", &[&a, &b], imp2(&not1(&ea), &eb));
        let and = define("/\\", &[&a, &b], not1(&imp2(&ea, &not1(&eb))));
        let and_def = app(&and, vec![imp2(&ea, &eb), imp2(&eb, &ea)]);
        let iff = define("<->", &[&a, &b], and_def);
        let id = define("id", &[&a], ea.clone());
        let taut = define("T", &[], imp2(&ea, &ea));

        let no_dv = DvSet::new();
        let mut axiom = |name, dv: &DvSet, hyps: &[Expr], con: Expr| {
            let st = Statement::new(name, dv, hyps, &con, &fresh);
            ns.add_statement(st).unwrap();
        };
        axiom("ax-mp", &no_dv, &[ea.clone(), imp2(&ea, &eb)], eb.clone());
        axiom("ax-1", &no_dv, &[], imp2(&ea, &imp2(&eb, &ea)));
        let ax2_lhs = imp2(&ea, &imp2(&eb, &ec));
        let ax2_rhs = imp2(&imp2(&ea, &eb), &imp2(&ea, &ec));
        axiom("ax-2", &no_dv, &[], imp2(&ax2_lhs, &ax2_rhs));
        axiom("imp-refl", &no_dv, &[], imp2(&ea, &ea));
        let mut ab = DvSet::new();
        ab.declare(&[a.clone(), b.clone()]).unwrap();
        axiom("ax-dv2", &ab, &[], imp2(&ea, &eb));

        let (ex, ey) = (Expr::var(x.clone()), Expr::var(y.clone()));
        axiom("eq-refl", &no_dv, &[], app(&eq, vec![ey.clone(), ey.clone()]));
        let mut xy = DvSet::new();
        xy.declare(&[x.clone(), y.clone()]).unwrap();
        axiom("ax-dv", &xy, &[], app(&eq, vec![ex, ey]));

        Self {
            fresh,
            ns,
            wff,
            set,
            imp,
            not,
            eq,
            f,
            g,
            or,
            and,
            iff,
            id,
            taut,
            a,
            b,
            c,
            x,
            y,
            z,
        }
    }

    pub fn v(&self, v: &Var) -> Expr {
        Expr::var(v.clone())
    }

    pub fn imp(&self, a: Expr, b: Expr) -> Expr {
        app(&self.imp, vec![a, b])
    }

    pub fn not(&self, a: Expr) -> Expr {
        app(&self.not, vec![a])
    }

    pub fn eq(&self, a: Expr, b: Expr) -> Expr {
        app(&self.eq, vec![a, b])
    }

    pub fn f(&self, a: Expr) -> Expr {
        app(&self.f, vec![a])
    }

    pub fn g(&self, a: Expr) -> Expr {
        app(&self.g, vec![a])
    }

    pub fn or(&self, a: Expr, b: Expr) -> Expr {
        app(&self.or, vec![a, b])
    }

    pub fn and(&self, a: Expr, b: Expr) -> Expr {
        app(&self.and, vec![a, b])
    }

    pub fn iff(&self, a: Expr, b: Expr) -> Expr {
        app(&self.iff, vec![a, b])
    }

    pub fn id(&self, a: Expr) -> Expr {
        app(&self.id, vec![a])
    }

    pub fn taut(&self) -> Expr {
        app(&self.taut, vec![])
    }
}
