//! Matching of expressions modulo unfolding of definitions.
//!
//! Strict matching, dummy matching, unification, and equality maps
//! all walk two expressions in parallel in the same way,
//! differing only in what they do when
//! a variable of the source expression is reached.
//! This is captured by the `Leaf` trait.

use crate::unify::Error;
use crate::{Expr, Scope, Translation, Var};
use fnv::FnvHashSet;

/// Treatment of source variables during a walk.
pub(crate) trait Leaf {
    /// Bindings at some point of the walk, to return to when backtracking.
    type Saved;

    /// If true, source variables are only compared with target variables,
    /// and definition applications on the target side are unfolded first.
    const VAR_TARGET: bool;

    fn leaf<S: Scope + ?Sized>(
        &mut self,
        scope: &S,
        fuel: &mut Option<usize>,
        src: &Var,
        tgt: &Expr,
    ) -> Result<(), Error>;

    fn save(&self) -> Self::Saved;

    fn restore(&mut self, saved: Self::Saved);
}

/// Consume one unit of fuel.
fn burn(fuel: &mut Option<usize>) -> Result<(), Error> {
    match fuel {
        Some(0) => Err(Error::FuelExhausted),
        Some(n) => {
            *n -= 1;
            Ok(())
        }
        None => Ok(()),
    }
}

/// Unfold the root of a definition application.
fn unfold(expr: &Expr, fuel: &mut Option<usize>) -> Result<Option<Expr>, Error> {
    match expr.get_appl().and_then(|a| a.unfold()) {
        Some(unfolded) => {
            burn(fuel)?;
            Ok(Some(unfolded))
        }
        None => Ok(None),
    }
}

fn unfold_head(expr: &Expr, fuel: &mut Option<usize>) -> Result<Expr, Error> {
    let mut expr = expr.clone();
    while let Some(unfolded) = unfold(&expr, fuel)? {
        expr = unfolded
    }
    Ok(expr)
}

/// Walk `src` and `tgt` in parallel, unfolding definitions where necessary.
pub(crate) fn walk<S, L>(
    scope: &S,
    fuel: &mut Option<usize>,
    leaf: &mut L,
    src: &Expr,
    tgt: &Expr,
) -> Result<(), Error>
where
    S: Scope + ?Sized,
    L: Leaf,
{
    trace!("walk {} against {}", src, tgt);
    let (a, b) = match (src, tgt) {
        (Expr::Var(v), _) if L::VAR_TARGET && tgt.depth() > 0 => {
            let tgt = unfold_head(tgt, fuel)?;
            return leaf.leaf(scope, fuel, v, &tgt);
        }
        (Expr::Var(v), _) => return leaf.leaf(scope, fuel, v, tgt),
        (Expr::Appl(_), Expr::Var(_)) => {
            return match unfold(src, fuel)? {
                Some(src) => walk(scope, fuel, leaf, &src, tgt),
                None => Err(Error::Mismatch(src.clone(), tgt.clone())),
            }
        }
        (Expr::Appl(a), Expr::Appl(b)) => (a, b),
    };

    let (da, db) = (a.op().depth(), b.op().depth());
    if scope.operator_eq(a.op(), b.op()) {
        let saved = leaf.save();
        let children = a
            .args()
            .iter()
            .zip(b.args())
            .try_for_each(|(x, y)| walk(scope, fuel, leaf, x, y));
        match children {
            Ok(()) => return Ok(()),
            Err(e @ Error::FuelExhausted) => return Err(e),
            Err(e) if da == 0 && db == 0 => return Err(e),
            Err(e) => {
                trace!("retry {} after unfolding, because {}", a.op(), e);
                leaf.restore(saved)
            }
        }
    }

    let mismatch = || Error::Mismatch(src.clone(), tgt.clone());
    if da == db {
        match (unfold(src, fuel)?, unfold(tgt, fuel)?) {
            (Some(src), Some(tgt)) => walk(scope, fuel, leaf, &src, &tgt),
            _ => Err(mismatch()),
        }
    } else if da > db {
        let src = unfold(src, fuel)?.ok_or_else(mismatch)?;
        walk(scope, fuel, leaf, &src, tgt)
    } else {
        let tgt = unfold(tgt, fuel)?.ok_or_else(mismatch)?;
        walk(scope, fuel, leaf, src, &tgt)
    }
}

/// Variables match only themselves.
pub(crate) struct Strict;

impl Leaf for Strict {
    type Saved = ();
    const VAR_TARGET: bool = true;

    fn leaf<S: Scope + ?Sized>(
        &mut self,
        _: &S,
        _: &mut Option<usize>,
        src: &Var,
        tgt: &Expr,
    ) -> Result<(), Error> {
        match tgt {
            Expr::Var(w) if w == src => Ok(()),
            _ => Err(Error::Mismatch(Expr::var(src.clone()), tgt.clone())),
        }
    }

    fn save(&self) {}

    fn restore(&mut self, _: ()) {}
}

/// Dummies match any variable outside the blacklist, consistently.
struct Dummies<'a> {
    blacklist: &'a FnvHashSet<Var>,
    translation: Translation,
}

impl<'a> Leaf for Dummies<'a> {
    type Saved = Translation;
    const VAR_TARGET: bool = true;

    fn leaf<S: Scope + ?Sized>(
        &mut self,
        scope: &S,
        _: &mut Option<usize>,
        src: &Var,
        tgt: &Expr,
    ) -> Result<(), Error> {
        let w = match tgt {
            Expr::Var(w) if src.is_dummy() || w == src => w,
            _ => return Err(Error::Mismatch(Expr::var(src.clone()), tgt.clone())),
        };
        if !src.is_dummy() {
            return Ok(());
        }
        if !scope.kind_eq(src.kind(), w.kind()) {
            return Err(Error::KindMismatch {
                var: src.clone(),
                expr: tgt.clone(),
            });
        }
        match self.translation.get(src) {
            Some(prev) if prev == w => Ok(()),
            Some(prev) => Err(Error::Rebind {
                var: src.clone(),
                previous: Expr::var(prev.clone()),
                target: tgt.clone(),
            }),
            None if self.blacklist.contains(w) => Err(Error::Blacklisted(src.clone(), w.clone())),
            None => {
                trace!("dummy {} stands for {}", src, w);
                self.translation.insert(src.clone(), w.clone());
                Ok(())
            }
        }
    }

    fn save(&self) -> Translation {
        self.translation.clone()
    }

    fn restore(&mut self, saved: Translation) {
        self.translation = saved
    }
}

/// Return true if two expressions are equal modulo unfolding of definitions.
///
/// ~~~
/// # use hilbert::{matches, Expr, Fresh, Namespace};
/// let fresh = Fresh::new();
/// let mut ns = Namespace::new();
/// let wff = ns.add_kind("wff", &fresh)?;
/// ns.add_functor("->", wff.clone(), vec![wff.clone(); 2], &fresh)?;
/// ns.add_functor("-.", wff.clone(), vec![wff.clone()], &fresh)?;
/// let p = Expr::var(ns.add_variable("p", wff.clone(), &fresh)?);
/// let q = Expr::var(ns.add_variable("q", wff, &fresh)?);
///
/// // or p q := -. p -> q
/// let or_def = ns.appl("->", vec![ns.appl("-.", vec![p.clone()])?, q.clone()])?;
/// let pv = p.get_var().unwrap().clone();
/// let qv = q.get_var().unwrap().clone();
/// ns.add_definition("\\/", vec![pv, qv], or_def, &fresh)?;
///
/// let or_qp = ns.appl("\\/", vec![q.clone(), p.clone()])?;
/// let imp_nq_p = ns.appl("->", vec![ns.appl("-.", vec![q.clone()])?, p.clone()])?;
/// assert!(matches(&or_qp, &imp_nq_p, &ns));
/// assert!(matches(&imp_nq_p, &or_qp, &ns));
/// assert!(!matches(&or_qp, &ns.appl("\\/", vec![p, q])?, &ns));
/// # Ok::<_, hilbert::Error>(())
/// ~~~
pub fn matches<S: Scope + ?Sized>(a: &Expr, b: &Expr, scope: &S) -> bool {
    matches_with_fuel(a, b, scope, &mut None).is_ok()
}

/// Like [`matches`], but fail if more than `fuel` unfoldings are needed.
pub fn matches_with_fuel<S: Scope + ?Sized>(
    a: &Expr,
    b: &Expr,
    scope: &S,
    fuel: &mut Option<usize>,
) -> Result<(), Error> {
    walk(scope, fuel, &mut Strict, a, b)
}

/// Match two expressions modulo unfolding of definitions,
/// where dummy variables in `a` may stand for variables in `b`
/// that are not in `blacklist`.
///
/// On success, return where each dummy of `a` was mapped to.
pub fn dummy_matches<S: Scope + ?Sized>(
    a: &Expr,
    b: &Expr,
    blacklist: &FnvHashSet<Var>,
    scope: &S,
) -> Result<Translation, Error> {
    dummy_matches_with_fuel(a, b, blacklist, scope, &mut None)
}

/// Like [`dummy_matches`], but fail if more than `fuel` unfoldings are needed.
pub fn dummy_matches_with_fuel<S: Scope + ?Sized>(
    a: &Expr,
    b: &Expr,
    blacklist: &FnvHashSet<Var>,
    scope: &S,
    fuel: &mut Option<usize>,
) -> Result<Translation, Error> {
    let mut dummies = Dummies {
        blacklist,
        translation: Translation::new(),
    };
    walk(scope, fuel, &mut dummies, a, b)?;
    Ok(dummies.translation)
}
