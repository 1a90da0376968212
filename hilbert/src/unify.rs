//! One-directional unification and equality maps.

use crate::matching::{walk, Leaf, Strict};
use crate::{Expr, Scope, Subst, Translation, Var};
use core::fmt;

/// Reasons why two expressions could not be matched or unified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// the two subexpressions cannot be made equal
    Mismatch(Expr, Expr),
    /// a variable was already bound to an expression that does not match the target
    Rebind {
        var: Var,
        previous: Expr,
        target: Expr,
    },
    /// a dummy variable would stand for a variable in the blacklist
    Blacklisted(Var, Var),
    /// two variables would be mapped to the same variable
    NotInjective { target: Var, first: Var, second: Var },
    /// a variable would be bound to an expression of a different kind
    KindMismatch { var: Var, expr: Expr },
    /// more definitions would have to be unfolded than allowed
    FuelExhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Mismatch(src, tgt) => write!(f, "{} does not match {}", src, tgt),
            Self::Rebind {
                var,
                previous,
                target,
            } => write!(
                f,
                "{} is bound to {}, which does not match {}",
                var, previous, target
            ),
            Self::Blacklisted(dummy, var) => {
                write!(f, "dummy {} must not stand for {}", dummy, var)
            }
            Self::NotInjective {
                target,
                first,
                second,
            } => write!(f, "both {} and {} would be mapped to {}", first, second, target),
            Self::KindMismatch { var, expr } => write!(
                f,
                "{} of kind {} cannot stand for {} of kind {}",
                var,
                var.kind(),
                expr,
                expr.kind()
            ),
            Self::FuelExhausted => write!(f, "unfolding limit reached"),
        }
    }
}

/// Source variables are bound to target expressions.
struct Assign(Subst);

impl Leaf for Assign {
    type Saved = Subst;
    const VAR_TARGET: bool = false;

    fn leaf<S: Scope + ?Sized>(
        &mut self,
        scope: &S,
        fuel: &mut Option<usize>,
        src: &Var,
        tgt: &Expr,
    ) -> Result<(), Error> {
        if let Some(previous) = self.0.get(src) {
            let previous = previous.clone();
            return walk(scope, fuel, &mut Strict, &previous, tgt).map_err(|e| match e {
                Error::FuelExhausted => e,
                _ => Error::Rebind {
                    var: src.clone(),
                    previous,
                    target: tgt.clone(),
                },
            });
        }
        if !scope.kind_eq(src.kind(), tgt.kind()) {
            return Err(Error::KindMismatch {
                var: src.clone(),
                expr: tgt.clone(),
            });
        }
        trace!("bind {} to {}", src, tgt);
        self.0.insert(src.clone(), tgt.clone());
        Ok(())
    }

    fn save(&self) -> Subst {
        self.0.clone()
    }

    fn restore(&mut self, saved: Subst) {
        self.0 = saved
    }
}

/// Source variables are mapped injectively to target variables.
struct Bijection(Translation);

impl Leaf for Bijection {
    type Saved = Translation;
    const VAR_TARGET: bool = true;

    fn leaf<S: Scope + ?Sized>(
        &mut self,
        scope: &S,
        _: &mut Option<usize>,
        src: &Var,
        tgt: &Expr,
    ) -> Result<(), Error> {
        let w = tgt
            .get_var()
            .ok_or_else(|| Error::Mismatch(Expr::var(src.clone()), tgt.clone()))?;
        if let Some(prev) = self.0.get(src) {
            return if prev == w {
                Ok(())
            } else {
                Err(Error::Rebind {
                    var: src.clone(),
                    previous: Expr::var(prev.clone()),
                    target: tgt.clone(),
                })
            };
        }
        if let Some(first) = self.0.get_inverse(w) {
            return Err(Error::NotInjective {
                target: w.clone(),
                first: first.clone(),
                second: src.clone(),
            });
        }
        if !scope.kind_eq(src.kind(), w.kind()) {
            return Err(Error::KindMismatch {
                var: src.clone(),
                expr: tgt.clone(),
            });
        }
        self.0.insert(src.clone(), w.clone());
        Ok(())
    }

    fn save(&self) -> Translation {
        self.0.clone()
    }

    fn restore(&mut self, saved: Translation) {
        self.0 = saved
    }
}

/// Extend `subst` such that `source` under `subst` matches `target`.
///
/// A variable of `source` that is already bound in `subst`
/// must be bound to an expression that matches the target.
/// On failure, `subst` is left unchanged.
///
/// ~~~
/// # use hilbert::{matches, unify, Expr, Fresh, Namespace, Subst};
/// # use hilbert::unify::Error;
/// let fresh = Fresh::new();
/// let mut ns = Namespace::new();
/// let wff = ns.add_kind("wff", &fresh)?;
/// ns.add_functor("->", wff.clone(), vec![wff.clone(); 2], &fresh)?;
/// ns.add_functor("-.", wff.clone(), vec![wff.clone()], &fresh)?;
/// let p = Expr::var(ns.add_variable("p", wff.clone(), &fresh)?);
/// let q = Expr::var(ns.add_variable("q", wff, &fresh)?);
///
/// let pattern = ns.appl("->", vec![p.clone(), p.clone()])?;
/// let nq = ns.appl("-.", vec![q.clone()])?;
/// let target = ns.appl("->", vec![nq.clone(), nq.clone()])?;
///
/// let mut subst = Subst::default();
/// unify(&pattern, &target, &mut subst, &ns)?;
/// assert_eq!(subst.get(p.get_var().unwrap()), Some(&nq));
/// assert!(matches(&pattern.subst(&subst), &target, &ns));
///
/// let target = ns.appl("->", vec![nq, q])?;
/// let mut subst = Subst::default();
/// let result = unify(&pattern, &target, &mut subst, &ns);
/// assert!(matches!(result, Err(Error::Rebind { .. })));
/// assert!(subst.is_empty());
/// # Ok::<_, hilbert::Error>(())
/// ~~~
pub fn unify<S: Scope + ?Sized>(
    source: &Expr,
    target: &Expr,
    subst: &mut Subst,
    scope: &S,
) -> Result<(), Error> {
    unify_with_fuel(source, target, subst, scope, &mut None)
}

/// Like [`unify`], but fail if more than `fuel` unfoldings are needed.
pub fn unify_with_fuel<S: Scope + ?Sized>(
    source: &Expr,
    target: &Expr,
    subst: &mut Subst,
    scope: &S,
    fuel: &mut Option<usize>,
) -> Result<(), Error> {
    let mut assign = Assign(subst.clone());
    walk(scope, fuel, &mut assign, source, target)?;
    *subst = assign.0;
    Ok(())
}

/// Determine whether two expressions are equal up to renaming of variables,
/// extending the given translation in place.
///
/// On failure, `translation` is left unchanged.
pub fn equality_map<S: Scope + ?Sized>(
    a: &Expr,
    b: &Expr,
    translation: &mut Translation,
    scope: &S,
) -> Result<(), Error> {
    equality_map_with_fuel(a, b, translation, scope, &mut None)
}

/// Like [`equality_map`], but fail if more than `fuel` unfoldings are needed.
pub fn equality_map_with_fuel<S: Scope + ?Sized>(
    a: &Expr,
    b: &Expr,
    translation: &mut Translation,
    scope: &S,
    fuel: &mut Option<usize>,
) -> Result<(), Error> {
    let mut bijection = Bijection(translation.clone());
    walk(scope, fuel, &mut bijection, a, b)?;
    *translation = bijection.0;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches;
    use crate::testing::Prop;

    fn sound(p: &Prop, source: &Expr, target: &Expr) -> Subst {
        let mut subst = Subst::default();
        unify(source, target, &mut subst, &p.ns).unwrap();
        assert!(matches(&source.subst(&subst), target, &p.ns));
        subst
    }

    #[test]
    fn soundness() {
        let p = Prop::new();
        let (a, b, c) = (p.v(&p.a), p.v(&p.b), p.v(&p.c));
        // modus ponens: a, a -> b
        let src = p.imp(a.clone(), b.clone());
        let tgt = p.imp(p.or(c.clone(), c.clone()), p.not(c.clone()));
        let subst = sound(&p, &src, &tgt);
        assert_eq!(subst.len(), 2);

        // unfolding on the target side
        let src = p.imp(p.not(a.clone()), b.clone());
        let subst = sound(&p, &src, &p.or(c.clone(), b.clone()));
        assert_eq!(subst.get(&p.a), Some(&c));

        // unfolding on the source side
        let src = p.or(a.clone(), b.clone());
        sound(&p, &src, &p.imp(p.not(c.clone()), c.clone()));
    }

    #[test]
    fn equal_depths() {
        let mut p = Prop::new();
        let (a, b, c) = (p.v(&p.a), p.v(&p.b), p.v(&p.c));
        let definiens = p.imp(p.not(a.clone()), b.clone());
        let params = alloc::vec![p.a.clone(), p.b.clone()];
        p.ns.add_definition("or2", params, definiens, &p.fresh).unwrap();

        let not_c = p.not(c.clone());
        let tgt = p.ns.appl("or2", alloc::vec![c.clone(), not_c.clone()]).unwrap();
        let subst = sound(&p, &p.or(a.clone(), b), &tgt);
        assert_eq!(subst.get(&p.a), Some(&c));
        assert_eq!(subst.get(&p.b), Some(&not_c));

        let tgt = p.ns.appl("or2", alloc::vec![c.clone(), c]).unwrap();
        let mut subst = Subst::default();
        assert!(unify(&p.or(a.clone(), a), &tgt, &mut subst, &p.ns).is_ok());
    }

    #[test]
    fn rebinding_modulo_definitions() {
        let p = Prop::new();
        let (a, b) = (p.v(&p.a), p.v(&p.b));
        // a := (\/ b b), then a must match (-> (-. b) b)
        let src = p.imp(a.clone(), a.clone());
        let or_bb = p.or(b.clone(), b.clone());
        let tgt = p.imp(or_bb.clone(), p.imp(p.not(b.clone()), b.clone()));
        let subst = sound(&p, &src, &tgt);
        assert_eq!(subst.get(&p.a), Some(&or_bb));

        let tgt = p.imp(or_bb, p.imp(p.not(b.clone()), a));
        let mut subst = Subst::default();
        let err = unify(&src, &tgt, &mut subst, &p.ns);
        assert!(matches!(err, Err(Error::Rebind { .. })));
        assert!(subst.is_empty());
    }

    #[test]
    fn existing_bindings() {
        let p = Prop::new();
        let (a, b, c) = (p.v(&p.a), p.v(&p.b), p.v(&p.c));
        let mut subst: Subst = core::iter::once((p.a.clone(), c.clone())).collect();
        unify(&p.imp(a.clone(), b.clone()), &p.imp(c.clone(), c.clone()), &mut subst, &p.ns).unwrap();
        assert_eq!(subst.get(&p.b), Some(&c));
        assert!(unify(&a, &b, &mut subst, &p.ns).is_err());
        assert_eq!(subst.len(), 2);
    }

    #[test]
    fn kinds() {
        let p = Prop::new();
        let eq = p.eq(p.v(&p.x), p.v(&p.y));
        let mut subst = Subst::default();
        let err = unify(&p.v(&p.a), &p.v(&p.x), &mut subst, &p.ns);
        assert!(matches!(err, Err(Error::KindMismatch { .. })));
        unify(&p.v(&p.a), &eq, &mut subst, &p.ns).unwrap();
    }

    #[test]
    fn mismatch() {
        let p = Prop::new();
        let (a, b) = (p.v(&p.a), p.v(&p.b));
        let src = p.not(a.clone());
        let tgt = p.imp(a, b);
        let mut subst = Subst::default();
        assert_eq!(
            unify(&src, &tgt, &mut subst, &p.ns),
            Err(Error::Mismatch(src, tgt))
        );
    }

    #[test]
    fn equality_maps() {
        let p = Prop::new();
        let (a, b, c) = (p.v(&p.a), p.v(&p.b), p.v(&p.c));
        let mut tr = Translation::new();
        equality_map(&p.imp(a.clone(), b.clone()), &p.imp(b.clone(), c.clone()), &mut tr, &p.ns)
            .unwrap();
        assert_eq!(tr.get(&p.a), Some(&p.b));
        assert_eq!(tr.get(&p.b), Some(&p.c));

        // extending the translation in place
        equality_map(&p.not(a.clone()), &p.not(b.clone()), &mut tr, &p.ns).unwrap();
        let err = equality_map(&p.not(a.clone()), &p.not(c.clone()), &mut tr, &p.ns);
        assert!(matches!(err, Err(Error::Rebind { .. })));

        // injectivity
        let err = equality_map(&c, &p.v(&p.b), &mut tr, &p.ns);
        assert!(matches!(err, Err(Error::NotInjective { .. })));
        assert_eq!(tr.len(), 2);

        // variables only map to variables
        let mut tr = Translation::new();
        assert!(equality_map(&a, &p.not(b), &mut tr, &p.ns).is_err());
        assert!(tr.is_empty());
    }
}
