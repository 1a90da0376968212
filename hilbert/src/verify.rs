//! Verification of proofs.
//!
//! A proof is a sequence of steps that operate on two stacks:
//! the *proof stack* holds proven expressions, and
//! the *mandatory stack* holds expressions that instantiate
//! the mandatory variables of the next statement applied in the proof.

use crate::matching::dummy_matches_with_fuel;
use crate::unify::unify_with_fuel;
use crate::{dv, unify};
use crate::{DvSet, Expr, Fresh, Scope, Stack, Statement, Subst, Symbol, Theorem, Var};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use fnv::FnvHashSet;

/// Proof step.
#[derive(Clone, Debug)]
pub enum ProofStep {
    /// expression to be used as argument for a mandatory variable
    Literal(Expr),
    /// name of a hypothesis, variable, or statement
    Label(String),
}

impl From<Expr> for ProofStep {
    fn from(e: Expr) -> Self {
        Self::Literal(e)
    }
}

impl From<String> for ProofStep {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

impl From<&str> for ProofStep {
    fn from(label: &str) -> Self {
        Self::Label(label.into())
    }
}

impl fmt::Display for ProofStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Literal(e) => e.fmt(f),
            Self::Label(l) => l.fmt(f),
        }
    }
}

/// Verification settings.
#[derive(Clone, Debug)]
pub struct Config {
    /// maximal number of definitions to unfold per comparison of two expressions
    pub fuel: Option<usize>,
    /// check at the end of the proof whether
    /// the declared DV constraints imply the required ones
    ///
    /// Disabling this is unsound: proofs are then accepted
    /// even if the theorem does not declare the DV constraints they rely on.
    pub check_dv: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fuel: None,
            check_dv: true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Ready,
    Running,
    Accepted,
    Rejected,
}

/// Why a proof was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reason {
    /// the proof uses the theorem it proves
    SelfReference(String),
    /// the label is neither a hypothesis nor a symbol
    Unknown(String),
    /// a hypothesis is used while mandatory arguments are pending
    MandatoryNotEmpty { label: String, pending: usize },
    MandatoryCount {
        statement: String,
        expected: usize,
        found: usize,
    },
    /// an argument does not have the kind of its mandatory variable
    KindMismatch {
        statement: String,
        var: Var,
        expr: Expr,
    },
    MissingHypotheses {
        statement: String,
        expected: usize,
        found: usize,
    },
    /// the hypothesis at the given index does not unify with the proof stack
    Unify {
        statement: String,
        index: usize,
        error: unify::Error,
    },
    /// the instantiation violates a DV constraint of the statement
    Dv { statement: String, error: dv::Error },
    EmptyProof,
    StacksNotEmpty { proof: usize, mandatory: usize },
    ConsequentMismatch(unify::Error),
    /// DV constraints required by the proof, but not declared by the theorem
    InsufficientDv(Vec<(Var, Var)>),
    /// the proof was already accepted
    Finished,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::SelfReference(name) => write!(f, "{} refers to itself", name),
            Self::Unknown(label) => write!(f, "{} is neither a hypothesis nor a symbol", label),
            Self::MandatoryNotEmpty { label, pending } => write!(
                f,
                "hypothesis {} used while {} mandatory arguments are pending",
                label, pending
            ),
            Self::MandatoryCount {
                statement,
                expected,
                found,
            } => write!(
                f,
                "{} expects {} mandatory arguments, found {}",
                statement, expected, found
            ),
            Self::KindMismatch {
                statement,
                var,
                expr,
            } => write!(
                f,
                "argument {} of {} has kind {}, expected {}",
                expr,
                statement,
                expr.kind(),
                var.kind()
            ),
            Self::MissingHypotheses {
                statement,
                expected,
                found,
            } => write!(
                f,
                "{} expects {} hypotheses, but the proof stack has {} elements",
                statement, expected, found
            ),
            Self::Unify {
                statement,
                index,
                error,
            } => write!(f, "hypothesis {} of {}: {}", index, statement, error),
            Self::Dv { statement, error } => {
                write!(f, "DV constraint of {} violated: {}", statement, error)
            }
            Self::EmptyProof => write!(f, "proof stack empty at end of proof"),
            Self::StacksNotEmpty { proof, mandatory } => write!(
                f,
                "stacks not empty at end of proof: {} proven and {} mandatory expressions",
                proof, mandatory
            ),
            Self::ConsequentMismatch(e) => write!(f, "consequent does not match proof result: {}", e),
            Self::InsufficientDv(missing) => {
                write!(f, "insufficient distinct-variable constraints, missing")?;
                missing
                    .iter()
                    .try_for_each(|(x, y)| write!(f, " ({}, {})", x, y))
            }
            Self::Finished => write!(f, "proof already accepted"),
        }
    }
}

/// Rejection of a proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reject {
    /// index of the failing step, or `None` if the proof failed at its end
    pub step: Option<usize>,
    pub reason: Reason,
}

impl fmt::Display for Reject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.step {
            Some(step) => write!(f, "proof step {}: {}", step, self.reason),
            None => write!(f, "end of proof: {}", self.reason),
        }
    }
}

/// Verifier for the proof of a theorem.
///
/// Once a proof is rejected, every further step returns the same rejection.
///
/// ~~~
/// # use hilbert::{DvSet, Expr, Fresh, Namespace, Statement, Theorem, Verifier, State};
/// let fresh = Fresh::new();
/// let mut ns = Namespace::new();
/// let set = ns.add_kind("set", &fresh)?;
/// let wff = ns.add_kind("wff", &fresh)?;
/// ns.add_functor("=", wff, vec![set.clone(); 2], &fresh)?;
/// let x = Expr::var(ns.add_variable("x", set.clone(), &fresh)?);
/// let y = Expr::var(ns.add_variable("y", set, &fresh)?);
///
/// // axiom eq-refl: y = y
/// let refl = ns.appl("=", vec![y.clone(), y])?;
/// ns.add_statement(Statement::new("eq-refl", &DvSet::new(), &[], &refl, &fresh))?;
///
/// // theorem: x = x
/// let thm = Theorem::new("T", ns.appl("=", vec![x.clone(), x.clone()])?);
/// let mut verifier = Verifier::new(&thm, &ns, &fresh);
/// verifier.step("x".into())?;
/// verifier.step("eq-refl".into())?;
/// let statement = verifier.finish()?;
/// assert_eq!(verifier.state(), State::Accepted);
/// assert_eq!(verifier.proof_stack().get(0), Some(&ns.appl("=", vec![x.clone(), x])?));
/// assert_eq!(statement.name(), "T");
/// # Ok::<_, hilbert::Error>(())
/// ~~~
pub struct Verifier<'a, S: ?Sized> {
    theorem: &'a Theorem,
    scope: &'a S,
    fresh: &'a Fresh,
    config: Config,
    state: State,
    steps: usize,
    proof_stack: Stack<Expr>,
    mandatory_stack: Stack<Expr>,
    required: DvSet,
    rejection: Option<Reject>,
    accepted: Option<Statement>,
}

impl<'a, S: Scope + ?Sized> Verifier<'a, S> {
    pub fn new(theorem: &'a Theorem, scope: &'a S, fresh: &'a Fresh) -> Self {
        Self::with_config(theorem, scope, fresh, Config::default())
    }

    pub fn with_config(theorem: &'a Theorem, scope: &'a S, fresh: &'a Fresh, config: Config) -> Self {
        Self {
            theorem,
            scope,
            fresh,
            config,
            state: State::Ready,
            steps: 0,
            proof_stack: Stack::new(),
            mandatory_stack: Stack::new(),
            required: DvSet::new(),
            rejection: None,
            accepted: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn proof_stack(&self) -> &Stack<Expr> {
        &self.proof_stack
    }

    pub fn mandatory_stack(&self) -> &Stack<Expr> {
        &self.mandatory_stack
    }

    /// DV constraints that the proof requires so far.
    pub fn required(&self) -> &DvSet {
        &self.required
    }

    fn reject(&mut self, step: Option<usize>, reason: Reason) -> Reject {
        debug!("reject {}: {}", self.theorem.name, reason);
        let reject = Reject { step, reason };
        self.state = State::Rejected;
        self.rejection = Some(reject.clone());
        reject
    }

    fn rejection(&self) -> Reject {
        self.rejection.clone().unwrap_or(Reject {
            step: None,
            reason: Reason::Finished,
        })
    }

    /// Process the next proof step.
    pub fn step(&mut self, step: ProofStep) -> Result<(), Reject> {
        match self.state {
            State::Rejected => return Err(self.rejection()),
            State::Accepted => {
                return Err(Reject {
                    step: Some(self.steps),
                    reason: Reason::Finished,
                })
            }
            State::Ready => {
                info!("verify {}", self.theorem.name);
                self.state = State::Running
            }
            State::Running => (),
        }
        let index = self.steps;
        self.steps += 1;
        debug!("step {}: {}", index, step);
        match self.apply(step) {
            Ok(()) => {
                trace!("proof stack: {}", self.proof_stack);
                trace!("mandatory stack: {}", self.mandatory_stack);
                Ok(())
            }
            Err(reason) => Err(self.reject(Some(index), reason)),
        }
    }

    fn apply(&mut self, step: ProofStep) -> Result<(), Reason> {
        let label = match step {
            ProofStep::Literal(e) => {
                self.mandatory_stack.push(e);
                return Ok(());
            }
            ProofStep::Label(label) => label,
        };
        if label == self.theorem.name {
            return Err(Reason::SelfReference(label));
        }
        let theorem = self.theorem;
        if let Some(hyp) = theorem.get_hypothesis(&label) {
            return self.push_hypothesis(label.clone(), hyp);
        }
        match self.scope.resolve(&label) {
            None => Err(Reason::Unknown(label)),
            Some(Symbol::Hypothesis(hyp)) => self.push_hypothesis(label, &hyp),
            Some(Symbol::Variable(v)) => {
                self.mandatory_stack.push(Expr::var(v));
                Ok(())
            }
            Some(Symbol::Statement(st)) => self.apply_statement(&st),
        }
    }

    fn push_hypothesis(&mut self, label: String, hyp: &Expr) -> Result<(), Reason> {
        if !self.mandatory_stack.is_empty() {
            return Err(Reason::MandatoryNotEmpty {
                label,
                pending: self.mandatory_stack.len(),
            });
        }
        self.proof_stack.push(hyp.total_unfold());
        Ok(())
    }

    fn apply_statement(&mut self, st: &Statement) -> Result<(), Reason> {
        let name = || String::from(st.name());

        let mandatory = st.mandatory();
        let found = self.mandatory_stack.len();
        if found != mandatory.len() {
            return Err(Reason::MandatoryCount {
                statement: name(),
                expected: mandatory.len(),
                found,
            });
        }
        let args = self.mandatory_stack.split_top(found).unwrap_or_default();

        let mut subst = Subst::default();
        for (var, expr) in mandatory.iter().zip(args) {
            if !self.scope.kind_eq(var.kind(), expr.kind()) {
                return Err(Reason::KindMismatch {
                    statement: name(),
                    var: var.clone(),
                    expr,
                });
            }
            subst.insert(var.clone(), expr);
        }

        let hyps = st.hypotheses();
        let found = self.proof_stack.len();
        let popped = self
            .proof_stack
            .split_top(hyps.len())
            .ok_or_else(|| Reason::MissingHypotheses {
                statement: name(),
                expected: hyps.len(),
                found,
            })?;
        for (index, (hyp, expr)) in hyps.iter().zip(&popped).enumerate() {
            let mut fuel = self.config.fuel;
            unify_with_fuel(&hyp.total_unfold(), expr, &mut subst, self.scope, &mut fuel).map_err(
                |error| Reason::Unify {
                    statement: name(),
                    index,
                    error,
                },
            )?;
        }

        let vars = |v: &Var| match subst.get(v) {
            Some(e) => e.variables(),
            None => alloc::vec![v.clone()],
        };
        for (x, y) in st.dv().iter() {
            self.required
                .add_product(&vars(x), &vars(y))
                .map_err(|error| Reason::Dv {
                    statement: name(),
                    error,
                })?;
        }
        debug!("required DV constraints: {}", self.required);

        self.proof_stack
            .push(st.consequent().subst(&subst).total_unfold());
        Ok(())
    }

    /// Check whether the proof proves the theorem,
    /// and if so, return the statement of the theorem.
    pub fn finish(&mut self) -> Result<Statement, Reject> {
        match self.state {
            State::Rejected => return Err(self.rejection()),
            State::Accepted => {
                if let Some(statement) = &self.accepted {
                    return Ok(statement.clone());
                }
            }
            State::Ready | State::Running => (),
        }
        match self.check_end() {
            Ok(statement) => {
                info!("accept {}", self.theorem.name);
                self.state = State::Accepted;
                self.accepted = Some(statement.clone());
                Ok(statement)
            }
            Err(reason) => Err(self.reject(None, reason)),
        }
    }

    fn check_end(&self) -> Result<Statement, Reason> {
        let result = match (self.proof_stack.get(0), self.proof_stack.len()) {
            (None, _) => return Err(Reason::EmptyProof),
            (Some(result), 1) if self.mandatory_stack.is_empty() => result,
            _ => {
                return Err(Reason::StacksNotEmpty {
                    proof: self.proof_stack.len(),
                    mandatory: self.mandatory_stack.len(),
                })
            }
        };

        let thm = self.theorem;
        let blacklist: FnvHashSet<Var> = thm
            .hypotheses
            .iter()
            .map(|(_, h)| h)
            .chain(core::iter::once(&thm.consequent))
            .flat_map(|e| e.variables())
            .filter(|v| !v.is_dummy())
            .collect();

        let mut fuel = self.config.fuel;
        let dummies = dummy_matches_with_fuel(
            &thm.consequent,
            result,
            &blacklist,
            self.scope,
            &mut fuel,
        )
        .map_err(Reason::ConsequentMismatch)?;
        trace!("{} dummies matched", dummies.len());

        if self.config.check_dv {
            let mut universe = blacklist;
            universe.extend(result.variables());
            let required = self.required.restricted(&universe);
            let declared = thm.dv.restricted(&universe);
            if !declared.is_superset_of(&required) {
                return Err(Reason::InsufficientDv(required.difference(&declared)));
            }
        }

        Ok(thm.statement(self.fresh))
    }
}

/// Verify a proof of a theorem in one go.
pub fn verify<S, I>(
    theorem: &Theorem,
    steps: I,
    scope: &S,
    fresh: &Fresh,
    config: Config,
) -> Result<Statement, Reject>
where
    S: Scope + ?Sized,
    I: IntoIterator<Item = ProofStep>,
{
    let mut verifier = Verifier::with_config(theorem, scope, fresh, config);
    steps.into_iter().try_for_each(|step| verifier.step(step))?;
    verifier.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Prop;
    use crate::Namespace;
    use alloc::vec;

    fn steps(p: &[&str]) -> Vec<ProofStep> {
        p.iter().map(|s| ProofStep::from(*s)).collect()
    }

    #[test]
    fn eq_refl() {
        let p = Prop::new();
        let (x, xe) = (p.x.clone(), p.v(&p.x));
        let thm = Theorem::new("T", p.eq(xe.clone(), xe.clone()));
        let mut verifier = Verifier::new(&thm, &p.ns, &p.fresh);
        assert_eq!(verifier.state(), State::Ready);
        verifier.step(ProofStep::Label("x".into())).unwrap();
        assert_eq!(verifier.state(), State::Running);
        assert_eq!(verifier.mandatory_stack().len(), 1);
        verifier.step("eq-refl".into()).unwrap();
        assert!(verifier.mandatory_stack().is_empty());
        let st = verifier.finish().unwrap();
        assert_eq!(verifier.state(), State::Accepted);
        assert_eq!(verifier.proof_stack().len(), 1);
        assert_eq!(verifier.proof_stack().get(0), Some(&p.eq(xe.clone(), xe)));
        assert!(!st.consequent().variables().contains(&x));

        // accepted proofs cannot be continued
        assert_eq!(verifier.step("x".into()).unwrap_err().reason, Reason::Finished);
        assert!(verifier.finish().is_ok());
    }

    #[test]
    fn literal_arguments() {
        let p = Prop::new();
        let y = p.v(&p.y);
        let thm = Theorem::new("T", p.eq(y.clone(), y.clone()));
        let proof = vec![ProofStep::from(y), "eq-refl".into()];
        assert!(verify(&thm, proof, &p.ns, &p.fresh, Config::default()).is_ok());
    }

    /// Proof of `|- a` from `a` and `a -> a -> a`.
    #[test]
    fn modus_ponens() {
        let p = Prop::new();
        let a = p.v(&p.a);
        let thm = Theorem::new("mpdup", a.clone())
            .hypothesis("h1", a.clone())
            .unwrap()
            .hypothesis("h2", p.imp(a.clone(), p.imp(a.clone(), a.clone())))
            .unwrap();
        let proof = steps(&["h1", "h1", "h2", "ax-mp", "ax-mp"]);
        let st = verify(&thm, proof, &p.ns, &p.fresh, Config::default()).unwrap();
        assert_eq!(st.hypotheses().len(), 2);
        assert!(st.mandatory().is_empty());

        // hypotheses in the wrong order
        let proof = steps(&["h2", "h1", "ax-mp"]);
        let err = verify(&thm, proof, &p.ns, &p.fresh, Config::default()).unwrap_err();
        assert_eq!(err.step, Some(2));
        assert!(matches!(err.reason, Reason::Unify { index: 1, .. }));
    }

    /// Proof of `|- a -> a` from the axioms `ax-1` and `ax-2`.
    #[test]
    fn identity() {
        let p = Prop::new();
        let a = p.v(&p.a);
        let aa = p.imp(a.clone(), a.clone());
        let proof: Vec<ProofStep> = vec![
            a.clone().into(),
            a.clone().into(),
            "ax-1".into(),
            a.clone().into(),
            aa.clone().into(),
            "ax-1".into(),
            a.clone().into(),
            aa.clone().into(),
            a.clone().into(),
            "ax-2".into(),
            "ax-mp".into(),
            "ax-mp".into(),
        ];
        let thm = Theorem::new("id", aa);
        let mut verifier = Verifier::new(&thm, &p.ns, &p.fresh);
        for step in proof.iter().take(6).cloned() {
            verifier.step(step).unwrap();
        }
        assert_eq!(verifier.proof_stack().len(), 2);
        assert!(verifier.required().is_empty());
        verify(&thm, proof.clone(), &p.ns, &p.fresh, Config::default()).unwrap();

        // the consequent may be stated with definitions
        let thm = Theorem::new("id", p.imp(p.id(a.clone()), a));
        verify(&thm, proof, &p.ns, &p.fresh, Config::default()).unwrap();
    }

    #[test]
    fn mandatory_not_empty() {
        let p = Prop::new();
        let a = p.v(&p.a);
        let thm = Theorem::new("T", a.clone()).hypothesis("h", a.clone()).unwrap();
        let proof: Vec<ProofStep> = vec![a.clone().into(), "h".into()];
        let err = verify(&thm, proof, &p.ns, &p.fresh, Config::default()).unwrap_err();
        assert_eq!(
            err,
            Reject {
                step: Some(1),
                reason: Reason::MandatoryNotEmpty {
                    label: "h".into(),
                    pending: 1
                }
            }
        );
    }

    #[test]
    fn self_reference() {
        let p = Prop::new();
        let a = p.v(&p.a);
        let thm = Theorem::new("ax-mp", a.clone()).hypothesis("h", a).unwrap();
        let mut verifier = Verifier::new(&thm, &p.ns, &p.fresh);
        verifier.step("h".into()).unwrap();
        let err = verifier.step("ax-mp".into()).unwrap_err();
        assert_eq!(err.reason, Reason::SelfReference("ax-mp".into()));
        assert_eq!(verifier.proof_stack().len(), 1);
        assert_eq!(verifier.state(), State::Rejected);
        // rejection is terminal
        assert_eq!(verifier.step("h".into()), Err(err.clone()));
        assert_eq!(verifier.finish().unwrap_err(), err);
    }

    #[test]
    fn dv_violation() {
        let p = Prop::new();
        let (z, x) = (p.v(&p.z), p.v(&p.x));
        // ax-dv: x = y with x, y distinct
        let fz = p.f(z.clone());
        let gz = p.g(z);
        let thm = Theorem::new("T", p.eq(fz.clone(), gz.clone()));
        let proof: Vec<ProofStep> = vec![fz.clone().into(), gz.into(), "ax-dv".into()];
        let err = verify(&thm, proof, &p.ns, &p.fresh, Config::default()).unwrap_err();
        assert_eq!(err.step, Some(2));
        assert!(matches!(
            err.reason,
            Reason::Dv {
                error: dv::Error::Overlap { .. },
                ..
            }
        ));

        // with different variables, the constraint must be declared
        let gx = p.g(x);
        let thm = Theorem::new("T", p.eq(fz.clone(), gx.clone()));
        let proof = || -> Vec<ProofStep> { vec![fz.clone().into(), gx.clone().into(), "ax-dv".into()] };
        let err = verify(&thm, proof(), &p.ns, &p.fresh, Config::default()).unwrap_err();
        assert_eq!(err.step, None);
        assert_eq!(
            err.reason,
            Reason::InsufficientDv(vec![if p.x < p.z {
                (p.x.clone(), p.z.clone())
            } else {
                (p.z.clone(), p.x.clone())
            }])
        );

        let config = Config {
            check_dv: false,
            ..Config::default()
        };
        assert!(verify(&thm, proof(), &p.ns, &p.fresh, config).is_ok());

        let mut thm = thm;
        thm.dv.declare(&[p.x.clone(), p.z.clone()]).unwrap();
        assert!(verify(&thm, proof(), &p.ns, &p.fresh, Config::default()).is_ok());
    }

    /// Literals keep their definitions on the mandatory stack,
    /// so DV constraints do not see the dummies hidden in them.
    #[test]
    fn literal_definitions() {
        let p = Prop::new();
        let t = p.taut();
        let thm = Theorem::new("T", p.imp(t.clone(), t.clone()));
        let mut verifier = Verifier::new(&thm, &p.ns, &p.fresh);
        verifier.step(t.clone().into()).unwrap();
        assert_eq!(verifier.mandatory_stack().get(0), Some(&t));
        verifier.step(t.clone().into()).unwrap();
        // ax-dv2: a -> b with a, b distinct
        verifier.step("ax-dv2".into()).unwrap();
        assert!(verifier.required().is_empty());
        verifier.finish().unwrap();

        // variables of literals are still constrained
        let (a, b) = (p.id(p.v(&p.a)), p.id(p.v(&p.b)));
        let mut thm = Theorem::new("T", p.imp(a.clone(), b.clone()));
        thm.dv.declare(&[p.a.clone(), p.b.clone()]).unwrap();
        let mut verifier = Verifier::new(&thm, &p.ns, &p.fresh);
        verifier.step(a.into()).unwrap();
        verifier.step(b.into()).unwrap();
        verifier.step("ax-dv2".into()).unwrap();
        assert!(verifier.required().contains(&p.a, &p.b));
        verifier.finish().unwrap();
    }

    #[test]
    fn stacks_at_end() {
        let p = Prop::new();
        let a = p.v(&p.a);
        let thm = Theorem::new("T", a.clone()).hypothesis("h", a.clone()).unwrap();
        let run = |proof: Vec<ProofStep>| {
            verify(&thm, proof, &p.ns, &p.fresh, Config::default())
                .unwrap_err()
                .reason
        };
        assert_eq!(run(vec![]), Reason::EmptyProof);
        assert_eq!(
            run(steps(&["h", "h"])),
            Reason::StacksNotEmpty {
                proof: 2,
                mandatory: 0
            }
        );
        assert_eq!(
            run(vec!["h".into(), a.clone().into()]),
            Reason::StacksNotEmpty {
                proof: 1,
                mandatory: 1
            }
        );
        assert_eq!(run(steps(&["foo"])), Reason::Unknown("foo".into()));
        assert!(matches!(
            run(steps(&["h", "ax-mp"])),
            Reason::MissingHypotheses {
                expected: 2,
                found: 1,
                ..
            }
        ));
        assert!(matches!(
            run(steps(&["eq-refl"])),
            Reason::MandatoryCount {
                expected: 1,
                found: 0,
                ..
            }
        ));
        assert!(matches!(
            run(vec![a.clone().into(), "eq-refl".into()]),
            Reason::KindMismatch { .. }
        ));
    }

    #[test]
    fn consequent_mismatch() {
        let p = Prop::new();
        let (a, b) = (p.v(&p.a), p.v(&p.b));
        let thm = Theorem::new("T", b).hypothesis("h", a).unwrap();
        let err = verify(&thm, steps(&["h"]), &p.ns, &p.fresh, Config::default()).unwrap_err();
        assert!(matches!(err.reason, Reason::ConsequentMismatch(_)));
    }

    /// The consequent `T` unfolds to `z -> z` for a dummy `z`,
    /// which may be proven for any variable outside the theorem.
    #[test]
    fn dummies() {
        let p = Prop::new();
        let (a, b) = (p.v(&p.a), p.v(&p.b));
        let thm = Theorem::new("T", p.taut());
        let proof = |v: &Expr| -> Vec<ProofStep> { vec![v.clone().into(), "imp-refl".into()] };
        verify(&thm, proof(&a), &p.ns, &p.fresh, Config::default()).unwrap();

        // dummies must not stand for variables of the theorem
        let thm = Theorem::new("T", p.taut()).hypothesis("h", b.clone()).unwrap();
        let err = verify(&thm, proof(&b), &p.ns, &p.fresh, Config::default());
        assert!(matches!(
            err.unwrap_err().reason,
            Reason::ConsequentMismatch(unify::Error::Blacklisted(..))
        ));
    }

    #[test]
    fn fuel() {
        let p = Prop::new();
        let a = p.v(&p.a);
        // the hypothesis is unfolded on the proof stack, the consequent is not
        let thm = Theorem::new("T", p.iff(a.clone(), a.clone()))
            .hypothesis("h", p.iff(a.clone(), a))
            .unwrap();
        let config = |fuel| Config {
            fuel,
            ..Config::default()
        };
        let err = verify(&thm, steps(&["h"]), &p.ns, &p.fresh, config(Some(1))).unwrap_err();
        assert_eq!(
            err.reason,
            Reason::ConsequentMismatch(unify::Error::FuelExhausted)
        );
        assert!(verify(&thm, steps(&["h"]), &p.ns, &p.fresh, config(Some(2))).is_ok());
        assert!(verify(&thm, steps(&["h"]), &p.ns, &p.fresh, config(None)).is_ok());
    }

    #[test]
    fn concurrent() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Namespace>();
        assert_send_sync::<Theorem>();
        assert_send_sync::<Fresh>();
    }
}
